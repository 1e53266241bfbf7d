//! Outer surface of unstructured grids.

use crate::builder::SurfaceBuilder;
use crate::config::SurfaceConfig;
use crate::face_hash::FaceHash;
use contourkit_core::{CellType, DataSet, Error, PolyData, Result, UnstructuredGrid};

/// Progress in `[0, 1]`; returning `false` aborts the extraction.
pub type ProgressCallback<'a> = &'a mut dyn FnMut(f64) -> bool;

/// Emits each input point at most once, on first use.
struct PointMap<'a> {
    builder: SurfaceBuilder<'a>,
    map: Vec<Option<usize>>,
}

impl<'a> PointMap<'a> {
    fn output_id(&mut self, input_id: usize) -> usize {
        if let Some(id) = self.map[input_id] {
            return id;
        }
        let id = self.builder.copy_point(input_id);
        self.map[input_id] = Some(id);
        id
    }

    fn emit(&mut self, cell_type: CellType, input_ids: &[usize], source: usize) {
        let ids: Vec<usize> = input_ids.iter().map(|&p| self.output_id(p)).collect();
        self.builder.insert_cell(cell_type, &ids, Some(source));
    }
}

/// Reports progress every twentieth of the cells.
struct Progress<'a> {
    callback: ProgressCallback<'a>,
    interval: usize,
    total: usize,
}

impl Progress<'_> {
    fn check(&mut self, cell_id: usize) -> Result<()> {
        if cell_id % self.interval == 0 && !(self.callback)(cell_id as f64 / self.total as f64) {
            log::debug!("surface extraction aborted at cell {}", cell_id);
            return Err(Error::Aborted);
        }
        Ok(())
    }
}

/// Boundary of `grid`: vertices, lines and 2D cells pass through, and the
/// faces of 3D cells that no other cell shares are kept.
///
/// Output points are only those used by an output cell. Vertices come
/// first, then lines, then 2D cells, then boundary faces.
pub fn unstructured_surface(
    input: &DataSet,
    grid: &UnstructuredGrid,
    config: &SurfaceConfig,
    progress: ProgressCallback<'_>,
) -> Result<PolyData> {
    grid.validate_cells()?;
    input.validate_attributes()?;
    let num_cells = grid.number_of_cells();
    let mut points = PointMap {
        builder: SurfaceBuilder::new(input, config, true),
        map: vec![None; grid.number_of_points()],
    };
    let mut hash = FaceHash::new(grid.number_of_points());
    let mut progress = Progress {
        callback: progress,
        interval: num_cells / 20 + 1,
        total: num_cells.max(1),
    };

    for (cell_id, (cell_type, ids)) in grid.cells.iter().enumerate() {
        if cell_type.dimension() == 0 {
            points.emit(cell_type, ids, cell_id);
        }
    }

    let mut has_2d = false;
    for (cell_id, (cell_type, ids)) in grid.cells.iter().enumerate() {
        progress.check(cell_id)?;
        match cell_type.dimension() {
            0 => {}
            1 => points.emit(cell_type, ids, cell_id),
            2 => has_2d = true,
            _ => {
                let mut face = Vec::new();
                for local in cell_type.faces() {
                    face.clear();
                    face.extend(local.iter().map(|&l| ids[l]));
                    hash.insert(&face, cell_id);
                }
            }
        }
    }

    // 2D cells follow the lines so that cell data stays grouped by kind.
    if has_2d {
        for (cell_id, (cell_type, ids)) in grid.cells.iter().enumerate() {
            progress.check(cell_id)?;
            match cell_type {
                CellType::Pixel => points.emit(CellType::Quad, &[ids[0], ids[1], ids[3], ids[2]], cell_id),
                t if t.dimension() == 2 => points.emit(t, ids, cell_id),
                _ => {}
            }
        }
    }

    for (face, source) in hash.visible_faces() {
        points.emit(CellType::polygon_for(face.len()), face, source);
    }

    let out = points.builder.finish(config);
    log::debug!(
        "extracted {} points and {} cells from {} cells",
        out.number_of_points(),
        out.number_of_cells(),
        num_cells
    );
    Ok(out)
}
