//! Cell-by-cell boundary walk for any dataset.
//!
//! Cells of dimension 0 to 2 are copied as they are. A face of a 3D cell is
//! on the boundary when no visible cell shares it, found by querying the
//! point-to-cell links. Every emitted cell gets its own copy of its points.

use crate::builder::SurfaceBuilder;
use crate::config::SurfaceConfig;
use crate::unstructured::ProgressCallback;
use contourkit_core::{CellLinks, CellType, DataSet, Error, PolyData, Result};

pub fn dataset_surface(input: &DataSet, config: &SurfaceConfig, progress: ProgressCallback<'_>) -> Result<PolyData> {
    let num_cells = input.number_of_cells();
    let mut builder = SurfaceBuilder::new(input, config, true);
    if num_cells == 0 {
        return Ok(builder.finish(config));
    }

    let links = CellLinks::build(input);
    let interval = num_cells / 20 + 1;
    let mut face = Vec::new();
    let mut out_ids = Vec::new();

    for cell_id in 0..num_cells {
        if cell_id % interval == 0 && !progress(cell_id as f64 / num_cells as f64) {
            return Err(Error::Aborted);
        }
        if !input.is_cell_visible(cell_id) {
            continue;
        }

        let (cell_type, ids) = input.cell(cell_id);
        if cell_type.dimension() < 3 {
            out_ids.clear();
            for &p in &ids {
                out_ids.push(builder.copy_point(p));
            }
            builder.insert_cell(cell_type, &out_ids, Some(cell_id));
            continue;
        }

        for local in cell_type.faces() {
            face.clear();
            face.extend(local.iter().map(|&l| ids[l]));
            // Faces whose only neighbours are blanked count as boundary.
            let shared = links
                .cell_neighbors(cell_id, &face)
                .into_iter()
                .any(|neighbor| input.is_cell_visible(neighbor));
            if shared {
                continue;
            }
            out_ids.clear();
            for &p in &face {
                out_ids.push(builder.copy_point(p));
            }
            builder.insert_cell(CellType::polygon_for(face.len()), &out_ids, Some(cell_id));
        }
    }

    let out = builder.finish(config);
    log::debug!(
        "walked {} cells of {} into {} faces",
        num_cells,
        input.kind_name(),
        out.number_of_cells()
    );
    Ok(out)
}
