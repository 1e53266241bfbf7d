//! Geometry of a sub-extent of a structured grid.

use crate::builder::SurfaceBuilder;
use crate::config::{GeometryFilterConfig, SurfaceConfig};
use contourkit_core::{CellType, DataSet, Error, Extent, PolyData, Result, StructuredGrid};

/// Extracts a sub-extent of a structured grid as vertices, lines or quads.
///
/// A single point gives a vertex, a row of points gives line segments and
/// a plane gives quads, each cell carrying the data of the grid cell it
/// lies on. A 3D sub-extent gives one vertex per point. Blanked cells and
/// points are left out.
#[derive(Debug, Clone, Default)]
pub struct StructuredGridGeometryFilter {
    pub config: GeometryFilterConfig,
}

impl StructuredGridGeometryFilter {
    pub fn new(config: GeometryFilterConfig) -> Self {
        Self { config }
    }

    /// Extracts `input`, logging any failure and returning an empty mesh.
    pub fn execute(&self, input: &DataSet) -> PolyData {
        self.try_execute(input).unwrap_or_else(|e| {
            log::error!("extracting geometry of {} failed: {}", input.kind_name(), e);
            PolyData::new()
        })
    }

    pub fn try_execute(&self, input: &DataSet) -> Result<PolyData> {
        let DataSet::Structured(grid) = input else {
            return Err(Error::Unsupported(format!(
                "structured grid geometry of {}",
                input.kind_name()
            )));
        };
        input.validate_attributes()?;
        let ext = grid.extent().intersect(&self.config.extent);
        let settings = SurfaceConfig::default();
        if ext.is_empty() {
            log::warn!("extent {} does not overlap the grid extent {}", self.config.extent, grid.extent());
            return Ok(PolyData::new());
        }

        let dimension = ext.dimensionality();
        let mut builder = SurfaceBuilder::new(input, &settings, dimension < 3);
        match dimension {
            0 => vertex(&mut builder, grid, &ext),
            1 => lines(&mut builder, grid, &ext),
            2 => quads(&mut builder, grid, &ext),
            _ => point_cloud(&mut builder, grid, &ext),
        }
        Ok(builder.finish(&settings))
    }
}

/// Id of the grid cell holding the sub-extent cell at `ijk`.
///
/// Axes flattened by the sub-extent but not by the grid use the layer of
/// cells next to the points, stepping back at the grid's upper end.
fn grid_cell_id(grid: &StructuredGrid, ext: &Extent, mut ijk: [i32; 3]) -> usize {
    let whole = grid.extent();
    for axis in 0..3 {
        if ext.is_degenerate(axis) && !whole.is_degenerate(axis) {
            ijk[axis] = ijk[axis].min(whole.max(axis) - 1);
        }
    }
    whole.cell_id(ijk)
}

/// Copies every point of `ext` and returns the output id of the first.
fn copy_points(builder: &mut SurfaceBuilder<'_>, grid: &StructuredGrid, ext: &Extent) -> usize {
    let start = builder.out.number_of_points();
    for id in 0..ext.num_points() {
        builder.copy_point(grid.extent().point_id(ext.point_ijk(id)));
    }
    start
}

fn vertex(builder: &mut SurfaceBuilder<'_>, grid: &StructuredGrid, ext: &Extent) {
    let ijk = [ext.min(0), ext.min(1), ext.min(2)];
    let point = grid.extent().point_id(ijk);
    if grid.is_point_visible(point) {
        let p = builder.copy_point(point);
        builder.insert_cell(CellType::Vertex, &[p], Some(grid_cell_id(grid, ext, ijk)));
    }
}

fn lines(builder: &mut SurfaceBuilder<'_>, grid: &StructuredGrid, ext: &Extent) {
    let axis = ext.non_degenerate_axes()[0];
    let start = copy_points(builder, grid, ext);
    for segment in 0..ext.axis_len(axis) - 1 {
        let mut ijk = [ext.min(0), ext.min(1), ext.min(2)];
        ijk[axis] += segment as i32;
        let cell = grid_cell_id(grid, ext, ijk);
        if grid.is_cell_visible(cell) {
            let p = start + segment;
            builder.insert_cell(CellType::Line, &[p, p + 1], Some(cell));
        }
    }
}

fn quads(builder: &mut SurfaceBuilder<'_>, grid: &StructuredGrid, ext: &Extent) {
    let axes = ext.non_degenerate_axes();
    let (a0, a1) = (axes[0], axes[1]);
    let start = copy_points(builder, grid, ext);
    let row = ext.axis_len(a0);
    for j in 0..ext.axis_len(a1) - 1 {
        for i in 0..row - 1 {
            let mut ijk = [ext.min(0), ext.min(1), ext.min(2)];
            ijk[a0] += i as i32;
            ijk[a1] += j as i32;
            let cell = grid_cell_id(grid, ext, ijk);
            if grid.is_cell_visible(cell) {
                let p = start + j * row + i;
                builder.insert_cell(CellType::Quad, &[p, p + 1, p + row + 1, p + row], Some(cell));
            }
        }
    }
}

fn point_cloud(builder: &mut SurfaceBuilder<'_>, grid: &StructuredGrid, ext: &Extent) {
    for id in 0..ext.num_points() {
        let point = grid.extent().point_id(ext.point_ijk(id));
        if grid.is_point_visible(point) {
            let p = builder.copy_point(point);
            builder.insert_cell(CellType::Vertex, &[p], None);
        }
    }
}
