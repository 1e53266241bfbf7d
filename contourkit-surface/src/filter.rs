//! Surface filter: picks the extractor for a dataset kind.

use crate::config::SurfaceConfig;
use crate::general::dataset_surface;
use crate::structured::structured_surface;
use crate::unstructured::{unstructured_surface, ProgressCallback};
use contourkit_core::{DataArray, DataSet, PolyData, Result};

/// Outer surface of any dataset as a polygonal mesh.
///
/// Lattices are handled face by face, unstructured grids through a face
/// hash, and blanked structured grids by walking their visible cells.
#[derive(Debug, Clone, Default)]
pub struct DataSetSurfaceFilter {
    pub config: SurfaceConfig,
}

impl DataSetSurfaceFilter {
    pub fn new(config: SurfaceConfig) -> Self {
        Self { config }
    }

    /// Extracts the surface of `input`, logging any failure and returning
    /// an empty mesh.
    pub fn execute(&self, input: &DataSet) -> PolyData {
        self.try_execute(input).unwrap_or_else(|e| {
            log::error!("extracting the surface of {} failed: {}", input.kind_name(), e);
            PolyData::new()
        })
    }

    pub fn try_execute(&self, input: &DataSet) -> Result<PolyData> {
        self.try_execute_with_progress(input, &mut |_| true)
    }

    /// Like [`try_execute`](Self::try_execute), polling `progress` while
    /// cells are visited. Returning `false` aborts with
    /// [`Error::Aborted`](contourkit_core::Error::Aborted).
    pub fn try_execute_with_progress(&self, input: &DataSet, progress: ProgressCallback<'_>) -> Result<PolyData> {
        if input.number_of_cells() == 0 {
            log::warn!("{} has no cells, surface is empty", input.kind_name());
            return Ok(PolyData::new());
        }
        input.validate_attributes()?;
        log::debug!(
            "extracting surface of {} with {} cells",
            input.kind_name(),
            input.number_of_cells()
        );

        match input {
            DataSet::Unstructured(grid) => unstructured_surface(input, grid, &self.config, progress),
            DataSet::Structured(grid) if grid.has_blanking() => dataset_surface(input, &self.config, progress),
            DataSet::Image(image) => Ok(structured_surface(input, image.extent(), image.whole_extent(), &self.config)),
            DataSet::Rectilinear(grid) => Ok(structured_surface(input, grid.extent(), grid.whole_extent(), &self.config)),
            DataSet::Structured(grid) => Ok(structured_surface(input, grid.extent(), grid.whole_extent(), &self.config)),
            DataSet::Poly(poly) => Ok(self.pass_through(poly)),
        }
    }

    /// Polygonal input is already a surface.
    fn pass_through(&self, poly: &PolyData) -> PolyData {
        let mut out = poly.clone();
        if self.config.pass_through_point_ids {
            let ids: Vec<u32> = (0..poly.number_of_points() as u32).collect();
            out.point_data
                .add_array(DataArray::from_scalars(self.config.original_point_ids_name.clone(), ids));
        }
        if self.config.pass_through_cell_ids {
            let ids: Vec<u32> = (0..poly.number_of_cells() as u32).collect();
            out.cell_data
                .add_array(DataArray::from_scalars(self.config.original_cell_ids_name.clone(), ids));
        }
        out
    }
}
