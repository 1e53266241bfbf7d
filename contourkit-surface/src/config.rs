//! Surface and geometry filter configuration.

use contourkit_core::Extent;
use serde::{Deserialize, Serialize};

pub const ORIGINAL_POINT_IDS_NAME: &str = "OriginalPointIds";
pub const ORIGINAL_CELL_IDS_NAME: &str = "OriginalCellIds";

/// Configuration of [`DataSetSurfaceFilter`](crate::DataSetSurfaceFilter).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceConfig {
    /// Emit structured faces as triangle strips instead of quads. Strips
    /// carry no cell data.
    pub use_strips: bool,
    /// Attach the input id of every output point.
    pub pass_through_point_ids: bool,
    /// Attach the input id of every output cell.
    pub pass_through_cell_ids: bool,
    pub original_point_ids_name: String,
    pub original_cell_ids_name: String,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            use_strips: false,
            pass_through_point_ids: false,
            pass_through_cell_ids: false,
            original_point_ids_name: ORIGINAL_POINT_IDS_NAME.to_string(),
            original_cell_ids_name: ORIGINAL_CELL_IDS_NAME.to_string(),
        }
    }
}

impl SurfaceConfig {
    pub fn with_strips(mut self, enabled: bool) -> Self {
        self.use_strips = enabled;
        self
    }

    pub fn with_point_ids(mut self, enabled: bool) -> Self {
        self.pass_through_point_ids = enabled;
        self
    }

    pub fn with_cell_ids(mut self, enabled: bool) -> Self {
        self.pass_through_cell_ids = enabled;
        self
    }

    pub fn with_id_names(mut self, points: impl Into<String>, cells: impl Into<String>) -> Self {
        self.original_point_ids_name = points.into();
        self.original_cell_ids_name = cells.into();
        self
    }
}

/// Configuration of [`StructuredGridGeometryFilter`](crate::StructuredGridGeometryFilter).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeometryFilterConfig {
    /// Sub-extent to extract; clamped to the grid's extent.
    pub extent: Extent,
}

impl Default for GeometryFilterConfig {
    fn default() -> Self {
        Self { extent: Extent::new(0, i32::MAX, 0, i32::MAX, 0, i32::MAX) }
    }
}

impl GeometryFilterConfig {
    pub fn with_extent(mut self, extent: Extent) -> Self {
        self.extent = extent;
        self
    }
}
