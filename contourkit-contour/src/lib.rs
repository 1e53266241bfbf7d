//! # contourkit contour
//!
//! Isosurfaces and isolines of lattice datasets with synchronized templates.
//!
//! Uniform images and curvilinear grids are swept cell by cell with a
//! rolling buffer of edge intersections, so every crossing point is created
//! exactly once. Volumes are split into pieces that are contoured on a
//! thread pool and merged back in piece order.

pub mod config;
pub mod cutter;
pub mod edge_buffer;
mod emitter;
pub mod field;
pub mod filter;
pub mod implicit;
pub mod lattice;
pub mod merge;
pub mod parallel;
mod polygon_builder;
pub mod synchronized_2d;
pub mod synchronized_3d;
pub mod tables;

// Re-export commonly used items
pub use config::*;
pub use cutter::*;
pub use emitter::{GRADIENTS_NAME, NORMALS_NAME, SCALARS_NAME};
pub use field::*;
pub use filter::ContourFilter;
pub use implicit::*;
pub use lattice::*;
pub use merge::*;
pub use parallel::*;
pub use synchronized_2d::{contour_grid_2d, contour_image_2d};
pub use synchronized_3d::{contour_grid, contour_image};
