//! # contourkit surface
//!
//! Outer surfaces of datasets as polygonal meshes.
//!
//! Lattice inputs keep only the faces of their extent that lie on the
//! boundary of the whole extent, so pieces of a partitioned volume yield
//! disjoint pieces of one surface. Unstructured grids keep the faces of 3D
//! cells that no other cell shares.

pub(crate) mod builder;
pub mod config;
pub mod face_hash;
pub mod filter;
pub mod general;
pub mod geometry_filter;
pub mod structured;
pub mod unstructured;

// Re-export commonly used items
pub use config::*;
pub use face_hash::FaceHash;
pub use filter::DataSetSurfaceFilter;
pub use general::dataset_surface;
pub use geometry_filter::StructuredGridGeometryFilter;
pub use structured::structured_surface;
pub use unstructured::{unstructured_surface, ProgressCallback};
