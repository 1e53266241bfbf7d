//! Core data model for contourkit
//!
//! Lattice extents and their partitioning, typed sample arrays, point and
//! cell attribute containers, and the dataset kinds consumed and produced by
//! the contour and surface filters.

pub mod array;
pub mod attributes;
pub mod cell;
pub mod dataset;
pub mod error;
pub mod extent;
pub mod links;
pub mod polydata;
pub mod scalars;
pub mod translator;

pub use array::*;
pub use attributes::*;
pub use cell::*;
pub use dataset::*;
pub use error::*;
pub use extent::*;
pub use links::*;
pub use polydata::*;
pub use scalars::*;
pub use translator::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Matrix3, Point3, Vector3};

/// A 3D point with double precision coordinates
pub type Point3d = Point3<f64>;

/// A 3D vector with double precision components
pub type Vector3d = Vector3<f64>;
