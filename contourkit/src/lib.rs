//! # contourkit
//!
//! Isosurfaces, isolines and outer surfaces of scientific datasets.
//!
//! This is the umbrella crate that gathers the contourkit crates behind one
//! dependency. Use the individual crates for finer control over what gets
//! compiled.
//!
//! ## Features
//!
//! - **Core**: Lattice extents, typed arrays, attribute data and dataset kinds
//! - **Contour**: Synchronized templates contouring of images and curvilinear
//!   grids, threaded over pieces of the volume, plus implicit-function cutting
//! - **Surface**: Outer faces of lattices and unstructured grids, and
//!   sub-extent geometry of structured grids
//!
//! ## Quick Start
//!
//! ```rust
//! use contourkit::prelude::*;
//!
//! let mut image = ImageData::with_dimensions([9, 9, 9], [0.0; 3], [1.0; 3]);
//! let center = Point3d::new(4.0, 4.0, 4.0);
//! let distance: Vec<f64> = (0..image.number_of_points())
//!     .map(|id| (image.point(id) - center).norm())
//!     .collect();
//! image.set_point_scalars(DataArray::from_scalars("distance", distance))?;
//! let image: DataSet = image.into();
//!
//! let sphere = ContourFilter::new(ContourConfig::default().with_values(&[3.0])).try_execute(&image)?;
//! assert!(sphere.number_of_polys() > 0);
//!
//! let outer = DataSetSurfaceFilter::default().try_execute(&image)?;
//! assert_eq!(outer.number_of_polys(), 6 * 64);
//! # Ok::<(), contourkit::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `default`: Enables contour and surface
//! - `contour`: Contour filter, cutter and the synchronized templates kernels
//! - `surface`: Surface and structured geometry filters
//! - `all`: Enables all features

// Re-export core functionality
pub use contourkit_core::*;

// Re-export sub-crates
#[cfg(feature = "contour")]
pub use contourkit_contour as contour;

#[cfg(feature = "surface")]
pub use contourkit_surface as surface;

/// Convenient imports for common use cases
pub mod prelude {
    pub use contourkit_core::{
        BlockExtentTranslator, CellType, DataArray, DataSet, Error, Extent, ExtentTranslator, ImageData,
        Point3d, PolyData, RectilinearGrid, Result, StructuredGrid, UnstructuredGrid, Vector3d,
    };

    #[cfg(feature = "contour")]
    pub use contourkit_contour::{
        ContourConfig, ContourFilter, ContourValues, Cutter, CutterConfig, ImplicitFunction, Plane, Sphere,
        ThreadPoolConfig,
    };

    #[cfg(feature = "surface")]
    pub use contourkit_surface::{
        DataSetSurfaceFilter, GeometryFilterConfig, StructuredGridGeometryFilter, SurfaceConfig,
    };
}
