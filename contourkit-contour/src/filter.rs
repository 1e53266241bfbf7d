//! Contour filter: picks the contourer for a dataset and runs it.

use crate::config::{ContourConfig, ContourOptions};
use crate::field::ScalarField;
use crate::parallel::{execute_pieces, ThreadPoolConfig};
use crate::synchronized_2d::{contour_grid_2d, contour_image_2d};
use crate::synchronized_3d::{contour_grid, contour_image};
use contourkit_core::{
    dispatch_scalars, BlockExtentTranslator, DataArray, DataSet, Error, Extent, ExtentTranslator,
    PolyData, Result, Scalar, StructuredGrid,
};
use std::sync::Arc;

/// Isosurfaces and isolines of lattice datasets.
///
/// Volumes are contoured in parallel, one piece of the execution extent per
/// thread; planes are contoured on the calling thread.
#[derive(Clone)]
pub struct ContourFilter {
    pub config: ContourConfig,
    translator: Option<Arc<dyn ExtentTranslator>>,
}

impl std::fmt::Debug for ContourFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContourFilter")
            .field("config", &self.config)
            .field("translator", &self.translator.is_some())
            .finish()
    }
}

impl Default for ContourFilter {
    fn default() -> Self {
        Self::new(ContourConfig::default())
    }
}

impl ContourFilter {
    pub fn new(config: ContourConfig) -> Self {
        Self {
            config,
            translator: Some(Arc::new(BlockExtentTranslator::default())),
        }
    }

    /// Replaces the partitioning scheme. With `None` threaded runs fall back
    /// to a single piece covering the whole extent.
    pub fn with_translator(mut self, translator: Option<Arc<dyn ExtentTranslator>>) -> Self {
        self.translator = translator;
        self
    }

    pub fn translator(&self) -> Option<&dyn ExtentTranslator> {
        self.translator.as_deref()
    }

    /// Extent the filter reads to produce `update`: one extra layer of
    /// points when gradients are needed.
    pub fn required_input_extent(&self, update: &Extent, whole: &Extent) -> Extent {
        if self.config.needs_gradients() {
            update.grow_clamped(1, whole)
        } else {
            *update
        }
    }

    pub fn set_input_memory_limit(&mut self, _limit: u64) {
        log::error!("input memory limits are no longer supported");
    }

    pub fn input_memory_limit(&self) -> u64 {
        log::error!("input memory limits are no longer supported");
        0
    }

    /// Contours `input`, logging any failure and returning an empty mesh.
    pub fn execute(&self, input: &DataSet) -> PolyData {
        self.try_execute(input).unwrap_or_else(|e| {
            log::error!("contouring {} failed: {}", input.kind_name(), e);
            PolyData::new()
        })
    }

    pub fn try_execute(&self, input: &DataSet) -> Result<PolyData> {
        let array = self.input_scalars(input)?;
        input.validate_attributes()?;
        if self.config.values.is_empty() {
            return Ok(PolyData::new());
        }

        let options = self.config.options(Some(array.name.clone()));
        let pool = ThreadPoolConfig::default().with_threads(self.config.number_of_threads);
        let run = Execution {
            options: &options,
            pool: &pool,
            translator: self.translator(),
            execute_extent: self.config.execute_extent,
        };

        if array.num_components > 1 || self.config.array_component > 0 {
            let staged = array.extract_component(self.config.array_component)?;
            run.contour(input, &staged)
        } else {
            dispatch_scalars!(&array.values, values => run.contour(input, values.as_slice()))
        }
    }

    fn input_scalars<'a>(&self, input: &'a DataSet) -> Result<&'a DataArray> {
        let point_data = input.point_data();
        match &self.config.scalar_array {
            Some(name) => point_data
                .array(name)
                .ok_or_else(|| Error::MissingScalars(format!("no point array named '{}'", name))),
            None => point_data
                .scalars()
                .or_else(|| point_data.arrays().first())
                .ok_or_else(|| Error::MissingScalars(format!("{} has no point scalars", input.kind_name()))),
        }
    }
}

/// Everything a lattice contour run needs besides the data.
pub(crate) struct Execution<'a> {
    pub options: &'a ContourOptions,
    pub pool: &'a ThreadPoolConfig,
    pub translator: Option<&'a dyn ExtentTranslator>,
    pub execute_extent: Option<Extent>,
}

impl Execution<'_> {
    /// Routes `dataset` to the contourer matching its kind and the
    /// dimensionality of the execution extent. `values` holds one sample per
    /// point of the dataset.
    pub(crate) fn contour<T: Scalar>(&self, dataset: &DataSet, values: &[T]) -> Result<PolyData> {
        match dataset {
            DataSet::Image(image) => {
                let field = ScalarField::new(values, *image.extent())?;
                let Some(exec) = self.clip(image.extent()) else {
                    return Ok(PolyData::new());
                };
                match exec.dimensionality() {
                    3 => self.threaded(&exec, |piece| contour_image(image, &field, piece, self.options)),
                    2 => contour_image_2d(image, &field, &exec, self.options),
                    d => Err(unsupported(d, dataset)),
                }
            }
            DataSet::Structured(grid) => self.contour_grid(grid, values, dataset),
            DataSet::Rectilinear(rectilinear) => {
                let grid = rectilinear.to_structured_grid();
                self.contour_grid(&grid, values, dataset)
            }
            DataSet::Unstructured(_) | DataSet::Poly(_) => Err(Error::Unsupported(format!(
                "contouring {} requires a generic contour algorithm",
                dataset.kind_name()
            ))),
        }
    }

    fn contour_grid<T: Scalar>(&self, grid: &StructuredGrid, values: &[T], dataset: &DataSet) -> Result<PolyData> {
        let field = ScalarField::new(values, *grid.extent())?;
        let Some(exec) = self.clip(grid.extent()) else {
            return Ok(PolyData::new());
        };
        match exec.dimensionality() {
            3 => self.threaded(&exec, |piece| contour_grid(grid, &field, piece, self.options)),
            2 => contour_grid_2d(grid, &field, &exec, self.options),
            d => Err(unsupported(d, dataset)),
        }
    }

    fn clip(&self, data: &Extent) -> Option<Extent> {
        let exec = match &self.execute_extent {
            Some(requested) => data.intersect(requested),
            None => *data,
        };
        (!exec.is_empty()).then_some(exec)
    }

    fn threaded<F>(&self, exec: &Extent, body: F) -> Result<PolyData>
    where
        F: Fn(&Extent) -> Result<PolyData> + Sync,
    {
        let dimension = exec.dimensionality();
        execute_pieces(self.pool, exec, self.translator, |piece| {
            // Pieces flattened by the split have no cells of their own.
            if piece.dimensionality() < dimension {
                return Ok(PolyData::new());
            }
            body(piece)
        })
    }
}

fn unsupported(dimension: usize, dataset: &DataSet) -> Error {
    Error::Unsupported(format!("{}-dimensional {}", dimension, dataset.kind_name()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emitter::{NORMALS_NAME, SCALARS_NAME};
    use contourkit_core::{ImageData, Point3d, RectilinearGrid, UnstructuredGrid};

    fn spike(dims: [usize; 3]) -> ImageData {
        let mut image = ImageData::with_dimensions(dims, [0.0; 3], [1.0; 3]);
        let center = image.extent().point_id([dims[0] as i32 / 2, dims[1] as i32 / 2, dims[2] as i32 / 2]);
        let mut values = vec![0.0f32; image.number_of_points()];
        values[center] = 1.0;
        image.set_point_scalars(DataArray::from_scalars("density", values)).unwrap();
        image
    }

    fn single_threaded(values: &[f64]) -> ContourFilter {
        ContourFilter::new(ContourConfig::default().with_values(values).with_threads(1))
    }

    #[test]
    fn test_image_volume() {
        let out = single_threaded(&[0.5]).execute(&spike([3, 3, 3]).into());
        assert_eq!(out.number_of_points(), 6);
        assert_eq!(out.number_of_polys(), 8);
        assert!(out.point_data.array(NORMALS_NAME).is_some());
        assert!(out.point_data.array(SCALARS_NAME).is_some());
        assert!(out.point_data.array("density").is_none());
    }

    #[test]
    fn test_image_plane_gives_lines() {
        let out = single_threaded(&[0.5]).execute(&spike([3, 3, 1]).into());
        assert_eq!(out.number_of_lines(), 4);
        assert_eq!(out.number_of_polys(), 0);
        assert!(out.point_data.array(NORMALS_NAME).is_none());
    }

    #[test]
    fn test_rectilinear_uses_explicit_coordinates() {
        let extent = Extent::new(0, 2, 0, 2, 0, 2);
        let axis = vec![0.0, 1.0, 4.0];
        let mut grid = RectilinearGrid::new(extent, [axis.clone(), axis.clone(), axis]).unwrap();
        let mut values = vec![0.0f64; 27];
        values[13] = 1.0;
        grid.point_data.set_scalars(DataArray::from_scalars("s", values));

        let out = single_threaded(&[0.5]).execute(&grid.into());
        assert_eq!(out.number_of_polys(), 8);
        assert!(out.points.iter().any(|p| (p - Point3d::new(1.0, 1.0, 2.5)).norm() < 1e-12));
    }

    #[test]
    fn test_missing_scalars() {
        let image = ImageData::with_dimensions([2, 2, 2], [0.0; 3], [1.0; 3]);
        let filter = single_threaded(&[0.5]);
        assert!(matches!(filter.try_execute(&image.clone().into()), Err(Error::MissingScalars(_))));
        assert!(filter.execute(&image.into()).is_empty());

        let named = ContourFilter::new(ContourConfig::default().with_values(&[0.5]).with_scalar_array("pressure"));
        assert!(matches!(named.try_execute(&spike([3, 3, 3]).into()), Err(Error::MissingScalars(_))));
    }

    #[test]
    fn test_short_attribute_arrays_are_rejected() {
        let mut image = spike([3, 3, 3]);
        image.point_data.add_array(DataArray::from_scalars("extra", vec![1.0f32, 2.0, 3.0]));
        let filter = single_threaded(&[0.5]);
        let input: DataSet = image.into();
        assert!(matches!(filter.try_execute(&input), Err(Error::InvalidData(_))));
        assert!(filter.execute(&input).is_empty());

        let mut image = spike([3, 3, 3]);
        image.cell_data.add_array(DataArray::from_scalars("material", vec![1u8, 2]));
        let threaded = ContourFilter::new(ContourConfig::default().with_values(&[0.5]).with_threads(2));
        let input: DataSet = image.into();
        assert!(matches!(threaded.try_execute(&input), Err(Error::InvalidData(_))));
        assert!(threaded.execute(&input).is_empty());
    }

    #[test]
    fn test_no_values_gives_empty_output() {
        let filter = ContourFilter::new(ContourConfig::default().with_threads(1));
        assert!(filter.try_execute(&spike([3, 3, 3]).into()).unwrap().is_empty());
    }

    #[test]
    fn test_unstructured_is_unsupported() {
        let mut grid = UnstructuredGrid::new(vec![Point3d::origin()]);
        grid.point_data.set_scalars(DataArray::from_scalars("s", vec![1.0f32]));
        let result = single_threaded(&[0.5]).try_execute(&grid.into());
        assert!(matches!(result, Err(Error::Unsupported(_))));
    }

    #[test]
    fn test_execute_extent_is_clipped() {
        let config = ContourConfig::default()
            .with_values(&[0.5])
            .with_threads(1)
            .with_execute_extent(Extent::new(0, 1, 0, 2, 0, 2));
        let out = ContourFilter::new(config).execute(&spike([3, 3, 3]).into());
        // Half of the octahedron.
        assert_eq!(out.number_of_polys(), 4);

        let outside = ContourConfig::default()
            .with_values(&[0.5])
            .with_threads(1)
            .with_execute_extent(Extent::new(10, 12, 0, 2, 0, 2));
        assert!(ContourFilter::new(outside).execute(&spike([3, 3, 3]).into()).is_empty());
    }

    #[test]
    fn test_required_input_extent() {
        let whole = Extent::new(0, 9, 0, 9, 0, 9);
        let update = Extent::new(0, 4, 3, 5, 5, 9);
        let filter = ContourFilter::default();
        assert_eq!(filter.required_input_extent(&update, &whole), Extent::new(0, 5, 2, 6, 4, 9));

        let plain = ContourFilter::new(ContourConfig::default().with_normals(false));
        assert_eq!(plain.required_input_extent(&update, &whole), update);
    }

    #[test]
    fn test_memory_limit_is_a_no_op() {
        let mut filter = ContourFilter::default();
        filter.set_input_memory_limit(1 << 20);
        assert_eq!(filter.input_memory_limit(), 0);
    }
}
