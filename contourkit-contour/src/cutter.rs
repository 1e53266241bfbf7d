//! Cutting datasets with implicit functions.

use crate::config::{ContourOptions, ContourValues};
use crate::filter::Execution;
use crate::implicit::{ImplicitFunction, Plane};
use crate::parallel::{default_thread_count, ThreadPoolConfig, MAX_THREADS};
use contourkit_core::{BlockExtentTranslator, DataSet, Error, ExtentTranslator, PolyData, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Configuration of [`Cutter`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutterConfig {
    /// Function values to cut at.
    pub values: ContourValues,
    /// Emit the cut value as `"Scalars"` instead of interpolating the input
    /// scalars.
    pub generate_cut_scalars: bool,
    /// Emit triangles; otherwise the triangles of each cube are joined into
    /// polygons.
    pub generate_triangles: bool,
    pub number_of_threads: usize,
}

impl Default for CutterConfig {
    fn default() -> Self {
        Self {
            values: ContourValues::from_values(&[0.0]),
            generate_cut_scalars: false,
            generate_triangles: true,
            number_of_threads: default_thread_count(),
        }
    }
}

impl CutterConfig {
    pub fn with_values(mut self, values: &[f64]) -> Self {
        self.values = ContourValues::from_values(values);
        self
    }

    pub fn with_cut_scalars(mut self, enabled: bool) -> Self {
        self.generate_cut_scalars = enabled;
        self
    }

    pub fn with_triangles(mut self, enabled: bool) -> Self {
        self.generate_triangles = enabled;
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.number_of_threads = threads.clamp(1, MAX_THREADS);
        self
    }
}

/// Slices a lattice dataset where an implicit function takes the configured
/// values.
#[derive(Clone)]
pub struct Cutter {
    pub function: Arc<dyn ImplicitFunction>,
    pub config: CutterConfig,
    translator: Option<Arc<dyn ExtentTranslator>>,
}

impl std::fmt::Debug for Cutter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cutter")
            .field("function", &self.function)
            .field("config", &self.config)
            .finish()
    }
}

impl Default for Cutter {
    fn default() -> Self {
        Self::new(Arc::new(Plane::default()), CutterConfig::default())
    }
}

impl Cutter {
    pub fn new(function: Arc<dyn ImplicitFunction>, config: CutterConfig) -> Self {
        Self {
            function,
            config,
            translator: Some(Arc::new(BlockExtentTranslator::default())),
        }
    }

    pub fn with_translator(mut self, translator: Option<Arc<dyn ExtentTranslator>>) -> Self {
        self.translator = translator;
        self
    }

    /// Cuts `input`, logging any failure and returning an empty mesh.
    pub fn execute(&self, input: &DataSet) -> PolyData {
        self.try_execute(input).unwrap_or_else(|e| {
            log::error!("cutting {} failed: {}", input.kind_name(), e);
            PolyData::new()
        })
    }

    pub fn try_execute(&self, input: &DataSet) -> Result<PolyData> {
        if input.extents().is_none() {
            return Err(Error::Unsupported(format!(
                "cutting {} requires a generic cut algorithm",
                input.kind_name()
            )));
        }
        if self.config.values.is_empty() || input.number_of_points() == 0 {
            return Ok(PolyData::new());
        }
        input.validate_attributes()?;

        let samples: Vec<f64> = (0..input.number_of_points())
            .map(|id| self.function.evaluate(&input.point(id)))
            .collect();

        let mut options = ContourOptions::new(self.config.values.values());
        options.compute_scalars = self.config.generate_cut_scalars;
        options.generate_triangles = self.config.generate_triangles;
        if self.config.generate_cut_scalars {
            options.skip_point_array = input.point_data().active_scalars.clone();
        }
        let pool = ThreadPoolConfig::default().with_threads(self.config.number_of_threads);
        let run = Execution {
            options: &options,
            pool: &pool,
            translator: self.translator.as_deref(),
            execute_extent: None,
        };
        run.contour(input, &samples)
    }
}
