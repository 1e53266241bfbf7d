//! Contour values and filter configuration.

use crate::parallel::{default_thread_count, MAX_THREADS};
use contourkit_core::Extent;
use serde::{Deserialize, Serialize};

/// Ordered list of iso-values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContourValues {
    values: Vec<f64>,
}

impl ContourValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_values(values: &[f64]) -> Self {
        Self { values: values.to_vec() }
    }

    /// Sets value `index`, padding any gap with zeros.
    pub fn set_value(&mut self, index: usize, value: f64) {
        if index >= self.values.len() {
            self.values.resize(index + 1, 0.0);
        }
        self.values[index] = value;
    }

    pub fn value(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// Replaces the list with `count` values evenly spaced over `range`,
    /// both ends included. A single value sits at the low end.
    pub fn generate_values(&mut self, count: usize, range: [f64; 2]) {
        self.values.clear();
        if count == 1 {
            self.values.push(range[0]);
            return;
        }
        let step = if count > 1 { (range[1] - range[0]) / (count - 1) as f64 } else { 0.0 };
        self.values.extend((0..count).map(|i| range[0] + i as f64 * step));
    }

    pub fn set_number_of_contours(&mut self, count: usize) {
        self.values.resize(count, 0.0);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// Configuration of [`ContourFilter`](crate::ContourFilter).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContourConfig {
    pub values: ContourValues,
    /// Emit `"Normals"`, the negated normalized gradient, per output point.
    pub compute_normals: bool,
    /// Emit the blended `"Gradients"` per output point.
    pub compute_gradients: bool,
    /// Emit the iso-value as `"Scalars"` per output point.
    pub compute_scalars: bool,
    pub number_of_threads: usize,
    /// Point array to contour; the active scalars when unset.
    pub scalar_array: Option<String>,
    /// Component contoured when the array has several.
    pub array_component: usize,
    /// Restricts execution to this extent, clamped to the data.
    pub execute_extent: Option<Extent>,
    /// Reuse the point of a lattice sample lying exactly on the iso-value
    /// instead of emitting coincident points.
    pub merge_degenerate_points: bool,
    /// Emit triangles; otherwise the triangles of each cube are joined into
    /// polygons.
    pub generate_triangles: bool,
}

impl Default for ContourConfig {
    fn default() -> Self {
        Self {
            values: ContourValues::new(),
            compute_normals: true,
            compute_gradients: false,
            compute_scalars: true,
            number_of_threads: default_thread_count(),
            scalar_array: None,
            array_component: 0,
            execute_extent: None,
            merge_degenerate_points: true,
            generate_triangles: true,
        }
    }
}

impl ContourConfig {
    pub fn with_values(mut self, values: &[f64]) -> Self {
        self.values = ContourValues::from_values(values);
        self
    }

    pub fn with_normals(mut self, enabled: bool) -> Self {
        self.compute_normals = enabled;
        self
    }

    pub fn with_gradients(mut self, enabled: bool) -> Self {
        self.compute_gradients = enabled;
        self
    }

    pub fn with_scalars(mut self, enabled: bool) -> Self {
        self.compute_scalars = enabled;
        self
    }

    /// Thread count, clamped to `1..=MAX_THREADS`.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.number_of_threads = threads.clamp(1, MAX_THREADS);
        self
    }

    pub fn with_scalar_array(mut self, name: impl Into<String>) -> Self {
        self.scalar_array = Some(name.into());
        self
    }

    pub fn with_array_component(mut self, component: usize) -> Self {
        self.array_component = component;
        self
    }

    pub fn with_execute_extent(mut self, extent: Extent) -> Self {
        self.execute_extent = Some(extent);
        self
    }

    pub fn with_degenerate_merging(mut self, enabled: bool) -> Self {
        self.merge_degenerate_points = enabled;
        self
    }

    pub fn with_triangles(mut self, enabled: bool) -> Self {
        self.generate_triangles = enabled;
        self
    }

    pub fn needs_gradients(&self) -> bool {
        self.compute_normals || self.compute_gradients
    }

    pub(crate) fn options(&self, skip_point_array: Option<String>) -> ContourOptions {
        ContourOptions {
            values: self.values.values().to_vec(),
            compute_scalars: self.compute_scalars,
            compute_gradients: self.compute_gradients,
            compute_normals: self.compute_normals,
            merge_degenerate_points: self.merge_degenerate_points,
            generate_triangles: self.generate_triangles,
            skip_point_array,
        }
    }
}

/// Per-execution settings handed to the contourers.
#[derive(Debug, Clone, PartialEq)]
pub struct ContourOptions {
    pub values: Vec<f64>,
    pub compute_scalars: bool,
    pub compute_gradients: bool,
    pub compute_normals: bool,
    pub merge_degenerate_points: bool,
    pub generate_triangles: bool,
    /// Input point array that is not interpolated onto the output.
    pub skip_point_array: Option<String>,
}

impl ContourOptions {
    pub fn new(values: &[f64]) -> Self {
        Self {
            values: values.to_vec(),
            compute_scalars: true,
            compute_gradients: false,
            compute_normals: false,
            merge_degenerate_points: true,
            generate_triangles: true,
            skip_point_array: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_values() {
        let mut values = ContourValues::new();
        values.generate_values(5, [0.0, 1.0]);
        assert_eq!(values.values(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
        values.generate_values(1, [3.0, 9.0]);
        assert_eq!(values.values(), &[3.0]);
        values.generate_values(0, [3.0, 9.0]);
        assert!(values.is_empty());
    }

    #[test]
    fn test_set_value_pads() {
        let mut values = ContourValues::new();
        values.set_value(2, 4.0);
        assert_eq!(values.values(), &[0.0, 0.0, 4.0]);
        assert_eq!(values.value(2), Some(4.0));
        values.set_number_of_contours(1);
        assert_eq!(values.len(), 1);
    }

    #[test]
    fn test_config_builder() {
        let config = ContourConfig::default()
            .with_values(&[0.5])
            .with_threads(1000)
            .with_normals(false)
            .with_scalar_array("density");
        assert_eq!(config.number_of_threads, MAX_THREADS);
        assert!(!config.needs_gradients());
        assert_eq!(config.options(None).values, vec![0.5]);
        assert_eq!(config.scalar_array.as_deref(), Some("density"));
        assert!(config.options(None).generate_triangles);
        assert!(!config.with_triangles(false).options(None).generate_triangles);
    }
}
