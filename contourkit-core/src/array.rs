//! Named multi-component data arrays.

use crate::error::{Error, Result};
use crate::scalars::{Scalar, ScalarArray, ScalarType};
use serde::{Deserialize, Serialize};

/// A named array of fixed-size tuples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataArray {
    pub name: String,
    pub num_components: usize,
    pub values: ScalarArray,
}

impl DataArray {
    /// Builds an array, checking that the buffer holds whole tuples.
    pub fn new(name: impl Into<String>, num_components: usize, values: ScalarArray) -> Result<Self> {
        let name = name.into();
        if num_components == 0 || values.len() % num_components != 0 {
            return Err(Error::InvalidData(format!(
                "array '{}' has {} values, not a multiple of {} components",
                name,
                values.len(),
                num_components
            )));
        }
        Ok(Self { name, num_components, values })
    }

    /// Single-component array from a typed buffer.
    pub fn from_scalars<T: Scalar>(name: impl Into<String>, values: Vec<T>) -> Self
    where
        ScalarArray: From<Vec<T>>,
    {
        Self { name: name.into(), num_components: 1, values: ScalarArray::from(values) }
    }

    /// Empty array with the given schema.
    pub fn empty(name: impl Into<String>, scalar_type: ScalarType, num_components: usize) -> Self {
        Self {
            name: name.into(),
            num_components: num_components.max(1),
            values: ScalarArray::with_type(scalar_type),
        }
    }

    /// Empty array with the same name, element type and tuple size.
    pub fn empty_like(other: &DataArray) -> Self {
        Self::empty(other.name.clone(), other.scalar_type(), other.num_components)
    }

    pub fn scalar_type(&self) -> ScalarType {
        self.values.scalar_type()
    }

    pub fn num_tuples(&self) -> usize {
        self.values.len() / self.num_components.max(1)
    }

    pub fn component(&self, tuple: usize, component: usize) -> f64 {
        self.values.get_f64(tuple * self.num_components + component)
    }

    pub fn tuple(&self, tuple: usize) -> Vec<f64> {
        (0..self.num_components).map(|c| self.component(tuple, c)).collect()
    }

    /// Writes a tuple at `tuple`, growing the array if needed.
    pub fn set_tuple(&mut self, tuple: usize, values: &[f64]) {
        let base = tuple * self.num_components;
        for (c, value) in values.iter().take(self.num_components).enumerate() {
            self.values.set_f64(base + c, *value);
        }
    }

    pub fn push_tuple(&mut self, values: &[f64]) {
        let n = self.num_tuples();
        self.set_tuple(n, values);
    }

    /// One component of every tuple, widened to `f64`.
    pub fn extract_component(&self, component: usize) -> Result<Vec<f64>> {
        if component >= self.num_components {
            return Err(Error::InvalidData(format!(
                "component {} requested from array '{}' with {} components",
                component, self.name, self.num_components
            )));
        }
        Ok((0..self.num_tuples()).map(|t| self.component(t, component)).collect())
    }

    /// Smallest and largest value of one component.
    pub fn range(&self, component: usize) -> Option<(f64, f64)> {
        (0..self.num_tuples())
            .map(|t| self.component(t, component))
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}
