//! Read-only views over sampled scalar fields.

use contourkit_core::{Error, Extent, Result, Scalar};

/// Single-component samples laid out x fastest over `extent`.
#[derive(Debug, Clone, Copy)]
pub struct ScalarField<'a, T> {
    values: &'a [T],
    extent: Extent,
    increments: [usize; 3],
}

impl<'a, T: Scalar> ScalarField<'a, T> {
    pub fn new(values: &'a [T], extent: Extent) -> Result<Self> {
        if values.len() != extent.num_points() {
            return Err(Error::InvalidData(format!(
                "{} samples for extent {} with {} points",
                values.len(),
                extent,
                extent.num_points()
            )));
        }
        let dims = extent.dims();
        Ok(Self { values, extent, increments: [1, dims[0], dims[0] * dims[1]] })
    }

    /// Extent of the samples, which bounds every neighbour lookup.
    pub fn extent(&self) -> &Extent {
        &self.extent
    }

    pub fn increments(&self) -> [usize; 3] {
        self.increments
    }

    #[inline]
    pub fn index(&self, ijk: [i32; 3]) -> usize {
        (ijk[0] - self.extent.min(0)) as usize * self.increments[0]
            + (ijk[1] - self.extent.min(1)) as usize * self.increments[1]
            + (ijk[2] - self.extent.min(2)) as usize * self.increments[2]
    }

    #[inline]
    pub fn value(&self, ijk: [i32; 3]) -> f64 {
        self.values[self.index(ijk)].as_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_honours_extent_origin() {
        let values: Vec<u8> = (0..12).collect();
        let field = ScalarField::new(&values, Extent::new(5, 7, 1, 2, 3, 4)).unwrap();
        assert_eq!(field.increments(), [1, 3, 6]);
        assert_eq!(field.value([5, 1, 3]), 0.0);
        assert_eq!(field.value([6, 2, 4]), 10.0);
    }

    #[test]
    fn test_rejects_wrong_length() {
        let values = vec![0.0f32; 7];
        assert!(ScalarField::new(&values, Extent::new(0, 1, 0, 1, 0, 1)).is_err());
    }
}
