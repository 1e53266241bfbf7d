//! Typed sample storage over the eight supported element widths.

use num_traits::{AsPrimitive, FromPrimitive};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Runtime tag of a sample element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScalarType {
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    F32,
    F64,
}

impl ScalarType {
    pub fn is_integer(self) -> bool {
        !matches!(self, ScalarType::F32 | ScalarType::F64)
    }
}

/// Element types a field can be contoured in.
pub trait Scalar:
    Copy + Debug + PartialOrd + Send + Sync + 'static + AsPrimitive<f64> + FromPrimitive
{
    const TYPE: ScalarType;

    #[inline]
    fn as_f64(self) -> f64 {
        self.as_()
    }

    /// Converts from `f64`, rounding and saturating for integer types.
    fn from_f64_lossy(value: f64) -> Self;
}

macro_rules! impl_integer_scalar {
    ($($ty:ty => $tag:ident),*) => {
        $(
            impl Scalar for $ty {
                const TYPE: ScalarType = ScalarType::$tag;

                fn from_f64_lossy(value: f64) -> Self {
                    let rounded = value.round();
                    if rounded.is_nan() {
                        0
                    } else {
                        rounded.clamp(<$ty>::MIN as f64, <$ty>::MAX as f64) as $ty
                    }
                }
            }
        )*
    };
}

impl_integer_scalar!(i8 => I8, u8 => U8, i16 => I16, u16 => U16, i32 => I32, u32 => U32);

impl Scalar for f32 {
    const TYPE: ScalarType = ScalarType::F32;

    fn from_f64_lossy(value: f64) -> Self {
        value as f32
    }
}

impl Scalar for f64 {
    const TYPE: ScalarType = ScalarType::F64;

    fn from_f64_lossy(value: f64) -> Self {
        value
    }
}

/// A flat buffer of samples of one element type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScalarArray {
    I8(Vec<i8>),
    U8(Vec<u8>),
    I16(Vec<i16>),
    U16(Vec<u16>),
    I32(Vec<i32>),
    U32(Vec<u32>),
    F32(Vec<f32>),
    F64(Vec<f64>),
}

/// Runs `$body` with `$values` bound to the typed slice inside a
/// [`ScalarArray`], so generic code is instantiated once per element type.
#[macro_export]
macro_rules! dispatch_scalars {
    ($array:expr, $values:ident => $body:expr) => {
        match $array {
            $crate::ScalarArray::I8($values) => $body,
            $crate::ScalarArray::U8($values) => $body,
            $crate::ScalarArray::I16($values) => $body,
            $crate::ScalarArray::U16($values) => $body,
            $crate::ScalarArray::I32($values) => $body,
            $crate::ScalarArray::U32($values) => $body,
            $crate::ScalarArray::F32($values) => $body,
            $crate::ScalarArray::F64($values) => $body,
        }
    };
}

impl ScalarArray {
    /// Empty buffer of the given element type.
    pub fn with_type(scalar_type: ScalarType) -> Self {
        match scalar_type {
            ScalarType::I8 => ScalarArray::I8(Vec::new()),
            ScalarType::U8 => ScalarArray::U8(Vec::new()),
            ScalarType::I16 => ScalarArray::I16(Vec::new()),
            ScalarType::U16 => ScalarArray::U16(Vec::new()),
            ScalarType::I32 => ScalarArray::I32(Vec::new()),
            ScalarType::U32 => ScalarArray::U32(Vec::new()),
            ScalarType::F32 => ScalarArray::F32(Vec::new()),
            ScalarType::F64 => ScalarArray::F64(Vec::new()),
        }
    }

    pub fn scalar_type(&self) -> ScalarType {
        dispatch_scalars!(self, values => element_type(values))
    }

    pub fn len(&self) -> usize {
        dispatch_scalars!(self, values => values.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value at `index` widened to `f64`.
    pub fn get_f64(&self, index: usize) -> f64 {
        dispatch_scalars!(self, values => AsPrimitive::<f64>::as_(values[index]))
    }

    /// Overwrites `index`, growing the buffer with zeros if needed.
    pub fn set_f64(&mut self, index: usize, value: f64) {
        dispatch_scalars!(self, values => set_value(values, index, value))
    }

    pub fn push_f64(&mut self, value: f64) {
        dispatch_scalars!(self, values => values.push(Scalar::from_f64_lossy(value)))
    }

    pub fn reserve(&mut self, additional: usize) {
        dispatch_scalars!(self, values => values.reserve(additional))
    }

    pub fn truncate(&mut self, len: usize) {
        dispatch_scalars!(self, values => values.truncate(len))
    }

    pub fn shrink_to_fit(&mut self) {
        dispatch_scalars!(self, values => values.shrink_to_fit())
    }

    /// All samples widened to `f64`.
    pub fn to_f64_vec(&self) -> Vec<f64> {
        dispatch_scalars!(self, values => values.iter().map(|v| AsPrimitive::<f64>::as_(*v)).collect())
    }
}

fn element_type<T: Scalar>(_: &[T]) -> ScalarType {
    T::TYPE
}

fn set_value<T: Scalar>(values: &mut Vec<T>, index: usize, value: f64) {
    if index >= values.len() {
        values.resize(index + 1, T::from_f64_lossy(0.0));
    }
    values[index] = T::from_f64_lossy(value);
}

macro_rules! impl_from_vec {
    ($($ty:ty => $tag:ident),*) => {
        $(
            impl From<Vec<$ty>> for ScalarArray {
                fn from(values: Vec<$ty>) -> Self {
                    ScalarArray::$tag(values)
                }
            }
        )*
    };
}

impl_from_vec!(i8 => I8, u8 => U8, i16 => I16, u16 => U16, i32 => I32, u32 => U32, f32 => F32, f64 => F64);
