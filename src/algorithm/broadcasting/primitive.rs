use arrow_array::types::{ArrowPrimitiveType, Float64Type, UInt32Type};
use arrow_array::{Array, PrimitiveArray};

use crate::error::{Result, Vectorized2DError};

/// An enum over a single primitive value and an array of them.
///
/// A `Scalar` behaves like an array of any length whose values are all equal. An `Array` of
/// length one behaves the same way; longer arrays are matched row by row.
#[derive(Debug, Clone)]
pub enum BroadcastablePrimitive<T>
where
    T: ArrowPrimitiveType,
{
    Scalar(T::Native),
    Array(PrimitiveArray<T>),
}

/// Scalar-or-array argument of `f64` values, such as distances or angles.
pub type BroadcastableF64 = BroadcastablePrimitive<Float64Type>;

impl<T> BroadcastablePrimitive<T>
where
    T: ArrowPrimitiveType,
{
    /// The number of rows this argument contributes to broadcasting.
    ///
    /// Scalars count as a single row.
    pub fn broadcast_len(&self) -> usize {
        match self {
            BroadcastablePrimitive::Scalar(_) => 1,
            BroadcastablePrimitive::Array(arr) => arr.len(),
        }
    }

    /// Whether this is a [`BroadcastablePrimitive::Scalar`].
    pub fn is_scalar(&self) -> bool {
        matches!(self, BroadcastablePrimitive::Scalar(_))
    }

    /// Fail if this is an array holding null values.
    ///
    /// [`BroadcastablePrimitive::value`] reads the slot under a null as if it were valid, so
    /// operations call this before reading any value.
    pub fn check_no_nulls(&self) -> Result<()> {
        match self {
            BroadcastablePrimitive::Array(arr) if arr.null_count() > 0 => {
                log::debug!("rejecting an argument with {} null values", arr.null_count());
                Err(Vectorized2DError::IncorrectType(
                    "broadcast arguments cannot contain nulls".into(),
                ))
            }
            _ => Ok(()),
        }
    }

    /// The value paired with row `i` of a broadcast operation.
    ///
    /// # Panics
    ///
    /// If this is an array with more than one value and `i` is out of bounds.
    #[inline]
    pub fn value(&self, i: usize) -> T::Native {
        match self {
            BroadcastablePrimitive::Scalar(val) => *val,
            BroadcastablePrimitive::Array(arr) if arr.len() == 1 => arr.value(0),
            BroadcastablePrimitive::Array(arr) => arr.value(i),
        }
    }

    /// Apply `op` to every value, keeping the scalar/array shape.
    pub fn map<F>(&self, op: F) -> Self
    where
        F: Fn(T::Native) -> T::Native,
    {
        match self {
            BroadcastablePrimitive::Scalar(val) => BroadcastablePrimitive::Scalar(op(*val)),
            BroadcastablePrimitive::Array(arr) => BroadcastablePrimitive::Array(arr.unary(op)),
        }
    }
}

impl From<f64> for BroadcastablePrimitive<Float64Type> {
    fn from(value: f64) -> Self {
        BroadcastablePrimitive::Scalar(value)
    }
}

impl From<Vec<f64>> for BroadcastablePrimitive<Float64Type> {
    fn from(value: Vec<f64>) -> Self {
        BroadcastablePrimitive::Array(value.into())
    }
}

impl From<&[f64]> for BroadcastablePrimitive<Float64Type> {
    fn from(value: &[f64]) -> Self {
        BroadcastablePrimitive::Array(value.to_vec().into())
    }
}

impl From<u32> for BroadcastablePrimitive<UInt32Type> {
    fn from(value: u32) -> Self {
        BroadcastablePrimitive::Scalar(value)
    }
}

impl From<Vec<u32>> for BroadcastablePrimitive<UInt32Type> {
    fn from(value: Vec<u32>) -> Self {
        BroadcastablePrimitive::Array(value.into())
    }
}

impl From<&[u32]> for BroadcastablePrimitive<UInt32Type> {
    fn from(value: &[u32]) -> Self {
        BroadcastablePrimitive::Array(value.to_vec().into())
    }
}

impl<T: ArrowPrimitiveType> From<PrimitiveArray<T>> for BroadcastablePrimitive<T> {
    fn from(value: PrimitiveArray<T>) -> Self {
        BroadcastablePrimitive::Array(value)
    }
}

impl<T: ArrowPrimitiveType> From<&PrimitiveArray<T>> for BroadcastablePrimitive<T> {
    fn from(value: &PrimitiveArray<T>) -> Self {
        BroadcastablePrimitive::Array(value.clone())
    }
}
