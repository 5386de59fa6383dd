use std::sync::Arc;

use arrow_array::{Array, FixedSizeListArray, Float64Array};
use arrow_buffer::{Buffer, ScalarBuffer};
use arrow_schema::{DataType, Field};

use crate::error::{Result, Vectorized2DError};
use crate::trait_::Array2DTrait;

/// N rows of two `f64` components, stored interleaved in a single buffer.
///
/// Nothing is attached to the two columns beyond their order; the other array types in this
/// crate give them a meaning. A single entity is a one-row array, never a bare pair.
///
/// ```
/// use vectorized2d::array::Array2D;
/// use vectorized2d::Array2DTrait;
///
/// let single = Array2D::from_pair(1.0, 2.0);
/// let multi = Array2D::try_from(vec![[1.0, 2.0], [3.0, 4.0]]).unwrap();
///
/// assert_eq!(single.len(), 1);
/// assert_eq!(multi.len(), 2);
/// assert_eq!(multi.x2().values().as_ref(), &[2.0, 4.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Array2D {
    pub(crate) coords: ScalarBuffer<f64>,
}

fn check(coords: &ScalarBuffer<f64>) -> Result<()> {
    if coords.is_empty() {
        log::debug!("rejecting an empty coordinate buffer");
        return Err(Vectorized2DError::Shape(
            "an Array2D must hold at least one row".to_string(),
        ));
    }

    if coords.len() % 2 != 0 {
        log::debug!("rejecting a buffer of odd length {}", coords.len());
        return Err(Vectorized2DError::Shape(format!(
            "cannot reshape {} values into rows of 2",
            coords.len()
        )));
    }

    Ok(())
}

impl Array2D {
    /// Construct a new Array2D from an interleaved buffer.
    ///
    /// # Panics
    ///
    /// - if the buffer is empty or has an odd length
    pub fn new(coords: ScalarBuffer<f64>) -> Self {
        Self::try_new(coords).unwrap()
    }

    /// Construct a new Array2D from an interleaved buffer.
    ///
    /// # Errors
    ///
    /// - if the buffer is empty or has an odd length
    pub fn try_new(coords: ScalarBuffer<f64>) -> Result<Self> {
        check(&coords)?;
        Ok(Self { coords })
    }

    /// A single-row array.
    pub fn from_pair(x1: f64, x2: f64) -> Self {
        Self {
            coords: vec![x1, x2].into(),
        }
    }

    /// Build from separate first and second columns of equal length.
    pub fn try_from_columns(x1: &[f64], x2: &[f64]) -> Result<Self> {
        if x1.len() != x2.len() {
            return Err(Vectorized2DError::IncompatibleShapes {
                left: x1.len(),
                right: x2.len(),
            });
        }
        let coords: Vec<f64> = x1.iter().zip(x2).flat_map(|(a, b)| [*a, *b]).collect();
        Self::try_new(coords.into())
    }

    /// The flat interleaved values as an Arrow array.
    pub fn values_array(&self) -> Float64Array {
        Float64Array::new(self.coords.clone(), None)
    }

    fn values_field(&self) -> Field {
        Field::new("xy", DataType::Float64, false)
    }

    /// Convert into an Arrow `FixedSizeList<Float64, 2>` array with one list per row.
    pub fn into_arrow(self) -> FixedSizeListArray {
        FixedSizeListArray::new(
            Arc::new(self.values_field()),
            2,
            Arc::new(self.values_array()),
            None,
        )
    }
}

impl Array2DTrait for Array2D {
    fn as_array2d(&self) -> &Array2D {
        self
    }

    fn into_array2d(self) -> Array2D {
        self
    }

    fn from_array2d(array: Array2D) -> Self {
        array
    }
}

impl From<[f64; 2]> for Array2D {
    fn from(value: [f64; 2]) -> Self {
        Self::from_pair(value[0], value[1])
    }
}

impl TryFrom<Vec<f64>> for Array2D {
    type Error = Vectorized2DError;

    fn try_from(value: Vec<f64>) -> std::result::Result<Self, Self::Error> {
        Self::try_new(value.into())
    }
}

impl TryFrom<&[f64]> for Array2D {
    type Error = Vectorized2DError;

    fn try_from(value: &[f64]) -> std::result::Result<Self, Self::Error> {
        Self::try_new(Buffer::from_slice_ref(value).into())
    }
}

impl TryFrom<Vec<[f64; 2]>> for Array2D {
    type Error = Vectorized2DError;

    fn try_from(value: Vec<[f64; 2]>) -> std::result::Result<Self, Self::Error> {
        value.as_slice().try_into()
    }
}

impl TryFrom<&[[f64; 2]]> for Array2D {
    type Error = Vectorized2DError;

    fn try_from(value: &[[f64; 2]]) -> std::result::Result<Self, Self::Error> {
        let coords: Vec<f64> = value.iter().flatten().copied().collect();
        Self::try_new(coords.into())
    }
}

impl TryFrom<&[geo::Coord]> for Array2D {
    type Error = Vectorized2DError;

    fn try_from(value: &[geo::Coord]) -> std::result::Result<Self, Self::Error> {
        let coords: Vec<f64> = value.iter().flat_map(|c| [c.x, c.y]).collect();
        Self::try_new(coords.into())
    }
}

impl TryFrom<&Float64Array> for Array2D {
    type Error = Vectorized2DError;

    fn try_from(value: &Float64Array) -> std::result::Result<Self, Self::Error> {
        if value.null_count() > 0 {
            return Err(Vectorized2DError::IncorrectType(
                "Array2D values cannot be null".into(),
            ));
        }
        Self::try_new(value.values().clone())
    }
}

impl TryFrom<&FixedSizeListArray> for Array2D {
    type Error = Vectorized2DError;

    fn try_from(value: &FixedSizeListArray) -> std::result::Result<Self, Self::Error> {
        if value.value_length() != 2 {
            return Err(Vectorized2DError::IncorrectType(
                "Expected this FixedSizeListArray to have size 2".into(),
            ));
        }
        if value.null_count() > 0 {
            return Err(Vectorized2DError::IncorrectType(
                "Array2D rows cannot be null".into(),
            ));
        }

        let values = value
            .values()
            .as_any()
            .downcast_ref::<Float64Array>()
            .ok_or(Vectorized2DError::IncorrectType(
                "Expected Float64 list values".into(),
            ))?;
        values.try_into()
    }
}

impl From<Array2D> for FixedSizeListArray {
    fn from(value: Array2D) -> Self {
        value.into_arrow()
    }
}
