use std::ops::Range;

use arrow_array::{Array, UInt32Array};
use arrow_buffer::ArrowNativeType;

use crate::array::Array2D;
use crate::error::{Result, Vectorized2DError};
use crate::trait_::Array2DTrait;

/// Take rows by index, creating a new array from those rows.
pub trait Take {
    type Output;

    fn take(&self, indices: &UInt32Array) -> Self::Output;

    fn take_range(&self, range: &Range<usize>) -> Self::Output;
}

impl<A: Array2DTrait> Take for A {
    type Output = Result<A>;

    fn take(&self, indices: &UInt32Array) -> Self::Output {
        if indices.null_count() > 0 {
            return Err(Vectorized2DError::IncorrectType(
                "take indices cannot be null".into(),
            ));
        }

        let mut coords = Vec::with_capacity(indices.len() * 2);
        for index in indices.values().iter() {
            let index = index.as_usize();
            if index >= self.len() {
                log::debug!("take index {index} is out of bounds for {} rows", self.len());
                return Err(Vectorized2DError::Shape(format!(
                    "index {index} is out of bounds for {} rows",
                    self.len()
                )));
            }
            coords.extend_from_slice(&self.row(index));
        }
        Ok(A::from_array2d(Array2D::try_new(coords.into())?))
    }

    fn take_range(&self, range: &Range<usize>) -> Self::Output {
        if range.is_empty() || range.end > self.len() {
            return Err(Vectorized2DError::Shape(format!(
                "range {range:?} is not a non-empty range within {} rows",
                self.len()
            )));
        }
        Ok(self.slice(range.start, range.end - range.start))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::array::Coordinate;
    use crate::units::AngleUnits;

    fn coords() -> Coordinate {
        Coordinate::try_new(vec![0.1, 0.2, 0.3, 0.4], vec![1.1, 1.2, 1.3, 1.4], AngleUnits::Radians)
            .unwrap()
    }

    #[test]
    fn take_with_repeats() {
        let c = coords();
        let taken = c.take(&UInt32Array::from(vec![3, 0, 3])).unwrap();
        assert_eq!(taken.len(), 3);
        assert_eq!(taken.row(0), [0.4, 1.4]);
        assert_eq!(taken.row(1), [0.1, 1.1]);
        assert_eq!(taken.value(2), c.value(3));
    }

    #[test]
    fn take_out_of_bounds() {
        let err = coords().take(&UInt32Array::from(vec![4])).unwrap_err();
        assert!(err.is_shape_error());
    }

    #[test]
    fn take_range() {
        let c = coords();
        let taken = c.take_range(&(1..3)).unwrap();
        assert_eq!(taken.lat(), arrow_array::Float64Array::from(vec![0.2, 0.3]));
        assert!(c.take_range(&(2..2)).is_err());
        assert!(c.take_range(&(2..5)).is_err());
    }
}
