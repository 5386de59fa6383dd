//! Defines [`Array2DTrait`], the interface shared by every array type in this crate.

use arrow_array::types::UInt32Type;
use arrow_array::Float64Array;
use arrow_buffer::ScalarBuffer;

use crate::algorithm::broadcasting::{
    broadcast_index, broadcast_len, BroadcastableF64, BroadcastablePrimitive,
};
use crate::algorithm::native::{unary_f64, unary_rows, Concatenate};
use crate::array::Array2D;
use crate::error::{Result, Vectorized2DError};

/// A batch of 2D quantities stored as N rows of two `f64` components.
///
/// [`Point2D`](crate::array::Point2D), [`Vector2D`](crate::array::Vector2D) and
/// [`Coordinate`](crate::array::Coordinate) each wrap a single [`Array2D`] and add their own
/// interpretation of the two columns. Everything that does not depend on that interpretation is
/// provided here, and always returns the implementing type.
pub trait Array2DTrait: Sized {
    /// Access the underlying rows.
    fn as_array2d(&self) -> &Array2D;

    /// Consume self, returning the underlying rows.
    fn into_array2d(self) -> Array2D;

    /// Reinterpret rows as this type.
    fn from_array2d(array: Array2D) -> Self;

    /// The number of rows.
    fn len(&self) -> usize {
        self.as_array2d().coords.len() / 2
    }

    /// Always `false`: arrays hold at least one row.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether this array holds exactly one row.
    fn is_single(&self) -> bool {
        self.len() == 1
    }

    /// The raw interleaved buffer, `x1, x2, x1, x2, ...`.
    fn coords(&self) -> &ScalarBuffer<f64> {
        &self.as_array2d().coords
    }

    /// First component of row `i`.
    #[inline]
    fn get_x1(&self, i: usize) -> f64 {
        self.as_array2d().coords[i * 2]
    }

    /// Second component of row `i`.
    #[inline]
    fn get_x2(&self, i: usize) -> f64 {
        self.as_array2d().coords[i * 2 + 1]
    }

    /// Both components of row `i`.
    #[inline]
    fn row(&self, i: usize) -> [f64; 2] {
        [self.get_x1(i), self.get_x2(i)]
    }

    /// Iterate over rows as `[x1, x2]` pairs.
    fn iter_rows(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.as_array2d()
            .coords
            .chunks_exact(2)
            .map(|row| [row[0], row[1]])
    }

    /// The first column as a new array of length N.
    fn x1(&self) -> Float64Array {
        Float64Array::from_iter_values(self.coords().iter().step_by(2).copied())
    }

    /// The second column as a new array of length N.
    fn x2(&self) -> Float64Array {
        Float64Array::from_iter_values(self.coords().iter().skip(1).step_by(2).copied())
    }

    /// Row `i` as a single-row array.
    ///
    /// # Panics
    ///
    /// If `i` is out of bounds.
    fn value(&self, i: usize) -> Self {
        self.slice(i, 1)
    }

    /// A zero-copy slice of `length` rows starting at row `offset`.
    ///
    /// # Panics
    ///
    /// If the slice is empty or extends past the last row.
    fn slice(&self, offset: usize, length: usize) -> Self {
        assert!(length > 0, "a slice must hold at least one row");
        assert!(
            offset + length <= self.len(),
            "offset + length may not exceed length of array"
        );
        Self::from_array2d(Array2D {
            coords: self.coords().slice(offset * 2, length * 2),
        })
    }

    /// Split into N single-row arrays.
    fn split(&self) -> Vec<Self> {
        (0..self.len()).map(|i| self.value(i)).collect()
    }

    /// Vertically stack `arrays`, keeping their rows in argument order.
    fn concat(arrays: &[Self]) -> Result<Self> {
        arrays.concatenate()
    }

    /// Repeat every row in place: row `i` is replaced by `counts[i]` consecutive copies.
    ///
    /// A scalar count, or a single-value array, applies to every row.
    fn repeat(&self, counts: impl Into<BroadcastablePrimitive<UInt32Type>>) -> Result<Self> {
        let counts = counts.into();
        counts.check_no_nulls()?;
        if counts.broadcast_len() != 1 && counts.broadcast_len() != self.len() {
            log::debug!(
                "repeat counts of length {} do not match {} rows",
                counts.broadcast_len(),
                self.len()
            );
            return Err(Vectorized2DError::Shape(format!(
                "expected {} repeat counts, got {}",
                self.len(),
                counts.broadcast_len()
            )));
        }

        let mut coords = Vec::new();
        for (i, row) in self.iter_rows().enumerate() {
            for _ in 0..counts.value(i) {
                coords.extend_from_slice(&row);
            }
        }
        Ok(Self::from_array2d(Array2D::try_new(coords.into())?))
    }

    /// Repeat the whole array `reps` times, end to end.
    fn tile(&self, reps: usize) -> Result<Self> {
        let coords = self.coords();
        let mut tiled = Vec::with_capacity(coords.len() * reps);
        for _ in 0..reps {
            tiled.extend_from_slice(coords);
        }
        Ok(Self::from_array2d(Array2D::try_new(tiled.into())?))
    }

    /// Euclidean norm of every row.
    fn norm(&self) -> Float64Array {
        let array = self.as_array2d();
        unary_f64(array.len(), |i| {
            let [x1, x2] = array.row(i);
            (x1 * x1 + x2 * x2).sqrt()
        })
    }

    /// Squared Euclidean norm of every row.
    fn norm_squared(&self) -> Float64Array {
        let array = self.as_array2d();
        unary_f64(array.len(), |i| {
            let [x1, x2] = array.row(i);
            x1 * x1 + x2 * x2
        })
    }

    /// Every row divided by its norm.
    ///
    /// Rows with a norm of exactly zero are left untouched instead of turning into NaN.
    fn normalized(&self) -> Self {
        let array = self.as_array2d();
        let coords = unary_rows(array.len(), |i| {
            let [x1, x2] = array.row(i);
            let mut norm = (x1 * x1 + x2 * x2).sqrt();
            if norm == 0.0 {
                norm = 1.0;
            }
            [x1 / norm, x2 / norm]
        });
        Self::from_array2d(Array2D {
            coords: coords.into(),
        })
    }

    /// Row-wise sum with another operand, broadcasting single rows.
    fn try_add(&self, other: &impl Array2DTrait) -> Result<Self> {
        zip_rows(self, other, |[a1, a2], [b1, b2]| [a1 + b1, a2 + b2])
    }

    /// Row-wise difference with another operand, broadcasting single rows.
    fn try_sub(&self, other: &impl Array2DTrait) -> Result<Self> {
        zip_rows(self, other, |[a1, a2], [b1, b2]| [a1 - b1, a2 - b2])
    }

    /// Multiply both components of every row by a factor, scalar or per row.
    fn scale(&self, factor: impl Into<BroadcastableF64>) -> Result<Self> {
        let factor = factor.into();
        factor.check_no_nulls()?;
        let array = self.as_array2d();
        let len = broadcast_len(array.len(), factor.broadcast_len())?;
        let coords = unary_rows(len, |i| {
            let [x1, x2] = array.row(broadcast_index(array.len(), i));
            let f = factor.value(i);
            [x1 * f, x2 * f]
        });
        Ok(Self::from_array2d(Array2D::try_new(coords.into())?))
    }
}

fn zip_rows<L, R, F>(left: &L, right: &R, op: F) -> Result<L>
where
    L: Array2DTrait,
    R: Array2DTrait,
    F: Fn([f64; 2], [f64; 2]) -> [f64; 2] + Sync + Send,
{
    let (left, right) = (left.as_array2d(), right.as_array2d());
    let len = broadcast_len(left.len(), right.len())?;
    let coords = unary_rows(len, |i| {
        op(
            left.row(broadcast_index(left.len(), i)),
            right.row(broadcast_index(right.len(), i)),
        )
    });
    Ok(L::from_array2d(Array2D {
        coords: coords.into(),
    }))
}
