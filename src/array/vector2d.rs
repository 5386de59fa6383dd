use arrow_array::Float64Array;

use crate::algorithm::broadcasting::{broadcast_len, BroadcastableF64};
use crate::algorithm::native::{unary_f64, unary_rows};
use crate::array::Array2D;
use crate::error::Result;
use crate::trait_::Array2DTrait;
use crate::units::{wrap_tau, AngleUnits};

/// An array of physical vectors, stored as `(m·cos d, m·sin d)` rows for a magnitude `m` and a
/// direction `d` in radians.
///
/// ```
/// use std::f64::consts::FRAC_PI_2;
/// use approx::assert_relative_eq;
/// use vectorized2d::array::Vector2D;
/// use vectorized2d::units::AngleUnits;
///
/// let v = Vector2D::try_from_polar(2.0, vec![0.0, 90.0, 180.0], AngleUnits::Degrees).unwrap();
/// let direction = v.direction();
///
/// assert_relative_eq!(direction.value(1), FRAC_PI_2, max_relative = 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Vector2D {
    pub(crate) array: Array2D,
}

impl Vector2D {
    /// Build vectors from magnitudes and directions.
    ///
    /// Either argument may be a scalar or an array. A scalar (or a single-value array) is paired
    /// with every value of the other argument.
    ///
    /// # Errors
    ///
    /// - if both arguments are arrays of different lengths, or both are empty
    pub fn try_from_polar(
        magnitude: impl Into<BroadcastableF64>,
        direction: impl Into<BroadcastableF64>,
        direction_units: AngleUnits,
    ) -> Result<Self> {
        let magnitude = magnitude.into();
        let direction = direction.into().map(|d| direction_units.to_radians(d));
        magnitude.check_no_nulls()?;
        direction.check_no_nulls()?;
        let len = broadcast_len(magnitude.broadcast_len(), direction.broadcast_len())?;

        let coords = unary_rows(len, |i| {
            let (m, d) = (magnitude.value(i), direction.value(i));
            [m * d.cos(), m * d.sin()]
        });
        Ok(Self {
            array: Array2D::try_new(coords.into())?,
        })
    }

    /// Direction of every vector, in radians within `[0, 2π)`.
    pub fn direction(&self) -> Float64Array {
        let array = &self.array;
        unary_f64(array.len(), |i| {
            let [x1, x2] = array.row(i);
            wrap_tau(x2.atan2(x1))
        })
    }

    /// Magnitude of every vector.
    pub fn magnitude(&self) -> Float64Array {
        self.norm()
    }
}

impl Array2DTrait for Vector2D {
    fn as_array2d(&self) -> &Array2D {
        &self.array
    }

    fn into_array2d(self) -> Array2D {
        self.array
    }

    fn from_array2d(array: Array2D) -> Self {
        Self { array }
    }
}

impl From<Array2D> for Vector2D {
    fn from(array: Array2D) -> Self {
        Self { array }
    }
}
