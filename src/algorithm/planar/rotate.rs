use arrow_array::Float64Array;

use crate::algorithm::broadcasting::{
    broadcast_index, broadcast_len, BroadcastableF64, BroadcastablePrimitive,
};
use crate::algorithm::native::unary_rows;
use crate::array::{Array2D, Vector2D};
use crate::error::{Result, Vectorized2DError};
use crate::trait_::Array2DTrait;
use crate::units::{wrap_tau, AngleUnits};

/// Rotate vectors by an angle.
///
/// Positive angles are counter-clockwise, and negative angles are clockwise rotations.
pub trait Rotate<AngleT> {
    type Output;

    /// Rotate every vector by `angle`, keeping its magnitude.
    ///
    /// The direction of the result is `(direction + angle) mod 2π`.
    #[must_use]
    fn rotated(&self, angle: &AngleT, units: AngleUnits) -> Self::Output;
}

/// Rotate into `len` output rows. `len` must be a valid, non-zero broadcast of the row count
/// and the angle length.
fn rotate(vectors: &Vector2D, len: usize, angle: &BroadcastableF64, units: AngleUnits) -> Vector2D {
    let directions = vectors.direction();
    let magnitudes = vectors.magnitude();
    let rows = vectors.len();

    let coords = unary_rows(len, |i| {
        let row = broadcast_index(rows, i);
        let direction = wrap_tau(directions.value(row) + units.to_radians(angle.value(i)));
        let magnitude = magnitudes.value(row);
        [magnitude * direction.cos(), magnitude * direction.sin()]
    });
    Vector2D::from_array2d(Array2D {
        coords: coords.into(),
    })
}

// ┌────────────────────────────────┐
// │ Implementations for RHS arrays │
// └────────────────────────────────┘

impl Rotate<Float64Array> for Vector2D {
    type Output = Result<Vector2D>;

    fn rotated(&self, angle: &Float64Array, units: AngleUnits) -> Self::Output {
        let angle = BroadcastableF64::from(angle);
        angle.check_no_nulls()?;
        let len = broadcast_len(self.len(), angle.broadcast_len())?;
        if len == 0 {
            return Err(Vectorized2DError::Shape(
                "cannot rotate by an empty array of angles".to_string(),
            ));
        }
        Ok(rotate(self, len, &angle, units))
    }
}

// ┌─────────────────────────────────┐
// │ Implementations for RHS scalars │
// └─────────────────────────────────┘

impl Rotate<f64> for Vector2D {
    type Output = Vector2D;

    fn rotated(&self, angle: &f64, units: AngleUnits) -> Self::Output {
        rotate(self, self.len(), &BroadcastablePrimitive::Scalar(*angle), units)
    }
}
