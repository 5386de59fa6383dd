use arrow_array::Float64Array;

use crate::algorithm::broadcasting::{broadcast_index, broadcast_len};
use crate::algorithm::native::{unary_f64, unary_rows};
use crate::array::{Array2D, Vector2D};
use crate::error::Result;
use crate::trait_::Array2DTrait;

/// Project vectors onto the direction of other vectors.
///
/// The target vectors are normalized first. A zero target vector has no direction; it is kept
/// as is by [`Array2DTrait::normalized`], so projecting onto it yields zero.
pub trait Project {
    /// Length of the projection of every row onto the unit vector of the matching `onto` row.
    ///
    /// The sign is negative when the two vectors point more than 90° apart.
    ///
    /// # Errors
    ///
    /// - if the row counts differ and neither is one
    fn scalar_projection(&self, onto: &Vector2D) -> Result<Float64Array>;

    /// The projection of every row onto the matching `onto` row, as a vector.
    ///
    /// # Errors
    ///
    /// - if the row counts differ and neither is one
    fn project_onto(&self, onto: &Vector2D) -> Result<Vector2D>;
}

/// Dot product of every row of `left` with the matching row of `unit`.
fn dot_unit(left: &Array2D, unit: &Array2D) -> Result<Float64Array> {
    let len = broadcast_len(left.len(), unit.len())?;
    Ok(unary_f64(len, |i| {
        let [a1, a2] = left.row(broadcast_index(left.len(), i));
        let [b1, b2] = unit.row(broadcast_index(unit.len(), i));
        a1 * b1 + a2 * b2
    }))
}

impl Project for Vector2D {
    fn scalar_projection(&self, onto: &Vector2D) -> Result<Float64Array> {
        dot_unit(self.as_array2d(), onto.normalized().as_array2d())
    }

    fn project_onto(&self, onto: &Vector2D) -> Result<Vector2D> {
        let unit = onto.normalized();
        let right = unit.as_array2d();
        let magnitude = dot_unit(self.as_array2d(), right)?;

        let coords = unary_rows(magnitude.len(), |i| {
            let [b1, b2] = right.row(broadcast_index(right.len(), i));
            let m = magnitude.value(i);
            [m * b1, m * b2]
        });
        Ok(Vector2D::from_array2d(Array2D::try_new(coords.into())?))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::array::sample_rows;
    use crate::units::AngleUnits;
    use approx::assert_relative_eq;

    fn vectors(len: usize, seed: u64) -> Vector2D {
        Vector2D::from(Array2D::try_from(sample_rows(len, seed)).unwrap())
    }

    #[test]
    fn onto_axis() {
        let v = Vector2D::from(Array2D::from_pair(3.0, 4.0));
        let x_axis = Vector2D::from(Array2D::from_pair(10.0, 0.0));

        let scalar = v.scalar_projection(&x_axis).unwrap();
        assert_eq!(scalar.value(0), 3.0);

        let projected = v.project_onto(&x_axis).unwrap();
        assert_eq!(projected.row(0), [3.0, 0.0]);
    }

    #[test]
    fn opposite_direction_is_negative() {
        let v = Vector2D::try_from_polar(2.0, 0.0, AngleUnits::Degrees).unwrap();
        let onto = Vector2D::try_from_polar(1.0, 180.0, AngleUnits::Degrees).unwrap();
        assert_relative_eq!(v.scalar_projection(&onto).unwrap().value(0), -2.0, max_relative = 1e-12);
    }

    #[test]
    fn matches_dot_product_formula() {
        let (a, b) = (vectors(200, 31), vectors(200, 32));
        let projected = a.project_onto(&b).unwrap();
        assert_eq!(projected.len(), 200);

        for i in 0..a.len() {
            let [a1, a2] = a.row(i);
            let [b1, b2] = b.row(i);
            let factor = (a1 * b1 + a2 * b2) / (b1 * b1 + b2 * b2);
            let [p1, p2] = projected.row(i);
            assert_relative_eq!(p1, factor * b1, epsilon = 1e-12, max_relative = 1e-9);
            assert_relative_eq!(p2, factor * b2, epsilon = 1e-12, max_relative = 1e-9);
        }
    }

    #[test]
    fn single_target_broadcasts() {
        let a = vectors(10, 33);
        let onto = Vector2D::try_from_polar(5.0, 90.0, AngleUnits::Degrees).unwrap();
        let scalar = a.scalar_projection(&onto).unwrap();
        assert_eq!(scalar.len(), 10);
        for i in 0..a.len() {
            assert_relative_eq!(scalar.value(i), a.row(i)[1], epsilon = 1e-12);
        }
    }

    #[test]
    fn zero_target() {
        let a = vectors(3, 34);
        let zero = Vector2D::from(Array2D::from_pair(0.0, 0.0));
        let projected = a.project_onto(&zero).unwrap();
        assert!(projected.iter_rows().all(|row| row == [0.0, 0.0]));
    }

    #[test]
    fn mismatched_lengths() {
        let err = vectors(3, 35).project_onto(&vectors(4, 36)).unwrap_err();
        assert!(err.is_shape_error());
    }
}
