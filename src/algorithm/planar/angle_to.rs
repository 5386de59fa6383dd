use std::f64::consts::{PI, TAU};

use arrow_array::Float64Array;

use crate::algorithm::broadcasting::{broadcast_index, broadcast_len};
use crate::algorithm::native::unary_f64;
use crate::array::Vector2D;
use crate::error::Result;
use crate::trait_::Array2DTrait;

/// Signed angle from one direction to another.
pub trait AngleTo {
    /// The angle in radians, within `(-π, π]`, by which every row must be rotated to point
    /// along the matching `other` row.
    ///
    /// Positive values are counter-clockwise. Swapping the operands negates the result, except
    /// for vectors pointing in exactly opposite directions, which are always `π` apart.
    ///
    /// # Errors
    ///
    /// - if the row counts differ and neither is one
    fn angle_to(&self, other: &Vector2D) -> Result<Float64Array>;
}

fn signed_difference(from: f64, to: f64) -> f64 {
    let delta = (to - from).rem_euclid(TAU);
    if delta > PI {
        delta - TAU
    } else {
        delta
    }
}

impl AngleTo for Vector2D {
    fn angle_to(&self, other: &Vector2D) -> Result<Float64Array> {
        let len = broadcast_len(self.len(), other.len())?;
        let (from, to) = (self.direction(), other.direction());

        Ok(unary_f64(len, |i| {
            signed_difference(
                from.value(broadcast_index(from.len(), i)),
                to.value(broadcast_index(to.len(), i)),
            )
        }))
    }
}
