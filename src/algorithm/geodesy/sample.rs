use std::f64::consts::TAU;

use crate::algorithm::native::unary_rows;
use crate::array::{Array2D, Coordinate};
use crate::error::{Result, Vectorized2DError};
use crate::trait_::Array2DTrait;

use super::shifted::destination;

/// Sample closed shapes around a single coordinate.
pub trait SampleAround {
    /// `num_points` coordinates on a circle of `radius` meters around `self`.
    ///
    /// Sample `k` lies at bearing `k·2π/num_points`, so the first one is due north.
    ///
    /// # Errors
    ///
    /// - if `self` holds more than one coordinate
    /// - if `num_points` is zero
    fn circle_around(&self, radius: f64, num_points: usize) -> Result<Coordinate>;

    /// `num_points` coordinates on an ellipse around `self`.
    ///
    /// The semi-axes are `major_radius` and `minor_radius` meters, and the major axis points
    /// along `major_axis_bearing`, in radians clockwise from north. Sample `k` lies at bearing
    /// `k·2π/num_points`, at the distance where that bearing crosses the ellipse.
    ///
    /// # Errors
    ///
    /// - if `self` holds more than one coordinate
    /// - if `num_points` is zero
    /// - if `minor_radius` is larger than `major_radius`
    fn ellipse_around(
        &self,
        major_radius: f64,
        minor_radius: f64,
        major_axis_bearing: f64,
        num_points: usize,
    ) -> Result<Coordinate>;
}

fn check_single(center: &Coordinate, shape: &str) -> Result<[f64; 2]> {
    if !center.is_single() {
        log::debug!("refusing to sample a {shape} around {} coordinates", center.len());
        return Err(Vectorized2DError::Precondition(
            format!("a {shape} can only be sampled around a single coordinate").into(),
        ));
    }
    Ok(center.row(0))
}

fn check_num_points(num_points: usize) -> Result<()> {
    if num_points == 0 {
        log::debug!("refusing to sample zero points");
        return Err(Vectorized2DError::Precondition(
            "at least one point must be sampled".into(),
        ));
    }
    Ok(())
}

/// Distance from the center of an ellipse to its edge, `angle` radians away from the major axis.
///
/// With a zero minor radius the ellipse collapses onto its major axis: the edge is at
/// `major_radius` along the axis, in either direction, and at the center everywhere else.
#[inline]
fn ellipse_radius(major_radius: f64, minor_radius: f64, angle: f64) -> f64 {
    let (sin, cos) = angle.sin_cos();
    if minor_radius == 0.0 {
        return if sin.abs() <= f64::EPSILON {
            major_radius
        } else {
            0.0
        };
    }
    let (b_cos, a_sin) = (minor_radius * cos, major_radius * sin);
    major_radius * minor_radius / (b_cos * b_cos + a_sin * a_sin).sqrt()
}

fn sample<F>(center: [f64; 2], num_points: usize, radius_at: F) -> Result<Coordinate>
where
    F: Fn(f64) -> f64 + Sync + Send,
{
    let step = TAU / num_points as f64;
    let coords = unary_rows(num_points, |k| {
        let bearing = k as f64 * step;
        destination(center, radius_at(bearing), bearing)
    });
    Ok(Coordinate::from_array2d(Array2D::try_new(coords.into())?))
}

impl SampleAround for Coordinate {
    fn circle_around(&self, radius: f64, num_points: usize) -> Result<Coordinate> {
        let center = check_single(self, "circle")?;
        check_num_points(num_points)?;
        sample(center, num_points, |_| radius)
    }

    fn ellipse_around(
        &self,
        major_radius: f64,
        minor_radius: f64,
        major_axis_bearing: f64,
        num_points: usize,
    ) -> Result<Coordinate> {
        let center = check_single(self, "ellipse")?;
        check_num_points(num_points)?;
        if minor_radius > major_radius {
            log::debug!("minor radius {minor_radius} exceeds major radius {major_radius}");
            return Err(Vectorized2DError::Precondition(
                "the minor radius of an ellipse cannot exceed its major radius".into(),
            ));
        }
        sample(center, num_points, |bearing| {
            ellipse_radius(major_radius, minor_radius, bearing - major_axis_bearing)
        })
    }
}
