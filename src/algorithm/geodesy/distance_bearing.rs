use arrow_array::Float64Array;

use crate::algorithm::broadcasting::{broadcast_index, broadcast_len};
use crate::algorithm::native::{unary_f64, unary_rows};
use crate::array::{Array2D, Coordinate};
use crate::error::Result;
use crate::trait_::Array2DTrait;
use crate::units::{wrap_tau, NM_TO_METERS};

/// East and north offsets, in meters, from `[lat, lon]` to `[lat, lon]`, both in radians.
///
/// One degree of latitude is sixty nautical miles. A degree of longitude is shortened by the
/// cosine of the mean latitude of the two points.
#[inline]
pub(crate) fn east_north([lat1, lon1]: [f64; 2], [lat2, lon2]: [f64; 2]) -> [f64; 2] {
    let north = (lat2 - lat1).to_degrees() * 60.0;
    let east = (lon2 - lon1).to_degrees() * 60.0 * ((lat1 + lat2) / 2.0).cos();
    [east * NM_TO_METERS, north * NM_TO_METERS]
}

#[inline]
fn bearing_of([east, north]: [f64; 2]) -> f64 {
    wrap_tau(east.atan2(north))
}

#[inline]
fn length_squared([east, north]: [f64; 2]) -> f64 {
    north * north + east * east
}

/// Approximate distances and bearings between geographic coordinates.
///
/// Distances use a local equirectangular approximation, accurate for points a few tens of
/// nautical miles apart. Rows are paired like [`Pairing::Aligned`](crate::units::Pairing):
/// a single coordinate on either side is paired with every row of the other side.
///
/// ```
/// use approx::assert_relative_eq;
/// use vectorized2d::algorithm::geodesy::GeoDistance;
/// use vectorized2d::array::Coordinate;
///
/// let from = Coordinate::from_degrees(33.0, 34.0);
/// let to = Coordinate::from_degrees(33.5, 34.5);
///
/// let (distance, bearing) = from.geo_dist_and_bearing(&to).unwrap();
/// assert_relative_eq!(distance.value(0), 72_497.1, max_relative = 0.01);
/// assert_relative_eq!(bearing.value(0).to_degrees(), 39.91, max_relative = 0.001);
/// ```
pub trait GeoDistance {
    /// East and north offsets from every row of `self` to the matching row of `other`, in meters.
    ///
    /// The first column holds the eastward offset and the second one the northward offset.
    ///
    /// # Errors
    ///
    /// - if the row counts differ and neither is one
    fn delta_east_north(&self, other: &Coordinate) -> Result<Array2D>;

    /// Distance in meters.
    ///
    /// # Errors
    ///
    /// - if the row counts differ and neither is one
    fn geo_dist(&self, other: &Coordinate) -> Result<Float64Array>;

    /// Squared distance in square meters.
    ///
    /// # Errors
    ///
    /// - if the row counts differ and neither is one
    fn geo_dist_squared(&self, other: &Coordinate) -> Result<Float64Array>;

    /// Bearing from `self` to `other`, in radians within `[0, 2π)`, clockwise from north.
    ///
    /// # Errors
    ///
    /// - if the row counts differ and neither is one
    fn bearing(&self, other: &Coordinate) -> Result<Float64Array>;

    /// Distance and bearing, computed from the same offsets.
    ///
    /// # Errors
    ///
    /// - if the row counts differ and neither is one
    fn geo_dist_and_bearing(&self, other: &Coordinate) -> Result<(Float64Array, Float64Array)>;
}

fn zip_coordinates<F>(left: &Coordinate, right: &Coordinate, op: F) -> Result<Float64Array>
where
    F: Fn([f64; 2]) -> f64 + Sync + Send,
{
    let (left, right) = (left.as_array2d(), right.as_array2d());
    let len = broadcast_len(left.len(), right.len())?;
    Ok(unary_f64(len, |i| {
        op(east_north(
            left.row(broadcast_index(left.len(), i)),
            right.row(broadcast_index(right.len(), i)),
        ))
    }))
}

impl GeoDistance for Coordinate {
    fn delta_east_north(&self, other: &Coordinate) -> Result<Array2D> {
        let (left, right) = (self.as_array2d(), other.as_array2d());
        let len = broadcast_len(left.len(), right.len())?;
        let coords = unary_rows(len, |i| {
            east_north(
                left.row(broadcast_index(left.len(), i)),
                right.row(broadcast_index(right.len(), i)),
            )
        });
        Array2D::try_new(coords.into())
    }

    fn geo_dist(&self, other: &Coordinate) -> Result<Float64Array> {
        zip_coordinates(self, other, |delta| length_squared(delta).sqrt())
    }

    fn geo_dist_squared(&self, other: &Coordinate) -> Result<Float64Array> {
        zip_coordinates(self, other, length_squared)
    }

    fn bearing(&self, other: &Coordinate) -> Result<Float64Array> {
        zip_coordinates(self, other, bearing_of)
    }

    fn geo_dist_and_bearing(&self, other: &Coordinate) -> Result<(Float64Array, Float64Array)> {
        let delta = self.delta_east_north(other)?;
        let distance = unary_f64(delta.len(), |i| length_squared(delta.row(i)).sqrt());
        let bearing = unary_f64(delta.len(), |i| bearing_of(delta.row(i)));
        Ok((distance, bearing))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algorithm::native::Take;
    use crate::test::coordinate::{c1, c2, random_degrees};
    use crate::units::AngleUnits;
    use approx::assert_relative_eq;
    use geo::HaversineDistance;

    #[test]
    fn known_distance_and_bearing() {
        let distance = c1().geo_dist(&c2()).unwrap();
        assert_relative_eq!(distance.value(0), 72_497.1, max_relative = 0.01);

        let bearing = c1().bearing(&c2()).unwrap();
        assert_relative_eq!(bearing.value(0).to_degrees(), 39.91, max_relative = 0.001);

        let back = c2().bearing(&c1()).unwrap();
        assert_relative_eq!(back.value(0).to_degrees(), 219.91, max_relative = 0.001);
    }

    #[test]
    fn combined_matches_separate() {
        let from = Coordinate::try_new(
            random_degrees(100, 1),
            random_degrees(100, 2),
            AngleUnits::Degrees,
        )
        .unwrap();
        let (distance, bearing) = from.geo_dist_and_bearing(&c1()).unwrap();
        assert_eq!(distance, from.geo_dist(&c1()).unwrap());
        assert_eq!(bearing, from.bearing(&c1()).unwrap());
    }

    #[test]
    fn self_distance_is_zero() {
        let c = Coordinate::try_new(
            random_degrees(500, 3),
            random_degrees(500, 4),
            AngleUnits::Degrees,
        )
        .unwrap();
        let distance = c.geo_dist(&c).unwrap();
        assert!(distance.values().iter().all(|d| *d == 0.0));
        assert_eq!(c1().geo_dist(&c1()).unwrap().value(0), 0.0);
    }

    #[test]
    fn bearing_just_west_of_north_stays_below_tau() {
        let from = Coordinate::from_radians(0.5, 0.0);
        let to = Coordinate::from_radians(0.6, -1e-25);
        let bearing = from.bearing(&to).unwrap().value(0);
        assert!(bearing < std::f64::consts::TAU, "{bearing}");
    }

    #[test]
    fn squared_distance() {
        let d = c1().geo_dist(&c2()).unwrap().value(0);
        let d2 = c1().geo_dist_squared(&c2()).unwrap().value(0);
        assert_relative_eq!(d * d, d2, max_relative = 1e-12);
    }

    #[test]
    fn delta_columns() {
        let delta = c1().delta_east_north(&c2()).unwrap();
        let [east, north] = delta.row(0);
        assert_relative_eq!(north, 0.5 * 60.0 * NM_TO_METERS, max_relative = 1e-12);
        assert!(east > 0.0 && east < north);

        let due_north = Coordinate::from_degrees(34.0, 34.0);
        let [east, _] = c1().delta_east_north(&due_north).unwrap().row(0);
        assert_eq!(east, 0.0);
    }

    #[test]
    fn broadcasting() {
        let many = Coordinate::try_new(
            random_degrees(20, 5),
            random_degrees(20, 6),
            AngleUnits::Degrees,
        )
        .unwrap();

        let one_to_many = c1().geo_dist(&many).unwrap();
        let many_to_one = many.geo_dist(&c1()).unwrap();
        assert_eq!(one_to_many.len(), 20);
        assert_eq!(many_to_one.len(), 20);
        for i in 0..many.len() {
            assert_relative_eq!(one_to_many.value(i), many_to_one.value(i), max_relative = 1e-12);
            let single = c1().geo_dist(&many.value(i)).unwrap();
            assert_eq!(single.value(0), one_to_many.value(i));
        }

        let other = Coordinate::try_new(
            random_degrees(20, 7),
            random_degrees(20, 8),
            AngleUnits::Degrees,
        )
        .unwrap();
        assert_eq!(many.bearing(&other).unwrap().len(), 20);

        let err = many.geo_dist(&other.take_range(&(0..3)).unwrap()).unwrap_err();
        assert!(err.is_shape_error());
    }

    #[test]
    fn close_to_haversine() {
        let center = Coordinate::from_degrees(31.5, 34.5);
        let lat: Vec<f64> = random_degrees(200, 9)
            .into_iter()
            .map(|d| 31.0 + d / 180.0)
            .collect();
        let lon: Vec<f64> = random_degrees(200, 10)
            .into_iter()
            .map(|d| 34.0 + d / 180.0)
            .collect();
        let around = Coordinate::try_new(lat, lon, AngleUnits::Degrees).unwrap();

        let distances = center.geo_dist(&around).unwrap();
        let origin = center.to_geo_points()[0];
        for (i, point) in around.to_geo_points().into_iter().enumerate() {
            let expected = origin.haversine_distance(&point);
            if expected > 1000.0 {
                assert_relative_eq!(distances.value(i), expected, max_relative = 0.01);
            }
        }
    }
}
