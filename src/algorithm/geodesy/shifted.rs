use crate::algorithm::broadcasting::{broadcast_index, broadcast_lens, BroadcastableF64};
use crate::algorithm::native::unary_rows;
use crate::array::{Array2D, Coordinate};
use crate::error::Result;
use crate::trait_::Array2DTrait;
use crate::units::EARTH_RADIUS_METERS;

/// Destination of a move from `[lat, lon]` over `geo_dist` meters along `bearing`, on a sphere.
#[inline]
pub(crate) fn destination([lat, lon]: [f64; 2], geo_dist: f64, bearing: f64) -> [f64; 2] {
    let angular_dist = geo_dist / EARTH_RADIUS_METERS;
    let (sin_angular_dist, cos_angular_dist) = angular_dist.sin_cos();
    let (sin_lat, cos_lat) = lat.sin_cos();

    let sin_shifted_lat = sin_lat * cos_angular_dist + cos_lat * sin_angular_dist * bearing.cos();
    let shifted_lat = sin_shifted_lat.asin();
    let shifted_lon = lon
        + (bearing.sin() * sin_angular_dist * cos_lat)
            .atan2(cos_angular_dist - sin_lat * sin_shifted_lat);
    [shifted_lat, shifted_lon]
}

/// Move coordinates by a distance along a bearing.
pub trait Shifted {
    /// Coordinates reached by travelling `geo_dist` meters from every row along `bearing`,
    /// given in radians clockwise from north, over a sphere of radius
    /// [`EARTH_RADIUS_METERS`].
    ///
    /// Both arguments may be scalars or arrays. Rows, distances and bearings are broadcast
    /// together, so a single coordinate shifted by N bearings yields N coordinates. Longitudes
    /// are not wrapped into `[-π, π]`.
    ///
    /// # Errors
    ///
    /// - if the row count and the argument lengths cannot be broadcast together
    fn shifted<D, B>(&self, geo_dist: D, bearing: B) -> Result<Coordinate>
    where
        D: Into<BroadcastableF64>,
        B: Into<BroadcastableF64>;
}

impl Shifted for Coordinate {
    fn shifted<D, B>(&self, geo_dist: D, bearing: B) -> Result<Coordinate>
    where
        D: Into<BroadcastableF64>,
        B: Into<BroadcastableF64>,
    {
        let geo_dist = geo_dist.into();
        let bearing = bearing.into();
        geo_dist.check_no_nulls()?;
        bearing.check_no_nulls()?;
        let array = self.as_array2d();
        let len = broadcast_lens(&[
            array.len(),
            geo_dist.broadcast_len(),
            bearing.broadcast_len(),
        ])?;

        let coords = unary_rows(len, |i| {
            destination(
                array.row(broadcast_index(array.len(), i)),
                geo_dist.value(i),
                bearing.value(i),
            )
        });
        Ok(Coordinate::from_array2d(Array2D::try_new(coords.into())?))
    }
}
