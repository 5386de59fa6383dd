use arrow_array::Float64Array;

use crate::algorithm::broadcasting::{broadcast_len, BroadcastableF64};
use crate::algorithm::native::unary_rows;
use crate::array::Array2D;
use crate::error::Result;
use crate::trait_::Array2DTrait;
use crate::units::AngleUnits;

/// An array of geographic coordinates, stored as `(latitude, longitude)` rows in radians.
///
/// A coordinate with one row is a *single* coordinate; with more rows it is a *multi*
/// coordinate. Sampling shapes around a coordinate, as done by
/// [`SampleAround`](crate::algorithm::geodesy::SampleAround), is only defined for single ones.
///
/// ```
/// use approx::assert_relative_eq;
/// use vectorized2d::array::Coordinate;
/// use vectorized2d::units::AngleUnits;
/// use vectorized2d::Array2DTrait;
///
/// let c = Coordinate::try_new(45.0, 180.0, AngleUnits::Degrees).unwrap();
/// assert!(c.is_single());
/// assert_relative_eq!(c.lon().value(0), std::f64::consts::PI, max_relative = 1e-12);
///
/// let multi = Coordinate::try_new(vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0], AngleUnits::Radians)
///     .unwrap();
/// assert_eq!(multi.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Coordinate {
    pub(crate) array: Array2D,
}

impl Coordinate {
    /// Build coordinates from latitudes and longitudes.
    ///
    /// Either argument may be a scalar or an array; a scalar is paired with every value of the
    /// other argument.
    ///
    /// # Errors
    ///
    /// - if both arguments are arrays of different lengths, or both are empty
    pub fn try_new(
        lat: impl Into<BroadcastableF64>,
        lon: impl Into<BroadcastableF64>,
        units: AngleUnits,
    ) -> Result<Self> {
        let lat = lat.into();
        let lon = lon.into();
        lat.check_no_nulls()?;
        lon.check_no_nulls()?;
        let len = broadcast_len(lat.broadcast_len(), lon.broadcast_len())?;

        let coords = unary_rows(len, |i| {
            [units.to_radians(lat.value(i)), units.to_radians(lon.value(i))]
        });
        Ok(Self {
            array: Array2D::try_new(coords.into())?,
        })
    }

    /// A single coordinate from a latitude and a longitude in radians.
    pub fn from_radians(lat: f64, lon: f64) -> Self {
        Self {
            array: Array2D::from_pair(lat, lon),
        }
    }

    /// A single coordinate from a latitude and a longitude in degrees.
    pub fn from_degrees(lat: f64, lon: f64) -> Self {
        Self::from_radians(lat.to_radians(), lon.to_radians())
    }

    /// Latitudes, in radians.
    pub fn lat(&self) -> Float64Array {
        self.x1()
    }

    /// Longitudes, in radians.
    pub fn lon(&self) -> Float64Array {
        self.x2()
    }

    /// Latitudes, in degrees.
    pub fn lat_degrees(&self) -> Float64Array {
        self.lat().unary(f64::to_degrees)
    }

    /// Longitudes, in degrees.
    pub fn lon_degrees(&self) -> Float64Array {
        self.lon().unary(f64::to_degrees)
    }

    /// Convert into [`geo::Point`]s, with `x` the longitude and `y` the latitude, in degrees.
    pub fn to_geo_points(&self) -> Vec<geo::Point> {
        self.iter_rows()
            .map(|[lat, lon]| geo::Point::new(lon.to_degrees(), lat.to_degrees()))
            .collect()
    }
}

impl Array2DTrait for Coordinate {
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

impl From<Array2D> for Coordinate {
    fn from(array: Array2D) -> Self {
        Self { array }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::coordinate::{c1, c2, random_degrees};

    #[test]
    fn single_coordinate_radians() {
        let (lat, lon) = (0.3, 1.2);
        let c = Coordinate::try_new(lat, lon, AngleUnits::Radians).unwrap();
        assert_eq!(c.as_array2d(), &Array2D::from_pair(lat, lon));
        assert_eq!(c.lat().value(0), lat);
        assert_eq!(c.lon().value(0), lon);
    }

    #[test]
    fn single_coordinate_degrees() {
        let (lat, lon) = (33.25, 181.5_f64);
        let c = Coordinate::try_new(lat, lon, AngleUnits::Degrees).unwrap();
        assert_eq!(
            c.as_array2d(),
            &Array2D::from_pair(lat.to_radians(), lon.to_radians())
        );
        assert_eq!(c, Coordinate::from_degrees(lat, lon));
    }

    #[test]
    fn multi_coordinate_from_concat() {
        let lats = random_degrees(3, 1);
        let lons = random_degrees(3, 2);
        let singles: Vec<Coordinate> = lats
            .iter()
            .zip(&lons)
            .map(|(lat, lon)| Coordinate::try_new(*lat, *lon, AngleUnits::Degrees).unwrap())
            .collect();
        let c = Coordinate::concat(&singles).unwrap();

        let expected =
            Coordinate::try_new(lats.clone(), lons.clone(), AngleUnits::Degrees).unwrap();
        assert_eq!(c, expected);
        assert!(!c.is_single());
    }

    #[test]
    fn lat_lon_arrays() {
        let lats = vec![0.1, 0.2, 0.3];
        let lons = vec![1.1, 1.2, 1.3];
        let c = Coordinate::try_new(lats.clone(), lons.clone(), AngleUnits::Radians).unwrap();
        assert_eq!(c.lat(), Float64Array::from(lats));
        assert_eq!(c.lon(), Float64Array::from(lons));
    }

    #[test]
    fn lat_lon_broadcast() {
        let c = Coordinate::try_new(0.5, vec![1.0, 2.0], AngleUnits::Radians).unwrap();
        assert_eq!(c.lat(), Float64Array::from(vec![0.5, 0.5]));

        let err = Coordinate::try_new(vec![0.5, 0.6], vec![1.0, 2.0, 3.0], AngleUnits::Radians)
            .unwrap_err();
        assert!(err.is_shape_error());
    }

    #[test]
    fn null_lat_lon_are_rejected() {
        let lat = Float64Array::from(vec![None, Some(0.5)]);
        let err = Coordinate::try_new(lat, 1.0, AngleUnits::Radians).unwrap_err();
        assert!(matches!(err, crate::error::Vectorized2DError::IncorrectType(_)));
    }

    #[test]
    fn degrees_accessors() {
        let c = c1();
        approx::assert_relative_eq!(c.lat_degrees().value(0), 33.0, max_relative = 1e-12);
        approx::assert_relative_eq!(c.lon_degrees().value(0), 34.0, max_relative = 1e-12);

        let point = c2().to_geo_points()[0];
        approx::assert_relative_eq!(point.x(), 34.5, max_relative = 1e-12);
        approx::assert_relative_eq!(point.y(), 33.5, max_relative = 1e-12);
    }
}
