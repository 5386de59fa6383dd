use arrow_buffer::ScalarBuffer;

use crate::array::Array2D;
use crate::error::{Result, Vectorized2DError};
use crate::trait_::Array2DTrait;

/// An array of points in a Cartesian plane, stored as `(x, y)` rows.
///
/// See [`EuclideanDistance`](crate::algorithm::planar::EuclideanDistance) for distances between
/// point arrays.
#[derive(Debug, Clone, PartialEq)]
pub struct Point2D {
    pub(crate) array: Array2D,
}

impl Point2D {
    /// Construct a new Point2D from an interleaved `x, y` buffer.
    ///
    /// # Errors
    ///
    /// - if the buffer is empty or has an odd length
    pub fn try_new(coords: ScalarBuffer<f64>) -> Result<Self> {
        Ok(Self {
            array: Array2D::try_new(coords)?,
        })
    }

    /// A single point.
    pub fn from_xy(x: f64, y: f64) -> Self {
        Self {
            array: Array2D::from_pair(x, y),
        }
    }

    /// Iterate over the points as [`geo::Point`]s.
    pub fn iter_geo(&self) -> impl Iterator<Item = geo::Point> + '_ {
        self.iter_rows().map(|[x, y]| geo::Point::new(x, y))
    }
}

impl Array2DTrait for Point2D {
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

impl From<Array2D> for Point2D {
    fn from(array: Array2D) -> Self {
        Self { array }
    }
}

impl TryFrom<Vec<[f64; 2]>> for Point2D {
    type Error = Vectorized2DError;

    fn try_from(value: Vec<[f64; 2]>) -> std::result::Result<Self, Self::Error> {
        Ok(Array2D::try_from(value)?.into())
    }
}

impl TryFrom<&[geo::Point]> for Point2D {
    type Error = Vectorized2DError;

    fn try_from(value: &[geo::Point]) -> std::result::Result<Self, Self::Error> {
        let coords: Vec<f64> = value.iter().flat_map(|p| [p.x(), p.y()]).collect();
        Self::try_new(coords.into())
    }
}

impl TryFrom<Vec<geo::Point>> for Point2D {
    type Error = Vectorized2DError;

    fn try_from(value: Vec<geo::Point>) -> std::result::Result<Self, Self::Error> {
        value.as_slice().try_into()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::point::{p0, p1, p2, point_array};

    #[test]
    fn from_geo_points() {
        let points = point_array();
        assert_eq!(points.len(), 3);
        assert_eq!(points.row(0), [p0().x(), p0().y()]);
        assert_eq!(points.iter_geo().collect::<Vec<_>>(), vec![p0(), p1(), p2()]);
    }

    #[test]
    fn single_point() {
        let p = Point2D::from_xy(1.0, 2.0);
        assert!(p.is_single());
        assert_eq!(p.x1().value(0), 1.0);
        assert_eq!(p.x2().value(0), 2.0);
    }

    #[test]
    fn empty_points_rejected() {
        let points: Vec<geo::Point> = vec![];
        assert!(Point2D::try_from(points).unwrap_err().is_shape_error());
    }
}
