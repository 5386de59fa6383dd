use arrow_array::Float64Array;

use crate::algorithm::broadcasting::{broadcast_index, broadcast_len};
use crate::algorithm::native::unary_f64;
use crate::array::{Array2D, Coordinate, DistanceMatrix, Point2D};
use crate::error::Result;
use crate::trait_::Array2DTrait;
use crate::units::Pairing;

/// Output of [`EuclideanDistance`]: a vector for [`Pairing::Aligned`], a matrix for
/// [`Pairing::All`].
#[derive(Debug, Clone, PartialEq)]
pub enum Distances {
    Aligned(Float64Array),
    All(DistanceMatrix),
}

impl Distances {
    pub fn as_aligned(&self) -> Option<&Float64Array> {
        match self {
            Distances::Aligned(arr) => Some(arr),
            Distances::All(_) => None,
        }
    }

    pub fn as_matrix(&self) -> Option<&DistanceMatrix> {
        match self {
            Distances::Aligned(_) => None,
            Distances::All(matrix) => Some(matrix),
        }
    }

    pub fn into_aligned(self) -> Option<Float64Array> {
        match self {
            Distances::Aligned(arr) => Some(arr),
            Distances::All(_) => None,
        }
    }

    pub fn into_matrix(self) -> Option<DistanceMatrix> {
        match self {
            Distances::Aligned(_) => None,
            Distances::All(matrix) => Some(matrix),
        }
    }

    /// The flat values: the vector, or the matrix in row-major order.
    pub fn values(&self) -> &[f64] {
        match self {
            Distances::Aligned(arr) => arr.values().as_ref(),
            Distances::All(matrix) => matrix.values(),
        }
    }
}

pub trait EuclideanDistance<Rhs = Self> {
    /// Straight-line distance between the rows of `self` and the rows of `rhs`.
    ///
    /// With [`Pairing::Aligned`], row `i` of `self` is matched with row `i` of `rhs` and the
    /// result has one value per pair; a single-row operand is matched with every row of the
    /// other one. With [`Pairing::All`], every row of `self` is matched with every row of `rhs`,
    /// producing a `len(self) × len(rhs)` matrix, even when one side has a single row.
    ///
    /// # Errors
    ///
    /// - with [`Pairing::Aligned`], if the row counts differ and neither is one
    ///
    /// # Examples
    ///
    /// ```
    /// use vectorized2d::algorithm::planar::EuclideanDistance;
    /// use vectorized2d::array::Point2D;
    /// use vectorized2d::units::Pairing;
    ///
    /// let a = Point2D::try_from(vec![[0.0, 0.0], [1.0, 1.0]]).unwrap();
    /// let b = Point2D::from_xy(3.0, 4.0);
    ///
    /// let all = a.euclidean_distance(&b, Pairing::All).unwrap().into_matrix().unwrap();
    /// assert_eq!(all.shape(), (2, 1));
    /// assert_eq!(all.value(0, 0), 5.0);
    /// ```
    fn euclidean_distance(&self, rhs: &Rhs, pairing: Pairing) -> Result<Distances>;

    /// Squared straight-line distance, paired up like [`EuclideanDistance::euclidean_distance`].
    fn euclidean_distance_squared(&self, rhs: &Rhs, pairing: Pairing) -> Result<Distances>;
}

fn distance_squared([a1, a2]: [f64; 2], [b1, b2]: [f64; 2]) -> f64 {
    let (d1, d2) = (a1 - b1, a2 - b2);
    d1 * d1 + d2 * d2
}

fn distances<F>(left: &Array2D, right: &Array2D, pairing: Pairing, op: F) -> Result<Distances>
where
    F: Fn(f64) -> f64 + Sync + Send,
{
    let (n, m) = (left.len(), right.len());
    match pairing {
        Pairing::Aligned => {
            let len = broadcast_len(n, m)?;
            Ok(Distances::Aligned(unary_f64(len, |i| {
                op(distance_squared(
                    left.row(broadcast_index(n, i)),
                    right.row(broadcast_index(m, i)),
                ))
            })))
        }
        Pairing::All => {
            let values = unary_f64(n * m, |k| {
                op(distance_squared(left.row(k / m), right.row(k % m)))
            });
            Ok(Distances::All(DistanceMatrix::new(
                values.values().clone(),
                n,
                m,
            )))
        }
    }
}

macro_rules! impl_euclidean_distance {
    ($type:ty) => {
        impl EuclideanDistance for $type {
            fn euclidean_distance(&self, rhs: &Self, pairing: Pairing) -> Result<Distances> {
                distances(self.as_array2d(), rhs.as_array2d(), pairing, f64::sqrt)
            }

            fn euclidean_distance_squared(
                &self,
                rhs: &Self,
                pairing: Pairing,
            ) -> Result<Distances> {
                distances(self.as_array2d(), rhs.as_array2d(), pairing, |d| d)
            }
        }
    };
}

impl_euclidean_distance!(Point2D);
impl_euclidean_distance!(Coordinate);
