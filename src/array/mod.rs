//! The array types of this crate.
//!
//! [`Array2D`] is the plain N×2 container. [`Point2D`], [`Vector2D`] and [`Coordinate`] each wrap
//! one and give its two columns a meaning. Shared behaviour lives on
//! [`Array2DTrait`](crate::Array2DTrait).

pub use array2d::Array2D;
pub use coordinate::Coordinate;
pub use distance_matrix::DistanceMatrix;
pub use point2d::Point2D;
pub use vector2d::Vector2D;

mod array2d;
mod coordinate;
mod distance_matrix;
mod point2d;
mod vector2d;
