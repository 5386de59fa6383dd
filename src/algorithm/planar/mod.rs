//! Algorithms on the plane: Euclidean distances between points and operations on vectors.

mod angle_to;
mod euclidean_distance;
mod project;
mod rotate;

pub use angle_to::AngleTo;
pub use euclidean_distance::{Distances, EuclideanDistance};
pub use project::Project;
pub use rotate::Rotate;
