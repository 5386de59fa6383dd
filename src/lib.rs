//! Vectorized arrays of 2D quantities: points, physical vectors and geographic coordinates,
//! plus the algorithms implemented on them.
//!
//! Every array type wraps an [`Array2D`](array::Array2D): N rows of two `f64` components held
//! in a single Arrow buffer. A single point, vector or coordinate is an array with one row, and
//! operations between two arrays broadcast a single row against every row of the other operand.
//!
//! ```
//! use approx::assert_relative_eq;
//! use vectorized2d::algorithm::geodesy::{GeoDistance, SampleAround};
//! use vectorized2d::array::Coordinate;
//! use vectorized2d::Array2DTrait;
//!
//! let center = Coordinate::from_degrees(33.0, 34.0);
//! let circle = center.circle_around(1_000.0, 8).unwrap();
//! assert_eq!(circle.len(), 8);
//!
//! for distance in center.geo_dist(&circle).unwrap().values().iter() {
//!     assert_relative_eq!(*distance, 1_000.0, max_relative = 0.01);
//! }
//! ```
//!
//! ## Features
//!
//! - `rayon`: run per-row kernels over large arrays on the rayon thread pool. Results are
//!   identical to the sequential path.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use trait_::Array2DTrait;

pub mod algorithm;
pub mod array;
pub mod error;
#[cfg(test)]
pub(crate) mod test;
pub mod trait_;
pub mod units;
