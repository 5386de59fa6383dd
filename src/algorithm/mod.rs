//! Algorithms implemented on the array types of this crate.

pub mod broadcasting;
pub mod geodesy;
pub mod native;
pub mod planar;
