//! Geographic algorithms on [`Coordinate`](crate::array::Coordinate) arrays.
//!
//! Distances and bearings use a local equirectangular approximation: a degree of latitude is
//! sixty nautical miles ([`NM_TO_METERS`](crate::units::NM_TO_METERS) each), and a degree of
//! longitude is scaled by the cosine of the mean latitude. Shifting a coordinate uses the
//! destination formula on a sphere of radius
//! [`EARTH_RADIUS_METERS`](crate::units::EARTH_RADIUS_METERS). The two agree within about 1%
//! for distances up to sixty nautical miles.

mod distance_bearing;
mod sample;
mod shifted;

pub use distance_bearing::GeoDistance;
pub use sample::SampleAround;
pub use shifted::Shifted;
