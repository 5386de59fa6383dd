use super::array::pseudo_random;
use crate::array::Coordinate;

/// 33°N 34°E
pub(crate) fn c1() -> Coordinate {
    Coordinate::from_degrees(33.0, 34.0)
}

/// 33.5°N 34.5°E
pub(crate) fn c2() -> Coordinate {
    Coordinate::from_degrees(33.5, 34.5)
}

/// `len` deterministic angles in `[-90, 90)` degrees, valid as latitudes and longitudes.
pub(crate) fn random_degrees(len: usize, seed: u64) -> Vec<f64> {
    pseudo_random(len, seed)
        .into_iter()
        .map(|r| r * 180.0 - 90.0)
        .collect()
}
