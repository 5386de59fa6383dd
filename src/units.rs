//! Unit selectors and the fixed physical constants used by the geodesy algorithms.

use std::f64::consts::TAU;

/// One nautical mile, in meters.
pub const NM_TO_METERS: f64 = 1852.0;

/// Radius of the sphere used to compute shifted coordinates, in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_378_100.0;

/// Units of an angle passed into a constructor or an operation.
///
/// Angles are always stored and returned in radians; degrees are converted on the way in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AngleUnits {
    #[default]
    Radians,
    Degrees,
}

impl AngleUnits {
    /// Convert `value`, given in these units, to radians.
    #[inline]
    pub fn to_radians(&self, value: f64) -> f64 {
        match self {
            AngleUnits::Radians => value,
            AngleUnits::Degrees => value.to_radians(),
        }
    }
}

/// Wrap an angle in radians into `[0, 2π)`.
///
/// `rem_euclid` alone can round a tiny negative angle up to exactly `2π`.
#[inline]
pub(crate) fn wrap_tau(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// How the rows of two operands are paired up by a distance computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Pairing {
    /// Every row of the left operand against every row of the right one, producing a matrix.
    #[default]
    All,
    /// Row `i` of the left operand against row `i` of the right one.
    ///
    /// An operand with a single row is broadcast against every row of the other.
    Aligned,
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn degrees_to_radians() {
        assert_relative_eq!(AngleUnits::Degrees.to_radians(180.0), PI, max_relative = 1e-12);
        assert_eq!(AngleUnits::Radians.to_radians(1.5), 1.5);
    }

    #[test]
    fn wrap_stays_below_tau() {
        assert_eq!(wrap_tau(-1e-20), 0.0);
        assert_eq!(wrap_tau(TAU), 0.0);
        assert_relative_eq!(wrap_tau(-PI), PI, max_relative = 1e-12);
        assert_eq!(wrap_tau(1.0), 1.0);
    }

    #[test]
    fn defaults() {
        assert_eq!(AngleUnits::default(), AngleUnits::Radians);
        assert_eq!(Pairing::default(), Pairing::All);
    }
}
