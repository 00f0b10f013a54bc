//! Integer points in three-dimensional space.

use std::{fmt, num::ParseIntError, str::FromStr};

use thiserror::Error;

/// Coordinate axis selector.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Axis {
    /// First coordinate.
    X,
    /// Second coordinate.
    Y,
    /// Third coordinate.
    Z,
}

impl Axis {
    const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        })
    }
}

/// A point with integer coordinates.
///
/// # Examples
/// ```
/// use linkage_core::{Axis, Point3};
///
/// let point: Point3 = "162,817,812".parse()?;
/// assert_eq!(point, Point3::new(162, 817, 812));
/// assert_eq!(point.coordinate(Axis::Y), 817);
/// # Ok::<(), linkage_core::ParsePointError>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Point3 {
    x: i64,
    y: i64,
    z: i64,
}

impl Point3 {
    /// Creates a point from its coordinates.
    #[must_use]
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    /// Returns the first coordinate.
    #[must_use]
    #[rustfmt::skip]
    pub const fn x(&self) -> i64 { self.x }

    /// Returns the second coordinate.
    #[must_use]
    #[rustfmt::skip]
    pub const fn y(&self) -> i64 { self.y }

    /// Returns the third coordinate.
    #[must_use]
    #[rustfmt::skip]
    pub const fn z(&self) -> i64 { self.z }

    /// Returns the coordinate along `axis`.
    #[must_use]
    pub const fn coordinate(&self, axis: Axis) -> i64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Returns the exact squared Euclidean distance to `other`.
    ///
    /// Differences are widened to `i128`; the sum saturates at `u128::MAX`
    /// for points near opposite corners of the `i64` range.
    #[must_use]
    pub fn squared_distance(&self, other: &Self) -> u128 {
        Axis::ALL
            .iter()
            .map(|&axis| {
                let delta = i128::from(self.coordinate(axis)) - i128::from(other.coordinate(axis));
                delta.unsigned_abs().pow(2)
            })
            .fold(0u128, u128::saturating_add)
    }

    /// Returns the Euclidean distance to `other` in double precision.
    ///
    /// # Examples
    /// ```
    /// use linkage_core::Point3;
    ///
    /// let origin = Point3::new(0, 0, 0);
    /// assert_eq!(origin.euclidean_distance(&Point3::new(2, 3, 6)), 7.0);
    /// ```
    #[must_use]
    pub fn euclidean_distance(&self, other: &Self) -> f64 {
        (self.squared_distance(other) as f64).sqrt()
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.z)
    }
}

/// Failure to parse a `x,y,z` line into a [`Point3`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ParsePointError {
    /// The text did not contain exactly three comma-separated fields.
    #[error("expected 3 comma-separated coordinates, found {found}")]
    WrongArity {
        /// Number of fields present in the text.
        found: usize,
    },
    /// A field was not a valid integer.
    #[error("invalid {axis} coordinate `{raw}`: {source}")]
    InvalidCoordinate {
        /// Axis whose field failed to parse.
        axis: Axis,
        /// The rejected field, trimmed.
        raw: String,
        /// Underlying integer parse failure.
        #[source]
        source: ParseIntError,
    },
}

impl FromStr for Point3 {
    type Err = ParsePointError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = text.trim().split(',').map(str::trim).collect();
        let [x, y, z] = fields.as_slice() else {
            return Err(ParsePointError::WrongArity {
                found: fields.len(),
            });
        };
        Ok(Self::new(
            parse_coordinate(Axis::X, x)?,
            parse_coordinate(Axis::Y, y)?,
            parse_coordinate(Axis::Z, z)?,
        ))
    }
}

fn parse_coordinate(axis: Axis, raw: &str) -> Result<i64, ParsePointError> {
    raw.parse()
        .map_err(|source| ParsePointError::InvalidCoordinate {
            axis,
            raw: raw.to_owned(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case("0,0,0", Point3::new(0, 0, 0))]
    #[case("162,817,812", Point3::new(162, 817, 812))]
    #[case(" -3, 4 ,-5 ", Point3::new(-3, 4, -5))]
    #[case("1,2,3\r", Point3::new(1, 2, 3))]
    fn parses_valid_points(#[case] raw: &str, #[case] expected: Point3) {
        let point: Point3 = raw.parse().expect("point must parse");
        assert_eq!(point, expected);
    }

    #[rstest]
    #[case("", 1)]
    #[case("1,2", 2)]
    #[case("1,2,3,4", 4)]
    fn rejects_wrong_arity(#[case] raw: &str, #[case] found: usize) {
        let err = raw.parse::<Point3>().expect_err("arity must be checked");
        assert_eq!(err, ParsePointError::WrongArity { found });
    }

    #[rstest]
    #[case("a,2,3", Axis::X, "a")]
    #[case("1,,3", Axis::Y, "")]
    #[case("1,2,3.5", Axis::Z, "3.5")]
    fn rejects_invalid_coordinates(#[case] raw: &str, #[case] axis: Axis, #[case] field: &str) {
        let err = raw.parse::<Point3>().expect_err("coordinate must be checked");
        match err {
            ParsePointError::InvalidCoordinate {
                axis: got_axis,
                raw: got_raw,
                ..
            } => {
                assert_eq!(got_axis, axis);
                assert_eq!(got_raw, field);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn display_round_trips_through_parse() {
        let point = Point3::new(-7, 0, 42);
        assert_eq!(point.to_string(), "-7,0,42");
        assert_eq!(point.to_string().parse::<Point3>(), Ok(point));
    }

    #[rstest]
    #[case(Point3::new(0, 0, 0), Point3::new(0, 0, 1), 1.0)]
    #[case(Point3::new(0, 0, 0), Point3::new(0, 0, 2), 2.0)]
    #[case(Point3::new(1, 2, 3), Point3::new(1, 2, 3), 0.0)]
    #[case(Point3::new(-1, -1, -1), Point3::new(1, 1, 1), 12f64.sqrt())]
    fn euclidean_distance_matches_formula(
        #[case] left: Point3,
        #[case] right: Point3,
        #[case] expected: f64,
    ) {
        assert_eq!(left.euclidean_distance(&right), expected);
        assert_eq!(right.euclidean_distance(&left), expected);
    }

    #[test]
    fn squared_distance_does_not_overflow_at_extremes() {
        let low = Point3::new(i64::MIN, i64::MIN, i64::MIN);
        let high = Point3::new(i64::MAX, i64::MAX, i64::MAX);
        let per_axis = u128::from(u64::MAX).pow(2);
        assert_eq!(low.squared_distance(&high), per_axis.saturating_mul(3));
    }
}
