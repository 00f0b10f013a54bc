//! Fixture types for driver property tests.

use test_strategy::Arbitrary;

use crate::point::Point3;

/// Spatial arrangement of a generated point cloud.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum PointLayout {
    /// Points sampled uniformly in a cube.
    #[weight(3)]
    Scattered,
    /// Tight groups around a handful of random centres.
    #[weight(2)]
    Clustered,
    /// Points on a single axis-aligned line, which produces many equal
    /// weights.
    #[weight(2)]
    Collinear,
    /// Two groups separated by a gap much wider than either group.
    #[weight(2)]
    Separated,
}

/// A distinct set of points and the layout that produced it.
#[derive(Clone, Debug)]
pub(super) struct PointFixture {
    /// Layout used during generation.
    pub layout: PointLayout,
    /// Distinct points in generation order.
    pub points: Vec<Point3>,
}
