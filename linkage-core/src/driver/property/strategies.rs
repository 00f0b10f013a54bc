//! Strategy builders for driver property tests.
//!
//! Each generator draws from a seeded [`SmallRng`] so failing cases can be
//! replayed from the seed alone.

use std::collections::HashSet;

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::point::Point3;

use super::types::{PointFixture, PointLayout};

/// Smallest generated cloud.
const MIN_POINTS: usize = 3;
/// Largest generated cloud. The complete graph grows quadratically.
const MAX_POINTS: usize = 24;
/// Half-width of the sampling cube for scattered clouds.
const SPAN: i64 = 1_000;
/// Distance between the two groups of a separated cloud.
const GAP: i64 = 1_000_000;

/// Generates fixtures across every [`PointLayout`].
pub(super) fn point_fixture_strategy() -> impl Strategy<Value = PointFixture> {
    (any::<PointLayout>(), any::<u64>()).prop_map(|(layout, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(layout, &mut rng)
    })
}

/// Generates a fixture for an explicit layout.
pub(super) fn generate_fixture(layout: PointLayout, rng: &mut SmallRng) -> PointFixture {
    let target = rng.gen_range(MIN_POINTS..=MAX_POINTS);
    let points = match layout {
        PointLayout::Scattered => scattered(rng, target),
        PointLayout::Clustered => clustered(rng, target),
        PointLayout::Collinear => collinear(rng, target),
        PointLayout::Separated => separated(rng, target),
    };
    PointFixture { layout, points }
}

fn scattered(rng: &mut SmallRng, target: usize) -> Vec<Point3> {
    distinct(target, || {
        Point3::new(
            rng.gen_range(-SPAN..=SPAN),
            rng.gen_range(-SPAN..=SPAN),
            rng.gen_range(-SPAN..=SPAN),
        )
    })
}

fn clustered(rng: &mut SmallRng, target: usize) -> Vec<Point3> {
    let centre_count = rng.gen_range(2..=4);
    let centres: Vec<Point3> = (0..centre_count)
        .map(|_| {
            Point3::new(
                rng.gen_range(-SPAN..=SPAN) * 10,
                rng.gen_range(-SPAN..=SPAN) * 10,
                rng.gen_range(-SPAN..=SPAN) * 10,
            )
        })
        .collect();
    distinct(target, || {
        let centre = centres[rng.gen_range(0..centres.len())];
        jitter(rng, centre, 20)
    })
}

fn collinear(rng: &mut SmallRng, target: usize) -> Vec<Point3> {
    let step = rng.gen_range(1..=5);
    let mut points: Vec<Point3> = (0..target)
        .map(|index| Point3::new(0, i64::try_from(index).unwrap_or(0) * step, 0))
        .collect();
    // Shuffle so generation order differs from spatial order.
    for index in (1..points.len()).rev() {
        let other = rng.gen_range(0..=index);
        points.swap(index, other);
    }
    points
}

fn separated(rng: &mut SmallRng, target: usize) -> Vec<Point3> {
    let far = Point3::new(GAP, 0, 0);
    let origin = Point3::new(0, 0, 0);
    let split = rng.gen_range(1..target);
    let mut points = distinct(split, || jitter(rng, origin, 50));
    let mut right = distinct(target - split, || jitter(rng, far, 50));
    points.append(&mut right);
    points
}

fn jitter(rng: &mut SmallRng, centre: Point3, radius: i64) -> Point3 {
    Point3::new(
        centre.x() + rng.gen_range(-radius..=radius),
        centre.y() + rng.gen_range(-radius..=radius),
        centre.z() + rng.gen_range(-radius..=radius),
    )
}

fn distinct(target: usize, mut sample: impl FnMut() -> Point3) -> Vec<Point3> {
    let mut seen = HashSet::with_capacity(target);
    let mut points = Vec::with_capacity(target);
    while points.len() < target {
        let point = sample();
        if seen.insert(point) {
            points.push(point);
        }
    }
    points
}
