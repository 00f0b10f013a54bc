//! Seeded synthetic point clouds for benchmarking.
//!
//! Points are drawn uniformly from a cube and de-duplicated, so every cloud
//! is a valid clustering input. The same seed always yields the same cloud.

use std::collections::HashSet;

use linkage_core::Point3;
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Errors that may occur during synthetic cloud generation.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// The requested point count was zero.
    #[error("point count must be greater than zero")]
    ZeroPoints,
    /// The cube cannot hold the requested number of distinct points.
    #[error("a cube of half-width {half_width} cannot hold {point_count} distinct points")]
    TooDense {
        /// Requested number of points.
        point_count: usize,
        /// Requested half-width.
        half_width: i64,
    },
}

/// Configuration for synthetic cloud generation.
#[derive(Clone, Debug)]
pub struct SyntheticConfig {
    /// Number of distinct points to generate.
    pub point_count: usize,
    /// Coordinates are drawn from `-half_width..=half_width`.
    pub half_width: i64,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// Generates a cloud of distinct points.
///
/// # Errors
/// Returns [`SyntheticError::ZeroPoints`] if `point_count` is zero, or
/// [`SyntheticError::TooDense`] if the cube has fewer lattice points than
/// requested.
///
/// # Examples
/// ```
/// use linkage_benches::source::{SyntheticConfig, generate_cloud};
///
/// let config = SyntheticConfig { point_count: 10, half_width: 100, seed: 42 };
/// let cloud = generate_cloud(&config).expect("valid config");
/// assert_eq!(cloud.len(), 10);
/// ```
pub fn generate_cloud(config: &SyntheticConfig) -> Result<Vec<Point3>, SyntheticError> {
    if config.point_count == 0 {
        return Err(SyntheticError::ZeroPoints);
    }
    if !fits(config) {
        return Err(SyntheticError::TooDense {
            point_count: config.point_count,
            half_width: config.half_width,
        });
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let span = i64::try_from(config.half_width.unsigned_abs()).unwrap_or(i64::MAX);
    let mut seen = HashSet::with_capacity(config.point_count);
    let mut points = Vec::with_capacity(config.point_count);
    while points.len() < config.point_count {
        let point = Point3::new(
            rng.gen_range(-span..=span),
            rng.gen_range(-span..=span),
            rng.gen_range(-span..=span),
        );
        if seen.insert(point) {
            points.push(point);
        }
    }
    Ok(points)
}

fn fits(config: &SyntheticConfig) -> bool {
    let side = u128::from(config.half_width.unsigned_abs())
        .saturating_mul(2)
        .saturating_add(1);
    let capacity = side.saturating_mul(side).saturating_mul(side);
    u128::try_from(config.point_count).is_ok_and(|count| count <= capacity)
}
