//! Complete-graph edge construction and ordering.
//!
//! [`generate_edges`] emits every unordered pair of input nodes exactly once
//! in row-major `(i, j)` order with `i < j`, numbering edges as it goes. The
//! sequence number is the tie-break in [`sort_edges`], so edges of equal
//! weight keep the order in which they were generated.

use std::cmp::Ordering;

use tracing::{debug, instrument};

use crate::{error::EdgeError, point::Point3};

/// Distance function between two nodes.
///
/// Closures of the form `Fn(&T, &T) -> f64` implement this trait, so ad-hoc
/// metrics need no wrapper type.
pub trait Metric<T> {
    /// Returns the distance between `left` and `right`.
    fn distance(&self, left: &T, right: &T) -> f64;
}

impl<T, F> Metric<T> for F
where
    F: Fn(&T, &T) -> f64,
{
    fn distance(&self, left: &T, right: &T) -> f64 {
        self(left, right)
    }
}

/// Straight-line distance between [`Point3`] values.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Euclidean;

impl Metric<Point3> for Euclidean {
    fn distance(&self, left: &Point3, right: &Point3) -> f64 {
        left.euclidean_distance(right)
    }
}

/// An unordered pair of nodes with its weight.
#[derive(Clone, Debug, PartialEq)]
pub struct WeightedEdge<T> {
    left: T,
    right: T,
    weight: f64,
    sequence: u64,
}

impl<T> WeightedEdge<T> {
    /// Creates an edge.
    #[must_use]
    pub const fn new(left: T, right: T, weight: f64, sequence: u64) -> Self {
        Self {
            left,
            right,
            weight,
            sequence,
        }
    }

    /// Returns the endpoint that appeared first in the node list.
    #[must_use]
    #[rustfmt::skip]
    pub const fn left(&self) -> &T { &self.left }

    /// Returns the endpoint that appeared second in the node list.
    #[must_use]
    #[rustfmt::skip]
    pub const fn right(&self) -> &T { &self.right }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f64 { self.weight }

    /// Returns the position at which the edge was generated.
    #[must_use]
    #[rustfmt::skip]
    pub const fn sequence(&self) -> u64 { self.sequence }

    /// Returns both endpoints.
    #[must_use]
    pub const fn endpoints(&self) -> (&T, &T) {
        (&self.left, &self.right)
    }

    fn ordering(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

/// Returns the number of edges in a complete graph over `node_count` nodes.
#[must_use]
pub const fn complete_edge_count(node_count: usize) -> usize {
    node_count.saturating_mul(node_count.saturating_sub(1)) / 2
}

/// Builds every unordered pair of `nodes`, weighted by `metric`.
///
/// # Examples
/// ```
/// use linkage_core::{Euclidean, Point3, generate_edges};
///
/// let nodes = [Point3::new(0, 0, 0), Point3::new(0, 0, 1), Point3::new(0, 0, 2)];
/// let edges = generate_edges(&nodes, &Euclidean)?;
/// let weights: Vec<f64> = edges.iter().map(|edge| edge.weight()).collect();
/// assert_eq!(weights, [1.0, 2.0, 1.0]);
/// # Ok::<(), linkage_core::EdgeError>(())
/// ```
///
/// # Errors
/// Returns [`EdgeError::NonFiniteWeight`] or [`EdgeError::NegativeWeight`]
/// when the metric yields an unusable weight.
#[instrument(name = "core.generate_edges", skip_all, fields(nodes = nodes.len()))]
pub fn generate_edges<T, M>(nodes: &[T], metric: &M) -> Result<Vec<WeightedEdge<T>>, EdgeError>
where
    T: Clone,
    M: Metric<T> + ?Sized,
{
    let mut edges = Vec::with_capacity(complete_edge_count(nodes.len()));
    let mut sequence = 0u64;
    for (left_index, left) in nodes.iter().enumerate() {
        for (offset, right) in nodes.iter().skip(left_index.saturating_add(1)).enumerate() {
            let right_index = left_index.saturating_add(1).saturating_add(offset);
            let weight = metric.distance(left, right);
            validate_weight(weight, left_index, right_index)?;
            edges.push(WeightedEdge::new(
                left.clone(),
                right.clone(),
                weight,
                sequence,
            ));
            sequence = sequence.saturating_add(1);
        }
    }
    debug!(edges = edges.len(), "generated complete edge list");
    Ok(edges)
}

fn validate_weight(weight: f64, left: usize, right: usize) -> Result<(), EdgeError> {
    if !weight.is_finite() {
        return Err(EdgeError::NonFiniteWeight { left, right });
    }
    if weight < 0.0 {
        return Err(EdgeError::NegativeWeight { left, right });
    }
    Ok(())
}

/// Orders edges by ascending weight, keeping generation order among ties.
pub fn sort_edges<T>(edges: &mut [WeightedEdge<T>]) {
    edges.sort_unstable_by(WeightedEdge::ordering);
}

/// Generates and sorts the complete edge list for `nodes`.
///
/// # Errors
/// Propagates any [`EdgeError`] from [`generate_edges`].
pub fn sorted_edges<T, M>(nodes: &[T], metric: &M) -> Result<Vec<WeightedEdge<T>>, EdgeError>
where
    T: Clone,
    M: Metric<T> + ?Sized,
{
    let mut edges = generate_edges(nodes, metric)?;
    sort_edges(&mut edges);
    Ok(edges)
}
