//! Answers derived from a finished clustering run.

use std::{fmt::Debug, hash::Hash, num::NonZeroUsize};

use crate::{
    edges::WeightedEdge,
    error::{LinkageError, Result},
    forest::DisjointSetForest,
    point::{Axis, Point3},
};

/// Validates how many of the largest components to multiply.
///
/// # Errors
/// Returns [`LinkageError::InvalidTopCount`] when `count` is zero.
pub fn top_count(count: usize) -> Result<NonZeroUsize> {
    NonZeroUsize::new(count).ok_or(LinkageError::InvalidTopCount { got: count })
}

/// Multiplies the sizes of the `top` largest components.
///
/// Fewer components than `top` multiplies whatever exists, and an empty
/// forest yields the empty product `1`. The product saturates at
/// [`u64::MAX`].
///
/// # Examples
/// ```
/// use linkage_core::{DisjointSetForest, largest_component_product, top_count};
///
/// let mut forest = DisjointSetForest::from_elements(0..6)?;
/// forest.union(&0, &1)?;
/// forest.union(&0, &2)?;
/// forest.union(&3, &4)?;
/// assert_eq!(largest_component_product(&forest, top_count(3)?), 6);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[must_use]
pub fn largest_component_product<T>(forest: &DisjointSetForest<T>, top: NonZeroUsize) -> u64
where
    T: Clone + Debug + Eq + Hash,
{
    forest
        .component_sizes()
        .into_iter()
        .take(top.get())
        .map(|size| u64::try_from(size).unwrap_or(u64::MAX))
        .fold(1u64, u64::saturating_mul)
}

/// Multiplies one coordinate of each endpoint of `edge`.
///
/// # Examples
/// ```
/// use linkage_core::{Axis, Point3, WeightedEdge, bridge_coordinate_product};
///
/// let edge = WeightedEdge::new(Point3::new(216, 146, 977), Point3::new(117, 168, 530), 1.0, 0);
/// assert_eq!(bridge_coordinate_product(&edge, Axis::X), 25_272);
/// ```
#[must_use]
pub fn bridge_coordinate_product(edge: &WeightedEdge<Point3>, axis: Axis) -> i128 {
    let (left, right) = edge.endpoints();
    i128::from(left.coordinate(axis)) * i128::from(right.coordinate(axis))
}
