//! Linkage core library.
//!
//! Incremental single-linkage clustering over a complete graph. Nodes are
//! seeded into a [`DisjointSetForest`], every pairwise edge is weighted by a
//! [`Metric`] and sorted, and a [`ClusteringDriver`] applies the edges in
//! order until a [`StopPredicate`] asks it to stop. The extractors in this
//! crate turn the resulting forest, or the edge that would have been applied
//! next, into a final answer.
//!
//! ```
//! use linkage_core::{
//!     Euclidean, Point3, StopCondition, cluster, largest_component_product, top_count,
//! };
//!
//! let nodes = [
//!     Point3::new(0, 0, 0),
//!     Point3::new(0, 0, 1),
//!     Point3::new(10, 0, 0),
//!     Point3::new(10, 0, 1),
//! ];
//! let outcome = cluster(&nodes, &Euclidean, StopCondition::after_steps(1)?)?;
//! assert_eq!(largest_component_product(outcome.forest(), top_count(3)?), 2);
//! # Ok::<(), linkage_core::LinkageError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

mod driver;
mod edges;
mod error;
mod extract;
mod forest;
mod point;

#[cfg(test)]
mod test_utils;

pub use crate::{
    driver::{
        ClusteringDriver, KruskalOutcome, KruskalStep, StopCondition, StopPredicate, cluster,
    },
    edges::{
        Euclidean, Metric, WeightedEdge, complete_edge_count, generate_edges, sort_edges,
        sorted_edges,
    },
    error::{
        EdgeError, EdgeErrorCode, ForestError, ForestErrorCode, LinkageError, LinkageErrorCode,
        Result,
    },
    extract::{bridge_coordinate_product, largest_component_product, top_count},
    forest::{Component, DisjointSetForest},
    point::{Axis, ParsePointError, Point3},
};
