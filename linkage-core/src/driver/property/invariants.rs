//! Property runners for the clustering driver.
//!
//! - **Partition**: after every step each node belongs to exactly one
//!   component and resolves to that component's representative.
//! - **Monotonic merging**: the component count never grows and drops by
//!   at most one per step.
//! - **Completeness**: a run that never stops applies every edge and ends
//!   with a single component.
//! - **Step limit**: a fixed-step run stops after exactly that many edges.
//! - **Bridge**: the reported lookahead is the cheapest edge between the
//!   final two components.

use std::collections::HashSet;

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{
    driver::{ClusteringDriver, KruskalStep, StopCondition},
    edges::{Euclidean, Metric, complete_edge_count, sorted_edges},
    forest::DisjointSetForest,
    point::Point3,
};
use super::types::{PointFixture, PointLayout};

fn describe(fixture: &PointFixture) -> String {
    format!("layout={:?}, points={}", fixture.layout, fixture.points.len())
}

fn check_partition(forest: &DisjointSetForest<Point3>, expected: usize) -> Result<(), String> {
    let mut seen = HashSet::with_capacity(expected);
    for component in forest.components() {
        if component.is_empty() {
            return Err("empty component".to_owned());
        }
        for member in component.members() {
            if !seen.insert(*member) {
                return Err(format!("{member} listed twice"));
            }
            let root = forest.find(member).map_err(|err| err.to_string())?;
            if root != component.representative() {
                return Err(format!("{member} resolves to {root}"));
            }
        }
    }
    if seen.len() != expected {
        return Err(format!("partition covers {} of {expected}", seen.len()));
    }
    Ok(())
}

/// Drives the full edge list and checks the forest after every step.
pub(super) fn run_partition_property(fixture: &PointFixture) -> TestCaseResult {
    let nodes = &fixture.points;
    let edges = sorted_edges(nodes, &Euclidean)
        .map_err(|err| TestCaseError::fail(format!("{err} ({})", describe(fixture))))?;

    let mut failures = Vec::new();
    let mut previous = nodes.len();
    let observe = |step: &KruskalStep<'_, Point3>| {
        let forest = step.forest();
        let count = forest.component_count();
        if count > previous || previous - count > 1 {
            failures.push(format!(
                "step {}: component count moved {previous} -> {count}",
                step.step()
            ));
        }
        previous = count;
        if let Err(message) = check_partition(forest, nodes.len()) {
            failures.push(format!("step {}: {message}", step.step()));
        }
        false
    };

    let outcome = ClusteringDriver::new(observe)
        .run(nodes, &edges)
        .map_err(|err| TestCaseError::fail(format!("{err} ({})", describe(fixture))))?;

    if let Some(first) = failures.first() {
        return Err(TestCaseError::fail(format!("{first} ({})", describe(fixture))));
    }
    if outcome.stopped() || outcome.steps() != complete_edge_count(nodes.len()) {
        return Err(TestCaseError::fail(format!(
            "run applied {} edges, stopped={} ({})",
            outcome.steps(),
            outcome.stopped(),
            describe(fixture),
        )));
    }
    if outcome.forest().component_count() != 1 || outcome.lookahead().is_some() {
        return Err(TestCaseError::fail(format!(
            "exhausted run left {} components ({})",
            outcome.forest().component_count(),
            describe(fixture),
        )));
    }
    Ok(())
}

/// Checks that a fixed-step run applies exactly `limit` edges.
pub(super) fn run_step_limit_property(fixture: &PointFixture, limit: usize) -> TestCaseResult {
    let nodes = &fixture.points;
    let edges = sorted_edges(nodes, &Euclidean)
        .map_err(|err| TestCaseError::fail(err.to_string()))?;
    let limit = limit.clamp(1, edges.len());
    let condition =
        StopCondition::after_steps(limit).map_err(|err| TestCaseError::fail(err.to_string()))?;
    let outcome = ClusteringDriver::new(condition)
        .run(nodes, &edges)
        .map_err(|err| TestCaseError::fail(err.to_string()))?;

    if !outcome.stopped() || outcome.steps() != limit {
        return Err(TestCaseError::fail(format!(
            "limit {limit} applied {} edges, stopped={} ({})",
            outcome.steps(),
            outcome.stopped(),
            describe(fixture),
        )));
    }
    let expected_lookahead = edges.get(limit);
    if outcome.lookahead() != expected_lookahead {
        return Err(TestCaseError::fail(format!(
            "lookahead after {limit} steps is not the next sorted edge ({})",
            describe(fixture),
        )));
    }
    Ok(())
}

/// Checks the bridge rule against a brute-force minimum crossing distance.
pub(super) fn run_bridge_property(fixture: &PointFixture) -> TestCaseResult {
    let nodes = &fixture.points;
    let edges = sorted_edges(nodes, &Euclidean)
        .map_err(|err| TestCaseError::fail(err.to_string()))?;
    let outcome = ClusteringDriver::new(StopCondition::BridgeFound)
        .run(nodes, &edges)
        .map_err(|err| TestCaseError::fail(err.to_string()))?;

    if !outcome.stopped() {
        return Err(TestCaseError::fail(format!(
            "bridge not found ({})",
            describe(fixture)
        )));
    }
    let forest = outcome.forest();
    let components: Vec<Vec<Point3>> = forest
        .components()
        .map(|component| component.members().copied().collect())
        .collect();
    let [left, right] = components.as_slice() else {
        return Err(TestCaseError::fail(format!(
            "expected two components, found {} ({})",
            components.len(),
            describe(fixture),
        )));
    };
    let bridge = outcome
        .lookahead()
        .ok_or_else(|| TestCaseError::fail("stopped without a lookahead edge"))?;
    let crosses = forest
        .same_component(bridge.left(), bridge.right())
        .map_err(|err| TestCaseError::fail(err.to_string()))?;
    if crosses {
        return Err(TestCaseError::fail(format!(
            "bridge endpoints share a component ({})",
            describe(fixture)
        )));
    }

    let cheapest = left
        .iter()
        .flat_map(|a| right.iter().map(move |b| Euclidean.distance(a, b)))
        .fold(f64::INFINITY, f64::min);
    if bridge.weight() != cheapest {
        return Err(TestCaseError::fail(format!(
            "bridge weight {} differs from cheapest crossing {cheapest} ({})",
            bridge.weight(),
            describe(fixture),
        )));
    }

    if fixture.layout == PointLayout::Separated {
        let gap_side = |point: &Point3| point.x() > 500_000;
        if gap_side(bridge.left()) == gap_side(bridge.right()) {
            return Err(TestCaseError::fail(format!(
                "bridge does not span the gap ({})",
                describe(fixture)
            )));
        }
    }
    Ok(())
}
