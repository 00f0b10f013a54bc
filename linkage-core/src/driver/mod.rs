//! Kruskal-style incremental clustering with caller-controlled stopping.
//!
//! The driver seeds a [`DisjointSetForest`] with every node and applies the
//! sorted edges one at a time. After each union it hands the predicate the
//! step count, the forest, and the next edge that has not been applied yet.
//! When the predicate fires the run stops immediately and the lookahead edge
//! is returned untouched, which lets callers inspect the merge that would
//! have happened next.

use std::{fmt::Debug, hash::Hash, num::NonZeroUsize};

use tracing::{debug, info, instrument, trace};

use crate::{
    edges::{Metric, WeightedEdge, sorted_edges},
    error::{ForestError, LinkageError, Result},
    forest::DisjointSetForest,
};

type ForestResult<T> = core::result::Result<T, ForestError>;

/// State exposed to a [`StopPredicate`] after each applied edge.
#[derive(Debug)]
pub struct KruskalStep<'a, T> {
    step: usize,
    forest: &'a DisjointSetForest<T>,
    lookahead: Option<&'a WeightedEdge<T>>,
}

impl<'a, T> KruskalStep<'a, T> {
    /// Returns the number of edges applied so far, including no-op unions.
    #[must_use]
    #[rustfmt::skip]
    pub fn step(&self) -> usize { self.step }

    /// Returns the forest after the most recent union.
    #[must_use]
    #[rustfmt::skip]
    pub fn forest(&self) -> &'a DisjointSetForest<T> { self.forest }

    /// Returns the next edge, which has not been applied.
    #[must_use]
    #[rustfmt::skip]
    pub fn lookahead(&self) -> Option<&'a WeightedEdge<T>> { self.lookahead }
}

/// Decides whether a clustering run should stop after the current step.
pub trait StopPredicate<T> {
    /// Returns `Ok(true)` to stop the run.
    ///
    /// # Errors
    /// Implementations may propagate [`ForestError`] from forest queries.
    fn should_stop(&mut self, step: &KruskalStep<'_, T>) -> ForestResult<bool>;
}

impl<T, F> StopPredicate<T> for F
where
    F: FnMut(&KruskalStep<'_, T>) -> bool,
{
    fn should_stop(&mut self, step: &KruskalStep<'_, T>) -> ForestResult<bool> {
        Ok(self(step))
    }
}

/// Built-in stopping rules.
///
/// # Examples
/// ```
/// use linkage_core::{LinkageError, StopCondition};
///
/// assert!(StopCondition::after_steps(10).is_ok());
/// assert_eq!(
///     StopCondition::after_steps(0),
///     Err(LinkageError::InvalidStepLimit { got: 0 }),
/// );
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StopCondition {
    /// Stop once the given number of edges has been applied.
    AfterSteps(NonZeroUsize),
    /// Stop when two components remain and the lookahead edge joins them.
    BridgeFound,
}

impl StopCondition {
    /// Builds a fixed-step condition, rejecting a zero limit.
    ///
    /// # Errors
    /// Returns [`LinkageError::InvalidStepLimit`] when `limit` is zero.
    pub fn after_steps(limit: usize) -> Result<Self> {
        NonZeroUsize::new(limit)
            .map(Self::AfterSteps)
            .ok_or(LinkageError::InvalidStepLimit { got: limit })
    }
}

impl<T> StopPredicate<T> for StopCondition
where
    T: Clone + Debug + Eq + Hash,
{
    fn should_stop(&mut self, step: &KruskalStep<'_, T>) -> ForestResult<bool> {
        match *self {
            Self::AfterSteps(limit) => Ok(step.step() >= limit.get()),
            Self::BridgeFound => bridges_last_two(step),
        }
    }
}

fn bridges_last_two<T>(step: &KruskalStep<'_, T>) -> ForestResult<bool>
where
    T: Clone + Debug + Eq + Hash,
{
    if step.forest().component_count() != 2 {
        return Ok(false);
    }
    let Some(edge) = step.lookahead() else {
        return Ok(false);
    };
    Ok(!step.forest().same_component(edge.left(), edge.right())?)
}

/// The forest and lookahead edge at the moment a run ended.
#[derive(Clone, Debug)]
pub struct KruskalOutcome<T> {
    forest: DisjointSetForest<T>,
    lookahead: Option<WeightedEdge<T>>,
    steps: usize,
    stopped: bool,
}

impl<T> KruskalOutcome<T> {
    /// Returns the forest as of the final step.
    #[must_use]
    #[rustfmt::skip]
    pub fn forest(&self) -> &DisjointSetForest<T> { &self.forest }

    /// Returns the edge that followed the final step, if any.
    #[must_use]
    #[rustfmt::skip]
    pub fn lookahead(&self) -> Option<&WeightedEdge<T>> { self.lookahead.as_ref() }

    /// Returns the number of edges applied.
    #[must_use]
    #[rustfmt::skip]
    pub fn steps(&self) -> usize { self.steps }

    /// Returns `true` when the predicate ended the run before the edges ran out.
    #[must_use]
    #[rustfmt::skip]
    pub fn stopped(&self) -> bool { self.stopped }

    /// Splits the outcome into the forest and the lookahead edge.
    #[must_use]
    pub fn into_parts(self) -> (DisjointSetForest<T>, Option<WeightedEdge<T>>) {
        (self.forest, self.lookahead)
    }
}

/// Applies sorted edges to a fresh forest until a predicate fires.
///
/// # Examples
/// ```
/// use linkage_core::{ClusteringDriver, Euclidean, Point3, StopCondition, sorted_edges};
///
/// let nodes = [Point3::new(0, 0, 0), Point3::new(0, 0, 1), Point3::new(0, 0, 9)];
/// let edges = sorted_edges(&nodes, &Euclidean)?;
/// let outcome = ClusteringDriver::new(StopCondition::after_steps(1)?).run(&nodes, &edges)?;
/// assert_eq!(outcome.forest().component_sizes(), [2, 1]);
/// assert!(outcome.stopped());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct ClusteringDriver<P> {
    predicate: P,
}

impl<P> ClusteringDriver<P> {
    /// Creates a driver that consults `predicate` after every step.
    #[must_use]
    pub const fn new(predicate: P) -> Self {
        Self { predicate }
    }

    /// Consumes the driver, returning its predicate.
    #[must_use]
    pub fn into_predicate(self) -> P {
        self.predicate
    }

    /// Seeds a forest with `nodes` and applies `edges` in order.
    ///
    /// `edges` must already be sorted; the driver applies them as given.
    ///
    /// # Errors
    /// Returns [`ForestError::DuplicateElement`] when `nodes` repeats a value,
    /// [`ForestError::UnknownElement`] when an edge references a node outside
    /// `nodes`, and any error raised by the predicate.
    #[instrument(
        name = "core.kruskal",
        err,
        skip_all,
        fields(nodes = nodes.len(), edges = edges.len()),
    )]
    pub fn run<T>(
        &mut self,
        nodes: &[T],
        edges: &[WeightedEdge<T>],
    ) -> ForestResult<KruskalOutcome<T>>
    where
        T: Clone + Debug + Eq + Hash,
        P: StopPredicate<T>,
    {
        let mut forest = DisjointSetForest::from_elements(nodes.iter().cloned())?;
        let mut steps = 0usize;
        let mut remaining = edges.iter().peekable();

        while let Some(edge) = remaining.next() {
            let merged = forest.union(edge.left(), edge.right())?;
            steps = steps.saturating_add(1);
            let lookahead = remaining.peek().copied();
            trace!(
                step = steps,
                merged,
                weight = edge.weight(),
                components = forest.component_count(),
                "applied edge"
            );

            let state = KruskalStep {
                step: steps,
                forest: &forest,
                lookahead,
            };
            if self.predicate.should_stop(&state)? {
                debug!(
                    step = steps,
                    components = forest.component_count(),
                    has_lookahead = lookahead.is_some(),
                    "stop predicate fired"
                );
                let lookahead = lookahead.cloned();
                return Ok(finish(forest, lookahead, steps, true));
            }
        }

        Ok(finish(forest, None, steps, false))
    }
}

fn finish<T>(
    forest: DisjointSetForest<T>,
    lookahead: Option<WeightedEdge<T>>,
    steps: usize,
    stopped: bool,
) -> KruskalOutcome<T>
where
    T: Clone + Debug + Eq + Hash,
{
    info!(
        steps,
        components = forest.component_count(),
        stopped,
        "clustering run completed"
    );
    KruskalOutcome {
        forest,
        lookahead,
        steps,
        stopped,
    }
}

/// Generates, sorts, and drives the complete graph over `nodes`.
///
/// # Errors
/// Returns [`LinkageError::Edge`] when the metric yields an unusable weight
/// and [`LinkageError::Forest`] when the forest rejects the input.
pub fn cluster<T, M, P>(nodes: &[T], metric: &M, predicate: P) -> Result<KruskalOutcome<T>>
where
    T: Clone + Debug + Eq + Hash,
    M: Metric<T> + ?Sized,
    P: StopPredicate<T>,
{
    let edges = sorted_edges(nodes, metric)?;
    let outcome = ClusteringDriver::new(predicate).run(nodes, &edges)?;
    Ok(outcome)
}

#[cfg(test)]
mod property;
