//! Benchmark parameter types.
//!
//! Each type renders as a compact Criterion parameter label.

use std::fmt;

/// Parameters for an edge-construction benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct EdgeBenchParams {
    /// Number of points in the cloud.
    pub point_count: usize,
}

impl fmt::Display for EdgeBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={}", self.point_count)
    }
}

/// Parameters for a clustering benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct ClusteringBenchParams {
    /// Number of points in the cloud.
    pub point_count: usize,
    /// Step limit, or `None` when running to the bridge.
    pub step_limit: Option<usize>,
}

impl fmt::Display for ClusteringBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.step_limit {
            Some(limit) => write!(f, "n={},steps={limit}", self.point_count),
            None => write!(f, "n={},bridge", self.point_count),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{ClusteringBenchParams, EdgeBenchParams};

    #[rstest]
    #[case(Some(10), "n=20,steps=10")]
    #[case(None, "n=20,bridge")]
    fn clustering_params_render_labels(#[case] step_limit: Option<usize>, #[case] expected: &str) {
        let params = ClusteringBenchParams {
            point_count: 20,
            step_limit,
        };
        assert_eq!(params.to_string(), expected);
    }

    #[test]
    fn edge_params_render_labels() {
        assert_eq!(EdgeBenchParams { point_count: 5 }.to_string(), "n=5");
    }
}
