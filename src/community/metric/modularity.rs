//! Newman-Girvan modularity.

use super::{community_inner_degree, QualityMetric};
use crate::community::graph::Graph;
use crate::community::partition::Partition;
use crate::error::Result;

/// `Σ_c [inner(c)/m − (tot(c)/2m)²]` with `m` the total edge weight and
/// `tot(c)` the summed strength of `c`'s members.
///
/// With γ = 1 it lies in `[-0.5, 1)`; larger is better. An edgeless graph
/// scores 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Modularity {
    /// Resolution γ scaling the null-model term. 1.0 is classic modularity.
    pub resolution: f64,
}

impl Default for Modularity {
    fn default() -> Self {
        Self { resolution: 1.0 }
    }
}

impl Modularity {
    /// Modularity with resolution γ.
    pub fn with_resolution(resolution: f64) -> Self {
        Self { resolution }
    }
}

impl QualityMetric for Modularity {
    fn name(&self) -> &str {
        "Modularity"
    }

    fn score(&self, graph: &Graph, partition: &Partition) -> Result<f64> {
        let m = graph.total_weight();
        if m == 0.0 {
            return Ok(0.0);
        }

        let mut q = 0.0;
        for community in partition {
            let inner = community_inner_degree(graph, community);
            let tot: f64 = community.iter().map(|&i| graph.strength(i)).sum();
            let share = tot / (2.0 * m);
            q += inner / m - self.resolution * share * share;
        }
        Ok(q)
    }
}
