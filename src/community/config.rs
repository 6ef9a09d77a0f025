//! Community-detection problem configuration.
//!
//! [`CommunityConfig`] collects the objectives and optional collaborators
//! of a [`CommunityProblem`](super::CommunityProblem) before the graph is
//! bound to them.

use super::graph::{Graph, NeighborList};
use super::metric::QualityMetric;
use crate::error::{ProblemError, Result};
use crate::problem::SpaceBoundary;
use std::fmt;
use std::sync::Arc;

/// Objectives and collaborators of a community-detection problem.
///
/// Metrics and maximize flags are parallel lists: objective `i` is
/// `metrics[i]` with orientation `maximize[i]`.
///
/// # Builder Pattern
///
/// ```
/// use u_problem::community::{CommunityConfig, Modularity, QLi};
///
/// let config = CommunityConfig::default()
///     .with_metric(QLi)
///     .with_oriented_metric(Modularity::default(), true);
/// assert_eq!(config.metric_names(), vec!["QLi", "Modularity"]);
/// assert_eq!(config.maximize, vec![true, true]);
/// ```
#[derive(Clone, Default)]
pub struct CommunityConfig {
    /// Quality metrics, one per objective.
    pub metrics: Vec<Arc<dyn QualityMetric>>,

    /// Maximize flag per objective.
    pub maximize: Vec<bool>,

    /// Pre-built ordered neighbor lists.
    ///
    /// `None` derives them from the graph (non-increasing weight, ties by
    /// node id).
    pub neighbors: Option<Vec<Vec<usize>>>,

    /// Decision-space boundary.
    ///
    /// `None` uses `(0, n - 1)` in each of the `n` dimensions.
    pub boundary: Option<SpaceBoundary<usize>>,
}

impl fmt::Debug for CommunityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommunityConfig")
            .field("metrics", &self.metric_names())
            .field("maximize", &self.maximize)
            .field("neighbors", &self.neighbors.as_ref().map(Vec::len))
            .field("boundary", &self.boundary.as_ref().map(SpaceBoundary::dimension))
            .finish()
    }
}

impl CommunityConfig {
    /// Adds a metric in its natural orientation.
    pub fn with_metric<M: QualityMetric + 'static>(self, metric: M) -> Self {
        let maximize = metric.maximize();
        self.with_oriented_metric(metric, maximize)
    }

    /// Adds a metric with an explicit maximize flag.
    pub fn with_oriented_metric<M: QualityMetric + 'static>(
        mut self,
        metric: M,
        maximize: bool,
    ) -> Self {
        self.metrics.push(Arc::new(metric));
        self.maximize.push(maximize);
        self
    }

    /// Replaces the metric and flag lists.
    ///
    /// The lists are not checked here; see [`validate`](Self::validate).
    pub fn with_metrics(mut self, metrics: Vec<Arc<dyn QualityMetric>>, maximize: Vec<bool>) -> Self {
        self.metrics = metrics;
        self.maximize = maximize;
        self
    }

    /// Sets pre-built neighbor lists.
    pub fn with_neighbors(mut self, neighbors: Vec<Vec<usize>>) -> Self {
        self.neighbors = Some(neighbors);
        self
    }

    /// Sets the decision-space boundary.
    pub fn with_boundary(mut self, boundary: SpaceBoundary<usize>) -> Self {
        self.boundary = Some(boundary);
        self
    }

    /// Names of the configured metrics, in objective order.
    pub fn metric_names(&self) -> Vec<&str> {
        self.metrics.iter().map(|m| m.name()).collect()
    }

    /// Validates the configuration against `graph`.
    ///
    /// # Errors
    ///
    /// - [`ProblemError::ObjectiveCountMismatch`] if metric and flag lists
    ///   differ in length
    /// - [`ProblemError::NoObjectives`] if no metric is configured
    /// - [`ProblemError::DimensionMismatch`] if the boundary dimension is
    ///   not the node count
    /// - neighbor-list errors from [`NeighborList::from_lists`]
    pub fn validate(&self, graph: &Graph) -> Result<()> {
        self.resolve(graph).map(|_| ())
    }

    /// Validates and produces the neighbor list and boundary.
    pub(crate) fn resolve(&self, graph: &Graph) -> Result<(NeighborList, SpaceBoundary<usize>)> {
        if self.metrics.len() != self.maximize.len() {
            return Err(ProblemError::ObjectiveCountMismatch {
                metrics: self.metrics.len(),
                flags: self.maximize.len(),
            });
        }
        if self.metrics.is_empty() {
            return Err(ProblemError::NoObjectives);
        }

        let n = graph.node_count();
        let boundary = match &self.boundary {
            Some(b) if b.dimension() != n => {
                return Err(ProblemError::DimensionMismatch {
                    expected: n,
                    found: b.dimension(),
                });
            }
            Some(b) => b.clone(),
            None => SpaceBoundary::uniform(n, 0, n.saturating_sub(1)),
        };

        let neighbors = match &self.neighbors {
            Some(lists) => NeighborList::from_lists(graph, lists.clone())?,
            None => NeighborList::from_graph(graph),
        };

        Ok((neighbors, boundary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::community::metric::{Modularity, QLi};

    fn pairs() -> Graph {
        Graph::from_edges(4, &[(0, 1, 1.0), (2, 3, 1.0)]).unwrap()
    }

    #[test]
    fn test_default_is_empty() {
        let config = CommunityConfig::default();
        assert!(config.metrics.is_empty());
        assert!(config.maximize.is_empty());
        assert!(config.neighbors.is_none());
        assert!(config.boundary.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = CommunityConfig::default()
            .with_metric(QLi)
            .with_oriented_metric(Modularity::default(), false)
            .with_neighbors(vec![vec![1], vec![0], vec![3], vec![2]])
            .with_boundary(SpaceBoundary::uniform(4, 0, 1));

        assert_eq!(config.metric_names(), vec!["QLi", "Modularity"]);
        assert_eq!(config.maximize, vec![true, false]);
        assert_eq!(config.neighbors.as_ref().map(Vec::len), Some(4));
        assert!(config.validate(&pairs()).is_ok());
    }

    #[test]
    fn test_validate_count_mismatch() {
        let metrics: Vec<Arc<dyn QualityMetric>> = vec![Arc::new(QLi), Arc::new(Modularity::default())];
        let config = CommunityConfig::default().with_metrics(metrics, vec![true]);
        assert_eq!(
            config.validate(&pairs()).unwrap_err(),
            ProblemError::ObjectiveCountMismatch {
                metrics: 2,
                flags: 1
            }
        );
    }

    #[test]
    fn test_validate_no_objectives() {
        let config = CommunityConfig::default();
        assert_eq!(config.validate(&pairs()).unwrap_err(), ProblemError::NoObjectives);
    }

    #[test]
    fn test_validate_boundary_dimension() {
        let config = CommunityConfig::default()
            .with_metric(QLi)
            .with_boundary(SpaceBoundary::uniform(5, 0, 4));
        assert_eq!(
            config.validate(&pairs()).unwrap_err(),
            ProblemError::DimensionMismatch {
                expected: 4,
                found: 5
            }
        );
    }

    #[test]
    fn test_validate_neighbors() {
        let config = CommunityConfig::default()
            .with_metric(QLi)
            .with_neighbors(vec![vec![1]]);
        assert!(matches!(
            config.validate(&pairs()).unwrap_err(),
            ProblemError::NeighborListMismatch { .. }
        ));
    }

    #[test]
    fn test_default_boundary_spans_node_ids() {
        let (neighbors, boundary) = CommunityConfig::default()
            .with_metric(QLi)
            .resolve(&pairs())
            .unwrap();
        assert_eq!(neighbors, NeighborList::from_graph(&pairs()));
        assert_eq!(boundary, SpaceBoundary::uniform(4, 0, 3));
    }

    #[test]
    fn test_debug_lists_names() {
        let config = CommunityConfig::default().with_metric(QLi);
        let text = format!("{config:?}");
        assert!(text.contains("QLi"));
    }
}
