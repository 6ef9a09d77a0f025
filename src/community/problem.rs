//! Community detection as a multi-objective problem.

use super::config::CommunityConfig;
use super::decode::{Decoder, LocusDecoder};
use super::graph::{Graph, NeighborList};
use super::metric::QualityMetric;
use super::partition::Partition;
use crate::error::{ProblemError, Result};
use crate::problem::{Orientation, Problem, Solution, SpaceBoundary};
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Locus-based community detection scored by one or more metrics.
///
/// Each evaluation decodes the genotype once and scores the resulting
/// partition with every configured metric. Everything the problem holds
/// is read-only after construction, so `evaluate` can run concurrently on
/// distinct solutions.
///
/// # Examples
///
/// ```
/// use u_problem::community::{CommunityConfig, CommunityProblem, Graph, QLi};
/// use u_problem::problem::{Individual, Problem};
///
/// let graph = Graph::from_edges(4, &[(0, 1, 1.0), (2, 3, 1.0)]).unwrap();
/// let problem = CommunityProblem::new(graph, CommunityConfig::default().with_metric(QLi)).unwrap();
///
/// let mut individual = Individual::new(vec![0, 0, 0, 0]);
/// assert_eq!(problem.evaluate(&mut individual).unwrap(), 1);
/// // QLi is maximized, so it is stored negated.
/// assert_eq!(individual.objective, vec![-1.0]);
/// ```
pub struct CommunityProblem<D: Decoder = LocusDecoder> {
    graph: Graph,
    neighbors: NeighborList,
    boundary: SpaceBoundary<usize>,
    metrics: Vec<Arc<dyn QualityMetric>>,
    orientation: Orientation,
    decoder: D,
}

impl CommunityProblem<LocusDecoder> {
    /// Creates a problem with the locus-based decoder.
    ///
    /// # Errors
    ///
    /// Any error of [`CommunityConfig::validate`]. No problem value exists
    /// when construction fails.
    pub fn new(graph: Graph, config: CommunityConfig) -> Result<Self> {
        Self::with_decoder(graph, config, LocusDecoder)
    }
}

impl<D: Decoder> CommunityProblem<D> {
    /// Creates a problem with a custom decoder.
    pub fn with_decoder(graph: Graph, config: CommunityConfig, decoder: D) -> Result<Self> {
        let (neighbors, boundary) = config.resolve(&graph)?;

        let isolated = graph.isolated_nodes();
        if !isolated.is_empty() {
            warn!(
                count = isolated.len(),
                "graph has isolated nodes; they always decode as singletons"
            );
        }
        debug!(
            nodes = graph.node_count(),
            objectives = config.metrics.len(),
            metrics = ?config.metric_names(),
            maximize = ?config.maximize,
            "community problem built"
        );

        Ok(Self {
            graph,
            neighbors,
            boundary,
            orientation: Orientation::new(config.maximize),
            metrics: config.metrics,
            decoder,
        })
    }

    /// The graph being partitioned.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Ordered neighbor lists indexed by the genotype.
    pub fn neighbors(&self) -> &NeighborList {
        &self.neighbors
    }

    /// Maximize flag per objective.
    pub fn maximize(&self) -> &[bool] {
        self.orientation.flags()
    }

    /// Names of the metrics, in objective order.
    pub fn metric_names(&self) -> Vec<&str> {
        self.metrics.iter().map(|m| m.name()).collect()
    }

    /// Decodes `decision` into the partition it represents.
    pub fn decode(&self, decision: &[usize]) -> Result<Partition> {
        self.decoder.decode(&self.graph, &self.neighbors, decision)
    }

    /// Objective vector of `decision` in storage (minimization) orientation.
    ///
    /// # Errors
    ///
    /// [`ProblemError::DecisionLength`] for a decision of the wrong length,
    /// [`ProblemError::InvalidPartition`] if the decoder's partition does not
    /// cover exactly the graph's nodes, and any metric fault.
    pub fn objectives(&self, decision: &[usize]) -> Result<Vec<f64>> {
        let n = self.graph.node_count();
        if decision.len() != n {
            return Err(ProblemError::DecisionLength {
                expected: n,
                found: decision.len(),
            });
        }

        let partition = self.decode(decision)?;
        if partition.node_count() != n {
            return Err(ProblemError::InvalidPartition(format!(
                "decoder covered {} nodes, graph has {n}",
                partition.node_count()
            )));
        }

        let mut objective = Vec::with_capacity(self.metrics.len());
        for (i, metric) in self.metrics.iter().enumerate() {
            let raw = metric.score(&self.graph, &partition)?;
            objective.push(self.orientation.store(i, raw));
        }
        trace!(communities = partition.len(), ?objective, "evaluated");
        Ok(objective)
    }
}

impl<D: Decoder> Problem for CommunityProblem<D> {
    type Gene = usize;

    fn number_of_objectives(&self) -> usize {
        self.metrics.len()
    }

    fn boundary(&self) -> &SpaceBoundary<usize> {
        &self.boundary
    }

    fn evaluate<S>(&self, solution: &mut S) -> Result<usize>
    where
        S: Solution<Gene = Self::Gene>,
    {
        let objective = self.objectives(solution.decision())?;
        *solution.objective_mut() = objective;
        Ok(1)
    }

    fn fix(&self, objective: &mut [f64]) -> Result<()> {
        self.orientation.fix(objective)
    }
}
