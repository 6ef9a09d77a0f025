//! Error type shared by problem construction and evaluation.

use thiserror::Error;

/// Result alias for `u-problem`.
pub type Result<T> = std::result::Result<T, ProblemError>;

/// Errors raised while building or evaluating a problem.
///
/// Variants up to [`ProblemError::InvalidBoundary`] are configuration
/// errors and can only surface from constructors. The remaining variants
/// abort a single evaluation call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProblemError {
    /// The weight matrix is not square.
    #[error("graph must be square: {rows} rows, {cols} columns")]
    NonSquareGraph { rows: usize, cols: usize },

    /// A weight is negative, NaN or infinite.
    #[error("invalid edge weight {weight} at ({row}, {col})")]
    InvalidWeight { row: usize, col: usize, weight: f64 },

    /// `w(row, col) != w(col, row)`.
    #[error("graph is not symmetric at ({row}, {col})")]
    AsymmetricGraph { row: usize, col: usize },

    /// Non-zero weight on the diagonal.
    #[error("self-loop on node {node}")]
    SelfLoop { node: usize },

    /// Metric and maximize-flag lists differ in length.
    #[error("{metrics} metrics configured with {flags} maximize flags")]
    ObjectiveCountMismatch { metrics: usize, flags: usize },

    /// No metric configured.
    #[error("a problem needs at least one objective")]
    NoObjectives,

    /// Decision-space dimensionality differs from the graph's node count.
    #[error("decision space has {found} dimensions, graph has {expected} nodes")]
    DimensionMismatch { expected: usize, found: usize },

    /// A supplied neighbor list does not cover every node.
    #[error("neighbor list covers {found} nodes, graph has {expected}")]
    NeighborListMismatch { expected: usize, found: usize },

    /// A supplied neighbor list references a node outside the graph.
    #[error("node {node} lists neighbor {neighbor}, graph has {nodes} nodes")]
    NeighborOutOfRange {
        node: usize,
        neighbor: usize,
        nodes: usize,
    },

    /// A supplied neighbor list names the node itself or a node it shares
    /// no positive-weight edge with.
    #[error("node {node} lists {neighbor}, which is not adjacent to it")]
    NotANeighbor { node: usize, neighbor: usize },

    /// An edge endpoint is not a node of the graph.
    #[error("edge ({u}, {v}) references a node outside 0..{nodes}")]
    EdgeOutOfRange { u: usize, v: usize, nodes: usize },

    /// A boundary dimension has `min > max`.
    #[error("boundary dimension {dimension} has min greater than max")]
    InvalidBoundary { dimension: usize },

    /// Decision vector length differs from the problem dimension.
    #[error("decision has {found} entries, expected {expected}")]
    DecisionLength { expected: usize, found: usize },

    /// Objective vector length differs from the objective count.
    #[error("objective vector has {found} entries, expected {expected}")]
    ObjectiveLength { expected: usize, found: usize },

    /// Communities overlap, miss a node, or reference unknown nodes.
    #[error("invalid partition: {0}")]
    InvalidPartition(String),

    /// A community with no members reached a metric.
    #[error("community {index} is empty")]
    EmptyCommunity { index: usize },
}

impl ProblemError {
    /// Whether this error can only be raised while building a problem.
    pub fn is_configuration(&self) -> bool {
        !matches!(
            self,
            ProblemError::DecisionLength { .. }
                | ProblemError::ObjectiveLength { .. }
                | ProblemError::InvalidPartition(_)
                | ProblemError::EmptyCommunity { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = ProblemError::NonSquareGraph { rows: 3, cols: 4 };
        assert_eq!(err.to_string(), "graph must be square: 3 rows, 4 columns");

        let err = ProblemError::ObjectiveCountMismatch {
            metrics: 2,
            flags: 1,
        };
        assert_eq!(err.to_string(), "2 metrics configured with 1 maximize flags");
    }

    #[test]
    fn test_configuration_classification() {
        assert!(ProblemError::NoObjectives.is_configuration());
        assert!(ProblemError::SelfLoop { node: 0 }.is_configuration());
        assert!(ProblemError::NotANeighbor {
            node: 2,
            neighbor: 0
        }
        .is_configuration());
        assert!(!ProblemError::EmptyCommunity { index: 0 }.is_configuration());
        assert!(!ProblemError::DecisionLength {
            expected: 4,
            found: 3
        }
        .is_configuration());
    }
}
