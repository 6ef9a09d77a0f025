//! Li et al. quantitative function.

use super::{community_degrees, QualityMetric};
use crate::community::graph::Graph;
use crate::community::partition::Partition;
use crate::error::{ProblemError, Result};

/// `Σ_c (inner(c) − outer(c)) / |c|`.
///
/// Rewards dense, well separated communities; larger is better.
///
/// # Examples
///
/// ```
/// use u_problem::community::{Graph, Partition, QLi, QualityMetric};
///
/// let graph = Graph::from_edges(4, &[(0, 1, 1.0), (2, 3, 1.0)]).unwrap();
/// let partition = Partition::from_labels(&[0, 0, 1, 1]);
/// assert_eq!(QLi.score(&graph, &partition).unwrap(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QLi;

impl QualityMetric for QLi {
    fn name(&self) -> &str {
        "QLi"
    }

    fn score(&self, graph: &Graph, partition: &Partition) -> Result<f64> {
        let mut q = 0.0;
        for (index, community) in partition.iter().enumerate() {
            let (inner, outer) = community_degrees(graph, community);
            q += density_term(inner, outer, community.len(), index)?;
        }
        Ok(q)
    }
}

fn density_term(inner: f64, outer: f64, size: usize, index: usize) -> Result<f64> {
    if size == 0 {
        return Err(ProblemError::EmptyCommunity { index });
    }
    Ok((inner - outer) / size as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_pairs() {
        let g = Graph::from_edges(4, &[(0, 1, 1.0), (2, 3, 1.0)]).unwrap();
        let p = Partition::from_labels(&[0, 0, 1, 1]);
        assert_eq!(QLi.score(&g, &p).unwrap(), 1.0);
    }

    #[test]
    fn test_single_community_has_no_outer_term() {
        let g = Graph::from_edges(5, &[(0, 1, 2.0), (1, 2, 1.0), (3, 4, 3.0), (0, 4, 1.0)]).unwrap();
        let p = Partition::from_labels(&[0; 5]);
        assert_eq!(QLi.score(&g, &p).unwrap(), g.total_weight() / 5.0);
    }

    #[test]
    fn test_cut_edges_penalized() {
        // 0-1 (w=2), 1-2 (w=1); split as {0,1} {2}.
        let g = Graph::from_edges(3, &[(0, 1, 2.0), (1, 2, 1.0)]).unwrap();
        let p = Partition::from_labels(&[0, 0, 1]);
        // (2 - 1)/2 + (0 - 1)/1
        assert_eq!(QLi.score(&g, &p).unwrap(), -0.5);
    }

    #[test]
    fn test_isolated_singleton_contributes_zero() {
        let g = Graph::from_edges(3, &[(0, 1, 1.0)]).unwrap();
        let with_isolated = Partition::from_labels(&[0, 0, 1]);
        // {0,1} alone scores (1 - 0)/2.
        assert_eq!(QLi.score(&g, &with_isolated).unwrap(), 0.5);
    }

    #[test]
    fn test_empty_community_is_a_fault() {
        let err = density_term(0.0, 0.0, 0, 3).unwrap_err();
        assert_eq!(err, ProblemError::EmptyCommunity { index: 3 });
    }

    #[test]
    fn test_orientation_and_name() {
        assert!(QLi.maximize());
        assert_eq!(QLi.name(), "QLi");
    }
}
