//! Partition quality metrics.
//!
//! A metric scores one [`Partition`] of a fixed [`Graph`]. Metrics are
//! used as trait objects, so new ones plug into a
//! [`CommunityProblem`](super::CommunityProblem) without touching the
//! decoder or the problem itself.
//!
//! # Metrics
//!
//! - [`QLi`]: Li et al. (2008) quantitative function, size-normalized
//! - [`Modularity`]: Newman-Girvan modularity
//!
//! # References
//!
//! - Li, Zhang, Wang, Zhang & Chen (2008), "Quantitative function for
//!   community detection", *Phys. Rev. E* 77, 036109
//! - Newman & Girvan (2004), "Finding and evaluating community structure
//!   in networks", *Phys. Rev. E* 69, 026113

mod modularity;
mod qli;

pub use modularity::Modularity;
pub use qli::QLi;

use super::graph::Graph;
use super::partition::Partition;
use crate::error::Result;

/// Scores a partition of a graph.
///
/// # Examples
///
/// ```ignore
/// /// Fewer communities is better.
/// struct CommunityCount;
///
/// impl QualityMetric for CommunityCount {
///     fn name(&self) -> &str { "CommunityCount" }
///     fn maximize(&self) -> bool { false }
///     fn score(&self, _graph: &Graph, partition: &Partition) -> Result<f64> {
///         Ok(partition.len() as f64)
///     }
/// }
/// ```
pub trait QualityMetric: Send + Sync {
    /// Returns the name of this metric.
    fn name(&self) -> &str;

    /// Whether larger scores are better.
    ///
    /// Used as the objective's maximize flag unless the problem is
    /// configured with an explicit one.
    fn maximize(&self) -> bool {
        true
    }

    /// Scores `partition` on `graph`.
    ///
    /// # Errors
    ///
    /// A computation fault, such as
    /// [`ProblemError::EmptyCommunity`](crate::ProblemError::EmptyCommunity).
    fn score(&self, graph: &Graph, partition: &Partition) -> Result<f64>;
}

/// Sum of edge weights with both endpoints in `community`.
///
/// Each undirected edge is counted once.
pub fn community_inner_degree(graph: &Graph, community: &[usize]) -> f64 {
    let mut inner = 0.0;
    for (k, &i) in community.iter().enumerate() {
        for &j in &community[k + 1..] {
            inner += graph.weight(i, j);
        }
    }
    inner
}

/// Sum of edge weights with exactly one endpoint in `community`.
///
/// Derived from node strengths minus twice the inner degree, which avoids
/// scanning full adjacency rows.
pub fn community_outer_degree(graph: &Graph, community: &[usize]) -> f64 {
    community_degrees(graph, community).1
}

/// `(inner, outer)` degree of `community` from a single inner scan.
pub fn community_degrees(graph: &Graph, community: &[usize]) -> (f64, f64) {
    let inner = community_inner_degree(graph, community);
    let strength: f64 = community.iter().map(|&i| graph.strength(i)).sum();
    (inner, strength - 2.0 * inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_plus_tail() -> Graph {
        // Triangle 0-1-2 plus edge 2-3.
        Graph::from_edges(4, &[(0, 1, 1.0), (1, 2, 2.0), (0, 2, 1.0), (2, 3, 4.0)]).unwrap()
    }

    #[test]
    fn test_inner_degree() {
        let g = triangle_plus_tail();
        assert_eq!(community_inner_degree(&g, &[0, 1, 2]), 4.0);
        assert_eq!(community_inner_degree(&g, &[3]), 0.0);
        assert_eq!(community_inner_degree(&g, &[]), 0.0);
    }

    #[test]
    fn test_outer_degree_matches_row_scan() {
        let g = triangle_plus_tail();
        let community = [0usize, 1, 2];
        let mut scanned = 0.0;
        for &i in &community {
            for j in 0..4 {
                if !community.contains(&j) {
                    scanned += g.weight(i, j);
                }
            }
        }
        assert_eq!(community_outer_degree(&g, &community), scanned);
        assert_eq!(community_outer_degree(&g, &community), 4.0);
    }

    #[test]
    fn test_outer_degree_counts_all_outside_nodes() {
        let g = triangle_plus_tail();
        // Node 2 reaches three different outside nodes.
        assert_eq!(community_outer_degree(&g, &[2]), 7.0);
    }

    #[test]
    fn test_degrees_agree_with_separate_helpers() {
        let g = triangle_plus_tail();
        for community in [vec![0, 1, 2], vec![2, 3], vec![1]] {
            assert_eq!(
                community_degrees(&g, &community),
                (
                    community_inner_degree(&g, &community),
                    community_outer_degree(&g, &community)
                )
            );
        }
    }
}
