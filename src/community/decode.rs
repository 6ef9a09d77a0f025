//! Locus-based genotype decoding.

use super::graph::{Graph, NeighborList};
use super::partition::Partition;
use crate::error::{ProblemError, Result};

/// Turns a genotype into a partition.
///
/// Implementations must be total over decisions of the right length and
/// must not keep mutable state between calls, since a problem may decode
/// from several threads at once.
pub trait Decoder: Send + Sync {
    /// Decodes `decision` into a partition of `graph`'s nodes.
    ///
    /// # Errors
    ///
    /// [`ProblemError::DecisionLength`] if `decision.len()` differs from
    /// the node count.
    fn decode(
        &self,
        graph: &Graph,
        neighbors: &NeighborList,
        decision: &[usize],
    ) -> Result<Partition>;
}

/// Locus-based adjacency decoder.
///
/// Entry `i` of the genotype selects one of node `i`'s ordered neighbors;
/// the selected links are merged with a union-find pass and every
/// connected group becomes a community. Out-of-range entries wrap modulo
/// the list length, so every genotype decodes. Nodes without neighbors
/// stay singletons whatever their entry.
///
/// # Complexity
///
/// O(n α(n)) for the merge plus O(n) to collect the groups.
///
/// # Examples
///
/// ```
/// use u_problem::community::{Decoder, Graph, LocusDecoder, NeighborList};
///
/// let graph = Graph::from_edges(4, &[(0, 1, 1.0), (2, 3, 1.0)]).unwrap();
/// let neighbors = NeighborList::from_graph(&graph);
/// let partition = LocusDecoder.decode(&graph, &neighbors, &[0, 0, 0, 0]).unwrap();
/// assert_eq!(partition.communities(), &[vec![0, 1], vec![2, 3]]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocusDecoder;

impl LocusDecoder {
    /// Neighbor selected by `gene` at `node`, or `None` for an isolated node.
    pub fn target(neighbors: &NeighborList, node: usize, gene: usize) -> Option<usize> {
        let list = neighbors.get(node);
        if list.is_empty() {
            None
        } else {
            Some(list[gene % list.len()])
        }
    }
}

impl Decoder for LocusDecoder {
    fn decode(
        &self,
        graph: &Graph,
        neighbors: &NeighborList,
        decision: &[usize],
    ) -> Result<Partition> {
        let n = graph.node_count();
        if decision.len() != n {
            return Err(ProblemError::DecisionLength {
                expected: n,
                found: decision.len(),
            });
        }
        debug_assert_eq!(neighbors.len(), n);

        let mut sets = DisjointSet::new(n);
        for (node, &gene) in decision.iter().enumerate() {
            if let Some(target) = Self::target(neighbors, node, gene) {
                sets.union(node, target);
            }
        }
        Ok(sets.into_partition())
    }
}

/// Union-find over node indices with path compression and union by size.
#[derive(Debug, Clone)]
struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSet {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // Compress
        let mut cur = x;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        root
    }

    fn union(&mut self, a: usize, b: usize) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return;
        }
        let (big, small) = if self.size[ra] >= self.size[rb] {
            (ra, rb)
        } else {
            (rb, ra)
        };
        self.parent[small] = big;
        self.size[big] += self.size[small];
    }

    /// Groups nodes by root, in canonical order.
    fn into_partition(mut self) -> Partition {
        let n = self.parent.len();
        let mut slot = vec![usize::MAX; n];
        let mut communities: Vec<Vec<usize>> = Vec::new();
        for node in 0..n {
            let root = self.find(node);
            if slot[root] == usize::MAX {
                slot[root] = communities.len();
                communities.push(Vec::with_capacity(self.size[root]));
            }
            communities[slot[root]].push(node);
        }
        Partition::from_canonical(communities, n)
    }
}
