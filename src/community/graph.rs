//! Dense weighted graph and ordered neighbor lists.

use crate::error::{ProblemError, Result};
use std::cmp::Ordering;

/// Symmetric, non-negative weight matrix over `n` nodes.
///
/// Stored dense and row-major. Node strength (sum of incident weights) and
/// the total edge weight are computed once at construction; the graph is
/// immutable afterwards.
///
/// # Examples
///
/// ```
/// use u_problem::community::Graph;
///
/// let graph = Graph::from_edges(4, &[(0, 1, 1.0), (2, 3, 1.0)]).unwrap();
/// assert_eq!(graph.node_count(), 4);
/// assert_eq!(graph.weight(1, 0), 1.0);
/// assert_eq!(graph.strength(2), 1.0);
/// assert_eq!(graph.total_weight(), 2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    n: usize,
    weights: Vec<f64>,
    strength: Vec<f64>,
    total_weight: f64,
}

impl Graph {
    /// Builds a graph from a flat row-major buffer.
    ///
    /// # Errors
    ///
    /// - [`ProblemError::NonSquareGraph`] if `rows != cols` or the buffer
    ///   length is not `rows * cols`
    /// - [`ProblemError::InvalidWeight`] for negative or non-finite weights
    /// - [`ProblemError::SelfLoop`] for a non-zero diagonal entry
    /// - [`ProblemError::AsymmetricGraph`] if `w(i, j) != w(j, i)`
    pub fn from_dense(rows: usize, cols: usize, weights: Vec<f64>) -> Result<Self> {
        if rows != cols || weights.len() != rows * cols {
            return Err(ProblemError::NonSquareGraph { rows, cols });
        }
        let n = rows;

        for i in 0..n {
            for j in 0..n {
                let w = weights[i * n + j];
                if !w.is_finite() || w < 0.0 {
                    return Err(ProblemError::InvalidWeight {
                        row: i,
                        col: j,
                        weight: w,
                    });
                }
            }
        }
        for i in 0..n {
            if weights[i * n + i] != 0.0 {
                return Err(ProblemError::SelfLoop { node: i });
            }
            for j in (i + 1)..n {
                if weights[i * n + j] != weights[j * n + i] {
                    return Err(ProblemError::AsymmetricGraph { row: i, col: j });
                }
            }
        }

        let strength: Vec<f64> = (0..n)
            .map(|i| weights[i * n..(i + 1) * n].iter().sum())
            .collect();
        let total_weight = strength.iter().sum::<f64>() / 2.0;

        Ok(Self {
            n,
            weights,
            strength,
            total_weight,
        })
    }

    /// Builds a graph from one `Vec` per row.
    ///
    /// # Errors
    ///
    /// Same as [`from_dense`](Self::from_dense); ragged rows are reported
    /// as [`ProblemError::NonSquareGraph`].
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = rows.len();
        if let Some(row) = rows.iter().find(|r| r.len() != n) {
            return Err(ProblemError::NonSquareGraph {
                rows: n,
                cols: row.len(),
            });
        }
        Self::from_dense(n, n, rows.into_iter().flatten().collect())
    }

    /// Builds an undirected graph from `(u, v, weight)` triples.
    ///
    /// Repeated pairs accumulate their weights.
    ///
    /// # Errors
    ///
    /// - [`ProblemError::EdgeOutOfRange`] if an endpoint is `>= n`
    /// - [`ProblemError::SelfLoop`] if `u == v` with non-zero weight
    /// - [`ProblemError::InvalidWeight`] for negative or non-finite weights
    pub fn from_edges(n: usize, edges: &[(usize, usize, f64)]) -> Result<Self> {
        let mut weights = vec![0.0; n * n];
        for &(u, v, w) in edges {
            if u >= n || v >= n {
                return Err(ProblemError::EdgeOutOfRange { u, v, nodes: n });
            }
            weights[u * n + v] += w;
            if u != v {
                weights[v * n + u] += w;
            }
        }
        Self::from_dense(n, n, weights)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.n
    }

    /// Weight of edge `(i, j)`; 0 when absent.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[inline]
    pub fn weight(&self, i: usize, j: usize) -> f64 {
        self.weights[i * self.n + j]
    }

    /// Row `i` of the weight matrix.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.weights[i * self.n..(i + 1) * self.n]
    }

    /// Sum of weights incident to node `i`.
    #[inline]
    pub fn strength(&self, i: usize) -> f64 {
        self.strength[i]
    }

    /// Sum of all edge weights, each undirected edge counted once.
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Nodes with no incident edge.
    pub fn isolated_nodes(&self) -> Vec<usize> {
        (0..self.n).filter(|&i| self.strength[i] == 0.0).collect()
    }
}

/// Per-node neighbors ordered by non-increasing edge weight.
///
/// Ties are broken by ascending node id. Position `k` of node `i`'s list is
/// what genotype value `k` at locus `i` selects.
///
/// # Examples
///
/// ```
/// use u_problem::community::{Graph, NeighborList};
///
/// let graph = Graph::from_edges(3, &[(0, 1, 1.0), (0, 2, 3.0)]).unwrap();
/// let neighbors = NeighborList::from_graph(&graph);
/// assert_eq!(neighbors.get(0), &[2, 1]);
/// assert_eq!(neighbors.get(1), &[0]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborList {
    lists: Vec<Vec<usize>>,
}

impl NeighborList {
    /// Builds the ordered neighbor list of `graph`.
    ///
    /// Only positive-weight edges produce neighbors.
    pub fn from_graph(graph: &Graph) -> Self {
        let lists = (0..graph.node_count())
            .map(|i| {
                let row = graph.row(i);
                let mut neighbors: Vec<usize> =
                    (0..row.len()).filter(|&j| j != i && row[j] > 0.0).collect();
                neighbors.sort_by(|&a, &b| {
                    row[b]
                        .partial_cmp(&row[a])
                        .unwrap_or(Ordering::Equal)
                        .then(a.cmp(&b))
                });
                neighbors
            })
            .collect();
        Self { lists }
    }

    /// Wraps lists produced by an external builder, checked against `graph`.
    ///
    /// The lists are trusted to be sorted already.
    ///
    /// # Errors
    ///
    /// - [`ProblemError::NeighborListMismatch`] if there is not exactly one
    ///   list per node
    /// - [`ProblemError::NeighborOutOfRange`] if a listed id is not a node
    /// - [`ProblemError::NotANeighbor`] if a node lists itself or a node it
    ///   has no positive-weight edge to; isolated nodes must have empty lists
    pub fn from_lists(graph: &Graph, lists: Vec<Vec<usize>>) -> Result<Self> {
        let n = graph.node_count();
        if lists.len() != n {
            return Err(ProblemError::NeighborListMismatch {
                expected: n,
                found: lists.len(),
            });
        }
        for (node, list) in lists.iter().enumerate() {
            for &neighbor in list {
                if neighbor >= n {
                    return Err(ProblemError::NeighborOutOfRange {
                        node,
                        neighbor,
                        nodes: n,
                    });
                }
                if neighbor == node || graph.weight(node, neighbor) <= 0.0 {
                    return Err(ProblemError::NotANeighbor { node, neighbor });
                }
            }
        }
        Ok(Self { lists })
    }

    /// Number of nodes covered.
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// Whether the list covers no node.
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Ordered neighbors of node `i`.
    pub fn get(&self, i: usize) -> &[usize] {
        &self.lists[i]
    }

    /// Length of the longest list.
    pub fn max_degree(&self) -> usize {
        self.lists.iter().map(Vec::len).max().unwrap_or(0)
    }
}
