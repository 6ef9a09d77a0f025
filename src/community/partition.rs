//! Node partitions.

use crate::error::{ProblemError, Result};

/// A division of nodes `0..n` into disjoint, non-empty communities.
///
/// Canonical form: members ascending inside each community, communities
/// ordered by their smallest member. Two partitions describing the same
/// grouping therefore compare equal.
///
/// # Examples
///
/// ```
/// use u_problem::community::Partition;
///
/// let p = Partition::from_labels(&[7, 7, 2, 2, 7]);
/// assert_eq!(p.communities(), &[vec![0, 1, 4], vec![2, 3]]);
/// assert_eq!(p.labels(), vec![0, 0, 1, 1, 0]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    communities: Vec<Vec<usize>>,
    node_count: usize,
}

impl Partition {
    /// Builds a partition from explicit communities.
    ///
    /// # Errors
    ///
    /// [`ProblemError::InvalidPartition`] if a community is empty, a node id
    /// is `>= node_count`, a node appears twice, or a node is missing.
    pub fn new(mut communities: Vec<Vec<usize>>, node_count: usize) -> Result<Self> {
        let mut seen = vec![false; node_count];
        for (index, community) in communities.iter().enumerate() {
            if community.is_empty() {
                return Err(ProblemError::InvalidPartition(format!(
                    "community {index} is empty"
                )));
            }
            for &node in community {
                if node >= node_count {
                    return Err(ProblemError::InvalidPartition(format!(
                        "node {node} outside 0..{node_count}"
                    )));
                }
                if seen[node] {
                    return Err(ProblemError::InvalidPartition(format!(
                        "node {node} assigned twice"
                    )));
                }
                seen[node] = true;
            }
        }
        if let Some(missing) = seen.iter().position(|&s| !s) {
            return Err(ProblemError::InvalidPartition(format!(
                "node {missing} not assigned"
            )));
        }

        for community in &mut communities {
            community.sort_unstable();
        }
        communities.sort_unstable_by_key(|c| c[0]);
        Ok(Self {
            communities,
            node_count,
        })
    }

    /// Builds a partition from one community label per node.
    ///
    /// Labels are arbitrary; nodes sharing a label share a community.
    pub fn from_labels<L: Eq + std::hash::Hash>(labels: &[L]) -> Self {
        let mut index = std::collections::HashMap::new();
        let mut communities: Vec<Vec<usize>> = Vec::new();
        for (node, label) in labels.iter().enumerate() {
            let slot = *index.entry(label).or_insert_with(|| {
                communities.push(Vec::new());
                communities.len() - 1
            });
            communities[slot].push(node);
        }
        // Labels are scanned in node order, so communities already come out
        // ordered by smallest member with ascending members.
        Self {
            communities,
            node_count: labels.len(),
        }
    }

    /// Builds a partition from groups already in canonical form.
    pub(crate) fn from_canonical(communities: Vec<Vec<usize>>, node_count: usize) -> Self {
        debug_assert!(communities.iter().all(|c| !c.is_empty()));
        debug_assert_eq!(communities.iter().map(Vec::len).sum::<usize>(), node_count);
        Self {
            communities,
            node_count,
        }
    }

    /// The communities in canonical order.
    pub fn communities(&self) -> &[Vec<usize>] {
        &self.communities
    }

    /// Number of communities.
    pub fn len(&self) -> usize {
        self.communities.len()
    }

    /// Whether there are no communities (only for an empty graph).
    pub fn is_empty(&self) -> bool {
        self.communities.is_empty()
    }

    /// Number of nodes covered.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Iterates over the communities.
    pub fn iter(&self) -> std::slice::Iter<'_, Vec<usize>> {
        self.communities.iter()
    }

    /// Community index of every node.
    pub fn labels(&self) -> Vec<usize> {
        let mut labels = vec![0; self.node_count];
        for (c, community) in self.communities.iter().enumerate() {
            for &node in community {
                labels[node] = c;
            }
        }
        labels
    }
}

impl<'a> IntoIterator for &'a Partition {
    type Item = &'a Vec<usize>;
    type IntoIter = std::slice::Iter<'a, Vec<usize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.communities.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_canonicalizes() {
        let p = Partition::new(vec![vec![3, 2], vec![1, 0]], 4).unwrap();
        assert_eq!(p.communities(), &[vec![0, 1], vec![2, 3]]);
        assert_eq!(p, Partition::from_labels(&['a', 'a', 'b', 'b']));
    }

    #[test]
    fn test_new_rejects_overlap() {
        let err = Partition::new(vec![vec![0, 1], vec![1]], 2).unwrap_err();
        assert!(matches!(err, ProblemError::InvalidPartition(_)));
    }

    #[test]
    fn test_new_rejects_missing_node() {
        assert!(Partition::new(vec![vec![0]], 2).is_err());
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(Partition::new(vec![vec![0, 5]], 2).is_err());
    }

    #[test]
    fn test_new_rejects_empty_community() {
        assert!(Partition::new(vec![vec![0, 1], vec![]], 2).is_err());
    }

    #[test]
    fn test_labels_round_trip() {
        let labels = vec![0, 1, 0, 2, 1];
        let p = Partition::from_labels(&labels);
        assert_eq!(p.len(), 3);
        assert_eq!(p.labels(), labels);
    }

    #[test]
    fn test_empty() {
        let p = Partition::from_labels::<usize>(&[]);
        assert!(p.is_empty());
        assert_eq!(p.node_count(), 0);
    }
}
