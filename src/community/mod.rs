//! Community detection problem.
//!
//! Decodes a locus-based genotype into a partition of a weighted graph and
//! scores the partition with pluggable quality metrics.
//!
//! # Pipeline
//!
//! 1. [`NeighborList`]: each node's neighbors, heaviest edge first
//! 2. [`Decoder`]: gene `i` selects one neighbor of node `i`; the selected
//!    links are merged and each connected group becomes a community
//! 3. [`QualityMetric`]: scores the [`Partition`]
//! 4. [`CommunityProblem`]: runs 2 and 3 behind the
//!    [`Problem`](crate::problem::Problem) contract, one objective per
//!    metric
//!
//! # Key Types
//!
//! - [`Graph`]: Dense symmetric weight matrix
//! - [`CommunityConfig`]: Metrics, flags, optional neighbor lists/boundary
//! - [`LocusDecoder`]: Union-find locus-based adjacency decoder
//! - [`QLi`], [`Modularity`]: Built-in metrics
//!
//! # References
//!
//! - Park & Song (1998), "A genetic algorithm for clustering problems"
//! - Pizzuti (2008), "GA-Net: A Genetic Algorithm for Community Detection
//!   in Social Networks"

mod config;
mod decode;
mod graph;
pub mod metric;
mod partition;
mod problem;

pub use config::CommunityConfig;
pub use decode::{Decoder, LocusDecoder};
pub use graph::{Graph, NeighborList};
pub use metric::{
    community_degrees, community_inner_degree, community_outer_degree, Modularity, QLi,
    QualityMetric,
};
pub use partition::Partition;
pub use problem::CommunityProblem;
