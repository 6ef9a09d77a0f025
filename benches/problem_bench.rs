//! Criterion benchmarks for u-problem evaluation.
//!
//! Uses ring-of-cliques graphs (planted communities joined by light
//! bridges) to measure decode + scoring cost per evaluation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use u_problem::community::{
    CommunityConfig, CommunityProblem, Decoder, Graph, LocusDecoder, Modularity, QLi,
};
use u_problem::problem::{Individual, Problem};

// ===========================================================================
// Ring of cliques: `cliques` complete subgraphs of `size` nodes, each linked
// to the next by one bridge of weight 0.1
// ===========================================================================

fn ring_of_cliques(cliques: usize, size: usize) -> Graph {
    let n = cliques * size;
    let mut edges = Vec::new();
    for c in 0..cliques {
        let base = c * size;
        for i in 0..size {
            for j in (i + 1)..size {
                edges.push((base + i, base + j, 1.0));
            }
        }
        edges.push((base + size - 1, (base + size) % n, 0.1));
    }
    Graph::from_edges(n, &edges).expect("ring of cliques is a valid graph")
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("locus_decode");

    for &(cliques, size) in &[(10usize, 5usize), (20, 10), (50, 10)] {
        let graph = ring_of_cliques(cliques, size);
        let problem = CommunityProblem::new(graph, CommunityConfig::default().with_metric(QLi))
            .expect("valid configuration");
        let mut rng = StdRng::seed_from_u64(42);
        let decision = problem.random_decision(&mut rng);
        group.bench_with_input(
            BenchmarkId::from_parameter(cliques * size),
            &(problem, decision),
            |b, (p, d)| {
                b.iter(|| {
                    let partition = LocusDecoder.decode(p.graph(), p.neighbors(), black_box(d));
                    black_box(partition)
                })
            },
        );
    }
    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("community_evaluate");

    for &(cliques, size) in &[(10usize, 5usize), (20, 10), (50, 10)] {
        let graph = ring_of_cliques(cliques, size);
        let config = CommunityConfig::default()
            .with_metric(QLi)
            .with_metric(Modularity::default());
        let problem = CommunityProblem::new(graph, config).expect("valid configuration");
        let mut rng = StdRng::seed_from_u64(42);
        let individual = Individual::new(problem.random_decision(&mut rng));
        group.bench_with_input(
            BenchmarkId::from_parameter(cliques * size),
            &(problem, individual),
            |b, (p, ind)| {
                let mut ind = ind.clone();
                b.iter(|| {
                    let evaluations = p.evaluate(black_box(&mut ind));
                    black_box(evaluations)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_decode, bench_evaluate);
criterion_main!(benches);
