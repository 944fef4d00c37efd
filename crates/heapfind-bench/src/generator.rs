//! Seeded workload generator.
//!
//! Produces heap inputs with a controlled duplicate rate, removal requests
//! that mix present and absent values, and union-find edge lists whose
//! endpoints cluster so that components of varied size form.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Configuration for the workload generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Seed for the random number generator (deterministic).
    pub seed: u64,
    /// Number of values fed to the heap.
    pub num_values: usize,
    /// Values are drawn from `-value_span..value_span`; smaller spans give
    /// more duplicates.
    pub value_span: i64,
    /// Number of removal requests.
    pub num_removals: usize,
    /// Fraction of removal requests that target a value outside the input
    /// range (0.0-1.0).
    pub absent_removal_rate: f64,
    /// Union-find universe size.
    pub universe_size: usize,
    /// Number of `p q` pairs.
    pub num_pairs: usize,
    /// Fraction of pairs whose endpoints are drawn from the same cluster
    /// (0.0-1.0).
    pub locality: f64,
    /// Number of clusters the universe is split into for local pairs.
    pub num_clusters: usize,
}

/// Predefined size tiers for benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// ~1K values, ~1K elements
    Small,
    /// ~10K values, ~10K elements
    Medium,
    /// ~100K values, ~100K elements
    Large,
    /// ~1M values, ~1M elements
    XLarge,
}

impl SizeTier {
    /// Returns the default `GeneratorConfig` for this size tier.
    pub fn config(self, seed: u64) -> GeneratorConfig {
        match self {
            SizeTier::Small => GeneratorConfig {
                seed,
                num_values: 1_000,
                value_span: 250,
                num_removals: 100,
                absent_removal_rate: 0.1,
                universe_size: 1_000,
                num_pairs: 800,
                locality: 0.9,
                num_clusters: 20,
            },
            SizeTier::Medium => GeneratorConfig {
                seed,
                num_values: 10_000,
                value_span: 2_500,
                num_removals: 1_000,
                absent_removal_rate: 0.1,
                universe_size: 10_000,
                num_pairs: 8_000,
                locality: 0.9,
                num_clusters: 100,
            },
            SizeTier::Large => GeneratorConfig {
                seed,
                num_values: 100_000,
                value_span: 25_000,
                num_removals: 10_000,
                absent_removal_rate: 0.05,
                universe_size: 100_000,
                num_pairs: 80_000,
                locality: 0.95,
                num_clusters: 500,
            },
            SizeTier::XLarge => GeneratorConfig {
                seed,
                num_values: 1_000_000,
                value_span: 250_000,
                num_removals: 100_000,
                absent_removal_rate: 0.05,
                universe_size: 1_000_000,
                num_pairs: 800_000,
                locality: 0.95,
                num_clusters: 2_000,
            },
        }
    }
}

/// A generated workload for both structures.
#[derive(Debug, Clone)]
pub struct Workload {
    /// Heap input values, duplicates included.
    pub values: Vec<i64>,
    /// Values to remove from the heap, some of them absent.
    pub removals: Vec<i64>,
    /// Union-find universe size.
    pub universe_size: usize,
    /// Element pairs to unify, all inside `0..universe_size`.
    pub pairs: Vec<(usize, usize)>,
}

/// Generates a [`Workload`] from the given configuration.
///
/// All randomness is deterministic, seeded from `config.seed`.
pub fn generate_workload(config: &GeneratorConfig) -> Workload {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let span = config.value_span.max(1);

    let values: Vec<i64> = (0..config.num_values)
        .map(|_| rng.gen_range(-span..span))
        .collect();

    let removals = (0..config.num_removals)
        .map(|_| {
            if values.is_empty() || rng.gen_bool(config.absent_removal_rate.clamp(0.0, 1.0)) {
                span + rng.gen_range(0..span)
            } else {
                values[rng.gen_range(0..values.len())]
            }
        })
        .collect();

    let pairs = generate_pairs(&mut rng, config);

    Workload {
        values,
        removals,
        universe_size: config.universe_size,
        pairs,
    }
}

fn generate_pairs(rng: &mut StdRng, config: &GeneratorConfig) -> Vec<(usize, usize)> {
    let n = config.universe_size;
    if n == 0 {
        return Vec::new();
    }
    let clusters = config.num_clusters.clamp(1, n);
    let cluster_len = n.div_ceil(clusters);
    let locality = config.locality.clamp(0.0, 1.0);

    (0..config.num_pairs)
        .map(|_| {
            let p = rng.gen_range(0..n);
            let q = if rng.gen_bool(locality) {
                let start = (p / cluster_len) * cluster_len;
                let end = (start + cluster_len).min(n);
                rng.gen_range(start..end)
            } else {
                rng.gen_range(0..n)
            };
            (p, q)
        })
        .collect()
}
