use std::collections::HashSet;

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::error::{CurryError, Result};
use crate::generator::{bucket_index, Kitchen, COMMENT_BUCKETS};
use crate::layout::{derive_seed, layout_result};

/// Configuration for a batch of generations.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub runs: usize,
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            runs: 1000,
            seed: 123,
        }
    }
}

/// One generated plate, flattened for CSV output.
#[derive(Debug, Clone, Serialize)]
pub struct RunRecord {
    pub run: usize,
    pub rice_percent: u8,
    pub curry_percent: u8,
    pub comment_bucket: usize,
    pub ingredients: usize,
    pub kcal: u32,
    pub sodium: u32,
    pub icons: usize,
    pub fallback_icons: usize,
}

/// Aggregate statistics over a batch.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationSummary {
    pub runs: usize,
    pub mean_kcal: f64,
    pub min_kcal: u32,
    pub max_kcal: u32,
    pub mean_rice_percent: f64,
    pub mean_icons: f64,
    pub fallback_rate: f64,
    pub bucket_histogram: Vec<usize>,
}

/// Results of a simulation batch.
pub struct SimulationResults {
    pub records: Vec<RunRecord>,
    pub summary: SimulationSummary,
}

/// Summarise a set of run records.
pub fn summarize(records: &[RunRecord]) -> SimulationSummary {
    let runs = records.len();
    let mut bucket_histogram = vec![0; COMMENT_BUCKETS];
    for r in records {
        bucket_histogram[r.comment_bucket] += 1;
    }

    if runs == 0 {
        return SimulationSummary {
            runs,
            mean_kcal: 0.0,
            min_kcal: 0,
            max_kcal: 0,
            mean_rice_percent: 0.0,
            mean_icons: 0.0,
            fallback_rate: 0.0,
            bucket_histogram,
        };
    }

    let n = runs as f64;
    let total_icons: usize = records.iter().map(|r| r.icons).sum();
    let total_fallbacks: usize = records.iter().map(|r| r.fallback_icons).sum();

    SimulationSummary {
        runs,
        mean_kcal: records.iter().map(|r| r.kcal as f64).sum::<f64>() / n,
        min_kcal: records.iter().map(|r| r.kcal).min().unwrap_or(0),
        max_kcal: records.iter().map(|r| r.kcal).max().unwrap_or(0),
        mean_rice_percent: records.iter().map(|r| r.rice_percent as f64).sum::<f64>() / n,
        mean_icons: total_icons as f64 / n,
        fallback_rate: if total_icons > 0 {
            total_fallbacks as f64 / total_icons as f64
        } else {
            0.0
        },
        bucket_histogram,
    }
}

/// Generate and lay out `config.runs` plates from a seeded RNG.
pub fn run_simulation(
    kitchen: &Kitchen,
    enabled_ids: &HashSet<String>,
    config: &SimulationConfig,
) -> Result<SimulationResults> {
    if config.runs == 0 {
        return Err(CurryError::InvalidInput(
            "simulation needs at least one run".to_string(),
        ));
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut records = Vec::with_capacity(config.runs);

    info!("simulating {} plates with seed {}", config.runs, config.seed);

    for run in 0..config.runs {
        let result = kitchen.generate(enabled_ids, &mut rng);
        let icons = layout_result(&result, derive_seed(&result));

        records.push(RunRecord {
            run: run + 1,
            rice_percent: result.rice_percent,
            curry_percent: result.curry_percent,
            comment_bucket: bucket_index(result.rice_percent),
            ingredients: result.ingredients.len(),
            kcal: result.nutrition.kcal,
            sodium: result.nutrition.sodium,
            icons: icons.len(),
            fallback_icons: icons.iter().filter(|i| !i.accepted).count(),
        });

        // Progress indicator every 10%
        if (run + 1) % (config.runs / 10).max(1) == 0 {
            let pct = ((run + 1) as f64 / config.runs as f64) * 100.0;
            eprint!("\r{:.0}% complete", pct);
        }
    }
    eprintln!();

    let summary = summarize(&records);
    Ok(SimulationResults { records, summary })
}
