use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::models::{CurryResult, IconPlacement};
use crate::simulation::search::{RunRecord, SimulationSummary};

/// Round a float to n decimal places.
fn truncate(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Write every simulated run to a CSV file.
pub fn write_runs_csv(records: &[RunRecord], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write icon placements to a CSV file.
pub fn write_icons_csv(icons: &[IconPlacement], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for icon in icons {
        wtr.serialize(icon)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write a generated plate and its layout to a JSON file.
pub fn write_result_json(
    result: &CurryResult,
    icons: &[IconPlacement],
    seed: u64,
    path: &Path,
) -> Result<()> {
    let json = serde_json::json!({
        "result": result,
        "layout_seed": seed,
        "icons": icons,
    });

    let mut file = File::create(path)?;
    file.write_all(serde_json::to_string_pretty(&json)?.as_bytes())?;
    Ok(())
}

/// Print a simulation summary to stdout.
pub fn print_summary(summary: &SimulationSummary) {
    println!("\n=== Simulation Summary ({} plates) ===\n", summary.runs);
    println!(
        "kcal: mean={:.1} min={} max={}",
        truncate(summary.mean_kcal, 1),
        summary.min_kcal,
        summary.max_kcal
    );
    println!("rice: mean={:.1}%", truncate(summary.mean_rice_percent, 1));
    println!(
        "icons: mean={:.2} per plate, {:.2}% outside their region",
        truncate(summary.mean_icons, 2),
        truncate(summary.fallback_rate * 100.0, 2)
    );

    println!("\nComment buckets:");
    let peak = summary.bucket_histogram.iter().copied().max().unwrap_or(0).max(1);
    for (bucket, count) in summary.bucket_histogram.iter().enumerate() {
        let width = count * 30 / peak;
        println!("  {:>3}% {:>6}  {}", bucket * 10, count, "#".repeat(width));
    }
    println!();
}
