use std::collections::HashSet;

use clap::Parser;
use env_logger::Env;

use curry_roulette_rs::catalog::load_config;
use curry_roulette_rs::cli::{Cli, Command, CookArgs};
use curry_roulette_rs::error::Result;
use curry_roulette_rs::generator::Kitchen;
use curry_roulette_rs::interface::{
    display_catalog, display_result, prompt_ingredients, prompt_yes_no, resolve_ingredient,
};
use curry_roulette_rs::layout::{derive_seed, layout_result};
use curry_roulette_rs::models::Category;
use curry_roulette_rs::simulation::{
    print_summary, run_simulation, write_icons_csv, write_result_json, write_runs_csv,
    SimulationConfig,
};

fn main() {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    if cli.verbose {
        logger.parse_filters("debug");
    }
    logger.init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let kitchen = match &cli.config {
        Some(path) => Kitchen::from_config(&load_config(path)?)?,
        None => Kitchen::builtin(),
    };

    match cli.command.unwrap_or_default() {
        Command::Cook(args) => cmd_cook(&kitchen, &args),
        Command::Catalog => {
            display_catalog(kitchen.catalog());
            Ok(())
        }
        Command::Simulate {
            runs,
            seed,
            all,
            csv,
        } => cmd_simulate(&kitchen, runs, seed, all, csv.as_deref()),
    }
}

/// Build the enabled ingredient set from cook flags.
fn enabled_ids(kitchen: &Kitchen, args: &CookArgs) -> Result<HashSet<String>> {
    let catalog = kitchen.catalog();

    let mut enabled = if args.all {
        catalog.all_ids()
    } else if args.none {
        HashSet::new()
    } else {
        catalog.default_enabled_ids()
    };

    for &category in &args.categories {
        enabled.extend(catalog.ids_in_category(Category::from(category)));
    }
    for &category in &args.skip_categories {
        for id in catalog.ids_in_category(Category::from(category)) {
            enabled.remove(&id);
        }
    }
    for name in &args.with {
        enabled.insert(resolve_ingredient(catalog, name)?);
    }
    for name in &args.without {
        enabled.remove(&resolve_ingredient(catalog, name)?);
    }

    Ok(enabled)
}

/// Cook one plate (or several, when picking interactively).
fn cmd_cook(kitchen: &Kitchen, args: &CookArgs) -> Result<()> {
    let mut enabled = enabled_ids(kitchen, args)?;
    let mut rng = rand::thread_rng();

    loop {
        if args.pick {
            enabled = prompt_ingredients(kitchen.catalog(), &enabled)?;
        }

        let result = kitchen.generate(&enabled, &mut rng);
        let seed = args.seed.unwrap_or_else(|| derive_seed(&result));
        let icons = layout_result(&result, seed);

        display_result(&result, &icons, seed);

        if let Some(path) = &args.json {
            write_result_json(&result, &icons, seed, path)?;
            println!("Wrote result to {}", path.display());
        }
        if let Some(path) = &args.icons {
            write_icons_csv(&icons, path)?;
            println!("Wrote icon layout to {}", path.display());
        }

        if !args.pick || !prompt_yes_no("Cook another plate?", true)? {
            break;
        }
    }

    Ok(())
}

/// Run a reproducible batch of generations and summarise it.
fn cmd_simulate(
    kitchen: &Kitchen,
    runs: usize,
    seed: u64,
    all: bool,
    csv: Option<&std::path::Path>,
) -> Result<()> {
    let enabled = if all {
        kitchen.catalog().all_ids()
    } else {
        kitchen.catalog().default_enabled_ids()
    };

    println!(
        "Simulating {} plates with {} ingredients enabled (seed {})",
        runs,
        enabled.len(),
        seed
    );

    let config = SimulationConfig { runs, seed };
    let results = run_simulation(kitchen, &enabled, &config)?;

    print_summary(&results.summary);

    if let Some(path) = csv {
        write_runs_csv(&results.records, path)?;
        println!("Wrote all runs to {}", path.display());
    }

    Ok(())
}
