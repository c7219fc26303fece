use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::models::Category;

/// Curry Roulette: random curry rice with a nutrition estimate and a plate preview.
#[derive(Parser, Debug)]
#[command(name = "curry-roulette")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to a kitchen config JSON file (custom ingredients and comments).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging (overrides RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Cook a random plate of curry rice.
    Cook(CookArgs),

    /// List every ingredient in the catalog.
    Catalog,

    /// Cook many plates from a fixed seed and report statistics.
    Simulate {
        /// Number of plates to generate.
        #[arg(long, default_value = "1000")]
        runs: usize,

        /// Random seed for reproducibility.
        #[arg(long, default_value = "123")]
        seed: u64,

        /// Enable every catalog ingredient instead of the defaults.
        #[arg(long)]
        all: bool,

        /// Output CSV file for per-plate rows.
        #[arg(long)]
        csv: Option<PathBuf>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Cook(CookArgs::default())
    }
}

/// Category names accepted on the command line.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum CategoryArg {
    Protein,
    Vegetable,
    Topping,
    Extra,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Protein => Category::Protein,
            CategoryArg::Vegetable => Category::Vegetable,
            CategoryArg::Topping => Category::Topping,
            CategoryArg::Extra => Category::Extra,
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct CookArgs {
    /// Start from every ingredient enabled.
    #[arg(long, conflicts_with = "none")]
    pub all: bool,

    /// Start from no ingredients enabled.
    #[arg(long)]
    pub none: bool,

    /// Enable every ingredient in a category (repeatable).
    #[arg(long = "category", value_enum)]
    pub categories: Vec<CategoryArg>,

    /// Disable every ingredient in a category (repeatable).
    #[arg(long = "skip-category", value_enum)]
    pub skip_categories: Vec<CategoryArg>,

    /// Enable an ingredient by id or name (repeatable, fuzzy matched).
    #[arg(long = "with", value_name = "INGREDIENT")]
    pub with: Vec<String>,

    /// Disable an ingredient by id or name (repeatable, fuzzy matched).
    #[arg(long = "without", value_name = "INGREDIENT")]
    pub without: Vec<String>,

    /// Choose ingredients interactively.
    #[arg(long)]
    pub pick: bool,

    /// Override the layout seed derived from the result.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the result and icon layout to a JSON file.
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Write the icon layout to a CSV file.
    #[arg(long)]
    pub icons: Option<PathBuf>,
}
