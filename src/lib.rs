pub mod catalog;
pub mod cli;
pub mod error;
pub mod generator;
pub mod interface;
pub mod layout;
pub mod models;
pub mod simulation;

pub use catalog::Catalog;
pub use error::{CurryError, Result};
pub use generator::{generate_curry, Kitchen};
pub use layout::{derive_seed, layout_result, place_icons};
pub use models::{CurryResult, IconPlacement, Ingredient, IngredientAmount, NutritionInfo};
