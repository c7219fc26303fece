mod curry;
mod icon;
mod ingredient;

pub use curry::{CurryResult, IngredientAmount, NutritionInfo};
pub use icon::IconPlacement;
pub use ingredient::{Category, Ingredient, Shape, Unit};
