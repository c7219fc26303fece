pub mod comments;
pub mod constants;
pub mod kitchen;
pub mod nutrition;
pub mod random;
pub mod ratio;
pub mod selector;

pub use comments::{bucket_index, CommentTable};
pub use constants::*;
pub use kitchen::{generate_curry, Kitchen};
pub use nutrition::{calculate_nutrition, ingredient_grams, sum_nutrients};
pub use random::{RandomSource, ScriptedSource};
pub use ratio::generate_ratio;
pub use selector::select_ingredients;
