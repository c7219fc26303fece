pub mod prompts;
pub mod render;

pub use prompts::{prompt_ingredients, prompt_yes_no, resolve_ingredient};
pub use render::{display_catalog, display_nutrition, display_result, plate_preview, ratio_bar};
