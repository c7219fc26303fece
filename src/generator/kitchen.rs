use std::collections::HashSet;

use log::debug;

use crate::catalog::{Catalog, KitchenConfig};
use crate::error::Result;
use crate::generator::comments::CommentTable;
use crate::generator::nutrition::calculate_nutrition;
use crate::generator::random::RandomSource;
use crate::generator::ratio::generate_ratio;
use crate::generator::selector::select_ingredients;
use crate::models::CurryResult;

/// Read-only content the generator draws from.
#[derive(Debug, Clone, Default)]
pub struct Kitchen {
    catalog: Catalog,
    comments: CommentTable,
}

impl Kitchen {
    pub fn new(catalog: Catalog, comments: CommentTable) -> Self {
        Self { catalog, comments }
    }

    /// Kitchen with the built-in catalog and comments.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Build a kitchen from a loaded configuration.
    pub fn from_config(config: &KitchenConfig) -> Result<Self> {
        Ok(Self::new(config.catalog()?, config.comment_table()?))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn comments(&self) -> &CommentTable {
        &self.comments
    }

    /// Cook one random plate.
    ///
    /// Draw order is ratio, comment, then one amount per enabled ingredient in
    /// catalog order.
    pub fn generate(&self, enabled_ids: &HashSet<String>, rng: &mut impl RandomSource) -> CurryResult {
        let (rice_percent, curry_percent) = generate_ratio(rng);
        let comment = self.comments.select(rice_percent, rng);
        let ingredients = select_ingredients(&self.catalog, enabled_ids, rng);
        let nutrition = calculate_nutrition(rice_percent, curry_percent, &ingredients);

        debug!(
            "generated plate: rice {}% curry {}%, {} ingredients, {} kcal",
            rice_percent,
            curry_percent,
            ingredients.len(),
            nutrition.kcal
        );

        CurryResult {
            rice_percent,
            curry_percent,
            ingredients,
            comment,
            nutrition,
        }
    }
}

/// Cook a plate from the built-in kitchen using thread-local entropy.
pub fn generate_curry(enabled_ids: &HashSet<String>) -> CurryResult {
    Kitchen::builtin().generate(enabled_ids, &mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::comments::bucket_index;
    use crate::generator::random::ScriptedSource;

    #[test]
    fn test_empty_selection_forty_percent_rice() {
        let kitchen = Kitchen::builtin();
        let mut source = ScriptedSource::new([40]);
        let result = kitchen.generate(&HashSet::new(), &mut source);

        assert_eq!(result.rice_percent, 40);
        assert_eq!(result.curry_percent, 60);
        assert!(result.ingredients.is_empty());
        assert_eq!(result.nutrition.kcal, 814);
        assert!(kitchen.comments().bucket(bucket_index(40)).contains(&result.comment));
    }

    #[test]
    fn test_default_selection_is_catalog_ordered() {
        let kitchen = Kitchen::builtin();
        let enabled = kitchen.catalog().default_enabled_ids();
        let result = generate_curry(&enabled);

        assert_eq!(result.ingredients.len(), enabled.len());
        assert_eq!(result.rice_percent as u16 + result.curry_percent as u16, 100);
    }
}
