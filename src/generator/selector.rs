use std::collections::HashSet;

use crate::catalog::Catalog;
use crate::generator::random::RandomSource;
use crate::models::IngredientAmount;

/// Draw a random amount for each enabled ingredient.
///
/// Output follows catalog order, not the order of `enabled_ids`. Ids that are
/// not in the catalog are ignored.
pub fn select_ingredients(
    catalog: &Catalog,
    enabled_ids: &HashSet<String>,
    rng: &mut impl RandomSource,
) -> Vec<IngredientAmount> {
    catalog
        .entries()
        .iter()
        .filter(|ingredient| enabled_ids.contains(&ingredient.id))
        .map(|ingredient| {
            let (min, max) = ingredient.amount_range();
            let amount = rng.int_inclusive(min, max);
            IngredientAmount::new(ingredient.clone(), amount)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::random::ScriptedSource;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn ids(list: &[&str]) -> HashSet<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_follows_catalog_order() {
        let catalog = Catalog::builtin();
        let enabled = ids(&["egg", "pork", "carrot"]);
        let mut rng = StdRng::seed_from_u64(1);

        let picked = select_ingredients(&catalog, &enabled, &mut rng);
        let picked_ids: Vec<&str> = picked.iter().map(|p| p.ingredient.id.as_str()).collect();
        let expected: Vec<&str> = catalog
            .entries()
            .iter()
            .filter(|i| enabled.contains(&i.id))
            .map(|i| i.id.as_str())
            .collect();

        assert_eq!(picked_ids, expected);
    }

    #[test]
    fn test_unknown_ids_ignored() {
        let catalog = Catalog::builtin();
        let enabled = ids(&["pork", "dragon_fruit_foam"]);
        let mut rng = StdRng::seed_from_u64(2);

        let picked = select_ingredients(&catalog, &enabled, &mut rng);
        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].ingredient.id, "pork");
    }

    #[test]
    fn test_amounts_within_unit_bounds() {
        let catalog = Catalog::builtin();
        let enabled: HashSet<String> = catalog.entries().iter().map(|i| i.id.clone()).collect();
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..200 {
            for pick in select_ingredients(&catalog, &enabled, &mut rng) {
                let min = pick.ingredient.unit.min_amount();
                assert!(pick.amount >= min, "{} below min", pick.ingredient.id);
                assert!(pick.amount <= pick.ingredient.max_amount);
            }
        }
    }

    #[test]
    fn test_scripted_amount() {
        let catalog = Catalog::builtin();
        let mut source = ScriptedSource::new([10_000]);
        let picked = select_ingredients(&catalog, &ids(&["pork"]), &mut source);
        assert_eq!(picked[0].amount, picked[0].ingredient.max_amount);
    }
}
