use std::collections::HashSet;

use dialoguer::{Confirm, MultiSelect};
use strsim::jaro_winkler;

use crate::catalog::Catalog;
use crate::error::{CurryError, Result};

/// Minimum Jaro-Winkler score for a fuzzy ingredient match.
const FUZZY_THRESHOLD: f64 = 0.85;

/// Resolve user input to a catalog id.
///
/// Tries an exact id or name match (case-insensitive) first, then the closest
/// fuzzy match above the threshold.
pub fn resolve_ingredient(catalog: &Catalog, input: &str) -> Result<String> {
    let needle = input.trim().to_lowercase();

    let exact = catalog
        .entries()
        .iter()
        .find(|i| i.id.to_lowercase() == needle || i.name.to_lowercase() == needle);
    if let Some(ingredient) = exact {
        return Ok(ingredient.id.clone());
    }

    let mut candidates: Vec<(&str, f64)> = catalog
        .entries()
        .iter()
        .map(|i| {
            let score = jaro_winkler(&i.id.to_lowercase(), &needle)
                .max(jaro_winkler(&i.name.to_lowercase(), &needle));
            (i.id.as_str(), score)
        })
        .filter(|(_, score)| *score >= FUZZY_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    candidates
        .first()
        .map(|(id, _)| id.to_string())
        .ok_or_else(|| CurryError::UnknownIngredient(input.to_string()))
}

/// Let the user toggle ingredients on and off.
pub fn prompt_ingredients(catalog: &Catalog, current: &HashSet<String>) -> Result<HashSet<String>> {
    let items: Vec<String> = catalog
        .entries()
        .iter()
        .map(|i| format!("[{}] {}", i.category.label(), i.name))
        .collect();
    let defaults: Vec<bool> = catalog
        .entries()
        .iter()
        .map(|i| current.contains(&i.id))
        .collect();

    let chosen = MultiSelect::new()
        .with_prompt("Pick ingredients (space to toggle, enter to cook)")
        .items(&items)
        .defaults(&defaults)
        .interact()?;

    Ok(chosen
        .into_iter()
        .map(|idx| catalog.entries()[idx].id.clone())
        .collect())
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_exact_id_and_name() {
        let catalog = Catalog::builtin();
        assert_eq!(resolve_ingredient(&catalog, "pork").unwrap(), "pork");
        assert_eq!(resolve_ingredient(&catalog, "Soft-boiled Egg").unwrap(), "egg");
    }

    #[test]
    fn test_resolve_fuzzy() {
        let catalog = Catalog::builtin();
        assert_eq!(resolve_ingredient(&catalog, "carot").unwrap(), "carrot");
        assert_eq!(resolve_ingredient(&catalog, "potatoe").unwrap(), "potato");
    }

    #[test]
    fn test_resolve_unknown() {
        let catalog = Catalog::builtin();
        assert!(matches!(
            resolve_ingredient(&catalog, "xylophone"),
            Err(CurryError::UnknownIngredient(_))
        ));
    }
}
