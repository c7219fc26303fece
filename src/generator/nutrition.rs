use std::ops::Add;

use crate::generator::constants::{
    unit_grams, NutrientProfile, RICE_PROFILE, RICE_REFERENCE_GRAMS, ROUX_PROFILE,
    ROUX_REFERENCE_GRAMS,
};
use crate::models::{Ingredient, IngredientAmount, NutritionInfo};

impl NutrientProfile {
    /// Absolute nutrients for `grams` of food with this per-100g profile.
    pub fn scaled(&self, grams: f64) -> NutrientProfile {
        let factor = grams / 100.0;
        NutrientProfile {
            kcal: self.kcal * factor,
            protein: self.protein * factor,
            fat: self.fat * factor,
            carbs: self.carbs * factor,
            sodium: self.sodium * factor,
            fiber: self.fiber * factor,
        }
    }

    /// Round into the display record: whole kcal and sodium, one decimal otherwise.
    pub fn rounded(&self) -> NutritionInfo {
        NutritionInfo {
            kcal: self.kcal.round().max(0.0) as u32,
            protein: round_tenth(self.protein),
            fat: round_tenth(self.fat),
            carbs: round_tenth(self.carbs),
            sodium: self.sodium.round().max(0.0) as u32,
            fiber: round_tenth(self.fiber),
        }
    }
}

impl Add for NutrientProfile {
    type Output = NutrientProfile;

    fn add(self, other: NutrientProfile) -> NutrientProfile {
        NutrientProfile {
            kcal: self.kcal + other.kcal,
            protein: self.protein + other.protein,
            fat: self.fat + other.fat,
            carbs: self.carbs + other.carbs,
            sodium: self.sodium + other.sodium,
            fiber: self.fiber + other.fiber,
        }
    }
}

impl From<&Ingredient> for NutrientProfile {
    fn from(ingredient: &Ingredient) -> Self {
        NutrientProfile {
            kcal: ingredient.kcal_per_100g,
            protein: ingredient.protein_per_100g,
            fat: ingredient.fat_per_100g,
            carbs: ingredient.carbs_per_100g,
            sodium: ingredient.sodium_per_100g,
            fiber: ingredient.fiber_per_100g,
        }
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Grams of an ingredient for a drawn amount.
pub fn ingredient_grams(ingredient: &Ingredient, amount: u32) -> f64 {
    amount as f64 * unit_grams(ingredient.unit)
}

/// Unrounded nutrient totals for a plate.
pub fn sum_nutrients(
    rice_percent: u8,
    curry_percent: u8,
    ingredients: &[IngredientAmount],
) -> NutrientProfile {
    let rice_grams = rice_percent as f64 / 100.0 * RICE_REFERENCE_GRAMS;
    let roux_grams = curry_percent as f64 / 100.0 * ROUX_REFERENCE_GRAMS;

    let base = RICE_PROFILE.scaled(rice_grams) + ROUX_PROFILE.scaled(roux_grams);

    ingredients.iter().fold(base, |acc, item| {
        let grams = ingredient_grams(&item.ingredient, item.amount);
        acc + NutrientProfile::from(&item.ingredient).scaled(grams)
    })
}

/// Estimate the nutrition of a plate from its ratio and ingredients.
pub fn calculate_nutrition(
    rice_percent: u8,
    curry_percent: u8,
    ingredients: &[IngredientAmount],
) -> NutritionInfo {
    sum_nutrients(rice_percent, curry_percent, ingredients).rounded()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use assert_float_eq::assert_float_absolute_eq;

    #[test]
    fn test_base_only_forty_sixty() {
        let info = calculate_nutrition(40, 60, &[]);
        // 1.2 * 168 + 1.2 * 510
        assert_eq!(info.kcal, 814);
        assert_eq!(info.sodium, 3361);
        assert_float_absolute_eq!(info.protein, 12.6, 1e-9);
        assert_float_absolute_eq!(info.fat, 38.8, 1e-9);
        assert_float_absolute_eq!(info.carbs, 102.0, 1e-9);
        assert_float_absolute_eq!(info.fiber, 4.0, 1e-9);
    }

    #[test]
    fn test_all_rice_and_all_curry() {
        let rice = calculate_nutrition(100, 0, &[]);
        assert_eq!(rice.kcal, 504);
        assert_eq!(rice.sodium, 3);

        let curry = calculate_nutrition(0, 100, &[]);
        assert_eq!(curry.kcal, 1020);
        assert_eq!(curry.sodium, 5600);
    }

    #[test]
    fn test_count_unit_conversion() {
        let catalog = Catalog::builtin();
        let egg = catalog.get("egg").unwrap().clone();
        assert_float_absolute_eq!(ingredient_grams(&egg, 2), 60.0, 1e-9);

        let pork = catalog.get("pork").unwrap().clone();
        assert_float_absolute_eq!(ingredient_grams(&pork, 90), 90.0, 1e-9);
    }

    #[test]
    fn test_kcal_monotonic_in_amount() {
        let catalog = Catalog::builtin();
        let pork = catalog.get("pork").unwrap().clone();

        let mut previous = 0;
        for amount in pork.unit.min_amount()..=pork.max_amount {
            let items = vec![IngredientAmount::new(pork.clone(), amount)];
            let kcal = calculate_nutrition(50, 50, &items).kcal;
            assert!(kcal >= previous);
            previous = kcal;
        }
    }

    #[test]
    fn test_round_tenth_ties_away_from_zero() {
        assert_float_absolute_eq!(round_tenth(0.25), 0.3, 1e-9);
        assert_float_absolute_eq!(round_tenth(1.04), 1.0, 1e-9);
    }
}
