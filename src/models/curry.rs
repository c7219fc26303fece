use serde::Serialize;

use crate::models::Ingredient;

/// An enabled ingredient paired with its randomly drawn amount.
#[derive(Debug, Clone, Serialize)]
pub struct IngredientAmount {
    pub ingredient: Ingredient,
    pub amount: u32,
}

impl IngredientAmount {
    pub fn new(ingredient: Ingredient, amount: u32) -> Self {
        Self { ingredient, amount }
    }
}

/// Estimated nutrition for a whole plate.
///
/// `kcal` and `sodium` (mg) are whole numbers; the rest carry one decimal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct NutritionInfo {
    pub kcal: u32,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
    pub sodium: u32,
    pub fiber: f64,
}

/// One generated plate of curry rice.
#[derive(Debug, Clone, Serialize)]
pub struct CurryResult {
    /// Share of rice, 0 to 100.
    pub rice_percent: u8,

    /// Share of curry roux, always `100 - rice_percent`.
    pub curry_percent: u8,

    /// Enabled ingredients in catalog order.
    pub ingredients: Vec<IngredientAmount>,

    /// Reaction comment for the ratio.
    pub comment: String,

    pub nutrition: NutritionInfo,
}

impl CurryResult {
    /// Fraction of the plate covered by curry, in [0, 1].
    pub fn curry_fraction(&self) -> f64 {
        self.curry_percent as f64 / 100.0
    }
}
