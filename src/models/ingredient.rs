use serde::{Deserialize, Serialize};

/// Catalog grouping used for display and bulk toggling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Protein,
    Vegetable,
    Topping,
    Extra,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 4] = [
        Category::Protein,
        Category::Vegetable,
        Category::Topping,
        Category::Extra,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Category::Protein => "Protein",
            Category::Vegetable => "Vegetables",
            Category::Topping => "Toppings",
            Category::Extra => "Extras",
        }
    }
}

/// How an ingredient amount is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    /// Whole pieces (eggs, cutlets, sausages).
    #[serde(rename = "count")]
    Count,
    /// Weight in grams.
    #[serde(rename = "g")]
    Grams,
}

impl Unit {
    /// Smallest amount drawn for an enabled ingredient.
    pub fn min_amount(self) -> u32 {
        match self {
            Unit::Count => 1,
            Unit::Grams => 10,
        }
    }

    /// Short suffix for display.
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Count => "pc",
            Unit::Grams => "g",
        }
    }
}

/// Icon shape drawn on the plate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Circle,
    Rect,
    Oval,
    Triangle,
    Star,
}

impl Shape {
    /// Single-character glyph for text previews.
    pub fn glyph(self) -> char {
        match self {
            Shape::Circle => 'o',
            Shape::Rect => '#',
            Shape::Oval => '0',
            Shape::Triangle => '^',
            Shape::Star => '*',
        }
    }
}

/// A catalog add-on with bounds, nutrient profile and display attributes.
///
/// Nutrient fields are per 100 g; sodium is in milligrams.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: String,
    pub category: Category,
    pub name: String,
    pub unit: Unit,
    pub max_amount: u32,
    pub kcal_per_100g: f64,
    pub protein_per_100g: f64,
    pub fat_per_100g: f64,
    pub carbs_per_100g: f64,
    pub sodium_per_100g: f64,
    pub fiber_per_100g: f64,
    pub color: String,
    pub shape: Shape,
    #[serde(default)]
    pub default_enabled: bool,
}

impl Ingredient {
    /// Inclusive bounds for a random amount of this ingredient.
    pub fn amount_range(&self) -> (u32, u32) {
        let min = self.unit.min_amount();
        (min, self.max_amount.max(min))
    }

    /// Basic validation: a max amount reachable from the unit minimum and
    /// finite, non-negative nutrients.
    pub fn is_valid(&self) -> bool {
        let nutrients = [
            self.kcal_per_100g,
            self.protein_per_100g,
            self.fat_per_100g,
            self.carbs_per_100g,
            self.sodium_per_100g,
            self.fiber_per_100g,
        ];
        !self.id.trim().is_empty()
            && self.max_amount > 0
            && self.max_amount >= self.unit.min_amount()
            && nutrients.iter().all(|v| v.is_finite() && *v >= 0.0)
    }

    /// Display string for listings.
    pub fn debug_string(&self) -> String {
        format!(
            "{} ({}): up to {}{}, {} kcal/100g",
            self.name,
            self.id,
            self.max_amount,
            self.unit.suffix(),
            self.kcal_per_100g
        )
    }
}

impl PartialEq for Ingredient {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Ingredient {}
