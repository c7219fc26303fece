use std::sync::LazyLock;

use crate::models::{Category, Ingredient, Shape, Unit};

#[allow(clippy::too_many_arguments)]
fn entry(
    id: &str,
    category: Category,
    name: &str,
    unit: Unit,
    max_amount: u32,
    nutrients: [f64; 6],
    color: &str,
    shape: Shape,
    default_enabled: bool,
) -> Ingredient {
    let [kcal, protein, fat, carbs, sodium, fiber] = nutrients;
    Ingredient {
        id: id.to_string(),
        category,
        name: name.to_string(),
        unit,
        max_amount,
        kcal_per_100g: kcal,
        protein_per_100g: protein,
        fat_per_100g: fat,
        carbs_per_100g: carbs,
        sodium_per_100g: sodium,
        fiber_per_100g: fiber,
        color: color.to_string(),
        shape,
        default_enabled,
    }
}

/// The built-in ingredient table, in canonical order.
///
/// Nutrients are `[kcal, protein, fat, carbs, sodium_mg, fiber]` per 100 g.
pub static BUILTIN_INGREDIENTS: LazyLock<Vec<Ingredient>> = LazyLock::new(|| {
    use Category::*;
    use Shape::*;
    use Unit::*;

    vec![
        // Protein
        entry("pork", Protein, "Pork", Grams, 150, [263.0, 17.1, 21.2, 0.2, 50.0, 0.0], "#D4956A", Rect, true),
        entry("chicken", Protein, "Chicken thigh", Grams, 150, [204.0, 16.6, 14.2, 0.0, 62.0, 0.0], "#E8C07D", Rect, false),
        entry("beef", Protein, "Beef", Grams, 150, [317.0, 16.0, 26.4, 0.3, 48.0, 0.0], "#8B4A3A", Rect, false),
        entry("cutlet", Protein, "Pork cutlet", Count, 2, [429.0, 22.0, 35.9, 9.8, 110.0, 0.7], "#C98A3B", Rect, false),
        entry("sausage", Protein, "Sausage", Count, 5, [321.0, 13.2, 28.5, 3.0, 740.0, 0.0], "#B5553C", Oval, false),
        entry("shrimp", Protein, "Shrimp", Count, 6, [82.0, 18.4, 0.3, 0.3, 170.0, 0.0], "#F08A6C", Oval, false),
        // Vegetables
        entry("carrot", Vegetable, "Carrot", Grams, 80, [39.0, 0.7, 0.2, 9.3, 28.0, 2.8], "#F28C28", Triangle, true),
        entry("potato", Vegetable, "Potato", Grams, 120, [76.0, 1.8, 0.1, 17.3, 1.0, 8.9], "#E8D28A", Circle, true),
        entry("onion", Vegetable, "Onion", Grams, 100, [37.0, 1.0, 0.1, 8.8, 2.0, 1.6], "#F5EBC4", Oval, true),
        entry("eggplant", Vegetable, "Eggplant", Grams, 80, [22.0, 1.1, 0.1, 5.1, 0.0, 2.2], "#5B3A6E", Oval, false),
        entry("spinach", Vegetable, "Spinach", Grams, 60, [20.0, 2.2, 0.4, 3.1, 16.0, 2.8], "#3F8F3A", Triangle, false),
        // Toppings
        entry("egg", Topping, "Soft-boiled egg", Count, 2, [151.0, 12.3, 10.3, 0.3, 140.0, 0.0], "#FFF3B0", Circle, false),
        entry("cheese", Topping, "Cheese", Grams, 50, [313.0, 25.7, 24.7, 0.1, 800.0, 0.0], "#FFD54A", Rect, false),
        entry("pickles", Topping, "Red pickles", Grams, 30, [137.0, 2.7, 0.1, 33.3, 2000.0, 3.9], "#D8322F", Star, false),
        entry("corn", Topping, "Sweet corn", Grams, 50, [82.0, 2.3, 0.5, 17.8, 210.0, 3.3], "#F7D358", Circle, false),
        // Extras
        entry("hamburg", Extra, "Hamburg steak", Count, 1, [223.0, 13.3, 13.4, 12.3, 340.0, 1.0], "#6B3E26", Oval, false),
        entry("chili", Extra, "Chili flakes", Grams, 20, [419.0, 14.7, 12.0, 66.8, 20.0, 46.4], "#B22222", Star, false),
    ]
});
