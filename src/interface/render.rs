use crate::catalog::Catalog;
use crate::layout::PlateGeometry;
use crate::models::{Category, CurryResult, IconPlacement, NutritionInfo};

/// Width of the rice/curry ratio bar in characters.
const RATIO_BAR_WIDTH: usize = 40;

/// Width of a nutrition bar in characters.
const NUTRITION_BAR_WIDTH: usize = 24;

/// Plate preview grid size (columns, rows). Rows are half as tall as columns.
const PREVIEW_COLS: usize = 41;
const PREVIEW_ROWS: usize = 21;

fn bar(value: f64, max: f64, width: usize) -> String {
    let filled = ((value / max).clamp(0.0, 1.0) * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Render the rice/curry split as a two-tone bar.
pub fn ratio_bar(rice_percent: u8) -> String {
    let rice = (rice_percent as usize * RATIO_BAR_WIDTH + 50) / 100;
    format!(
        "{}{}",
        "=".repeat(rice),
        "~".repeat(RATIO_BAR_WIDTH - rice)
    )
}

/// Rows of (label, value, unit, display max) for the nutrition panel.
fn nutrition_rows(n: &NutritionInfo) -> [(&'static str, f64, &'static str, f64); 5] {
    [
        ("Protein", n.protein, "g", 100.0),
        ("Fat", n.fat, "g", 150.0),
        ("Carbs", n.carbs, "g", 400.0),
        ("Sodium", n.sodium as f64, "mg", 5000.0),
        ("Fiber", n.fiber, "g", 50.0),
    ]
}

/// Display the nutrition estimate with bars.
pub fn display_nutrition(nutrition: &NutritionInfo) {
    println!("--- Nutrition (estimate) ---");
    println!(
        "  {:<8} {:>7} kcal  {}",
        "Energy",
        nutrition.kcal,
        bar(nutrition.kcal as f64, 3000.0, NUTRITION_BAR_WIDTH)
    );

    for (label, value, unit, max) in nutrition_rows(nutrition) {
        let shown = if unit == "mg" {
            format!("{:.0}", value)
        } else {
            format!("{:.1}", value)
        };
        println!(
            "  {:<8} {:>7} {:<4}  {}",
            label,
            shown,
            unit,
            bar(value, max, NUTRITION_BAR_WIDTH)
        );
    }
}

/// Build a character-grid preview of the plate with icons drawn on it.
pub fn plate_preview(result: &CurryResult, icons: &[IconPlacement], plate: &PlateGeometry) -> Vec<String> {
    let split_u = result.rice_percent as f64 / 100.0;
    let mut grid = vec![vec![' '; PREVIEW_COLS]; PREVIEW_ROWS];

    let cell_x = |col: usize| plate.cx - plate.radius + (col as f64 + 0.5) * 2.0 * plate.radius / PREVIEW_COLS as f64;
    let cell_y = |row: usize| plate.cy - plate.radius + (row as f64 + 0.5) * 2.0 * plate.radius / PREVIEW_ROWS as f64;

    for (row, line) in grid.iter_mut().enumerate() {
        for (col, cell) in line.iter_mut().enumerate() {
            let (x, y) = (cell_x(col), cell_y(row));
            if plate.distance_from_center(x, y) > plate.radius {
                continue;
            }
            *cell = if plate.normalized_x(x) < split_u { '.' } else { '~' };
        }
    }

    for icon in icons {
        let u = plate.normalized_x(icon.x);
        let v = (icon.y - (plate.cy - plate.radius)) / (plate.radius * 2.0);
        let col = (u * PREVIEW_COLS as f64).floor();
        let row = (v * PREVIEW_ROWS as f64).floor();
        if col < 0.0 || row < 0.0 {
            continue;
        }
        let (col, row) = (col as usize, row as usize);
        if col < PREVIEW_COLS && row < PREVIEW_ROWS {
            grid[row][col] = icon.shape.glyph();
        }
    }

    grid.into_iter().map(|line| line.into_iter().collect()).collect()
}

/// Display a generated plate: ratio, comment, ingredients, nutrition and preview.
pub fn display_result(result: &CurryResult, icons: &[IconPlacement], seed: u64) {
    println!();
    println!("=== Your Curry ===");
    println!();
    println!("  Rice {:>3}% [{}] {:>3}% Curry", result.rice_percent, ratio_bar(result.rice_percent), result.curry_percent);
    println!();
    println!("  \"{}\"", result.comment);
    println!();

    for line in plate_preview(result, icons, &PlateGeometry::default()) {
        println!("    {}", line);
    }
    println!();

    if result.ingredients.is_empty() {
        println!("Ingredients: (none, just rice and roux)");
    } else {
        println!("--- Ingredients ---");
        let width = result
            .ingredients
            .iter()
            .map(|i| i.ingredient.name.len())
            .max()
            .unwrap_or(10);
        for item in &result.ingredients {
            println!(
                "  {} {:<width$} {:>4}{}",
                item.ingredient.shape.glyph(),
                item.ingredient.name,
                item.amount,
                item.ingredient.unit.suffix(),
                width = width
            );
        }
    }
    println!();

    display_nutrition(&result.nutrition);

    let fallbacks = icons.iter().filter(|i| !i.accepted).count();
    println!();
    println!(
        "{} icons placed (layout seed {}, {} outside their region)",
        icons.len(),
        seed,
        fallbacks
    );
    println!();
}

/// Display the catalog grouped by category.
pub fn display_catalog(catalog: &Catalog) {
    println!();
    println!("=== Catalog ({} ingredients) ===", catalog.len());

    for category in Category::ALL {
        let entries = catalog.by_category(category);
        if entries.is_empty() {
            continue;
        }

        println!();
        println!("{}:", category.label());
        for ingredient in entries {
            let marker = if ingredient.default_enabled { "*" } else { " " };
            println!("  {} {}", marker, ingredient.debug_string());
        }
    }

    println!();
    println!("(* enabled by default)");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{Kitchen, ScriptedSource};
    use crate::layout::{derive_seed, layout_result};
    use std::collections::HashSet;

    #[test]
    fn test_ratio_bar_width() {
        assert_eq!(ratio_bar(0), "~".repeat(RATIO_BAR_WIDTH));
        assert_eq!(ratio_bar(100), "=".repeat(RATIO_BAR_WIDTH));
        assert_eq!(ratio_bar(50).chars().filter(|c| *c == '=').count(), 20);
    }

    #[test]
    fn test_bar_clamps() {
        assert_eq!(bar(10_000.0, 100.0, 4), "████");
        assert_eq!(bar(0.0, 100.0, 4), "░░░░");
    }

    #[test]
    fn test_plate_preview_shows_icons() {
        let kitchen = Kitchen::builtin();
        let enabled: HashSet<String> = ["pork".to_string()].into_iter().collect();
        let mut source = ScriptedSource::new([30, 0, 150]);
        let result = kitchen.generate(&enabled, &mut source);
        let icons = layout_result(&result, derive_seed(&result));

        let preview = plate_preview(&result, &icons, &PlateGeometry::default());
        assert_eq!(preview.len(), PREVIEW_ROWS);
        assert!(preview.iter().any(|line| line.contains('#')));
        assert!(preview.iter().any(|line| line.contains('.')));
        assert!(preview.iter().any(|line| line.contains('~')));
    }
}
