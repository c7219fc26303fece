use std::collections::HashSet;

use curry_roulette_rs::catalog::Catalog;
use curry_roulette_rs::generator::{
    bucket_index, calculate_nutrition, CommentTable, Kitchen, ScriptedSource,
};
use curry_roulette_rs::models::{Category, Ingredient, IngredientAmount, Shape, Unit};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn make_ingredient(id: &str, unit: Unit, max_amount: u32, kcal: f64) -> Ingredient {
    Ingredient {
        id: id.to_string(),
        category: Category::Topping,
        name: id.to_string(),
        unit,
        max_amount,
        kcal_per_100g: kcal,
        protein_per_100g: 5.0,
        fat_per_100g: 5.0,
        carbs_per_100g: 5.0,
        sodium_per_100g: 100.0,
        fiber_per_100g: 1.0,
        color: "#123456".to_string(),
        shape: Shape::Star,
        default_enabled: true,
    }
}

#[test]
fn test_ratio_always_sums_to_hundred() {
    let kitchen = Kitchen::builtin();
    let enabled = kitchen.catalog().default_enabled_ids();
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..500 {
        let result = kitchen.generate(&enabled, &mut rng);
        assert!(result.rice_percent <= 100);
        assert!(result.curry_percent <= 100);
        assert_eq!(result.rice_percent as u16 + result.curry_percent as u16, 100);
    }
}

#[test]
fn test_amounts_within_bounds_for_every_entry() {
    let kitchen = Kitchen::builtin();
    let enabled = kitchen.catalog().all_ids();
    let mut rng = StdRng::seed_from_u64(77);

    for _ in 0..300 {
        let result = kitchen.generate(&enabled, &mut rng);
        assert_eq!(result.ingredients.len(), kitchen.catalog().len());
        for item in &result.ingredients {
            let min = match item.ingredient.unit {
                Unit::Grams => 10,
                Unit::Count => 1,
            };
            assert!(
                (min..=item.ingredient.max_amount).contains(&item.amount),
                "{} drew {}",
                item.ingredient.id,
                item.amount
            );
        }
    }
}

#[test]
fn test_empty_selection_end_to_end() {
    let kitchen = Kitchen::builtin();
    let mut source = ScriptedSource::new([40]);
    let result = kitchen.generate(&HashSet::new(), &mut source);

    assert_eq!(result.rice_percent, 40);
    assert_eq!(result.curry_percent, 60);
    assert!(result.ingredients.is_empty());
    assert_eq!(result.nutrition.kcal, 814);
}

#[test]
fn test_comment_bucket_boundaries() {
    assert_eq!(bucket_index(0), 0);
    assert_eq!(bucket_index(100), 10);
    assert_eq!(bucket_index(55), 6);
    assert_eq!(bucket_index(45), 5);
    assert_eq!(bucket_index(44), 4);
}

#[test]
fn test_comment_comes_from_ratio_bucket() {
    let kitchen = Kitchen::builtin();
    let mut rng = StdRng::seed_from_u64(5);

    for _ in 0..200 {
        let result = kitchen.generate(&HashSet::new(), &mut rng);
        let bucket = kitchen.comments().bucket(bucket_index(result.rice_percent));
        assert!(bucket.contains(&result.comment));
    }
}

#[test]
fn test_custom_comment_table() {
    let buckets: Vec<Vec<String>> = (0..11).map(|i| vec![format!("bucket {}", i)]).collect();
    let kitchen = Kitchen::new(Catalog::builtin(), CommentTable::from_buckets(buckets).unwrap());

    let mut source = ScriptedSource::new([55]);
    let result = kitchen.generate(&HashSet::new(), &mut source);
    assert_eq!(result.comment, "bucket 6");
}

#[test]
fn test_output_follows_catalog_order_not_input_order() {
    let catalog = Catalog::new(vec![
        make_ingredient("first", Unit::Grams, 50, 100.0),
        make_ingredient("second", Unit::Count, 3, 100.0),
        make_ingredient("third", Unit::Grams, 40, 100.0),
    ])
    .unwrap();
    let kitchen = Kitchen::new(catalog, CommentTable::builtin());

    let enabled: HashSet<String> = ["third", "first", "ghost"].iter().map(|s| s.to_string()).collect();
    let mut rng = StdRng::seed_from_u64(11);
    let result = kitchen.generate(&enabled, &mut rng);

    let ids: Vec<&str> = result.ingredients.iter().map(|i| i.ingredient.id.as_str()).collect();
    assert_eq!(ids, vec!["first", "third"]);
}

#[test]
fn test_kcal_non_decreasing_with_amount() {
    let cheese = make_ingredient("cheese", Unit::Grams, 50, 313.0);
    let egg = make_ingredient("egg", Unit::Count, 4, 151.0);

    for ingredient in [cheese, egg] {
        let mut previous = 0;
        for amount in ingredient.unit.min_amount()..=ingredient.max_amount {
            let items = vec![IngredientAmount::new(ingredient.clone(), amount)];
            let kcal = calculate_nutrition(35, 65, &items).kcal;
            assert!(kcal >= previous, "{} at {}", ingredient.id, amount);
            previous = kcal;
        }
    }
}

#[test]
fn test_ingredient_adds_to_base() {
    // 50 g of a 200 kcal/100g ingredient adds 100 kcal.
    let item = IngredientAmount::new(make_ingredient("x", Unit::Grams, 60, 200.0), 50);
    let base = calculate_nutrition(50, 50, &[]);
    let with_item = calculate_nutrition(50, 50, &[item]);
    assert_eq!(with_item.kcal, base.kcal + 100);
    assert_eq!(with_item.sodium, base.sodium + 50);
}
