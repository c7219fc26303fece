use std::f64::consts::TAU;

use log::{debug, warn};

use crate::layout::lcg::SeededRandom;
use crate::layout::region::region_accepts;
use crate::models::{CurryResult, IconPlacement, IngredientAmount};

/// Upper bound on icons drawn for a single ingredient.
pub const MAX_ICONS_PER_INGREDIENT: u32 = 8;

/// An ingredient at `max_amount` gets this many icons.
pub const ICON_STEPS: u32 = 6;

/// Rejection-sampling attempts per icon before the last candidate is kept.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 20;

/// Candidates are scattered up to this fraction of the plate radius.
pub const SCATTER_RADIUS_FACTOR: f64 = 0.85;

/// Candidates beyond this fraction of the radius are rejected.
pub const RIM_MARGIN_FACTOR: f64 = 0.9;

/// Icon sizes are drawn from `[ICON_SIZE_MIN, ICON_SIZE_MIN + ICON_SIZE_SPAN)`.
pub const ICON_SIZE_MIN: f64 = 8.0;
pub const ICON_SIZE_SPAN: f64 = 10.0;

/// Circle that icons are scattered inside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlateGeometry {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
}

impl Default for PlateGeometry {
    fn default() -> Self {
        Self {
            cx: 200.0,
            cy: 200.0,
            radius: 145.0,
        }
    }
}

impl PlateGeometry {
    /// Map an x coordinate to `[0, 1]` across the plate's horizontal span.
    pub fn normalized_x(&self, x: f64) -> f64 {
        (x - (self.cx - self.radius)) / (self.radius * 2.0)
    }

    /// Distance of a point from the plate centre.
    pub fn distance_from_center(&self, x: f64, y: f64) -> f64 {
        (x - self.cx).hypot(y - self.cy)
    }
}

/// Number of icons drawn for an ingredient amount.
///
/// `min(ceil(amount / (max_amount / 6)), 8)`, never below 1. Computed in
/// integers so `amount == max_amount` gives exactly 6.
pub fn icon_count(amount: u32, max_amount: u32) -> u32 {
    if max_amount == 0 {
        return 1;
    }
    let scaled = amount as u64 * ICON_STEPS as u64;
    let steps = scaled.div_ceil(max_amount as u64);
    steps.clamp(1, MAX_ICONS_PER_INGREDIENT as u64) as u32
}

/// Seed that keeps re-renders of the same result stable.
pub fn derive_seed(result: &CurryResult) -> u64 {
    result.rice_percent as u64 * 1000 + result.ingredients.len() as u64 * 7
}

/// Rejection-sample a position from a stream of candidates.
///
/// Draws at most `MAX_PLACEMENT_ATTEMPTS` candidates and returns the first one
/// `accepts` passes. When every draw is rejected the last candidate is kept and
/// flagged `false`.
fn rejection_sample(
    mut next_candidate: impl FnMut() -> (f64, f64),
    accepts: impl Fn(f64, f64) -> bool,
) -> (f64, f64, bool) {
    let mut candidate = next_candidate();
    let mut attempts = 1;

    while !accepts(candidate.0, candidate.1) {
        if attempts == MAX_PLACEMENT_ATTEMPTS {
            return (candidate.0, candidate.1, false);
        }
        candidate = next_candidate();
        attempts += 1;
    }

    (candidate.0, candidate.1, true)
}

/// Draw one icon position on the plate.
///
/// Returns the position and whether it passed both the rim and region gates.
fn sample_position(rng: &mut SeededRandom, plate: &PlateGeometry, fraction_b: f64) -> (f64, f64, bool) {
    let next_candidate = || {
        let angle = rng.next_f64() * TAU;
        // Radius is linear, not area-uniform: icons cluster toward the centre.
        let r = rng.next_f64() * plate.radius * SCATTER_RADIUS_FACTOR;
        (plate.cx + r * angle.cos(), plate.cy + r * angle.sin())
    };

    let accepts = |x: f64, y: f64| {
        plate.distance_from_center(x, y) <= plate.radius * RIM_MARGIN_FACTOR
            && region_accepts(plate.normalized_x(x), fraction_b)
    };

    rejection_sample(next_candidate, accepts)
}

/// Place ingredient icons on the plate.
///
/// Pure in its inputs: the same ingredients, `fraction_b` and `seed` always
/// produce the same ordered list. `fraction_b` (curry share) is clamped to
/// `[0, 1]`.
pub fn place_icons(
    ingredients: &[IngredientAmount],
    fraction_b: f64,
    seed: u64,
    plate: &PlateGeometry,
) -> Vec<IconPlacement> {
    let fraction_b = fraction_b.clamp(0.0, 1.0);
    let mut rng = SeededRandom::new(seed);
    let mut icons = Vec::new();
    let mut fallbacks = 0usize;

    for item in ingredients {
        let count = icon_count(item.amount, item.ingredient.max_amount);

        for _ in 0..count {
            let (x, y, accepted) = sample_position(&mut rng, plate, fraction_b);
            if !accepted {
                fallbacks += 1;
            }

            let size = ICON_SIZE_MIN + rng.next_f64() * ICON_SIZE_SPAN;
            icons.push(IconPlacement {
                x,
                y,
                size,
                color: item.ingredient.color.clone(),
                shape: item.ingredient.shape,
                label: item.ingredient.name.clone(),
                accepted,
            });
        }
    }

    if fallbacks > 0 {
        warn!(
            "{} of {} icons kept a rejected candidate (curry share {:.2}, seed {})",
            fallbacks,
            icons.len(),
            fraction_b,
            seed
        );
    }
    debug!("placed {} icons with seed {}", icons.len(), seed);

    icons
}

/// Lay out icons for a generated result on the default plate.
pub fn layout_result(result: &CurryResult, seed: u64) -> Vec<IconPlacement> {
    place_icons(
        &result.ingredients,
        result.curry_fraction(),
        seed,
        &PlateGeometry::default(),
    )
}
