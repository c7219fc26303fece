use crate::generator::random::RandomSource;

/// Draw the rice percentage, uniform over 0..=100.
///
/// Returns `(rice_percent, curry_percent)`; the two always sum to 100.
pub fn generate_ratio(rng: &mut impl RandomSource) -> (u8, u8) {
    let rice = rng.int_inclusive(0, 100).min(100) as u8;
    (rice, 100 - rice)
}
