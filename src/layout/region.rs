/// Share of the curry side's left edge used as the cutoff when curry dominates.
pub const CURRY_DOMINANT_SLACK: f64 = 0.8;

/// Decide whether a candidate at horizontal position `u` may hold an icon.
///
/// `u` is the candidate's x mapped into `[0, 1]` across the plate;
/// `fraction_b` is the curry share. The rule is deliberately asymmetric:
/// - curry dominant (`fraction_b > 0.5`): accept `u >= (1 - fraction_b) * 0.8`,
///   letting icons drift a little into the rice side.
/// - otherwise: accept `u < 1 - fraction_b`.
pub fn region_accepts(u: f64, fraction_b: f64) -> bool {
    if fraction_b > 0.5 {
        u >= (1.0 - fraction_b) * CURRY_DOMINANT_SLACK
    } else {
        u < 1.0 - fraction_b
    }
}
