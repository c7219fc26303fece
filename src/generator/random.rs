use std::collections::VecDeque;

use rand::rngs::{StdRng, ThreadRng};
use rand::Rng;

/// Source of uniform integer draws for the generator.
///
/// Production code uses an entropy-seeded RNG; tests can supply a
/// [`ScriptedSource`] to force exact outcomes.
pub trait RandomSource {
    /// Uniform integer in `[min, max]`, inclusive on both ends.
    fn int_inclusive(&mut self, min: u32, max: u32) -> u32;
}

impl RandomSource for ThreadRng {
    fn int_inclusive(&mut self, min: u32, max: u32) -> u32 {
        if max <= min {
            return min;
        }
        self.gen_range(min..=max)
    }
}

impl RandomSource for StdRng {
    fn int_inclusive(&mut self, min: u32, max: u32) -> u32 {
        if max <= min {
            return min;
        }
        self.gen_range(min..=max)
    }
}

/// Replays a fixed sequence of values.
///
/// Each value is clamped into the requested range. Once the script runs out,
/// every draw returns `min`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    values: VecDeque<u32>,
}

impl ScriptedSource {
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Number of scripted values not yet consumed.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSource for ScriptedSource {
    fn int_inclusive(&mut self, min: u32, max: u32) -> u32 {
        match self.values.pop_front() {
            Some(v) => v.clamp(min, max.max(min)),
            None => min,
        }
    }
}
