//! Injectable random source
//!
//! The probability roll is the sole nondeterministic operation in the whole
//! engine, so it sits behind a single trait: production runs wrap `StdRng`,
//! tests script exact draws and replay runs from a seed.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform percentage draws.
pub trait Roller: Send {
    /// A uniform draw in `[0, 100)`. A choice with chance `p` succeeds iff
    /// the draw is strictly below `p`.
    fn roll_percent(&mut self) -> f64;

    /// Pick an index in `[0, len)` for tie-breaking among equally ranked
    /// eligible events. Derived from the same draw stream so a seed fixes
    /// the entire run.
    fn pick_index(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        let draw = self.roll_percent() / 100.0;
        // draw < 1.0 always, so the index stays in range
        (draw * len as f64) as usize
    }
}

/// Production roller backed by a seedable PRNG.
pub struct RandomRoller {
    rng: StdRng,
}

impl RandomRoller {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Fixed seed: the whole run replays identically.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomRoller {
    fn default() -> Self {
        Self::new()
    }
}

impl Roller for RandomRoller {
    fn roll_percent(&mut self) -> f64 {
        self.rng.gen_range(0.0..100.0)
    }
}

/// Test roller replaying a scripted sequence of draws, then a fallback.
pub struct ScriptedRoller {
    draws: VecDeque<f64>,
    fallback: f64,
}

impl ScriptedRoller {
    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            fallback: 0.0,
        }
    }

    /// Every draw succeeds against any non-zero chance.
    pub fn always_low() -> Self {
        Self::new([])
    }

    /// Every draw fails against any chance below 100.
    pub fn always_high() -> Self {
        Self {
            draws: VecDeque::new(),
            fallback: 99.999,
        }
    }
}

impl Roller for ScriptedRoller {
    fn roll_percent(&mut self) -> f64 {
        self.draws.pop_front().unwrap_or(self.fallback)
    }
}
