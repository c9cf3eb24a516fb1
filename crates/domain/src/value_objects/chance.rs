//! Chance value object - a success probability as a percentage
//!
//! Content-defined chance functions may return anything (a constant, a linear
//! function of one or more stats); the constructor clamps into `[0, 100]`
//! rather than rejecting, since content authoring is decoupled from engine
//! review.

use serde::{Deserialize, Serialize};

/// A success probability in percent, always within `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Chance(f64);

impl Chance {
    /// Create a chance, clamping into `[0, 100]`. Non-finite inputs collapse
    /// to zero.
    pub fn new(percent: f64) -> Self {
        if percent.is_finite() {
            Self(percent.clamp(0.0, 100.0))
        } else {
            Self(0.0)
        }
    }

    /// A guaranteed success.
    pub fn certain() -> Self {
        Self(100.0)
    }

    /// A guaranteed failure.
    pub fn never() -> Self {
        Self(0.0)
    }

    #[inline]
    pub fn percent(&self) -> f64 {
        self.0
    }

    /// True iff a uniform draw in `[0, 100)` lands inside this chance.
    pub fn covers(&self, draw: f64) -> bool {
        draw < self.0
    }
}

impl From<f64> for Chance {
    fn from(percent: f64) -> Self {
        Self::new(percent)
    }
}

impl std::fmt::Display for Chance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0}%", self.0)
    }
}
