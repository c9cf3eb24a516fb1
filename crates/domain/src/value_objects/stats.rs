//! StatVector and StatDelta - the four bounded cat stats
//!
//! Every mutation goes through [`StatVector::apply`], which clamps each field
//! into `[0, 100]` before the result can be observed by any other component.
//! Out-of-range inputs are silently clamped, never rejected: a failed action
//! still costs stats.

use serde::{Deserialize, Serialize};

/// The four stat axes.
///
/// Used for ending identities (the stat that hit zero is part of the death
/// ending) and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    Health,
    Satiety,
    Hissing,
    Smarts,
}

impl StatKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            StatKind::Health => "Health",
            StatKind::Satiety => "Satiety",
            StatKind::Hissing => "Hissing",
            StatKind::Smarts => "Smarts",
        }
    }

    /// Uppercase token used in ending codes (e.g. `MANSION_HEALTH_0`).
    pub fn code(&self) -> &'static str {
        match self {
            StatKind::Health => "HEALTH",
            StatKind::Satiety => "SATIETY",
            StatKind::Hissing => "HISSING",
            StatKind::Smarts => "SMARTS",
        }
    }

    /// All axes, in depletion-check priority order.
    pub fn all() -> [StatKind; 4] {
        [
            StatKind::Health,
            StatKind::Satiety,
            StatKind::Hissing,
            StatKind::Smarts,
        ]
    }
}

impl std::fmt::Display for StatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// The 4-dimensional bounded stat vector.
///
/// # Invariants
///
/// - Every field is within `[0, 100]` at all times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatVector {
    health: i32,
    satiety: i32,
    hissing: i32,
    smarts: i32,
}

impl StatVector {
    pub const MIN: i32 = 0;
    pub const MAX: i32 = 100;

    /// Create a vector, clamping each field into range.
    pub fn new(health: i32, satiety: i32, hissing: i32, smarts: i32) -> Self {
        Self {
            health: clamp(health),
            satiety: clamp(satiety),
            hissing: clamp(hissing),
            smarts: clamp(smarts),
        }
    }

    #[inline]
    pub fn health(&self) -> i32 {
        self.health
    }

    #[inline]
    pub fn satiety(&self) -> i32 {
        self.satiety
    }

    #[inline]
    pub fn hissing(&self) -> i32 {
        self.hissing
    }

    #[inline]
    pub fn smarts(&self) -> i32 {
        self.smarts
    }

    pub fn get(&self, kind: StatKind) -> i32 {
        match kind {
            StatKind::Health => self.health,
            StatKind::Satiety => self.satiety,
            StatKind::Hissing => self.hissing,
            StatKind::Smarts => self.smarts,
        }
    }

    /// Apply a partial delta, clamping every field back into `[0, 100]`.
    ///
    /// Pure: returns the new vector, leaving `self` untouched. Fields absent
    /// from the delta are unchanged.
    #[must_use]
    pub fn apply(&self, delta: &StatDelta) -> StatVector {
        StatVector::new(
            self.health + delta.health.unwrap_or(0),
            self.satiety + delta.satiety.unwrap_or(0),
            self.hissing + delta.hissing.unwrap_or(0),
            self.smarts + delta.smarts.unwrap_or(0),
        )
    }

    /// The first depleted stat in priority order, if any.
    ///
    /// Checked right after every resolution, not only at the day boundary.
    pub fn depleted(&self) -> Option<StatKind> {
        StatKind::all().into_iter().find(|kind| self.get(*kind) == 0)
    }
}

fn clamp(value: i32) -> i32 {
    value.clamp(StatVector::MIN, StatVector::MAX)
}

/// A partial stat delta: fields left unset are untouched by `apply`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatDelta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub satiety: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hissing: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smarts: Option<i32>,
}

impl StatDelta {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn health(mut self, amount: i32) -> Self {
        self.health = Some(amount);
        self
    }

    pub fn satiety(mut self, amount: i32) -> Self {
        self.satiety = Some(amount);
        self
    }

    pub fn hissing(mut self, amount: i32) -> Self {
        self.hissing = Some(amount);
        self
    }

    pub fn smarts(mut self, amount: i32) -> Self {
        self.smarts = Some(amount);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.health.is_none()
            && self.satiety.is_none()
            && self.hissing.is_none()
            && self.smarts.is_none()
    }
}

impl StatVector {
    /// Starting stats for a freshly reborn stray, used when no roster
    /// character overrides them.
    pub fn stray_default() -> Self {
        StatVector::new(60, 40, 30, 10)
    }

    /// True when every stat meets or exceeds the given floor. Used by the
    /// victory predicate at the final stage.
    pub fn all_at_least(&self, floor: i32) -> bool {
        self.health >= floor
            && self.satiety >= floor
            && self.hissing >= floor
            && self.smarts >= floor
    }
}
