//! Life stages - the ordered ladder from stray to celebrity
//!
//! Exactly one stage is active per run. Transitions are monotonic forward;
//! only a run reset goes back to the beginning.

use serde::{Deserialize, Serialize};

/// The ordered, closed set of life stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Stage {
    Stray,
    CatLord,
    Mansion,
    Celebrity,
}

impl Stage {
    pub fn display_name(&self) -> &'static str {
        match self {
            Stage::Stray => "Stray",
            Stage::CatLord => "Cat Lord",
            Stage::Mansion => "Mansion",
            Stage::Celebrity => "Celebrity",
        }
    }

    /// Uppercase token used in ending codes (e.g. `MANSION_HEALTH_0`).
    pub fn code(&self) -> &'static str {
        match self {
            Stage::Stray => "STRAY",
            Stage::CatLord => "LORD",
            Stage::Mansion => "MANSION",
            Stage::Celebrity => "CELEBRITY",
        }
    }

    /// The next stage up the ladder, if any.
    pub fn next(&self) -> Option<Stage> {
        match self {
            Stage::Stray => Some(Stage::CatLord),
            Stage::CatLord => Some(Stage::Mansion),
            Stage::Mansion => Some(Stage::Celebrity),
            Stage::Celebrity => None,
        }
    }

    /// Zero-based position in the ladder.
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn is_final(&self) -> bool {
        matches!(self, Stage::Celebrity)
    }

    /// All stages in order.
    pub fn all() -> [Stage; 4] {
        [Stage::Stray, Stage::CatLord, Stage::Mansion, Stage::Celebrity]
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
