//! Engine configuration
//!
//! Owned by the presentation layer and passed in explicitly; the core never
//! reaches for ambient global state. The mute flag is opaque here: the
//! engine stores it and echoes it back, nothing more.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// Fixed RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Audio mute preference persisted by the presentation layer.
    pub muted: bool,
    /// A run that reaches this day without winning ends in old age.
    pub max_days: u32,
    /// Victory requires every stat at or above this floor at the final stage.
    pub victory_floor: i32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            muted: false,
            max_days: 30,
            victory_floor: 60,
        }
    }
}
