//! Day-cycle phases
//!
//! The finite state machine the engine walks once per player input. Terminal
//! phases only exit through an explicit reset.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    Start,
    Prologue,
    Rebirth,
    CharacterSelect,
    MorningEvent,
    ActionSelection,
    EventResolution,
    NightSummary,
    GameOver,
    Victory,
}

impl Phase {
    pub fn display_name(&self) -> &'static str {
        match self {
            Phase::Start => "Start",
            Phase::Prologue => "Prologue",
            Phase::Rebirth => "Rebirth",
            Phase::CharacterSelect => "Character Select",
            Phase::MorningEvent => "Morning Event",
            Phase::ActionSelection => "Action Selection",
            Phase::EventResolution => "Event Resolution",
            Phase::NightSummary => "Night Summary",
            Phase::GameOver => "Game Over",
            Phase::Victory => "Victory",
        }
    }

    /// Terminal phases: the run is over, only `reset` leaves them.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::GameOver | Phase::Victory)
    }

    /// Phases belonging to the daily loop (as opposed to the opening
    /// sequence or a terminal screen).
    pub fn is_in_day_loop(&self) -> bool {
        matches!(
            self,
            Phase::MorningEvent
                | Phase::ActionSelection
                | Phase::EventResolution
                | Phase::NightSummary
        )
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_game_over_and_victory_are_terminal() {
        assert!(Phase::GameOver.is_terminal());
        assert!(Phase::Victory.is_terminal());
        assert!(!Phase::NightSummary.is_terminal());
        assert!(!Phase::Start.is_terminal());
    }

    #[test]
    fn day_loop_membership() {
        assert!(Phase::MorningEvent.is_in_day_loop());
        assert!(!Phase::Prologue.is_in_day_loop());
        assert!(!Phase::GameOver.is_in_day_loop());
    }

    #[test]
    fn serde_uses_original_wire_names() {
        assert_eq!(
            serde_json::to_string(&Phase::CharacterSelect).expect("serialize"),
            "\"CHARACTER_SELECT\""
        );
    }
}
