//! HistoryLedger - the per-run append-only record
//!
//! Completions, failures (with the day they happened, anchoring cooldowns),
//! and the ordered sequence of every chosen choice id. No entry is ever
//! removed within a run; a fresh ledger is created only at run reset.
//!
//! Mutated exclusively by the choice-outcome resolver and the day-cycle
//! engine at resolution time. Queries are pure reads.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::{ChoiceId, EventId};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryLedger {
    /// Events completed at least once this run (membership only).
    completed: BTreeSet<EventId>,
    /// Every chosen choice id, in the order chosen. Order matters: ending
    /// predicates inspect whether specific choices occurred across multiple
    /// chain stages.
    choices: Vec<ChoiceId>,
    /// Day each event was last completed.
    completed_on: BTreeMap<EventId, u32>,
    /// Day each event was last failed. Cooldown windows are computed against
    /// this map inside content predicates, not by the engine.
    failed_on: BTreeMap<EventId, u32>,
}

impl HistoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    // ──────────────────────────────────────────────────────────────────────
    // Append-only mutations
    // ──────────────────────────────────────────────────────────────────────

    pub fn record_completion(&mut self, event_id: EventId, day: u32) {
        self.completed.insert(event_id.clone());
        self.completed_on.insert(event_id, day);
    }

    pub fn record_failure(&mut self, event_id: EventId, day: u32) {
        self.failed_on.insert(event_id, day);
    }

    pub fn record_choice(&mut self, choice_id: ChoiceId) {
        self.choices.push(choice_id);
    }

    // ──────────────────────────────────────────────────────────────────────
    // Pure queries
    // ──────────────────────────────────────────────────────────────────────

    pub fn is_completed(&self, event_id: &str) -> bool {
        self.completed.contains(event_id)
    }

    pub fn completion_day(&self, event_id: &str) -> Option<u32> {
        self.completed_on.get(event_id).copied()
    }

    pub fn last_failure_day(&self, event_id: &str) -> Option<u32> {
        self.failed_on.get(event_id).copied()
    }

    /// The full ordered choice history.
    pub fn choice_sequence(&self) -> &[ChoiceId] {
        &self.choices
    }

    /// True if the given choice id appears anywhere in the history.
    pub fn chose(&self, choice_id: &str) -> bool {
        self.choices.iter().any(|c| c.as_str() == choice_id)
    }

    /// True if every given choice id appears in the history, in any order.
    pub fn chose_all<'a>(&self, choice_ids: impl IntoIterator<Item = &'a str>) -> bool {
        choice_ids.into_iter().all(|id| self.chose(id))
    }

    /// Ids of all completed events.
    pub fn completed_events(&self) -> impl Iterator<Item = &EventId> {
        self.completed.iter()
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod completions {
        use super::*;

        #[test]
        fn completion_records_membership_and_day() {
            let mut ledger = HistoryLedger::new();
            ledger.record_completion(EventId::new("phil_stray_jungle"), 3);

            assert!(ledger.is_completed("phil_stray_jungle"));
            assert_eq!(ledger.completion_day("phil_stray_jungle"), Some(3));
            assert!(!ledger.is_completed("phil_lord_contract"));
        }

        #[test]
        fn later_completion_overwrites_day_but_keeps_membership() {
            let mut ledger = HistoryLedger::new();
            ledger.record_completion(EventId::new("daily_nap"), 2);
            ledger.record_completion(EventId::new("daily_nap"), 9);

            assert_eq!(ledger.completion_day("daily_nap"), Some(9));
            assert_eq!(ledger.completed_count(), 1);
        }
    }

    mod failures {
        use super::*;

        #[test]
        fn failure_records_day_without_completion() {
            let mut ledger = HistoryLedger::new();
            ledger.record_failure(EventId::new("phil_stray_jungle"), 5);

            assert_eq!(ledger.last_failure_day("phil_stray_jungle"), Some(5));
            assert!(!ledger.is_completed("phil_stray_jungle"));
        }

        #[test]
        fn failure_then_completion_keeps_both_records() {
            let mut ledger = HistoryLedger::new();
            ledger.record_failure(EventId::new("phil_stray_jungle"), 5);
            ledger.record_completion(EventId::new("phil_stray_jungle"), 7);

            assert_eq!(ledger.last_failure_day("phil_stray_jungle"), Some(5));
            assert_eq!(ledger.completion_day("phil_stray_jungle"), Some(7));
        }
    }

    mod choice_history {
        use super::*;

        #[test]
        fn choice_sequence_preserves_order() {
            let mut ledger = HistoryLedger::new();
            ledger.record_choice(ChoiceId::new("phil_choice_overthink_1"));
            ledger.record_choice(ChoiceId::new("phil_choice_nihilism"));
            ledger.record_choice(ChoiceId::new("phil_choice_overthink_1"));

            let sequence: Vec<&str> = ledger
                .choice_sequence()
                .iter()
                .map(|c| c.as_str())
                .collect();
            assert_eq!(
                sequence,
                [
                    "phil_choice_overthink_1",
                    "phil_choice_nihilism",
                    "phil_choice_overthink_1",
                ]
            );
        }

        #[test]
        fn chose_all_is_order_independent() {
            let mut ledger = HistoryLedger::new();
            ledger.record_choice(ChoiceId::new("phil_choice_simulation"));
            ledger.record_choice(ChoiceId::new("phil_choice_overthink_1"));
            ledger.record_choice(ChoiceId::new("phil_choice_nihilism"));

            assert!(ledger.chose_all([
                "phil_choice_overthink_1",
                "phil_choice_nihilism",
                "phil_choice_simulation",
            ]));
            assert!(!ledger.chose_all(["phil_choice_overthink_1", "missing_choice"]));
        }
    }

    #[test]
    fn serde_round_trip() {
        let mut ledger = HistoryLedger::new();
        ledger.record_completion(EventId::new("side_egg_crisis"), 8);
        ledger.record_failure(EventId::new("side_hater_war"), 11);
        ledger.record_choice(ChoiceId::new("choice_egg_resist"));

        let json = serde_json::to_string(&ledger).expect("serialize");
        let back: HistoryLedger = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(ledger, back);
    }
}
