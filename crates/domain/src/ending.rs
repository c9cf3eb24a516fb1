//! Endings and achievements - terminal-state classification
//!
//! A run resolves into exactly one *primary* ending (the one that actually
//! terminated it) plus zero or more additional achievements unlocked
//! simultaneously. The stage at time of death is part of a death ending's
//! identity: the same stat hitting zero yields a different ending per stage.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{HistoryLedger, Stage, StatKind, StatVector};

/// Every terminal classification the engine can award.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", tag = "kind")]
pub enum Ending {
    /// A stat hit zero; the stage qualifies the identity.
    StatDepleted { stage: Stage, stat: StatKind },
    /// The run outlasted the day limit without reaching the final stage.
    OldCat,
    /// The designated good victory: final stage with stats above thresholds.
    Superstar,
    /// Reached Cat Lord but never left the alley before the end.
    LordOnly,
    /// Gave up the wild life for the operating table.
    Domesticated,
    /// Chose the nihilist path at all three chain stages.
    NihilismAwakened,
    /// Tipped the pantry off the balcony for the strays below.
    Revolutionary,
    /// Trained an apprentice who surpassed you.
    ApprenticeMaster,
    /// The apprentice remembered everything you did.
    ApprenticeRevenge,
    /// Shredded the carrier and kept what was yours.
    EggFreedom,
}

impl Ending {
    /// Stable uppercase code, matching the original wire identities
    /// (e.g. `MANSION_HEALTH_0`).
    pub fn code(&self) -> String {
        match self {
            Ending::StatDepleted { stage, stat } => {
                format!("{}_{}_0", stage.code(), stat.code())
            }
            Ending::OldCat => "OLD_CAT".to_string(),
            Ending::Superstar => "SUPERSTAR".to_string(),
            Ending::LordOnly => "LORD_ONLY".to_string(),
            Ending::Domesticated => "DOMESTICATED".to_string(),
            Ending::NihilismAwakened => "NIHILISM_AWAKENED".to_string(),
            Ending::Revolutionary => "REVOLUTIONARY".to_string(),
            Ending::ApprenticeMaster => "END_APPRENTICE_MASTER".to_string(),
            Ending::ApprenticeRevenge => "END_APPRENTICE_REVENGE".to_string(),
            Ending::EggFreedom => "END_EGG_FREEDOM".to_string(),
        }
    }

    pub fn is_death(&self) -> bool {
        matches!(self, Ending::StatDepleted { .. })
    }
}

impl std::fmt::Display for Ending {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Read-only view of a finished (or finishing) run handed to unlock
/// predicates.
#[derive(Debug, Clone, Copy)]
pub struct RunView<'a> {
    pub stats: &'a StatVector,
    pub stage: Stage,
    pub day: u32,
    pub ledger: &'a HistoryLedger,
}

pub type EndingPredicateFn = Arc<dyn Fn(&RunView<'_>) -> bool + Send + Sync>;

/// Descriptive metadata plus the unlock predicate for one ending.
#[derive(Clone)]
pub struct EndingRecord {
    ending: Ending,
    title: String,
    description: String,
    is_victory: bool,
    predicate: EndingPredicateFn,
}

impl EndingRecord {
    pub fn new(
        ending: Ending,
        title: impl Into<String>,
        description: impl Into<String>,
        predicate: EndingPredicateFn,
    ) -> Self {
        Self {
            ending,
            title: title.into(),
            description: description.into(),
            is_victory: false,
            predicate,
        }
    }

    pub fn victory(mut self) -> Self {
        self.is_victory = true;
        self
    }

    #[inline]
    pub fn ending(&self) -> Ending {
        self.ending
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[inline]
    pub fn is_victory(&self) -> bool {
        self.is_victory
    }

    /// Pure predicate evaluation: deterministic for identical run views.
    pub fn holds(&self, view: &RunView<'_>) -> bool {
        (self.predicate)(view)
    }
}

impl std::fmt::Debug for EndingRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EndingRecord")
            .field("ending", &self.ending)
            .field("is_victory", &self.is_victory)
            .finish()
    }
}

/// Static mapping from ending identity to record.
#[derive(Debug, Clone, Default)]
pub struct EndingRegistry {
    records: BTreeMap<Ending, EndingRecord>,
}

impl EndingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, record: EndingRecord) {
        self.records.insert(record.ending(), record);
    }

    pub fn get(&self, ending: Ending) -> Option<&EndingRecord> {
        self.records.get(&ending)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EndingRecord> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All endings whose predicates hold for the given run view.
    pub fn unlocked(&self, view: &RunView<'_>) -> Vec<Ending> {
        self.records
            .values()
            .filter(|record| record.holds(view))
            .map(|record| record.ending())
            .collect()
    }
}

/// The aggregate result of a finished run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunResult {
    /// The ending that actually terminated the run.
    pub primary: Ending,
    /// Every ending/achievement unlocked this run, primary included.
    pub achievements: Vec<Ending>,
    pub is_victory: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_view<'a>(stats: &'a StatVector, ledger: &'a HistoryLedger) -> RunView<'a> {
        RunView {
            stats,
            stage: Stage::Mansion,
            day: 12,
            ledger,
        }
    }

    #[test]
    fn death_codes_are_stage_qualified() {
        let ending = Ending::StatDepleted {
            stage: Stage::Mansion,
            stat: StatKind::Health,
        };
        assert_eq!(ending.code(), "MANSION_HEALTH_0");
        assert!(ending.is_death());

        let stray = Ending::StatDepleted {
            stage: Stage::Stray,
            stat: StatKind::Health,
        };
        assert_ne!(ending, stray, "same stat, different stage, different ending");
    }

    #[test]
    fn chain_ending_codes_match_original_identities() {
        assert_eq!(Ending::ApprenticeMaster.code(), "END_APPRENTICE_MASTER");
        assert_eq!(Ending::EggFreedom.code(), "END_EGG_FREEDOM");
        assert_eq!(Ending::Superstar.code(), "SUPERSTAR");
    }

    #[test]
    fn registry_collects_holding_predicates() {
        let mut registry = EndingRegistry::new();
        registry.register(EndingRecord::new(
            Ending::NihilismAwakened,
            "Nothing Matters",
            "Chose the void three times.",
            Arc::new(|view| view.ledger.chose("phil_choice_nihilism")),
        ));
        registry.register(
            EndingRecord::new(
                Ending::Superstar,
                "Superstar",
                "Every light in the city knows your face.",
                Arc::new(|view| view.stage.is_final()),
            )
            .victory(),
        );

        let stats = StatVector::new(50, 50, 50, 50);
        let mut ledger = HistoryLedger::new();
        ledger.record_choice(crate::ChoiceId::new("phil_choice_nihilism"));

        let unlocked = registry.unlocked(&sample_view(&stats, &ledger));
        assert_eq!(unlocked, vec![Ending::NihilismAwakened]);
    }

    #[test]
    fn evaluation_is_deterministic_for_identical_views() {
        let mut registry = EndingRegistry::new();
        registry.register(EndingRecord::new(
            Ending::OldCat,
            "Old Cat",
            "Thirty days of weather.",
            Arc::new(|view| view.day >= 30),
        ));
        let stats = StatVector::new(10, 10, 10, 10);
        let ledger = HistoryLedger::new();
        let view = RunView {
            stats: &stats,
            stage: Stage::CatLord,
            day: 30,
            ledger: &ledger,
        };
        assert_eq!(registry.unlocked(&view), registry.unlocked(&view));
    }
}
