//! The standard content pack: events, roster, thoughts, prologue, endings
//!
//! Everything the engine runs on is plain data built here at load time.
//! The engine core never mentions a concrete event id; chain ordering,
//! cooldowns, and stage requirements all live in the predicates these
//! modules attach to their events.

mod apprentice;
mod characters;
mod daily;
mod endings;
mod love;
mod philosophy;
mod prologue;
mod side_stories;
mod thoughts;

use std::sync::Arc;

use ninelives_domain::{Character, DomainError, HistoryLedger, NightThought, Stage, StatVector};

use crate::catalog::EventCatalog;

pub use endings::ending_registry;
pub use prologue::PrologueStep;

type StageCheckFn = Arc<dyn Fn(&StatVector, &HistoryLedger) -> bool + Send + Sync>;

/// A night-boundary promotion rule: when `check` holds at the end of a day
/// spent in `from`, the run advances to `to`. Event-driven promotions (a
/// stage event's `stage_unlock`) take precedence and skip these checks.
#[derive(Clone)]
pub struct StageRule {
    from: Stage,
    to: Stage,
    check: StageCheckFn,
}

impl StageRule {
    pub fn new(from: Stage, to: Stage, check: StageCheckFn) -> Self {
        Self { from, to, check }
    }

    /// The stage this rule promotes to, if it applies right now.
    pub fn applies(&self, stage: Stage, stats: &StatVector, ledger: &HistoryLedger) -> Option<Stage> {
        if stage == self.from && (self.check)(stats, ledger) {
            Some(self.to)
        } else {
            None
        }
    }
}

impl std::fmt::Debug for StageRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StageRule")
            .field("from", &self.from)
            .field("to", &self.to)
            .finish()
    }
}

/// The full bundle of static data a run needs.
#[derive(Debug)]
pub struct GameContent {
    pub catalog: EventCatalog,
    pub roster: Vec<Character>,
    pub thoughts: Vec<NightThought>,
    pub prologue: Vec<PrologueStep>,
    pub stage_rules: Vec<StageRule>,
}

impl GameContent {
    /// Build and validate the standard pack.
    pub fn standard() -> Result<Self, DomainError> {
        let catalog = EventCatalog::new()
            .with_events(philosophy::events())
            .with_events(love::events())
            .with_events(apprentice::events())
            .with_events(side_stories::events())
            .with_events(daily::events());
        catalog.validate()?;

        Ok(Self {
            catalog,
            roster: characters::roster(),
            thoughts: thoughts::thoughts(),
            prologue: prologue::script(),
            stage_rules: stage_rules(),
        })
    }

    pub fn character(&self, character_id: &str) -> Option<&Character> {
        self.roster.iter().find(|c| c.id().as_str() == character_id)
    }

    /// Thoughts applicable tonight, in content order.
    pub fn applicable_thoughts(
        &self,
        stage: Stage,
        stats: &StatVector,
        ledger: &HistoryLedger,
    ) -> Vec<&NightThought> {
        self.thoughts
            .iter()
            .filter(|t| t.applies(stage, stats, ledger))
            .collect()
    }

    /// First matching night-boundary promotion, in rule order.
    pub fn stage_promotion(
        &self,
        stage: Stage,
        stats: &StatVector,
        ledger: &HistoryLedger,
    ) -> Option<Stage> {
        self.stage_rules
            .iter()
            .find_map(|rule| rule.applies(stage, stats, ledger))
    }
}

/// The slow route up the ladder: stat thresholds and completed stage
/// events checked at every night boundary.
fn stage_rules() -> Vec<StageRule> {
    vec![
        StageRule::new(
            Stage::Stray,
            Stage::CatLord,
            Arc::new(|stats, ledger| {
                ledger.is_completed("stage_alley_king") || stats.hissing() >= 60
            }),
        ),
        StageRule::new(
            Stage::CatLord,
            Stage::Mansion,
            Arc::new(|_, ledger| ledger.is_completed("stage_adopted")),
        ),
        StageRule::new(
            Stage::Mansion,
            Stage::Celebrity,
            Arc::new(|stats, ledger| {
                ledger.is_completed("stage_viral") || stats.smarts() >= 85
            }),
        ),
    ]
}
