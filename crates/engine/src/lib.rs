//! Run engine for the nine-lives cat life simulation
//!
//! Everything stateful about a run lives in [`GameRun`]; everything static
//! lives in [`content::GameContent`]. The engine consumes randomness only
//! through the [`Roller`] trait - a single uniform draw per resolved choice
//! plus tie-breaking picks - so a scripted or seeded roller makes every run
//! fully reproducible.
//!
//! Layering: `ninelives-domain` defines the records and predicates, this
//! crate drives them. Content is data; chain ordering, cooldowns, and stage
//! gates are all encoded in the predicates the content pack attaches to its
//! events, never in engine branching.

pub mod catalog;
pub mod config;
pub mod content;
pub mod day_cycle;
pub mod eligibility;
pub mod endings;
pub mod outcome;
pub mod roller;
pub mod selection;

pub use catalog::EventCatalog;
pub use config::EngineConfig;
pub use content::{GameContent, PrologueStep, StageRule};
pub use day_cycle::{DayReport, GameRun, LogEntry, LogSeverity, NightReport, ThoughtView};
pub use eligibility::{eligible_events, EligibilityReport, Rejection};
pub use endings::EndingAggregator;
pub use outcome::{resolve_choice, LedgerDelta, Outcome};
pub use roller::{RandomRoller, Roller, ScriptedRoller};
pub use selection::select_event;
