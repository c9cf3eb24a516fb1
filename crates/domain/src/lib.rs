//! Nine Lives domain layer.
//!
//! Pure value objects, immutable content records, and the per-run history
//! ledger for the cat life simulation. No I/O, no randomness: probability
//! rolls live behind the engine crate's injectable roller.

pub mod character;
pub mod ending;
pub mod error;
pub mod event;
pub mod ids;
pub mod ledger;
pub mod phase;
pub mod stage;
pub mod thought;
pub mod value_objects;

pub use character::Character;
pub use ending::{Ending, EndingPredicateFn, EndingRecord, EndingRegistry, RunResult, RunView};
pub use error::DomainError;
pub use event::{
    ChanceFn, Choice, ChoiceEffect, EffectFn, EffectKind, Eligibility, EventKind, QuestEvent,
    UnlockContext, UnlockFn, VisibilityFn,
};
pub use ids::{ChainId, CharacterId, ChoiceId, EventId, ThoughtId};
pub use ledger::HistoryLedger;
pub use phase::Phase;
pub use stage::Stage;
pub use thought::{NightThought, ThoughtConditionFn};
pub use value_objects::{Chance, StatDelta, StatKind, StatVector};
