//! ChoiceOutcomeResolver - one roll, one effect call, ledger updates
//!
//! Resolving a choice is the only place the engine consumes randomness: a
//! single uniform draw against the content-defined success chance. The
//! choice's effect function receives the verdict and must be deterministic;
//! it never rolls on its own.

use ninelives_domain::{
    ChoiceId, DomainError, EffectKind, EventId, HistoryLedger, QuestEvent, Stage, StatVector,
};
use serde::{Deserialize, Serialize};

use crate::roller::Roller;

/// What the resolution appended to the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerDelta {
    pub choice: ChoiceId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<EventId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed: Option<EventId>,
}

/// The full result of resolving one choice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outcome {
    pub new_stats: StatVector,
    pub message: String,
    pub effect_kind: EffectKind,
    /// The narrative verdict shown to the player.
    pub favorable: bool,
    /// The raw roll verdict (draw fell inside the success chance).
    pub roll_succeeded: bool,
    /// The event is not consumed and may recur without a cooldown.
    pub retry: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage_unlock: Option<Stage>,
    pub ledger_delta: LedgerDelta,
}

/// Resolve a player-selected choice against the current stats.
///
/// Preconditions: the event was offered by the eligibility resolver and the
/// choice is visible at `stats`. Violations are programming errors, not
/// narrative failures, and fail loudly.
///
/// On success the stat delta has been applied (clamped) and the ledger
/// updated: the choice id is always appended; the owning event is recorded
/// completed when the effect advances its chain, recorded failed (anchoring
/// the content-defined cooldown) otherwise - unless the effect asks for a
/// retry, which records neither.
pub fn resolve_choice(
    event: &QuestEvent,
    choice_id: &str,
    stats: &StatVector,
    ledger: &mut HistoryLedger,
    day: u32,
    roller: &mut dyn Roller,
) -> Result<Outcome, DomainError> {
    let choice = event
        .choice(choice_id)
        .ok_or_else(|| DomainError::unknown_id("Choice", choice_id))?;

    if !choice.is_visible(stats) {
        return Err(DomainError::precondition(format!(
            "choice {} is hidden at the current stats and must not have been offered",
            choice.id()
        )));
    }

    let chance = choice.chance(stats);
    let draw = roller.roll_percent();
    let roll_succeeded = chance.covers(draw);

    // Exactly one effect call; branching choices branch on the verdict we
    // pass in, deterministic choices ignore it.
    let effect = choice.effect(stats, roll_succeeded);
    let new_stats = stats.apply(&effect.delta);

    ledger.record_choice(choice.id().clone());
    let mut completed = None;
    let mut failed = None;
    if effect.retry {
        // Not consumed: no completion, no cooldown.
    } else if effect.advances_chain {
        ledger.record_completion(event.id().clone(), day);
        completed = Some(event.id().clone());
    } else {
        ledger.record_failure(event.id().clone(), day);
        failed = Some(event.id().clone());
    }

    tracing::debug!(
        event = %event.id(),
        choice = %choice.id(),
        chance = %chance,
        draw,
        roll_succeeded,
        favorable = effect.favorable,
        advances_chain = effect.advances_chain,
        retry = effect.retry,
        "resolved choice"
    );

    Ok(Outcome {
        new_stats,
        message: effect.message,
        effect_kind: effect.kind,
        favorable: effect.favorable,
        roll_succeeded,
        retry: effect.retry,
        stage_unlock: effect.stage_unlock,
        ledger_delta: LedgerDelta {
            choice: choice.id().clone(),
            completed,
            failed,
        },
    })
}
