//! QuestEvent and Choice - immutable narrative content records
//!
//! Events are defined at content-load time and never mutated; the engine
//! references them by id. Chains are not an engine concept: an event's
//! unlock predicate closes over read-only ledger views (completed set,
//! choice history, completion-day and failure-day maps), so chain ordering
//! and cooldown windows are content decisions.
//!
//! Per-choice effect functions are deterministic: the resolver performs the
//! single probability roll and passes the verdict in. Effects never roll on
//! their own.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{Chance, ChainId, ChoiceId, EventId, HistoryLedger, Stage, StatDelta, StatVector};

// =============================================================================
// Event kind & selection priority
// =============================================================================

/// Narrative event categories. The day-cycle engine uses these to rank
/// simultaneously eligible events: story beats pre-empt filler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventKind {
    Special,
    Stage,
    Auto,
    SideQuest,
    Random,
    Daily,
}

impl EventKind {
    /// Selection rank; lower pre-empts higher. `Random` and `Daily` share
    /// the filler tier.
    pub fn priority(&self) -> u8 {
        match self {
            EventKind::Special => 0,
            EventKind::Stage => 1,
            EventKind::Auto => 2,
            EventKind::SideQuest => 3,
            EventKind::Random | EventKind::Daily => 4,
        }
    }
}

/// Classification of a resolved effect, consumed by the presentation layer
/// (screen shake, healing glow, sleep fade...). No engine behavior hangs off
/// it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    Damage,
    Heal,
    Sleep,
    Neutral,
}

// =============================================================================
// Unlock predicate
// =============================================================================

/// Read-only view handed to unlock predicates.
///
/// The ledger exposes the completed-id set, the ordered choice history, and
/// the completion/failure day maps, so predicates can express chain ordering
/// ("stage 2 requires stage 1 completed") and cooldowns ("failed on day F,
/// locked through F + window") without any engine support.
#[derive(Debug, Clone, Copy)]
pub struct UnlockContext<'a> {
    pub day: u32,
    pub stats: &'a StatVector,
    pub ledger: &'a HistoryLedger,
}

impl UnlockContext<'_> {
    /// True while `event_id` is inside its post-failure cooldown window:
    /// failed on day F, cooling for all days in `(F, F + window]`.
    pub fn cooling_down(&self, event_id: &str, window: u32) -> bool {
        match self.ledger.last_failure_day(event_id) {
            Some(failed_on) => self.day <= failed_on + window,
            None => false,
        }
    }
}

/// Outcome of an unlock predicate: offerable or not, with a human reason
/// shown when not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Eligibility {
    pub unlocked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl Eligibility {
    pub fn unlocked() -> Self {
        Self {
            unlocked: true,
            reason: None,
        }
    }

    pub fn locked(reason: impl Into<String>) -> Self {
        Self {
            unlocked: false,
            reason: Some(reason.into()),
        }
    }
}

pub type UnlockFn = Arc<dyn Fn(&UnlockContext<'_>) -> Eligibility + Send + Sync>;
pub type VisibilityFn = Arc<dyn Fn(&StatVector) -> bool + Send + Sync>;
pub type ChanceFn = Arc<dyn Fn(&StatVector) -> Chance + Send + Sync>;
pub type EffectFn = Arc<dyn Fn(&StatVector, bool) -> ChoiceEffect + Send + Sync>;

// =============================================================================
// Choice effect
// =============================================================================

/// The resolved result of a choice: a partial stat delta, a narrative
/// message, and flags steering the ledger.
///
/// `favorable` is the narrative verdict shown to the player. `advances_chain`
/// decides whether the owning event is recorded completed (letting its chain
/// proceed) or failed (starting the content-defined cooldown). The two are
/// usually equal but deliberately independent: a nihilist choice reads as a
/// loss yet still advances its track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceEffect {
    pub delta: StatDelta,
    pub message: String,
    pub kind: EffectKind,
    pub favorable: bool,
    pub advances_chain: bool,
    /// The event is not consumed and may recur without the normal cooldown.
    pub retry: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage_unlock: Option<Stage>,
}

impl ChoiceEffect {
    /// A narratively favorable result that also advances the owning chain.
    pub fn favorable(delta: StatDelta, message: impl Into<String>) -> Self {
        Self {
            delta,
            message: message.into(),
            kind: EffectKind::Neutral,
            favorable: true,
            advances_chain: true,
            retry: false,
            stage_unlock: None,
        }
    }

    /// A narratively unfavorable result that records a failure (cooldown).
    pub fn unfavorable(delta: StatDelta, message: impl Into<String>) -> Self {
        Self {
            delta,
            message: message.into(),
            kind: EffectKind::Neutral,
            favorable: false,
            advances_chain: false,
            retry: false,
            stage_unlock: None,
        }
    }

    pub fn with_kind(mut self, kind: EffectKind) -> Self {
        self.kind = kind;
        self
    }

    /// Override chain progression independently of the narrative verdict.
    pub fn with_chain_progress(mut self, advances_chain: bool) -> Self {
        self.advances_chain = advances_chain;
        self
    }

    pub fn with_retry(mut self) -> Self {
        self.retry = true;
        self
    }

    pub fn with_stage_unlock(mut self, stage: Stage) -> Self {
        self.stage_unlock = Some(stage);
        self
    }
}

// =============================================================================
// Choice
// =============================================================================

/// An immutable choice attached to a quest event.
#[derive(Clone)]
pub struct Choice {
    id: ChoiceId,
    text: String,
    visibility: Option<VisibilityFn>,
    chance: ChanceFn,
    effect: EffectFn,
}

impl Choice {
    pub fn new(
        id: impl Into<ChoiceId>,
        text: impl Into<String>,
        chance: ChanceFn,
        effect: EffectFn,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            visibility: None,
            chance,
            effect,
        }
    }

    /// Convenience constructor for a fixed success chance.
    pub fn with_fixed_chance(
        id: impl Into<ChoiceId>,
        text: impl Into<String>,
        percent: f64,
        effect: EffectFn,
    ) -> Self {
        Self::new(id, text, Arc::new(move |_| Chance::new(percent)), effect)
    }

    /// Attach a visibility predicate; choices failing it are hidden and
    /// unselectable, not merely disabled.
    pub fn visible_when(mut self, visibility: VisibilityFn) -> Self {
        self.visibility = Some(visibility);
        self
    }

    #[inline]
    pub fn id(&self) -> &ChoiceId {
        &self.id
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// True when the choice may be offered at the given stats.
    pub fn is_visible(&self, stats: &StatVector) -> bool {
        match &self.visibility {
            Some(predicate) => predicate(stats),
            None => true,
        }
    }

    /// Success chance at the given stats, clamped to `[0, 100]` by
    /// construction of [`Chance`].
    pub fn chance(&self, stats: &StatVector) -> Chance {
        (self.chance)(stats)
    }

    /// Compute the effect for an already-decided roll. Deterministic: same
    /// stats and verdict produce the same effect.
    pub fn effect(&self, stats: &StatVector, roll_succeeded: bool) -> ChoiceEffect {
        (self.effect)(stats, roll_succeeded)
    }
}

impl std::fmt::Debug for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Choice")
            .field("id", &self.id)
            .field("text", &self.text)
            .field("has_visibility", &self.visibility.is_some())
            .finish()
    }
}

// =============================================================================
// QuestEvent
// =============================================================================

/// An immutable narrative event record.
#[derive(Clone)]
pub struct QuestEvent {
    id: EventId,
    chain_id: Option<ChainId>,
    title: String,
    description: String,
    kind: EventKind,
    allowed_stages: Option<Vec<Stage>>,
    excluded_stages: Option<Vec<Stage>>,
    unlock: Option<UnlockFn>,
    choices: Vec<Choice>,
}

impl QuestEvent {
    pub fn new(id: impl Into<EventId>, title: impl Into<String>, kind: EventKind) -> Self {
        Self {
            id: id.into(),
            chain_id: None,
            title: title.into(),
            description: String::new(),
            kind,
            allowed_stages: None,
            excluded_stages: None,
            unlock: None,
            choices: Vec::new(),
        }
    }

    // ──────────────────────────────────────────────────────────────────────
    // Builder methods (content construction)
    // ──────────────────────────────────────────────────────────────────────

    pub fn in_chain(mut self, chain_id: impl Into<ChainId>) -> Self {
        self.chain_id = Some(chain_id.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn allowed_in(mut self, stages: impl IntoIterator<Item = Stage>) -> Self {
        self.allowed_stages = Some(stages.into_iter().collect());
        self
    }

    pub fn excluded_from(mut self, stages: impl IntoIterator<Item = Stage>) -> Self {
        self.excluded_stages = Some(stages.into_iter().collect());
        self
    }

    pub fn unlocked_when(mut self, unlock: UnlockFn) -> Self {
        self.unlock = Some(unlock);
        self
    }

    pub fn with_choice(mut self, choice: Choice) -> Self {
        self.choices.push(choice);
        self
    }

    // ──────────────────────────────────────────────────────────────────────
    // Accessors
    // ──────────────────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> &EventId {
        &self.id
    }

    #[inline]
    pub fn chain_id(&self) -> Option<&ChainId> {
        self.chain_id.as_ref()
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
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    pub fn choice(&self, choice_id: &str) -> Option<&Choice> {
        self.choices.iter().find(|c| c.id().as_str() == choice_id)
    }

    /// The ordered subset of choices whose visibility predicate passes.
    pub fn visible_choices(&self, stats: &StatVector) -> Vec<&Choice> {
        self.choices.iter().filter(|c| c.is_visible(stats)).collect()
    }

    // ──────────────────────────────────────────────────────────────────────
    // Eligibility
    // ──────────────────────────────────────────────────────────────────────

    /// Stage gate: allowed when the stage is in `allowed_stages` (if
    /// specified) and not in `excluded_stages` (if specified).
    pub fn stage_allows(&self, stage: Stage) -> bool {
        if let Some(allowed) = &self.allowed_stages {
            if !allowed.contains(&stage) {
                return false;
            }
        }
        if let Some(excluded) = &self.excluded_stages {
            if excluded.contains(&stage) {
                return false;
            }
        }
        true
    }

    /// True when the event carries no stage gates and no unlock predicate,
    /// i.e. it can be offered on any morning. The catalog requires at least
    /// one such `Daily` event as the guaranteed filler.
    pub fn is_ungated(&self) -> bool {
        self.allowed_stages.is_none() && self.excluded_stages.is_none() && self.unlock.is_none()
    }

    /// Evaluate the event's own unlock predicate. Events without one are
    /// always unlocked (stage gating still applies upstream).
    pub fn eligibility(&self, ctx: &UnlockContext<'_>) -> Eligibility {
        match &self.unlock {
            Some(unlock) => unlock(ctx),
            None => Eligibility::unlocked(),
        }
    }
}

impl std::fmt::Debug for QuestEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuestEvent")
            .field("id", &self.id)
            .field("chain_id", &self.chain_id)
            .field("kind", &self.kind)
            .field("choices", &self.choices.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn certain_effect(message: &'static str) -> EffectFn {
        Arc::new(move |_, _| ChoiceEffect::favorable(StatDelta::none(), message))
    }

    fn sample_stats() -> StatVector {
        StatVector::new(25, 40, 10, 20)
    }

    mod stage_gating {
        use super::*;

        #[test]
        fn allowed_stages_gate_when_specified() {
            let event = QuestEvent::new("phil_stray_jungle", "Jungle Law", EventKind::SideQuest)
                .allowed_in([Stage::Stray]);

            assert!(event.stage_allows(Stage::Stray));
            assert!(!event.stage_allows(Stage::Mansion));
        }

        #[test]
        fn excluded_stages_gate_when_specified() {
            let event = QuestEvent::new("daily_scrounge", "Scrounge", EventKind::Daily)
                .excluded_from([Stage::Celebrity]);

            assert!(event.stage_allows(Stage::Stray));
            assert!(!event.stage_allows(Stage::Celebrity));
        }

        #[test]
        fn no_stage_sets_means_everywhere() {
            let event = QuestEvent::new("daily_nap", "Nap", EventKind::Daily);
            for stage in Stage::all() {
                assert!(event.stage_allows(stage));
            }
        }
    }

    mod unlock {
        use super::*;
        use crate::HistoryLedger;

        #[test]
        fn event_without_predicate_is_always_unlocked() {
            let event = QuestEvent::new("daily_nap", "Nap", EventKind::Daily);
            let stats = sample_stats();
            let ledger = HistoryLedger::new();
            let ctx = UnlockContext {
                day: 1,
                stats: &stats,
                ledger: &ledger,
            };
            assert!(event.eligibility(&ctx).unlocked);
        }

        #[test]
        fn predicate_sees_ledger_and_day() {
            let event = QuestEvent::new("phil_lord_contract", "Contract", EventKind::SideQuest)
                .unlocked_when(Arc::new(|ctx| {
                    if ctx.ledger.is_completed("phil_stray_jungle") && ctx.day >= 8 {
                        Eligibility::unlocked()
                    } else {
                        Eligibility::locked("requires day 8 and the jungle lesson")
                    }
                }));

            let stats = sample_stats();
            let mut ledger = HistoryLedger::new();

            let locked = event.eligibility(&UnlockContext {
                day: 9,
                stats: &stats,
                ledger: &ledger,
            });
            assert!(!locked.unlocked);
            assert!(locked.reason.is_some());

            ledger.record_completion(EventId::new("phil_stray_jungle"), 3);
            let unlocked = event.eligibility(&UnlockContext {
                day: 9,
                stats: &stats,
                ledger: &ledger,
            });
            assert!(unlocked.unlocked);
        }

        #[test]
        fn cooling_down_covers_the_window_exclusively_after_failure_day() {
            let stats = sample_stats();
            let mut ledger = HistoryLedger::new();
            ledger.record_failure(EventId::new("phil_stray_jungle"), 5);

            let at = |day| {
                let ctx = UnlockContext {
                    day,
                    stats: &stats,
                    ledger: &ledger,
                };
                ctx.cooling_down("phil_stray_jungle", 1)
            };

            assert!(at(5), "failure day itself is inside the window");
            assert!(at(6), "day F+W is still cooling");
            assert!(!at(7), "eligible again after the window");
        }
    }

    mod choices {
        use super::*;

        #[test]
        fn invisible_choices_are_excluded_not_disabled() {
            let hidden = Choice::with_fixed_chance(
                "choice_strike",
                "Strike",
                80.0,
                certain_effect("struck"),
            )
            .visible_when(Arc::new(|stats| stats.hissing() > 20));
            let shown =
                Choice::with_fixed_chance("choice_work", "Work", 90.0, certain_effect("worked"));

            let event = QuestEvent::new("phil_mansion_labor", "Labor", EventKind::SideQuest)
                .with_choice(hidden)
                .with_choice(shown);

            let meek = StatVector::new(50, 50, 10, 50);
            let visible = event.visible_choices(&meek);
            assert_eq!(visible.len(), 1);
            assert_eq!(visible[0].id().as_str(), "choice_work");

            let feral = StatVector::new(50, 50, 60, 50);
            assert_eq!(event.visible_choices(&feral).len(), 2);
        }

        #[test]
        fn effect_receives_the_resolver_verdict() {
            let choice = Choice::with_fixed_chance(
                "phil_choice_dominate",
                "Dominate",
                45.0,
                Arc::new(|_, succeeded| {
                    if succeeded {
                        ChoiceEffect::favorable(StatDelta::none().satiety(40), "you won the steak")
                    } else {
                        ChoiceEffect::unfavorable(StatDelta::none().health(-10), "you got bitten")
                    }
                }),
            );

            let stats = sample_stats();
            assert!(choice.effect(&stats, true).favorable);
            assert!(!choice.effect(&stats, false).favorable);
            // Deterministic for a fixed verdict.
            assert_eq!(choice.effect(&stats, true), choice.effect(&stats, true));
        }

        #[test]
        fn chain_progress_can_disagree_with_narrative_verdict() {
            let effect = ChoiceEffect::unfavorable(
                StatDelta::none().satiety(-10).smarts(2),
                "the meat is gone, and nothing means anything",
            )
            .with_chain_progress(true);

            assert!(!effect.favorable);
            assert!(effect.advances_chain);
        }

        #[test]
        fn lookup_by_id() {
            let event = QuestEvent::new("e", "E", EventKind::Daily).with_choice(
                Choice::with_fixed_chance("c1", "One", 100.0, certain_effect("one")),
            );
            assert!(event.choice("c1").is_some());
            assert!(event.choice("c2").is_none());
        }
    }
}
