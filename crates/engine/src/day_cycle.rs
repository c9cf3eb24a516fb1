//! GameRun - the per-run state machine
//!
//! One struct owns the whole mutable state of a run: phase, day counter,
//! stage, stats, and ledger. Every player-facing operation is a method that
//! checks the current phase first; calling out of order is an
//! `InvalidStateTransition`, never a silent no-op. Content and configuration
//! are injected at construction, randomness through the `Roller`.
//!
//! Phase walk: `Start -> Prologue -> Rebirth -> CharacterSelect`, then the
//! daily loop `MorningEvent -> ActionSelection -> EventResolution ->
//! NightSummary` until a terminal check trips into `GameOver` or `Victory`.
//! Stat exhaustion is checked immediately after resolution; victory and old
//! age wait for the night summary. Stage promotions land at the day
//! boundary, event-driven unlocks first.

use std::collections::BTreeSet;
use std::sync::Arc;

use ninelives_domain::{
    Choice, DomainError, Ending, EventId, HistoryLedger, Phase, QuestEvent, RunResult, RunView,
    Stage, StatVector,
};
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::content::{GameContent, PrologueStep};
use crate::eligibility::eligible_events;
use crate::endings::EndingAggregator;
use crate::outcome::{resolve_choice, Outcome};
use crate::roller::{RandomRoller, Roller};
use crate::selection::select_event;

/// Tone of a run-log line, for presentation-side styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogSeverity {
    Info,
    Success,
    Warning,
    Danger,
}

/// One line of the player-visible run log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub day: u32,
    pub message: String,
    pub severity: LogSeverity,
}

/// A night thought chosen for display, detached from content lifetimes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThoughtView {
    pub title: String,
    pub content: String,
}

/// What the night summary surfaced: a reflection, and the run result when
/// this night turned out to be the last.
#[derive(Debug, Clone, PartialEq)]
pub struct NightReport {
    pub thought: Option<ThoughtView>,
    pub result: Option<RunResult>,
}

/// State after crossing a day boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayReport {
    pub day: u32,
    pub stage: Stage,
    /// Set when the boundary promoted the run to a new stage.
    pub promoted_to: Option<Stage>,
}

pub struct GameRun {
    config: EngineConfig,
    content: Arc<GameContent>,
    roller: Box<dyn Roller>,
    aggregator: EndingAggregator,

    phase: Phase,
    day: u32,
    stage: Stage,
    stats: StatVector,
    ledger: HistoryLedger,
    prologue_index: usize,
    current_event: Option<EventId>,
    pending_stage_unlock: Option<Stage>,
    last_result: Option<RunResult>,
    run_log: Vec<LogEntry>,
    /// Endings earned across every run of this `GameRun`, surviving resets.
    unlocked_endings: BTreeSet<Ending>,
}

impl GameRun {
    /// Build a run over the given content, rolling from the configured seed
    /// (or entropy when none is set).
    pub fn new(content: Arc<GameContent>, config: EngineConfig) -> Self {
        let roller: Box<dyn Roller> = match config.seed {
            Some(seed) => Box::new(RandomRoller::seeded(seed)),
            None => Box::new(RandomRoller::new()),
        };
        Self::with_roller(content, config, roller)
    }

    /// Build a run with an explicitly injected roller.
    pub fn with_roller(
        content: Arc<GameContent>,
        config: EngineConfig,
        roller: Box<dyn Roller>,
    ) -> Self {
        Self {
            config,
            content,
            roller,
            aggregator: EndingAggregator::new(crate::content::ending_registry()),
            phase: Phase::Start,
            day: 0,
            stage: Stage::Stray,
            stats: StatVector::stray_default(),
            ledger: HistoryLedger::new(),
            prologue_index: 0,
            current_event: None,
            pending_stage_unlock: None,
            last_result: None,
            run_log: Vec::new(),
            unlocked_endings: BTreeSet::new(),
        }
    }

    // ──────────────────────────────────────────────────────────────────────
    // Read-only state
    // ──────────────────────────────────────────────────────────────────────

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn stats(&self) -> &StatVector {
        &self.stats
    }

    pub fn ledger(&self) -> &HistoryLedger {
        &self.ledger
    }

    pub fn content(&self) -> &GameContent {
        &self.content
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn is_muted(&self) -> bool {
        self.config.muted
    }

    pub fn log(&self) -> &[LogEntry] {
        &self.run_log
    }

    pub fn last_result(&self) -> Option<&RunResult> {
        self.last_result.as_ref()
    }

    /// Endings earned across all runs since this `GameRun` was built.
    pub fn unlocked_endings(&self) -> impl Iterator<Item = Ending> + '_ {
        self.unlocked_endings.iter().copied()
    }

    /// The event currently on offer or being resolved.
    pub fn current_event(&self) -> Option<&QuestEvent> {
        self.current_event
            .as_ref()
            .and_then(|id| self.content.catalog.get(id.as_str()))
    }

    // ──────────────────────────────────────────────────────────────────────
    // Opening sequence
    // ──────────────────────────────────────────────────────────────────────

    /// Start the opening sequence and return its first beat.
    pub fn begin(&mut self) -> Result<&PrologueStep, DomainError> {
        self.expect_phase(Phase::Start, "begin")?;
        self.phase = Phase::Prologue;
        self.prologue_index = 0;
        tracing::info!(phase = %self.phase, "run started");
        self.content
            .prologue
            .first()
            .ok_or_else(|| DomainError::validation("content pack has no prologue script"))
    }

    /// Step to the next prologue beat; `None` once the script is exhausted
    /// and the run has moved on to `Rebirth`.
    pub fn advance_prologue(&mut self) -> Result<Option<&PrologueStep>, DomainError> {
        self.expect_phase(Phase::Prologue, "advance_prologue")?;
        self.prologue_index += 1;
        if let Some(step) = self.content.prologue.get(self.prologue_index) {
            Ok(Some(step))
        } else {
            self.phase = Phase::Rebirth;
            tracing::info!(phase = %self.phase, "prologue finished");
            Ok(None)
        }
    }

    /// Acknowledge the rebirth beat and open the roster.
    pub fn awaken(&mut self) -> Result<(), DomainError> {
        self.expect_phase(Phase::Rebirth, "awaken")?;
        self.phase = Phase::CharacterSelect;
        Ok(())
    }

    /// Lock in a cat from the roster and start day 1.
    pub fn select_character(&mut self, character_id: &str) -> Result<(), DomainError> {
        self.expect_phase(Phase::CharacterSelect, "select_character")?;
        let character = self
            .content
            .character(character_id)
            .ok_or_else(|| DomainError::unknown_id("Character", character_id))?;
        if character.is_locked() {
            return Err(DomainError::precondition(format!(
                "character {} is locked and must not have been offered",
                character.id()
            )));
        }
        let name = character.name().to_string();
        self.stats = character.initial_stats();
        self.day = 1;
        self.phase = Phase::MorningEvent;
        self.push_log(format!("{name} opens their eyes. Day 1."), LogSeverity::Info);
        tracing::info!(character = character_id, "character selected");
        Ok(())
    }

    // ──────────────────────────────────────────────────────────────────────
    // The daily loop
    // ──────────────────────────────────────────────────────────────────────

    /// Draw this morning's event from the eligible set; falls back to the
    /// catalog's ungated daily filler when nothing else qualifies.
    pub fn draw_morning_event(&mut self) -> Result<&QuestEvent, DomainError> {
        self.expect_phase(Phase::MorningEvent, "draw_morning_event")?;

        let report = eligible_events(
            &self.content.catalog,
            self.day,
            self.stage,
            &self.stats,
            &self.ledger,
        );
        let picked = select_event(self.roller.as_mut(), &report.eligible)
            .or_else(|| self.content.catalog.fallback_daily())
            .ok_or_else(|| {
                DomainError::validation("catalog has no offerable event and no fallback")
            })?;

        self.current_event = Some(picked.id().clone());
        self.phase = Phase::ActionSelection;
        tracing::debug!(day = self.day, event = %picked.id(), "morning event drawn");
        Ok(picked)
    }

    /// Choices of the current event visible at the current stats.
    pub fn visible_choices(&self) -> Result<Vec<&Choice>, DomainError> {
        self.expect_phase(Phase::ActionSelection, "visible_choices")?;
        let event = self
            .current_event()
            .ok_or_else(|| DomainError::precondition("no event drawn this morning"))?;
        Ok(event.visible_choices(&self.stats))
    }

    /// Resolve the player's pick. Stat exhaustion ends the run on the spot;
    /// otherwise the run moves to `EventResolution` awaiting acknowledgment.
    pub fn choose(&mut self, choice_id: &str) -> Result<Outcome, DomainError> {
        self.expect_phase(Phase::ActionSelection, "choose")?;
        let content = Arc::clone(&self.content);
        let event_id = self
            .current_event
            .clone()
            .ok_or_else(|| DomainError::precondition("no event drawn this morning"))?;
        let event = content
            .catalog
            .get(event_id.as_str())
            .ok_or_else(|| DomainError::unknown_id("QuestEvent", event_id.as_str()))?;

        let outcome = resolve_choice(
            event,
            choice_id,
            &self.stats,
            &mut self.ledger,
            self.day,
            self.roller.as_mut(),
        )?;

        self.stats = outcome.new_stats;
        if let Some(stage) = outcome.stage_unlock {
            self.pending_stage_unlock = Some(stage);
        }
        let severity = if outcome.favorable {
            LogSeverity::Success
        } else if outcome.effect_kind == ninelives_domain::EffectKind::Damage {
            LogSeverity::Danger
        } else {
            LogSeverity::Warning
        };
        self.push_log(outcome.message.clone(), severity);

        if self.stats.depleted().is_some() {
            // Death does not wait for nightfall.
            let primary = self
                .aggregator
                .primary(&self.view(), &self.config)
                .unwrap_or(Ending::OldCat);
            self.finish(primary);
        } else {
            self.phase = Phase::EventResolution;
        }
        Ok(outcome)
    }

    /// Close out the resolution screen: surface a night thought and run the
    /// day-boundary terminal checks (victory, old age).
    pub fn acknowledge(&mut self) -> Result<NightReport, DomainError> {
        self.expect_phase(Phase::EventResolution, "acknowledge")?;
        self.current_event = None;

        let thought = {
            let candidates = self
                .content
                .applicable_thoughts(self.stage, &self.stats, &self.ledger);
            if candidates.is_empty() {
                None
            } else {
                let index = self.roller.pick_index(candidates.len());
                let picked = candidates[index];
                Some(ThoughtView {
                    title: picked.title().to_string(),
                    content: picked.content().to_string(),
                })
            }
        };

        if let Some(primary) = self.aggregator.primary(&self.view(), &self.config) {
            let result = self.finish(primary);
            return Ok(NightReport {
                thought,
                result: Some(result),
            });
        }

        self.phase = Phase::NightSummary;
        Ok(NightReport {
            thought,
            result: None,
        })
    }

    /// Cross the day boundary: apply stage promotions (event-driven unlocks
    /// first, then the night-boundary stage rules) and open the next morning.
    pub fn advance_day(&mut self) -> Result<DayReport, DomainError> {
        self.expect_phase(Phase::NightSummary, "advance_day")?;

        let promoted_to = self.pending_stage_unlock.take().or_else(|| {
            self.content
                .stage_promotion(self.stage, &self.stats, &self.ledger)
        });
        if let Some(next) = promoted_to {
            tracing::info!(from = %self.stage, to = %next, day = self.day, "stage promotion");
            self.push_log(
                format!("A new life begins: {next}."),
                LogSeverity::Success,
            );
            self.stage = next;
        }

        self.day += 1;
        self.phase = Phase::MorningEvent;
        Ok(DayReport {
            day: self.day,
            stage: self.stage,
            promoted_to,
        })
    }

    /// Abandon or conclude the run and return to the start screen. Endings
    /// earned so far survive; everything else is rebuilt fresh.
    pub fn reset(&mut self) {
        if let Some(result) = &self.last_result {
            self.unlocked_endings.extend(result.achievements.iter().copied());
        }
        self.phase = Phase::Start;
        self.day = 0;
        self.stage = Stage::Stray;
        self.stats = StatVector::stray_default();
        self.ledger = HistoryLedger::new();
        self.prologue_index = 0;
        self.current_event = None;
        self.pending_stage_unlock = None;
        self.last_result = None;
        self.run_log.clear();
        tracing::info!("run reset");
    }

    // ──────────────────────────────────────────────────────────────────────
    // Internals
    // ──────────────────────────────────────────────────────────────────────

    fn view(&self) -> RunView<'_> {
        RunView {
            stats: &self.stats,
            stage: self.stage,
            day: self.day,
            ledger: &self.ledger,
        }
    }

    fn finish(&mut self, primary: Ending) -> RunResult {
        let result = self.aggregator.evaluate(&self.view(), primary);
        self.phase = if result.is_victory {
            Phase::Victory
        } else {
            Phase::GameOver
        };
        self.unlocked_endings
            .extend(result.achievements.iter().copied());
        let severity = if result.is_victory {
            LogSeverity::Success
        } else {
            LogSeverity::Danger
        };
        self.push_log(format!("The run ends: {primary}."), severity);
        self.last_result = Some(result.clone());
        result
    }

    fn expect_phase(&self, want: Phase, operation: &str) -> Result<(), DomainError> {
        if self.phase == want {
            Ok(())
        } else {
            Err(DomainError::invalid_state_transition(format!(
                "{operation}() requires {want} but the run is in {}",
                self.phase
            )))
        }
    }

    fn push_log(&mut self, message: String, severity: LogSeverity) {
        self.run_log.push(LogEntry {
            day: self.day,
            message,
            severity,
        });
    }
}

impl std::fmt::Debug for GameRun {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameRun")
            .field("phase", &self.phase)
            .field("day", &self.day)
            .field("stage", &self.stage)
            .field("stats", &self.stats)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roller::ScriptedRoller;

    fn content() -> Arc<GameContent> {
        Arc::new(GameContent::standard().expect("valid content"))
    }

    fn fresh_run() -> GameRun {
        GameRun::with_roller(
            content(),
            EngineConfig::default(),
            Box::new(ScriptedRoller::always_low()),
        )
    }

    /// Walk a run through the opening sequence into day 1.
    fn into_day_one(run: &mut GameRun) {
        run.begin().expect("begin");
        while run.advance_prologue().expect("prologue").is_some() {}
        run.awaken().expect("awaken");
        run.select_character("round_head").expect("select");
    }

    mod opening_sequence {
        use super::*;

        #[test]
        fn prologue_plays_through_in_order() {
            let mut run = fresh_run();
            let first = run.begin().expect("begin");
            assert_eq!(first.id, "pro_office");
            assert_eq!(run.phase(), Phase::Prologue);

            let mut beats = 1;
            while run.advance_prologue().expect("prologue").is_some() {
                beats += 1;
            }
            assert_eq!(beats, 6);
            assert_eq!(run.phase(), Phase::Rebirth);
        }

        #[test]
        fn character_select_starts_day_one_with_the_chosen_stats() {
            let mut run = fresh_run();
            into_day_one(&mut run);
            assert_eq!(run.phase(), Phase::MorningEvent);
            assert_eq!(run.day(), 1);
            assert_eq!(run.stage(), Stage::Stray);
            assert_eq!(*run.stats(), StatVector::stray_default());
        }

        #[test]
        fn locked_characters_cannot_be_selected() {
            let mut run = fresh_run();
            run.begin().expect("begin");
            while run.advance_prologue().expect("prologue").is_some() {}
            run.awaken().expect("awaken");

            let err = run.select_character("professor").expect_err("locked");
            assert!(matches!(err, DomainError::Precondition(_)));
            assert_eq!(run.phase(), Phase::CharacterSelect);
        }

        #[test]
        fn unknown_character_is_reported() {
            let mut run = fresh_run();
            run.begin().expect("begin");
            while run.advance_prologue().expect("prologue").is_some() {}
            run.awaken().expect("awaken");
            let err = run.select_character("dog").expect_err("unknown");
            assert!(matches!(err, DomainError::UnknownId { .. }));
        }
    }

    mod phase_guards {
        use super::*;

        #[test]
        fn choosing_before_a_draw_is_rejected() {
            let mut run = fresh_run();
            into_day_one(&mut run);
            let err = run.choose("daily_nap_sleep").expect_err("wrong phase");
            assert!(matches!(err, DomainError::InvalidStateTransition(_)));
        }

        #[test]
        fn double_draw_is_rejected() {
            let mut run = fresh_run();
            into_day_one(&mut run);
            run.draw_morning_event().expect("draw");
            let err = run.draw_morning_event().expect_err("wrong phase");
            assert!(matches!(err, DomainError::InvalidStateTransition(_)));
        }

        #[test]
        fn terminal_phase_rejects_the_whole_loop() {
            let mut run = fresh_run();
            into_day_one(&mut run);
            // Nap until the satiety drain ends the run.
            loop {
                run.draw_morning_event().expect("draw");
                run.choose("daily_nap_sleep").expect("choose");
                if run.phase().is_terminal() {
                    break;
                }
                run.acknowledge().expect("acknowledge");
                run.advance_day().expect("advance");
            }
            assert!(run.draw_morning_event().is_err());
            assert!(run.acknowledge().is_err());
            assert!(run.advance_day().is_err());
        }
    }

    mod daily_loop {
        use super::*;

        #[test]
        fn one_full_day_with_the_filler() {
            let mut run = fresh_run();
            into_day_one(&mut run);

            // Index 0 on day 1 lands on the ungated filler.
            let event = run.draw_morning_event().expect("draw");
            assert_eq!(event.id().as_str(), "daily_nap");
            assert_eq!(run.phase(), Phase::ActionSelection);

            let choices = run.visible_choices().expect("choices");
            assert_eq!(choices[0].id().as_str(), "daily_nap_sleep");

            let outcome = run.choose("daily_nap_sleep").expect("choose");
            assert!(outcome.favorable);
            assert_eq!(run.stats().health(), 70);
            assert_eq!(run.stats().satiety(), 35);
            assert_eq!(run.phase(), Phase::EventResolution);

            let report = run.acknowledge().expect("acknowledge");
            assert!(report.thought.is_some(), "stray nights have thoughts");
            assert!(report.result.is_none());
            assert_eq!(run.phase(), Phase::NightSummary);

            let day = run.advance_day().expect("advance");
            assert_eq!(day.day, 2);
            assert_eq!(day.promoted_to, None);
            assert_eq!(run.phase(), Phase::MorningEvent);
        }

        #[test]
        fn starvation_ends_the_run_at_resolution_time() {
            let mut run = fresh_run();
            into_day_one(&mut run);

            // 40 satiety, -5 per nap: the eighth nap hits zero mid-day.
            for day in 1..=8 {
                run.draw_morning_event().expect("draw");
                run.choose("daily_nap_sleep").expect("choose");
                if day < 8 {
                    run.acknowledge().expect("acknowledge");
                    run.advance_day().expect("advance");
                }
            }

            assert_eq!(run.phase(), Phase::GameOver);
            let result = run.last_result().expect("finished");
            assert_eq!(result.primary.code(), "STRAY_SATIETY_0");
            assert!(!result.is_victory);
        }

        #[test]
        fn earned_endings_survive_reset() {
            let mut run = fresh_run();
            into_day_one(&mut run);
            loop {
                run.draw_morning_event().expect("draw");
                run.choose("daily_nap_sleep").expect("choose");
                if run.phase().is_terminal() {
                    break;
                }
                run.acknowledge().expect("acknowledge");
                run.advance_day().expect("advance");
            }
            let earned: Vec<Ending> = run.unlocked_endings().collect();
            assert!(!earned.is_empty());

            run.reset();
            assert_eq!(run.phase(), Phase::Start);
            assert_eq!(run.day(), 0);
            assert!(run.ledger().choice_sequence().is_empty());
            assert!(run.log().is_empty());
            let kept: Vec<Ending> = run.unlocked_endings().collect();
            assert_eq!(earned, kept);
        }
    }

    mod stage_promotions {
        use super::*;

        #[test]
        fn hissing_threshold_promotes_at_the_day_boundary() {
            let mut run = fresh_run();
            run.begin().expect("begin");
            while run.advance_prologue().expect("prologue").is_some() {}
            run.awaken().expect("awaken");
            // Scarface starts at the hissing threshold for Cat Lord.
            run.select_character("scarface").expect("select");

            run.draw_morning_event().expect("draw");
            run.choose("daily_nap_sleep").expect("choose");
            run.acknowledge().expect("acknowledge");
            let day = run.advance_day().expect("advance");

            assert_eq!(day.promoted_to, Some(Stage::CatLord));
            assert_eq!(run.stage(), Stage::CatLord);
        }

        #[test]
        fn event_unlock_takes_precedence_over_stage_rules() {
            let mut run = fresh_run();
            into_day_one(&mut run);

            // Fast-forward to day 5 with enough hissing via the yowl route is
            // fiddly; instead exercise the precedence hook directly through a
            // pending unlock left by a stage event outcome.
            run.pending_stage_unlock = Some(Stage::CatLord);
            run.draw_morning_event().expect("draw");
            run.choose("daily_nap_sleep").expect("choose");
            run.acknowledge().expect("acknowledge");
            let day = run.advance_day().expect("advance");
            assert_eq!(day.promoted_to, Some(Stage::CatLord));
        }
    }
}
