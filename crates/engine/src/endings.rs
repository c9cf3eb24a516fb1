//! EndingAggregator - terminal condition evaluation
//!
//! Priority order: stat exhaustion (stage-qualified death) first, then the
//! victory check at the final stage, then the old-age day limit. Achievement
//! predicates are evaluated independently against the full ledger; the
//! aggregator is deterministic given identical stats, stage, day, and
//! ledger.

use ninelives_domain::{Ending, EndingRegistry, RunResult, RunView};

use crate::config::EngineConfig;

pub struct EndingAggregator {
    registry: EndingRegistry,
}

impl EndingAggregator {
    pub fn new(registry: EndingRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &EndingRegistry {
        &self.registry
    }

    /// The primary ending terminating a run in this state, if any.
    ///
    /// Called right after every resolution (stat exhaustion does not wait
    /// for the day boundary) and again at the night summary (victory and
    /// old age are day-boundary conditions).
    pub fn primary(&self, view: &RunView<'_>, config: &EngineConfig) -> Option<Ending> {
        if let Some(stat) = view.stats.depleted() {
            return Some(Ending::StatDepleted {
                stage: view.stage,
                stat,
            });
        }
        if view.stage.is_final() && view.stats.all_at_least(config.victory_floor) {
            return Some(Ending::Superstar);
        }
        if view.day >= config.max_days {
            return Some(Ending::OldCat);
        }
        None
    }

    /// Aggregate the final result: the primary ending plus every
    /// independently unlocked achievement.
    pub fn evaluate(&self, view: &RunView<'_>, primary: Ending) -> RunResult {
        let mut achievements = self.registry.unlocked(view);
        if !achievements.contains(&primary) {
            achievements.push(primary);
        }
        achievements.sort();

        let is_victory = self
            .registry
            .get(primary)
            .map(|record| record.is_victory())
            .unwrap_or(false);

        tracing::info!(
            primary = %primary,
            achievements = achievements.len(),
            is_victory,
            "run resolved"
        );

        RunResult {
            primary,
            achievements,
            is_victory,
        }
    }
}

impl std::fmt::Debug for EndingAggregator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EndingAggregator")
            .field("registered", &self.registry.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;
    use ninelives_domain::{ChoiceId, HistoryLedger, Stage, StatKind, StatVector};

    fn aggregator() -> EndingAggregator {
        EndingAggregator::new(content::ending_registry())
    }

    #[test]
    fn health_zero_in_the_mansion_is_a_mansion_death() {
        let stats = StatVector::new(0, 40, 10, 20);
        let ledger = HistoryLedger::new();
        let view = RunView {
            stats: &stats,
            stage: Stage::Mansion,
            day: 12,
            ledger: &ledger,
        };

        let primary = aggregator()
            .primary(&view, &EngineConfig::default())
            .expect("terminal");
        assert_eq!(primary.code(), "MANSION_HEALTH_0");
        assert_eq!(
            primary,
            Ending::StatDepleted {
                stage: Stage::Mansion,
                stat: StatKind::Health,
            }
        );
    }

    #[test]
    fn death_preempts_victory_and_old_age() {
        let stats = StatVector::new(90, 90, 0, 90);
        let ledger = HistoryLedger::new();
        let view = RunView {
            stats: &stats,
            stage: Stage::Celebrity,
            day: 30,
            ledger: &ledger,
        };

        let primary = aggregator()
            .primary(&view, &EngineConfig::default())
            .expect("terminal");
        assert!(primary.is_death());
    }

    #[test]
    fn victory_at_final_stage_above_floor() {
        let stats = StatVector::new(70, 65, 60, 80);
        let ledger = HistoryLedger::new();
        let view = RunView {
            stats: &stats,
            stage: Stage::Celebrity,
            day: 20,
            ledger: &ledger,
        };

        let aggregator = aggregator();
        let primary = aggregator
            .primary(&view, &EngineConfig::default())
            .expect("terminal");
        assert_eq!(primary, Ending::Superstar);

        let result = aggregator.evaluate(&view, primary);
        assert!(result.is_victory);
        assert!(result.achievements.contains(&Ending::Superstar));
    }

    #[test]
    fn day_limit_without_victory_is_old_age() {
        let stats = StatVector::new(40, 40, 40, 40);
        let ledger = HistoryLedger::new();
        let view = RunView {
            stats: &stats,
            stage: Stage::CatLord,
            day: 30,
            ledger: &ledger,
        };

        let aggregator = aggregator();
        let primary = aggregator
            .primary(&view, &EngineConfig::default())
            .expect("terminal");
        assert_eq!(primary, Ending::OldCat);

        let result = aggregator.evaluate(&view, primary);
        assert!(!result.is_victory);
        // Never made it past the alley throne.
        assert!(result.achievements.contains(&Ending::LordOnly));
    }

    #[test]
    fn mid_run_state_is_not_terminal() {
        let stats = StatVector::new(25, 40, 10, 20);
        let ledger = HistoryLedger::new();
        let view = RunView {
            stats: &stats,
            stage: Stage::Stray,
            day: 3,
            ledger: &ledger,
        };
        assert_eq!(aggregator().primary(&view, &EngineConfig::default()), None);
    }

    #[test]
    fn nihilism_achievement_needs_all_three_choices_in_any_order() {
        let aggregator = aggregator();
        let stats = StatVector::new(0, 40, 40, 90);
        let mut ledger = HistoryLedger::new();
        ledger.record_choice(ChoiceId::new("phil_choice_simulation"));
        ledger.record_choice(ChoiceId::new("phil_choice_overthink_1"));

        fn view<'a>(stats: &'a StatVector, ledger: &'a HistoryLedger) -> RunView<'a> {
            RunView {
                stats,
                stage: Stage::Mansion,
                day: 16,
                ledger,
            }
        }

        let primary = Ending::StatDepleted {
            stage: Stage::Mansion,
            stat: StatKind::Health,
        };
        let before = aggregator.evaluate(&view(&stats, &ledger), primary);
        assert!(!before.achievements.contains(&Ending::NihilismAwakened));

        ledger.record_choice(ChoiceId::new("phil_choice_nihilism"));
        let after = aggregator.evaluate(&view(&stats, &ledger), primary);
        assert!(after.achievements.contains(&Ending::NihilismAwakened));
    }

    #[test]
    fn evaluation_is_deterministic() {
        let aggregator = aggregator();
        let stats = StatVector::new(40, 0, 40, 40);
        let ledger = HistoryLedger::new();
        let view = RunView {
            stats: &stats,
            stage: Stage::Stray,
            day: 6,
            ledger: &ledger,
        };
        let primary = aggregator
            .primary(&view, &EngineConfig::default())
            .expect("terminal");
        assert_eq!(
            aggregator.evaluate(&view, primary),
            aggregator.evaluate(&view, primary)
        );
    }
}
