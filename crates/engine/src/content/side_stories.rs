//! Standalone side stories - single events outside any chain
//!
//! Each carries its own unlock gate and its own branch of the ending table:
//! the egg crisis feeds `END_EGG_FREEDOM` / `DOMESTICATED`, the hater war is
//! a late-game stat gamble with no ending attached.

use std::sync::Arc;

use ninelives_domain::{
    Chance, Choice, ChoiceEffect, EffectKind, Eligibility, EventKind, QuestEvent, Stage, StatDelta,
};

pub fn events() -> Vec<QuestEvent> {
    vec![egg_crisis(), hater_war()]
}

/// The carrier appears, and the word "vet" is spoken in hushed tones.
fn egg_crisis() -> QuestEvent {
    QuestEvent::new("side_egg_crisis", "The Carrier Appears", EventKind::SideQuest)
        .with_description(
            "The humans are whispering and the plastic carrier is out. You have heard \
             what happens at the place they call \"the vet\".",
        )
        .allowed_in([Stage::Mansion])
        .unlocked_when(Arc::new(|ctx| {
            if ctx.cooling_down("side_egg_crisis", 1) {
                return Eligibility::locked("the carrier went back to the closet");
            }
            if ctx.day >= 7 {
                Eligibility::unlocked()
            } else {
                Eligibility::locked("needs day 7")
            }
        }))
        .with_choice(Choice::new(
            "choice_egg_resist",
            "Shred the carrier. Keep what is yours",
            Arc::new(|stats| Chance::new((20.0 + stats.hissing() as f64 * 0.9).min(90.0))),
            Arc::new(|_, succeeded| {
                if succeeded {
                    ChoiceEffect::favorable(
                        StatDelta::none().hissing(15).health(-5),
                        "The carrier loses. The humans retreat to regroup and you \
                         keep your full inheritance. (Unlocked: a certain record \
                         about freedom.)",
                    )
                    .with_kind(EffectKind::Damage)
                } else {
                    ChoiceEffect::unfavorable(
                        StatDelta::none().health(-10).hissing(5),
                        "Two towels and a pair of oven gloves beat one furious cat. \
                         The appointment is rescheduled, not cancelled. (Try again \
                         in a couple of days.)",
                    )
                    .with_kind(EffectKind::Damage)
                }
            }),
        ))
        .with_choice(Choice::with_fixed_chance(
            "choice_egg_surrender",
            "Walk into the carrier with dignity",
            100.0,
            Arc::new(|_, _| {
                ChoiceEffect::favorable(
                    StatDelta::none().health(5).hissing(-20),
                    "You return a day later, lighter in spirit and elsewhere. The \
                     humans call you a good boy. You are calmer now. Suspiciously \
                     calm.",
                )
                .with_kind(EffectKind::Sleep)
            }),
        ))
}

/// Celebrity has a price, and the price posts comments.
fn hater_war() -> QuestEvent {
    QuestEvent::new("side_hater_war", "The Hater War", EventKind::SideQuest)
        .with_description(
            "A rival account posts a slow-motion video of you missing a jump. It has \
             more views than your last three posts combined.",
        )
        .allowed_in([Stage::Celebrity])
        .unlocked_when(Arc::new(|ctx| {
            if ctx.cooling_down("side_hater_war", 1) {
                return Eligibility::locked("the feed has moved on for now");
            }
            if ctx.day >= 10 {
                Eligibility::unlocked()
            } else {
                Eligibility::locked("needs day 10")
            }
        }))
        .with_choice(Choice::new(
            "choice_hater_clapback",
            "Post the counter-video",
            Arc::new(|stats| Chance::new((30.0 + stats.smarts() as f64 * 0.7).min(95.0))),
            Arc::new(|_, succeeded| {
                if succeeded {
                    ChoiceEffect::favorable(
                        StatDelta::none().smarts(10).satiety(10).hissing(5),
                        "You land the jump in one take, stare into the lens, and \
                         yawn. The internet does the rest.",
                    )
                } else {
                    ChoiceEffect::unfavorable(
                        StatDelta::none().smarts(-5).hissing(5),
                        "The counter-video needs eleven takes and the outtakes \
                         leak. (Try again in a couple of days.)",
                    )
                }
            }),
        ))
        .with_choice(Choice::with_fixed_chance(
            "choice_hater_ignore",
            "Be above it. Nap publicly",
            90.0,
            Arc::new(|_, succeeded| {
                if succeeded {
                    ChoiceEffect::favorable(
                        StatDelta::none().health(5).hissing(-5),
                        "You sleep sixteen hours in a sunbeam while the discourse \
                         burns itself out. Dignity is the best content.",
                    )
                    .with_kind(EffectKind::Sleep)
                } else {
                    ChoiceEffect::unfavorable(
                        StatDelta::none().hissing(2),
                        "You try to nap but read the comments instead. Everyone \
                         can tell.",
                    )
                }
            }),
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ninelives_domain::{HistoryLedger, StatVector, UnlockContext};

    #[test]
    fn side_stories_carry_no_chain() {
        for event in events() {
            assert!(event.chain_id().is_none());
        }
    }

    #[test]
    fn egg_crisis_is_mansion_only_from_day_seven() {
        let event = egg_crisis();
        assert!(event.stage_allows(Stage::Mansion));
        assert!(!event.stage_allows(Stage::Celebrity));

        let stats = StatVector::stray_default();
        let ledger = HistoryLedger::new();
        let ctx = UnlockContext {
            day: 6,
            stats: &stats,
            ledger: &ledger,
        };
        assert!(!event.eligibility(&ctx).unlocked);
        let ctx = UnlockContext {
            day: 7,
            stats: &stats,
            ledger: &ledger,
        };
        assert!(event.eligibility(&ctx).unlocked);
    }

    #[test]
    fn surrender_is_certain_and_completes_the_event() {
        let event = egg_crisis();
        let stats = StatVector::new(60, 40, 10, 10);
        let choice = event.choice("choice_egg_surrender").expect("exists");
        assert!(choice.chance(&stats).covers(99.9));
        assert!(choice.effect(&stats, true).advances_chain);
    }
}
