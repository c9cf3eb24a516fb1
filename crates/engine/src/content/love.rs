//! The white cat romance chain
//!
//! Three meetings across three stages. Unlike the philosophy track this one
//! has no trick choices: every option is an honest gamble, and the finale is
//! a pure decision with no roll at all.

use std::sync::Arc;

use ninelives_domain::{
    Chance, Choice, ChoiceEffect, EffectKind, Eligibility, EventKind, QuestEvent, Stage, StatDelta,
};

pub fn events() -> Vec<QuestEvent> {
    vec![white_cat(), moonlit_roof(), parting()]
}

fn white_cat() -> QuestEvent {
    QuestEvent::new("love_white_cat", "A Flash of White", EventKind::SideQuest)
        .in_chain("love")
        .with_description(
            "A white cat watches you from the top of the wall, tail curled like a question mark.",
        )
        .allowed_in([Stage::Stray])
        .unlocked_when(Arc::new(|ctx| {
            if ctx.cooling_down("love_white_cat", 1) {
                return Eligibility::locked("she has not come back yet");
            }
            if ctx.day >= 4 {
                Eligibility::unlocked()
            } else {
                Eligibility::locked("needs day 4")
            }
        }))
        .with_choice(Choice::with_fixed_chance(
            "love_choice_share_fish",
            "Offer her half your fish",
            85.0,
            Arc::new(|_, succeeded| {
                if succeeded {
                    ChoiceEffect::favorable(
                        StatDelta::none().satiety(-5).smarts(5).hissing(-5),
                        "She eats in silence, then sits beside you until the street \
                         lights come on.",
                    )
                    .with_kind(EffectKind::Heal)
                } else {
                    ChoiceEffect::unfavorable(
                        StatDelta::none().satiety(-10),
                        "She sniffs the fish, looks at you once, and is gone over \
                         the wall. So is the fish.",
                    )
                }
            }),
        ))
        .with_choice(Choice::new(
            "love_choice_show_off",
            "Leap the gap between the dumpsters",
            Arc::new(|stats| Chance::new((20.0 + stats.hissing() as f64 * 0.8).min(90.0))),
            Arc::new(|_, succeeded| {
                if succeeded {
                    ChoiceEffect::favorable(
                        StatDelta::none().hissing(5).smarts(2),
                        "You land the jump like you were born mid-air. Her ears \
                         tip forward. Noted.",
                    )
                } else {
                    ChoiceEffect::unfavorable(
                        StatDelta::none().health(-5).hissing(-5),
                        "You clip the rim and fold into a trash bag. She politely \
                         looks at the moon instead.",
                    )
                    .with_kind(EffectKind::Damage)
                }
            }),
        ))
}

fn moonlit_roof() -> QuestEvent {
    QuestEvent::new("love_moonlit_roof", "The Moonlit Roof", EventKind::SideQuest)
        .in_chain("love")
        .with_description("She is waiting on the warm tiles above the bakery. The moon is enormous.")
        .allowed_in([Stage::CatLord, Stage::Mansion])
        .unlocked_when(Arc::new(|ctx| {
            if ctx.cooling_down("love_moonlit_roof", 1) {
                return Eligibility::locked("give the night a rest");
            }
            if ctx.ledger.is_completed("love_white_cat") && ctx.day >= 8 {
                Eligibility::unlocked()
            } else {
                Eligibility::locked("needs day 8 and the first meeting")
            }
        }))
        .with_choice(Choice::new(
            "love_choice_sing",
            "Sing her the song of your people",
            Arc::new(|stats| Chance::new((30.0 + stats.smarts() as f64 * 0.5).min(80.0))),
            Arc::new(|_, succeeded| {
                if succeeded {
                    ChoiceEffect::favorable(
                        StatDelta::none().smarts(5).hissing(5),
                        "Somewhere below, a window slams. Neither of you cares. \
                         She joins in on the second verse.",
                    )
                } else {
                    ChoiceEffect::unfavorable(
                        StatDelta::none().health(-5).hissing(-2),
                        "A boot arcs out of the dark and catches you mid-note. \
                         She laughs. That almost makes it worth it. Almost.",
                    )
                    .with_kind(EffectKind::Damage)
                }
            }),
        ))
        .with_choice(Choice::with_fixed_chance(
            "love_choice_gift_mouse",
            "Present the mouse you have been saving",
            90.0,
            Arc::new(|_, succeeded| {
                if succeeded {
                    ChoiceEffect::favorable(
                        StatDelta::none().satiety(-5).smarts(5).hissing(-5),
                        "She accepts it with the gravity the gift deserves. You \
                         split it under the moon.",
                    )
                    .with_kind(EffectKind::Heal)
                } else {
                    ChoiceEffect::unfavorable(
                        StatDelta::none().satiety(-5).hissing(2),
                        "The mouse was less dead than advertised. It escapes down \
                         the drainpipe with your dignity.",
                    )
                }
            }),
        ))
}

/// The finale is a decision, not a gamble: both options always land.
fn parting() -> QuestEvent {
    QuestEvent::new("love_parting", "Two Roads From the Rooftop", EventKind::SideQuest)
        .in_chain("love")
        .with_description(
            "She is leaving with the harbor cats in the morning. She asks, once, if you will come.",
        )
        .allowed_in([Stage::Mansion, Stage::Celebrity])
        .unlocked_when(Arc::new(|ctx| {
            if ctx.ledger.is_completed("love_moonlit_roof") && ctx.day >= 12 {
                Eligibility::unlocked()
            } else {
                Eligibility::locked("needs day 12 and the night on the roof")
            }
        }))
        .with_choice(Choice::with_fixed_chance(
            "love_choice_stay_wild",
            "Go with her",
            100.0,
            Arc::new(|_, _| {
                ChoiceEffect::favorable(
                    StatDelta::none().hissing(10).smarts(5).satiety(-5),
                    "You leave the warm house a window ajar behind you. The harbor \
                     wind tastes like salt and beginnings.",
                )
            }),
        ))
        .with_choice(Choice::with_fixed_chance(
            "love_choice_settle_down",
            "Stay, and watch her go",
            100.0,
            Arc::new(|_, _| {
                ChoiceEffect::favorable(
                    StatDelta::none().health(10).hissing(-15),
                    "You watch the white flag of her tail until the corner takes \
                     it. The radiator is warm. The house is very quiet.",
                )
                .with_kind(EffectKind::Sleep)
            }),
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ninelives_domain::{HistoryLedger, StatVector, UnlockContext};

    #[test]
    fn roof_requires_the_first_meeting() {
        let event = moonlit_roof();
        let stats = StatVector::stray_default();
        let mut ledger = HistoryLedger::new();

        let ctx = UnlockContext {
            day: 9,
            stats: &stats,
            ledger: &ledger,
        };
        assert!(!event.eligibility(&ctx).unlocked);

        ledger.record_completion("love_white_cat".into(), 4);
        let ctx = UnlockContext {
            day: 9,
            stats: &stats,
            ledger: &ledger,
        };
        assert!(event.eligibility(&ctx).unlocked);
    }

    #[test]
    fn parting_choices_are_certain() {
        let event = parting();
        let stats = StatVector::stray_default();
        for choice in event.visible_choices(&stats) {
            assert!(choice.chance(&stats).covers(99.9));
        }
    }

    #[test]
    fn chain_spans_the_stage_ladder() {
        assert!(white_cat().stage_allows(Stage::Stray));
        assert!(!white_cat().stage_allows(Stage::Mansion));
        assert!(moonlit_roof().stage_allows(Stage::CatLord));
        assert!(parting().stage_allows(Stage::Celebrity));
    }
}
