//! The apprentice chain
//!
//! A kitten turns up in the territory and the run can end with either a
//! proud master or a very patient grudge. The finale's two choices map to
//! two mutually exclusive achievement records.

use std::sync::Arc;

use ninelives_domain::{
    Chance, Choice, ChoiceEffect, EffectKind, Eligibility, EventKind, QuestEvent, Stage, StatDelta,
};

pub fn events() -> Vec<QuestEvent> {
    vec![meet_kitten(), training(), legacy()]
}

fn meet_kitten() -> QuestEvent {
    QuestEvent::new("app_meet_kitten", "Something Small and Loud", EventKind::SideQuest)
        .in_chain("apprentice")
        .with_description(
            "A soaked kitten stands in the middle of your territory, yelling at a pigeon \
             three times its size.",
        )
        .allowed_in([Stage::CatLord])
        .unlocked_when(Arc::new(|ctx| {
            if ctx.cooling_down("app_meet_kitten", 1) {
                return Eligibility::locked("the kitten is sulking somewhere dry");
            }
            if ctx.day >= 6 {
                Eligibility::unlocked()
            } else {
                Eligibility::locked("needs day 6")
            }
        }))
        .with_choice(Choice::with_fixed_chance(
            "app_choice_take_in",
            "Take it under your paw",
            80.0,
            Arc::new(|_, succeeded| {
                if succeeded {
                    ChoiceEffect::favorable(
                        StatDelta::none().smarts(5).hissing(-5).satiety(-5),
                        "You share your fish heads. It eats like a tiny machine and \
                         then falls asleep on your tail. You have an apprentice now.",
                    )
                    .with_kind(EffectKind::Heal)
                } else {
                    ChoiceEffect::unfavorable(
                        StatDelta::none().satiety(-10),
                        "It takes the fish heads and bolts. Street rules. You would \
                         have done the same. (Maybe it will come back.)",
                    )
                }
            }),
        ))
        .with_choice(Choice::with_fixed_chance(
            "app_choice_turn_away",
            "A lord walks alone",
            100.0,
            Arc::new(|_, _| {
                ChoiceEffect::unfavorable(
                    StatDelta::none().hissing(2),
                    "You walk past without slowing down. The yelling follows you \
                     for three blocks.",
                )
            }),
        ))
}

fn training() -> QuestEvent {
    QuestEvent::new("app_training", "Lessons in the Long Grass", EventKind::SideQuest)
        .in_chain("apprentice")
        .with_description("The kitten wants to learn the double-feint pounce. Your signature move.")
        .allowed_in([Stage::CatLord, Stage::Mansion])
        .unlocked_when(Arc::new(|ctx| {
            if ctx.cooling_down("app_training", 1) {
                return Eligibility::locked("training resumes tomorrow");
            }
            if ctx.ledger.is_completed("app_meet_kitten") && ctx.day >= 9 {
                Eligibility::unlocked()
            } else {
                Eligibility::locked("needs day 9 and an apprentice")
            }
        }))
        .with_choice(Choice::new(
            "app_choice_teach_all",
            "Teach everything you know",
            Arc::new(|stats| Chance::new((30.0 + stats.smarts() as f64 * 0.8).min(90.0))),
            Arc::new(|_, succeeded| {
                if succeeded {
                    ChoiceEffect::favorable(
                        StatDelta::none().smarts(10).hissing(5),
                        "By sunset he lands your every trick, plus one you never \
                         taught him. Explaining a thing teaches the teacher twice.",
                    )
                } else {
                    ChoiceEffect::unfavorable(
                        StatDelta::none().health(-5),
                        "The demonstration goes wrong and he bites your tail in \
                         the confusion. Pedagogy has its costs. (Resume in a \
                         couple of days.)",
                    )
                    .with_kind(EffectKind::Damage)
                }
            }),
        ))
        .with_choice(Choice::with_fixed_chance(
            "app_choice_hold_back",
            "Teach half, keep half",
            90.0,
            Arc::new(|_, succeeded| {
                if succeeded {
                    ChoiceEffect::favorable(
                        StatDelta::none().smarts(5),
                        "You teach the feint but not the landing. An old master \
                         keeps one stair for himself.",
                    )
                } else {
                    ChoiceEffect::unfavorable(
                        StatDelta::none().smarts(-2),
                        "He notices the missing half and practices in secret out \
                         of spite. Trust is down. (Resume in a couple of days.)",
                    )
                }
            }),
        ))
}

fn legacy() -> QuestEvent {
    QuestEvent::new("app_legacy", "The Student Surpasses", EventKind::SideQuest)
        .in_chain("apprentice")
        .with_description(
            "He is bigger than you now. The alley cats have started looking at him first.",
        )
        .allowed_in([Stage::Mansion, Stage::Celebrity])
        .unlocked_when(Arc::new(|ctx| {
            if ctx.cooling_down("app_legacy", 1) {
                return Eligibility::locked("the succession can wait a day");
            }
            if ctx.ledger.is_completed("app_training") && ctx.day >= 13 {
                Eligibility::unlocked()
            } else {
                Eligibility::locked("needs day 13 and a trained apprentice")
            }
        }))
        .with_choice(Choice::new(
            "app_choice_pass_title",
            "Pass him the title with your own paw",
            Arc::new(|stats| Chance::new((40.0 + stats.smarts() as f64 * 0.5).min(95.0))),
            Arc::new(|_, succeeded| {
                if succeeded {
                    ChoiceEffect::favorable(
                        StatDelta::none().smarts(10).hissing(-5),
                        "You touch your nose to his forehead in front of the whole \
                         alley. The throne changes paws without a single scratch.",
                    )
                } else {
                    ChoiceEffect::unfavorable(
                        StatDelta::none().health(-5),
                        "A young tom contests the succession and you take the hit \
                         meant for your student. Worth it. But it stings. (Try \
                         again in a couple of days.)",
                    )
                    .with_kind(EffectKind::Damage)
                }
            }),
        ))
        .with_choice(Choice::with_fixed_chance(
            "app_choice_betray",
            "Take credit for his great catch",
            70.0,
            Arc::new(|_, succeeded| {
                if succeeded {
                    ChoiceEffect::favorable(
                        StatDelta::none().satiety(10).hissing(10).smarts(-5),
                        "The alley cheers your name for a catch you never made. He \
                         says nothing. He remembers everything.",
                    )
                } else {
                    ChoiceEffect::unfavorable(
                        StatDelta::none().health(-10).hissing(5),
                        "He saw it coming, and half the alley saw you try. The \
                         double-feint pounce works on you too, it turns out. (Try \
                         again in a couple of days.)",
                    )
                    .with_kind(EffectKind::Damage)
                }
            }),
        ))
}
