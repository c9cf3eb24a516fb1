//! The philosophy chain - four meditations from the gutter to the penthouse
//!
//! Chain ordering lives entirely in the unlock predicates: each stage
//! requires its predecessor in the completed set plus a day gate, and every
//! event cools down for one day after a failure. The chain's three nihilist
//! choices advance the track while reading as losses; taking all three
//! unlocks an achievement at the end of the run.

use std::sync::Arc;

use ninelives_domain::{
    Chance, Choice, ChoiceEffect, EffectKind, Eligibility, EventKind, QuestEvent, Stage, StatDelta,
};

pub fn events() -> Vec<QuestEvent> {
    vec![jungle_law(), power_contract(), can_of_labor(), utopia()]
}

/// Stage one: a steak, an old cat, and the law of the jungle.
fn jungle_law() -> QuestEvent {
    QuestEvent::new("phil_stray_jungle", "Insight: The Law of the Jungle", EventKind::SideQuest)
        .in_chain("philosophy")
        .with_description("You and an old cat spot the same steak at the same moment.")
        .allowed_in([Stage::Stray])
        .unlocked_when(Arc::new(|ctx| {
            if ctx.cooling_down("phil_stray_jungle", 1) {
                return Eligibility::locked("still licking wounds from last time");
            }
            if ctx.day >= 3 && ctx.stats.smarts() > 15 {
                Eligibility::unlocked()
            } else {
                Eligibility::locked("needs day 3 and smarts above 15")
            }
        }))
        .with_choice(Choice::new(
            "phil_choice_dominate",
            "The strong eat alone (seize it)",
            Arc::new(|stats| {
                Chance::new(
                    (30.0 + stats.health() as f64 * 0.5 + stats.hissing() as f64 * 0.2).min(95.0),
                )
            }),
            Arc::new(|_, succeeded| {
                if succeeded {
                    ChoiceEffect::favorable(
                        StatDelta::none().satiety(40).hissing(5).smarts(5),
                        "You drove it off. The meat is rich, and a little bitter. \
                         First truth learned: the dumpster does not believe in tears.",
                    )
                    .with_kind(EffectKind::Damage)
                } else {
                    ChoiceEffect::unfavorable(
                        StatDelta::none().health(-10).satiety(-5),
                        "The old cat fought like its life depended on it. It did. \
                         You are bleeding. (Try again in a couple of days.)",
                    )
                    .with_kind(EffectKind::Damage)
                }
            }),
        ))
        .with_choice(Choice::with_fixed_chance(
            "phil_choice_share",
            "The weak help each other (split it)",
            90.0,
            Arc::new(|_, succeeded| {
                if succeeded {
                    ChoiceEffect::favorable(
                        StatDelta::none().satiety(15).smarts(10).hissing(-5),
                        "You tear off half and push it over. Two cats share a meal \
                         in the cold wind. Maybe cooperation keeps us alive.",
                    )
                    .with_kind(EffectKind::Heal)
                } else {
                    ChoiceEffect::unfavorable(
                        StatDelta::none().satiety(-5).hissing(5),
                        "The moment you push it over, it grabs the whole steak and \
                         runs. Damned betrayal. (Try again in a couple of days.)",
                    )
                }
            }),
        ))
        .with_choice(Choice::with_fixed_chance(
            "phil_choice_overthink_1",
            "Contemplate where the meat came from",
            100.0,
            // Counts as chain progress so the sequence stays unlockable,
            // even though the narrative reads as a loss.
            Arc::new(|_, _| {
                ChoiceEffect::unfavorable(
                    StatDelta::none().satiety(-10).smarts(2).health(-5),
                    "While you were thinking, a dog took the meat. You feel no \
                     anger. None of it means anything. (Nihilism +1)",
                )
                .with_chain_progress(true)
            }),
        ))
}

/// Stage two: a black cat asks why it owes you fish heads.
fn power_contract() -> QuestEvent {
    QuestEvent::new("phil_lord_contract", "Insight: The Nature of Power", EventKind::SideQuest)
        .in_chain("philosophy")
        .with_description("A black cat questions why it should pay you fish heads.")
        .allowed_in([Stage::CatLord])
        .unlocked_when(Arc::new(|ctx| {
            if ctx.cooling_down("phil_lord_contract", 1) {
                return Eligibility::locked("your authority needs a day to recover");
            }
            if ctx.ledger.is_completed("phil_stray_jungle") && ctx.day >= 8 {
                Eligibility::unlocked()
            } else {
                Eligibility::locked("needs day 8 and the jungle lesson")
            }
        }))
        .with_choice(
            Choice::new(
                "phil_choice_divine_right",
                "Because I am strongest (divine right)",
                Arc::new(|stats| Chance::new((30.0 + stats.hissing() as f64 * 0.8).min(95.0))),
                Arc::new(|_, _| {
                    ChoiceEffect::favorable(
                        StatDelta::none().hissing(10).smarts(5),
                        "One paw knocks it flat. \"I drove off the hounds. My claws \
                         are the reason you sleep at night.\"",
                    )
                    .with_kind(EffectKind::Damage)
                }),
            )
            .visible_when(Arc::new(|stats| stats.hissing() > 40)),
        )
        .with_choice(Choice::new(
            "phil_choice_social_contract",
            "It is a transaction (social contract)",
            Arc::new(|stats| Chance::new((30.0 + stats.smarts() as f64 * 0.8).min(90.0))),
            Arc::new(|_, _| {
                ChoiceEffect::favorable(
                    StatDelta::none().smarts(15).hissing(-5),
                    "\"You may keep your fish heads. But when the hounds come, do \
                     not hide behind me.\" It says nothing more.",
                )
            }),
        ))
        .with_choice(Choice::new(
            "phil_choice_debate",
            "Debate it",
            Arc::new(|stats| Chance::new((20.0 + stats.smarts() as f64 * 0.6).min(80.0))),
            Arc::new(|_, succeeded| {
                if succeeded {
                    ChoiceEffect::favorable(
                        StatDelta::none().smarts(10).hissing(-5),
                        "Your logic runs it dizzy. It pays double fish heads as \
                         tuition.",
                    )
                } else {
                    ChoiceEffect::unfavorable(
                        StatDelta::none().hissing(-10).health(-5),
                        "It has no patience for your lecture and answers with a \
                         right hook. Violence beats philosophy today. (Try again \
                         in a couple of days.)",
                    )
                    .with_kind(EffectKind::Damage)
                }
            }),
        ))
}

/// Stage three: jump through the hoop, get the can.
fn can_of_labor() -> QuestEvent {
    QuestEvent::new("phil_mansion_labor", "Insight: The Price of the Can", EventKind::SideQuest)
        .in_chain("philosophy")
        .with_description(
            "The butler holds up a feather wand: jump through the hoop, and the can opens.",
        )
        .allowed_in([Stage::Mansion])
        .unlocked_when(Arc::new(|ctx| {
            if ctx.cooling_down("phil_mansion_labor", 1) {
                return Eligibility::locked("you need a day to settle your temper");
            }
            if ctx.ledger.is_completed("phil_lord_contract") && ctx.day >= 10 {
                Eligibility::unlocked()
            } else {
                Eligibility::locked("needs day 10 and the lesson on power")
            }
        }))
        .with_choice(Choice::with_fixed_chance(
            "phil_choice_work",
            "Sell your charm (work)",
            90.0,
            Arc::new(|_, succeeded| {
                if succeeded {
                    ChoiceEffect::favorable(
                        StatDelta::none().satiety(30).smarts(5).hissing(-5),
                        "You jump. My cuteness is the means of production; the can \
                         is my wage. I have been commodified.",
                    )
                } else {
                    ChoiceEffect::unfavorable(
                        StatDelta::none().hissing(2).satiety(-5),
                        "You jump half-heartedly and trip. The butler laughs and \
                         the can stays shut. (Try again in a couple of days.)",
                    )
                }
            }),
        ))
        .with_choice(
            Choice::new(
                "phil_choice_strike",
                "Violent strike (smash the machine)",
                Arc::new(|stats| Chance::new((20.0 + stats.hissing() as f64 * 0.8).min(80.0))),
                Arc::new(|_, succeeded| {
                    if succeeded {
                        ChoiceEffect::favorable(
                            StatDelta::none().satiety(40).hissing(15).smarts(10),
                            "You knock over the feeder and seize the means of \
                             production outright. The butler is speechless.",
                        )
                        .with_kind(EffectKind::Damage)
                    } else {
                        ChoiceEffect::unfavorable(
                            StatDelta::none().satiety(-10).hissing(5),
                            "It will not budge. The butler decides you are sulking \
                             and locks you in the laundry room. (Try again in a \
                             couple of days.)",
                        )
                    }
                }),
            )
            .visible_when(Arc::new(|stats| stats.hissing() > 20)),
        )
        .with_choice(Choice::with_fixed_chance(
            "phil_choice_nihilism",
            "Better not to eat at all (nihilism)",
            100.0,
            Arc::new(|_, _| {
                ChoiceEffect::unfavorable(
                    StatDelta::none().satiety(-15).smarts(20).health(-5),
                    "Appetite is the gene's leash. You lie motionless and watch \
                     the can oxidize. The butler thinks you are ill. (Nihilism +1)",
                )
                .with_kind(EffectKind::Damage)
                .with_chain_progress(true)
            }),
        ))
}

/// Stage four: everything is yours, and the strays are still in the wind.
fn utopia() -> QuestEvent {
    QuestEvent::new("phil_final_utopia", "Insight: The Commonwealth of Cats", EventKind::SideQuest)
        .in_chain("philosophy")
        .with_description("You have everything. Outside the window, strays shiver in the wind.")
        .allowed_in([Stage::Mansion, Stage::Celebrity])
        .unlocked_when(Arc::new(|ctx| {
            if ctx.cooling_down("phil_final_utopia", 1) {
                return Eligibility::locked("the revolution gathers its strength");
            }
            if ctx.ledger.is_completed("phil_mansion_labor") && ctx.day >= 14 {
                Eligibility::unlocked()
            } else {
                Eligibility::locked("needs day 14 and the lesson of the can")
            }
        }))
        .with_choice(Choice::with_fixed_chance(
            "phil_choice_oligarch",
            "Keep what is yours (oligarchy)",
            90.0,
            Arc::new(|_, succeeded| {
                if succeeded {
                    ChoiceEffect::favorable(
                        StatDelta::none().satiety(20).smarts(-5).hissing(-10),
                        "You draw the curtains. You earned this - or sold your \
                         charm for it. You are a stakeholder now.",
                    )
                    .with_kind(EffectKind::Sleep)
                } else {
                    ChoiceEffect::unfavorable(
                        StatDelta::none().smarts(-2).health(-5),
                        "You draw the curtains, but the crying outside keeps you \
                         up all night. A surviving conscience is a kind of torture.",
                    )
                    .with_kind(EffectKind::Sleep)
                }
            }),
        ))
        .with_choice(Choice::new(
            "phil_choice_revolution",
            "Tip over the pantry (redistribution)",
            Arc::new(|stats| Chance::new((40.0 + stats.smarts() as f64 * 0.6).min(90.0))),
            Arc::new(|_, succeeded| {
                if succeeded {
                    ChoiceEffect::favorable(
                        StatDelta::none().smarts(20).hissing(20).satiety(-10),
                        "You shove the cans off the balcony. Strays swarm from \
                         every shadow. Strays of the world, unite! (Unlocked: \
                         Revolutionary)",
                    )
                } else {
                    ChoiceEffect::unfavorable(
                        StatDelta::none().hissing(5).smarts(5),
                        "The food bag jams. You yowl down at the street and only \
                         the wind answers. The revolution fails. (Try again in a \
                         couple of days.)",
                    )
                }
            }),
        ))
        .with_choice(Choice::with_fixed_chance(
            "phil_choice_simulation",
            "Stare into the void (break the fourth wall)",
            100.0,
            Arc::new(|_, _| {
                ChoiceEffect::favorable(
                    StatDelta::none().smarts(100).health(-10).satiety(-10),
                    "You look back over this life: the thinking by the dumpster, \
                     the hunger strike in the mansion... and you understand that \
                     your whole cat life is the output of some carbon-based thing \
                     clicking a screen. Meow. (If every nihilist choice came \
                     before this one, a special record awaits.)",
                )
            }),
        ))
}
