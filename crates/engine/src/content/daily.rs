//! Daily filler, random weather, and the stage-promotion events
//!
//! `daily_nap` is the guaranteed fallback: no unlock gate, no stage gate,
//! so the morning draw can never come up empty. The three `stage_*` events
//! are the earned route up the ladder; the night-boundary stat thresholds
//! in the stage rules are the slow route.

use std::sync::Arc;

use ninelives_domain::{
    Chance, Choice, ChoiceEffect, EffectKind, Eligibility, EventKind, QuestEvent, Stage, StatDelta,
};

pub fn events() -> Vec<QuestEvent> {
    vec![
        nap(),
        scrounge(),
        groom(),
        thunderstorm(),
        alley_king(),
        adopted(),
        viral(),
    ]
}

/// The ungated fallback. Must stay choice-complete and stage-unrestricted.
fn nap() -> QuestEvent {
    QuestEvent::new("daily_nap", "An Unremarkable Morning", EventKind::Daily)
        .with_description("Nothing is happening. Nothing at all. Perfect.")
        .with_choice(Choice::with_fixed_chance(
            "daily_nap_sleep",
            "Honor the nothing with a nap",
            100.0,
            Arc::new(|_, _| {
                ChoiceEffect::favorable(
                    StatDelta::none().health(10).satiety(-5),
                    "You fold yourself into a warm circle and let the day pass \
                     over you like weather.",
                )
                .with_kind(EffectKind::Sleep)
            }),
        ))
}

fn scrounge() -> QuestEvent {
    QuestEvent::new("daily_scrounge", "The Bins Behind the Noodle Shop", EventKind::Daily)
        .with_description("The lunch rush is over and the bins are singing your song.")
        .excluded_from([Stage::Mansion, Stage::Celebrity])
        .with_choice(Choice::new(
            "daily_scrounge_bins",
            "Go through the bins",
            Arc::new(|stats| Chance::new((40.0 + stats.smarts() as f64 * 0.5).min(90.0))),
            Arc::new(|_, succeeded| {
                if succeeded {
                    ChoiceEffect::favorable(
                        StatDelta::none().satiety(20),
                        "Half a fried fish, barely touched. The city provides.",
                    )
                } else {
                    ChoiceEffect::unfavorable(
                        StatDelta::none().satiety(-5).health(-5),
                        "Something in there was older than it smelled. Your stomach \
                         files a complaint.",
                    )
                    .with_kind(EffectKind::Damage)
                }
            }),
        ))
        .with_choice(Choice::with_fixed_chance(
            "daily_scrounge_beg",
            "Work the noodle shop door instead",
            70.0,
            Arc::new(|_, succeeded| {
                if succeeded {
                    ChoiceEffect::favorable(
                        StatDelta::none().satiety(15).hissing(-2),
                        "The cook pretends not to see himself drop a pork bone. \
                         You pretend not to see him do it. Civilization.",
                    )
                } else {
                    ChoiceEffect::unfavorable(
                        StatDelta::none().satiety(-5),
                        "A broom appears. You were not fast, but you were faster \
                         than the broom.",
                    )
                }
            }),
        ))
}

fn groom() -> QuestEvent {
    QuestEvent::new("daily_groom", "Maintenance of the Machine", EventKind::Daily)
        .with_description("The coat does not keep itself.")
        .with_choice(Choice::with_fixed_chance(
            "daily_groom_full",
            "The full two-hour regimen",
            100.0,
            Arc::new(|_, _| {
                ChoiceEffect::favorable(
                    StatDelta::none().health(5).hissing(-2),
                    "Every hair accounted for. You are, objectively, magnificent.",
                )
            }),
        ))
}

fn thunderstorm() -> QuestEvent {
    QuestEvent::new("rnd_thunderstorm", "The Sky Breaks Open", EventKind::Random)
        .with_description("The first fat drops hit the pavement like warning shots.")
        .unlocked_when(Arc::new(|ctx| {
            if ctx.day >= 2 {
                Eligibility::unlocked()
            } else {
                Eligibility::locked("the weather holds on day 1")
            }
        }))
        .with_choice(Choice::with_fixed_chance(
            "rnd_storm_hide",
            "Get under the parked truck",
            90.0,
            Arc::new(|_, succeeded| {
                if succeeded {
                    ChoiceEffect::favorable(
                        StatDelta::none().satiety(-5),
                        "Dry, bored, and alive. The storm rages at someone else.",
                    )
                } else {
                    ChoiceEffect::unfavorable(
                        StatDelta::none().health(-10).satiety(-5),
                        "The truck drives off mid-storm. The next shelter is three \
                         very wet streets away.",
                    )
                    .with_kind(EffectKind::Damage)
                }
            }),
        ))
        .with_choice(Choice::new(
            "rnd_storm_yowl",
            "Yowl back at the thunder",
            Arc::new(|stats| Chance::new((30.0 + stats.hissing() as f64).min(85.0))),
            Arc::new(|_, succeeded| {
                if succeeded {
                    ChoiceEffect::favorable(
                        StatDelta::none().hissing(10).health(-2),
                        "The thunder blinks first. Soaked to the bone and ten feet \
                         tall.",
                    )
                } else {
                    ChoiceEffect::unfavorable(
                        StatDelta::none().health(-5).hissing(-2),
                        "The sky answers with a lightning crack that sits you \
                         right down in a puddle.",
                    )
                    .with_kind(EffectKind::Damage)
                }
            }),
        ))
}

/// Stray -> Cat Lord: take the alley throne from the old tomcat.
fn alley_king() -> QuestEvent {
    QuestEvent::new("stage_alley_king", "The Throne of the Alley", EventKind::Stage)
        .with_description(
            "The scarred tomcat who runs the alley is getting old, and everyone knows it. \
             Today he is sunning himself on the throne: the warm hood of the bakery van.",
        )
        .allowed_in([Stage::Stray])
        .unlocked_when(Arc::new(|ctx| {
            if ctx.cooling_down("stage_alley_king", 1) {
                return Eligibility::locked("licking your wounds after the last challenge");
            }
            if ctx.day >= 5 && ctx.stats.hissing() >= 40 {
                Eligibility::unlocked()
            } else {
                Eligibility::locked("needs day 5 and hissing of 40")
            }
        }))
        .with_choice(Choice::new(
            "stage_choice_claim_territory",
            "Challenge him for the alley",
            Arc::new(|stats| Chance::new((30.0 + stats.hissing() as f64 * 0.7).min(90.0))),
            Arc::new(|_, succeeded| {
                if succeeded {
                    ChoiceEffect::favorable(
                        StatDelta::none().hissing(10).smarts(5).health(-5),
                        "Three seconds of fury and it is over. He limps off with \
                         his dignity; you keep everything else. The alley is yours.",
                    )
                    .with_kind(EffectKind::Damage)
                    .with_stage_unlock(Stage::CatLord)
                } else {
                    ChoiceEffect::unfavorable(
                        StatDelta::none().health(-10),
                        "The old king has one more fight in him, and you just met \
                         it. The throne holds. (Try again in a couple of days.)",
                    )
                    .with_kind(EffectKind::Damage)
                }
            }),
        ))
        .with_choice(Choice::with_fixed_chance(
            "stage_choice_bide_time",
            "Not today. Watch and learn",
            100.0,
            // Deliberate walk-away: the event is not consumed and carries
            // no cooldown, it can come up again tomorrow.
            Arc::new(|_, _| {
                ChoiceEffect::favorable(
                    StatDelta::none().smarts(2),
                    "You memorize the way he guards his left side. The throne can \
                     wait one more day.",
                )
                .with_retry()
            }),
        ))
}

/// Cat Lord -> Mansion: charm the human with the warm car and the sad eyes.
fn adopted() -> QuestEvent {
    QuestEvent::new("stage_adopted", "The Human With the Warm Car", EventKind::Stage)
        .with_description(
            "A human has been leaving food at the alley mouth for a week. Today they \
             crouch down, hold out a hand, and wait.",
        )
        .allowed_in([Stage::CatLord])
        .unlocked_when(Arc::new(|ctx| {
            if ctx.cooling_down("stage_adopted", 1) {
                return Eligibility::locked("the human needs a day to work up the nerve again");
            }
            if ctx.day >= 9 && ctx.stats.satiety() >= 40 {
                Eligibility::unlocked()
            } else {
                Eligibility::locked("needs day 9 and satiety of 40")
            }
        }))
        .with_choice(Choice::new(
            "stage_choice_charm",
            "Deploy the slow blink",
            Arc::new(|stats| Chance::new((40.0 + stats.smarts() as f64 * 0.6).min(95.0))),
            Arc::new(|_, succeeded| {
                if succeeded {
                    ChoiceEffect::favorable(
                        StatDelta::none().satiety(20).health(10).hissing(-5),
                        "The slow blink lands. Twenty minutes later you are in the \
                         warm car, watching your kingdom shrink in the rear window.",
                    )
                    .with_kind(EffectKind::Heal)
                    .with_stage_unlock(Stage::Mansion)
                } else {
                    ChoiceEffect::unfavorable(
                        StatDelta::none().hissing(5),
                        "You blink too fast and it reads as a glare. The hand \
                         withdraws. (Try again in a couple of days.)",
                    )
                }
            }),
        ))
        .with_choice(Choice::with_fixed_chance(
            "stage_choice_keep_throne",
            "A lord does not sit in cars",
            100.0,
            Arc::new(|_, _| {
                ChoiceEffect::favorable(
                    StatDelta::none().hissing(5),
                    "You turn your back with ceremony. The alley approves. The \
                     human will be back tomorrow; they always come back.",
                )
                .with_retry()
            }),
        ))
}

/// Mansion -> Celebrity: one perfect video.
fn viral() -> QuestEvent {
    QuestEvent::new("stage_viral", "The Red Recording Light", EventKind::Stage)
        .with_description(
            "The human has been pointing the phone at you for days. The little red \
             light is on again, and the fruit bowl is unattended.",
        )
        .allowed_in([Stage::Mansion])
        .unlocked_when(Arc::new(|ctx| {
            if ctx.cooling_down("stage_viral", 1) {
                return Eligibility::locked("the phone is charging");
            }
            if ctx.day >= 12 && ctx.stats.smarts() >= 55 {
                Eligibility::unlocked()
            } else {
                Eligibility::locked("needs day 12 and smarts of 55")
            }
        }))
        .with_choice(Choice::new(
            "stage_choice_pose",
            "Give the lens your whole career",
            Arc::new(|stats| Chance::new((30.0 + stats.smarts() as f64 * 0.8).min(95.0))),
            Arc::new(|_, succeeded| {
                if succeeded {
                    ChoiceEffect::favorable(
                        StatDelta::none().smarts(10).satiety(10),
                        "Orange, melon, perfect arc, perfect landing, straight \
                         into the lens. Eleven million views by midnight. The \
                         world knows your name now.",
                    )
                    .with_stage_unlock(Stage::Celebrity)
                } else {
                    ChoiceEffect::unfavorable(
                        StatDelta::none().smarts(-2),
                        "You nail the jump but the human's thumb is over the \
                         lens. Art is collaborative, unfortunately. (Try again \
                         in a couple of days.)",
                    )
                }
            }),
        ))
        .with_choice(Choice::with_fixed_chance(
            "stage_choice_no_cameras",
            "Artists do not perform on demand",
            100.0,
            Arc::new(|_, _| {
                ChoiceEffect::favorable(
                    StatDelta::none().hissing(2),
                    "You stare at the phone until the red light goes off. Mystique \
                     is also a brand.",
                )
                .with_retry()
            }),
        ))
}
