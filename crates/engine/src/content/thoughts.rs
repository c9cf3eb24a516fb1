//! Night thoughts, two or three per stage
//!
//! Conditional ones key off the day's stats or history; the rest are
//! unconditional flavor so every night has at least one candidate.

use std::sync::Arc;

use ninelives_domain::{NightThought, Stage};

pub fn thoughts() -> Vec<NightThought> {
    vec![
        NightThought::new(
            "t_stray_cold",
            Stage::Stray,
            "Cold Pavement",
            "The pavement gives back the day's heat for an hour after sunset. You know \
             every warm slab in three blocks. This is what expertise looks like down here.",
        ),
        NightThought::new(
            "t_stray_hunger",
            Stage::Stray,
            "The Shape of Hunger",
            "Hunger is not a feeling, it is a co-pilot. It does most of the steering \
             on days like this.",
        )
        .shown_when(Arc::new(|stats, _| stats.satiety() < 25)),
        NightThought::new(
            "t_stray_stars",
            Stage::Stray,
            "Between the Wires",
            "Between the power lines there are exactly eleven stars tonight. Someone \
             up there is also counting, probably.",
        ),
        NightThought::new(
            "t_lord_weight",
            Stage::CatLord,
            "The Weight of the Crown",
            "Every cat in the alley sleeps easier because you do not. That is the \
             entire job description.",
        ),
        NightThought::new(
            "t_lord_tribute",
            Stage::CatLord,
            "Fish Head Economics",
            "The tribute pile was taller today. Either the harbor is generous or \
             somebody wants something. Nobody is ever just generous.",
        )
        .shown_when(Arc::new(|stats, _| stats.satiety() >= 50)),
        NightThought::new(
            "t_mansion_glass",
            Stage::Mansion,
            "The Far Side of the Glass",
            "Rain on the window. You used to be on the other side of this glass. You \
             flex your claws into the carpet and decide not to think about it.",
        ),
        NightThought::new(
            "t_mansion_soft",
            Stage::Mansion,
            "Softening",
            "You slept nine hours and complained about breakfast. The alley version \
             of you would have bitten the mansion version of you.",
        )
        .shown_when(Arc::new(|stats, _| stats.hissing() < 20)),
        NightThought::new(
            "t_mansion_ladder",
            Stage::Mansion,
            "Old Lessons",
            "The lessons from the street still apply in here, they just wear \
             softer clothes.",
        )
        .shown_when(Arc::new(|_, ledger| ledger.is_completed("phil_stray_jungle"))),
        NightThought::new(
            "t_celebrity_lights",
            Stage::Celebrity,
            "Eleven Million Strangers",
            "Eleven million strangers know your face and not one of them knows where \
             you buried the good mouse. Fame has limits.",
        ),
        NightThought::new(
            "t_celebrity_roof",
            Stage::Celebrity,
            "The View From the Top",
            "From the penthouse roof you can almost see the old alley. You tell \
             yourself that is not why you come up here.",
        ),
    ]
}
