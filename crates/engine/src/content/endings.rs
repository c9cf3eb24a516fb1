//! The ending and achievement table
//!
//! Death records are generated for every stage/stat pair so each has a
//! stable stage-qualified code. The named achievements are predicate
//! records over the finished run's ledger; they unlock independently of
//! whichever ending actually terminated the run.

use std::sync::Arc;

use ninelives_domain::{Ending, EndingRecord, EndingRegistry, Stage, StatKind};

pub fn ending_registry() -> EndingRegistry {
    let mut registry = EndingRegistry::new();

    for stage in Stage::all() {
        for stat in StatKind::all() {
            registry.register(EndingRecord::new(
                Ending::StatDepleted { stage, stat },
                death_title(stat),
                death_description(stage, stat),
                Arc::new(move |view| view.stats.depleted() == Some(stat) && view.stage == stage),
            ));
        }
    }

    registry.register(
        EndingRecord::new(
            Ending::Superstar,
            "Superstar",
            "Thirty days from the gutter to every screen in the city. Not one \
             regret, and certainly no overtime.",
            Arc::new(|view| view.stage.is_final() && view.stats.all_at_least(60)),
        )
        .victory(),
    );

    registry.register(EndingRecord::new(
        Ending::OldCat,
        "An Old Cat in the Sun",
        "Thirty days of weather, fish, and naps. The climb never finished, but \
         the cat did not mind.",
        Arc::new(|view| view.day >= 30 && !view.stage.is_final()),
    ));

    registry.register(EndingRecord::new(
        Ending::LordOnly,
        "King of One Alley",
        "The throne was warm, the tribute was regular, and the rest of the city \
         could keep itself.",
        Arc::new(|view| view.day >= 30 && view.stage == Stage::CatLord),
    ));

    registry.register(EndingRecord::new(
        Ending::Domesticated,
        "A Good Boy Now",
        "Walked into the carrier with dignity. Came back calmer. Suspiciously calm.",
        Arc::new(|view| view.ledger.chose("choice_egg_surrender")),
    ));

    registry.register(EndingRecord::new(
        Ending::NihilismAwakened,
        "Nothing Matters (Meow)",
        "Contemplated the meat, refused the can, stared into the void. Three \
         times the void stared back.",
        Arc::new(|view| {
            view.ledger.chose_all([
                "phil_choice_overthink_1",
                "phil_choice_nihilism",
                "phil_choice_simulation",
            ])
        }),
    ));

    registry.register(EndingRecord::new(
        Ending::Revolutionary,
        "Strays of the World, Unite",
        "Tipped the pantry off the balcony and completed the commonwealth of cats.",
        Arc::new(|view| {
            view.ledger.chose("phil_choice_revolution")
                && view.ledger.is_completed("phil_final_utopia")
        }),
    ));

    registry.register(EndingRecord::new(
        Ending::ApprenticeMaster,
        "The Master's Nod",
        "Passed the alley throne to the student with your own paw.",
        Arc::new(|view| {
            view.ledger.is_completed("app_legacy") && view.ledger.chose("app_choice_pass_title")
        }),
    ));

    registry.register(EndingRecord::new(
        Ending::ApprenticeRevenge,
        "He Remembered Everything",
        "Took credit for the student's great catch. The double-feint pounce \
         works both ways.",
        Arc::new(|view| {
            view.ledger.is_completed("app_legacy") && view.ledger.chose("app_choice_betray")
        }),
    ));

    registry.register(EndingRecord::new(
        Ending::EggFreedom,
        "The Carrier Lost",
        "Shredded the carrier and kept the full inheritance.",
        Arc::new(|view| {
            view.ledger.is_completed("side_egg_crisis") && view.ledger.chose("choice_egg_resist")
        }),
    ));

    registry
}

fn death_title(stat: StatKind) -> String {
    match stat {
        StatKind::Health => "The Last of Nine Lives".to_string(),
        StatKind::Satiety => "An Empty Bowl".to_string(),
        StatKind::Hissing => "All Fight Gone".to_string(),
        StatKind::Smarts => "The Lights Went Out".to_string(),
    }
}

fn death_description(stage: Stage, stat: StatKind) -> String {
    let place = match stage {
        Stage::Stray => "under the bakery van",
        Stage::CatLord => "on the alley throne",
        Stage::Mansion => "on the good carpet",
        Stage::Celebrity => "in front of eleven million strangers",
    };
    let cause = match stat {
        StatKind::Health => "the body gave out",
        StatKind::Satiety => "hunger won in the end",
        StatKind::Hissing => "the spirit went quiet",
        StatKind::Smarts => "the mind wandered off and did not come back",
    };
    format!("It ended {place}: {cause}.")
}
