//! Morning event selection policy
//!
//! A fixed kind-priority order (`Special > Stage > Auto > SideQuest >
//! Random/Daily`) so story beats pre-empt filler, then a pseudo-random pick
//! among the remaining equally ranked candidates for variety across runs
//! with identical stats.

use ninelives_domain::QuestEvent;

use crate::roller::Roller;

/// Pick the morning event from the eligible set, or `None` if it is empty
/// (the caller then falls back to the catalog's guaranteed daily filler).
pub fn select_event<'a>(
    roller: &mut dyn Roller,
    eligible: &[&'a QuestEvent],
) -> Option<&'a QuestEvent> {
    let top_priority = eligible.iter().map(|e| e.kind().priority()).min()?;
    let ranked: Vec<&QuestEvent> = eligible
        .iter()
        .copied()
        .filter(|e| e.kind().priority() == top_priority)
        .collect();

    let picked = ranked[roller.pick_index(ranked.len())];
    tracing::debug!(
        event = %picked.id(),
        kind = ?picked.kind(),
        candidates = ranked.len(),
        "selected morning event"
    );
    Some(picked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roller::{RandomRoller, ScriptedRoller};
    use ninelives_domain::{Choice, ChoiceEffect, EventKind, StatDelta};
    use std::sync::Arc;

    fn event(id: &str, kind: EventKind) -> QuestEvent {
        QuestEvent::new(id, id.to_string(), kind).with_choice(Choice::with_fixed_chance(
            format!("{id}_c"),
            "C",
            100.0,
            Arc::new(|_, _| ChoiceEffect::favorable(StatDelta::none(), "ok")),
        ))
    }

    #[test]
    fn empty_set_selects_nothing() {
        let mut roller = ScriptedRoller::always_low();
        assert!(select_event(&mut roller, &[]).is_none());
    }

    #[test]
    fn story_beats_preempt_filler() {
        let special = event("sp", EventKind::Special);
        let stage = event("st", EventKind::Stage);
        let side = event("sq", EventKind::SideQuest);
        let daily = event("dl", EventKind::Daily);

        let mut roller = RandomRoller::seeded(1);
        let all = [&daily, &side, &stage, &special];
        let picked = select_event(&mut roller, &all).expect("non-empty");
        assert_eq!(picked.id().as_str(), "sp");

        let no_special = [&daily, &side, &stage];
        let picked = select_event(&mut roller, &no_special).expect("non-empty");
        assert_eq!(picked.id().as_str(), "st");
    }

    #[test]
    fn random_and_daily_share_the_filler_tier() {
        let random = event("rd", EventKind::Random);
        let daily = event("dl", EventKind::Daily);

        // Draw 0 -> index 0, draw 99.9 -> index 1: both tiers reachable.
        let mut low = ScriptedRoller::new([0.0]);
        let picked = select_event(&mut low, &[&random, &daily]).expect("non-empty");
        assert_eq!(picked.id().as_str(), "rd");

        let mut high = ScriptedRoller::new([99.9]);
        let picked = select_event(&mut high, &[&random, &daily]).expect("non-empty");
        assert_eq!(picked.id().as_str(), "dl");
    }

    #[test]
    fn tie_break_is_deterministic_under_a_seed() {
        let a = event("a", EventKind::SideQuest);
        let b = event("b", EventKind::SideQuest);
        let c = event("c", EventKind::SideQuest);
        let set = [&a, &b, &c];

        let mut first = RandomRoller::seeded(9);
        let mut second = RandomRoller::seeded(9);
        for _ in 0..16 {
            let x = select_event(&mut first, &set).expect("non-empty");
            let y = select_event(&mut second, &set).expect("non-empty");
            assert_eq!(x.id(), y.id());
        }
    }
}
