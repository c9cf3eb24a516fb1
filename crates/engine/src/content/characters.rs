//! The selectable roster

use ninelives_domain::{Character, StatVector};

pub fn roster() -> Vec<Character> {
    vec![
        Character::new("round_head", "Round Head", StatVector::stray_default())
            .with_description(
                "An ordinary orange cat with an extraordinary grudge against pigeons. \
                 No particular talents, no particular flaws.",
            ),
        Character::new("scarface", "Scarface", StatVector::new(45, 35, 60, 15)).with_description(
            "One ear, many stories. Starts angry and stays that way, but the streets \
             have already taken their toll on his health.",
        ),
        Character::new("professor", "The Professor", StatVector::new(50, 30, 15, 45))
            .with_description(
                "Grew up in a university library and it shows. Thinks before every \
                 pounce, which is why so many pounces come up empty.",
            )
            .locked(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_has_one_locked_cat() {
        let roster = roster();
        assert_eq!(roster.len(), 3);
        assert_eq!(roster.iter().filter(|c| c.is_locked()).count(), 1);
    }

    #[test]
    fn every_cat_starts_alive() {
        for cat in roster() {
            assert!(cat.initial_stats().depleted().is_none(), "{}", cat.id());
        }
    }
}
