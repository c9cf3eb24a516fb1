//! The fixed prologue script played before every run

/// One beat of the opening sequence. Purely presentational; the run state
/// does not change until the player awakens as a cat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrologueStep {
    pub id: &'static str,
    pub title: &'static str,
    pub text: &'static str,
    pub prompt: &'static str,
}

pub fn script() -> Vec<PrologueStep> {
    vec![
        PrologueStep {
            id: "pro_office",
            title: "23:47",
            text: "The office is empty except for you, the hum of the vending machine, \
                   and a deadline that moved again this afternoon.",
            prompt: "Keep typing",
        },
        PrologueStep {
            id: "pro_overtime",
            title: "The Last Ticket",
            text: "One more ticket. It is always one more ticket. Your tea went cold \
                   three tickets ago.",
            prompt: "Finish it",
        },
        PrologueStep {
            id: "pro_collapse",
            title: "Something Gives",
            text: "The screen doubles, then quadruples. The floor is closer than it \
                   has any right to be. Someone far away is shouting your name.",
            prompt: "...",
        },
        PrologueStep {
            id: "pro_white",
            title: "White",
            text: "No office. No deadline. A voice that is not a voice asks whether \
                   you have any regrets. You think: I never once slept enough.",
            prompt: "Answer honestly",
        },
        PrologueStep {
            id: "pro_bargain",
            title: "The Offer",
            text: "\"Nine lives is the standard package,\" says the voice. \"You get \
                   one. Unlimited naps included. Claws extra, but everyone takes the \
                   claws.\"",
            prompt: "Take the deal",
        },
        PrologueStep {
            id: "pro_awaken",
            title: "Warm. Fur. Rain somewhere.",
            text: "You open your eyes under a bakery van. Everything smells astonishing \
                   and slightly of fish. Your hands are paws. This is an upgrade.",
            prompt: "Begin",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_plays_six_beats_with_unique_ids() {
        let script = script();
        assert_eq!(script.len(), 6);
        let mut ids: Vec<_> = script.iter().map(|s| s.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 6);
    }
}
