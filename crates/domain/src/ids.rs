use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Content ids are human-authored slugs (e.g. `phil_stray_jungle`), stable
/// across runs and referenced from unlock predicates and the ending registry.
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

// Content record IDs
define_id!(EventId);
define_id!(ChoiceId);
define_id!(ChainId);

// Roster and night-summary IDs
define_id!(CharacterId);
define_id!(ThoughtId);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn display_matches_slug() {
        let id = EventId::new("phil_stray_jungle");
        assert_eq!(id.to_string(), "phil_stray_jungle");
        assert_eq!(id.as_str(), "phil_stray_jungle");
    }

    #[test]
    fn set_lookup_by_str() {
        let mut set = BTreeSet::new();
        set.insert(EventId::new("side_egg_crisis"));
        assert!(set.contains("side_egg_crisis"));
        assert!(!set.contains("side_hater_war"));
    }

    #[test]
    fn serde_is_transparent() {
        let id = ChoiceId::new("phil_choice_share");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"phil_choice_share\"");
    }
}
