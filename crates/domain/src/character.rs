//! Playable character roster records

use crate::{CharacterId, StatVector};

/// A selectable cat, defined at content-load time.
#[derive(Debug, Clone)]
pub struct Character {
    id: CharacterId,
    name: String,
    description: String,
    initial_stats: StatVector,
    locked: bool,
}

impl Character {
    pub fn new(
        id: impl Into<CharacterId>,
        name: impl Into<String>,
        initial_stats: StatVector,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            initial_stats,
            locked: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Locked characters are shown in the roster but not selectable until
    /// the presentation layer unlocks them from cross-run ending data.
    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }

    #[inline]
    pub fn id(&self) -> &CharacterId {
        &self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[inline]
    pub fn initial_stats(&self) -> StatVector {
        self.initial_stats
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        self.locked
    }
}
