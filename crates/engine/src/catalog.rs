//! EventCatalog - the static, content-defined set of narrative events
//!
//! Events are grouped into chains purely by their `chain_id`; the catalog
//! itself is a flat ordered collection with id lookup. A well-formed catalog
//! always carries at least one ungated `Daily` filler so a morning can never
//! dead-end.

use ninelives_domain::{DomainError, EventKind, QuestEvent};

#[derive(Debug, Default)]
pub struct EventCatalog {
    events: Vec<QuestEvent>,
}

impl EventCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_event(mut self, event: QuestEvent) -> Self {
        self.events.push(event);
        self
    }

    pub fn with_events(mut self, events: impl IntoIterator<Item = QuestEvent>) -> Self {
        self.events.extend(events);
        self
    }

    pub fn get(&self, event_id: &str) -> Option<&QuestEvent> {
        self.events.iter().find(|e| e.id().as_str() == event_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &QuestEvent> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events belonging to the given chain, in catalog order.
    pub fn chain(&self, chain_id: &str) -> Vec<&QuestEvent> {
        self.events
            .iter()
            .filter(|e| e.chain_id().is_some_and(|c| c.as_str() == chain_id))
            .collect()
    }

    /// The guaranteed filler: the first `Daily` event with no stage gates
    /// and no unlock predicate.
    pub fn fallback_daily(&self) -> Option<&QuestEvent> {
        self.events
            .iter()
            .find(|e| e.kind() == EventKind::Daily && e.is_ungated())
    }

    /// Content sanity check, run once at load time: every event has at
    /// least one choice, and a fallback filler exists.
    pub fn validate(&self) -> Result<(), DomainError> {
        for event in &self.events {
            if event.choices().is_empty() {
                return Err(DomainError::validation(format!(
                    "event {} has no choices",
                    event.id()
                )));
            }
        }
        if self.fallback_daily().is_none() {
            return Err(DomainError::validation(
                "catalog has no ungated DAILY fallback event",
            ));
        }
        Ok(())
    }
}
