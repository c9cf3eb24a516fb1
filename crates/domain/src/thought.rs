//! Night thoughts - stage-flavored reflections shown during the night summary

use std::sync::Arc;

use crate::{HistoryLedger, Stage, StatVector, ThoughtId};

pub type ThoughtConditionFn = Arc<dyn Fn(&StatVector, &HistoryLedger) -> bool + Send + Sync>;

/// A short reflection surfaced at the end of a day, gated by stage and an
/// optional condition over stats and history.
#[derive(Clone)]
pub struct NightThought {
    id: ThoughtId,
    stage: Stage,
    title: String,
    content: String,
    condition: Option<ThoughtConditionFn>,
}

impl NightThought {
    pub fn new(
        id: impl Into<ThoughtId>,
        stage: Stage,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            stage,
            title: title.into(),
            content: content.into(),
            condition: None,
        }
    }

    pub fn shown_when(mut self, condition: ThoughtConditionFn) -> Self {
        self.condition = Some(condition);
        self
    }

    #[inline]
    pub fn id(&self) -> &ThoughtId {
        &self.id
    }

    #[inline]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn applies(&self, stage: Stage, stats: &StatVector, ledger: &HistoryLedger) -> bool {
        if stage != self.stage {
            return false;
        }
        match &self.condition {
            Some(condition) => condition(stats, ledger),
            None => true,
        }
    }
}

impl std::fmt::Debug for NightThought {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NightThought")
            .field("id", &self.id)
            .field("stage", &self.stage)
            .finish()
    }
}
