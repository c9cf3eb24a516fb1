//! EligibilityResolver - which catalog events may currently be offered
//!
//! Stage gates are checked first, then each event's own unlock predicate,
//! which closes over the ledger (and therefore encodes cooldowns and chain
//! ordering as content, not engine logic). The resolver has no chain-aware
//! branching at all.

use ninelives_domain::{EventId, HistoryLedger, QuestEvent, Stage, StatVector, UnlockContext};

use crate::catalog::EventCatalog;

/// Why an event is not currently offerable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The current stage is outside the event's allowed/excluded sets.
    StageGated,
    /// The unlock predicate said no, with its human reason when given.
    Locked { reason: Option<String> },
}

/// Outcome of a full catalog scan: the ordered offerable events plus, for
/// the rest, why not.
#[derive(Debug, Default)]
pub struct EligibilityReport<'a> {
    pub eligible: Vec<&'a QuestEvent>,
    pub rejected: Vec<(EventId, Rejection)>,
}

impl EligibilityReport<'_> {
    pub fn rejection_for(&self, event_id: &str) -> Option<&Rejection> {
        self.rejected
            .iter()
            .find(|(id, _)| id.as_str() == event_id)
            .map(|(_, rejection)| rejection)
    }
}

/// Scan the catalog in order and split it into offerable events and
/// rejections.
pub fn eligible_events<'a>(
    catalog: &'a EventCatalog,
    day: u32,
    stage: Stage,
    stats: &StatVector,
    ledger: &HistoryLedger,
) -> EligibilityReport<'a> {
    let ctx = UnlockContext { day, stats, ledger };
    let mut report = EligibilityReport::default();

    for event in catalog.iter() {
        if !event.stage_allows(stage) {
            report
                .rejected
                .push((event.id().clone(), Rejection::StageGated));
            continue;
        }
        let eligibility = event.eligibility(&ctx);
        if eligibility.unlocked {
            report.eligible.push(event);
        } else {
            report.rejected.push((
                event.id().clone(),
                Rejection::Locked {
                    reason: eligibility.reason,
                },
            ));
        }
    }

    tracing::debug!(
        day,
        %stage,
        eligible = report.eligible.len(),
        rejected = report.rejected.len(),
        "resolved event eligibility"
    );

    report
}
