//! Phase transition history.
//!
//! An append-only record of every transition a bay has performed, kept
//! across cycles like the revenue ledger. Recording is pure: `record`
//! returns a new history and leaves the original untouched.

use crate::core::phase::Phase;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// Record of a single phase transition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhaseRecord {
    /// The phase being left.
    pub from: Phase,
    /// The phase being entered.
    pub to: Phase,
    /// When the transition happened.
    pub at: DateTime<Utc>,
    /// The cycle the transition belongs to.
    pub cycle: Uuid,
}

/// Ordered history of phase transitions.
///
/// # Example
///
/// ```rust
/// use washbay::{Phase, PhaseRecord, CycleHistory};
/// use chrono::Utc;
/// use uuid::Uuid;
///
/// let cycle = Uuid::new_v4();
/// let history = CycleHistory::new().record(PhaseRecord {
///     from: Phase::Idle,
///     to: Phase::Charging,
///     at: Utc::now(),
///     cycle,
/// });
///
/// assert_eq!(history.path(), [Phase::Idle, Phase::Charging]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CycleHistory {
    records: Vec<PhaseRecord>,
}

impl CycleHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, record: PhaseRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// All recorded transitions, in order.
    pub fn records(&self) -> &[PhaseRecord] {
        &self.records
    }

    /// The path of phases traversed: the first `from`, then every `to`.
    pub fn path(&self) -> Vec<Phase> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(first.from);
        }
        for record in &self.records {
            path.push(record.to);
        }
        path
    }

    /// The path traversed by one cycle.
    pub fn path_for_cycle(&self, cycle: Uuid) -> Vec<Phase> {
        let mut path = Vec::new();
        for record in self.records.iter().filter(|r| r.cycle == cycle) {
            if path.is_empty() {
                path.push(record.from);
            }
            path.push(record.to);
        }
        path
    }

    /// Wall-clock span from the first to the last recorded transition.
    ///
    /// Returns `None` while the history is empty.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.at.signed_duration_since(first.at);
            duration.to_std().ok()
        } else {
            None
        }
    }
}
