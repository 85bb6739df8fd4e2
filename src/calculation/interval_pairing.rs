//! Punch pairing state machine.
//!
//! This module converts a day's punch list into ordered (entry, exit)
//! intervals. Punches are processed in input order by an explicit
//! two-state machine (awaiting-entry / awaiting-exit) with a stated policy
//! for unmatched punches:
//!
//! - a second ENTRADA while one is pending replaces the pending entry; the
//!   earlier, unterminated entry is dropped,
//! - a SALIDA with no pending entry is dropped,
//! - a pending entry left at the end of the day is dropped.
//!
//! Dropped punches contribute no interval and no duration. Each drop is
//! logged at WARN level and surfaced in the [`PairingOutcome`] so callers
//! can audit partial or unterminated shifts instead of losing them
//! silently.

use tracing::warn;

use crate::models::{Punch, PunchKind, WorkInterval};

/// The result of pairing a day's punches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairingOutcome {
    /// The paired intervals, in the order their exits were seen.
    pub intervals: Vec<WorkInterval>,
    /// Punches that could not be paired, in the order they were dropped.
    pub dropped: Vec<Punch>,
}

impl PairingOutcome {
    /// `true` when every punch found its pair.
    pub fn is_complete(&self) -> bool {
        self.dropped.is_empty()
    }
}

/// Pairs a day's punches into work intervals.
///
/// The caller must supply punches already sorted by time of day; the state
/// machine consumes them in input order and does not re-sort.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::pair_punches;
/// use payroll_engine::models::{Punch, PunchKind};
///
/// let punches = vec![
///     Punch::parse(PunchKind::Entrada, "08:00:00").unwrap(),
///     Punch::parse(PunchKind::Entrada, "12:00:00").unwrap(),
///     Punch::parse(PunchKind::Salida, "13:00:00").unwrap(),
/// ];
/// let outcome = pair_punches(&punches);
///
/// // The unterminated 08:00 entry is replaced by the 12:00 one.
/// assert_eq!(outcome.intervals.len(), 1);
/// assert_eq!(outcome.intervals[0].entry.to_string(), "12:00:00");
/// assert_eq!(outcome.dropped.len(), 1);
/// ```
pub fn pair_punches(punches: &[Punch]) -> PairingOutcome {
    let mut intervals = Vec::new();
    let mut dropped = Vec::new();
    let mut pending_entry: Option<Punch> = None;

    for punch in punches {
        match (punch.kind, pending_entry) {
            (PunchKind::Entrada, None) => {
                pending_entry = Some(*punch);
            }
            (PunchKind::Entrada, Some(previous)) => {
                warn!(
                    time = %previous.time,
                    replaced_by = %punch.time,
                    "dropping unterminated entry punch"
                );
                dropped.push(previous);
                pending_entry = Some(*punch);
            }
            (PunchKind::Salida, Some(entry)) => {
                intervals.push(WorkInterval::new(entry.time, punch.time));
                pending_entry = None;
            }
            (PunchKind::Salida, None) => {
                warn!(time = %punch.time, "dropping exit punch with no matching entry");
                dropped.push(*punch);
            }
        }
    }

    if let Some(entry) = pending_entry {
        warn!(time = %entry.time, "dropping entry punch left open at end of day");
        dropped.push(entry);
    }

    PairingOutcome { intervals, dropped }
}
