//! Bounded driver for complete wash cycles.
//!
//! The bay itself puts no bound on cycle length, so a loop that drives a
//! cycle to completion must cap its own iterations and treat running
//! past the cap as a corrupt-state-class failure.

use crate::core::options::WashOptions;
use crate::core::phase::Phase;
use crate::error::WashError;
use crate::machine::{Receipt, StepOutcome, WashStateMachine};
use thiserror::Error;

/// Step cap comfortably above the longest defined cycle (7 advances).
pub const DEFAULT_STEP_CAP: usize = 16;

/// Errors from driving a full cycle.
#[derive(Debug, Error)]
pub enum DriverError {
    /// The bay itself rejected an operation.
    #[error(transparent)]
    Wash(#[from] WashError),

    /// The cycle did not finish within the step cap.
    #[error("cycle still in {stalled_in} after {cap} steps")]
    StepLimit {
        /// The cap that was exceeded.
        cap: usize,
        /// The phase the cycle was stuck in.
        stalled_in: Phase,
    },
}

/// The observable outcome of one full cycle.
#[derive(Clone, Debug, PartialEq)]
pub struct CycleRun {
    /// Every phase visited, from the initial `Idle` back to `Idle`.
    pub phases: Vec<Phase>,
    /// The charge collected for the cycle.
    pub receipt: Receipt,
}

/// Start a cycle and advance it until the bay frees itself.
///
/// On success the bay is free again and the run holds the visited phase
/// sequence and the receipt. On [`DriverError::StepLimit`] the bay is
/// left mid-cycle for the caller to inspect or
/// [`reset`](WashStateMachine::reset).
///
/// # Errors
///
/// - [`DriverError::Wash`] when the bay refuses to start or advance.
/// - [`DriverError::StepLimit`] when the cycle outlives `step_cap`
///   advances.
pub fn run_full_cycle(
    bay: &mut WashStateMachine,
    options: WashOptions,
    step_cap: usize,
) -> Result<CycleRun, DriverError> {
    bay.start_wash(options)?;

    let mut phases = vec![bay.phase()];
    let mut receipt = None;
    let mut steps = 0;

    while bay.occupied() {
        if steps == step_cap {
            return Err(DriverError::StepLimit {
                cap: step_cap,
                stalled_in: bay.phase(),
            });
        }
        match bay.advance_phase()? {
            StepOutcome::Charged(paid) => {
                phases.push(bay.phase());
                receipt = Some(paid);
            }
            StepOutcome::Advanced { to, .. } => phases.push(to),
            StepOutcome::Completed { .. } => phases.push(Phase::Idle),
            StepOutcome::Ignored => break,
        }
        steps += 1;
    }

    let receipt = receipt.expect("a completed cycle collects its charge on the first advance");
    Ok(CycleRun { phases, receipt })
}
