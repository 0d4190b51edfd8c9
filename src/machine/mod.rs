//! The wash bay state machine: the imperative shell over the pure core.

mod bay;

pub use bay::{Receipt, StepOutcome, WashStateMachine};
