//! Washbay: a car-wash bay state machine with per-cycle pricing.
//!
//! A bay services one car at a time. A customer selects optional
//! services, the computed price is collected once per cycle, and the bay
//! advances through a fixed sequence of wash phases until it returns to
//! idle. Transitions are logical steps driven by the caller, never by
//! time.
//!
//! The crate follows a "pure core, imperative shell" split:
//!
//! - **Core**: the phase enumeration, option flags, pricing policy,
//!   transition table, and history, all side-effect free
//! - **Machine**: the [`WashStateMachine`] owning the mutable bay state
//! - **Driver**: a step-capped loop that runs one cycle to completion
//!
//! # Example
//!
//! ```rust
//! use washbay::driver::{run_full_cycle, DEFAULT_STEP_CAP};
//! use washbay::{Phase, WashOptions, WashStateMachine};
//!
//! let mut bay = WashStateMachine::new();
//! let run = run_full_cycle(&mut bay, WashOptions::basic(), DEFAULT_STEP_CAP)
//!     .expect("a basic wash runs to completion");
//!
//! assert_eq!(
//!     run.phases,
//!     [
//!         Phase::Idle,
//!         Phase::Charging,
//!         Phase::Rinsing,
//!         Phase::Soaping,
//!         Phase::Rollers,
//!         Phase::HandDrying,
//!         Phase::Idle,
//!     ]
//! );
//! assert!(!bay.occupied());
//! assert!((bay.total_revenue() - 5.00).abs() < 1e-9);
//! ```

pub mod core;
pub mod driver;
pub mod error;
pub mod machine;

// Re-export commonly used types
pub use crate::core::{describe_code, CycleHistory, Phase, PhaseRecord, Route, Tariff, WashOptions};
pub use crate::error::WashError;
pub use crate::machine::{Receipt, StepOutcome, WashStateMachine};
