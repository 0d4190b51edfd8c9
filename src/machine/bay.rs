//! A single wash bay and its cycle state.

use crate::core::history::{CycleHistory, PhaseRecord};
use crate::core::options::WashOptions;
use crate::core::phase::Phase;
use crate::core::rules::{route, Route};
use crate::core::tariff::Tariff;
use crate::error::WashError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Proof of payment for one cycle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    /// The cycle the charge belongs to.
    pub cycle: Uuid,
    /// The options the price was computed from.
    pub options: WashOptions,
    /// The amount collected.
    pub amount: f64,
    /// When the charge was collected.
    pub issued_at: DateTime<Utc>,
}

/// Result of a single [`advance_phase`](WashStateMachine::advance_phase) call.
#[derive(Clone, Debug, PartialEq)]
pub enum StepOutcome {
    /// The bay was unoccupied; nothing changed.
    Ignored,
    /// The cycle left `Idle`: the charge was collected.
    Charged(Receipt),
    /// The cycle moved one phase forward.
    Advanced {
        /// The phase that was left.
        from: Phase,
        /// The phase that was entered.
        to: Phase,
    },
    /// The cycle finished from its last phase; the bay is free again.
    Completed {
        /// The phase the cycle finished from.
        from: Phase,
    },
}

/// A single car-wash bay.
///
/// The bay services one car at a time. A cycle starts with
/// [`start_wash`](WashStateMachine::start_wash), is driven by repeated
/// [`advance_phase`](WashStateMachine::advance_phase) calls, and ends by
/// itself when the last phase is left, returning the bay to idle. The
/// charge for a cycle is collected exactly once, when the cycle leaves
/// `Idle`; the revenue ledger accumulates across cycles and is never
/// reset.
///
/// The bay assumes exclusive access per call. A multi-threaded host must
/// serialize calls to one bay itself; concurrent cycles are refused with
/// [`WashError::Busy`], not prevented by locking.
///
/// # Example
///
/// ```rust
/// use washbay::{Phase, WashOptions, WashStateMachine};
///
/// let mut bay = WashStateMachine::new();
/// bay.start_wash(WashOptions::basic()).unwrap();
///
/// while bay.occupied() {
///     bay.advance_phase().unwrap();
/// }
///
/// assert_eq!(bay.phase(), Phase::Idle);
/// assert!((bay.total_revenue() - 5.00).abs() < 1e-9);
/// ```
#[derive(Clone, Debug)]
pub struct WashStateMachine {
    phase: Phase,
    occupied: bool,
    options: WashOptions,
    total_revenue: f64,
    cycle: Option<Uuid>,
    tariff: Tariff,
    history: CycleHistory,
}

impl Default for WashStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl WashStateMachine {
    /// Create a free bay with the default tariff and no revenue.
    pub fn new() -> Self {
        Self::with_tariff(Tariff::default())
    }

    /// Create a free bay charging by a custom tariff.
    pub fn with_tariff(tariff: Tariff) -> Self {
        Self {
            phase: Phase::Idle,
            occupied: false,
            options: WashOptions::default(),
            total_revenue: 0.0,
            cycle: None,
            tariff,
            history: CycleHistory::new(),
        }
    }

    /// Current position in the cycle; `Idle` whenever the bay is free.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether a cycle is in progress.
    pub fn occupied(&self) -> bool {
        self.occupied
    }

    /// The selections for the in-progress cycle; all false when the bay
    /// is free.
    pub fn options(&self) -> WashOptions {
        self.options
    }

    /// Cumulative sum of every charge ever collected.
    pub fn total_revenue(&self) -> f64 {
        self.total_revenue
    }

    /// Identifier of the in-progress cycle, if any.
    pub fn cycle(&self) -> Option<Uuid> {
        self.cycle
    }

    /// The price list the bay charges by.
    pub fn tariff(&self) -> &Tariff {
        &self.tariff
    }

    /// Every phase transition the bay has performed, across cycles.
    pub fn history(&self) -> &CycleHistory {
        &self.history
    }

    /// Return the bay to idle.
    ///
    /// Clears the phase, the occupancy flag, the selected options, and
    /// the cycle id. Callable at any time; a cycle cleared mid-flight is
    /// not refunded, and neither the revenue ledger nor the history is
    /// touched.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.occupied = false;
        self.options = WashOptions::default();
        self.cycle = None;
    }

    /// Start a wash cycle with the given options.
    ///
    /// On success the bay is occupied, the options are stored verbatim,
    /// and the phase sits at `Idle`. Nothing is charged yet; charging
    /// happens on the first [`advance_phase`](Self::advance_phase).
    ///
    /// # Errors
    ///
    /// - [`WashError::Busy`] while a cycle is in progress, regardless of
    ///   its phase.
    /// - [`WashError::InvalidOptionCombo`] when waxing is requested
    ///   without hand drying.
    ///
    /// Either failure leaves the bay unchanged.
    pub fn start_wash(&mut self, options: WashOptions) -> Result<(), WashError> {
        if self.occupied {
            tracing::warn!(phase = %self.phase, "wash rejected: bay is busy");
            return Err(WashError::Busy);
        }
        options.validate()?;

        let cycle = Uuid::new_v4();
        self.phase = Phase::Idle;
        self.occupied = true;
        self.options = options;
        self.cycle = Some(cycle);
        tracing::info!(%cycle, ?options, "wash cycle started");
        Ok(())
    }

    /// Advance the cycle by one phase.
    ///
    /// A no-op returning [`StepOutcome::Ignored`] while the bay is free.
    /// Otherwise applies exactly one transition from the routing table:
    /// leaving `Idle` collects the charge ([`StepOutcome::Charged`]),
    /// interior moves yield [`StepOutcome::Advanced`], and leaving one of
    /// the drying-family phases finishes the cycle and frees the bay
    /// ([`StepOutcome::Completed`]). Every transition is recorded in the
    /// history with its timestamp and cycle id.
    ///
    /// # Errors
    ///
    /// Returns [`WashError::CorruptState`] if the routing table observes
    /// a phase code outside the cycle.
    pub fn advance_phase(&mut self) -> Result<StepOutcome, WashError> {
        if !self.occupied {
            return Ok(StepOutcome::Ignored);
        }

        let from = self.phase;
        match route(from.code(), &self.options)? {
            Route::Charge(next) => {
                let receipt = self.collect_charge();
                self.move_to(next);
                Ok(StepOutcome::Charged(receipt))
            }
            Route::Step(next) => {
                self.move_to(next);
                Ok(StepOutcome::Advanced { from, to: next })
            }
            Route::Finish => {
                self.move_to(Phase::Idle);
                self.reset();
                tracing::info!(from = %from, "wash cycle completed");
                Ok(StepOutcome::Completed { from })
            }
        }
    }

    fn collect_charge(&mut self) -> Receipt {
        let cycle = self.cycle.expect("an occupied bay always has a cycle id");
        let amount = self.tariff.price_of(&self.options);
        self.total_revenue += amount;
        tracing::info!(%cycle, amount, "charge collected");
        Receipt {
            cycle,
            options: self.options,
            amount,
            issued_at: Utc::now(),
        }
    }

    fn move_to(&mut self, to: Phase) {
        let cycle = self.cycle.expect("an occupied bay always has a cycle id");
        let record = PhaseRecord {
            from: self.phase,
            to,
            at: Utc::now(),
            cycle,
        };
        self.history = self.history.record(record);
        tracing::debug!(from = %self.phase, to = %to, "phase advanced");
        self.phase = to;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn new_bay_is_free_and_unpaid() {
        let bay = WashStateMachine::new();
        assert_eq!(bay.phase(), Phase::Idle);
        assert!(!bay.occupied());
        assert_eq!(bay.options(), WashOptions::basic());
        assert_eq!(bay.total_revenue(), 0.0);
        assert!(bay.cycle().is_none());
        assert!(bay.history().records().is_empty());
    }

    #[test]
    fn start_wash_occupies_and_stores_options() {
        let mut bay = WashStateMachine::new();
        let options = WashOptions::new(true, false, false);

        bay.start_wash(options).unwrap();

        assert!(bay.occupied());
        assert_eq!(bay.phase(), Phase::Idle);
        assert_eq!(bay.options(), options);
        assert!(bay.cycle().is_some());
        // Nothing charged yet.
        assert_eq!(bay.total_revenue(), 0.0);
    }

    #[test]
    fn start_wash_rejects_a_busy_bay() {
        let mut bay = WashStateMachine::new();
        let first = WashOptions::new(true, false, false);
        bay.start_wash(first).unwrap();
        let cycle = bay.cycle();

        let result = bay.start_wash(WashOptions::basic());

        assert!(matches!(result, Err(WashError::Busy)));
        assert_eq!(bay.options(), first);
        assert_eq!(bay.cycle(), cycle);
        assert!(bay.occupied());
    }

    #[test]
    fn start_wash_rejects_wax_without_hand_dry() {
        let mut bay = WashStateMachine::new();

        let result = bay.start_wash(WashOptions::new(false, false, true));

        assert!(matches!(result, Err(WashError::InvalidOptionCombo)));
        assert!(!bay.occupied());
        assert_eq!(bay.options(), WashOptions::basic());
        assert_eq!(bay.total_revenue(), 0.0);
    }

    #[test]
    fn first_advance_collects_the_charge_exactly_once() {
        let mut bay = WashStateMachine::new();
        bay.start_wash(WashOptions::full_service()).unwrap();

        let outcome = bay.advance_phase().unwrap();
        let receipt = match outcome {
            StepOutcome::Charged(receipt) => receipt,
            other => panic!("expected Charged, got {other:?}"),
        };

        assert!((receipt.amount - 8.70).abs() < EPS);
        assert!((bay.total_revenue() - 8.70).abs() < EPS);
        assert_eq!(receipt.options, WashOptions::full_service());
        assert_eq!(Some(receipt.cycle), bay.cycle());
        assert_eq!(bay.phase(), Phase::Charging);

        // No further advance charges again.
        while bay.occupied() {
            let outcome = bay.advance_phase().unwrap();
            assert!(!matches!(outcome, StepOutcome::Charged(_)));
        }
        assert!((bay.total_revenue() - 8.70).abs() < EPS);
    }

    #[test]
    fn advance_while_free_is_a_noop() {
        let mut bay = WashStateMachine::new();

        for _ in 0..3 {
            assert_eq!(bay.advance_phase().unwrap(), StepOutcome::Ignored);
        }

        assert_eq!(bay.phase(), Phase::Idle);
        assert!(!bay.occupied());
        assert_eq!(bay.total_revenue(), 0.0);
        assert!(bay.history().records().is_empty());
    }

    #[test]
    fn completing_a_cycle_frees_the_bay_and_keeps_revenue() {
        let mut bay = WashStateMachine::new();
        bay.start_wash(WashOptions::basic()).unwrap();

        let mut completed = None;
        for _ in 0..6 {
            if let StepOutcome::Completed { from } = bay.advance_phase().unwrap() {
                completed = Some(from);
            }
        }

        assert_eq!(completed, Some(Phase::HandDrying));
        assert!(!bay.occupied());
        assert_eq!(bay.phase(), Phase::Idle);
        assert_eq!(bay.options(), WashOptions::basic());
        assert!(bay.cycle().is_none());
        assert!((bay.total_revenue() - 5.00).abs() < EPS);
    }

    #[test]
    fn reset_mid_cycle_keeps_ledger_and_history() {
        let mut bay = WashStateMachine::new();
        bay.start_wash(WashOptions::new(true, true, false)).unwrap();
        bay.advance_phase().unwrap();
        bay.advance_phase().unwrap();
        let records_before = bay.history().records().len();
        let revenue_before = bay.total_revenue();

        bay.reset();

        assert!(!bay.occupied());
        assert_eq!(bay.phase(), Phase::Idle);
        assert_eq!(bay.options(), WashOptions::basic());
        assert!(bay.cycle().is_none());
        assert_eq!(bay.total_revenue(), revenue_before);
        assert_eq!(bay.history().records().len(), records_before);
    }

    #[test]
    fn revenue_accumulates_across_cycles() {
        let mut bay = WashStateMachine::new();

        bay.start_wash(WashOptions::basic()).unwrap();
        while bay.occupied() {
            bay.advance_phase().unwrap();
        }
        bay.start_wash(WashOptions::full_service()).unwrap();
        while bay.occupied() {
            bay.advance_phase().unwrap();
        }

        assert!((bay.total_revenue() - 13.70).abs() < EPS);
    }

    #[test]
    fn history_ties_records_to_their_cycle() {
        let mut bay = WashStateMachine::new();

        bay.start_wash(WashOptions::basic()).unwrap();
        let first = bay.cycle().unwrap();
        while bay.occupied() {
            bay.advance_phase().unwrap();
        }

        bay.start_wash(WashOptions::new(true, false, false)).unwrap();
        let second = bay.cycle().unwrap();
        while bay.occupied() {
            bay.advance_phase().unwrap();
        }

        assert_eq!(
            bay.history().path_for_cycle(first),
            [
                Phase::Idle,
                Phase::Charging,
                Phase::Rinsing,
                Phase::Soaping,
                Phase::Rollers,
                Phase::HandDrying,
                Phase::Idle,
            ]
        );
        assert_eq!(
            bay.history().path_for_cycle(second),
            [
                Phase::Idle,
                Phase::Charging,
                Phase::HandPrewash,
                Phase::Rinsing,
                Phase::Soaping,
                Phase::Rollers,
                Phase::HandDrying,
                Phase::Idle,
            ]
        );
    }

    #[test]
    fn custom_tariff_is_applied() {
        let tariff = Tariff {
            base: 10.0,
            hand_prewash: 3.0,
            hand_dry: 2.0,
            wax: 1.0,
        };
        let mut bay = WashStateMachine::with_tariff(tariff);
        bay.start_wash(WashOptions::new(true, false, false)).unwrap();

        let outcome = bay.advance_phase().unwrap();

        match outcome {
            StepOutcome::Charged(receipt) => assert!((receipt.amount - 13.0).abs() < EPS),
            other => panic!("expected Charged, got {other:?}"),
        }
    }

    #[test]
    fn receipt_serializes_correctly() {
        let mut bay = WashStateMachine::new();
        bay.start_wash(WashOptions::full_service()).unwrap();

        let receipt = match bay.advance_phase().unwrap() {
            StepOutcome::Charged(receipt) => receipt,
            other => panic!("expected Charged, got {other:?}"),
        };

        let json = serde_json::to_string(&receipt).unwrap();
        let deserialized: Receipt = serde_json::from_str(&json).unwrap();
        assert_eq!(receipt, deserialized);
    }
}
