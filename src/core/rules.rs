//! The transition table of the wash cycle.
//!
//! Routing is pure: given the current phase code and the selected
//! options, [`route`] names the next move without touching any state.
//! The table is keyed by raw code so that a corrupted code is detected
//! here instead of being misrouted.

use crate::core::options::WashOptions;
use crate::core::phase::Phase;
use crate::error::WashError;

/// The next move of an occupied bay.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Route {
    /// Collect the charge for the cycle, then enter the target phase.
    Charge(Phase),
    /// Move to the target phase.
    Step(Phase),
    /// The cycle is over: return to `Idle` and free the bay.
    Finish,
}

/// Route one advance of the cycle.
///
/// The cycle is a linear chain with two binary forks: after `Charging`
/// on the prewash selection, and after `Rollers` on the drying
/// selection. Whichever of the three drying-family phases is reached,
/// the next advance finishes the cycle.
///
/// # Errors
///
/// Returns [`WashError::CorruptState`] for a code outside the cycle.
pub fn route(code: u8, options: &WashOptions) -> Result<Route, WashError> {
    let route = match Phase::try_from(code)? {
        Phase::Idle => Route::Charge(Phase::Charging),
        Phase::Charging if options.prewash_by_hand => Route::Step(Phase::HandPrewash),
        Phase::Charging => Route::Step(Phase::Rinsing),
        Phase::HandPrewash => Route::Step(Phase::Rinsing),
        Phase::Rinsing => Route::Step(Phase::Soaping),
        Phase::Soaping => Route::Step(Phase::Rollers),
        // Known discrepancy, kept as-is pending a ruling from the service
        // owner: a hand-dry selection routes to AutoDrying (and the
        // automatic path to HandDrying), and no rule ever routes to
        // Waxing even though waxing can be sold.
        Phase::Rollers if options.dry_by_hand => Route::Step(Phase::AutoDrying),
        Phase::Rollers => Route::Step(Phase::HandDrying),
        Phase::AutoDrying | Phase::HandDrying | Phase::Waxing => Route::Finish,
    };
    Ok(route)
}
