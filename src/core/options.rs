//! Optional services for a wash cycle.

use crate::error::WashError;
use serde::{Deserialize, Serialize};

/// The optional services a customer can add to a wash.
///
/// The three flags are independent except for one business rule: waxing
/// is only offered as a hand-drying add-on, so `wax` requires
/// `dry_by_hand`. A selection that breaks the rule is rejected by
/// [`validate`](WashOptions::validate), never silently corrected.
///
/// # Example
///
/// ```rust
/// use washbay::WashOptions;
///
/// assert!(WashOptions::new(true, true, true).validate().is_ok());
/// assert!(WashOptions::new(false, false, true).validate().is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct WashOptions {
    /// Prewash the car by hand before the tunnel.
    pub prewash_by_hand: bool,
    /// Dry the car by hand instead of the blowers.
    pub dry_by_hand: bool,
    /// Wax the car after drying.
    pub wax: bool,
}

impl WashOptions {
    /// Build a selection from the three flags.
    pub fn new(prewash_by_hand: bool, dry_by_hand: bool, wax: bool) -> Self {
        Self {
            prewash_by_hand,
            dry_by_hand,
            wax,
        }
    }

    /// No extras: tunnel wash only.
    pub fn basic() -> Self {
        Self::default()
    }

    /// Every extra service.
    pub fn full_service() -> Self {
        Self::new(true, true, true)
    }

    /// Check the selection against the business rules.
    ///
    /// # Errors
    ///
    /// Returns [`WashError::InvalidOptionCombo`] when `wax` is set
    /// without `dry_by_hand`.
    pub fn validate(&self) -> Result<(), WashError> {
        if self.wax && !self.dry_by_hand {
            return Err(WashError::InvalidOptionCombo);
        }
        Ok(())
    }
}
