//! Pricing policy for a wash cycle.

use crate::core::options::WashOptions;
use serde::{Deserialize, Serialize};

/// Base price of a wash.
pub const BASE_PRICE: f64 = 5.00;
/// Supplement for a hand prewash.
pub const HAND_PREWASH_PRICE: f64 = 1.50;
/// Supplement for hand drying.
pub const HAND_DRY_PRICE: f64 = 1.20;
/// Supplement for waxing.
pub const WAX_PRICE: f64 = 1.00;

/// The price list a bay charges by.
///
/// The price of a cycle is the base plus one supplement per selected
/// option, computed once per cycle at the moment the cycle leaves
/// `Idle`. `Default` is the standard tariff.
///
/// # Example
///
/// ```rust
/// use washbay::{Tariff, WashOptions};
///
/// let tariff = Tariff::default();
/// let price = tariff.price_of(&WashOptions::full_service());
/// assert!((price - 8.70).abs() < 1e-9);
/// ```
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Tariff {
    /// Price of the tunnel wash itself.
    pub base: f64,
    /// Supplement for a hand prewash.
    pub hand_prewash: f64,
    /// Supplement for hand drying.
    pub hand_dry: f64,
    /// Supplement for waxing.
    pub wax: f64,
}

impl Default for Tariff {
    fn default() -> Self {
        Self {
            base: BASE_PRICE,
            hand_prewash: HAND_PREWASH_PRICE,
            hand_dry: HAND_DRY_PRICE,
            wax: WAX_PRICE,
        }
    }
}

impl Tariff {
    /// Deterministic price of a wash with the given options.
    pub fn price_of(&self, options: &WashOptions) -> f64 {
        let mut price = self.base;
        if options.prewash_by_hand {
            price += self.hand_prewash;
        }
        if options.dry_by_hand {
            price += self.hand_dry;
        }
        if options.wax {
            price += self.wax;
        }
        price
    }
}
