//! Wash cycle phases.
//!
//! Phases carry the small numeric codes used on the operator panel. The
//! enum pins those codes so that a raw code can be decoded, and rejected
//! when it falls outside the cycle.

use crate::error::WashError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One discrete step of the wash cycle.
///
/// The codes identify the enumerated set and nothing more; transitions
/// are defined explicitly per phase by [`route`](crate::core::rules::route),
/// never by incrementing a code.
///
/// # Example
///
/// ```rust
/// use washbay::Phase;
///
/// assert_eq!(Phase::Rinsing.code(), 3);
/// assert_eq!(Phase::try_from(3).unwrap(), Phase::Rinsing);
/// assert!(Phase::try_from(42).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[repr(u8)]
pub enum Phase {
    /// No car in the bay, or a cycle that has not left the gate yet.
    Idle = 0,
    /// Payment is being collected.
    Charging = 1,
    /// Manual prewash before the tunnel.
    HandPrewash = 2,
    /// Rinsing the car down.
    Rinsing = 3,
    /// Applying soap.
    Soaping = 4,
    /// The rollers pass.
    Rollers = 5,
    /// Drying with the blowers.
    AutoDrying = 6,
    /// Drying by hand.
    HandDrying = 7,
    /// Waxing after a hand dry. Sold via [`WashOptions::wax`], but never
    /// entered by the current routing table (see
    /// [`route`](crate::core::rules::route)).
    ///
    /// [`WashOptions::wax`]: crate::core::options::WashOptions::wax
    Waxing = 8,
}

impl Phase {
    /// Every phase of the cycle, in code order.
    pub const ALL: [Phase; 9] = [
        Phase::Idle,
        Phase::Charging,
        Phase::HandPrewash,
        Phase::Rinsing,
        Phase::Soaping,
        Phase::Rollers,
        Phase::AutoDrying,
        Phase::HandDrying,
        Phase::Waxing,
    ];

    /// The phase's numeric code.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// The phase's name for display and logging.
    pub const fn name(self) -> &'static str {
        match self {
            Phase::Idle => "Idle",
            Phase::Charging => "Charging",
            Phase::HandPrewash => "HandPrewash",
            Phase::Rinsing => "Rinsing",
            Phase::Soaping => "Soaping",
            Phase::Rollers => "Rollers",
            Phase::AutoDrying => "AutoDrying",
            Phase::HandDrying => "HandDrying",
            Phase::Waxing => "Waxing",
        }
    }

    /// Whether the next advance out of this phase ends the cycle.
    pub const fn is_final(self) -> bool {
        matches!(self, Phase::AutoDrying | Phase::HandDrying | Phase::Waxing)
    }
}

impl TryFrom<u8> for Phase {
    type Error = WashError;

    /// Decode a raw phase code.
    ///
    /// # Errors
    ///
    /// Returns [`WashError::CorruptState`] for any code outside the cycle.
    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Phase::Idle),
            1 => Ok(Phase::Charging),
            2 => Ok(Phase::HandPrewash),
            3 => Ok(Phase::Rinsing),
            4 => Ok(Phase::Soaping),
            5 => Ok(Phase::Rollers),
            6 => Ok(Phase::AutoDrying),
            7 => Ok(Phase::HandDrying),
            8 => Ok(Phase::Waxing),
            _ => Err(WashError::CorruptState { code }),
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Phase::Idle => "Idle",
            Phase::Charging => "Charging",
            Phase::HandPrewash => "Hand prewash",
            Phase::Rinsing => "Rinsing",
            Phase::Soaping => "Soaping",
            Phase::Rollers => "Rollers",
            Phase::AutoDrying => "Automatic drying",
            Phase::HandDrying => "Hand drying",
            Phase::Waxing => "Waxing",
        };
        f.write_str(label)
    }
}

/// Render a raw phase code as `"<code> - <label>"`.
///
/// Codes outside the cycle render as `"<code> - invalid state"`. The
/// fallback stays even though [`Phase`] is exhaustive: raw codes reach
/// display paths from outside the type system, and a corrupted one must
/// render rather than panic.
///
/// # Example
///
/// ```rust
/// use washbay::describe_code;
///
/// assert_eq!(describe_code(3), "3 - Rinsing");
/// assert_eq!(describe_code(42), "42 - invalid state");
/// ```
pub fn describe_code(code: u8) -> String {
    match Phase::try_from(code) {
        Ok(phase) => format!("{code} - {phase}"),
        Err(_) => format!("{code} - invalid state"),
    }
}
