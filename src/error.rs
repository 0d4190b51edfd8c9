//! Crate-level error type.

use thiserror::Error;

/// Errors surfaced by a wash bay.
///
/// `Busy` and `InvalidOptionCombo` are recoverable: the caller retries
/// once the bay is free, or corrects the selection. `CorruptState` is
/// not recoverable within the current cycle; it indicates tampering or a
/// defect, never a user-facing input problem.
#[derive(Debug, Error)]
pub enum WashError {
    /// A cycle is already in progress; only one car is serviced at a time.
    #[error("bay is busy: a wash cycle is already in progress")]
    Busy,

    /// Waxing was requested without hand drying.
    #[error("invalid option combination: waxing is only offered with hand drying")]
    InvalidOptionCombo,

    /// A phase code outside the wash cycle was observed.
    #[error("corrupt state: phase code {code} is not part of the wash cycle")]
    CorruptState {
        /// The offending raw code.
        code: u8,
    },
}
