// SPDX-License-Identifier: MIT
//
// Unified error types for Boletokit.

use thiserror::Error;

/// Top-level error type for all Boletokit operations.
///
/// Every failure in the encoding core is deterministic and caller-correctable:
/// there is no transient failure mode and therefore no retry machinery. A wrong
/// digit invalidates a real payment instrument, so malformed input always fails
/// loudly instead of being coerced, truncated, or padded.
#[derive(Debug, Error)]
pub enum BoletoError {
    // -- Checksum / encoding errors --
    #[error("invalid checksum input: {0}")]
    InvalidInput(String),

    #[error("field '{field}' must be exactly {expected} digits, got {actual}")]
    InvalidFieldWidth {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("amount of {0} centavos does not fit the 10-digit barcode field")]
    AmountOverflow(u64),

    #[error("due-date factor {0} is outside the 4-digit range 0..=9999")]
    DateOverflow(i64),

    #[error("barcode must be exactly 44 digits, got {0}")]
    InvalidBarcodeLength(usize),

    #[error("barcode check digit mismatch: expected {expected}, got {actual}")]
    CheckDigitMismatch { expected: u8, actual: u8 },

    // -- Document assembly errors --
    #[error("unknown bank code: {0}")]
    UnknownBank(String),

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    // -- Interchange --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, BoletoError>;
