//! Errors raised while building or validating the in-memory model.

use thiserror::Error;

use crate::record::{MAX_ITEMS, NAME_BYTES};
use crate::vector::MAX_PINS;

/// A single pin could not be mapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PinError {
    #[error("invalid pin symbol {0:?} (expected one of 0 1 L H C Z X G V)")]
    InvalidSymbol(char),

    #[error("invalid pin state code {0} (expected 0..=8)")]
    InvalidCode(u8),
}

/// Field-level encoding errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CodecError {
    #[error("pin {position}: {source}")]
    Pin {
        position: usize,
        #[source]
        source: PinError,
    },

    #[error("pin count {pin_count} is invalid: must be even and at most {}", MAX_PINS)]
    PinCount { pin_count: usize },

    #[error("vector has {actual} pins, expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("name is {len} bytes long; at most {} bytes fit", NAME_BYTES - 1)]
    NameTooLong { len: usize },

    #[error("invalid voltage code {code} (expected 0..=3)")]
    InvalidVoltageCode { code: u8 },

    #[error("unsupported supply voltage {vcc} (expected 5.0, 3.3, 2.5 or 1.8)")]
    InvalidVoltage { vcc: f64 },
}

/// Document-level errors, located by record and vector index.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("document holds {count} records; the offset table has room for {}", MAX_ITEMS)]
    TooManyRecords { count: usize },

    #[error("header declares {declared} records but {actual} are present")]
    ItemCountMismatch { declared: u32, actual: usize },

    #[error("record {record}: header declares {declared} vectors but {actual} are present")]
    VectorCountMismatch {
        record: usize,
        declared: u32,
        actual: usize,
    },

    #[error("record {record} does not fit in a 32-bit file offset")]
    OffsetOverflow { record: usize },

    #[error("record {record}: {source}")]
    Record {
        record: usize,
        #[source]
        source: CodecError,
    },

    #[error("record {record} vector {vector}: {source}")]
    Vector {
        record: usize,
        vector: usize,
        #[source]
        source: CodecError,
    },
}
