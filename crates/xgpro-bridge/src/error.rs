//! Errors from translating structured sources into documents.

use thiserror::Error;
use xgpro_core::{CodecError, ModelError, MAX_ITEMS, MAX_PINS};

/// Convenience alias for results within the bridge crate.
pub type Result<T> = std::result::Result<T, BridgeError>;

/// Validation and parse failures, located by IC index (and vector index
/// where one applies).
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("ic {record}: name {name:?} is {len} bytes long; at most 31 bytes fit")]
    NameTooLong {
        record: usize,
        name: String,
        len: usize,
    },

    #[error("ic {record}: unsupported supply voltage {vcc} (expected 5.0, 3.3, 2.5 or 1.8)")]
    InvalidVoltage { record: usize, vcc: f64 },

    #[error("ic {record}{}: {detail}", vector_suffix(.vector))]
    VectorLength {
        record: usize,
        vector: Option<usize>,
        detail: String,
    },

    #[error("ic {record} vector {vector}: invalid pin symbol {symbol:?} at position {position}")]
    InvalidSymbol {
        record: usize,
        vector: usize,
        position: usize,
        symbol: char,
    },

    #[error("ic {record}: {pins} pins do not fit in a vector (at most {})", MAX_PINS)]
    PinCount { record: usize, pins: u32 },

    #[error("source lists {count} ICs; a file holds at most {}", MAX_ITEMS)]
    InvalidLayout { count: usize },

    #[error("ic {record}: {source}")]
    Codec {
        record: usize,
        #[source]
        source: CodecError,
    },

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

fn vector_suffix(vector: &Option<usize>) -> String {
    vector.map(|v| format!(" vector {v}")).unwrap_or_default()
}
