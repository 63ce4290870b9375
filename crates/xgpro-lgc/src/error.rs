//! Errors raised while reading or writing LGC files.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use xgpro_core::{ModelError, MAX_ITEMS};

/// The file operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoStage {
    Open,
    Read,
    Create,
    Write,
    Persist,
}

impl fmt::Display for IoStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stage = match self {
            IoStage::Open => "opening",
            IoStage::Read => "reading",
            IoStage::Create => "creating",
            IoStage::Write => "writing",
            IoStage::Persist => "persisting",
        };
        f.write_str(stage)
    }
}

/// Errors that can occur during LGC file operations.
#[derive(Debug, Error)]
pub enum LgcError {
    #[error("{stage} {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        stage: IoStage,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: {0}")]
    Stream(#[from] io::Error),

    #[error("invalid layout: {reason}")]
    InvalidLayout { reason: String },

    #[error("truncated file: {} starting at byte {offset} runs past the end of the input", location(.record, .vector))]
    Truncated {
        record: usize,
        vector: Option<usize>,
        offset: u64,
    },

    #[error("record {record}: invalid voltage code {code} at byte {offset}")]
    InvalidVoltage { record: usize, code: u8, offset: u64 },

    #[error("record {record}: pin count {pin_count} must be even and at most 48")]
    InvalidPinCount { record: usize, pin_count: u8 },

    #[error("record {record} vector {vector}: invalid pin state code {code} at pin {position}")]
    InvalidPinState {
        record: usize,
        vector: usize,
        position: usize,
        code: u8,
    },

    #[error("invalid magic 0x{found:08X}: expected 0xABABABEE")]
    InvalidMagic { found: u32 },

    #[error("checksum mismatch: header stores 0x{stored:08X}, content hashes to 0x{computed:08X}")]
    ChecksumMismatch { stored: u32, computed: u32 },

    #[error(transparent)]
    Model(#[from] ModelError),
}

impl LgcError {
    pub(crate) fn io(path: &Path, stage: IoStage, source: io::Error) -> Self {
        LgcError::Io {
            path: path.to_path_buf(),
            stage,
            source,
        }
    }

    pub(crate) fn too_many_items(count: u32) -> Self {
        LgcError::InvalidLayout {
            reason: format!("item count {count} exceeds the offset table capacity of {MAX_ITEMS}"),
        }
    }
}

fn location(record: &usize, vector: &Option<usize>) -> String {
    match vector {
        Some(vector) => format!("record {record} vector {vector}"),
        None => format!("record {record} header"),
    }
}
