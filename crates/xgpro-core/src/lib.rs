//! Core data model for XGecu logic IC test files.
//!
//! A logic test file describes a set of integrated circuits. Each IC carries
//! a name, a pin count, a supply voltage, and a list of test vectors. Every
//! test vector assigns one of nine [`PinState`]s to each pin, packed two pins
//! per byte.
//!
//! This crate owns the pieces that do not depend on any container format:
//!
//! - [`pin`]: pin states and their symbol/nibble mappings
//! - [`vector`]: nibble packing of a test vector into its 24-byte slot
//! - [`record`]: component records, the file header, and [`Document`]
//! - [`checksum`]: the CRC-32 over all records and vectors

pub mod checksum;
pub mod error;
pub mod pin;
pub mod record;
pub mod vector;

pub use checksum::compute_checksum;
pub use error::{CodecError, ModelError, PinError};
pub use pin::PinState;
pub use record::{
    ComponentRecord, Document, Entry, FileHeader, ItemName, OffsetTable, Voltage, HEADER_SIZE,
    MAGIC, MAX_ITEMS, NAME_BYTES, RECORD_SIZE,
};
pub use vector::{TestVector, MAX_PINS, VECTOR_BYTES};
