//! Binary LGC file format for XGecu logic IC test definitions.
//!
//! Reads and writes the fixed-layout files consumed by the TL866II/T48
//! programmer software.
//!
//! ## File Layout
//!
//! ```text
//! LGC File Layout (little-endian):
//! ┌──────────────────────────────────┐
//! │ checksum: u32 (CRC-32)           │  offset 0
//! │ magic: u32 (0xABABABEE)          │  offset 4
//! │ item_count: u32                  │  offset 8
//! │ reserved: u32                    │  offset 12
//! │ offsets: [u32; 512]              │  offset 16
//! ├──────────────────────────────────┤  2064 bytes
//! │ Record (at offsets[i])           │
//! │   vector_count: u32              │
//! │   name: [u8; 32]                 │
//! │   voltage: u8                    │
//! │   pin_count: u8                  │
//! │   reserved: u8, u8, u32          │  44 bytes
//! │   vectors: [[u8; 24]; count]     │
//! ├──────────────────────────────────┤
//! │ ... further records              │
//! └──────────────────────────────────┘
//! ```
//!
//! The checksum is a CRC-32 over every record header and vector in file
//! order. By default it is recomputed on load and on write but never
//! compared; [`LoadMode::Strict`] turns the comparison on.

mod error;
mod file;
mod format;
mod reader;

pub use error::{IoStage, LgcError};
pub use file::{open_reader, read_file, write_file};
pub use format::{decode, decode_with, encode, read_from, write_to, LoadMode};
pub use reader::RecordReader;
