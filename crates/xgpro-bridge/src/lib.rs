//! Structured (TOML/JSON) form of LGC documents.
//!
//! Sources list ICs as `{ name, pins, vcc, vectors }` records under a
//! top-level `ics` key. This crate parses such sources, validates them into
//! a [`xgpro_core::Document`], and projects documents back into the same
//! shape for the text views.

pub mod convert;
pub mod error;
pub mod structured;

pub use convert::{from_structured, load_structured, to_structured};
pub use error::BridgeError;
pub use structured::{SourceFormat, StructuredFile, StructuredIc};
