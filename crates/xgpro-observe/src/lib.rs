//! Human-readable views of LGC documents.
//!
//! Provides the dump listing plus the TOML, JSON, and XML renderings the
//! vendor software and the source files use.

pub mod dump;
pub mod error;
pub mod markup;
pub mod structured;
pub mod view;

pub use error::ObserveError;
pub use view::{available_views, render, ViewKind};
