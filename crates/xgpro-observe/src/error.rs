//! Errors from the view layer.

use thiserror::Error;

/// Convenience alias for results within the observe crate.
pub type Result<T> = std::result::Result<T, ObserveError>;

/// Errors that can occur during view rendering.
#[derive(Debug, Error)]
pub enum ObserveError {
    #[error("unknown view: '{name}'. Available views: dump, toml, json, xml")]
    UnknownView { name: String },

    #[error("TOML serialization error: {0}")]
    Toml(#[from] toml::ser::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
