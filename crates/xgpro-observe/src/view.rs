//! View selection and dispatch.

use xgpro_core::Document;

use crate::error::{ObserveError, Result};
use crate::{dump, markup, structured};

/// The kind of view to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    /// Indented listing of every entry and vector.
    Dump,
    Toml,
    Json,
    /// The vendor's `infoic` XML database format.
    Xml,
}

impl ViewKind {
    /// Parse a view kind from a string.
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "dump" | "text" => Ok(ViewKind::Dump),
            "toml" => Ok(ViewKind::Toml),
            "json" => Ok(ViewKind::Json),
            "xml" => Ok(ViewKind::Xml),
            _ => Err(ObserveError::UnknownView {
                name: s.to_string(),
            }),
        }
    }

    /// Display name for this view kind.
    pub fn name(&self) -> &'static str {
        match self {
            ViewKind::Dump => "dump",
            ViewKind::Toml => "toml",
            ViewKind::Json => "json",
            ViewKind::Xml => "xml",
        }
    }
}

/// Render `doc` as the requested view.
pub fn render(doc: &Document, kind: ViewKind) -> Result<String> {
    match kind {
        ViewKind::Dump => Ok(dump::render_dump(doc)),
        ViewKind::Toml => structured::render_toml(doc),
        ViewKind::Json => structured::render_json(doc),
        ViewKind::Xml => Ok(markup::render_xml(doc)),
    }
}

/// List all available view kinds.
pub fn available_views() -> &'static [ViewKind] {
    &[ViewKind::Dump, ViewKind::Toml, ViewKind::Json, ViewKind::Xml]
}
