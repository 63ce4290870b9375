//! TOML and JSON renderings, both built from the structured projection.

use xgpro_bridge::to_structured;
use xgpro_core::Document;

use crate::error::Result;

/// `[[ics]]` tables with `name`, `pins`, `vcc`, and `vectors`.
pub fn render_toml(doc: &Document) -> Result<String> {
    Ok(toml::to_string(&to_structured(doc))?)
}

/// `{ "ics": [...] }` with the same fields as the TOML view.
pub fn render_json(doc: &Document) -> Result<String> {
    let mut text = serde_json::to_string_pretty(&to_structured(doc))?;
    text.push('\n');
    Ok(text)
}
