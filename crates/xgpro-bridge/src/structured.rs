//! The structured record shape shared by the TOML and JSON sources and the
//! text views.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Top-level structured document: `{ "ics": [...] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StructuredFile {
    #[serde(default)]
    pub ics: Vec<StructuredIc>,
}

/// One IC in structured form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredIc {
    pub name: String,
    pub pins: u32,
    /// Supply voltage in volts.
    pub vcc: f64,
    /// One symbol string per test vector, e.g. `"01LH"`.
    #[serde(default)]
    pub vectors: Vec<String>,
}

impl StructuredFile {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Parse `text` in the given source format.
    pub fn parse(text: &str, format: SourceFormat) -> Result<Self> {
        match format {
            SourceFormat::Toml => Self::from_toml_str(text),
            SourceFormat::Json => Self::from_json_str(text),
        }
    }
}

/// Text formats a document can be created from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    Toml,
    Json,
}

impl SourceFormat {
    /// Parse a format name (`toml` or `json`).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "toml" => Some(SourceFormat::Toml),
            "json" => Some(SourceFormat::Json),
            _ => None,
        }
    }

    /// Infer the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::parse)
    }

    pub fn name(&self) -> &'static str {
        match self {
            SourceFormat::Toml => "toml",
            SourceFormat::Json => "json",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_toml_source() {
        let text = r#"
[[ics]]
name = "74LS08"
pins = 4
vcc = 5.0
vectors = [
    "0101",
    "1L0H",
]

[[ics]]
name = "7404"
pins = 2
vcc = 3.3
vectors = ["0H"]
"#;
        let file = StructuredFile::from_toml_str(text).unwrap();
        assert_eq!(file.ics.len(), 2);
        assert_eq!(file.ics[0].name, "74LS08");
        assert_eq!(file.ics[0].vectors, vec!["0101", "1L0H"]);
        assert_eq!(file.ics[1].vcc, 3.3);
    }

    #[test]
    fn parse_json_source() {
        let text = r#"{ "ics": [{ "name": "7400", "pins": 2, "vcc": 5, "vectors": ["1L"] }] }"#;
        let file = StructuredFile::parse(text, SourceFormat::Json).unwrap();
        assert_eq!(file.ics[0].vcc, 5.0);
        assert_eq!(file.ics[0].pins, 2);
    }

    #[test]
    fn missing_vectors_default_to_empty() {
        let file = StructuredFile::from_toml_str("[[ics]]\nname = \"x\"\npins = 2\nvcc = 1.8\n").unwrap();
        assert!(file.ics[0].vectors.is_empty());
    }

    #[test]
    fn malformed_sources_rejected() {
        assert!(StructuredFile::from_toml_str("[[ics]]\nname = 3").is_err());
        assert!(StructuredFile::from_json_str("{ \"ics\": [ }").is_err());
    }

    #[test]
    fn format_from_name_and_path() {
        assert_eq!(SourceFormat::parse("TOML"), Some(SourceFormat::Toml));
        assert_eq!(SourceFormat::parse("json"), Some(SourceFormat::Json));
        assert_eq!(SourceFormat::parse("xml"), None);
        assert_eq!(
            SourceFormat::from_path(Path::new("chips/logic.json")),
            Some(SourceFormat::Json)
        );
        assert_eq!(SourceFormat::from_path(Path::new("logic")), None);
    }
}
