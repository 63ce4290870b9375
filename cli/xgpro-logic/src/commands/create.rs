//! `xgpro-logic lgc` — build an LGC file from a TOML or JSON source.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;
use xgpro_bridge::{load_structured, SourceFormat};

/// Convert `input` (in `format`) into an LGC file at `output`.
pub fn run(input: &Path, output: &Path, format: SourceFormat) -> Result<()> {
    let text = fs::read_to_string(input)
        .with_context(|| format!("reading {}", input.display()))?;
    let doc = load_structured(&text, format)
        .with_context(|| format!("converting {} ({})", input.display(), format.name()))?;

    xgpro_lgc::write_file(output, &doc)
        .with_context(|| format!("writing {}", output.display()))?;

    info!(
        input = %input.display(),
        output = %output.display(),
        items = doc.len(),
        "created LGC file"
    );
    println!(
        "Wrote {} ({} ICs, checksum 0x{:08X})",
        output.display(),
        doc.len(),
        doc.checksum()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use xgpro_lgc::LoadMode;

    #[test]
    fn create_from_toml() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("logic.toml");
        let output = dir.path().join("logic.lgc");
        fs::write(
            &input,
            "[[ics]]\nname = \"74LS08\"\npins = 4\nvcc = 5.0\nvectors = [\"0101\", \"1L0H\"]\n",
        )
        .unwrap();

        run(&input, &output, SourceFormat::Toml).unwrap();

        let doc = xgpro_lgc::read_file(&output, LoadMode::Strict).unwrap();
        let record = &doc.entries()[0].record;
        assert_eq!(record.name.display(), "74LS08");
        assert_eq!(record.vector_count, 2);
    }

    #[test]
    fn create_from_json() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("logic.json");
        let output = dir.path().join("logic.lgc");
        fs::write(
            &input,
            r#"{ "ics": [ { "name": "7404", "pins": 2, "vcc": 3.3, "vectors": ["0H", "1L"] } ] }"#,
        )
        .unwrap();

        run(&input, &output, SourceFormat::Json).unwrap();
        let doc = xgpro_lgc::read_file(&output, LoadMode::Strict).unwrap();
        assert_eq!(doc.entries()[0].vector_strings(), vec!["0H", "1L"]);
    }

    #[test]
    fn invalid_source_leaves_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("logic.toml");
        let output = dir.path().join("logic.lgc");
        fs::write(
            &input,
            "[[ics]]\nname = \"bad\"\npins = 4\nvcc = 5.0\nvectors = [\"010\"]\n",
        )
        .unwrap();

        let err = run(&input, &output, SourceFormat::Toml).unwrap_err();
        assert!(format!("{err:#}").contains("ic 0 vector 0"));
        assert!(!output.exists());
    }
}
