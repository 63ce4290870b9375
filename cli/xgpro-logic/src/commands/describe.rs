//! `xgpro-logic describe` — print an LGC file in a human-readable form.

use std::path::Path;

use anyhow::{Context, Result};
use xgpro_lgc::LoadMode;
use xgpro_observe::ViewKind;

/// Load `path` and render it as `view`.
pub fn render_file(path: &Path, view: ViewKind, mode: LoadMode) -> Result<String> {
    let doc = xgpro_lgc::read_file(path, mode)
        .with_context(|| format!("loading {}", path.display()))?;
    let text = xgpro_observe::render(&doc, view)
        .with_context(|| format!("rendering {} view", view.name()))?;
    Ok(text)
}

/// Print `path` to stdout as `view`.
pub fn run(path: &Path, view: ViewKind, mode: LoadMode) -> Result<()> {
    let text = render_file(path, view, mode)?;
    print!("{text}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use xgpro_bridge::{load_structured, SourceFormat};

    fn write_sample(dir: &Path) -> std::path::PathBuf {
        let doc = load_structured(
            "[[ics]]\nname = \"74LS08\"\npins = 4\nvcc = 5.0\nvectors = [\"0101\", \"1L0H\"]\n",
            SourceFormat::Toml,
        )
        .unwrap();
        let path = dir.join("logic.lgc");
        xgpro_lgc::write_file(&path, &doc).unwrap();
        path
    }

    #[test]
    fn describe_each_view() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_sample(dir.path());

        let dump = render_file(&path, ViewKind::Dump, LoadMode::Strict).unwrap();
        assert!(dump.contains("\t\t#001: 1 L 0 H"));

        let toml = render_file(&path, ViewKind::Toml, LoadMode::Permissive).unwrap();
        assert!(toml.contains("vcc = 5.0"));

        let json = render_file(&path, ViewKind::Json, LoadMode::Permissive).unwrap();
        assert!(json.contains("\"1L0H\""));

        let xml = render_file(&path, ViewKind::Xml, LoadMode::Permissive).unwrap();
        assert!(xml.contains("voltage=\"5.0V\""));
    }

    #[test]
    fn strict_mode_reports_bad_checksum() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_sample(dir.path());
        let mut bytes = std::fs::read(&path).unwrap();
        bytes[0] ^= 0xFF;
        std::fs::write(&path, bytes).unwrap();

        assert!(render_file(&path, ViewKind::Dump, LoadMode::Permissive).is_ok());
        let err = render_file(&path, ViewKind::Dump, LoadMode::Strict).unwrap_err();
        assert!(format!("{err:#}").contains("checksum mismatch"));
    }

    #[test]
    fn missing_file_mentions_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.lgc");
        let err = render_file(&path, ViewKind::Dump, LoadMode::Permissive).unwrap_err();
        assert!(format!("{err:#}").contains("missing.lgc"));
    }
}
