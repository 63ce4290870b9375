//! Filesystem entry points.

use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::info;
use xgpro_core::Document;

use crate::error::{IoStage, LgcError};
use crate::format::{decode_with, encode, LoadMode};
use crate::reader::RecordReader;

/// Load an LGC file.
pub fn read_file(path: &Path, mode: LoadMode) -> Result<Document, LgcError> {
    let mut file = File::open(path).map_err(|e| LgcError::io(path, IoStage::Open, e))?;
    let mut data = Vec::new();
    file.read_to_end(&mut data)
        .map_err(|e| LgcError::io(path, IoStage::Read, e))?;

    let doc = decode_with(&data, mode)?;
    info!(
        path = %path.display(),
        items = doc.len(),
        ?mode,
        "loaded LGC file"
    );
    Ok(doc)
}

/// Open an LGC file for random access to its records.
pub fn open_reader(path: &Path) -> Result<RecordReader<BufReader<File>>, LgcError> {
    let file = File::open(path).map_err(|e| LgcError::io(path, IoStage::Open, e))?;
    RecordReader::new(BufReader::new(file))
}

/// Write a document to `path`.
///
/// The bytes go to a temporary file next to `path`, which replaces `path`
/// only once everything has been written and synced. On failure the
/// destination is left untouched.
pub fn write_file(path: &Path, doc: &Document) -> Result<(), LgcError> {
    let bytes = encode(doc)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| LgcError::io(path, IoStage::Create, e))?;
    tmp.write_all(&bytes)
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| LgcError::io(path, IoStage::Write, e))?;
    tmp.persist(path)
        .map_err(|e| LgcError::io(path, IoStage::Persist, e.error))?;

    info!(
        path = %path.display(),
        items = doc.len(),
        bytes = bytes.len(),
        "wrote LGC file"
    );
    Ok(())
}
