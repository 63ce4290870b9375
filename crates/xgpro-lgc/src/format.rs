//! LGC binary encoding and decoding.
//!
//! Encoding buffers the body first so every record offset is known before
//! the header is emitted; the output is produced in a single forward pass.

use std::io::{Cursor, Read, Write};

use tracing::debug;
use xgpro_core::{
    compute_checksum, Document, FileHeader, ModelError, OffsetTable, HEADER_SIZE, MAGIC,
    MAX_ITEMS,
};

use crate::error::LgcError;
use crate::reader::RecordReader;

/// How much of a file's header to trust when loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadMode {
    /// Accept whatever magic and checksum the header carries, as the vendor
    /// software does.
    #[default]
    Permissive,
    /// Reject a wrong magic, a checksum that does not match the content, and
    /// offsets that are not strictly increasing.
    Strict,
}

impl LoadMode {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            LoadMode::Strict
        } else {
            LoadMode::Permissive
        }
    }
}

/// Serialize a document to bytes.
///
/// The checksum and offset table are recomputed from the entries; magic and
/// the reserved word are taken from the document's header.
pub fn encode(doc: &Document) -> Result<Vec<u8>, LgcError> {
    let mut body = Vec::with_capacity(doc.encoded_len() - HEADER_SIZE);
    let mut offsets = [0u32; MAX_ITEMS];

    for (record, entry) in doc.entries().iter().enumerate() {
        offsets[record] = u32::try_from(HEADER_SIZE + body.len())
            .map_err(|_| ModelError::OffsetOverflow { record })?;
        body.extend_from_slice(&entry.record.to_bytes());
        for vector in &entry.vectors {
            body.extend_from_slice(vector.as_bytes());
        }
    }

    let header = FileHeader {
        checksum: compute_checksum(doc.entries()),
        magic: doc.header().magic,
        item_count: doc.len() as u32,
        reserved: doc.header().reserved,
        offsets: OffsetTable::from_array(offsets),
    };
    debug!(
        items = header.item_count,
        checksum = header.checksum,
        bytes = HEADER_SIZE + body.len(),
        "encoded LGC document"
    );

    let mut out = header.to_bytes();
    out.extend_from_slice(&body);
    Ok(out)
}

/// Decode bytes in [`LoadMode::Permissive`].
pub fn decode(data: &[u8]) -> Result<Document, LgcError> {
    decode_with(data, LoadMode::Permissive)
}

/// Decode bytes with the given load mode.
pub fn decode_with(data: &[u8], mode: LoadMode) -> Result<Document, LgcError> {
    let mut reader = RecordReader::new(Cursor::new(data))?;
    let header = reader.header().clone();

    if mode == LoadMode::Strict {
        if header.magic != MAGIC {
            return Err(LgcError::InvalidMagic {
                found: header.magic,
            });
        }
        if !header.offsets.is_increasing(reader.len()) {
            return Err(LgcError::InvalidLayout {
                reason: "offset table is not strictly increasing".to_string(),
            });
        }
    }

    let entries = reader.entries()?;

    if mode == LoadMode::Strict {
        let computed = compute_checksum(&entries);
        if computed != header.checksum {
            return Err(LgcError::ChecksumMismatch {
                stored: header.checksum,
                computed,
            });
        }
    }

    Ok(Document::from_parts(header, entries)?)
}

/// Write a document to `writer` in LGC format.
pub fn write_to<W: Write>(doc: &Document, writer: &mut W) -> Result<(), LgcError> {
    let bytes = encode(doc)?;
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}

/// Read a whole LGC stream from `reader`.
pub fn read_from<R: Read>(reader: &mut R, mode: LoadMode) -> Result<Document, LgcError> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    decode_with(&data, mode)
}
