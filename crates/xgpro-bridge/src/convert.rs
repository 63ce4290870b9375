//! Translation between [`StructuredFile`] and [`Document`].

use tracing::debug;
use xgpro_core::{
    CodecError, Document, Entry, ItemName, PinError, TestVector, Voltage, MAX_ITEMS, MAX_PINS,
};

use crate::error::{BridgeError, Result};
use crate::structured::{StructuredFile, StructuredIc, SourceFormat};

/// Build a document from structured records.
///
/// Each IC is validated in order; the first failure aborts with its IC and
/// vector index. The checksum and offset table are computed on success.
pub fn from_structured(file: &StructuredFile) -> Result<Document> {
    if file.ics.len() > MAX_ITEMS {
        return Err(BridgeError::InvalidLayout {
            count: file.ics.len(),
        });
    }
    let entries = file
        .ics
        .iter()
        .enumerate()
        .map(|(record, ic)| ic_to_entry(record, ic))
        .collect::<Result<Vec<_>>>()?;
    let doc = Document::new(entries)?;
    debug!(items = doc.len(), checksum = doc.checksum(), "built document from structured source");
    Ok(doc)
}

/// Parse `text` and build a document from it.
pub fn load_structured(text: &str, format: SourceFormat) -> Result<Document> {
    from_structured(&StructuredFile::parse(text, format)?)
}

fn ic_to_entry(record: usize, ic: &StructuredIc) -> Result<Entry> {
    let name = ItemName::new(&ic.name).map_err(|_| BridgeError::NameTooLong {
        record,
        name: ic.name.clone(),
        len: ic.name.len(),
    })?;
    let voltage =
        Voltage::from_volts(ic.vcc).map_err(|_| BridgeError::InvalidVoltage { record, vcc: ic.vcc })?;

    if ic.pins % 2 != 0 {
        return Err(BridgeError::VectorLength {
            record,
            vector: None,
            detail: format!("pin count {} is odd; vectors hold pins in pairs", ic.pins),
        });
    }
    if ic.pins as usize > MAX_PINS {
        return Err(BridgeError::PinCount {
            record,
            pins: ic.pins,
        });
    }
    let pin_count = ic.pins as usize;

    let vectors = ic
        .vectors
        .iter()
        .enumerate()
        .map(|(vector, symbols)| {
            TestVector::parse(symbols, pin_count).map_err(|e| vector_error(record, vector, e))
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(record, name = %ic.name, pins = pin_count, vectors = vectors.len(), "converted ic");
    Ok(Entry::new(name, voltage, pin_count as u8, vectors))
}

fn vector_error(record: usize, vector: usize, err: CodecError) -> BridgeError {
    match err {
        CodecError::LengthMismatch { expected, actual } => BridgeError::VectorLength {
            record,
            vector: Some(vector),
            detail: format!("{actual} symbols for {expected} pins"),
        },
        CodecError::Pin {
            position,
            source: PinError::InvalidSymbol(symbol),
        } => BridgeError::InvalidSymbol {
            record,
            vector,
            position,
            symbol,
        },
        source => BridgeError::Codec { record, source },
    }
}

/// Project a document into structured records for the text views.
pub fn to_structured(doc: &Document) -> StructuredFile {
    let ics = doc
        .entries()
        .iter()
        .map(|entry| StructuredIc {
            name: entry.record.name.display(),
            pins: u32::from(entry.record.pin_count),
            vcc: entry.record.voltage.volts(),
            vectors: entry.vector_strings(),
        })
        .collect();
    StructuredFile { ics }
}
