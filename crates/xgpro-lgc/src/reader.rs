//! Offset-table-driven access to individual records.

use std::io::{self, Read, Seek, SeekFrom};

use tracing::debug;
use xgpro_core::{
    ComponentRecord, Entry, FileHeader, TestVector, HEADER_SIZE, MAX_ITEMS, RECORD_SIZE,
    VECTOR_BYTES,
};

use crate::error::LgcError;

/// Reads the header of an LGC source once, then individual records on
/// demand by seeking to their offset.
#[derive(Debug)]
pub struct RecordReader<R> {
    inner: R,
    header: FileHeader,
}

impl<R: Read + Seek> RecordReader<R> {
    /// Read and check the fixed-size header.
    ///
    /// Fails with [`LgcError::InvalidLayout`] if the header is incomplete or
    /// declares more records than the offset table holds.
    pub fn new(mut inner: R) -> Result<Self, LgcError> {
        inner.seek(SeekFrom::Start(0))?;
        let mut buf = [0u8; HEADER_SIZE];
        read_exact_or(&mut inner, &mut buf, || LgcError::InvalidLayout {
            reason: format!("file is shorter than the {HEADER_SIZE}-byte header"),
        })?;

        let header = FileHeader::from_bytes(&buf);
        if header.item_count as usize > MAX_ITEMS {
            return Err(LgcError::too_many_items(header.item_count));
        }
        debug!(
            items = header.item_count,
            checksum = header.checksum,
            "read LGC header"
        );
        Ok(Self { inner, header })
    }

    pub fn header(&self) -> &FileHeader {
        &self.header
    }

    /// Number of records the header declares.
    pub fn len(&self) -> usize {
        self.header.item_count as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read record `index` and its vectors.
    pub fn entry(&mut self, index: usize) -> Result<Entry, LgcError> {
        if index >= self.len() {
            return Err(LgcError::InvalidLayout {
                reason: format!("record {index} out of range (file holds {})", self.len()),
            });
        }
        let start = u64::from(self.header.offsets.as_slice()[index]);
        self.inner.seek(SeekFrom::Start(start))?;

        let mut buf = [0u8; RECORD_SIZE];
        read_exact_or(&mut self.inner, &mut buf, || LgcError::Truncated {
            record: index,
            vector: None,
            offset: start,
        })?;
        let record = ComponentRecord::from_bytes(&buf).map_err(|_| LgcError::InvalidVoltage {
            record: index,
            code: buf[36],
            offset: start + 36,
        })?;
        let pin_count = record.pin_count as usize;
        if TestVector::check_pin_count(pin_count).is_err() {
            return Err(LgcError::InvalidPinCount {
                record: index,
                pin_count: record.pin_count,
            });
        }

        let mut vectors = Vec::new();
        for vector in 0..record.vector_count as usize {
            let offset = start + (RECORD_SIZE + vector * VECTOR_BYTES) as u64;
            let mut bytes = [0u8; VECTOR_BYTES];
            read_exact_or(&mut self.inner, &mut bytes, || LgcError::Truncated {
                record: index,
                vector: Some(vector),
                offset,
            })?;
            let packed = TestVector::from_bytes(bytes);
            if let Some((position, code)) = packed.first_invalid(pin_count) {
                return Err(LgcError::InvalidPinState {
                    record: index,
                    vector,
                    position,
                    code,
                });
            }
            vectors.push(packed);
        }

        debug!(
            record = index,
            offset = start,
            name = %record.name.display(),
            pins = record.pin_count,
            vectors = vectors.len(),
            "read LGC record"
        );
        Ok(Entry { record, vectors })
    }

    /// Read every record in table order.
    pub fn entries(&mut self) -> Result<Vec<Entry>, LgcError> {
        (0..self.len()).map(|index| self.entry(index)).collect()
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

/// `read_exact`, mapping end-of-input to the error built by `eof`.
fn read_exact_or<R: Read>(
    reader: &mut R,
    buf: &mut [u8],
    eof: impl FnOnce() -> LgcError,
) -> Result<(), LgcError> {
    match reader.read_exact(buf) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Err(eof()),
        Err(e) => Err(e.into()),
    }
}
