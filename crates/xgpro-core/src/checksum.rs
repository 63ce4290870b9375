//! CRC-32 over the records and vectors of a document.

use crate::record::Entry;

/// CRC-32 (IEEE) over every record header followed by its vectors, in
/// document order. The file header itself is not covered.
pub fn compute_checksum(entries: &[Entry]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    for entry in entries {
        hasher.update(&entry.record.to_bytes());
        for vector in &entry.vectors {
            hasher.update(vector.as_bytes());
        }
    }
    hasher.finalize()
}
