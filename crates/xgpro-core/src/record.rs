//! Component records, the file header, and the [`Document`] that ties them
//! together.
//!
//! All multi-byte integers are little-endian. Fixed sizes:
//!
//! ```text
//! file header     2064 bytes  checksum, magic, item count, reserved, 512 offsets
//! record header     44 bytes  vector count, name[32], voltage, pins, 2 reserved, reserved u32
//! vector            24 bytes  nibble-packed pin states
//! ```

use crate::checksum::compute_checksum;
use crate::error::{CodecError, ModelError};
use crate::vector::{TestVector, VECTOR_BYTES};

/// Value of the header's magic field.
pub const MAGIC: u32 = 0xABAB_ABEE;

/// Capacity of the offset table, and so the most records a file can hold.
pub const MAX_ITEMS: usize = 512;

/// Size of the fixed name slot.
pub const NAME_BYTES: usize = 32;

/// Size of the file header including the offset table.
pub const HEADER_SIZE: usize = 16 + 4 * MAX_ITEMS;

/// Size of a record header.
pub const RECORD_SIZE: usize = 44;

fn read_u32(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

/// Supply voltage of an IC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Voltage {
    V5_0 = 0,
    V3_3 = 1,
    V2_5 = 2,
    V1_8 = 3,
}

impl Voltage {
    pub const ALL: [Voltage; 4] = [Voltage::V5_0, Voltage::V3_3, Voltage::V2_5, Voltage::V1_8];

    /// The on-disk discriminant.
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Result<Self, CodecError> {
        match code {
            0 => Ok(Voltage::V5_0),
            1 => Ok(Voltage::V3_3),
            2 => Ok(Voltage::V2_5),
            3 => Ok(Voltage::V1_8),
            _ => Err(CodecError::InvalidVoltageCode { code }),
        }
    }

    /// Nominal supply in volts.
    pub const fn volts(self) -> f64 {
        match self {
            Voltage::V5_0 => 5.0,
            Voltage::V3_3 => 3.3,
            Voltage::V2_5 => 2.5,
            Voltage::V1_8 => 1.8,
        }
    }

    /// Map a decimal voltage to its level. Only the four nominal values are
    /// accepted.
    pub fn from_volts(vcc: f64) -> Result<Self, CodecError> {
        Self::ALL
            .into_iter()
            .find(|level| level.volts() == vcc)
            .ok_or(CodecError::InvalidVoltage { vcc })
    }

    /// Label used by the human-readable views, e.g. `5.0V`.
    pub const fn label(self) -> &'static str {
        match self {
            Voltage::V5_0 => "5.0V",
            Voltage::V3_3 => "3.3V",
            Voltage::V2_5 => "2.5V",
            Voltage::V1_8 => "1.8V",
        }
    }
}

/// The fixed 32-byte name slot of a record.
///
/// Names are written space-padded with a NUL at the name's length, so the
/// name must leave room for that terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemName([u8; NAME_BYTES]);

impl ItemName {
    pub fn new(name: &str) -> Result<Self, CodecError> {
        let bytes = name.as_bytes();
        if bytes.len() >= NAME_BYTES {
            return Err(CodecError::NameTooLong { len: bytes.len() });
        }
        let mut slot = [b' '; NAME_BYTES];
        slot[..bytes.len()].copy_from_slice(bytes);
        slot[bytes.len()] = 0;
        Ok(Self(slot))
    }

    /// Wrap a raw slot read from a file.
    pub const fn from_bytes(bytes: [u8; NAME_BYTES]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; NAME_BYTES] {
        &self.0
    }

    /// The name for display: non-printable bytes (including the NUL
    /// terminator) removed and surrounding spaces trimmed.
    pub fn display(&self) -> String {
        let text = String::from_utf8_lossy(&self.0);
        let printable: String = text.chars().filter(|c| !c.is_control()).collect();
        printable.trim_matches(' ').to_string()
    }
}

/// The 44-byte header preceding a record's vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentRecord {
    pub vector_count: u32,
    pub name: ItemName,
    pub voltage: Voltage,
    pub pin_count: u8,
    pub reserved0: u8,
    pub reserved1: u8,
    pub reserved2: u32,
}

impl ComponentRecord {
    /// A record header with zeroed reserved fields.
    pub fn new(name: ItemName, voltage: Voltage, pin_count: u8, vector_count: u32) -> Self {
        Self {
            vector_count,
            name,
            voltage,
            pin_count,
            reserved0: 0,
            reserved1: 0,
            reserved2: 0,
        }
    }

    pub fn to_bytes(&self) -> [u8; RECORD_SIZE] {
        let mut out = [0u8; RECORD_SIZE];
        out[0..4].copy_from_slice(&self.vector_count.to_le_bytes());
        out[4..36].copy_from_slice(self.name.as_bytes());
        out[36] = self.voltage.code();
        out[37] = self.pin_count;
        out[38] = self.reserved0;
        out[39] = self.reserved1;
        out[40..44].copy_from_slice(&self.reserved2.to_le_bytes());
        out
    }

    /// Decode a record header. Fails only on an unknown voltage code.
    pub fn from_bytes(bytes: &[u8; RECORD_SIZE]) -> Result<Self, CodecError> {
        let mut name = [0u8; NAME_BYTES];
        name.copy_from_slice(&bytes[4..36]);
        Ok(Self {
            vector_count: read_u32(bytes, 0),
            name: ItemName::from_bytes(name),
            voltage: Voltage::from_code(bytes[36])?,
            pin_count: bytes[37],
            reserved0: bytes[38],
            reserved1: bytes[39],
            reserved2: read_u32(bytes, 40),
        })
    }
}

/// A record header together with its vectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub record: ComponentRecord,
    pub vectors: Vec<TestVector>,
}

impl Entry {
    /// Build an entry whose vector count matches `vectors`.
    pub fn new(name: ItemName, voltage: Voltage, pin_count: u8, vectors: Vec<TestVector>) -> Self {
        let record = ComponentRecord::new(name, voltage, pin_count, vectors.len() as u32);
        Self { record, vectors }
    }

    pub fn pin_count(&self) -> usize {
        self.record.pin_count as usize
    }

    /// Bytes this entry occupies in a file.
    pub fn encoded_len(&self) -> usize {
        RECORD_SIZE + self.vectors.len() * VECTOR_BYTES
    }

    /// Vectors as symbol strings.
    pub fn vector_strings(&self) -> Vec<String> {
        let pins = self.pin_count();
        self.vectors.iter().map(|v| v.render(pins)).collect()
    }

    fn validate(&self, record: usize) -> Result<(), ModelError> {
        TestVector::check_pin_count(self.pin_count())
            .map_err(|source| ModelError::Record { record, source })?;

        if self.record.vector_count as usize != self.vectors.len() {
            return Err(ModelError::VectorCountMismatch {
                record,
                declared: self.record.vector_count,
                actual: self.vectors.len(),
            });
        }

        for (vector, v) in self.vectors.iter().enumerate() {
            v.unpack(self.pin_count()).map_err(|source| ModelError::Vector {
                record,
                vector,
                source,
            })?;
        }
        Ok(())
    }
}

/// The fixed 512-slot table of record offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffsetTable([u32; MAX_ITEMS]);

impl Default for OffsetTable {
    fn default() -> Self {
        Self([0; MAX_ITEMS])
    }
}

impl OffsetTable {
    pub const fn from_array(offsets: [u32; MAX_ITEMS]) -> Self {
        Self(offsets)
    }

    /// Offsets produced by laying `entries` out back to back after the header.
    pub fn sequential(entries: &[Entry]) -> Result<Self, ModelError> {
        if entries.len() > MAX_ITEMS {
            return Err(ModelError::TooManyRecords {
                count: entries.len(),
            });
        }
        let mut table = Self::default();
        let mut cursor = HEADER_SIZE;
        for (record, entry) in entries.iter().enumerate() {
            table.0[record] =
                u32::try_from(cursor).map_err(|_| ModelError::OffsetOverflow { record })?;
            cursor += entry.encoded_len();
        }
        Ok(table)
    }

    /// Offset of record `index`, or `None` past the table's capacity.
    pub fn get(&self, index: usize) -> Option<u32> {
        self.0.get(index).copied()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    /// Whether the first `count` offsets are strictly increasing.
    pub fn is_increasing(&self, count: usize) -> bool {
        self.0[..count.min(MAX_ITEMS)]
            .windows(2)
            .all(|w| w[0] < w[1])
    }
}

/// The file header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHeader {
    pub checksum: u32,
    pub magic: u32,
    pub item_count: u32,
    pub reserved: u32,
    pub offsets: OffsetTable,
}

impl FileHeader {
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_SIZE);
        for word in [self.checksum, self.magic, self.item_count, self.reserved] {
            out.extend_from_slice(&word.to_le_bytes());
        }
        for offset in self.offsets.as_slice() {
            out.extend_from_slice(&offset.to_le_bytes());
        }
        out
    }

    /// Decode a header. Nothing is validated here.
    pub fn from_bytes(bytes: &[u8; HEADER_SIZE]) -> Self {
        let mut offsets = [0u32; MAX_ITEMS];
        for (i, slot) in offsets.iter_mut().enumerate() {
            *slot = read_u32(bytes, 16 + 4 * i);
        }
        Self {
            checksum: read_u32(bytes, 0),
            magic: read_u32(bytes, 4),
            item_count: read_u32(bytes, 8),
            reserved: read_u32(bytes, 12),
            offsets: OffsetTable::from_array(offsets),
        }
    }
}

/// A complete logic test file.
///
/// Built once, either from records via [`Document::new`] or from a decoded
/// header via [`Document::from_parts`], and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    header: FileHeader,
    entries: Vec<Entry>,
}

impl Document {
    /// Build a document, computing the checksum and the offset table.
    pub fn new(entries: Vec<Entry>) -> Result<Self, ModelError> {
        let offsets = OffsetTable::sequential(&entries)?;
        validate_entries(&entries)?;
        let header = FileHeader {
            checksum: compute_checksum(&entries),
            magic: MAGIC,
            item_count: entries.len() as u32,
            reserved: 0,
            offsets,
        };
        Ok(Self { header, entries })
    }

    /// Assemble a document from a header as read from a file.
    ///
    /// The header's checksum, magic, and offsets are kept verbatim.
    pub fn from_parts(header: FileHeader, entries: Vec<Entry>) -> Result<Self, ModelError> {
        if header.item_count as usize > MAX_ITEMS {
            return Err(ModelError::TooManyRecords {
                count: header.item_count as usize,
            });
        }
        if header.item_count as usize != entries.len() {
            return Err(ModelError::ItemCountMismatch {
                declared: header.item_count,
                actual: entries.len(),
            });
        }
        validate_entries(&entries)?;
        Ok(Self { header, entries })
    }

    pub fn header(&self) -> &FileHeader {
        &self.header
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn entry(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Checksum stored in the header.
    pub fn checksum(&self) -> u32 {
        self.header.checksum
    }

    /// Total encoded size in bytes.
    pub fn encoded_len(&self) -> usize {
        HEADER_SIZE + self.entries.iter().map(Entry::encoded_len).sum::<usize>()
    }

    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }
}

fn validate_entries(entries: &[Entry]) -> Result<(), ModelError> {
    if entries.len() > MAX_ITEMS {
        return Err(ModelError::TooManyRecords {
            count: entries.len(),
        });
    }
    entries
        .iter()
        .enumerate()
        .try_for_each(|(index, entry)| entry.validate(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, vectors: &[&str]) -> Entry {
        let vectors = vectors
            .iter()
            .map(|v| TestVector::parse(v, 4).unwrap())
            .collect();
        Entry::new(ItemName::new(name).unwrap(), Voltage::V5_0, 4, vectors)
    }

    #[test]
    fn header_size_matches_layout() {
        assert_eq!(HEADER_SIZE, 2064);
    }

    #[test]
    fn name_is_padded_and_terminated() {
        let name = ItemName::new("74LS08").unwrap();
        let bytes = name.as_bytes();
        assert_eq!(&bytes[..6], b"74LS08");
        assert_eq!(bytes[6], 0);
        assert!(bytes[7..].iter().all(|b| *b == b' '));
        assert_eq!(name.display(), "74LS08");
    }

    #[test]
    fn name_length_boundary() {
        assert!(ItemName::new(&"A".repeat(31)).is_ok());
        assert_eq!(
            ItemName::new(&"A".repeat(32)),
            Err(CodecError::NameTooLong { len: 32 })
        );
    }

    #[test]
    fn display_strips_nul_and_control_bytes() {
        let mut raw = [0u8; NAME_BYTES];
        raw[..9].copy_from_slice(b"  7400\x01 \x00");
        assert_eq!(ItemName::from_bytes(raw).display(), "7400");
    }

    #[test]
    fn voltage_table() {
        for level in Voltage::ALL {
            assert_eq!(Voltage::from_code(level.code()).unwrap(), level);
            assert_eq!(Voltage::from_volts(level.volts()).unwrap(), level);
        }
        assert_eq!(Voltage::from_volts(3.3).unwrap(), Voltage::V3_3);
        assert_eq!(Voltage::V1_8.label(), "1.8V");
        assert!(matches!(
            Voltage::from_volts(12.0),
            Err(CodecError::InvalidVoltage { .. })
        ));
        assert_eq!(
            Voltage::from_code(4),
            Err(CodecError::InvalidVoltageCode { code: 4 })
        );
    }

    #[test]
    fn record_header_layout() {
        let mut record = ComponentRecord::new(ItemName::new("7400").unwrap(), Voltage::V3_3, 14, 7);
        record.reserved0 = 0xAA;
        record.reserved2 = 0x0102_0304;
        let bytes = record.to_bytes();
        assert_eq!(&bytes[0..4], &[7, 0, 0, 0]);
        assert_eq!(&bytes[4..8], b"7400");
        assert_eq!(bytes[36], 1);
        assert_eq!(bytes[37], 14);
        assert_eq!(bytes[38], 0xAA);
        assert_eq!(bytes[39], 0);
        assert_eq!(&bytes[40..44], &[4, 3, 2, 1]);
        assert_eq!(ComponentRecord::from_bytes(&bytes).unwrap(), record);
    }

    #[test]
    fn record_with_unknown_voltage_rejected() {
        let mut bytes = ComponentRecord::new(ItemName::new("x").unwrap(), Voltage::V5_0, 2, 0)
            .to_bytes();
        bytes[36] = 255;
        assert_eq!(
            ComponentRecord::from_bytes(&bytes),
            Err(CodecError::InvalidVoltageCode { code: 255 })
        );
    }

    #[test]
    fn new_document_lays_out_offsets() {
        let doc = Document::new(vec![entry("a", &["0101", "1L0H"]), entry("b", &[])]).unwrap();
        let header = doc.header();
        assert_eq!(header.magic, MAGIC);
        assert_eq!(header.item_count, 2);
        assert_eq!(header.offsets.get(0), Some(HEADER_SIZE as u32));
        assert_eq!(
            header.offsets.get(1),
            Some((HEADER_SIZE + RECORD_SIZE + 2 * VECTOR_BYTES) as u32)
        );
        assert!(header.offsets.as_slice()[2..].iter().all(|o| *o == 0));
        assert!(header.offsets.is_increasing(2));
        assert_eq!(doc.checksum(), compute_checksum(doc.entries()));
        assert_eq!(doc.encoded_len(), HEADER_SIZE + 2 * RECORD_SIZE + 2 * VECTOR_BYTES);
    }

    #[test]
    fn capacity_boundary() {
        let full: Vec<Entry> = (0..MAX_ITEMS).map(|i| entry(&i.to_string(), &[])).collect();
        assert_eq!(Document::new(full.clone()).unwrap().len(), MAX_ITEMS);

        let mut over = full;
        over.push(entry("extra", &[]));
        assert_eq!(
            Document::new(over),
            Err(ModelError::TooManyRecords { count: 513 })
        );
    }

    #[test]
    fn vector_count_must_match() {
        let mut e = entry("a", &["0101"]);
        e.record.vector_count = 3;
        assert_eq!(
            Document::new(vec![e]),
            Err(ModelError::VectorCountMismatch {
                record: 0,
                declared: 3,
                actual: 1
            })
        );
    }

    #[test]
    fn invalid_pin_code_located() {
        let mut bytes = [0u8; VECTOR_BYTES];
        bytes[0] = 0x90;
        let mut e = entry("a", &["0101"]);
        e.vectors.push(TestVector::from_bytes(bytes));
        e.record.vector_count = 2;
        let err = Document::new(vec![entry("ok", &[]), e]).unwrap_err();
        assert!(matches!(
            err,
            ModelError::Vector {
                record: 1,
                vector: 1,
                source: CodecError::Pin { position: 1, .. }
            }
        ));
    }

    #[test]
    fn odd_pin_count_rejected() {
        let e = Entry::new(ItemName::new("a").unwrap(), Voltage::V5_0, 3, vec![]);
        assert_eq!(
            Document::new(vec![e]),
            Err(ModelError::Record {
                record: 0,
                source: CodecError::PinCount { pin_count: 3 }
            })
        );
    }

    #[test]
    fn from_parts_checks_item_count() {
        let doc = Document::new(vec![entry("a", &[])]).unwrap();
        let mut header = doc.header().clone();
        header.item_count = 2;
        assert_eq!(
            Document::from_parts(header, doc.into_entries()),
            Err(ModelError::ItemCountMismatch {
                declared: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn header_bytes_round_trip() {
        let doc = Document::new(vec![entry("a", &["0101"])]).unwrap();
        let bytes = doc.header().to_bytes();
        assert_eq!(bytes.len(), HEADER_SIZE);
        assert_eq!(&bytes[4..8], &MAGIC.to_le_bytes());
        let array: [u8; HEADER_SIZE] = bytes.as_slice().try_into().unwrap();
        assert_eq!(&FileHeader::from_bytes(&array), doc.header());
    }
}
