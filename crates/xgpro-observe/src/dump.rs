//! Plain-text dump of a document, one block per entry.

use std::fmt::Write;

use xgpro_core::Document;

/// Render the dump listing.
///
/// ```text
/// File contains 1 entries
/// Entry #0
///     Name:   74LS08
///     Pins:   4
///     VCC:    5.0V
///     Vectors: 2
///         #000: 0 1 0 1
/// ```
pub fn render_dump(doc: &Document) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "File contains {} entries", doc.len());

    for (index, entry) in doc.entries().iter().enumerate() {
        let record = &entry.record;
        let _ = writeln!(out, "Entry #{index}");
        let _ = writeln!(out, "\tName:\t{}", record.name.display());
        let _ = writeln!(out, "\tPins:\t{}", record.pin_count);
        let _ = writeln!(out, "\tVCC:\t{}", record.voltage.label());
        let _ = writeln!(out, "\tVectors: {}", record.vector_count);

        for (id, vector) in entry.vectors.iter().enumerate() {
            let pins: Vec<String> = vector
                .render(entry.pin_count())
                .chars()
                .map(String::from)
                .collect();
            let _ = writeln!(out, "\t\t#{id:03}: {}", pins.join(" "));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use xgpro_core::{Entry, ItemName, TestVector, Voltage};

    #[test]
    fn dump_lists_entries_and_vectors() {
        let entry = Entry::new(
            ItemName::new("74LS08").unwrap(),
            Voltage::V3_3,
            4,
            vec![
                TestVector::parse("0101", 4).unwrap(),
                TestVector::parse("1L0H", 4).unwrap(),
            ],
        );
        let doc = Document::new(vec![entry]).unwrap();
        let text = render_dump(&doc);

        assert!(text.starts_with("File contains 1 entries\nEntry #0\n"));
        assert!(text.contains("\tName:\t74LS08\n"));
        assert!(text.contains("\tPins:\t4\n"));
        assert!(text.contains("\tVCC:\t3.3V\n"));
        assert!(text.contains("\tVectors: 2\n"));
        assert!(text.contains("\t\t#000: 0 1 0 1\n"));
        assert!(text.contains("\t\t#001: 1 L 0 H\n"));
    }
}
