//! XML rendering in the vendor's `infoic` database format.

use std::fmt::Write;

use xgpro_core::Document;

/// Device attribute of the `<database>` element.
pub const DEVICE: &str = "TL866II";

/// Name attribute of the `<manufacturer>` element.
pub const MANUFACTURER: &str = "Logic Ic";

/// Render the document as an `infoic` XML database.
pub fn render_xml(doc: &Document) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    out.push_str("<infoic>\n");
    let _ = writeln!(out, "  <database device=\"{DEVICE}\">");
    let _ = writeln!(out, "    <manufacturer name=\"{MANUFACTURER}\">");

    for entry in doc.entries() {
        let record = &entry.record;
        let _ = writeln!(
            out,
            "      <ic name=\"{}\" pins=\"{}\" voltage=\"{}\" type=\"5\">",
            escape(&record.name.display()),
            record.pin_count,
            record.voltage.label()
        );
        for (id, vector) in entry.vectors.iter().enumerate() {
            let _ = write!(out, "        <vector id=\"{id:02}\">");
            for symbol in vector.render(entry.pin_count()).chars() {
                let _ = write!(out, " {symbol}");
            }
            out.push_str(" </vector>\n");
        }
        out.push_str("      </ic>\n");
    }

    out.push_str("    </manufacturer>\n");
    out.push_str("  </database>\n");
    out.push_str("</infoic>\n");
    out
}

/// Escape text for use inside a double-quoted attribute.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
