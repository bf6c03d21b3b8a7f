//! Hex dump rendering for raw response bodies.

use std::fmt::Write;

const ROW_WIDTH: usize = 16;

/// Renders `bytes` as a classic hex dump, 16 bytes per row:
///
/// ```text
/// 00000000  48 65 6C 6C 6F 20 77 6F  72 6C 64 0A                |Hello world.|
/// ```
///
/// Each row is an 8-digit uppercase offset, the hex pairs (with an extra
/// space after the eighth), and the printable ASCII between bars. Empty
/// input renders as `Empty Body`.
pub fn hex_dump(bytes: &[u8]) -> String {
    if bytes.is_empty() {
        return "Empty Body".to_string();
    }

    let rows = (bytes.len() + ROW_WIDTH - 1) / ROW_WIDTH;
    let mut out = String::with_capacity(rows * 79);

    for (row, chunk) in bytes.chunks(ROW_WIDTH).enumerate() {
        let _ = write!(out, "{:08X}  ", row * ROW_WIDTH);

        for i in 0..ROW_WIDTH {
            match chunk.get(i) {
                Some(b) => {
                    let _ = write!(out, "{:02X} ", b);
                }
                None => out.push_str("   "),
            }
            if i == 7 {
                out.push(' ');
            }
        }

        out.push_str(" |");
        out.extend(chunk.iter().map(|&b| {
            if (32..=126).contains(&b) {
                b as char
            } else {
                '.'
            }
        }));
        out.push_str("|\n");
    }

    out
}
