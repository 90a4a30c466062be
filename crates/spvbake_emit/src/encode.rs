//! Hex byte-literal encoding of compiled binaries.

use std::fmt::Write;

/// Encodes bytes as comma-separated lowercase hex literals.
///
/// `[0x00, 0x01, 0xFF]` encodes to exactly `"0x0, 0x1, 0xff"`: no
/// zero-padding, no trailing separator, empty input encodes to an empty
/// string. This is the interchange format the embedding build step consumes
/// as a byte-array initializer.
pub fn hex_literals(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len() * 6);
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 {
            text.push_str(", ");
        }
        // Infallible for String.
        let _ = write!(text, "{byte:#x}");
    }
    text
}
