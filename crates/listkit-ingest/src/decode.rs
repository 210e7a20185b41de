//! Text decoding for delimited files.

use encoding_rs::{Encoding, WINDOWS_1252};

/// Decodes delimited-file bytes to text.
///
/// A BOM (UTF-8, UTF-16 LE/BE) selects the encoding and is stripped. Without
/// one, valid UTF-8 is taken as is and anything else is read as Windows-1252,
/// which is what spreadsheet tools typically emit for "CSV" exports.
pub fn decode_text(bytes: &[u8]) -> String {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        let (text, _) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        return text.into_owned();
    }
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => {
            tracing::debug!("input is not UTF-8, decoding as Windows-1252");
            let (text, _, _) = WINDOWS_1252.decode(bytes);
            text.into_owned()
        }
    }
}
