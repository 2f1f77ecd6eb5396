use encoding_rs::UTF_8;

use crate::error::Result;

use super::inflate::decompress;
use super::scanner::locate_entry;

/// Decode bytes as UTF-8 text.
///
/// Follows the WHATWG UTF-8 decode: a leading byte order mark is removed
/// and malformed sequences become U+FFFD REPLACEMENT CHARACTER. No other
/// encoding is detected.
pub fn decode_text(bytes: &[u8]) -> String {
    let (text, had_errors) = UTF_8.decode_with_bom_removal(bytes);
    if had_errors {
        tracing::warn!("malformed UTF-8 replaced with U+FFFD");
    }
    text.into_owned()
}

/// Locate the first entry in `archive` and return its decompressed bytes.
pub fn extract_bytes(archive: &[u8]) -> Result<Vec<u8>> {
    let entry = locate_entry(archive)?;
    let data = decompress(entry.payload, entry.compression_method())?;

    if data.len() != entry.header.uncompressed_size as usize {
        tracing::debug!(
            declared = entry.header.uncompressed_size,
            actual = data.len(),
            "uncompressed size differs from header"
        );
    }

    Ok(data)
}

/// Locate, decompress and decode the first entry in `archive`.
pub fn extract_text(archive: &[u8]) -> Result<String> {
    extract_bytes(archive).map(|data| decode_text(&data))
}
