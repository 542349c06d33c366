//! Character decoding for uploaded text.

/// Decode bytes as UTF-8 the way browsers read a text upload: a leading
/// UTF-8 BOM is dropped and malformed sequences become U+FFFD.
pub fn decode_utf8(bytes: &[u8]) -> String {
    let (text, had_errors) = encoding_rs::UTF_8.decode_with_bom_removal(bytes);
    if had_errors {
        log::warn!("Input contained invalid UTF-8; replaced malformed sequences");
    }
    text.into_owned()
}

/// Decode a PDF text string, handling UTF-16BE (BOM 0xFE 0xFF), UTF-8 and
/// PDFDocEncoding/Latin-1.
pub fn decode_pdf_string(raw: &[u8]) -> String {
    if raw.starts_with(&[0xFE, 0xFF]) {
        let (text, _, _) = encoding_rs::UTF_16BE.decode(raw);
        return text.into_owned();
    }

    if raw.starts_with(&[0xEF, 0xBB, 0xBF]) {
        return String::from_utf8_lossy(&raw[3..]).to_string();
    }

    match std::str::from_utf8(raw) {
        Ok(s) => s.to_string(),
        Err(_) => raw.iter().map(|&b| b as char).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_utf8() {
        assert_eq!(decode_utf8("Héllo".as_bytes()), "Héllo");
    }

    #[test]
    fn test_decode_utf8_strips_bom() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(b"Summary");
        assert_eq!(decode_utf8(&bytes), "Summary");
    }

    #[test]
    fn test_decode_utf8_replaces_invalid() {
        assert_eq!(decode_utf8(&[b'a', 0xFF, b'b']), "a\u{FFFD}b");
    }

    #[test]
    fn test_decode_pdf_string_utf16be() {
        let raw: Vec<u8> = vec![0xFE, 0xFF, 0x00, 0x4A, 0x00, 0x61, 0x00, 0x6E, 0x00, 0x65];
        assert_eq!(decode_pdf_string(&raw), "Jane");
    }

    #[test]
    fn test_decode_pdf_string_latin1() {
        let raw = vec![0x43, 0x61, 0x66, 0xE9]; // Café in Latin-1
        assert_eq!(decode_pdf_string(&raw), "Café");
    }
}
