//! Best-guess character-encoding detection for text sources.

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};

/// Guess the encoding of raw file bytes.
///
/// A BOM wins when present (UTF-8, UTF-16 LE, UTF-16 BE). Otherwise bytes that
/// validate as UTF-8 are UTF-8, and anything else falls back to windows-1252,
/// which decodes every byte sequence, so detection is total.
pub fn detect_encoding(bytes: &[u8]) -> &'static Encoding {
    if let Some((encoding, _bom_length)) = Encoding::for_bom(bytes) {
        return encoding;
    }
    if std::str::from_utf8(bytes).is_ok() {
        UTF_8
    } else {
        WINDOWS_1252
    }
}

/// Decode file bytes with the detected encoding.
///
/// Strips the BOM when one is present. Returns the decoded text together with
/// the encoding that was used.
pub fn decode_bytes(bytes: &[u8]) -> (String, &'static Encoding) {
    let encoding = detect_encoding(bytes);
    let (text, _, _) = encoding.decode(bytes);
    (text.into_owned(), encoding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::{UTF_16BE, UTF_16LE};

    #[test]
    fn plain_ascii_is_utf8() {
        assert_eq!(detect_encoding(b"Destination\nParis\n"), UTF_8);
    }

    #[test]
    fn valid_utf8_multibyte_is_utf8() {
        let bytes = "Destination\nZürich\n".as_bytes();
        assert_eq!(detect_encoding(bytes), UTF_8);
        let (text, encoding) = decode_bytes(bytes);
        assert_eq!(encoding, UTF_8);
        assert!(text.contains("Zürich"));
    }

    #[test]
    fn invalid_utf8_falls_back_to_windows_1252() {
        // "Zürich" with a latin-1 u-umlaut byte.
        let bytes = b"Destination\nZ\xfcrich\n";
        assert_eq!(detect_encoding(bytes), WINDOWS_1252);
        let (text, _) = decode_bytes(bytes);
        assert!(text.contains("Zürich"));
    }

    #[test]
    fn utf8_bom_is_detected_and_stripped() {
        let bytes = b"\xef\xbb\xbfDestination\n";
        assert_eq!(detect_encoding(bytes), UTF_8);
        let (text, _) = decode_bytes(bytes);
        assert_eq!(text, "Destination\n");
    }

    #[test]
    fn utf16_boms_are_detected() {
        assert_eq!(detect_encoding(b"\xff\xfeD\x00"), UTF_16LE);
        assert_eq!(detect_encoding(b"\xfe\xff\x00D"), UTF_16BE);

        let mut bytes = vec![0xff, 0xfe];
        for unit in "Destination\nParis\n".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        let (text, encoding) = decode_bytes(&bytes);
        assert_eq!(encoding, UTF_16LE);
        assert_eq!(text, "Destination\nParis\n");
    }
}
