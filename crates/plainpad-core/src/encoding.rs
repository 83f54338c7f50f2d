//! Decoding of file bytes into editor text and back.
//!
//! The editor always holds `\n`-terminated text; the original encoding and
//! line ending are remembered so a save writes the file back the way it
//! was read.

use anyhow::Result;
use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF16BE_BOM: &[u8] = &[0xFE, 0xFF];

/// Text encoding of a file on disk.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    #[default]
    Utf8,
    Utf8Bom,
    Utf16Le,
    Utf16Be,
    /// Any other encoding `chardetng` guessed, e.g. windows-1252.
    Legacy(&'static Encoding),
}

impl std::fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Utf8 => write!(f, "UTF-8"),
            Self::Utf8Bom => write!(f, "UTF-8 BOM"),
            Self::Utf16Le => write!(f, "UTF-16 LE"),
            Self::Utf16Be => write!(f, "UTF-16 BE"),
            Self::Legacy(encoding) => write!(f, "{}", encoding.name()),
        }
    }
}

/// Line ending style of a file on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Lf,
    CrLf,
    Cr,
}

impl Default for LineEnding {
    fn default() -> Self {
        if cfg!(windows) {
            Self::CrLf
        } else {
            Self::Lf
        }
    }
}

impl std::fmt::Display for LineEnding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lf => write!(f, "LF"),
            Self::CrLf => write!(f, "CRLF"),
            Self::Cr => write!(f, "CR"),
        }
    }
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
            Self::Cr => "\r",
        }
    }

    /// Detects the dominant style from the first line break in `text`.
    /// Text without any line break gets the platform default.
    pub fn detect(text: &str) -> Self {
        match text.find(['\r', '\n']) {
            Some(idx) if text[idx..].starts_with("\r\n") => Self::CrLf,
            Some(idx) if text.as_bytes()[idx] == b'\r' => Self::Cr,
            Some(_) => Self::Lf,
            None => Self::default(),
        }
    }
}

/// Guesses the encoding of `bytes`: BOM first, then strict UTF-8, then `chardetng`.
pub fn detect_encoding(bytes: &[u8]) -> TextEncoding {
    if bytes.starts_with(UTF8_BOM) {
        TextEncoding::Utf8Bom
    } else if bytes.starts_with(UTF16LE_BOM) {
        TextEncoding::Utf16Le
    } else if bytes.starts_with(UTF16BE_BOM) {
        TextEncoding::Utf16Be
    } else if std::str::from_utf8(bytes).is_ok() {
        TextEncoding::Utf8
    } else {
        let mut detector = chardetng::EncodingDetector::new();
        detector.feed(bytes, true);
        TextEncoding::Legacy(detector.guess(None, true))
    }
}

/// Decodes `bytes` as `encoding`, stripping any BOM.
///
/// Malformed sequences become U+FFFD so a damaged file still opens.
pub fn decode(bytes: &[u8], encoding: TextEncoding) -> String {
    let (codec, body) = match encoding {
        TextEncoding::Utf8 => (UTF_8, bytes),
        TextEncoding::Utf8Bom => (UTF_8, bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes)),
        TextEncoding::Utf16Le => (UTF_16LE, bytes.strip_prefix(UTF16LE_BOM).unwrap_or(bytes)),
        TextEncoding::Utf16Be => (UTF_16BE, bytes.strip_prefix(UTF16BE_BOM).unwrap_or(bytes)),
        TextEncoding::Legacy(codec) => (codec, bytes),
    };
    let (text, had_errors) = codec.decode_without_bom_handling(body);
    if had_errors {
        tracing::warn!("Malformed {encoding} content, replaced with U+FFFD");
    }
    text.into_owned()
}

/// Encodes `text` as `encoding`, writing a BOM for the BOM-carrying encodings.
///
/// # Errors
///
/// Returns an error if `text` holds characters the legacy encoding cannot represent.
pub fn encode(text: &str, encoding: TextEncoding) -> Result<Vec<u8>> {
    let bytes = match encoding {
        TextEncoding::Utf8 => text.as_bytes().to_vec(),
        TextEncoding::Utf8Bom => [UTF8_BOM, text.as_bytes()].concat(),
        TextEncoding::Utf16Le => UTF16LE_BOM
            .iter()
            .copied()
            .chain(text.encode_utf16().flat_map(u16::to_le_bytes))
            .collect(),
        TextEncoding::Utf16Be => UTF16BE_BOM
            .iter()
            .copied()
            .chain(text.encode_utf16().flat_map(u16::to_be_bytes))
            .collect(),
        TextEncoding::Legacy(codec) => {
            let (encoded, _, had_errors) = codec.encode(text);
            if had_errors {
                anyhow::bail!("text cannot be represented in {}", codec.name());
            }
            encoded.into_owned()
        }
    };
    Ok(bytes)
}

/// Decodes raw file bytes into editor text plus the metadata needed to save it back.
pub fn decode_file(bytes: &[u8]) -> (String, TextEncoding, LineEnding) {
    let encoding = detect_encoding(bytes);
    let raw = decode(bytes, encoding);
    let line_ending = LineEnding::detect(&raw);
    (normalize_line_endings(&raw), encoding, line_ending)
}

/// Converts every line break to `\n`.
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Converts every `\n` to `ending`.
pub fn apply_line_ending(text: &str, ending: LineEnding) -> String {
    match ending {
        LineEnding::Lf => text.to_string(),
        other => text.replace('\n', other.as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_plain_utf8() {
        assert_eq!(detect_encoding("héllo".as_bytes()), TextEncoding::Utf8);
        assert_eq!(detect_encoding(b""), TextEncoding::Utf8);
    }

    #[test]
    fn test_detect_boms() {
        assert_eq!(detect_encoding(&[0xEF, 0xBB, 0xBF, b'a']), TextEncoding::Utf8Bom);
        assert_eq!(detect_encoding(&[0xFF, 0xFE, b'a', 0]), TextEncoding::Utf16Le);
        assert_eq!(detect_encoding(&[0xFE, 0xFF, 0, b'a']), TextEncoding::Utf16Be);
    }

    #[test]
    fn test_detect_legacy() {
        // "café" in windows-1252: 0xE9 is not valid UTF-8 on its own
        let bytes = [b'c', b'a', b'f', 0xE9];
        assert!(matches!(detect_encoding(&bytes), TextEncoding::Legacy(_)));
    }

    #[test]
    fn test_decode_strips_bom() {
        let text = decode(&[0xEF, 0xBB, 0xBF, b'h', b'i'], TextEncoding::Utf8Bom);
        assert_eq!(text, "hi");
    }

    #[test]
    fn test_decode_utf16le() {
        let bytes = [0xFF, 0xFE, b'h', 0, b'i', 0];
        assert_eq!(decode(&bytes, TextEncoding::Utf16Le), "hi");
    }

    #[test]
    fn test_decode_replaces_malformed_bytes() {
        assert_eq!(decode(&[0xC3, 0x28], TextEncoding::Utf8), "\u{FFFD}(");
        assert_eq!(
            decode(&[0xEF, 0xBB, 0xBF, b'a', 0xFF], TextEncoding::Utf8Bom),
            "a\u{FFFD}"
        );
    }

    #[test]
    fn test_decode_odd_length_utf16() {
        let bytes = [0xFF, 0xFE, b'h', 0, b'i'];
        assert_eq!(decode(&bytes, TextEncoding::Utf16Le), "h\u{FFFD}");
    }

    #[test]
    fn test_encode_utf16be_writes_bom() {
        let bytes = encode("A", TextEncoding::Utf16Be).unwrap();
        assert_eq!(bytes, vec![0xFE, 0xFF, 0, b'A']);
    }

    #[test]
    fn test_encode_legacy_unrepresentable_fails() {
        let latin1 = Encoding::for_label(b"windows-1252").unwrap();
        assert!(encode("日本", TextEncoding::Legacy(latin1)).is_err());
        assert_eq!(encode("café", TextEncoding::Legacy(latin1)).unwrap().len(), 4);
    }

    #[test]
    fn test_line_ending_detection() {
        assert_eq!(LineEnding::detect("a\r\nb\nc"), LineEnding::CrLf);
        assert_eq!(LineEnding::detect("a\rb"), LineEnding::Cr);
        assert_eq!(LineEnding::detect("a\nb\r\n"), LineEnding::Lf);
        assert_eq!(LineEnding::detect("no breaks"), LineEnding::default());
    }

    #[test]
    fn test_decode_file_normalizes() {
        let (text, encoding, ending) = decode_file(b"one\r\ntwo\r\n");
        assert_eq!(text, "one\ntwo\n");
        assert_eq!(encoding, TextEncoding::Utf8);
        assert_eq!(ending, LineEnding::CrLf);
    }

    #[test]
    fn test_apply_line_ending() {
        assert_eq!(apply_line_ending("a\nb", LineEnding::CrLf), "a\r\nb");
        assert_eq!(apply_line_ending("a\nb", LineEnding::Cr), "a\rb");
        assert_eq!(apply_line_ending("a\nb", LineEnding::Lf), "a\nb");
    }
}
