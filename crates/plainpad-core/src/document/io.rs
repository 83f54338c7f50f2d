//! Reading documents from disk and writing them back.

use std::path::Path;

use anyhow::{Context, Result};

use crate::encoding::{apply_line_ending, decode_file, encode, TextEncoding};

use super::Document;

impl Document {
    /// Reads and decodes the whole file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn open(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("failed to read file: {}", path.display()))?;
        let (text, encoding, line_ending) = decode_file(&bytes);

        let mut doc = Self::from_text(&text);
        doc.encoding = encoding;
        doc.line_ending = line_ending;
        tracing::debug!(
            "Decoded {} as {encoding} ({line_ending}), {} chars",
            path.display(),
            doc.buffer.len_chars()
        );
        Ok(doc)
    }

    /// Writes the whole buffer to `path`, overwriting it, in the document's
    /// encoding and line ending. Clears `modified` on success.
    ///
    /// Text a legacy code page cannot hold is written as UTF-8 instead, and
    /// the document switches to UTF-8 for later saves.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&mut self, path: &Path) -> Result<()> {
        let text = apply_line_ending(&self.text(), self.line_ending);
        let (bytes, encoding) = match encode(&text, self.encoding) {
            Ok(bytes) => (bytes, self.encoding),
            Err(e) => {
                tracing::warn!("{e:#}, saving {} as UTF-8", path.display());
                (text.into_bytes(), TextEncoding::Utf8)
            }
        };
        std::fs::write(path, bytes)
            .with_context(|| format!("failed to write file: {}", path.display()))?;
        self.encoding = encoding;
        self.modified = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::LineEnding;

    #[test]
    fn test_open_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = Document::open(&dir.path().join("nope.txt")).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read file"));
    }

    #[test]
    fn test_open_normalizes_and_remembers_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crlf.txt");
        std::fs::write(&path, b"one\r\ntwo").unwrap();

        let doc = Document::open(&path).unwrap();
        assert_eq!(doc.text(), "one\ntwo");
        assert_eq!(doc.line_ending, LineEnding::CrLf);
        assert_eq!(doc.encoding, TextEncoding::Utf8);
        assert!(!doc.modified);
    }

    #[test]
    fn test_save_writes_back_original_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bom.txt");
        std::fs::write(&path, b"\xEF\xBB\xBFa\r\nb").unwrap();

        let mut doc = Document::open(&path).unwrap();
        doc.set_caret(doc.buffer.len_chars());
        doc.insert_text("c");
        assert!(doc.modified);
        doc.save_to(&path).unwrap();
        assert!(!doc.modified);
        assert_eq!(std::fs::read(&path).unwrap(), b"\xEF\xBB\xBFa\r\nbc");
    }

    #[test]
    fn test_open_keeps_file_with_malformed_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("damaged.txt");
        std::fs::write(&path, b"\xEF\xBB\xBFa\xFF").unwrap();

        let doc = Document::open(&path).unwrap();
        assert_eq!(doc.text(), "a\u{FFFD}");
        assert_eq!(doc.encoding, TextEncoding::Utf8Bom);
    }

    #[test]
    fn test_save_falls_back_to_utf8_when_code_page_cannot_hold_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin.txt");
        std::fs::write(&path, b"caf\xE9 au lait, cr\xE8me br\xFBl\xE9e").unwrap();

        let mut doc = Document::open(&path).unwrap();
        assert!(matches!(doc.encoding, TextEncoding::Legacy(_)));
        doc.set_caret(doc.buffer.len_chars());
        doc.insert_text(" \u{2192} \u{4E2D}");

        doc.save_to(&path).unwrap();
        assert_eq!(doc.encoding, TextEncoding::Utf8);
        assert!(!doc.modified);
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "café au lait, crème brûlée \u{2192} \u{4E2D}");

        let other = dir.path().join("copy.txt");
        doc.save_to(&other).unwrap();
        assert_eq!(std::fs::read_to_string(&other).unwrap(), written);
    }

    #[test]
    fn test_save_keeps_code_page_when_text_fits() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin.txt");
        let original = b"caf\xE9 cr\xE8me br\xFBl\xE9e";
        std::fs::write(&path, original).unwrap();

        let mut doc = Document::open(&path).unwrap();
        let encoding = doc.encoding;
        let accented = doc.text().chars().nth(3).unwrap();
        doc.set_caret(0);
        doc.insert_text(&format!("{accented} "));
        doc.save_to(&path).unwrap();

        assert_eq!(doc.encoding, encoding);
        let expected = [&[0xE9, b' '][..], &original[..]].concat();
        assert_eq!(std::fs::read(&path).unwrap(), expected);
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut doc = Document::from_text("x");
        let err = doc
            .save_to(&dir.path().join("missing").join("out.txt"))
            .unwrap_err();
        assert!(format!("{err:#}").contains("failed to write file"));
    }
}
