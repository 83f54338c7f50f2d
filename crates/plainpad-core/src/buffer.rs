//! Rope-backed document text. Every offset taken or returned here counts
//! chars; bytes only appear at the `regex` boundary.

use std::fmt;
use std::ops::Range;

use anyhow::{bail, Result};
use ropey::Rope;

/// Line/column location of a char index, both 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineCol {
    pub line: usize,
    pub col: usize,
}

#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    rope: Rope,
}

impl From<&str> for TextBuffer {
    fn from(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.rope.chunks().try_for_each(|chunk| f.write_str(chunk))
    }
}

impl TextBuffer {
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Line count as shown in the status bar. Text without a trailing
    /// newline still counts its last line, so an empty buffer has one.
    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }

    pub fn is_empty(&self) -> bool {
        self.len_chars() == 0
    }

    fn span(&self, start: usize, end: usize) -> Result<Range<usize>> {
        let len = self.len_chars();
        match (start <= end, end <= len) {
            (true, true) => Ok(start..end),
            (false, _) => bail!("inverted span {start}..{end}"),
            (true, false) => bail!("span {start}..{end} exceeds {len} chars"),
        }
    }

    /// Swaps the chars in `[start, end)` for `text`. An empty `text` deletes
    /// and an empty span inserts.
    ///
    /// # Errors
    ///
    /// Fails without touching the text if the span is inverted or past the end.
    pub fn replace(&mut self, start: usize, end: usize, text: &str) -> Result<()> {
        let span = self.span(start, end)?;
        if !span.is_empty() {
            self.rope.remove(span);
        }
        if !text.is_empty() {
            self.rope.insert(start, text);
        }
        Ok(())
    }

    pub fn slice_to_string(&self, start: usize, end: usize) -> Result<String> {
        Ok(self.rope.slice(self.span(start, end)?).to_string())
    }

    /// Maps a byte offset into `to_string()` (a regex match bound) to chars.
    pub fn byte_to_char(&self, byte_idx: usize) -> Result<usize> {
        let bytes = self.rope.len_bytes();
        if byte_idx > bytes {
            bail!("byte offset {byte_idx} exceeds {bytes} bytes");
        }
        Ok(self.rope.byte_to_char(byte_idx))
    }

    pub fn char_to_byte(&self, char_idx: usize) -> Result<usize> {
        self.span(char_idx, char_idx)?;
        Ok(self.rope.char_to_byte(char_idx))
    }

    /// Where `char_idx` sits, clamped to the end of the text.
    pub fn line_col(&self, char_idx: usize) -> LineCol {
        let idx = char_idx.min(self.len_chars());
        let line = self.rope.char_to_line(idx);
        LineCol {
            line,
            col: idx - self.rope.line_to_char(line),
        }
    }
}
