//! Literal text search over a buffer, forward or backward from a char offset.

use anyhow::{Context, Result};
use regex::Regex;

use crate::buffer::TextBuffer;

/// Direction in which a search moves away from the caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchDirection {
    #[default]
    Forward,
    Backward,
}

/// The text, direction and case sensitivity of a search.
///
/// The editor keeps the last one of these so "Find Next" can repeat it
/// without the dialog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    pub text: String,
    pub direction: SearchDirection,
    pub case_sensitive: bool,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn backward(mut self) -> Self {
        self.direction = SearchDirection::Backward;
        self
    }

    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn is_backward(&self) -> bool {
        self.direction == SearchDirection::Backward
    }
}

/// Chars converted out of the rope by the first search step. Each miss
/// doubles the step up to [`WINDOW_CHARS`].
const FIRST_WINDOW_CHARS: usize = 256;
const WINDOW_CHARS: usize = 64 * 1024;

/// Finds matches of a [`SearchQuery`], caching the compiled pattern.
///
/// The buffer is scanned in growing windows of at most `window` chars
/// starting at the caret, so a search costs the distance to the match
/// rather than the length of the document.
#[derive(Debug)]
pub struct Matcher {
    compiled: Option<Regex>,
    /// `(text, case_sensitive)` the cached pattern was built for.
    compiled_for: Option<(String, bool)>,
    window: usize,
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_window(WINDOW_CHARS)
    }
}

impl Matcher {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_window(window: usize) -> Self {
        Self {
            compiled: None,
            compiled_for: None,
            window: window.max(1),
        }
    }

    fn pattern_for(&mut self, query: &SearchQuery) -> Result<&Regex> {
        let key = (query.text.clone(), query.case_sensitive);
        if self.compiled_for.as_ref() != Some(&key) || self.compiled.is_none() {
            let escaped = regex::escape(&query.text);
            let pattern = if query.case_sensitive {
                escaped
            } else {
                format!("(?i){escaped}")
            };
            self.compiled = Some(Regex::new(&pattern).context("invalid search pattern")?);
            self.compiled_for = Some(key);
        }
        self.compiled.as_ref().context("search pattern missing")
    }

    /// Finds the next match of `query` relative to `from` (a char offset).
    ///
    /// Forward: the first match starting at or after `from`.
    /// Backward: the match starting last among those ending at or before `from`.
    /// Returns the match as a char range `(start, end)`. No wrap-around.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern cannot be compiled.
    pub fn find(
        &mut self,
        buffer: &TextBuffer,
        query: &SearchQuery,
        from: usize,
    ) -> Result<Option<(usize, usize)>> {
        if query.is_empty() {
            return Ok(None);
        }
        let from = from.min(buffer.len_chars());
        // A literal (case-folded or not) matches exactly as many chars as it has
        let reach = query.text.chars().count();
        let window = self.window;
        let regex = self.pattern_for(query)?;

        match query.direction {
            SearchDirection::Forward => find_forward(buffer, regex, from, window, reach),
            SearchDirection::Backward => find_backward(buffer, regex, from, window, reach),
        }
    }
}

/// Byte offset of the `chars`-th char of `text`, or its length.
fn byte_offset(text: &str, chars: usize) -> usize {
    text.char_indices().nth(chars).map_or(text.len(), |(idx, _)| idx)
}

/// Char range of the byte range `bytes` inside a window starting at char `lo`.
fn char_span(window: &str, lo: usize, bytes: std::ops::Range<usize>) -> (usize, usize) {
    let start = lo + window[..bytes.start].chars().count();
    (start, start + window[bytes].chars().count())
}

/// Looks for the first match starting in `[lo, hi)`, one window at a time.
fn find_forward(
    buffer: &TextBuffer,
    regex: &Regex,
    from: usize,
    window: usize,
    reach: usize,
) -> Result<Option<(usize, usize)>> {
    let len = buffer.len_chars();
    let mut step = FIRST_WINDOW_CHARS.min(window);
    let mut lo = from;
    while lo < len {
        let hi = (lo + step).min(len);
        let text = buffer.slice_to_string(lo, (hi + reach).min(len))?;
        let hi_byte = byte_offset(&text, hi - lo);
        if let Some(mat) = regex.find(&text) {
            if mat.start() < hi_byte {
                return Ok(Some(char_span(&text, lo, mat.range())));
            }
        }
        lo = hi;
        step = (step * 2).min(window);
    }
    Ok(None)
}

/// Looks for matches starting in `[lo, hi)` and ending by `from`, walking
/// windows back towards the start of the buffer.
fn find_backward(
    buffer: &TextBuffer,
    regex: &Regex,
    from: usize,
    window: usize,
    reach: usize,
) -> Result<Option<(usize, usize)>> {
    let mut step = FIRST_WINDOW_CHARS.min(window);
    let mut hi = from;
    while hi > 0 {
        let lo = hi.saturating_sub(step);
        let text = buffer.slice_to_string(lo, (hi + reach).min(from))?;
        let hi_byte = byte_offset(&text, hi - lo);

        let mut last = None;
        let mut at = 0;
        while let Some(mat) = regex.find_at(&text, at) {
            if mat.start() >= hi_byte {
                break;
            }
            let first_char = text[mat.start()..].chars().next().map_or(1, char::len_utf8);
            at = mat.start() + first_char;
            last = Some(mat.range());
        }
        if let Some(range) = last {
            return Ok(Some(char_span(&text, lo, range)));
        }
        hi = lo;
        step = (step * 2).min(window);
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_finds_first_at_or_after() {
        let buf = TextBuffer::from("cat cat cat");
        let mut m = Matcher::new();
        let q = SearchQuery::new("cat");
        assert_eq!(m.find(&buf, &q, 0).unwrap(), Some((0, 3)));
        assert_eq!(m.find(&buf, &q, 1).unwrap(), Some((4, 7)));
        assert_eq!(m.find(&buf, &q, 8).unwrap(), None);
    }

    #[test]
    fn test_backward_finds_last_ending_before() {
        let buf = TextBuffer::from("cat cat cat");
        let mut m = Matcher::new();
        let q = SearchQuery::new("cat").backward();
        assert_eq!(m.find(&buf, &q, 11).unwrap(), Some((8, 11)));
        assert_eq!(m.find(&buf, &q, 8).unwrap(), Some((4, 7)));
        assert_eq!(m.find(&buf, &q, 2).unwrap(), None);
    }

    #[test]
    fn test_case_insensitive_by_default() {
        let buf = TextBuffer::from("Hello HELLO hello");
        let mut m = Matcher::new();
        let q = SearchQuery::new("hello");
        assert_eq!(m.find(&buf, &q, 0).unwrap(), Some((0, 5)));
        let q = q.case_sensitive(true);
        assert_eq!(m.find(&buf, &q, 0).unwrap(), Some((12, 17)));
    }

    #[test]
    fn test_query_is_literal() {
        let buf = TextBuffer::from("a.b axb (x)");
        let mut m = Matcher::new();
        assert_eq!(m.find(&buf, &SearchQuery::new("a.b"), 1).unwrap(), None);
        assert_eq!(m.find(&buf, &SearchQuery::new("(x)"), 0).unwrap(), Some((8, 11)));
    }

    #[test]
    fn test_empty_query_never_matches() {
        let buf = TextBuffer::from("anything");
        let mut m = Matcher::new();
        assert_eq!(m.find(&buf, &SearchQuery::new(""), 0).unwrap(), None);
        let q = SearchQuery::new("").backward();
        assert_eq!(m.find(&buf, &q, 8).unwrap(), None);
    }

    #[test]
    fn test_char_offsets_with_multibyte_text() {
        let buf = TextBuffer::from("ñandú ñandú");
        let mut m = Matcher::new();
        let q = SearchQuery::new("ñandú");
        assert_eq!(m.find(&buf, &q, 1).unwrap(), Some((6, 11)));
        let q = q.backward();
        assert_eq!(m.find(&buf, &q, 6).unwrap(), Some((0, 5)));
    }

    #[test]
    fn test_from_past_end_is_clamped() {
        let buf = TextBuffer::from("abc");
        let mut m = Matcher::new();
        let q = SearchQuery::new("c").backward();
        assert_eq!(m.find(&buf, &q, 99).unwrap(), Some((2, 3)));
    }

    #[test]
    fn test_matches_across_window_edges() {
        // Window of 4 chars: "cat" at 6..9 straddles the first edge
        let buf = TextBuffer::from("xxxxxxcatxxxxcat");
        let mut m = Matcher::with_window(4);
        let q = SearchQuery::new("cat");
        assert_eq!(m.find(&buf, &q, 0).unwrap(), Some((6, 9)));
        assert_eq!(m.find(&buf, &q, 7).unwrap(), Some((13, 16)));

        let q = q.backward();
        assert_eq!(m.find(&buf, &q, 16).unwrap(), Some((13, 16)));
        assert_eq!(m.find(&buf, &q, 13).unwrap(), Some((6, 9)));
        assert_eq!(m.find(&buf, &q, 8).unwrap(), None);
    }

    #[test]
    fn test_small_windows_agree_with_whole_buffer() {
        let text = "ab aab ñab abab b a".repeat(7);
        let buf = TextBuffer::from(text.as_str());
        let mut whole = Matcher::new();
        let mut split = Matcher::with_window(3);
        for q in [SearchQuery::new("ab"), SearchQuery::new("AB").backward()] {
            for from in 0..=buf.len_chars() {
                assert_eq!(
                    split.find(&buf, &q, from).unwrap(),
                    whole.find(&buf, &q, from).unwrap(),
                    "{q:?} from {from}"
                );
            }
        }
    }

    #[test]
    fn test_backward_prefers_latest_overlapping_match() {
        let buf = TextBuffer::from("aaa");
        let mut m = Matcher::new();
        let q = SearchQuery::new("aa").backward();
        assert_eq!(m.find(&buf, &q, 3).unwrap(), Some((1, 3)));
    }
}
