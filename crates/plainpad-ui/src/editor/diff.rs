//! Turns a before/after pair of strings into a single range replacement.

/// A replacement of the char range `[start, end)` of the old text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChange {
    pub start: usize,
    pub end: usize,
    pub inserted: String,
}

/// Finds the smallest single replacement that turns `old` into `new`.
///
/// Offsets are in chars. Returns `None` when the strings are equal.
pub fn diff_chars(old: &str, new: &str) -> Option<TextChange> {
    if old == new {
        return None;
    }

    let prefix = old
        .chars()
        .zip(new.chars())
        .take_while(|(a, b)| a == b)
        .count();

    let old_len = old.chars().count();
    let new_len = new.chars().count();
    let max_suffix = old_len.min(new_len) - prefix;
    let suffix = old
        .chars()
        .rev()
        .zip(new.chars().rev())
        .take(max_suffix)
        .take_while(|(a, b)| a == b)
        .count();

    let inserted: String = new
        .chars()
        .skip(prefix)
        .take(new_len - prefix - suffix)
        .collect();

    Some(TextChange {
        start: prefix,
        end: old_len - suffix,
        inserted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn change(start: usize, end: usize, inserted: &str) -> Option<TextChange> {
        Some(TextChange {
            start,
            end,
            inserted: inserted.to_string(),
        })
    }

    #[test]
    fn test_equal_strings_have_no_change() {
        assert_eq!(diff_chars("abc", "abc"), None);
    }

    #[test]
    fn test_typed_character() {
        assert_eq!(diff_chars("helo", "hello"), change(3, 3, "l"));
    }

    #[test]
    fn test_deleted_range() {
        assert_eq!(diff_chars("hello world", "hello"), change(5, 11, ""));
    }

    #[test]
    fn test_replaced_middle() {
        assert_eq!(diff_chars("the cat sat", "the dog sat"), change(4, 7, "dog"));
    }

    #[test]
    fn test_repeated_chars_do_not_overlap() {
        // Prefix and suffix both could claim the shared "a"
        assert_eq!(diff_chars("a", "aa"), change(1, 1, "a"));
        assert_eq!(diff_chars("aa", "a"), change(1, 2, ""));
    }

    #[test]
    fn test_offsets_count_chars_not_bytes() {
        assert_eq!(diff_chars("héllo", "hé-llo"), change(2, 2, "-"));
    }

    #[test]
    fn test_from_empty() {
        assert_eq!(diff_chars("", "abc"), change(0, 0, "abc"));
        assert_eq!(diff_chars("abc", ""), change(0, 3, ""));
    }
}
