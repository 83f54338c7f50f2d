//! Cursor and selection model, in char offsets.

/// The caret plus an optional selection anchor.
///
/// The selection spans from `anchor` to `position`; the anchor may sit on
/// either side of the caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Caret position (char index).
    pub position: usize,
    /// Selection anchor, if a selection is active.
    pub anchor: Option<usize>,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places the caret at `position` and drops any selection.
    pub fn collapse_to(&mut self, position: usize) {
        self.position = position;
        self.anchor = None;
    }

    /// Selects `[anchor, head)` (or `[head, anchor)`), leaving the caret at `head`.
    pub fn select(&mut self, anchor: usize, head: usize) {
        self.position = head;
        self.anchor = (anchor != head).then_some(anchor);
    }

    /// Ordered `(start, end)` of a non-empty selection.
    pub fn selection_range(&self) -> Option<(usize, usize)> {
        let anchor = self.anchor?;
        if anchor == self.position {
            return None;
        }
        Some((anchor.min(self.position), anchor.max(self.position)))
    }

    pub fn has_selection(&self) -> bool {
        self.selection_range().is_some()
    }

    /// Start of the selection, or the caret when nothing is selected.
    pub fn start(&self) -> usize {
        self.selection_range()
            .map_or(self.position, |(start, _)| start)
    }

    /// End of the selection, or the caret when nothing is selected.
    pub fn end(&self) -> usize {
        self.selection_range().map_or(self.position, |(_, end)| end)
    }

    /// Clamps caret and anchor to a buffer of `len_chars` chars.
    pub fn clamp(&mut self, len_chars: usize) {
        self.position = self.position.min(len_chars);
        self.anchor = self.anchor.map(|a| a.min(len_chars));
    }
}
