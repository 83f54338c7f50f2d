//! The document capability the editor drives for find and replace.

use crate::document::Document;
use crate::search::SearchQuery;

/// Search, selection and grouped-undo operations on the open text.
///
/// The editor only talks to the document through this trait, which keeps
/// the find/replace handlers independent of the concrete buffer.
pub trait DocumentHandle {
    /// Moves the selection to the next match of `query`; returns whether one was found.
    fn find(&mut self, query: &SearchQuery) -> bool;

    fn has_selection(&self) -> bool;

    /// Ordered char range of the current selection, if any.
    fn selection_range(&self) -> Option<(usize, usize)>;

    /// Replaces the selection (or inserts at the caret) with `text`.
    fn insert_at_selection(&mut self, text: &str);

    /// Collapses the selection to a caret at `char_idx`.
    fn place_cursor(&mut self, char_idx: usize);

    /// Starts a scope whose edits undo as one step.
    fn begin_edit_group(&mut self);

    fn end_edit_group(&mut self);
}

impl DocumentHandle for Document {
    fn find(&mut self, query: &SearchQuery) -> bool {
        Document::find(self, query)
    }

    fn has_selection(&self) -> bool {
        self.cursor.has_selection()
    }

    fn selection_range(&self) -> Option<(usize, usize)> {
        self.cursor.selection_range()
    }

    fn insert_at_selection(&mut self, text: &str) {
        self.insert_text(text);
    }

    fn place_cursor(&mut self, char_idx: usize) {
        self.set_caret(char_idx);
    }

    fn begin_edit_group(&mut self) {
        Document::begin_edit_group(self);
    }

    fn end_edit_group(&mut self) {
        Document::end_edit_group(self);
    }
}
