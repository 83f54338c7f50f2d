//! Document model combining text buffer, selection, and undo history.
//!
//! A `Document` is the single editable text of the window. Every mutation
//! goes through here so it is recorded in the undo history and bumps the
//! version counters the view uses to resynchronize.

mod io;

use crate::buffer::{LineCol, TextBuffer};
use crate::cursor::Cursor;
use crate::encoding::{LineEnding, TextEncoding};
use crate::history::{EditOperation, UndoManager};
use crate::search::{Matcher, SearchQuery};

/// The open text with its caret, selection, history and on-disk format.
pub struct Document {
    pub buffer: TextBuffer,
    pub cursor: Cursor,
    pub history: UndoManager,
    /// Encoding the text is written back in.
    pub encoding: TextEncoding,
    /// Line ending the text is written back with.
    pub line_ending: LineEnding,
    /// Whether the text changed since it was last loaded or saved.
    pub modified: bool,
    /// Bumped on every buffer mutation.
    pub content_version: u64,
    /// Bumped whenever the selection is set by the editor rather than the view,
    /// so the view knows to push it into the widget.
    pub selection_version: u64,
    matcher: Matcher,
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("len_chars", &self.buffer.len_chars())
            .field("cursor", &self.cursor)
            .field("encoding", &self.encoding)
            .field("line_ending", &self.line_ending)
            .field("modified", &self.modified)
            .field("content_version", &self.content_version)
            .finish_non_exhaustive()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates an empty, unmodified document.
    pub fn new() -> Self {
        Self::from_text("")
    }

    /// Creates an unmodified document holding `text` (expected `\n`-normalized).
    pub fn from_text(text: &str) -> Self {
        Self {
            buffer: TextBuffer::from(text),
            cursor: Cursor::new(),
            history: UndoManager::new(),
            encoding: TextEncoding::default(),
            line_ending: LineEnding::default(),
            modified: false,
            content_version: 0,
            selection_version: 0,
            matcher: Matcher::new(),
        }
    }

    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    #[inline]
    fn bump_version(&mut self) {
        self.content_version = self.content_version.wrapping_add(1);
    }

    #[inline]
    fn bump_selection(&mut self) {
        self.selection_version = self.selection_version.wrapping_add(1);
    }

    /// Replaces `[start, end)` with `text`, records it, and leaves the caret
    /// after the inserted text with no selection.
    ///
    /// Returns false (and changes nothing) if the range is invalid or the
    /// edit would be a no-op.
    pub fn replace_range(&mut self, start: usize, end: usize, text: &str) -> bool {
        if start == end && text.is_empty() {
            return false;
        }
        let deleted = match self.buffer.slice_to_string(start, end) {
            Ok(deleted) => deleted,
            Err(e) => {
                tracing::warn!("Rejected edit: {e:#}");
                return false;
            }
        };
        if self.buffer.replace(start, end, text).is_err() {
            return false;
        }

        let cursor_before = self.cursor.position;
        let cursor_after = start + text.chars().count();
        self.cursor.collapse_to(cursor_after);
        self.history.record(EditOperation {
            position: start,
            inserted: text.to_string(),
            deleted,
            cursor_before,
            cursor_after,
        });
        self.modified = true;
        self.bump_version();
        self.bump_selection();
        true
    }

    /// Replaces the selection (or inserts at the caret) with `text`.
    pub fn insert_text(&mut self, text: &str) {
        let (start, end) = (self.cursor.start(), self.cursor.end());
        self.replace_range(start, end, text);
    }

    /// Deletes the selected text. No-op without a selection.
    pub fn delete_selection(&mut self) {
        if let Some((start, end)) = self.cursor.selection_range() {
            self.replace_range(start, end, "");
        }
    }

    pub fn selected_text(&self) -> Option<String> {
        let (start, end) = self.cursor.selection_range()?;
        self.buffer.slice_to_string(start, end).ok()
    }

    /// Selects `[anchor, head)` on behalf of the editor (find, select all).
    pub fn select(&mut self, anchor: usize, head: usize) {
        let len = self.buffer.len_chars();
        self.cursor.select(anchor.min(len), head.min(len));
        self.bump_selection();
    }

    /// Moves the caret on behalf of the editor, dropping the selection.
    /// Typing after the jump undoes separately from typing before it.
    pub fn set_caret(&mut self, position: usize) {
        self.cursor.collapse_to(position.min(self.buffer.len_chars()));
        self.history.force_group_break();
        self.bump_selection();
    }

    /// Adopts a selection made in the view. Does not bump `selection_version`.
    pub fn sync_selection_from_view(&mut self, anchor: usize, head: usize) {
        let len = self.buffer.len_chars();
        self.cursor.select(anchor.min(len), head.min(len));
    }

    pub fn select_all(&mut self) {
        self.select(0, self.buffer.len_chars());
    }

    /// Searches from the current selection and selects the match.
    ///
    /// Forward searches start at the caret end of the selection, backward
    /// searches at its start, so repeated calls walk through the matches.
    /// Leaves the selection untouched when nothing is found.
    pub fn find(&mut self, query: &SearchQuery) -> bool {
        let from = if query.is_backward() {
            self.cursor.start()
        } else {
            self.cursor.end()
        };
        match self.matcher.find(&self.buffer, query, from) {
            Ok(Some((start, end))) => {
                self.select(start, end);
                true
            }
            Ok(None) => false,
            Err(e) => {
                tracing::warn!("Search failed: {e:#}");
                false
            }
        }
    }

    /// Line/column of the caret.
    pub fn caret_line_col(&self) -> LineCol {
        self.buffer.line_col(self.cursor.position)
    }

    pub fn begin_edit_group(&mut self) {
        self.history.begin_group();
    }

    pub fn end_edit_group(&mut self) {
        self.history.end_group();
    }

    /// Reverts the latest undo step.
    pub fn undo(&mut self) {
        let Some(ops) = self.history.undo() else {
            return;
        };
        self.history.pause_recording();
        for op in ops.iter().rev() {
            let inserted_end = op.position + op.inserted.chars().count();
            if let Err(e) = self.buffer.replace(op.position, inserted_end, &op.deleted) {
                tracing::warn!("Undo step failed to apply: {e:#}");
            }
        }
        if let Some(first) = ops.first() {
            self.cursor.collapse_to(first.cursor_before);
        }
        self.history.resume_recording();
        self.after_history_replay();
    }

    /// Reapplies the latest undone step.
    pub fn redo(&mut self) {
        let Some(ops) = self.history.redo() else {
            return;
        };
        self.history.pause_recording();
        for op in &ops {
            let deleted_end = op.position + op.deleted.chars().count();
            if let Err(e) = self.buffer.replace(op.position, deleted_end, &op.inserted) {
                tracing::warn!("Redo step failed to apply: {e:#}");
            }
        }
        if let Some(last) = ops.last() {
            self.cursor.collapse_to(last.cursor_after);
        }
        self.history.resume_recording();
        self.after_history_replay();
    }

    fn after_history_replay(&mut self) {
        self.cursor.clamp(self.buffer.len_chars());
        self.modified = true;
        self.bump_version();
        self.bump_selection();
    }
}
