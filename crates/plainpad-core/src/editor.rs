//! Editor state owned by the main window.
//!
//! Holds the document, the current file path and the last search, and
//! implements the window's reactions to find/replace intents. The dialogs
//! never reach the document directly; their signals call into here.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::document::Document;
use crate::handle::DocumentHandle;
use crate::search::SearchQuery;

/// Application name shown in the window title.
pub const APP_TITLE: &str = "Notepad";

/// What the window must do after a "Find Next" action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindNext {
    /// No search has been made yet; show the Find dialog instead.
    ShowFindDialog,
    /// The stored query was searched again.
    Searched { found: bool },
}

/// Document, file path and search memory of the editor window.
#[derive(Debug)]
pub struct EditorState<D: DocumentHandle = Document> {
    pub document: D,
    /// `None` while the document is untitled.
    pub current_file: Option<PathBuf>,
    /// The last query issued from either dialog.
    pub last_search: SearchQuery,
}

impl Default for EditorState<Document> {
    fn default() -> Self {
        Self::new(Document::new())
    }
}

impl<D: DocumentHandle> EditorState<D> {
    pub fn new(document: D) -> Self {
        Self {
            document,
            current_file: None,
            last_search: SearchQuery::default(),
        }
    }

    /// Remembers `query` and searches for it once.
    pub fn on_find_requested(&mut self, query: SearchQuery) -> bool {
        self.last_search = query;
        let found = self.document.find(&self.last_search);
        tracing::debug!("Find {:?}: found={found}", self.last_search.text);
        found
    }

    /// Repeats the last search, or asks for the Find dialog if there is none.
    pub fn on_find_next(&mut self) -> FindNext {
        if self.last_search.is_empty() {
            return FindNext::ShowFindDialog;
        }
        let found = self.document.find(&self.last_search);
        FindNext::Searched { found }
    }

    /// Replaces the current selection with `with`. Without a selection this
    /// does nothing; it never searches first.
    pub fn on_replace_one_requested(&mut self, with: &str) -> bool {
        if !self.document.has_selection() {
            return false;
        }
        self.document.insert_at_selection(with);
        true
    }

    /// Replaces every match of `query` from the caret onward (in the query's
    /// direction) with `with`, as a single undo step. Returns the number of
    /// replacements.
    ///
    /// A forward search resumes after each inserted replacement and a
    /// backward search resumes before it, so replacement text is never
    /// searched again and the loop ends even when `with` contains the query.
    pub fn on_replace_all_requested(&mut self, query: SearchQuery, with: &str) -> usize {
        self.last_search = query;
        let mut replaced = 0;

        self.document.begin_edit_group();
        while self.document.find(&self.last_search) {
            let Some((start, _)) = self.document.selection_range() else {
                continue;
            };
            self.document.insert_at_selection(with);
            if self.last_search.is_backward() {
                self.document.place_cursor(start);
            }
            replaced += 1;
        }
        self.document.end_edit_group();

        tracing::debug!(
            "Replaced {replaced} occurrence(s) of {:?}",
            self.last_search.text
        );
        replaced
    }

    /// Window title for the current file: `Untitled - Notepad` or `<path> - Notepad`.
    pub fn window_title(&self) -> String {
        match &self.current_file {
            Some(path) => format!("{} - {APP_TITLE}", path.display()),
            None => format!("Untitled - {APP_TITLE}"),
        }
    }
}

impl EditorState<Document> {
    /// Starts a new untitled document.
    pub fn new_document(&mut self) {
        self.document = Document::new();
        self.current_file = None;
        tracing::info!("New document");
    }

    /// Loads `path` into the editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read; the document and the
    /// current file are left unchanged.
    pub fn open(&mut self, path: &Path) -> Result<()> {
        let document = Document::open(path)?;
        self.document = document;
        self.current_file = Some(path.to_path_buf());
        tracing::info!("Opened {}", path.display());
        Ok(())
    }

    /// Writes the document to the current file.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no current file or the write fails.
    pub fn save(&mut self) -> Result<()> {
        let Some(path) = self.current_file.clone() else {
            anyhow::bail!("document has no file path");
        };
        self.document.save_to(&path)?;
        tracing::info!("Saved {}", path.display());
        Ok(())
    }

    /// Writes the document to `path` and makes it the current file.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails; the current file is left unchanged.
    pub fn save_as(&mut self, path: &Path) -> Result<()> {
        self.document.save_to(path)?;
        self.current_file = Some(path.to_path_buf());
        tracing::info!("Saved as {}", path.display());
        Ok(())
    }
}
