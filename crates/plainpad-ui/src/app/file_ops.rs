//! File I/O operations for the editor application.
//!
//! Failures are reported in the warning window and leave the document,
//! its path and the window title as they were.

use std::path::Path;

use super::App;

impl App {
    pub(crate) fn new_document(&mut self) {
        self.editor.new_document();
    }

    /// Prompts for a file and loads it. Cancelling does nothing.
    pub(crate) fn open_file(&mut self) {
        if let Some(path) = self.file_dialogs.pick_open() {
            self.open_path(&path);
        }
    }

    /// Loads `path` into the editor, warning on failure.
    pub fn open_path(&mut self, path: &Path) {
        if let Err(e) = self.editor.open(path) {
            tracing::error!("Failed to open file: {e:#}");
            self.show_warning(format!("Cannot open file: {e:#}"));
        }
    }

    /// Saves to the current file, or prompts for one if the document is untitled.
    pub(crate) fn save(&mut self) {
        if self.editor.current_file.is_none() {
            self.save_as();
            return;
        }
        if let Err(e) = self.editor.save() {
            tracing::error!("Failed to save: {e:#}");
            self.show_warning(format!("Cannot save file: {e:#}"));
        }
    }

    /// Prompts for a destination and saves there.
    pub(crate) fn save_as(&mut self) {
        let suggested = self.suggested_file_name("txt");
        let Some(path) = self.file_dialogs.pick_save(&suggested) else {
            return;
        };
        if let Err(e) = self.editor.save_as(&path) {
            tracing::error!("Failed to save: {e:#}");
            self.show_warning(format!("Cannot save file: {e:#}"));
        }
    }

    /// File name offered by prompts: the current file's stem, or `Untitled`.
    pub(crate) fn suggested_file_name(&self, extension: &str) -> String {
        let stem = self
            .editor
            .current_file
            .as_deref()
            .and_then(|p| p.file_stem())
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Untitled".to_string());
        format!("{stem}.{extension}")
    }
}
