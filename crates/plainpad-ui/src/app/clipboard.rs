//! Clipboard operations (cut, copy, paste, delete).

use plainpad_core::encoding::normalize_line_endings;

use super::App;

impl App {
    /// Cut, Copy and Delete are only enabled while text is selected.
    pub(crate) fn has_selection(&self) -> bool {
        self.editor.document.cursor.has_selection()
    }

    /// Cuts selected text: copies to clipboard then deletes the selection.
    pub(crate) fn cut(&mut self) {
        self.copy();
        self.editor.document.delete_selection();
    }

    /// Copies selected text to the system clipboard.
    pub(crate) fn copy(&mut self) {
        let Some(text) = self.editor.document.selected_text() else {
            return;
        };
        if let Some(clipboard) = self.clipboard.as_mut() {
            if let Err(e) = clipboard.set_text(text) {
                tracing::warn!("Failed to copy to clipboard: {e}");
            }
        }
    }

    /// Pastes clipboard text at the caret, replacing the selection.
    pub(crate) fn paste(&mut self) {
        let Some(clipboard) = self.clipboard.as_mut() else {
            return;
        };
        match clipboard.get_text() {
            Ok(text) => self.editor.document.insert_text(&normalize_line_endings(&text)),
            Err(e) => tracing::warn!("Failed to read clipboard: {e}"),
        }
    }

    pub(crate) fn delete(&mut self) {
        self.editor.document.delete_selection();
    }

    /// Inserts the current time and date at the selection.
    pub(crate) fn insert_time_date(&mut self) {
        let stamp =
            plainpad_core::stamp::now_stamp(&self.config.time_format, &self.config.date_format);
        self.editor.document.insert_text(&stamp);
    }
}

#[cfg(test)]
mod tests {
    use super::super::*;
    use super::normalize_line_endings;

    fn test_app() -> App {
        App::from_parts(AppConfig::default(), Box::new(NativeFileDialogs), false)
    }

    #[test]
    fn test_has_selection_tracks_cursor() {
        let mut app = test_app();
        app.editor.document.insert_text("hello");
        assert!(!app.has_selection());
        app.editor.document.select(0, 2);
        assert!(app.has_selection());
    }

    #[test]
    fn test_cut_deletes_selection() {
        let mut app = test_app();
        app.editor.document.insert_text("hello world");
        app.editor.document.select(6, 11);
        // Clipboard is None in tests, so only verify deletion
        app.cut();
        assert_eq!(app.editor.document.text(), "hello ");
    }

    #[test]
    fn test_delete_without_selection_is_noop() {
        let mut app = test_app();
        app.editor.document.insert_text("hello");
        app.delete();
        assert_eq!(app.editor.document.text(), "hello");
    }

    #[test]
    fn test_insert_time_date_uses_config_formats() {
        let mut app = test_app();
        app.config.time_format = "T".to_string();
        app.config.date_format = "D".to_string();
        app.insert_time_date();
        assert_eq!(app.editor.document.text(), "T D");
    }

    #[test]
    fn test_paste_normalizes_line_endings() {
        assert_eq!(normalize_line_endings("hello\r\nworld"), "hello\nworld");
    }
}
