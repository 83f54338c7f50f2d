//! Text area bound to a [`Document`].
//!
//! egui's `TextEdit` edits a plain `String`, so the view keeps a mirror of the
//! document text. Each frame the mirror is refreshed when the document changed
//! underneath it (open, undo, replace), and user edits made in the widget are
//! diffed back into the document so they go through its undo history.

use egui::text::{CCursor, CCursorRange};
use egui::text_edit::TextEditState;
use egui::{Id, Response, Ui};
use plainpad_core::Document;

use super::diff::diff_chars;
use super::theme::EditorTheme;

/// Stateful view over the editor's document.
#[derive(Debug)]
pub struct EditorView {
    id: Id,
    mirror: String,
    /// `content_version` the mirror was last synced to.
    synced_content: Option<u64>,
    /// `selection_version` last pushed into the widget.
    synced_selection: Option<u64>,
}

impl Default for EditorView {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorView {
    pub fn new() -> Self {
        Self {
            id: Id::new("plainpad_editor"),
            mirror: String::new(),
            synced_content: None,
            synced_selection: None,
        }
    }

    /// Renders the text area for `doc` and applies what the user did in it.
    pub fn show(&mut self, ui: &mut Ui, doc: &mut Document, theme: &EditorTheme) -> Response {
        if self.synced_content != Some(doc.content_version) {
            self.mirror = doc.text();
            self.synced_content = Some(doc.content_version);
        }
        if self.synced_selection != Some(doc.selection_version) {
            self.push_selection(ui.ctx(), doc);
            self.synced_selection = Some(doc.selection_version);
        }

        let output = egui::ScrollArea::vertical()
            .id_salt("editor_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                egui::TextEdit::multiline(&mut self.mirror)
                    .id(self.id)
                    .font(theme.font_id.clone())
                    .text_color(theme.text_color)
                    .background_color(theme.bg_color)
                    .frame(false)
                    .lock_focus(true)
                    .desired_width(f32::INFINITY)
                    .desired_rows(1)
                    .min_size(ui.available_size())
                    .show(ui)
            })
            .inner;

        if output.response.changed() {
            self.apply_edit(doc);
        }
        if let Some(range) = output.state.cursor.char_range() {
            doc.sync_selection_from_view(range.secondary.index, range.primary.index);
        }

        output.response
    }

    /// Writes a widget edit back into the document as one range replacement.
    fn apply_edit(&mut self, doc: &mut Document) {
        if let Some(change) = diff_chars(&doc.text(), &self.mirror) {
            if !doc.replace_range(change.start, change.end, &change.inserted) {
                tracing::warn!("Editor change could not be applied, resyncing view");
                self.mirror = doc.text();
            }
        }
        // The widget already shows the new text and owns the caret
        self.synced_content = Some(doc.content_version);
        self.synced_selection = Some(doc.selection_version);
    }

    /// Pushes a selection made by the editor (find, replace, undo) into the widget.
    fn push_selection(&self, ctx: &egui::Context, doc: &Document) {
        let head = doc.cursor.position;
        let anchor = doc.cursor.anchor.unwrap_or(head);
        let mut state = TextEditState::load(ctx, self.id).unwrap_or_default();
        state
            .cursor
            .set_char_range(Some(CCursorRange::two(CCursor::new(anchor), CCursor::new(head))));
        state.store(ctx, self.id);
    }
}
