//! Status bar rendering for the editor application.
//!
//! Shows cursor position, line count, encoding and line ending.

use eframe::egui;

use super::App;

impl App {
    /// Renders the status bar at the bottom of the application window.
    pub(crate) fn show_status_bar(&mut self, ui: &mut egui::Ui) {
        let doc = &self.editor.document;
        let pos = doc.caret_line_col();
        let line_count = doc.buffer.len_lines();
        let encoding = doc.encoding;
        let line_ending = doc.line_ending;

        ui.horizontal(|ui| {
            ui.add(
                egui::Label::new(format!("Ln {}, Col {}", pos.line + 1, pos.col + 1))
                    .selectable(false),
            );
            ui.separator();
            ui.add(egui::Label::new(format!("{line_count} lines")).selectable(false));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add(egui::Label::new(format!("{line_ending}")).selectable(false));
                ui.separator();
                ui.add(egui::Label::new(format!("{encoding}")).selectable(false));
            });
        });
    }
}
