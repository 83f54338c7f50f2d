//! Menu bar rendering for the editor application.
//!
//! Contains the File and Edit menus.

use eframe::egui;

use super::App;

impl App {
    /// Renders the menu bar with File and Edit menus. Greyed out while a
    /// warning is waiting to be acknowledged.
    pub(crate) fn show_menu_bar(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        if self.is_warning_open() {
            ui.disable();
        }
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.add(menu_item("New", "Ctrl+N")).clicked() {
                    self.new_document();
                    ui.close();
                }
                if ui.add(menu_item("Open...", "Ctrl+O")).clicked() {
                    ui.close();
                    self.open_file();
                }
                if ui.add(menu_item("Save", "Ctrl+S")).clicked() {
                    ui.close();
                    self.save();
                }
                if ui.add(menu_item("Save As...", "Ctrl+Shift+S")).clicked() {
                    ui.close();
                    self.save_as();
                }
                ui.separator();
                if ui.add(menu_item("Print...", "Ctrl+P")).clicked() {
                    ui.close();
                    self.print();
                }
                ui.separator();
                if ui.button("Exit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    ui.close();
                }
            });

            ui.menu_button("Edit", |ui| {
                let can_undo = self.editor.document.history.can_undo();
                let can_redo = self.editor.document.history.can_redo();
                let has_selection = self.has_selection();

                if ui
                    .add_enabled(can_undo, menu_item("Undo", "Ctrl+Z"))
                    .clicked()
                {
                    self.editor.document.undo();
                    ui.close();
                }
                if ui
                    .add_enabled(can_redo, menu_item("Redo", "Ctrl+Y"))
                    .clicked()
                {
                    self.editor.document.redo();
                    ui.close();
                }
                ui.separator();
                if ui
                    .add_enabled(has_selection, menu_item("Cut", "Ctrl+X"))
                    .clicked()
                {
                    self.cut();
                    ui.close();
                }
                if ui
                    .add_enabled(has_selection, menu_item("Copy", "Ctrl+C"))
                    .clicked()
                {
                    self.copy();
                    ui.close();
                }
                if ui.add(menu_item("Paste", "Ctrl+V")).clicked() {
                    self.paste();
                    ui.close();
                }
                if ui
                    .add_enabled(has_selection, menu_item("Delete", "Del"))
                    .clicked()
                {
                    self.delete();
                    ui.close();
                }
                ui.separator();
                if ui.add(menu_item("Find...", "Ctrl+F")).clicked() {
                    self.find_dialog.open();
                    ui.close();
                }
                if ui.add(menu_item("Find Next", "F3")).clicked() {
                    self.find_next();
                    ui.close();
                }
                if ui.add(menu_item("Replace...", "Ctrl+H")).clicked() {
                    self.replace_dialog.open();
                    ui.close();
                }
                ui.separator();
                if ui.add(menu_item("Select All", "Ctrl+A")).clicked() {
                    self.editor.document.select_all();
                    ui.close();
                }
                if ui.add(menu_item("Time/Date", "F5")).clicked() {
                    self.insert_time_date();
                    ui.close();
                }
            });
        });
    }
}

fn menu_item<'a>(label: &'a str, shortcut: &'a str) -> egui::Button<'a> {
    egui::Button::new(label).shortcut_text(shortcut)
}
