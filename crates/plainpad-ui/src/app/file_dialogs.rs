//! File prompts used by open, save-as and print.

use std::path::PathBuf;

/// Source of user-chosen paths. `None` means the prompt was cancelled.
pub trait FileDialogs {
    fn pick_open(&mut self) -> Option<PathBuf>;

    /// Asks for a destination to save the document to.
    fn pick_save(&mut self, suggested_name: &str) -> Option<PathBuf>;

    /// Asks for the PDF file a print job is written to.
    fn pick_print_target(&mut self, suggested_name: &str) -> Option<PathBuf>;
}

/// Native dialogs through `rfd`, starting in the user's home directory.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeFileDialogs;

impl NativeFileDialogs {
    fn dialog(title: &str) -> rfd::FileDialog {
        let dialog = rfd::FileDialog::new().set_title(title);
        match dirs::home_dir() {
            Some(dir) => dialog.set_directory(dir),
            None => dialog,
        }
    }
}

impl FileDialogs for NativeFileDialogs {
    fn pick_open(&mut self) -> Option<PathBuf> {
        Self::dialog("Open File").pick_file()
    }

    fn pick_save(&mut self, suggested_name: &str) -> Option<PathBuf> {
        Self::dialog("Save As")
            .set_file_name(suggested_name)
            .save_file()
    }

    fn pick_print_target(&mut self, suggested_name: &str) -> Option<PathBuf> {
        Self::dialog("Print to PDF")
            .add_filter("PDF", &["pdf"])
            .set_file_name(suggested_name)
            .save_file()
    }
}
