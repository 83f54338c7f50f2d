//! egui front end for plainpad: the editor window, its menus, and the
//! modeless Find and Replace dialogs.

pub mod app;
pub mod dialogs;
pub mod editor;

pub use app::{App, FileDialogs, NativeFileDialogs, StartupArgs};
pub use dialogs::{FindDialog, ReplaceAllRequest, ReplaceDialog};
