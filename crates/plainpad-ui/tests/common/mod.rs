#![allow(dead_code)]

use std::path::PathBuf;

use egui::Modifiers;
use egui_kittest::Harness;
use plainpad_ui::{App, FileDialogs, StartupArgs};

/// Prompts that answer with fixed paths; `None` means cancel.
#[derive(Debug, Default, Clone)]
pub struct ScriptedDialogs {
    pub open: Option<PathBuf>,
    pub save: Option<PathBuf>,
    pub print: Option<PathBuf>,
}

impl FileDialogs for ScriptedDialogs {
    fn pick_open(&mut self) -> Option<PathBuf> {
        self.open.clone()
    }

    fn pick_save(&mut self, _suggested_name: &str) -> Option<PathBuf> {
        self.save.clone()
    }

    fn pick_print_target(&mut self, _suggested_name: &str) -> Option<PathBuf> {
        self.print.clone()
    }
}

/// Creates a standard test harness with the app at 1024x768 and prompts that cancel.
pub fn create_harness() -> Harness<'static, App> {
    create_harness_with(ScriptedDialogs::default())
}

/// Creates a test harness whose file prompts answer from `dialogs`.
pub fn create_harness_with(dialogs: ScriptedDialogs) -> Harness<'static, App> {
    Harness::builder()
        .with_size(egui::Vec2::new(1024.0, 768.0))
        .build_eframe(move |cc| {
            App::with_file_dialogs(cc, StartupArgs::default(), Box::new(dialogs.clone()))
        })
}

/// The platform command modifier (Ctrl, or Cmd on macOS).
pub fn ctrl() -> Modifiers {
    Modifiers::COMMAND
}
