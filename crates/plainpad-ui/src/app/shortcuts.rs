//! Global keyboard shortcut handling.
//!
//! Shortcuts are consumed from the input queue so the text area does not
//! also act on them (its own undo stack would otherwise bypass the document).

use eframe::egui;
use egui::{Key, KeyboardShortcut, Modifiers};

use super::{App, DialogState};

const NEW: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::N);
const OPEN: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::O);
const SAVE: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::S);
const SAVE_AS: KeyboardShortcut =
    KeyboardShortcut::new(Modifiers::COMMAND.plus(Modifiers::SHIFT), Key::S);
const PRINT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::P);
const UNDO: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
const REDO: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Y);
const FIND: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::F);
const REPLACE: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::H);
const FIND_NEXT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::NONE, Key::F3);
const TIME_DATE: KeyboardShortcut = KeyboardShortcut::new(Modifiers::NONE, Key::F5);

/// Actions reachable from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShortcutAction {
    New,
    Open,
    Save,
    SaveAs,
    Print,
    Undo,
    Redo,
    Find,
    Replace,
    FindNext,
    TimeDate,
    CloseDialogs,
}

impl App {
    /// Returns true if the warning window is blocking the editor.
    pub(crate) fn is_warning_open(&self) -> bool {
        matches!(self.dialog_state, DialogState::Warning(_))
    }

    /// Handles global keyboard shortcuts.
    pub(crate) fn handle_global_shortcuts(&mut self, ctx: &egui::Context) {
        let Some(action) = ctx.input_mut(take_shortcut) else {
            return;
        };
        tracing::trace!("Shortcut {action:?}");

        if action == ShortcutAction::CloseDialogs {
            self.find_dialog.close();
            self.replace_dialog.close();
            self.dialog_state = DialogState::None;
            return;
        }
        if self.is_warning_open() {
            return;
        }

        match action {
            ShortcutAction::New => self.new_document(),
            ShortcutAction::Open => self.open_file(),
            ShortcutAction::Save => self.save(),
            ShortcutAction::SaveAs => self.save_as(),
            ShortcutAction::Print => self.print(),
            ShortcutAction::Undo => self.editor.document.undo(),
            ShortcutAction::Redo => self.editor.document.redo(),
            ShortcutAction::Find => self.find_dialog.open(),
            ShortcutAction::Replace => self.replace_dialog.open(),
            ShortcutAction::FindNext => self.find_next(),
            ShortcutAction::TimeDate => self.insert_time_date(),
            ShortcutAction::CloseDialogs => {}
        }
    }
}

/// Consumes at most one shortcut per frame.
///
/// Ctrl+Shift+S is checked before Ctrl+S, which would otherwise match it too.
fn take_shortcut(input: &mut egui::InputState) -> Option<ShortcutAction> {
    let table = [
        (SAVE_AS, ShortcutAction::SaveAs),
        (SAVE, ShortcutAction::Save),
        (NEW, ShortcutAction::New),
        (OPEN, ShortcutAction::Open),
        (PRINT, ShortcutAction::Print),
        (UNDO, ShortcutAction::Undo),
        (REDO, ShortcutAction::Redo),
        (FIND, ShortcutAction::Find),
        (REPLACE, ShortcutAction::Replace),
        (FIND_NEXT, ShortcutAction::FindNext),
        (TIME_DATE, ShortcutAction::TimeDate),
    ];
    for (shortcut, action) in table {
        if input.consume_shortcut(&shortcut) {
            return Some(action);
        }
    }
    if input.consume_key(Modifiers::NONE, Key::Escape) {
        return Some(ShortcutAction::CloseDialogs);
    }
    None
}
