//! Top-level application tying together the editor, dialogs, menus, and status bar.

mod clipboard;
mod file_dialogs;
mod file_ops;
mod menu_bar;
mod print;
mod shortcuts;
mod status_bar;

use std::path::PathBuf;

use eframe::egui;

use plainpad_config::{AppConfig, ThemeMode};
use plainpad_core::{EditorState, FindNext};

use crate::dialogs::{FindDialog, ReplaceDialog};
use crate::editor::{EditorTheme, EditorView};

pub use file_dialogs::{FileDialogs, NativeFileDialogs};
pub use print::{layout_pages, render_pdf};

/// Arguments passed from the command line to the application.
#[derive(Debug, Clone, Default)]
pub struct StartupArgs {
    /// File to open on startup.
    pub file: Option<PathBuf>,
    pub config: AppConfig,
}

/// Resolves `System` to dark or light using the OS preference.
fn resolve_dark_mode(mode: ThemeMode) -> bool {
    match mode {
        ThemeMode::Dark => true,
        ThemeMode::Light => false,
        ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
    }
}

/// The main application state.
pub struct App {
    pub editor: EditorState,
    pub find_dialog: FindDialog<EditorState>,
    pub replace_dialog: ReplaceDialog<EditorState>,
    pub view: EditorView,
    pub theme: EditorTheme,
    pub config: AppConfig,
    file_dialogs: Box<dyn FileDialogs>,
    clipboard: Option<arboard::Clipboard>,
    dialog_state: DialogState,
    last_window_title: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) enum DialogState {
    #[default]
    None,
    Warning(String),
}

impl App {
    /// Creates a new application instance using native file dialogs.
    pub fn new(cc: &eframe::CreationContext<'_>, args: StartupArgs) -> Self {
        Self::with_file_dialogs(cc, args, Box::new(NativeFileDialogs))
    }

    /// Creates a new application instance that prompts for paths through `file_dialogs`.
    pub fn with_file_dialogs(
        cc: &eframe::CreationContext<'_>,
        args: StartupArgs,
        file_dialogs: Box<dyn FileDialogs>,
    ) -> Self {
        let dark_mode = resolve_dark_mode(args.config.theme_mode());
        let mut app = Self::from_parts(args.config, file_dialogs, dark_mode);
        app.theme.apply_visuals(&cc.egui_ctx, dark_mode);
        app.clipboard = match arboard::Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(e) => {
                tracing::warn!("Clipboard unavailable: {e}");
                None
            }
        };

        if let Some(path) = args.file {
            app.open_path(&path);
        }
        app
    }

    /// Builds the window state without touching egui or the system clipboard.
    fn from_parts(config: AppConfig, file_dialogs: Box<dyn FileDialogs>, dark_mode: bool) -> Self {
        let theme = if dark_mode {
            EditorTheme::dark()
        } else {
            EditorTheme::light()
        }
        .with_font_size(config.font_size);

        let mut find_dialog = FindDialog::new();
        let mut replace_dialog = ReplaceDialog::new();
        connect_dialogs(&mut find_dialog, &mut replace_dialog);

        Self {
            editor: EditorState::default(),
            find_dialog,
            replace_dialog,
            view: EditorView::new(),
            theme,
            config,
            file_dialogs,
            clipboard: None,
            dialog_state: DialogState::None,
            last_window_title: String::new(),
        }
    }

    /// Message of the warning window currently shown, if any.
    pub fn warning(&self) -> Option<&str> {
        match &self.dialog_state {
            DialogState::Warning(message) => Some(message),
            DialogState::None => None,
        }
    }

    pub(crate) fn show_warning(&mut self, message: String) {
        tracing::warn!("{message}");
        self.dialog_state = DialogState::Warning(message);
    }

    /// Repeats the last search, or opens the Find dialog when nothing was searched yet.
    pub fn find_next(&mut self) {
        if self.editor.on_find_next() == FindNext::ShowFindDialog {
            self.find_dialog.open();
        }
    }

    /// Updates the OS window title.
    ///
    /// Only sends the viewport command when the title actually changes,
    /// to avoid triggering unnecessary repaints.
    fn update_window_title(&mut self, ctx: &egui::Context) {
        let title = self.editor.window_title();
        if title != self.last_window_title {
            self.last_window_title.clone_from(&title);
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title));
        }
    }

    /// Shows the find/replace dialogs and the warning window.
    fn show_dialogs(&mut self, ctx: &egui::Context) {
        self.find_dialog.show(ctx, &mut self.editor);
        self.replace_dialog.show(ctx, &mut self.editor);

        if let DialogState::Warning(message) = &self.dialog_state {
            let mut open = true;
            let mut acknowledged = false;
            egui::Window::new("Warning")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .open(&mut open)
                .show(ctx, |ui| {
                    ui.spacing_mut().item_spacing.y = 8.0;
                    ui.label(message.as_str());
                    if ui.button("  OK  ").clicked() {
                        acknowledged = true;
                    }
                });
            if !open || acknowledged {
                self.dialog_state = DialogState::None;
            }
        }
    }
}

/// Routes dialog events to the editor's handlers.
fn connect_dialogs(find: &mut FindDialog<EditorState>, replace: &mut ReplaceDialog<EditorState>) {
    find.find_requested.connect(|editor, query| {
        editor.on_find_requested(query.clone());
    });
    replace.find_requested.connect(|editor, query| {
        editor.on_find_requested(query.clone());
    });
    replace.replace_one_requested.connect(|editor, with| {
        editor.on_replace_one_requested(with);
    });
    replace.replace_all_requested.connect(|editor, request| {
        editor.on_replace_all_requested(request.query.clone(), &request.with);
    });
    tracing::debug!(
        "Dialogs connected: {} find, {} replace handlers",
        find.find_requested.handler_count(),
        replace.find_requested.handler_count()
            + replace.replace_one_requested.handler_count()
            + replace.replace_all_requested.handler_count()
    );
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Must run before the text area so it never sees these keys
        self.handle_global_shortcuts(ctx);

        self.update_window_title(ctx);

        let panel_fill = ctx.style().visuals.panel_fill;
        let faint_bg = ctx.style().visuals.faint_bg_color;

        egui::TopBottomPanel::top("menu_bar")
            .frame(
                egui::Frame::new()
                    .fill(panel_fill)
                    .inner_margin(egui::Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                self.show_menu_bar(ui, ctx);
            });

        egui::TopBottomPanel::bottom("status_bar")
            .max_height(24.0)
            .frame(
                egui::Frame::new()
                    .fill(faint_bg)
                    .inner_margin(egui::Margin::symmetric(8, 3)),
            )
            .show(ctx, |ui| {
                self.show_status_bar(ui);
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(self.theme.bg_color))
            .show(ctx, |ui| {
                self.view.show(ui, &mut self.editor.document, &self.theme);
            });

        self.show_dialogs(ctx);
    }
}
