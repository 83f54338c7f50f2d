//! Text area colors and font.

use egui::{Color32, FontId};

const DEFAULT_FONT_SIZE: f32 = 14.0;

#[derive(Debug, Clone)]
pub struct EditorTheme {
    pub font_size: f32,
    pub font_id: FontId,
    pub bg_color: Color32,
    pub text_color: Color32,
    pub selection_color: Color32,
}

impl Default for EditorTheme {
    fn default() -> Self {
        Self::light()
    }
}

impl EditorTheme {
    fn preset(bg_color: Color32, text_color: Color32, selection_color: Color32) -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            font_id: FontId::monospace(DEFAULT_FONT_SIZE),
            bg_color,
            text_color,
            selection_color,
        }
    }

    pub fn dark() -> Self {
        Self::preset(
            Color32::from_rgb(32, 33, 36),
            Color32::from_rgb(220, 220, 216),
            Color32::from_rgba_unmultiplied(38, 79, 120, 180),
        )
    }

    /// Black on white, like the classic notepad.
    pub fn light() -> Self {
        Self::preset(
            Color32::WHITE,
            Color32::BLACK,
            Color32::from_rgba_unmultiplied(0, 120, 215, 90),
        )
    }

    /// Same colors at another size. The config already clamps the size.
    pub fn with_font_size(self, font_size: f32) -> Self {
        Self {
            font_size,
            font_id: FontId::monospace(font_size),
            ..self
        }
    }

    /// Installs egui's dark or light visuals, recolored for the text area.
    pub fn apply_visuals(&self, ctx: &egui::Context, dark_mode: bool) {
        let base = if dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        ctx.set_visuals(egui::Visuals {
            extreme_bg_color: self.bg_color,
            selection: egui::style::Selection {
                bg_fill: self.selection_color,
                ..base.selection
            },
            ..base
        });
    }
}
