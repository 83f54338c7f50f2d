//! Page setup used when printing to PDF.

use serde::{Deserialize, Serialize};

/// Paper size of printed pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PageSize {
    #[default]
    A4,
    Letter,
}

impl PageSize {
    /// Width and height in PDF points (1/72 inch).
    pub fn dimensions_pt(self) -> (f32, f32) {
        match self {
            Self::A4 => (595.0, 842.0),
            Self::Letter => (612.0, 792.0),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PrintConfig {
    pub page_size: PageSize,
    /// Font size of printed text, in points.
    pub font_size: f32,
    /// Margin on every side, in points.
    pub margin_pt: f32,
    /// Hand the written PDF to the system viewer.
    pub open_after_print: bool,
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            page_size: PageSize::A4,
            font_size: 10.0,
            margin_pt: 56.0,
            open_after_print: false,
        }
    }
}

impl PrintConfig {
    /// Clamps values so at least one line fits on a page.
    pub fn sanitize(&mut self) {
        self.font_size = self.font_size.clamp(4.0, 48.0);
        let (w, h) = self.page_size.dimensions_pt();
        let max_margin = (w.min(h) - self.font_size * 2.0) / 2.0;
        self.margin_pt = self.margin_pt.clamp(0.0, max_margin);
    }
}
