//! Printing: lays the document out on pages and writes them as a PDF.

use std::path::Path;

use anyhow::{Context, Result};
use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str};
use plainpad_config::PrintConfig;

use super::App;

/// Resource name of the page font.
const FONT_NAME: &[u8] = b"F1";
/// Advance width of every Courier glyph, per point of font size.
const COURIER_ADVANCE: f32 = 0.6;
const LINE_SPACING: f32 = 1.2;
const TAB_WIDTH: usize = 4;

/// Splits `text` into pages of lines that fit the configured page.
///
/// Long lines are hard-wrapped and tabs expanded to spaces. An empty
/// document still yields one blank page.
pub fn layout_pages(text: &str, print: &PrintConfig) -> Vec<Vec<String>> {
    let (width, height) = print.page_size.dimensions_pt();
    let usable_w = width - 2.0 * print.margin_pt;
    let usable_h = height - 2.0 * print.margin_pt;
    let cols = ((usable_w / (print.font_size * COURIER_ADVANCE)).floor() as usize).max(1);
    let rows = ((usable_h / (print.font_size * LINE_SPACING)).floor() as usize).max(1);

    let mut lines = Vec::new();
    for line in text.split('\n') {
        let expanded = expand_tabs(line);
        let chars: Vec<char> = expanded.chars().collect();
        if chars.is_empty() {
            lines.push(String::new());
            continue;
        }
        lines.extend(chars.chunks(cols).map(|chunk| chunk.iter().collect::<String>()));
    }

    lines.chunks(rows).map(<[String]>::to_vec).collect()
}

/// Renders laid-out pages as a PDF using the built-in Courier font.
pub fn render_pdf(pages: &[Vec<String>], print: &PrintConfig) -> Vec<u8> {
    let (width, height) = print.page_size.dimensions_pt();
    let leading = print.font_size * LINE_SPACING;

    let catalog_id = Ref::new(1);
    let tree_id = Ref::new(2);
    let font_id = Ref::new(3);
    let ids: Vec<(Ref, Ref)> = (0..pages.len() as i32)
        .map(|i| (Ref::new(4 + 2 * i), Ref::new(5 + 2 * i)))
        .collect();

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(tree_id);
    pdf.pages(tree_id)
        .kids(ids.iter().map(|(page_id, _)| *page_id))
        .count(pages.len() as i32);
    pdf.type1_font(font_id)
        .base_font(Name(b"Courier"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));

    for (lines, (page_id, content_id)) in pages.iter().zip(&ids) {
        let mut page = pdf.page(*page_id);
        page.media_box(Rect::new(0.0, 0.0, width, height));
        page.parent(tree_id);
        page.contents(*content_id);
        page.resources().fonts().pair(Name(FONT_NAME), font_id);
        page.finish();

        let mut content = Content::new();
        content.begin_text();
        content.set_font(Name(FONT_NAME), print.font_size);
        content.next_line(print.margin_pt, height - print.margin_pt - print.font_size);
        for line in lines {
            content.show(Str(&to_win_ansi(line)));
            content.next_line(0.0, -leading);
        }
        content.end_text();
        pdf.stream(*content_id, &content.finish());
    }

    pdf.finish()
}

/// Lays out and writes `text` to `path`. Returns the page count.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub(crate) fn write_pdf(text: &str, print: &PrintConfig, path: &Path) -> Result<usize> {
    let pages = layout_pages(text, print);
    let bytes = render_pdf(&pages, print);
    std::fs::write(path, bytes)
        .with_context(|| format!("failed to write file: {}", path.display()))?;
    Ok(pages.len())
}

fn expand_tabs(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut col = 0;
    for c in line.chars() {
        if c == '\t' {
            let pad = TAB_WIDTH - col % TAB_WIDTH;
            out.push_str(&" ".repeat(pad));
            col += pad;
        } else {
            out.push(c);
            col += 1;
        }
    }
    out
}

/// Maps text onto single-byte WinAnsi codes; anything outside Latin-1 becomes `?`.
fn to_win_ansi(line: &str) -> Vec<u8> {
    line.chars()
        .map(|c| match u32::from(c) {
            code @ 0x20..=0x7E | code @ 0xA0..=0xFF => code as u8,
            _ => b'?',
        })
        .collect()
}

impl App {
    /// Prints the document to a PDF chosen by the user.
    pub(crate) fn print(&mut self) {
        let suggested = self.suggested_file_name("pdf");
        let Some(path) = self.file_dialogs.pick_print_target(&suggested) else {
            self.show_warning("Cannot be used on non-native printers".to_string());
            return;
        };

        let text = self.editor.document.text();
        match write_pdf(&text, &self.config.print, &path) {
            Ok(page_count) => {
                tracing::info!("Printed {page_count} page(s) to {}", path.display());
                if self.config.print.open_after_print {
                    if let Err(e) = opener::open(&path) {
                        tracing::warn!("Failed to open {}: {e}", path.display());
                    }
                }
            }
            Err(e) => {
                tracing::error!("Failed to print: {e:#}");
                self.show_warning(format!("Cannot print file: {e:#}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plainpad_config::PageSize;

    fn small_page() -> PrintConfig {
        // 595pt A4 width minus 2 * 284pt margins leaves 27pt: 4 Courier columns at 10pt
        PrintConfig {
            page_size: PageSize::A4,
            font_size: 10.0,
            margin_pt: 284.0,
            open_after_print: false,
        }
    }

    #[test]
    fn test_empty_text_is_one_blank_page() {
        let pages = layout_pages("", &PrintConfig::default());
        assert_eq!(pages, vec![vec![String::new()]]);
    }

    #[test]
    fn test_long_lines_wrap_to_page_width() {
        let pages = layout_pages("abcdefghij", &small_page());
        let lines: Vec<String> = pages.into_iter().flatten().collect();
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_lines_flow_onto_new_pages() {
        let print = PrintConfig::default();
        let (_, h) = print.page_size.dimensions_pt();
        let rows = ((h - 2.0 * print.margin_pt) / (print.font_size * LINE_SPACING)).floor() as usize;
        let text = vec!["x"; rows + 1].join("\n");

        let pages = layout_pages(&text, &print);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].len(), rows);
        assert_eq!(pages[1], vec!["x".to_string()]);
    }

    #[test]
    fn test_tabs_expand_to_tab_stops() {
        assert_eq!(expand_tabs("a\tb"), "a   b");
        assert_eq!(expand_tabs("\tx"), "    x");
    }

    #[test]
    fn test_non_latin_chars_become_question_marks() {
        assert_eq!(to_win_ansi("é→a"), vec![0xE9, b'?', b'a']);
    }

    #[test]
    fn test_render_pdf_has_header_and_pages() {
        let pages = vec![vec!["one".to_string()], vec!["two".to_string()]];
        let bytes = render_pdf(&pages, &PrintConfig::default());
        assert!(bytes.starts_with(b"%PDF-"));
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/Courier"));
        assert!(text.contains("/Count 2"));
    }

    #[test]
    fn test_write_pdf_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = write_pdf("x", &PrintConfig::default(), &dir.path().join("no").join("a.pdf"))
            .unwrap_err();
        assert!(format!("{err:#}").contains("failed to write file"));
    }
}
