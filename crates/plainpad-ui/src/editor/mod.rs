mod diff;
mod theme;
mod widget;

pub use diff::{diff_chars, TextChange};
pub use theme::EditorTheme;
pub use widget::EditorView;
