//! Editing model for plainpad: text buffer, selection, undo history,
//! text search, file decoding, and the editor state that the window drives.

pub mod buffer;
pub mod cursor;
pub mod document;
pub mod editor;
pub mod encoding;
pub mod handle;
pub mod history;
pub mod search;
pub mod signal;
pub mod stamp;

pub use document::Document;
pub use editor::{EditorState, FindNext};
pub use handle::DocumentHandle;
pub use search::{SearchDirection, SearchQuery};
pub use signal::Signal;
