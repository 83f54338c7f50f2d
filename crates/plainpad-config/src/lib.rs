pub mod config;
pub mod print;

pub use config::{AppConfig, ThemeMode};
pub use print::{PageSize, PrintConfig};
