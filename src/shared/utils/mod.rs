// Utility functions
// JSON export, clipboard interop, platform timers

pub mod export;
pub mod timers;

pub use export::{copy_to_clipboard, export_filename, posts_to_json, trigger_download};
pub use timers::sleep_ms;
