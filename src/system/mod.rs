pub mod clipboard;

pub use clipboard::{ClipboardWriter, CopyMethod};
