pub mod audio;
pub mod clipboard;
