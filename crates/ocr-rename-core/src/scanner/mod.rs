pub mod walk;

pub use walk::{compile_ignore_patterns, has_extension, ImageScan};
