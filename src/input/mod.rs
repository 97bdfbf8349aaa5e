//! Input sourcing
//! Handles file detection, text extraction and the inline-text fallback

pub mod file_detector;
pub mod text_extractor;
pub mod manager;

pub use manager::{InputManager, TextSource};
