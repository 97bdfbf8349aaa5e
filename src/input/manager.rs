//! Input manager: resolves a CLI argument to resume or job text
//!
//! An argument is either a path to a supported file or the text itself.

use crate::error::{Result, ScreenerError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor};
use log::{info, warn};
use std::collections::HashMap;
use std::path::Path;

/// Where a resolved text came from
#[derive(Debug, Clone, PartialEq)]
pub enum TextSource {
    File(FileType),
    Inline,
}

pub struct InputManager {
    cache: HashMap<String, String>,
    enable_cache: bool,
    inline_fallback: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
            inline_fallback: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    pub fn with_inline_fallback(mut self, enable: bool) -> Self {
        self.inline_fallback = enable;
        self
    }

    /// Resolve an argument: a supported existing file is read, anything
    /// else is taken verbatim when inline fallback is enabled.
    pub async fn resolve(&mut self, arg: &str) -> Result<(String, TextSource)> {
        let path = Path::new(arg);
        let file_type = FileType::from_path(path);

        if file_type.is_supported() && path.is_file() {
            let text = self.extract_text(path).await?;
            return Ok((text, TextSource::File(file_type)));
        }

        if !self.inline_fallback {
            return Err(ScreenerError::InvalidInput(format!(
                "Not a readable .txt, .md or .pdf file: {}",
                arg
            )));
        }

        if file_type.is_supported() {
            warn!("'{}' looks like a file path but does not exist; using it as inline text", arg);
        } else {
            info!("Using inline text ({} characters)", arg.chars().count());
        }
        Ok((arg.to_string(), TextSource::Inline))
    }

    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached_text) = self.cache.get(&path_str) {
                info!("Using cached text for: {}", path.display());
                return Ok(cached_text.clone());
            }
        }

        if !path.exists() {
            return Err(ScreenerError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let text = match FileType::from_path(path) {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await?
            }
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await?
            }
            FileType::Unknown => {
                return Err(ScreenerError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    path.display()
                )));
            }
        };

        if self.enable_cache {
            self.cache.insert(path_str, text.clone());
        }

        Ok(text)
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}
