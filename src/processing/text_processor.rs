//! Text normalization applied before scoring

/// Prepares raw resume and job text for literal matching
#[derive(Debug, Clone)]
pub struct TextProcessor {
    lowercase: bool,
}

impl Default for TextProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextProcessor {
    pub fn new() -> Self {
        Self { lowercase: true }
    }

    /// Disable or enable case folding. With folding off, callers are
    /// responsible for passing already-lowercased text.
    pub fn with_lowercase(mut self, enable: bool) -> Self {
        self.lowercase = enable;
        self
    }

    pub fn normalize(&self, text: &str) -> String {
        if self.lowercase {
            text.to_lowercase()
        } else {
            text.to_string()
        }
    }
}
