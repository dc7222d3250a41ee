use std::path::{Path, PathBuf};

use crate::app::services::encoding::TextEncoding;
use crate::app::services::text_ops::extract_filename;

pub const UNTITLED_LABEL: &str = "Untitled";

/// The document currently being edited: its text, where it lives on disk,
/// and whether it has unsaved modifications.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentSession {
    path: Option<PathBuf>,
    content: String,
    dirty: bool,
    encoding: TextEncoding,
}

impl DocumentSession {
    /// A fresh, clean, never-saved buffer.
    pub fn new_untitled() -> Self {
        Self {
            path: None,
            content: String::new(),
            dirty: false,
            encoding: TextEncoding::Utf8,
        }
    }

    pub(crate) fn from_loaded(path: PathBuf, content: String, encoding: TextEncoding) -> Self {
        Self {
            path: Some(path),
            content,
            dirty: false,
            encoding,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    /// File name for prompts and titles, or "Untitled".
    pub fn label(&self) -> String {
        match self.path {
            Some(ref path) => extract_filename(path),
            None => UNTITLED_LABEL.to_string(),
        }
    }

    /// Replace the buffer with text coming from the editor view.
    ///
    /// Returns whether anything changed. Identical text is not an edit and
    /// leaves the dirty flag alone.
    pub fn edit(&mut self, text: &str) -> bool {
        if self.content == text {
            return false;
        }
        self.content.clear();
        self.content.push_str(text);
        self.dirty = true;
        true
    }

    /// Abandon unsaved changes without touching storage.
    pub(crate) fn discard_changes(&mut self) {
        self.dirty = false;
    }

    /// Record a successful write of the current content to `path`.
    pub(crate) fn mark_saved(&mut self, path: PathBuf) {
        self.path = Some(path);
        self.dirty = false;
        self.encoding = TextEncoding::Utf8;
    }
}

impl Default for DocumentSession {
    fn default() -> Self {
        Self::new_untitled()
    }
}
