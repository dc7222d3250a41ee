//! Collaborators the document session depends on but does not implement:
//! storage, path selection and the save/discard/cancel prompt.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Reads and writes document bytes.
pub trait FilePersistence {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
    fn write(&mut self, path: &Path, text: &str) -> io::Result<()>;
}

/// Asks the user for a file location. `None` means the user cancelled.
pub trait PathChooser {
    fn choose_open_path(&mut self, filters: &[FileFilter]) -> Option<PathBuf>;
    fn choose_save_path(&mut self, filters: &[FileFilter], default_ext: &str) -> Option<PathBuf>;
}

/// The answer to "save changes first?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptChoice {
    Save,
    Discard,
    Cancel,
}

pub trait UserPrompt {
    fn ask_save_discard_cancel(&mut self, document_label: &str) -> PromptChoice;
}

/// A named group of glob patterns for a file dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFilter {
    pub description: &'static str,
    pub patterns: &'static [&'static str],
}

impl FileFilter {
    pub const fn new(description: &'static str, patterns: &'static [&'static str]) -> Self {
        Self {
            description,
            patterns,
        }
    }

    /// Glob in the `*.{a,b}` form native dialogs understand.
    pub fn glob(&self) -> String {
        match self.patterns {
            [] => "*".to_string(),
            [single] => format!("*.{}", single),
            many => format!("*.{{{}}}", many.join(",")),
        }
    }

    /// One `Description\tPattern` line per filter, as FLTK expects.
    pub fn to_dialog_filter(filters: &[FileFilter]) -> String {
        filters
            .iter()
            .map(|f| format!("{}\t{}", f.description, f.glob()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Plain file-system storage. Text is always written as UTF-8.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsPersistence;

impl FilePersistence for FsPersistence {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn write(&mut self, path: &Path, text: &str) -> io::Result<()> {
        fs::write(path, text.as_bytes())
    }
}
