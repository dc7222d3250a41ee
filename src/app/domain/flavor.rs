//! Per-OS presentation rules.
//!
//! The three editor variants share one document lifecycle and differ only in
//! wording, dialog filters, line endings and which encodings they try when
//! opening a file.

use serde::{Deserialize, Serialize};

use crate::app::domain::document::DocumentSession;
use crate::app::services::encoding::{EncodingPolicy, TextEncoding};
use crate::app::services::persistence::FileFilter;
use crate::app::services::text_ops::LineEnding;

pub const DEFAULT_EXTENSION: &str = "txt";

const TEXT_FILES: FileFilter = FileFilter::new("Text files", &["txt"]);
const ALL_FILES: FileFilter = FileFilter::new("All files", &[]);
const PYTHON_FILES: FileFilter = FileFilter::new("Python files", &["py"]);

const WINDOWS_OPEN: &[FileFilter] = &[TEXT_FILES, ALL_FILES];
const LINUX_OPEN: &[FileFilter] = &[
    TEXT_FILES,
    PYTHON_FILES,
    FileFilter::new("Configuration files", &["conf", "ini", "cfg"]),
    ALL_FILES,
];
const LINUX_SAVE: &[FileFilter] = &[TEXT_FILES, PYTHON_FILES, ALL_FILES];
const MACOS_OPEN: &[FileFilter] = &[
    TEXT_FILES,
    ALL_FILES,
    PYTHON_FILES,
    FileFilter::new("HTML files", &["html", "htm"]),
    FileFilter::new("CSS files", &["css"]),
    FileFilter::new("JavaScript files", &["js"]),
    FileFilter::new("Markdown files", &["md"]),
];
const MACOS_SAVE: &[FileFilter] = &[
    TEXT_FILES,
    ALL_FILES,
    PYTHON_FILES,
    FileFilter::new("HTML files", &["html"]),
    FileFilter::new("Markdown files", &["md"]),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Flavor {
    Windows,
    Linux,
    MacOs,
}

impl Flavor {
    /// The flavor matching the platform this binary was built for.
    pub fn current() -> Self {
        if cfg!(target_os = "linux") {
            Self::Linux
        } else if cfg!(target_os = "macos") {
            Self::MacOs
        } else {
            Self::Windows
        }
    }

    pub fn app_name(&self) -> &'static str {
        match self {
            Self::Linux => "Linux Notepad",
            Self::Windows | Self::MacOs => "Notepad",
        }
    }

    pub fn window_title(&self, doc: &DocumentSession) -> String {
        let name = doc.path().map(|_| doc.label());
        let title = match (self, name) {
            (Self::Windows, Some(name)) => format!("Notepad - {}", name),
            (Self::Windows, None) => "Notepad - New File".to_string(),
            (Self::Linux, Some(name)) => format!("{} - Linux Notepad", name),
            (Self::Linux, None) => "New file - Linux Notepad".to_string(),
            (Self::MacOs, Some(name)) => format!("{} - Notepad", name),
            (Self::MacOs, None) => "Untitled - Notepad".to_string(),
        };
        if *self == Self::MacOs && doc.is_dirty() {
            format!("\u{2022} {}", title)
        } else {
            title
        }
    }

    pub fn prompt_title(&self) -> &'static str {
        match self {
            Self::MacOs => "Save Changes",
            Self::Windows | Self::Linux => "Unsaved Changes",
        }
    }

    pub fn prompt_message(&self, document_label: &str) -> String {
        match self {
            Self::Windows => "You have unsaved changes. Save?".to_string(),
            Self::Linux => "Save changes before continuing?".to_string(),
            Self::MacOs => format!(
                "Do you want to save the changes you made to the document \"{}\"?",
                document_label
            ),
        }
    }

    /// Status bar text reflecting the dirty flag.
    pub fn modified_status(&self, doc: &DocumentSession) -> String {
        match (self, doc.is_dirty()) {
            (Self::Windows, true) => "Changes not saved".to_string(),
            (Self::Linux, true) => "Unsaved changes".to_string(),
            (Self::MacOs, true) => "Modified".to_string(),
            (Self::Linux, false) if doc.path().is_some() => doc.label(),
            (Self::Linux, false) => "New file".to_string(),
            (Self::Windows | Self::MacOs, false) => "Ready".to_string(),
        }
    }

    pub fn new_file_status(&self) -> &'static str {
        match self {
            Self::Linux => "New file",
            Self::Windows | Self::MacOs => "New file created",
        }
    }

    pub fn opened_status(&self, name: &str, encoding: TextEncoding) -> String {
        match self {
            Self::Windows => format!("Opened file: {}", name),
            Self::Linux => format!("Opened: {}", name),
            Self::MacOs if encoding != TextEncoding::Utf8 => {
                format!("Opened with alternative encoding: {}", name)
            }
            Self::MacOs => format!("Opened: {}", name),
        }
    }

    pub fn saved_status(&self, name: &str) -> String {
        match self {
            Self::Windows => format!("File saved: {}", name),
            Self::Linux | Self::MacOs => format!("Saved: {}", name),
        }
    }

    pub fn encoding_policy(&self) -> EncodingPolicy {
        match self {
            Self::Windows => EncodingPolicy::utf8_only(),
            Self::Linux => EncodingPolicy::new(vec![
                TextEncoding::Utf8,
                TextEncoding::Windows1251,
                TextEncoding::Latin1,
            ]),
            Self::MacOs => EncodingPolicy::new(vec![TextEncoding::Utf8, TextEncoding::Latin1]),
        }
    }

    pub fn open_filters(&self) -> &'static [FileFilter] {
        match self {
            Self::Windows => WINDOWS_OPEN,
            Self::Linux => LINUX_OPEN,
            Self::MacOs => MACOS_OPEN,
        }
    }

    pub fn save_filters(&self) -> &'static [FileFilter] {
        match self {
            Self::Windows => WINDOWS_OPEN,
            Self::Linux => LINUX_SAVE,
            Self::MacOs => MACOS_SAVE,
        }
    }

    pub fn line_ending(&self) -> LineEnding {
        match self {
            Self::Windows => LineEnding::CrLf,
            Self::Linux | Self::MacOs => LineEnding::Lf,
        }
    }
}
