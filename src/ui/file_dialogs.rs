use std::path::PathBuf;

use fltk::dialog::{self, FileDialogOptions, FileDialogType, NativeFileChooser};

use crate::app::domain::flavor::Flavor;
use crate::app::services::persistence::{FileFilter, PathChooser, PromptChoice, UserPrompt};

/// Native open/save dialogs. Remembers the directory of the last pick.
#[derive(Debug, Default)]
pub struct NativeChooser {
    last_directory: Option<PathBuf>,
}

impl NativeChooser {
    fn run(
        &mut self,
        kind: FileDialogType,
        title: &str,
        filters: &[FileFilter],
        preset: Option<&str>,
    ) -> Option<PathBuf> {
        let mut nfc = NativeFileChooser::new(kind);
        nfc.set_title(title);
        nfc.set_filter(&FileFilter::to_dialog_filter(filters));
        if let Some(ref dir) = self.last_directory {
            if let Err(e) = nfc.set_directory(dir) {
                log::debug!("Could not preset dialog directory {}: {:?}", dir.display(), e);
            }
        }
        if let Some(name) = preset {
            nfc.set_option(FileDialogOptions::SaveAsConfirm);
            nfc.set_preset_file(name);
        }
        nfc.show(); // blocks until close

        let filename = nfc.filename();
        if filename.as_os_str().is_empty() {
            return None;
        }
        self.last_directory = filename.parent().map(|p| p.to_path_buf());
        Some(filename)
    }
}

impl PathChooser for NativeChooser {
    fn choose_open_path(&mut self, filters: &[FileFilter]) -> Option<PathBuf> {
        self.run(FileDialogType::BrowseFile, "Open File", filters, None)
    }

    fn choose_save_path(&mut self, filters: &[FileFilter], default_ext: &str) -> Option<PathBuf> {
        let preset = format!("untitled.{}", default_ext);
        self.run(FileDialogType::BrowseSaveFile, "Save As", filters, Some(&preset))
    }
}

/// Save / Discard / Cancel message box worded for the active flavor.
pub struct NativePrompt {
    flavor: Flavor,
}

impl NativePrompt {
    pub fn new(flavor: Flavor) -> Self {
        Self { flavor }
    }
}

impl UserPrompt for NativePrompt {
    fn ask_save_discard_cancel(&mut self, document_label: &str) -> PromptChoice {
        let message = format!(
            "{}\n\n{}",
            self.flavor.prompt_title(),
            self.flavor.prompt_message(document_label)
        );
        // Closing the box with Escape or the window button counts as Cancel.
        match dialog::choice2_default(&message, "Save", "Discard", "Cancel") {
            Some(0) => PromptChoice::Save,
            Some(1) => PromptChoice::Discard,
            _ => PromptChoice::Cancel,
        }
    }
}
