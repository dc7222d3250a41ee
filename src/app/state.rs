use std::path::Path;

use fltk::{app::Sender, dialog, prelude::*, text::WrapMode};

use crate::app::controllers::session::{
    Collaborators, GateResult, OpenOutcome, SaveOutcome, SessionController,
};
use crate::app::domain::messages::Message;
use crate::app::domain::settings::AppSettings;
use crate::app::infrastructure::error::{AppError, Result};
use crate::app::services::persistence::FsPersistence;
use crate::app::services::text_ops::{
    convert_line_endings, cursor_status, extract_filename, line_and_column, line_count, reindent,
};
use crate::ui::dialogs::about::show_about_dialog;
use crate::ui::dialogs::find::show_find_dialog;
use crate::ui::dialogs::goto_line::show_goto_line_dialog;
use crate::ui::file_dialogs::{NativeChooser, NativePrompt};
use crate::ui::main_window::MainWidgets;
use crate::ui::menu::build_menu;

/// Glue between the FLTK widgets and the document session.
///
/// The editor widget is only a view: every user edit is copied into the
/// controller, and every load or New pushes the controller's text back into
/// the widget.
pub struct AppState {
    pub controller: SessionController,
    pub settings: AppSettings,
    pub widgets: MainWidgets,
    pub sender: Sender<Message>,
    storage: FsPersistence,
    chooser: NativeChooser,
    prompt: NativePrompt,
}

impl AppState {
    pub fn new(
        controller: SessionController,
        settings: AppSettings,
        widgets: MainWidgets,
        sender: Sender<Message>,
    ) -> Self {
        let prompt = NativePrompt::new(controller.flavor());
        let mut state = Self {
            controller,
            settings,
            widgets,
            sender,
            storage: FsPersistence,
            chooser: NativeChooser::default(),
            prompt,
        };
        state.rebuild_menu();
        state.apply_view_settings();
        state.refresh_chrome();
        state.set_status(state.controller.flavor().modified_status(state.controller.document()));
        state
    }

    // --- File operations ---

    pub fn file_new(&mut self) {
        let mut host = Collaborators {
            storage: &mut self.storage,
            chooser: &mut self.chooser,
            prompt: &mut self.prompt,
        };
        match self.controller.new_document(&mut host) {
            Ok(GateResult::Proceed) => {
                self.show_document();
                self.rebuild_menu();
                let status = self.controller.flavor().new_file_status();
                self.set_status(status.to_string());
            }
            Ok(GateResult::Abort) => {}
            Err(e) => self.report("Could not save file", &e),
        }
    }

    pub fn file_open(&mut self) {
        let mut host = Collaborators {
            storage: &mut self.storage,
            chooser: &mut self.chooser,
            prompt: &mut self.prompt,
        };
        let result = self.controller.open(&mut host);
        self.finish_open(result);
    }

    pub fn open_recent(&mut self, path: &Path) {
        let mut host = Collaborators {
            storage: &mut self.storage,
            chooser: &mut self.chooser,
            prompt: &mut self.prompt,
        };
        let result = self.controller.open_recent(path, &mut host);
        self.finish_open(result);
    }

    /// Open a file given on the command line. No gate: nothing to lose yet.
    pub fn open_path(&mut self, path: &Path) {
        let result = self
            .controller
            .load(path, &self.storage)
            .map(|encoding| OpenOutcome::Opened {
                path: path.to_path_buf(),
                encoding,
            });
        self.finish_open(result);
    }

    fn finish_open(&mut self, result: Result<OpenOutcome>) {
        match result {
            Ok(OpenOutcome::Opened { path, encoding }) => {
                self.show_document();
                self.rebuild_menu();
                let name = extract_filename(&path);
                let status = self.controller.flavor().opened_status(&name, encoding);
                self.set_status(status);
            }
            Ok(OpenOutcome::Missing(path)) => {
                self.after_gate();
                dialog::alert_default(&format!("File does not exist:\n{}", path.display()));
            }
            Ok(OpenOutcome::Cancelled) => self.after_gate(),
            Ok(OpenOutcome::Aborted) => {}
            Err(e) => {
                self.after_gate();
                self.report("Could not open file", &e);
            }
        }
    }

    /// Re-read title, status and recent menu from the controller. The gate
    /// may have saved or discarded even when the action itself went nowhere.
    fn after_gate(&mut self) {
        self.refresh_chrome();
        self.rebuild_menu();
        self.set_status(self.controller.flavor().modified_status(self.controller.document()));
    }

    pub fn file_save(&mut self) {
        let result = self.controller.save(&mut self.storage, &mut self.chooser);
        self.finish_save(result);
    }

    pub fn file_save_as(&mut self) {
        let result = self.controller.save_as(&mut self.storage, &mut self.chooser);
        self.finish_save(result);
    }

    fn finish_save(&mut self, result: Result<SaveOutcome>) {
        match result {
            Ok(SaveOutcome::Saved(path)) => {
                self.rebuild_menu();
                self.refresh_chrome();
                let name = extract_filename(&path);
                let status = self.controller.flavor().saved_status(&name);
                self.set_status(status);
            }
            Ok(SaveOutcome::Cancelled) => {}
            Err(e) => self.report("Could not save file", &e),
        }
    }

    /// Handle quit request. Returns `true` if the app should exit.
    pub fn file_quit(&mut self) -> bool {
        let mut host = Collaborators {
            storage: &mut self.storage,
            chooser: &mut self.chooser,
            prompt: &mut self.prompt,
        };
        match self.controller.request_exit(&mut host) {
            Ok(GateResult::Proceed) => {
                if let Some(path) = self.controller.document().path() {
                    self.settings.last_file = Some(path.to_path_buf());
                }
                if let Err(e) = self.settings.save() {
                    log::warn!("Failed to save settings: {}", e);
                }
                true
            }
            Ok(GateResult::Abort) => false,
            Err(e) => {
                self.report("Could not save file", &e);
                false
            }
        }
    }

    /// Offer to reopen the file that was open at the last exit.
    pub fn offer_session_restore(&mut self) {
        let Some(path) = self.settings.restorable_last_file() else {
            return;
        };
        let message = format!("Restore last opened file?\n{}", extract_filename(&path));
        if dialog::choice2_default(&message, "Yes", "No", "") == Some(0) {
            self.open_path(&path);
        }
    }

    // --- Editor sync ---

    pub fn buffer_modified(&mut self) {
        let text = self.widgets.buffer.text();
        let was_dirty = self.controller.document().is_dirty();
        if self.controller.edit(&text) && !was_dirty {
            self.refresh_chrome();
            self.set_status(self.controller.flavor().modified_status(self.controller.document()));
        }
        self.update_linenumber_width();
        self.update_cursor_position();
    }

    pub fn update_cursor_position(&mut self) {
        let pos = self.widgets.text_editor.insert_position().max(0) as usize;
        let (line, column) = line_and_column(self.controller.document().content(), pos);
        self.widgets.status_position.set_label(&cursor_status(line, column));
    }

    /// Push the controller's document into the editor widget.
    fn show_document(&mut self) {
        let content = self.controller.document().content().to_string();
        self.widgets.buffer.set_text(&content);
        self.widgets.text_editor.set_insert_position(0);
        self.widgets.text_editor.show_insert_position();
        self.refresh_chrome();
        self.update_linenumber_width();
        self.update_cursor_position();
    }

    /// Replace the whole text as one user-visible edit.
    fn replace_text(&mut self, text: &str) {
        self.widgets.buffer.set_text(text);
        self.buffer_modified();
    }

    fn refresh_chrome(&mut self) {
        let title = self.controller.window_title();
        self.widgets.wind.set_label(&title);
        let encoding = self.controller.document().encoding().label();
        self.widgets.status_encoding.set_label(encoding);
    }

    fn set_status(&mut self, message: String) {
        self.widgets.status_message.set_label(&format!(" {}", message));
    }

    fn report(&mut self, context: &str, error: &AppError) {
        log::error!("{}: {}", context, error);
        dialog::alert_default(&format!("{}:\n{}", context, error));
    }

    fn rebuild_menu(&mut self) {
        let recent = self.controller.recent_files().entries().to_vec();
        build_menu(
            &mut self.widgets.menu,
            &self.sender,
            &self.settings,
            self.controller.flavor(),
            &recent,
        );
    }

    // --- Edit ---

    pub fn undo(&mut self) {
        let _ = self.widgets.text_editor.undo();
        self.buffer_modified();
    }

    pub fn redo(&mut self) {
        let _ = self.widgets.text_editor.redo();
        self.buffer_modified();
    }

    pub fn cut(&mut self) {
        self.widgets.text_editor.cut();
    }

    pub fn copy(&mut self) {
        self.widgets.text_editor.copy();
    }

    pub fn paste(&mut self) {
        self.widgets.text_editor.paste();
    }

    pub fn select_all(&mut self) {
        let len = self.widgets.buffer.length();
        self.widgets.buffer.select(0, len);
    }

    /// Find, or Find & Replace. Replacements count as one user edit.
    pub fn find(&mut self, with_replace: bool) {
        show_find_dialog(&self.widgets.buffer, &self.widgets.text_editor, with_replace);
        self.buffer_modified();
    }

    pub fn go_to_line(&mut self) {
        let text = self.controller.document().content().to_string();
        show_goto_line_dialog(&text, &mut self.widgets.text_editor);
        self.update_cursor_position();
    }

    // --- Format ---

    pub fn convert_line_endings(&mut self) {
        let ending = self.controller.flavor().line_ending();
        let converted = convert_line_endings(self.controller.document().content(), ending);
        if converted != self.controller.document().content() {
            self.replace_text(&converted);
        }
        self.set_status(format!("Converted to {} line endings", ending.label()));
    }

    pub fn format_code(&mut self) {
        let width = self.settings.tab_width as usize;
        let formatted = reindent(self.controller.document().content(), width);
        if formatted != self.controller.document().content() {
            self.replace_text(&formatted);
        }
        self.set_status("Code formatted".to_string());
    }

    // --- View toggles ---

    pub fn toggle_line_numbers(&mut self) {
        self.settings.line_numbers_enabled = !self.settings.line_numbers_enabled;
        self.update_linenumber_width();
        self.widgets.text_editor.redraw();
    }

    pub fn toggle_word_wrap(&mut self) {
        self.settings.word_wrap_enabled = !self.settings.word_wrap_enabled;
        self.apply_wrap();
        self.widgets.text_editor.redraw();
    }

    pub fn show_about(&self) {
        show_about_dialog(self.controller.flavor());
    }

    fn apply_view_settings(&mut self) {
        self.widgets
            .text_editor
            .set_text_size(self.settings.font_size as i32);
        self.apply_wrap();
        self.update_linenumber_width();
    }

    fn apply_wrap(&mut self) {
        let mode = if self.settings.word_wrap_enabled {
            WrapMode::AtBounds
        } else {
            WrapMode::None
        };
        self.widgets.text_editor.wrap_mode(mode, 0);
    }

    fn update_linenumber_width(&mut self) {
        if !self.settings.line_numbers_enabled {
            self.widgets.text_editor.set_linenumber_width(0);
            return;
        }
        let lines = line_count(self.controller.document().content());
        let digits = ((lines + 1) as f64).log10().floor() as i32 + 1;
        let width = (digits * 8 + 16).max(40);
        self.widgets.text_editor.set_linenumber_width(width);
    }
}
