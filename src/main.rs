#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::path::PathBuf;

use fltk::{app, prelude::*};

use notepad::app::controllers::session::SessionController;
use notepad::app::domain::messages::Message;
use notepad::app::domain::settings::AppSettings;
use notepad::app::infrastructure::platform::recent_files_path;
use notepad::app::services::recent_files::RecentFiles;
use notepad::app::state::AppState;
use notepad::ui::main_window::build_main_window;

fn main() {
    env_logger::init();

    let app = app::App::default().with_scheme(app::Scheme::Gtk);
    let settings = AppSettings::load();
    let flavor = settings.effective_flavor();
    log::info!("Starting {} ({:?} flavor)", flavor.app_name(), flavor);

    let recent = RecentFiles::load(recent_files_path(), settings.max_recent_files);
    let controller = SessionController::new(flavor, recent);

    let (sender, receiver) = app::channel::<Message>();
    let widgets = build_main_window(&controller.window_title(), &sender);
    let mut state = AppState::new(controller, settings, widgets, sender);

    state.widgets.wind.show();
    state.widgets.text_editor.take_focus().ok();

    match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => state.open_path(&path),
        None => state.offer_session_restore(),
    }

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            match msg {
                Message::FileNew => state.file_new(),
                Message::FileOpen => state.file_open(),
                Message::OpenRecent(path) => state.open_recent(&path),
                Message::FileSave => state.file_save(),
                Message::FileSaveAs => state.file_save_as(),
                Message::FileQuit | Message::WindowClose => {
                    if state.file_quit() {
                        app.quit();
                    }
                }

                Message::EditUndo => state.undo(),
                Message::EditRedo => state.redo(),
                Message::EditCut => state.cut(),
                Message::EditCopy => state.copy(),
                Message::EditPaste => state.paste(),
                Message::SelectAll => state.select_all(),
                Message::ShowFind => state.find(false),
                Message::ShowReplace => state.find(true),
                Message::ShowGoToLine => state.go_to_line(),

                Message::ConvertLineEndings => state.convert_line_endings(),
                Message::FormatCode => state.format_code(),

                Message::ToggleLineNumbers => state.toggle_line_numbers(),
                Message::ToggleWordWrap => state.toggle_word_wrap(),

                Message::ShowAbout => state.show_about(),

                Message::BufferModified => state.buffer_modified(),
                Message::CursorMoved => state.update_cursor_position(),
            }
        }
    }
}
