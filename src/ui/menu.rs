use std::path::PathBuf;

use fltk::{
    app::Sender,
    enums::Shortcut,
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::domain::flavor::Flavor;
use crate::app::domain::messages::Message;
use crate::app::domain::settings::AppSettings;
use crate::app::services::text_ops::recent_menu_label;

/// Escape characters FLTK treats specially in menu paths.
fn menu_escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('/', "\\/").replace('&', "&&").replace('_', "\\_")
}

pub fn build_menu(
    menu: &mut MenuBar,
    sender: &Sender<Message>,
    settings: &AppSettings,
    flavor: Flavor,
    recent: &[PathBuf],
) {
    menu.clear();
    let s = sender;

    // File
    menu.add("File/New", Shortcut::Ctrl | 'n', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileNew) });
    menu.add("File/Open...", Shortcut::Ctrl | 'o', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileOpen) });
    for path in recent {
        let path = path.clone();
        let label = format!("File/Recent Files/{}", menu_escape(&recent_menu_label(&path)));
        menu.add(&label, Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::OpenRecent(path.clone())) });
    }
    menu.add("File/Save", Shortcut::Ctrl | 's', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileSave) });
    menu.add("File/Save As...", Shortcut::Ctrl | Shortcut::Shift | 's', MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::FileSaveAs) });
    let quit_label = if flavor == Flavor::MacOs { "File/Quit" } else { "File/Exit" };
    menu.add(quit_label, Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileQuit) });

    // Edit
    menu.add("Edit/Undo", Shortcut::Ctrl | 'z', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::EditUndo) });
    menu.add("Edit/Redo", Shortcut::Ctrl | 'y', MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::EditRedo) });
    menu.add("Edit/Cut", Shortcut::Ctrl | 'x', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::EditCut) });
    menu.add("Edit/Copy", Shortcut::Ctrl | 'c', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::EditCopy) });
    menu.add("Edit/Paste", Shortcut::Ctrl | 'v', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::EditPaste) });
    menu.add("Edit/Select All", Shortcut::Ctrl | 'a', MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::SelectAll) });
    menu.add("Edit/Find...", Shortcut::Ctrl | 'f', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowFind) });
    menu.add("Edit/Replace...", Shortcut::Ctrl | 'h', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowReplace) });
    menu.add("Edit/Go To Line...", Shortcut::Ctrl | 'g', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowGoToLine) });

    // Format
    let endings_label = format!("Format/Convert Line Endings ({})", flavor.line_ending().label());
    menu.add(&endings_label, Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ConvertLineEndings) });
    menu.add("Format/Format Code", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FormatCode) });

    // View
    let ln_flag = if settings.line_numbers_enabled { MenuFlag::Toggle | MenuFlag::Value } else { MenuFlag::Toggle };
    menu.add("View/Line Numbers", Shortcut::None, ln_flag, { let s = *s; move |_| s.send(Message::ToggleLineNumbers) });
    let ww_flag = if settings.word_wrap_enabled { MenuFlag::Toggle | MenuFlag::Value } else { MenuFlag::Toggle };
    menu.add("View/Word Wrap", Shortcut::None, ww_flag, { let s = *s; move |_| s.send(Message::ToggleWordWrap) });

    // Help
    let about = format!("Help/About {}", flavor.app_name());
    menu.add(&about, Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowAbout) });
}
