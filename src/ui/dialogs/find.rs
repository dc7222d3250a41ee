use fltk::{
    button::{Button, CheckButton},
    enums::Align,
    frame::Frame,
    input::Input,
    prelude::*,
    text::{TextBuffer, TextEditor},
    window::Window,
};

use super::run_dialog;
use crate::app::services::text_ops::{find_wrapping, is_match, replace_all_in_text};

/// Select the next match after the caret, wrapping to the top once.
fn find_next(
    buffer: &mut TextBuffer,
    editor: &mut TextEditor,
    status: &mut Frame,
    query: &str,
    case_sensitive: bool,
) {
    if query.is_empty() {
        status.set_label("Enter text to find");
        return;
    }
    let text = buffer.text();
    let from = editor.insert_position().max(0) as usize;
    match find_wrapping(&text, query, from, case_sensitive) {
        Some((found, wrapped)) => {
            buffer.select(found.start as i32, found.end as i32);
            editor.set_insert_position(found.end as i32);
            editor.show_insert_position();
            status.set_label(if wrapped { "Wrapped to beginning" } else { "" });
        }
        None => status.set_label(&format!("Cannot find '{}'", query)),
    }
}

/// Show the Find dialog, or Find & Replace when `with_replace` is set.
///
/// Replacements edit `buffer` directly; the caller syncs the document from
/// the buffer once the dialog closes.
pub fn show_find_dialog(buffer: &TextBuffer, editor: &TextEditor, with_replace: bool) {
    let (label, height) = if with_replace {
        ("Find & Replace", 220)
    } else {
        ("Find", 160)
    };
    let mut dialog_win = Window::default()
        .with_size(400, height)
        .with_label(label)
        .center_screen();

    Frame::default().with_pos(20, 20).with_size(80, 30).with_label("Find what:");
    let find_input = Input::default().with_pos(110, 20).with_size(270, 30);

    let replace_input = with_replace.then(|| {
        Frame::default().with_pos(20, 60).with_size(80, 30).with_label("Replace:");
        Input::default().with_pos(110, 60).with_size(270, 30)
    });
    let row = if with_replace { 100 } else { 60 };

    let case_check = CheckButton::default()
        .with_pos(110, row).with_size(200, 25).with_label("Match case");
    let mut status = Frame::default().with_pos(20, height - 40).with_size(270, 30);
    status.set_align(Align::Left | Align::Inside);

    let mut find_btn = Button::default()
        .with_pos(20, row + 40).with_size(90, 30).with_label("Find Next");
    let mut close_btn = Button::default()
        .with_pos(300, height - 40).with_size(90, 30).with_label("Close");

    {
        let mut buf = buffer.clone();
        let mut ed = editor.clone();
        let mut status = status.clone();
        let input = find_input.clone();
        let case = case_check.clone();
        find_btn.set_callback(move |_| {
            find_next(&mut buf, &mut ed, &mut status, &input.value(), case.is_checked());
        });
    }

    if let Some(replace_input) = replace_input {
        let mut replace_btn = Button::default()
            .with_pos(120, row + 40).with_size(90, 30).with_label("Replace");
        let mut replace_all_btn = Button::default()
            .with_pos(220, row + 40).with_size(100, 30).with_label("Replace All");

        // Replace the current selection if it is a match, then move on.
        let mut buf = buffer.clone();
        let mut ed = editor.clone();
        let mut st = status.clone();
        let input = find_input.clone();
        let replacement = replace_input.clone();
        let case = case_check.clone();
        replace_btn.set_callback(move |_| {
            let query = input.value();
            let case_sensitive = case.is_checked();
            if let Some((start, end)) = buf.selection_position() {
                if start != end && is_match(&buf.selection_text(), &query, case_sensitive) {
                    let with = replacement.value();
                    buf.replace_selection(&with);
                    ed.set_insert_position(start + with.len() as i32);
                }
            }
            find_next(&mut buf, &mut ed, &mut st, &query, case_sensitive);
        });

        let mut buf = buffer.clone();
        let mut ed = editor.clone();
        let mut st = status.clone();
        let input = find_input.clone();
        let case = case_check.clone();
        replace_all_btn.set_callback(move |_| {
            let query = input.value();
            if query.is_empty() {
                st.set_label("Enter text to find");
                return;
            }
            let (text, count) =
                replace_all_in_text(&buf.text(), &query, &replace_input.value(), case.is_checked());
            if count > 0 {
                buf.set_text(&text);
                ed.set_insert_position(0);
                st.set_label(&format!("Replaced {} occurrence(s)", count));
            } else {
                st.set_label(&format!("Cannot find '{}'", query));
            }
        });
    }

    dialog_win.end();
    dialog_win.make_modal(true);
    dialog_win.show();

    let mut dialog_close = dialog_win.clone();
    close_btn.set_callback(move |_| {
        dialog_close.hide();
    });

    run_dialog(&dialog_win);
}
