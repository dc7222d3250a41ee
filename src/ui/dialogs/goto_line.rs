use fltk::{
    button::Button,
    dialog,
    enums::CallbackTrigger,
    frame::Frame,
    input::IntInput,
    prelude::*,
    text::TextEditor,
    window::Window,
};

use super::run_dialog;
use crate::app::services::text_ops::{line_count, line_number_to_byte_position};

/// Show Go To Line dialog and move the caret of `editor` to the chosen line.
pub fn show_goto_line_dialog(text: &str, editor: &mut TextEditor) {
    let mut dialog_win = Window::default()
        .with_size(250, 120)
        .with_label("Go To Line")
        .center_screen();
    Frame::default().with_pos(20, 20).with_size(100, 30).with_label("Line number:");
    let mut line_input = IntInput::default().with_pos(130, 20).with_size(100, 30);

    let mut go_btn = Button::default()
        .with_pos(60, 70).with_size(80, 30).with_label("Go");
    let mut cancel_btn = Button::default()
        .with_pos(150, 70).with_size(80, 30).with_label("Cancel");

    dialog_win.end();
    dialog_win.make_modal(true);
    dialog_win.show();

    let text = text.to_string();
    let total_lines = line_count(&text);
    let mut te = editor.clone();
    let mut dialog_go = dialog_win.clone();
    let line_input_go = line_input.clone();

    go_btn.set_callback(move |_| {
        let target = line_input_go
            .value()
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| line_number_to_byte_position(&text, n));

        match target {
            Some(pos) => {
                te.set_insert_position(pos as i32);
                te.show_insert_position();
                dialog_go.hide();
            }
            None => dialog::message_default(&format!(
                "Line number must be between 1 and {}",
                total_lines
            )),
        }
    });

    // Enter key on input triggers Go
    let mut go_btn2 = go_btn.clone();
    line_input.set_trigger(CallbackTrigger::EnterKey);
    line_input.set_callback(move |_| {
        go_btn2.do_callback();
    });

    let mut dialog_close = dialog_win.clone();
    cancel_btn.set_callback(move |_| {
        dialog_close.hide();
    });

    run_dialog(&dialog_win);
}
