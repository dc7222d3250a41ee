use fltk::{
    app::Sender,
    enums::{Align, CallbackTrigger, Color, Event, FrameType},
    frame::Frame,
    group::{Flex, FlexType},
    menu::MenuBar,
    prelude::*,
    text::{TextBuffer, TextEditor},
    window::Window,
};

use crate::app::domain::messages::Message;

const STATUS_BAR_HEIGHT: i32 = 24;

pub struct MainWidgets {
    pub wind: Window,
    pub menu: MenuBar,
    pub text_editor: TextEditor,
    pub buffer: TextBuffer,
    pub status_message: Frame,
    pub status_position: Frame,
    pub status_encoding: Frame,
}

pub fn build_main_window(title: &str, sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, 800, 600, None);
    wind.set_label(title);
    wind.set_xclass("Notepad");

    let mut flex = Flex::new(0, 0, 800, 600, None);
    flex.set_type(FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, 30, "");
    flex.fixed(&menu, 30);

    let buffer = TextBuffer::default();
    let mut text_editor = TextEditor::new(0, 0, 0, 0, "");
    text_editor.set_buffer(buffer.clone());
    text_editor.set_linenumber_bgcolor(Color::from_rgb(240, 240, 240));
    text_editor.set_linenumber_fgcolor(Color::from_rgb(100, 100, 100));

    // User edits only; programmatic set_text does not fire this.
    text_editor.set_trigger(CallbackTrigger::Changed);
    text_editor.set_callback({
        let s = *sender;
        move |_| s.send(Message::BufferModified)
    });
    text_editor.handle({
        let s = *sender;
        move |_, ev| {
            if matches!(ev, Event::KeyUp | Event::Released) {
                s.send(Message::CursorMoved);
            }
            false
        }
    });

    let mut status_row = Flex::default();
    status_row.set_type(FlexType::Row);
    let mut status_message = Frame::default();
    status_message.set_frame(FrameType::FlatBox);
    status_message.set_align(Align::Left | Align::Inside);
    let status_position = Frame::default();
    status_row.fixed(&status_position, 180);
    let status_encoding = Frame::default();
    status_row.fixed(&status_encoding, 100);
    status_row.end();
    flex.fixed(&status_row, STATUS_BAR_HEIGHT);

    flex.end();
    wind.resizable(&flex);
    wind.end();

    wind.set_callback({
        let s = *sender;
        move |_| {
            if fltk::app::event() == Event::Close {
                s.send(Message::WindowClose);
            }
        }
    });

    MainWidgets {
        wind,
        menu,
        text_editor,
        buffer,
        status_message,
        status_position,
        status_encoding,
    }
}
