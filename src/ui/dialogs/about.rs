use fltk::{
    button::Button,
    enums::{Align, Color, Font},
    frame::Frame,
    group::{Flex, FlexType},
    prelude::*,
    window::Window,
};

use super::run_dialog;
use crate::app::domain::flavor::Flavor;

/// Show About dialog
pub fn show_about_dialog(flavor: Flavor) {
    let version = env!("CARGO_PKG_VERSION");
    let mut dialog = Window::default()
        .with_size(380, 260)
        .with_label("About")
        .center_screen();
    dialog.make_modal(true);

    let mut flex = Flex::new(10, 10, 360, 240, None);
    flex.set_type(FlexType::Column);
    flex.set_spacing(10);

    let mut title = Frame::default();
    title.set_label(flavor.app_name());
    title.set_label_size(22);
    title.set_label_font(Font::HelveticaBold);
    flex.fixed(&title, 40);

    let mut version_frame = Frame::default();
    version_frame.set_label(&format!("Version {}", version));
    version_frame.set_label_size(14);
    flex.fixed(&version_frame, 25);

    let mut features = Frame::default();
    features.set_label(
        "\u{2022} Create, open and save plain-text files\n\
         \u{2022} Undo / redo\n\
         \u{2022} Unsaved changes checking\n\
         \u{2022} Recent files",
    );
    features.set_label_size(12);
    features.set_label_color(Color::from_rgb(90, 90, 90));
    features.set_align(Align::Center | Align::Inside);

    let mut close_btn = Button::default().with_label("Close");
    flex.fixed(&close_btn, 32);

    flex.end();
    dialog.end();

    let mut dialog_close = dialog.clone();
    close_btn.set_callback(move |_| {
        dialog_close.hide();
    });

    dialog.show();
    run_dialog(&dialog);
}
