//! Single-document plain-text editor.
//!
//! The `app` module is toolkit-free and fully testable; the FLTK front end in
//! `ui` and the coordinator in `app::state` are compiled with the `gui`
//! feature.

pub mod app;
#[cfg(feature = "gui")]
pub mod ui;
