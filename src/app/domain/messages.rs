use std::path::PathBuf;

/// All messages that can be sent through the FLTK channel.
/// Each menu callback sends one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // File
    FileNew,
    FileOpen,
    OpenRecent(PathBuf),
    FileSave,
    FileSaveAs,
    FileQuit,
    WindowClose,

    // Edit
    EditUndo,
    EditRedo,
    EditCut,
    EditCopy,
    EditPaste,
    SelectAll,
    ShowFind,
    ShowReplace,
    ShowGoToLine,

    // Format
    ConvertLineEndings,
    FormatCode,

    // View
    ToggleLineNumbers,
    ToggleWordWrap,

    // Help
    ShowAbout,

    // Editor notifications
    BufferModified,
    CursorMoved,
}
