use std::path::PathBuf;

const APP_DIR: &str = "notepad";

/// Per-user configuration directory: config_dir/notepad/
pub fn config_dir() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(APP_DIR);
    path
}

/// Location of the recently-used files list.
pub fn recent_files_path() -> PathBuf {
    config_dir().join("recent_files.txt")
}
