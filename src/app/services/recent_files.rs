//! Recently used files, persisted as a plain-text list.
//!
//! On disk the list is one path per line, newest first. Blank lines are
//! ignored when reading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::app::infrastructure::error::Result;

pub const DEFAULT_MAX_RECENT: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct RecentFiles {
    entries: Vec<PathBuf>,
    max_entries: usize,
    /// Backing file; `None` keeps the list in memory only.
    store: Option<PathBuf>,
}

impl RecentFiles {
    /// An in-memory list with no backing file.
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: Vec::new(),
            max_entries: max_entries.max(1),
            store: None,
        }
    }

    /// Load the list from `store`. A missing or unreadable file yields an
    /// empty list that will still be written back to `store`.
    pub fn load(store: PathBuf, max_entries: usize) -> Self {
        let mut recent = Self::new(max_entries);
        match fs::read_to_string(&store) {
            Ok(contents) => {
                recent.entries = parse_entries(&contents);
                recent.entries.truncate(recent.max_entries);
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => log::warn!("Failed to read recent files from {}: {}", store.display(), e),
        }
        recent.store = Some(store);
        recent
    }

    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Move `path` to the front, dropping any older copy and anything past
    /// the limit.
    pub fn push(&mut self, path: &Path) {
        self.entries.retain(|p| p != path);
        self.entries.insert(0, path.to_path_buf());
        self.entries.truncate(self.max_entries);
    }

    pub fn remove(&mut self, path: &Path) -> bool {
        let before = self.entries.len();
        self.entries.retain(|p| p != path);
        self.entries.len() != before
    }

    /// Write the list to its backing file, if it has one.
    pub fn persist(&self) -> Result<()> {
        let Some(store) = &self.store else {
            return Ok(());
        };
        if let Some(parent) = store.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(store, self.serialize())?;
        Ok(())
    }

    fn serialize(&self) -> String {
        let mut out = String::new();
        for path in &self.entries {
            out.push_str(&path.to_string_lossy());
            out.push('\n');
        }
        out
    }
}

fn parse_entries(contents: &str) -> Vec<PathBuf> {
    contents
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(PathBuf::from)
        .collect()
}
