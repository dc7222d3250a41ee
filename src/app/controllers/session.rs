//! Document lifecycle: the unsaved-changes gate and the new / open / save /
//! save-as / exit actions built on it.
//!
//! The controller owns the one [`DocumentSession`] of an editor window and
//! talks to storage, file dialogs and the save prompt only through the
//! collaborator traits in [`crate::app::services::persistence`]. Every
//! operation is synchronous and fails closed: an error leaves the session
//! exactly as it was before the call.

use std::io;
use std::path::{Path, PathBuf};

use crate::app::domain::document::DocumentSession;
use crate::app::domain::flavor::{DEFAULT_EXTENSION, Flavor};
use crate::app::infrastructure::error::{AppError, Result};
use crate::app::services::encoding::{EncodingPolicy, TextEncoding};
use crate::app::services::persistence::{FilePersistence, PathChooser, PromptChoice, UserPrompt};
use crate::app::services::recent_files::RecentFiles;

/// Whether an action that would drop the current buffer may go ahead.
///
/// An `Err` returned from the gate (a chosen Save that failed to write) also
/// means Abort: the session is unchanged and the action must not run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateResult {
    Proceed,
    Abort,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(PathBuf),
    /// The user dismissed the save dialog.
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenOutcome {
    Opened {
        path: PathBuf,
        encoding: TextEncoding,
    },
    /// The user dismissed the open dialog.
    Cancelled,
    /// The unsaved-changes gate said no.
    Aborted,
    /// A recent entry pointed at a file that no longer exists. The entry has
    /// been dropped from the recent list.
    Missing(PathBuf),
}

/// The external capabilities a lifecycle action may need.
pub struct Collaborators<'a> {
    pub storage: &'a mut dyn FilePersistence,
    pub chooser: &'a mut dyn PathChooser,
    pub prompt: &'a mut dyn UserPrompt,
}

pub struct SessionController {
    document: DocumentSession,
    flavor: Flavor,
    policy: EncodingPolicy,
    recent: RecentFiles,
}

impl SessionController {
    pub fn new(flavor: Flavor, recent: RecentFiles) -> Self {
        Self {
            document: DocumentSession::new_untitled(),
            flavor,
            policy: flavor.encoding_policy(),
            recent,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_policy(mut self, policy: EncodingPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn document(&self) -> &DocumentSession {
        &self.document
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    pub fn policy(&self) -> &EncodingPolicy {
        &self.policy
    }

    pub fn recent_files(&self) -> &RecentFiles {
        &self.recent
    }

    pub fn window_title(&self) -> String {
        self.flavor.window_title(&self.document)
    }

    /// Sync the buffer from the editor view. Returns whether it changed.
    pub fn edit(&mut self, text: &str) -> bool {
        let changed = self.document.edit(text);
        if changed {
            log::trace!("Buffer edited, {} bytes", text.len());
        }
        changed
    }

    /// Gate for any action that would replace or drop the buffer (New, Open,
    /// Open Recent, Exit).
    ///
    /// A clean session proceeds without touching any collaborator. A dirty
    /// one asks the prompt: Save runs [`Self::save`] and proceeds only if it
    /// wrote the file, Discard clears the dirty flag without writing, Cancel
    /// aborts. A failed save is returned as `Err` and the action must not
    /// proceed.
    pub fn request_destructive_action(&mut self, host: &mut Collaborators<'_>) -> Result<GateResult> {
        if !self.document.is_dirty() {
            return Ok(GateResult::Proceed);
        }

        let label = self.document.label();
        let choice = host.prompt.ask_save_discard_cancel(&label);
        log::debug!("Unsaved changes in {:?}: user chose {:?}", label, choice);

        match choice {
            PromptChoice::Save => match self.save(&mut *host.storage, &mut *host.chooser)? {
                SaveOutcome::Saved(_) => Ok(GateResult::Proceed),
                SaveOutcome::Cancelled => Ok(GateResult::Abort),
            },
            PromptChoice::Discard => {
                self.document.discard_changes();
                Ok(GateResult::Proceed)
            }
            PromptChoice::Cancel => Ok(GateResult::Abort),
        }
    }

    /// Write the buffer to its current path, or fall back to Save As when it
    /// has none.
    pub fn save(
        &mut self,
        storage: &mut dyn FilePersistence,
        chooser: &mut dyn PathChooser,
    ) -> Result<SaveOutcome> {
        let Some(path) = self.document.path().map(Path::to_path_buf) else {
            return self.save_as(storage, chooser);
        };

        storage.write(&path, self.document.content())?;
        log::info!("Saved {}", path.display());
        self.document.mark_saved(path.clone());
        Ok(SaveOutcome::Saved(path))
    }

    /// Ask for a destination and write the buffer there.
    pub fn save_as(
        &mut self,
        storage: &mut dyn FilePersistence,
        chooser: &mut dyn PathChooser,
    ) -> Result<SaveOutcome> {
        let Some(mut path) = chooser.choose_save_path(self.flavor.save_filters(), DEFAULT_EXTENSION)
        else {
            log::debug!("Save As cancelled");
            return Ok(SaveOutcome::Cancelled);
        };
        if path.extension().is_none() {
            path.set_extension(DEFAULT_EXTENSION);
        }

        storage.write(&path, self.document.content())?;
        log::info!("Saved as {}", path.display());
        self.document.mark_saved(path.clone());
        self.remember(&path);
        Ok(SaveOutcome::Saved(path))
    }

    /// Read `path` with the encoding fallback list and make it the current
    /// document. Nothing changes unless both the read and a decode succeed.
    pub fn load(&mut self, path: &Path, storage: &dyn FilePersistence) -> Result<TextEncoding> {
        let bytes = storage.read(path)?;
        let Some((content, encoding)) = self.policy.decode(&bytes) else {
            return Err(AppError::EncodingExhausted {
                path: path.to_path_buf(),
                tried: self.policy.candidates().to_vec(),
            });
        };

        log::info!("Opened {} as {}", path.display(), encoding);
        self.document = DocumentSession::from_loaded(path.to_path_buf(), content, encoding);
        self.remember(path);
        Ok(encoding)
    }

    /// File > New.
    pub fn new_document(&mut self, host: &mut Collaborators<'_>) -> Result<GateResult> {
        let gate = self.request_destructive_action(host)?;
        if gate == GateResult::Proceed {
            self.document = DocumentSession::new_untitled();
        }
        Ok(gate)
    }

    /// File > Open: gate, then ask for a path, then load it.
    pub fn open(&mut self, host: &mut Collaborators<'_>) -> Result<OpenOutcome> {
        if self.request_destructive_action(host)? == GateResult::Abort {
            return Ok(OpenOutcome::Aborted);
        }
        let Some(path) = host.chooser.choose_open_path(self.flavor.open_filters()) else {
            return Ok(OpenOutcome::Cancelled);
        };
        let encoding = self.load(&path, &*host.storage)?;
        Ok(OpenOutcome::Opened { path, encoding })
    }

    /// File > Recent Files > `path`.
    pub fn open_recent(&mut self, path: &Path, host: &mut Collaborators<'_>) -> Result<OpenOutcome> {
        if self.request_destructive_action(host)? == GateResult::Abort {
            return Ok(OpenOutcome::Aborted);
        }
        match self.load(path, &*host.storage) {
            Ok(encoding) => Ok(OpenOutcome::Opened {
                path: path.to_path_buf(),
                encoding,
            }),
            Err(AppError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                log::warn!("Recent file {} no longer exists", path.display());
                if self.recent.remove(path) {
                    if let Err(e) = self.recent.persist() {
                        log::warn!("Failed to save recent files: {}", e);
                    }
                }
                Ok(OpenOutcome::Missing(path.to_path_buf()))
            }
            Err(e) => Err(e),
        }
    }

    /// File > Exit and window close. The caller quits only on `Proceed`.
    pub fn request_exit(&mut self, host: &mut Collaborators<'_>) -> Result<GateResult> {
        self.request_destructive_action(host)
    }

    fn remember(&mut self, path: &Path) {
        self.recent.push(path);
        if let Err(e) = self.recent.persist() {
            log::warn!("Failed to save recent files: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::collections::HashMap;
    use std::collections::VecDeque;

    use super::*;
    use crate::app::services::persistence::{FileFilter, FsPersistence};

    #[derive(Default)]
    struct MemoryStorage {
        files: HashMap<PathBuf, Vec<u8>>,
        writes: Vec<(PathBuf, String)>,
        reads: Cell<usize>,
        fail_writes: bool,
    }

    impl MemoryStorage {
        fn with_file(path: &str, bytes: &[u8]) -> Self {
            let mut storage = Self::default();
            storage.files.insert(PathBuf::from(path), bytes.to_vec());
            storage
        }

        fn text(&self, path: &str) -> Option<String> {
            self.files
                .get(Path::new(path))
                .map(|b| String::from_utf8(b.clone()).unwrap())
        }
    }

    impl FilePersistence for MemoryStorage {
        fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
            self.reads.set(self.reads.get() + 1);
            self.files
                .get(path)
                .cloned()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
        }

        fn write(&mut self, path: &Path, text: &str) -> io::Result<()> {
            if self.fail_writes {
                return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"));
            }
            self.writes.push((path.to_path_buf(), text.to_string()));
            self.files.insert(path.to_path_buf(), text.as_bytes().to_vec());
            Ok(())
        }
    }

    #[derive(Default)]
    struct ScriptedChooser {
        open: VecDeque<Option<PathBuf>>,
        save: VecDeque<Option<PathBuf>>,
        calls: usize,
        last_default_ext: Option<String>,
    }

    impl ScriptedChooser {
        fn saving_to(path: &str) -> Self {
            let mut chooser = Self::default();
            chooser.save.push_back(Some(PathBuf::from(path)));
            chooser
        }

        fn opening(path: &str) -> Self {
            let mut chooser = Self::default();
            chooser.open.push_back(Some(PathBuf::from(path)));
            chooser
        }
    }

    impl PathChooser for ScriptedChooser {
        fn choose_open_path(&mut self, filters: &[FileFilter]) -> Option<PathBuf> {
            assert!(!filters.is_empty());
            self.calls += 1;
            self.open.pop_front().flatten()
        }

        fn choose_save_path(&mut self, _filters: &[FileFilter], default_ext: &str) -> Option<PathBuf> {
            self.calls += 1;
            self.last_default_ext = Some(default_ext.to_string());
            self.save.pop_front().flatten()
        }
    }

    struct FixedPrompt {
        choice: PromptChoice,
        asked: Vec<String>,
    }

    impl FixedPrompt {
        fn answering(choice: PromptChoice) -> Self {
            Self {
                choice,
                asked: Vec::new(),
            }
        }
    }

    impl UserPrompt for FixedPrompt {
        fn ask_save_discard_cancel(&mut self, document_label: &str) -> PromptChoice {
            self.asked.push(document_label.to_string());
            self.choice
        }
    }

    fn controller() -> SessionController {
        SessionController::new(Flavor::Linux, RecentFiles::new(10))
    }

    fn host<'a>(
        storage: &'a mut MemoryStorage,
        chooser: &'a mut ScriptedChooser,
        prompt: &'a mut FixedPrompt,
    ) -> Collaborators<'a> {
        Collaborators {
            storage,
            chooser,
            prompt,
        }
    }

    #[test]
    fn test_clean_session_proceeds_without_collaborators() {
        let mut ctl = controller();
        let mut storage = MemoryStorage::default();
        let mut chooser = ScriptedChooser::default();
        let mut prompt = FixedPrompt::answering(PromptChoice::Cancel);

        let gate = ctl
            .request_destructive_action(&mut host(&mut storage, &mut chooser, &mut prompt))
            .unwrap();

        assert_eq!(gate, GateResult::Proceed);
        assert!(prompt.asked.is_empty());
        assert_eq!(chooser.calls, 0);
        assert!(storage.writes.is_empty());
        assert_eq!(storage.reads.get(), 0);
    }

    #[test]
    fn test_cancel_leaves_session_untouched() {
        let mut ctl = controller();
        ctl.edit("draft");
        let before = ctl.document().clone();
        let mut storage = MemoryStorage::default();
        let mut chooser = ScriptedChooser::default();
        let mut prompt = FixedPrompt::answering(PromptChoice::Cancel);

        let gate = ctl
            .request_destructive_action(&mut host(&mut storage, &mut chooser, &mut prompt))
            .unwrap();

        assert_eq!(gate, GateResult::Abort);
        assert_eq!(ctl.document(), &before);
        assert!(ctl.document().is_dirty());
        assert_eq!(prompt.asked, vec!["Untitled".to_string()]);
        assert!(storage.writes.is_empty());
    }

    #[test]
    fn test_discard_clears_dirty_without_writing() {
        let mut ctl = controller();
        ctl.edit("throwaway");
        let mut storage = MemoryStorage::default();
        let mut chooser = ScriptedChooser::default();
        let mut prompt = FixedPrompt::answering(PromptChoice::Discard);

        let gate = ctl
            .request_destructive_action(&mut host(&mut storage, &mut chooser, &mut prompt))
            .unwrap();

        assert_eq!(gate, GateResult::Proceed);
        assert!(!ctl.document().is_dirty());
        assert_eq!(ctl.document().content(), "throwaway");
        assert!(storage.writes.is_empty());
        assert_eq!(chooser.calls, 0);
    }

    #[test]
    fn test_new_after_typing_saves_then_starts_fresh() {
        let mut ctl = controller();
        let mut storage = MemoryStorage::default();
        let mut chooser = ScriptedChooser::saving_to("/tmp/a.txt");
        let mut prompt = FixedPrompt::answering(PromptChoice::Save);

        assert!(!ctl.document().is_dirty());
        ctl.edit("hello");
        assert!(ctl.document().is_dirty());

        // Observe the state right after the save step of the gate.
        let gate = ctl
            .request_destructive_action(&mut host(&mut storage, &mut chooser, &mut prompt))
            .unwrap();
        assert_eq!(gate, GateResult::Proceed);
        assert_eq!(storage.text("/tmp/a.txt").as_deref(), Some("hello"));
        assert_eq!(ctl.document().path(), Some(Path::new("/tmp/a.txt")));
        assert!(!ctl.document().is_dirty());

        // The session is clean now, so New goes straight through.
        let gate = ctl
            .new_document(&mut host(&mut storage, &mut chooser, &mut prompt))
            .unwrap();
        assert_eq!(gate, GateResult::Proceed);
        assert_eq!(ctl.document(), &DocumentSession::new_untitled());
        assert_eq!(prompt.asked.len(), 1);
        assert_eq!(ctl.recent_files().entries(), &[PathBuf::from("/tmp/a.txt")]);
    }

    #[test]
    fn test_new_document_runs_the_gate() {
        let mut ctl = controller();
        ctl.edit("hello");
        let mut storage = MemoryStorage::default();
        let mut chooser = ScriptedChooser::saving_to("/tmp/a.txt");
        let mut prompt = FixedPrompt::answering(PromptChoice::Save);

        let gate = ctl
            .new_document(&mut host(&mut storage, &mut chooser, &mut prompt))
            .unwrap();

        assert_eq!(gate, GateResult::Proceed);
        assert_eq!(storage.text("/tmp/a.txt").as_deref(), Some("hello"));
        assert!(ctl.document().path().is_none());
        assert_eq!(ctl.document().content(), "");
        assert!(!ctl.document().is_dirty());
    }

    #[test]
    fn test_save_chosen_but_dialog_dismissed_aborts() {
        let mut ctl = controller();
        ctl.edit("keep me");
        let before = ctl.document().clone();
        let mut storage = MemoryStorage::default();
        let mut chooser = ScriptedChooser::default();
        chooser.save.push_back(None);
        let mut prompt = FixedPrompt::answering(PromptChoice::Save);

        let gate = ctl
            .new_document(&mut host(&mut storage, &mut chooser, &mut prompt))
            .unwrap();

        assert_eq!(gate, GateResult::Abort);
        assert_eq!(ctl.document(), &before);
        assert!(storage.writes.is_empty());
    }

    #[test]
    fn test_save_chosen_but_write_fails_aborts() {
        let mut ctl = controller();
        ctl.edit("keep me");
        let before = ctl.document().clone();
        let mut storage = MemoryStorage {
            fail_writes: true,
            ..Default::default()
        };
        let mut chooser = ScriptedChooser::saving_to("/ro/a.txt");
        let mut prompt = FixedPrompt::answering(PromptChoice::Save);

        let result = ctl.request_exit(&mut host(&mut storage, &mut chooser, &mut prompt));

        assert!(matches!(result, Err(AppError::Io(_))));
        assert_eq!(ctl.document(), &before);
        assert!(ctl.recent_files().is_empty());
    }

    #[test]
    fn test_save_with_path_writes_in_place() {
        let mut storage = MemoryStorage::with_file("/docs/a.txt", b"old");
        let mut chooser = ScriptedChooser::default();
        let mut ctl = controller();
        ctl.load(Path::new("/docs/a.txt"), &storage).unwrap();
        ctl.edit("new");

        let outcome = ctl.save(&mut storage, &mut chooser).unwrap();

        assert_eq!(outcome, SaveOutcome::Saved(PathBuf::from("/docs/a.txt")));
        assert_eq!(storage.text("/docs/a.txt").as_deref(), Some("new"));
        assert!(!ctl.document().is_dirty());
        assert_eq!(chooser.calls, 0);
    }

    #[test]
    fn test_save_failure_keeps_dirty() {
        let mut storage = MemoryStorage::with_file("/docs/a.txt", b"old");
        let mut chooser = ScriptedChooser::default();
        let mut ctl = controller();
        ctl.load(Path::new("/docs/a.txt"), &storage).unwrap();
        ctl.edit("new");
        storage.fail_writes = true;

        assert!(ctl.save(&mut storage, &mut chooser).is_err());
        assert!(ctl.document().is_dirty());
        assert_eq!(ctl.document().content(), "new");
    }

    #[test]
    fn test_save_twice_writes_identical_bytes() {
        let mut storage = MemoryStorage::default();
        let mut chooser = ScriptedChooser::saving_to("/tmp/twice.txt");
        let mut ctl = controller();
        ctl.edit("same text\n");

        ctl.save(&mut storage, &mut chooser).unwrap();
        assert!(!ctl.document().is_dirty());
        ctl.save(&mut storage, &mut chooser).unwrap();
        assert!(!ctl.document().is_dirty());

        assert_eq!(storage.writes.len(), 2);
        assert_eq!(storage.writes[0], storage.writes[1]);
        assert_eq!(chooser.calls, 1);
    }

    #[test]
    fn test_save_as_cancelled_leaves_session() {
        let mut storage = MemoryStorage::default();
        let mut chooser = ScriptedChooser::default();
        let mut ctl = controller();
        ctl.edit("text");

        let outcome = ctl.save_as(&mut storage, &mut chooser).unwrap();

        assert_eq!(outcome, SaveOutcome::Cancelled);
        assert!(ctl.document().is_dirty());
        assert!(ctl.document().path().is_none());
    }

    #[test]
    fn test_save_as_appends_default_extension() {
        let mut storage = MemoryStorage::default();
        let mut chooser = ScriptedChooser::saving_to("/tmp/notes");
        let mut ctl = controller();
        ctl.edit("text");

        let outcome = ctl.save_as(&mut storage, &mut chooser).unwrap();

        assert_eq!(outcome, SaveOutcome::Saved(PathBuf::from("/tmp/notes.txt")));
        assert_eq!(chooser.last_default_ext.as_deref(), Some("txt"));
        assert_eq!(storage.text("/tmp/notes.txt").as_deref(), Some("text"));
    }

    #[test]
    fn test_load_missing_file_keeps_session() {
        let storage = MemoryStorage::default();
        let mut ctl = controller();
        ctl.edit("unsaved");
        let before = ctl.document().clone();

        let result = ctl.load(Path::new("/nope.txt"), &storage);

        assert!(matches!(result, Err(AppError::Io(_))));
        assert_eq!(ctl.document(), &before);
    }

    #[test]
    fn test_load_undecodable_is_encoding_exhausted() {
        let storage = MemoryStorage::with_file("/tmp/bad.bin", &[0xFF, 0xFE, 0x98, 0x00]);
        let mut ctl = SessionController::new(Flavor::Linux, RecentFiles::new(10))
            .with_policy(EncodingPolicy::new(vec![TextEncoding::Utf8, TextEncoding::Windows1251]));
        ctl.edit("previous");
        let before = ctl.document().clone();

        let result = ctl.load(Path::new("/tmp/bad.bin"), &storage);

        match result {
            Err(AppError::EncodingExhausted { path, tried }) => {
                assert_eq!(path, PathBuf::from("/tmp/bad.bin"));
                assert_eq!(tried, vec![TextEncoding::Utf8, TextEncoding::Windows1251]);
            }
            other => panic!("expected EncodingExhausted, got {:?}", other),
        }
        assert_eq!(ctl.document(), &before);
        assert!(ctl.recent_files().is_empty());
    }

    #[test]
    fn test_windows_flavor_rejects_non_utf8() {
        let storage = MemoryStorage::with_file("/tmp/cp.txt", &[0xCF, 0xF0]);
        let mut ctl = SessionController::new(Flavor::Windows, RecentFiles::new(10));

        let result = ctl.load(Path::new("/tmp/cp.txt"), &storage);

        assert!(matches!(result, Err(AppError::EncodingExhausted { .. })));
    }

    #[test]
    fn test_load_uses_first_matching_encoding() {
        let storage = MemoryStorage::with_file("/tmp/ru.txt", &[0xCF, 0xF0, 0xE8, 0xE2, 0xE5, 0xF2]);
        let mut ctl = controller();

        let encoding = ctl.load(Path::new("/tmp/ru.txt"), &storage).unwrap();

        assert_eq!(encoding, TextEncoding::Windows1251);
        assert_eq!(ctl.document().content(), "Привет");
        assert_eq!(ctl.document().encoding(), TextEncoding::Windows1251);
        assert!(!ctl.document().is_dirty());
        assert_eq!(ctl.window_title(), "ru.txt - Linux Notepad");
    }

    #[test]
    fn test_open_cancelled_dialog() {
        let mut ctl = controller();
        let mut storage = MemoryStorage::default();
        let mut chooser = ScriptedChooser::default();
        let mut prompt = FixedPrompt::answering(PromptChoice::Cancel);

        let outcome = ctl
            .open(&mut host(&mut storage, &mut chooser, &mut prompt))
            .unwrap();

        assert_eq!(outcome, OpenOutcome::Cancelled);
        assert_eq!(chooser.calls, 1);
        assert_eq!(storage.reads.get(), 0);
    }

    #[test]
    fn test_open_aborted_by_gate_skips_dialog() {
        let mut ctl = controller();
        ctl.edit("dirty");
        let mut storage = MemoryStorage::with_file("/tmp/x.txt", b"x");
        let mut chooser = ScriptedChooser::opening("/tmp/x.txt");
        let mut prompt = FixedPrompt::answering(PromptChoice::Cancel);

        let outcome = ctl
            .open(&mut host(&mut storage, &mut chooser, &mut prompt))
            .unwrap();

        assert_eq!(outcome, OpenOutcome::Aborted);
        assert_eq!(chooser.calls, 0);
        assert_eq!(ctl.document().content(), "dirty");
    }

    #[test]
    fn test_open_replaces_session_and_records_recent() {
        let mut ctl = controller();
        let mut storage = MemoryStorage::with_file("/tmp/x.txt", b"from disk");
        let mut chooser = ScriptedChooser::opening("/tmp/x.txt");
        let mut prompt = FixedPrompt::answering(PromptChoice::Cancel);

        let outcome = ctl
            .open(&mut host(&mut storage, &mut chooser, &mut prompt))
            .unwrap();

        assert_eq!(
            outcome,
            OpenOutcome::Opened {
                path: PathBuf::from("/tmp/x.txt"),
                encoding: TextEncoding::Utf8,
            }
        );
        assert_eq!(ctl.document().content(), "from disk");
        assert_eq!(ctl.recent_files().entries(), &[PathBuf::from("/tmp/x.txt")]);
    }

    #[test]
    fn test_open_recent_after_discard() {
        let mut ctl = controller();
        ctl.edit("scratch");
        let mut storage = MemoryStorage::with_file("/tmp/r.txt", b"recent");
        let mut chooser = ScriptedChooser::default();
        let mut prompt = FixedPrompt::answering(PromptChoice::Discard);

        let outcome = ctl
            .open_recent(Path::new("/tmp/r.txt"), &mut host(&mut storage, &mut chooser, &mut prompt))
            .unwrap();

        assert!(matches!(outcome, OpenOutcome::Opened { .. }));
        assert_eq!(ctl.document().content(), "recent");
        assert!(storage.writes.is_empty());
        assert_eq!(chooser.calls, 0);
    }

    #[test]
    fn test_open_recent_missing_file_drops_entry() {
        let mut recent = RecentFiles::new(10);
        recent.push(Path::new("/gone/deleted.txt"));
        recent.push(Path::new("/tmp/kept.txt"));
        let mut ctl = SessionController::new(Flavor::Linux, recent);
        let mut storage = MemoryStorage::default();
        let mut chooser = ScriptedChooser::default();
        let mut prompt = FixedPrompt::answering(PromptChoice::Cancel);

        let outcome = ctl
            .open_recent(Path::new("/gone/deleted.txt"), &mut host(&mut storage, &mut chooser, &mut prompt))
            .unwrap();

        assert_eq!(outcome, OpenOutcome::Missing(PathBuf::from("/gone/deleted.txt")));
        assert_eq!(ctl.recent_files().entries(), &[PathBuf::from("/tmp/kept.txt")]);
        assert_eq!(ctl.document(), &DocumentSession::new_untitled());
    }

    #[test]
    fn test_open_recent_missing_file_updates_stored_list() {
        let dir = tempfile::tempdir().unwrap();
        let store = dir.path().join("recent_files.txt");
        let missing = dir.path().join("deleted.txt");
        let mut recent = RecentFiles::load(store.clone(), 10);
        recent.push(&missing);
        recent.persist().unwrap();

        let mut ctl = SessionController::new(Flavor::Linux, RecentFiles::load(store.clone(), 10));
        let mut storage = FsPersistence;
        let mut chooser = ScriptedChooser::default();
        let mut prompt = FixedPrompt::answering(PromptChoice::Cancel);
        let mut host = Collaborators {
            storage: &mut storage,
            chooser: &mut chooser,
            prompt: &mut prompt,
        };

        let outcome = ctl.open_recent(&missing, &mut host).unwrap();

        assert_eq!(outcome, OpenOutcome::Missing(missing));
        assert!(RecentFiles::load(store, 10).is_empty());
    }

    #[test]
    fn test_open_recent_other_read_errors_keep_entry() {
        let storage_dir = tempfile::tempdir().unwrap();
        let mut recent = RecentFiles::new(10);
        recent.push(storage_dir.path());
        let mut ctl = SessionController::new(Flavor::Linux, recent);
        let mut storage = FsPersistence;
        let mut chooser = ScriptedChooser::default();
        let mut prompt = FixedPrompt::answering(PromptChoice::Cancel);
        let mut host = Collaborators {
            storage: &mut storage,
            chooser: &mut chooser,
            prompt: &mut prompt,
        };

        // Reading a directory fails, but not with NotFound.
        let result = ctl.open_recent(storage_dir.path(), &mut host);

        assert!(matches!(result, Err(AppError::Io(_))));
        assert_eq!(ctl.recent_files().entries().len(), 1);
    }

    #[test]
    fn test_open_cancelled_after_gate_save_reflects_saved_file() {
        let mut ctl = SessionController::new(Flavor::MacOs, RecentFiles::new(10));
        ctl.edit("draft");
        assert_eq!(ctl.window_title(), "\u{2022} Untitled - Notepad");
        let mut storage = MemoryStorage::default();
        let mut chooser = ScriptedChooser::saving_to("/tmp/a.txt");
        chooser.open.push_back(None);
        let mut prompt = FixedPrompt::answering(PromptChoice::Save);

        let outcome = ctl
            .open(&mut host(&mut storage, &mut chooser, &mut prompt))
            .unwrap();

        // The open dialog was dismissed, but the gate already saved.
        assert_eq!(outcome, OpenOutcome::Cancelled);
        assert_eq!(ctl.window_title(), "a.txt - Notepad");
        assert!(!ctl.document().is_dirty());
        assert_eq!(ctl.recent_files().entries(), &[PathBuf::from("/tmp/a.txt")]);
    }

    #[test]
    fn test_exit_clean_proceeds() {
        let mut ctl = controller();
        let mut storage = MemoryStorage::default();
        let mut chooser = ScriptedChooser::default();
        let mut prompt = FixedPrompt::answering(PromptChoice::Cancel);

        let gate = ctl
            .request_exit(&mut host(&mut storage, &mut chooser, &mut prompt))
            .unwrap();
        assert_eq!(gate, GateResult::Proceed);
        assert!(prompt.asked.is_empty());
    }

    #[test]
    fn test_prompt_uses_file_name_label() {
        let mut storage = MemoryStorage::with_file("/home/me/plan.txt", b"v1");
        let mut chooser = ScriptedChooser::default();
        let mut prompt = FixedPrompt::answering(PromptChoice::Cancel);
        let mut ctl = controller();
        ctl.load(Path::new("/home/me/plan.txt"), &storage).unwrap();
        ctl.edit("v2");

        ctl.request_exit(&mut host(&mut storage, &mut chooser, &mut prompt))
            .unwrap();

        assert_eq!(prompt.asked, vec!["plan.txt".to_string()]);
    }

    #[test]
    fn test_round_trip_through_file_system() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("round.txt");
        let text = "line one\r\nline two\n\tüñíçødé ✓\n";

        let mut storage = FsPersistence;
        let mut chooser = ScriptedChooser::saving_to(target.to_str().unwrap());
        let store = dir.path().join("recent_files.txt");
        let mut writer = SessionController::new(Flavor::MacOs, RecentFiles::load(store.clone(), 10));
        writer.edit(text);
        writer.save(&mut storage, &mut chooser).unwrap();

        let mut reader = SessionController::new(Flavor::MacOs, RecentFiles::new(10));
        reader.load(&target, &storage).unwrap();
        assert_eq!(reader.document().content(), text);
        assert!(!reader.document().is_dirty());

        let persisted = RecentFiles::load(store, 10);
        assert_eq!(persisted.entries(), &[target]);
    }
}
