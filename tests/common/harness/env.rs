//! Isolated test environment with temp directory.

use super::{MdnotesCommand, TestNote};
use mdnotes::domain::{Category, NoteId};
use mdnotes::notebook::Notebook;
use mdnotes::store::{DirStore, Store, StoreKey};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary store directory.
///
/// The store lives in `<temp>/store`; the config file path points at
/// `<temp>/config.toml`, which only exists once [`TestEnv::write_config`]
/// is called. Everything is removed when the TestEnv is dropped.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    temp_dir: TempDir,
    store_dir: PathBuf,
    config_path: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let store_dir = temp_dir.path().join("store");
        let config_path = temp_dir.path().join("config.toml");
        Self {
            temp_dir,
            store_dir,
            config_path,
        }
    }

    /// Returns the path to the store directory.
    pub fn store_dir(&self) -> &Path {
        &self.store_dir
    }

    /// Returns the root of the temp directory (outside the store).
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Creates an MdnotesCommand configured for this test environment.
    pub fn cmd(&self) -> MdnotesCommand {
        MdnotesCommand::new()
            .config(&self.config_path)
            .dir(&self.store_dir)
    }

    /// Writes the config file used by [`TestEnv::cmd`].
    pub fn write_config(&self, contents: &str) {
        std::fs::write(&self.config_path, contents).expect("Failed to write config");
    }

    /// Writes a file next to the store and returns its path.
    ///
    /// Useful for templates, CSS files and import sources.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Opens the store the way the binary does.
    pub fn notebook(&self) -> Notebook<DirStore> {
        let store = DirStore::open(&self.store_dir).expect("Failed to open store");
        Notebook::open(store)
    }

    /// Adds a note at the head of the list and selects it.
    pub fn add_note(&self, test_note: &TestNote) -> NoteId {
        let mut notebook = self.notebook();
        notebook
            .insert_note(test_note.to_note())
            .expect("Failed to insert test note");
        test_note.note_id().clone()
    }

    /// Adds a category.
    pub fn add_category(&self, name: &str, color: &str) -> Category {
        self.notebook()
            .add_category(name, color)
            .expect("Failed to add category")
    }

    /// Reads a raw store entry.
    pub fn read_key(&self, key: StoreKey) -> Option<String> {
        DirStore::open(&self.store_dir)
            .expect("Failed to open store")
            .get(key)
            .expect("Failed to read store entry")
    }

    /// Overwrites a raw store entry.
    pub fn write_key(&self, key: StoreKey, value: &str) {
        DirStore::open(&self.store_dir)
            .expect("Failed to open store")
            .set(key, value)
            .expect("Failed to write store entry");
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdnotes::domain::DEFAULT_CATEGORY_COLOR;

    // ===========================================
    // TestEnv Foundation
    // ===========================================

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.write_key(StoreKey::Theme, "dark");
            env.store_dir().to_path_buf()
        };
        assert!(!path.exists(), "temp directory should be cleaned up on drop");
    }

    #[test]
    fn test_env_provides_command() {
        let env = TestEnv::new();
        let cmd = env.cmd();
        let args = cmd.get_args();
        assert_eq!(args[0], "--dir");
        assert_eq!(args[1], env.store_dir().to_string_lossy());
    }

    // ===========================================
    // Seeding
    // ===========================================

    #[test]
    fn test_env_add_note_persists_and_selects() {
        let env = TestEnv::new();
        let id = env.add_note(&TestNote::new("Seeded").tag("x"));

        let notebook = env.notebook();
        assert_eq!(notebook.notes().len(), 1);
        assert_eq!(notebook.notes().selected_id(), Some(&id));
        assert_eq!(env.read_key(StoreKey::LastSelected).as_deref(), Some(id.as_str()));
    }

    #[test]
    fn test_env_add_multiple_notes_newest_first() {
        let env = TestEnv::new();
        env.add_note(&TestNote::new("First"));
        env.add_note(&TestNote::new("Second"));

        let notebook = env.notebook();
        let titles: Vec<&str> = notebook.notes().notes().iter().map(|n| n.title()).collect();
        assert_eq!(titles, vec!["Second", "First"]);
    }

    #[test]
    fn test_env_add_category() {
        let env = TestEnv::new();
        let cat = env.add_category("Work", DEFAULT_CATEGORY_COLOR);
        assert!(env.read_key(StoreKey::Categories).unwrap().contains(cat.id().as_str()));
    }
}
