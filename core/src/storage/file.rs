use std::path::{Path, PathBuf};

use super::{
    error::*,
    util::{self, StringMap},
    KeyValueStore,
};

/// Store backed by one JSON file.
/// The whole map is rewritten on every `set`.
#[derive(Debug, Clone)]
pub struct FileStore {
    filepath: PathBuf,
    entries: StringMap,
}

impl FileStore {
    pub const FILENAME: &str = "local-storage.json";

    pub fn open_in_dir(dir: impl AsRef<Path>) -> Self {
        Self::open(dir.as_ref().join(Self::FILENAME))
    }

    /// A missing file opens as an empty store.
    /// A broken file is reported and also opens as empty; it gets overwritten
    /// by the next `set`.
    pub fn open(filepath: impl Into<PathBuf>) -> Self {
        let filepath = filepath.into();
        let entries = match util::read_string_map(&filepath) {
            Ok(entries) => entries,
            Err(e) if e.is_not_found() => StringMap::new(),
            Err(e) => {
                log::warn!("Ignoring local store: {}", e);
                StringMap::new()
            }
        };
        Self { filepath, entries }
    }

    pub fn filepath(&self) -> &Path {
        &self.filepath
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_owned(), value.to_owned());
        util::write_string_map(&self.filepath, &self.entries)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::fs;

    #[test]
    fn missing_file_is_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open_in_dir(dir.path());
        assert_eq!(store.get("autoCopy"), None);
        assert!(!store.filepath().exists());
    }

    #[test]
    fn set_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("t2g-cli");

        let mut store = FileStore::open_in_dir(&nested);
        store.set("autoCopy", "false").unwrap();
        store.set("finger", "f1").unwrap();
        store.set("finger", "f2").unwrap();

        let reopened = FileStore::open_in_dir(&nested);
        assert_eq!(reopened.get("autoCopy").as_deref(), Some("false"));
        assert_eq!(reopened.get("finger").as_deref(), Some("f2"));
    }

    #[test]
    fn broken_file_opens_empty_and_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(FileStore::FILENAME);
        fs::write(&path, "{ not json").unwrap();

        let mut store = FileStore::open(&path);
        assert_eq!(store.get("finger"), None);

        store.set("finger", "f1").unwrap();
        assert_eq!(FileStore::open(&path).get("finger").as_deref(), Some("f1"));
    }

    #[test]
    fn write_failure_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where the parent dir should be.
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let mut store = FileStore::open(blocker.join(FileStore::FILENAME));
        let err = store.set("autoDelete", "true").unwrap_err();
        assert_eq!(err.action, ActionKind::CreateDir);
        assert!(err.to_string().starts_with("Cannot create dir"));
    }
}
