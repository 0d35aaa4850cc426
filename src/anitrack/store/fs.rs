use super::DataStore;
use crate::error::{Result, TrackerError};
use crate::model::Record;
use std::fs;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(TrackerError::Io)?;
            }
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let stem = self
            .path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("data");
        self.path
            .with_file_name(format!(".{}-{}.tmp", stem, Uuid::new_v4()))
    }
}

impl DataStore for FileStore {
    fn read(&self) -> Result<Option<Vec<Record>>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(TrackerError::Io)?;
        // Only a non-array top level is corrupt; entries are normalized one by one
        let entries: Vec<Value> =
            serde_json::from_str(&content).map_err(TrackerError::Serialization)?;
        let mut records = Vec::with_capacity(entries.len());
        for (index, entry) in entries.into_iter().enumerate() {
            if !entry.is_object() {
                warn!(index, entry = %entry, "skipping data file entry that is not an object");
                continue;
            }
            records.push(serde_json::from_value(entry).map_err(TrackerError::Serialization)?);
        }
        debug!(path = %self.path.display(), count = records.len(), "read data file");
        Ok(Some(records))
    }

    fn write(&mut self, records: &[Record]) -> Result<()> {
        self.ensure_parent_dir()?;
        let content = serde_json::to_string_pretty(records).map_err(TrackerError::Serialization)?;

        // Atomic write: a crash mid-write leaves the previous file intact
        let tmp_file = self.tmp_path();
        if let Err(e) = fs::write(&tmp_file, content) {
            let _ = fs::remove_file(&tmp_file);
            return Err(TrackerError::Io(e));
        }
        if let Err(e) = fs::rename(&tmp_file, &self.path) {
            let _ = fs::remove_file(&tmp_file);
            return Err(TrackerError::Io(e));
        }

        debug!(path = %self.path.display(), count = records.len(), "wrote data file");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Status;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileStore) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("anime_data.json"));
        (dir, store)
    }

    #[test]
    fn read_missing_file_is_none() {
        let (_dir, store) = setup();
        assert!(store.read().unwrap().is_none());
    }

    #[test]
    fn write_then_read_preserves_order_and_fields() {
        let (_dir, mut store) = setup();
        let records = vec![
            Record::builder("Horimiya")
                .year(2021)
                .genres(["School", "Romance"])
                .status("completed")
                .rating(4)
                .build(),
            Record::builder("K-ON").genres(["Band"]).build(),
        ];

        store.write(&records).unwrap();
        let loaded = store.read().unwrap().unwrap();

        assert_eq!(loaded, records);
        assert_eq!(loaded[0].status(), Status::Completed);
    }

    #[test]
    fn write_is_pretty_printed_and_leaves_no_tmp_files() {
        let (dir, mut store) = setup();
        store.write(&[Record::builder("K-ON").build()]).unwrap();

        let on_disk = fs::read_to_string(store.path()).unwrap();
        assert!(on_disk.starts_with("[\n"));
        assert!(on_disk.contains("\"title\": \"K-ON\""));

        for entry in fs::read_dir(dir.path()).unwrap() {
            let path = entry.unwrap().path();
            let name = path.file_name().unwrap().to_str().unwrap();
            assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
        }
    }

    #[test]
    fn write_creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("nested/deeper/data.json"));
        store.write(&[]).unwrap();
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "[]");
    }

    #[test]
    fn read_corrupt_file_is_an_error() {
        let (_dir, store) = setup();
        fs::write(store.path(), "{ not json").unwrap();
        assert!(matches!(
            store.read(),
            Err(TrackerError::Serialization(_))
        ));
    }

    #[test]
    fn read_normalizes_malformed_entries() {
        let (_dir, store) = setup();
        fs::write(
            store.path(),
            r#"[{"title": "  Re:Zero ", "rating": "-1", "year": "Unknown"}]"#,
        )
        .unwrap();

        let loaded = store.read().unwrap().unwrap();
        assert_eq!(loaded, vec![Record::builder("Re:Zero").build()]);
    }

    #[test]
    fn read_skips_entries_that_are_not_objects() {
        let (_dir, store) = setup();
        fs::write(
            store.path(),
            r#"[{"title": "K-ON", "rating": 5}, "oops", 5, null, {"title": "Horimiya"}]"#,
        )
        .unwrap();

        let loaded = store.read().unwrap().unwrap();
        assert_eq!(
            loaded,
            vec![
                Record::builder("K-ON").rating(5).build(),
                Record::builder("Horimiya").build(),
            ]
        );
    }

    #[test]
    fn read_non_array_file_is_an_error() {
        let (_dir, store) = setup();
        fs::write(store.path(), r#"{"title": "K-ON"}"#).unwrap();
        assert!(matches!(
            store.read(),
            Err(TrackerError::Serialization(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn failed_write_leaves_no_tmp_files() {
        use std::os::unix::fs::PermissionsExt;

        let (dir, mut store) = setup();
        fs::set_permissions(dir.path(), fs::Permissions::from_mode(0o500)).unwrap();
        let result = store.write(&[Record::builder("K-ON").build()]);
        fs::set_permissions(dir.path(), fs::Permissions::from_mode(0o700)).unwrap();

        // Privileged users can write anyway; only the failure path is checked
        if result.is_err() {
            let leftovers: Vec<_> = fs::read_dir(dir.path())
                .unwrap()
                .filter_map(|e| e.ok())
                .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
                .collect();
            assert!(leftovers.is_empty());
        }
    }
}
