use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
#[cfg(unix)]
use std::{io::Write, os::unix::fs::OpenOptionsExt};

use crate::config;

/// The task the user booked against most recently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastTask {
    pub project_id: i64,
    pub task_id: i64,
    pub task_title: String,
}

/// Persists [`LastTask`] as JSON in a single user-only file.
#[derive(Debug, Clone)]
pub struct LastTaskStore {
    path: PathBuf,
}

impl LastTaskStore {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn default_location() -> Result<Self> {
        Ok(Self::at(config::root_path()?.join("last_task.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing, empty and `{}` files all mean "no last task". A missing file is created.
    pub fn load(&self) -> Result<Option<LastTask>> {
        if !self.path.exists() {
            secure_write(&self.path, "{}")
                .with_context(|| format!("Failed to create {}", self.path.display()))?;
            return Ok(None);
        }

        let raw = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let raw = raw.trim();
        if raw.is_empty() || raw == "{}" {
            return Ok(None);
        }

        let task = serde_json::from_str(raw)
            .with_context(|| format!("Failed to parse {}", self.path.display()))?;
        Ok(Some(task))
    }

    pub fn save(&self, task: &LastTask) -> Result<()> {
        let raw = serde_json::to_string(task).context("Failed to serialize last task")?;
        secure_write(&self.path, &raw)
            .with_context(|| format!("Failed to write {}", self.path.display()))
    }
}

fn secure_write(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    #[cfg(unix)]
    {
        std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(0o600)
            .open(path)?
            .write_all(content.as_bytes())?;
    }

    #[cfg(not(unix))]
    {
        std::fs::write(path, content)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> LastTaskStore {
        LastTaskStore::at(dir.path().join("nested").join("last_task.json"))
    }

    #[test]
    fn missing_file_is_absent_and_gets_created() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert_eq!(store.load().unwrap(), None);
        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "{}");
    }

    #[cfg(unix)]
    #[test]
    fn created_file_is_user_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.load().unwrap();

        let mode = std::fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn empty_file_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(store.path(), "").unwrap();

        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let task = LastTask {
            project_id: 42,
            task_id: 7,
            task_title: "Website / Development".to_string(),
        };

        store.save(&task).unwrap();

        assert_eq!(store.load().unwrap(), Some(task));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(store.path(), "{not json").unwrap();

        assert!(store.load().is_err());
    }
}
