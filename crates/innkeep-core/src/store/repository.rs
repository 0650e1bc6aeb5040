//! Snapshot persistence behind a repository trait.
//!
//! The store serializes the whole collection to one blob and writes it
//! through after every mutation. The trait keeps scoring and lifecycle
//! logic testable without any storage medium; the file implementation is
//! the production backend.

use fs2::FileExt;
use std::{
    fs::{self, File, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
    thread,
    time::{Duration, Instant},
};

use crate::error::SnapshotError;

/// Load/save access to the persisted snapshot blob.
pub trait SnapshotRepository {
    /// Read the snapshot, `None` when no snapshot has been written yet.
    fn load(&self) -> Result<Option<String>, SnapshotError>;

    /// Replace the snapshot with `payload`. Must be all-or-nothing: a
    /// failed save leaves the previous snapshot readable.
    fn save(&self, payload: &str) -> Result<(), SnapshotError>;
}

const LOCK_TIMEOUT: Duration = Duration::from_secs(5);
const LOCK_POLL: Duration = Duration::from_millis(10);

/// File-backed snapshots with an advisory lock and atomic replace.
///
/// There is only one logical writer (a single interactive session), but
/// nothing stops a second process from racing; the exclusive lock and the
/// temp-file rename keep the snapshot from ever being half-written.
#[derive(Debug, Clone)]
pub struct FileSnapshots {
    path: PathBuf,
}

impl FileSnapshots {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        let mut path = self.path.clone();
        path.set_extension("lock");
        path
    }

    fn acquire_lock(&self) -> Result<File, SnapshotError> {
        let lock_path = self.lock_path();
        if let Some(parent) = lock_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let start = Instant::now();
        loop {
            let file = OpenOptions::new()
                .create(true)
                .read(true)
                .write(true)
                .truncate(false)
                .open(&lock_path)?;

            if file.try_lock_exclusive().is_ok() {
                return Ok(file);
            }

            if start.elapsed() >= LOCK_TIMEOUT {
                return Err(SnapshotError::LockTimeout {
                    path: lock_path.display().to_string(),
                    waited_ms: start.elapsed().as_millis(),
                });
            }

            thread::sleep(LOCK_POLL);
        }
    }
}

impl SnapshotRepository for FileSnapshots {
    fn load(&self) -> Result<Option<String>, SnapshotError> {
        if !self.path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&self.path)?))
    }

    fn save(&self, payload: &str) -> Result<(), SnapshotError> {
        let lock = self.acquire_lock()?;

        let mut tmp = self.path.clone();
        tmp.set_extension("json.tmp");

        let result = (|| {
            let mut file = File::create(&tmp)?;
            file.write_all(payload.as_bytes())?;
            file.sync_all()?;
            fs::rename(&tmp, &self.path)?;
            Ok(())
        })();

        if result.is_err() {
            let _ = fs::remove_file(&tmp);
        }
        let _ = fs2::FileExt::unlock(&lock);
        tracing::debug!(path = %self.path.display(), bytes = payload.len(), "snapshot written");
        result
    }
}

/// In-memory snapshots for tests; cloning shares the same cell so a test
/// can inspect what the store wrote. `fail_writes` simulates a storage
/// backend that stops accepting writes (quota exhaustion in the original
/// environment).
#[derive(Debug, Clone, Default)]
pub struct MemorySnapshots {
    cell: Arc<Mutex<Option<String>>>,
    fail_writes: Arc<Mutex<bool>>,
}

impl MemorySnapshots {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-load the cell, e.g. with a corrupt payload.
    #[must_use]
    pub fn with_payload(payload: impl Into<String>) -> Self {
        let repo = Self::default();
        *repo.cell.lock().expect("snapshot cell poisoned") = Some(payload.into());
        repo
    }

    pub fn set_fail_writes(&self, fail: bool) {
        *self.fail_writes.lock().expect("snapshot cell poisoned") = fail;
    }

    /// The last payload written, if any.
    #[must_use]
    pub fn payload(&self) -> Option<String> {
        self.cell.lock().expect("snapshot cell poisoned").clone()
    }
}

impl SnapshotRepository for MemorySnapshots {
    fn load(&self) -> Result<Option<String>, SnapshotError> {
        Ok(self.cell.lock().expect("snapshot cell poisoned").clone())
    }

    fn save(&self, payload: &str) -> Result<(), SnapshotError> {
        if *self.fail_writes.lock().expect("snapshot cell poisoned") {
            return Err(SnapshotError::Io(std::io::Error::other(
                "simulated write failure",
            )));
        }
        *self.cell.lock().expect("snapshot cell poisoned") = Some(payload.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{FileSnapshots, MemorySnapshots, SnapshotRepository};

    #[test]
    fn file_load_missing_is_none() {
        let dir = tempfile::tempdir().expect("temp dir");
        let repo = FileSnapshots::new(dir.path().join("tickets.json"));
        assert!(repo.load().expect("load").is_none());
    }

    #[test]
    fn file_save_then_load_roundtrips() {
        let dir = tempfile::tempdir().expect("temp dir");
        let repo = FileSnapshots::new(dir.path().join("nested/tickets.json"));
        repo.save("[]").expect("save");
        assert_eq!(repo.load().expect("load").as_deref(), Some("[]"));

        repo.save("[1]").expect("overwrite");
        assert_eq!(repo.load().expect("load").as_deref(), Some("[1]"));
    }

    #[test]
    fn memory_clone_shares_the_cell() {
        let repo = MemorySnapshots::new();
        let observer = repo.clone();
        repo.save("payload").expect("save");
        assert_eq!(observer.payload().as_deref(), Some("payload"));
    }

    #[test]
    fn memory_fail_writes_surfaces_an_error() {
        let repo = MemorySnapshots::new();
        repo.set_fail_writes(true);
        assert!(repo.save("payload").is_err());
        assert!(repo.payload().is_none());
    }
}
