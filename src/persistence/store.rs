//! Storage backends for the encoded leaderboard

use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Durable home for the encoded leaderboard bytes
pub trait ScoreStore {
    /// Read the whole stored table; `NotFound` when nothing was saved yet
    fn read(&mut self) -> io::Result<Vec<u8>>;
    /// Replace the stored table
    fn write(&mut self, bytes: &[u8]) -> io::Result<()>;
}

impl<S: ScoreStore + ?Sized> ScoreStore for Box<S> {
    fn read(&mut self) -> io::Result<Vec<u8>> {
        (**self).read()
    }

    fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        (**self).write(bytes)
    }
}

/// Leaderboard file on local disk
#[derive(Debug, Clone)]
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

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl ScoreStore for FileStore {
    fn read(&mut self) -> io::Result<Vec<u8>> {
        fs::read(&self.path)
    }

    /// Write to a sibling temp file then rename over the target
    fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.temp_path();
        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, &self.path)
    }
}

#[derive(Debug, Default)]
struct MemoryInner {
    bytes: Option<Vec<u8>>,
    fail_reads: bool,
    fail_writes: bool,
    writes: usize,
}

/// In-memory store; clones share the same buffer, so a fresh leaderboard
/// built over a clone sees what an earlier one saved
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Rc<RefCell<MemoryInner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with raw bytes
    pub fn with_bytes(bytes: Vec<u8>) -> Self {
        let store = Self::new();
        store.inner.borrow_mut().bytes = Some(bytes);
        store
    }

    /// Currently stored bytes, if any
    pub fn bytes(&self) -> Option<Vec<u8>> {
        self.inner.borrow().bytes.clone()
    }

    /// Number of successful writes so far
    pub fn write_count(&self) -> usize {
        self.inner.borrow().writes
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.inner.borrow_mut().fail_reads = fail;
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.inner.borrow_mut().fail_writes = fail;
    }
}

impl ScoreStore for MemoryStore {
    fn read(&mut self) -> io::Result<Vec<u8>> {
        let inner = self.inner.borrow();
        if inner.fail_reads {
            return Err(io::Error::other("simulated read failure"));
        }
        inner
            .bytes
            .clone()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no leaderboard saved"))
    }

    fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        let mut inner = self.inner.borrow_mut();
        if inner.fail_writes {
            return Err(io::Error::other("simulated write failure"));
        }
        inner.bytes = Some(bytes.to_vec());
        inner.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static NEXT_DIR: AtomicUsize = AtomicUsize::new(0);

    fn scratch_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "tide-quiz-store-{}-{}",
            std::process::id(),
            NEXT_DIR.fetch_add(1, Ordering::Relaxed)
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_file_store_missing_is_not_found() {
        let mut store = FileStore::new(scratch_dir().join("leaderboard.dat"));
        let err = store.read().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_file_store_write_then_read() {
        let dir = scratch_dir();
        let path = dir.join("nested").join("leaderboard.dat");
        let mut store = FileStore::new(&path);
        store.write(&[1, 2, 3, 4]).unwrap();
        store.write(&[5, 6]).unwrap();

        assert_eq!(store.read().unwrap(), vec![5, 6]);
        assert!(!store.temp_path().exists());
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_memory_store_clones_share_buffer() {
        let mut a = MemoryStore::new();
        let mut b = a.clone();
        assert_eq!(b.read().unwrap_err().kind(), io::ErrorKind::NotFound);

        a.write(&[9, 9]).unwrap();
        assert_eq!(b.read().unwrap(), vec![9, 9]);
        assert_eq!(b.write_count(), 1);
    }

    #[test]
    fn test_memory_store_simulated_failures() {
        let mut store = MemoryStore::with_bytes(vec![1]);
        store.set_fail_reads(true);
        assert!(store.read().is_err());

        store.set_fail_writes(true);
        assert!(store.write(&[2]).is_err());
        assert_eq!(store.bytes(), Some(vec![1]));
        assert_eq!(store.write_count(), 0);
    }
}
