//! Rotating file writer with size-based rotation and backup retention.
//!
//! [`RotatingFile`] implements [`std::io::Write`], so it can be handed to a
//! `tracing-subscriber` fmt layer wrapped in a `Mutex`. When the current file
//! grows past the size limit it is shifted to `<name>.1`, older backups move
//! up by one, and anything past the retention count is deleted.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Maximum file size before rotation (10 MB).
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
pub const MAX_BACKUP_FILES: usize = 3;

/// Size-rotated append-only log file.
///
/// The file is opened lazily on first write, so construction never fails.
///
/// # Example
///
/// ```rust
/// use phrasekeeper::observability::RotatingFile;
/// use std::io::Write;
///
/// let dir = tempfile::tempdir()?;
/// let mut log = RotatingFile::new(dir.path().join("app.log"));
/// writeln!(log, "first line")?;
/// log.flush()?;
/// assert!(dir.path().join("app.log").exists());
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct RotatingFile {
    file_path: PathBuf,
    file: Option<File>,
    written: u64,
    max_bytes: u64,
    max_backups: usize,
}

impl RotatingFile {
    /// Creates a writer for `file_path` with the default limits.
    #[must_use]
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    /// Creates a writer with explicit rotation limits.
    #[must_use]
    pub const fn with_limits(file_path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            file_path,
            file: None,
            written: 0,
            max_bytes,
            max_backups,
        }
    }

    /// Path of the live log file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn backup_path(&self, index: usize) -> PathBuf {
        let mut name = self.file_path.as_os_str().to_owned();
        name.push(format!(".{index}"));
        PathBuf::from(name)
    }

    fn open(&mut self) -> io::Result<&mut File> {
        if self.file.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            self.written = file.metadata().map(|m| m.len()).unwrap_or(0);
            self.file = Some(file);
        }
        self.file
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "log file unavailable"))
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file = None;
        self.written = 0;

        if self.max_backups == 0 {
            return fs::remove_file(&self.file_path).or_else(ignore_not_found);
        }

        fs::remove_file(self.backup_path(self.max_backups)).or_else(ignore_not_found)?;
        for index in (1..self.max_backups).rev() {
            let from = self.backup_path(index);
            if from.exists() {
                fs::rename(&from, self.backup_path(index + 1))?;
            }
        }
        if self.file_path.exists() {
            fs::rename(&self.file_path, self.backup_path(1))?;
        }
        Ok(())
    }
}

fn ignore_not_found(e: io::Error) -> io::Result<()> {
    if e.kind() == io::ErrorKind::NotFound {
        Ok(())
    } else {
        Err(e)
    }
}

impl Write for RotatingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.open()?;
        if self.written > 0 && self.written + buf.len() as u64 > self.max_bytes {
            self.rotate()?;
        }

        let written = self.open()?.write(buf)?;
        self.written += written as u64;
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.file.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("file_path", &self.file_path)
            .field("written", &self.written)
            .finish_non_exhaustive()
    }
}
