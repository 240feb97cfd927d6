//! Rotating file writer with size-based rotation and numbered backups.
//!
//! Trace files are rotated logrotate-style: when the live file grows past the
//! size limit it becomes `<name>.1`, the previous `<name>.1` becomes
//! `<name>.2`, and so on, with the oldest backup beyond the retention count
//! deleted.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Size limit and backup retention for a [`FileWriter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationPolicy {
    /// Size above which the file is rotated before the next write.
    pub max_bytes: u64,

    /// Number of rotated files kept next to the live one.
    pub max_backups: usize,
}

impl RotationPolicy {
    /// Builds a policy from a size limit in mebibytes.
    #[must_use]
    pub const fn from_megabytes(max_mb: u64, max_backups: usize) -> Self {
        Self {
            max_bytes: max_mb.saturating_mul(1024 * 1024),
            max_backups,
        }
    }
}

impl Default for RotationPolicy {
    fn default() -> Self {
        Self::from_megabytes(10, 3)
    }
}

/// Thread-safe rotating file writer.
///
/// The file is opened lazily on first write and re-opened after each
/// rotation.
///
/// # Thread Safety
///
/// Uses an internal `Mutex` to ensure safe concurrent access. Multiple threads
/// can safely write to the same `FileWriter` instance.
pub struct FileWriter {
    /// Path to the live trace file.
    file_path: PathBuf,
    policy: RotationPolicy,
    /// Lazily-initialized file handle (opens on first write).
    writer: Mutex<Option<std::fs::File>>,
}

impl FileWriter {
    /// Creates a new file writer for the given path.
    ///
    /// The file is not opened until the first write operation. This allows
    /// construction to succeed even if the file cannot be opened immediately.
    pub const fn new(file_path: PathBuf, policy: RotationPolicy) -> Self {
        Self {
            file_path,
            policy,
            writer: Mutex::new(None),
        }
    }

    /// Writes a single line to the file with automatic rotation.
    ///
    /// Checks file size before writing and rotates if necessary. The line is
    /// written with a trailing newline and flushed immediately.
    ///
    /// # Errors
    ///
    /// May fail due to:
    /// - File system permissions
    /// - Disk space exhaustion
    /// - Mutex poisoning (if another thread panicked while holding the lock)
    pub fn write_line(&self, json: &str) -> std::io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| std::io::Error::other(format!("Mutex poisoned: {e}")))?;

        self.check_and_rotate(&mut writer)?;

        if writer.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            *writer = Some(file);
        }

        let file = writer
            .as_mut()
            .ok_or_else(|| std::io::Error::other("No file available"))?;

        writeln!(file, "{json}")?;
        file.flush()?;
        drop(writer);

        Ok(())
    }

    fn check_and_rotate(&self, writer: &mut Option<std::fs::File>) -> std::io::Result<()> {
        if let Ok(metadata) = fs::metadata(&self.file_path) {
            if metadata.len() > self.policy.max_bytes {
                *writer = None;
                self.rotate_files()?;
            }
        }
        Ok(())
    }

    /// Path of backup number `n` (1 is the newest).
    fn backup_path(&self, n: usize) -> PathBuf {
        backup_path(&self.file_path, n)
    }

    /// Shifts every backup up by one and moves the live file to backup 1.
    fn rotate_files(&self) -> std::io::Result<()> {
        if self.policy.max_backups == 0 {
            return fs::remove_file(&self.file_path);
        }

        let overflow = self.backup_path(self.policy.max_backups);
        if overflow.exists() {
            fs::remove_file(&overflow)?;
        }

        for n in (1..self.policy.max_backups).rev() {
            let from = self.backup_path(n);
            if from.exists() {
                fs::rename(&from, self.backup_path(n + 1))?;
            }
        }

        fs::rename(&self.file_path, self.backup_path(1))
    }
}

fn backup_path(path: &Path, n: usize) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(format!(".{n}"));
    PathBuf::from(name)
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINE: &str = "{\"span\":\"0123456789\"}";

    #[test]
    fn appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gazette-otlp.json");
        let writer = FileWriter::new(path.clone(), RotationPolicy::default());

        writer.write_line("a").unwrap();
        writer.write_line("b").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "a\nb\n");
        assert!(!backup_path(&path, 1).exists());
    }

    #[test]
    fn rotates_and_keeps_bounded_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gazette-otlp.json");
        let policy = RotationPolicy {
            max_bytes: 8,
            max_backups: 2,
        };
        let writer = FileWriter::new(path.clone(), policy);

        for _ in 0..6 {
            writer.write_line(LINE).unwrap();
        }

        assert_eq!(fs::read_to_string(&path).unwrap(), format!("{LINE}\n"));
        assert!(backup_path(&path, 1).exists());
        assert!(backup_path(&path, 2).exists());
        assert!(!backup_path(&path, 3).exists());
    }

    #[test]
    fn zero_backups_truncates_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gazette-otlp.json");
        let writer = FileWriter::new(
            path.clone(),
            RotationPolicy {
                max_bytes: 8,
                max_backups: 0,
            },
        );

        writer.write_line(LINE).unwrap();
        writer.write_line(LINE).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), format!("{LINE}\n"));
        assert!(!backup_path(&path, 1).exists());
    }

    #[test]
    fn policy_from_megabytes() {
        assert_eq!(RotationPolicy::from_megabytes(2, 1).max_bytes, 2 * 1024 * 1024);
        assert_eq!(RotationPolicy::default().max_backups, 3);
    }
}
