//! Append-only trace file that rolls over once it grows past a size limit.
//!
//! The live file keeps its configured name. On rollover it is renamed to
//! `<stem>.<UTC timestamp>.<ext>` and a fresh file is started; only the newest
//! backups are kept.

use chrono::Utc;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Size at which the live file is rolled over (4 MiB).
const DEFAULT_MAX_BYTES: u64 = 4 * 1024 * 1024;

/// Rolled-over files kept next to the live one.
const DEFAULT_BACKUPS: usize = 2;

/// Rolling line writer for the trace exporter.
#[derive(Debug)]
pub struct RotatingFile {
    path: PathBuf,
    max_bytes: u64,
    backups: usize,
    file: Option<File>,
}

impl RotatingFile {
    /// Writer with the default limits. Nothing is opened until the first line.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self::with_limits(path, DEFAULT_MAX_BYTES, DEFAULT_BACKUPS)
    }

    #[must_use]
    pub const fn with_limits(path: PathBuf, max_bytes: u64, backups: usize) -> Self {
        Self {
            path,
            max_bytes,
            backups,
            file: None,
        }
    }

    /// Appends `line` plus a newline, rolling the file over first if needed.
    ///
    /// # Errors
    ///
    /// Any I/O failure from rollover, opening, writing or flushing.
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        if fs::metadata(&self.path).is_ok_and(|meta| meta.len() > self.max_bytes) {
            self.file = None;
            self.roll_over()?;
        }

        if self.file.is_none() {
            self.file = Some(OpenOptions::new().create(true).append(true).open(&self.path)?);
        }
        if let Some(file) = self.file.as_mut() {
            writeln!(file, "{line}")?;
            file.flush()?;
        }
        Ok(())
    }

    fn roll_over(&self) -> io::Result<()> {
        let stamp = Utc::now().format("%Y%m%dT%H%M%S%.3f");
        let backup = self.sibling(&stamp.to_string());
        fs::rename(&self.path, &backup)?;

        let mut old = self.backups_on_disk()?;
        // Timestamps sort lexicographically; newest last.
        old.sort();
        let excess = old.len().saturating_sub(self.backups);
        for path in old.into_iter().take(excess) {
            if let Err(e) = fs::remove_file(&path) {
                tracing::debug!(path = %path.display(), error = %e, "failed to remove old trace backup");
            }
        }
        Ok(())
    }

    /// `<stem>.<tag>.<ext>` in the same directory as the live file.
    fn sibling(&self, tag: &str) -> PathBuf {
        let (stem, ext) = self.name_parts();
        let name = if ext.is_empty() {
            format!("{stem}.{tag}")
        } else {
            format!("{stem}.{tag}.{ext}")
        };
        self.path.with_file_name(name)
    }

    fn name_parts(&self) -> (String, String) {
        let part = |s: Option<&std::ffi::OsStr>| s.and_then(|s| s.to_str()).unwrap_or_default().to_string();
        (part(self.path.file_stem()), part(self.path.extension()))
    }

    fn backups_on_disk(&self) -> io::Result<Vec<PathBuf>> {
        let dir = self.path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
        let (stem, ext) = self.name_parts();
        let prefix = format!("{stem}.");
        let suffix = format!(".{ext}");

        Ok(fs::read_dir(dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| *path != self.path)
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(&prefix) && (ext.is_empty() || name.ends_with(&suffix)))
            })
            .collect())
    }
}
