//! Write destinations for emitted markup.

use crate::error::Result;
use serde::Deserialize;
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// How a path-based sink opens its file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileMode {
    /// Create if missing, keep existing content and write at the end.
    #[default]
    Append,
    /// Create if missing, truncate existing content.
    Write,
}

/// Where a fragment is written.
pub enum Sink<'a> {
    /// A stream owned by the caller. It is never closed here.
    Stream(&'a mut dyn Write),
    /// A file opened, written, and closed within a single [`with_sink`] call.
    Path { path: PathBuf, mode: FileMode },
}

impl<'a> Sink<'a> {
    /// Borrow an already-open stream.
    pub fn stream(writer: &'a mut dyn Write) -> Self {
        Sink::Stream(writer)
    }

    /// Target a file in the default (append) mode.
    pub fn path(path: impl Into<PathBuf>) -> Self {
        Self::path_with_mode(path, FileMode::default())
    }

    pub fn path_with_mode(path: impl Into<PathBuf>, mode: FileMode) -> Self {
        Sink::Path {
            path: path.into(),
            mode,
        }
    }
}

impl std::fmt::Debug for Sink<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sink::Stream(_) => f.write_str("Sink::Stream(..)"),
            Sink::Path { path, mode } => f
                .debug_struct("Sink::Path")
                .field("path", path)
                .field("mode", mode)
                .finish(),
        }
    }
}

/// Run `body` against the writer behind `sink`.
///
/// A borrowed stream is handed through and left open. A path is opened in
/// its mode, and the file is flushed and released before this returns,
/// whether `body` succeeded or not. Errors from `body` are returned as-is.
///
/// # Example
///
/// ```rust
/// use texfrag::{emit_page_break, with_sink, Sink};
///
/// let mut out: Vec<u8> = Vec::new();
/// with_sink(Sink::stream(&mut out), |w| emit_page_break(w)).unwrap();
/// assert_eq!(out, b"\\clearpage\n\n");
/// ```
pub fn with_sink<T, F>(sink: Sink<'_>, body: F) -> Result<T>
where
    F: FnOnce(&mut dyn Write) -> Result<T>,
{
    match sink {
        Sink::Stream(writer) => body(writer),
        Sink::Path { path, mode } => {
            log::debug!("opening {} ({:?})", path.display(), mode);
            let file = open(&path, mode)?;
            let mut writer = BufWriter::new(file);

            let value = body(&mut writer)?;

            // into_inner flushes; the file handle closes when it drops here.
            writer.into_inner().map_err(|e| e.into_error())?;
            log::debug!("closed {}", path.display());
            Ok(value)
        }
    }
}

fn open(path: &Path, mode: FileMode) -> Result<fs::File> {
    let mut options = OpenOptions::new();
    match mode {
        FileMode::Append => options.create(true).append(true),
        FileMode::Write => options.create(true).write(true).truncate(true),
    };
    Ok(options.open(path)?)
}

/// Create every directory in `dirs` that does not exist yet.
pub fn create_dirs<I, P>(dirs: I) -> Result<()>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    for dir in dirs {
        let dir = dir.as_ref();
        if !dir.exists() {
            log::debug!("creating directory {}", dir.display());
            fs::create_dir_all(dir)?;
        }
    }
    Ok(())
}
