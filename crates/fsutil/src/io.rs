//! Line-oriented text file I/O
//!
//! Files are read as UTF-8 with every carriage return dropped, and written
//! with the line ending of a target [`Platform`], so text written on one
//! platform reads back as the same lines on any other.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::iter::FusedIterator;
use std::path::{Path, PathBuf};

use crate::{Error, Platform, Result};

/// Read a whole text file as lines without their line endings.
///
/// A single trailing newline does not produce an empty last line; an empty
/// file yields no lines. See also [`read_utf8_lines`].
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid UTF-8.
pub fn read_text_file(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let mut text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    if text.is_empty() {
        return Ok(Vec::new());
    }

    text.retain(|c| c != '\r');
    let body = text.strip_suffix('\n').unwrap_or(text.as_str());
    let lines: Vec<String> = body.split('\n').map(str::to_string).collect();
    tracing::debug!(path = %path.display(), lines = lines.len(), "Read text file");
    Ok(lines)
}

/// Lazily read a text file one line at a time.
///
/// The file is opened immediately; failure to open is reported as the
/// iterator's first and only item. See [`Utf8Lines`].
pub fn read_utf8_lines(path: impl AsRef<Path>) -> Utf8Lines {
    let path = path.as_ref().to_path_buf();
    let state = match File::open(&path) {
        Ok(file) => {
            tracing::debug!(path = %path.display(), "Opened file for line reading");
            State::Reading(BufReader::new(file))
        }
        Err(e) => State::Failed(Error::io(&path, e)),
    };
    Utf8Lines { path, state }
}

enum State {
    Reading(BufReader<File>),
    Failed(Error),
    Done,
}

/// Single-pass iterator over the lines of a UTF-8 text file.
///
/// Yields `Ok(line)` with line endings and carriage returns removed, in
/// the same sequence [`read_text_file`] would return. The first error ends
/// the iteration. The file is closed as soon as the end or an error is
/// reached, or when the iterator is dropped.
pub struct Utf8Lines {
    path: PathBuf,
    state: State,
}

impl Utf8Lines {
    /// The file being read.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl std::fmt::Debug for Utf8Lines {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = match self.state {
            State::Reading(_) => "reading",
            State::Failed(_) => "failed",
            State::Done => "done",
        };
        f.debug_struct("Utf8Lines")
            .field("path", &self.path)
            .field("state", &state)
            .finish()
    }
}

impl Iterator for Utf8Lines {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        match std::mem::replace(&mut self.state, State::Done) {
            State::Done => None,
            State::Failed(err) => Some(Err(err)),
            State::Reading(mut reader) => {
                let mut line = String::new();
                match reader.read_line(&mut line) {
                    // end of stream; dropping the reader closes the file
                    Ok(0) => None,
                    Ok(_) => {
                        line.retain(|c| c != '\r');
                        if line.ends_with('\n') {
                            line.pop();
                        }
                        self.state = State::Reading(reader);
                        Some(Ok(line))
                    }
                    Err(e) => {
                        tracing::debug!(path = %self.path.display(), error = %e, "Line read failed");
                        Some(Err(Error::io(&self.path, e)))
                    }
                }
            }
        }
    }
}

impl FusedIterator for Utf8Lines {}

/// Write `lines` using the current platform's line ending.
///
/// See [`write_text_file_for`].
pub fn write_text_file<S: AsRef<str>>(path: impl AsRef<Path>, lines: &[S]) -> Result<()> {
    write_text_file_for(path, lines, &Platform::current())
}

/// Create or truncate `path` and write every line followed by the target
/// platform's line ending, including the last.
///
/// # Errors
///
/// Returns the first create, write or flush error. Nothing is rolled back, so
/// the file may be left partially written.
pub fn write_text_file_for<S: AsRef<str>>(
    path: impl AsRef<Path>,
    lines: &[S],
    platform: &Platform,
) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut out = BufWriter::new(file);
    let eol = platform.eol.as_str().as_bytes();

    for line in lines {
        out.write_all(line.as_ref().as_bytes())
            .map_err(|e| Error::io(path, e))?;
        out.write_all(eol).map_err(|e| Error::io(path, e))?;
    }
    out.flush().map_err(|e| Error::io(path, e))?;

    tracing::debug!(
        path = %path.display(),
        lines = lines.len(),
        eol = %platform.eol,
        "Wrote text file"
    );
    Ok(())
}
