//! Line-oriented puzzle input.
//!
//! The file is owned by [`InputLines`] and closed when the iterator is
//! dropped, on success or after an error.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure to obtain puzzle input.
#[derive(Debug, Error)]
pub enum InputError {
    /// The input file could not be opened.
    #[error("cannot open input {}", path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An I/O error occurred part-way through the file.
    #[error("read failure at line {line}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },

    /// A line a solver cannot continue past.
    #[error("malformed input at line {line}: {content:?}")]
    Malformed { line: usize, content: String },
}

/// Lines of a puzzle input, numbered from 1.
///
/// Yields `Err` at most once: after a read failure the iterator is fused.
#[derive(Debug)]
pub struct InputLines<R> {
    reader: R,
    line: usize,
    failed: bool,
}

impl<R: BufRead> Iterator for InputLines<R> {
    type Item = Result<String, InputError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let mut buf = String::new();
        self.line += 1;
        match self.reader.read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => {
                if buf.ends_with('\n') {
                    buf.pop();
                    if buf.ends_with('\r') {
                        buf.pop();
                    }
                }
                Some(Ok(buf))
            }
            Err(source) => {
                self.failed = true;
                Some(Err(InputError::Read {
                    line: self.line,
                    source,
                }))
            }
        }
    }
}

/// Wrap any buffered reader as puzzle input.
pub fn lines_from_reader<R: BufRead>(reader: R) -> InputLines<R> {
    InputLines {
        reader,
        line: 0,
        failed: false,
    }
}

/// Open a puzzle input file for line-by-line reading.
pub fn open_lines(path: &Path) -> Result<InputLines<BufReader<File>>, InputError> {
    let file = File::open(path).map_err(|source| InputError::Unavailable {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("opened input {}", path.display());
    Ok(lines_from_reader(BufReader::new(file)))
}
