//! Streaming readers over newline-delimited path lists

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::{RelpathError, Result};

/// Name used for standard input in diagnostics.
pub const STDIN_NAME: &str = "-";

/// Strip every trailing whitespace character, line terminator included.
///
/// The ASCII separators U+001C..=U+001F count as whitespace too. Leading and
/// interior whitespace is kept verbatim.
pub fn strip_line(line: &str) -> &str {
    line.trim_end_matches(|c: char| c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c))
}

/// Where a list of paths comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListSource {
    File(PathBuf),
    Stdin,
}

impl ListSource {
    /// Interpret a command-line argument; `-` means standard input.
    pub fn from_arg(raw: &Path) -> Self {
        if raw == Path::new(STDIN_NAME) {
            ListSource::Stdin
        } else {
            ListSource::File(raw.to_path_buf())
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            ListSource::File(path) => path,
            ListSource::Stdin => Path::new(STDIN_NAME),
        }
    }
}

impl fmt::Display for ListSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListSource::File(path) => write!(f, "{}", path.display()),
            ListSource::Stdin => f.write_str("<stdin>"),
        }
    }
}

/// Forward-only iterator over the stripped lines of one list.
///
/// Lines end at `\n`, `\r\n` or a lone `\r`. The reader is owned, so
/// dropping the iterator (after the last line, after an error, or early)
/// releases the underlying handle.
#[derive(Debug)]
pub struct PathLines<R> {
    reader: R,
    origin: PathBuf,
    buf: Vec<u8>,
    // Previous line ended in `\r`; a `\n` right after it belongs to that line.
    pending_lf: bool,
    finished: bool,
}

impl<R: BufRead> PathLines<R> {
    pub fn new(reader: R, origin: impl Into<PathBuf>) -> Self {
        Self {
            reader,
            origin: origin.into(),
            buf: Vec::new(),
            pending_lf: false,
            finished: false,
        }
    }

    /// Fill `buf` with the next raw line, without its terminator.
    ///
    /// Returns `false` at end of input when nothing was read.
    fn read_raw_line(&mut self) -> io::Result<bool> {
        self.buf.clear();
        let mut read_any = false;

        loop {
            let (used, done) = {
                let available = match self.reader.fill_buf() {
                    Ok(available) => available,
                    Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                    Err(err) => return Err(err),
                };

                if available.is_empty() {
                    return Ok(read_any);
                }

                if self.pending_lf {
                    self.pending_lf = false;
                    if available[0] == b'\n' {
                        (1, false)
                    } else {
                        (0, false)
                    }
                } else {
                    read_any = true;
                    match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                        Some(end) => {
                            self.buf.extend_from_slice(&available[..end]);
                            self.pending_lf = available[end] == b'\r';
                            (end + 1, true)
                        }
                        None => {
                            self.buf.extend_from_slice(available);
                            (available.len(), false)
                        }
                    }
                }
            };

            self.reader.consume(used);
            if done {
                return Ok(true);
            }
        }
    }

    fn next_line(&mut self) -> io::Result<Option<String>> {
        if !self.read_raw_line()? {
            return Ok(None);
        }

        let line = std::str::from_utf8(&self.buf)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        Ok(Some(strip_line(line).to_string()))
    }
}

impl<R: BufRead> Iterator for PathLines<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.next_line() {
            Ok(Some(line)) => Some(Ok(line)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(source) => {
                self.finished = true;
                Some(Err(RelpathError::FileAccess {
                    path: self.origin.clone(),
                    source,
                }))
            }
        }
    }
}

/// Open a list file for streaming.
pub fn open_list(path: &Path) -> Result<PathLines<BufReader<File>>> {
    let file = File::open(path).map_err(|source| RelpathError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(PathLines::new(BufReader::new(file), path))
}
