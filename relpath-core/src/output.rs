//! Streaming output helpers and the list-processing loop

use std::io::{BufRead, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{RelpathError, Result};
use crate::lines::{open_list, ListSource, PathLines};
use crate::relativize::Relativizer;

/// How each relativized path is rendered.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum OutputFormat {
    /// Bare relative path, one per line.
    #[default]
    Plain,
    /// One JSON object per line with the source line and its relative form.
    Ndjson,
}

/// One NDJSON record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelativeEntry {
    pub source: String,
    pub relative: String,
}

impl RelativeEntry {
    pub fn new(source: impl Into<String>, relative: &Path) -> Self {
        Self {
            source: source.into(),
            relative: relative.to_string_lossy().into_owned(),
        }
    }
}

/// Write a path followed by a newline.
pub fn write_plain(path: &Path, mut w: impl Write) -> Result<()> {
    writeln!(w, "{}", path.display()).map_err(RelpathError::Write)
}

/// Write one entry as newline-delimited JSON.
pub fn write_ndjson(entry: &RelativeEntry, mut w: impl Write) -> Result<()> {
    let line = serde_json::to_string(entry)?;
    w.write_all(line.as_bytes()).map_err(RelpathError::Write)?;
    w.write_all(b"\n").map_err(RelpathError::Write)?;
    Ok(())
}

/// Relativize every line of every source, in order, writing as we go.
///
/// Returns the number of lines written. The first unreadable source aborts
/// the run; whatever was written before it stays written.
pub fn relativize_lists<I: BufRead>(
    relativizer: &Relativizer,
    sources: &[ListSource],
    stdin: &mut I,
    format: OutputFormat,
    mut w: impl Write,
) -> Result<usize> {
    let mut emitted = 0;

    for source in sources {
        debug!(list = %source, "reading path list");
        let written = match source {
            ListSource::File(path) => emit_lines(relativizer, open_list(path)?, format, &mut w)?,
            ListSource::Stdin => {
                let lines = PathLines::new(&mut *stdin, source.path());
                emit_lines(relativizer, lines, format, &mut w)?
            }
        };
        debug!(list = %source, lines = written, "finished path list");
        emitted += written;
    }

    Ok(emitted)
}

fn emit_lines<R: BufRead>(
    relativizer: &Relativizer,
    lines: PathLines<R>,
    format: OutputFormat,
    w: &mut impl Write,
) -> Result<usize> {
    let mut count = 0;

    for line in lines {
        let line = line?;
        let relative = relativizer.relativize(&line);
        trace!(source = %line, relative = %relative.display(), "relativized");

        match format {
            OutputFormat::Plain => write_plain(&relative, &mut *w)?,
            OutputFormat::Ndjson => write_ndjson(&RelativeEntry::new(line, &relative), &mut *w)?,
        }
        w.flush().map_err(RelpathError::Write)?;
        count += 1;
    }

    Ok(count)
}
