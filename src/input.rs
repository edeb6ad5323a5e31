use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::SourceError;

/// Read every line of `reader`, dropping `\n` / `\r\n` terminators. Invalid
/// UTF-8 is replaced rather than rejected. No lines at all is an error.
pub fn read_lines<R: BufRead>(mut reader: R, path: Option<&Path>) -> Result<Vec<String>, SourceError> {
    let mut lines = Vec::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| SourceError::Unreadable {
                path: path.map(Path::to_path_buf),
                source,
            })?;
        if read == 0 {
            break;
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        lines.push(String::from_utf8_lossy(&buf).into_owned());
    }

    if lines.is_empty() {
        return Err(SourceError::Empty);
    }

    Ok(lines)
}

/// Load all lines from `path`, or from stdin when no path (or `-`) is given
pub fn load_lines(path: Option<&Path>) -> Result<Vec<String>, SourceError> {
    match path {
        Some(path) if path != Path::new("-") => {
            debug!(path = %path.display(), "loading file");
            if !path.exists() {
                return Err(SourceError::NotFound {
                    path: path.to_path_buf(),
                });
            }
            let file = File::open(path).map_err(|source| SourceError::Unreadable {
                path: Some(PathBuf::from(path)),
                source,
            })?;
            read_lines(BufReader::new(file), Some(path))
        }
        _ => {
            debug!("reading from stdin");
            read_lines(io::stdin().lock(), None)
        }
    }
}
