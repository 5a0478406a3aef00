//! Report writer
//!
//! Writes rendered reports to stdout or to a file.

use crate::error::{Error, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

/// Write a rendered report, returning the number of bytes written.
///
/// With no path the report goes to stdout. File output is written to a
/// uniquely named temporary file in the same directory and then renamed into
/// place.
pub fn write_report(content: &str, path: Option<&Path>) -> Result<usize> {
    match path {
        Some(path) => write_report_file(content, path),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            if !content.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
            stdout.flush()?;
            Ok(content.len())
        }
    }
}

fn write_report_file(content: &str, path: &Path) -> Result<usize> {
    let parent = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => {
            fs::create_dir_all(parent).map_err(|e| Error::Output {
                message: format!("Failed to create directory '{}': {e}", parent.display()),
            })?;
            parent
        }
        None => Path::new("."),
    };

    // Uniquely named sibling, removed on drop if anything below fails
    let mut temp = NamedTempFile::new_in(parent).map_err(|e| Error::Output {
        message: format!("Failed to create temporary report file: {e}"),
    })?;
    temp.write_all(content.as_bytes())
        .and_then(|()| temp.flush())
        .map_err(|e| Error::Output {
            message: format!("Failed to write report file: {e}"),
        })?;
    temp.persist(path).map_err(|e| Error::Output {
        message: format!("Failed to move report into place: {}", e.error),
    })?;

    info!("Wrote report to {}", path.display());
    Ok(content.len())
}
