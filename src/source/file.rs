use std::fs;
use std::path::Path;

use crate::error::{LogAnalyzerError, Result};
use crate::logfile::LogView;

/// Read a log saved on disk. Invalid UTF-8 is replaced rather than rejected.
///
/// # Errors
/// Returns an error if the file cannot be read.
pub fn read_log_file(path: &Path) -> Result<LogView> {
    let bytes = fs::read(path).map_err(|source| LogAnalyzerError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(LogView::from_text(&String::from_utf8_lossy(&bytes)))
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
