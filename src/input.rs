use std::fs;
use std::path::Path;

use crate::error::Log2ClipError;

/// Decode bytes as UTF-8, dropping malformed sequences instead of replacing them.
pub fn decode_lossy_dropping(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}

/// Split decoded text into lines without their `\n` / `\r\n` terminators.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

pub fn ensure_log_exists(path: &Path) -> Result<(), Log2ClipError> {
    if path.exists() {
        Ok(())
    } else {
        Err(Log2ClipError::LogNotFound(path.to_path_buf()))
    }
}

/// Read the whole log into memory.
pub fn read_log_lines(path: &Path) -> Result<Vec<String>, Log2ClipError> {
    ensure_log_exists(path)?;

    let bytes = fs::read(path).map_err(|source| Log2ClipError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(split_lines(&decode_lossy_dropping(&bytes)))
}

/// Write the excerpt, one `\n`-terminated line per source line.
pub fn write_excerpt(path: &Path, text: &str) -> Result<(), Log2ClipError> {
    fs::write(path, text).map_err(|source| Log2ClipError::Write {
        path: path.to_path_buf(),
        source,
    })
}
