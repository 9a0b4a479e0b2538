use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use thiserror::Error;

/// Failures that end a run.
#[derive(Debug, Error)]
pub enum Log2ClipError {
    #[error("Log file not found: {}", .0.display())]
    LogNotFound(PathBuf),

    #[error("Failed to read log file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write excerpt to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Log2ClipError {
    /// A missing log gets its own status so scripts can tell it apart.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Log2ClipError::LogNotFound(_) => ExitCode::from(2),
            Log2ClipError::Read { .. } | Log2ClipError::Write { .. } => ExitCode::from(1),
        }
    }
}
