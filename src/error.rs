/**
 * File: /src/error.rs
 * Created Date: Monday, October 12th 2026
 * Author: Zihan
 * -----
 * Last Modified: Wednesday, 14th October 2026 10:21:07 am
 * Modified By: the developer formerly known as Zihan at <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 */
use std::collections::TryReserveError;
use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors that can abort a clustering run
///
/// Every kind is terminal: the caller prints the message and exits.
#[derive(Debug)]
pub enum ClusterError {
    /// Cluster storage could not grow
    Allocation(String),
    /// Input file could not be opened or read
    Io { path: PathBuf, source: io::Error },
    /// Input content violates the `count=N` / `id x y` format
    Format { line: usize, reason: String },
    /// Input parsed but contained no objects
    EmptyInput,
    /// Command line shape or count argument rejected
    InvalidArguments(String),
}

impl ClusterError {
    pub fn format(line: usize, reason: impl Into<String>) -> Self {
        ClusterError::Format {
            line,
            reason: reason.into(),
        }
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> u8 {
        1
    }
}

impl fmt::Display for ClusterError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ClusterError::Allocation(msg) => write!(f, "Allocation error: {}", msg),
            ClusterError::Io { path, source } => {
                write!(f, "File read error: {}: {}", path.display(), source)
            }
            ClusterError::Format { line, reason } => {
                write!(f, "Input format error: line {}: {}", line, reason)
            }
            ClusterError::EmptyInput => write!(f, "Input format error: no objects loaded"),
            ClusterError::InvalidArguments(msg) => write!(f, "Invalid arguments: {}", msg),
        }
    }
}

impl Error for ClusterError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ClusterError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<TryReserveError> for ClusterError {
    fn from(err: TryReserveError) -> Self {
        ClusterError::Allocation(err.to_string())
    }
}
