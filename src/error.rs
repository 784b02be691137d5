// Error types for the expense store
// Every failure is surfaced whole to the caller; nothing is retried.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Amount text that does not coerce to a number.
    #[error("invalid amount {input:?}: not a number")]
    InvalidAmount { input: String },

    /// Append target could not be opened or written.
    #[error("cannot append to expense store at {}", .path.display())]
    Unwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Store exists but could not be opened for reading.
    #[error("cannot read expense store at {}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// One unparseable row aborts the scan that hit it.
    #[error("malformed row at line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },
}
