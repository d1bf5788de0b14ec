//! Error types for the I/O edges of mdfrag.
//!
//! Conversion itself never fails; only reading input can.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for mdfrag operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The input file could not be opened or read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
