//! Error types for registry probing.
//!
//! A missing key or value is never an error: discovery treats it as "not
//! installed" and moves on. Only the conditions below reach the caller.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    /// The root of the configuration store could not be opened, so nothing
    /// can be determined about installed editions.
    #[error("Configuration store unavailable: cannot open {root}: {reason}")]
    StoreUnavailable { root: String, reason: String },

    /// A registry snapshot file could not be read or parsed.
    #[error("Invalid registry snapshot at {}: {message}", path.display())]
    Snapshot { path: PathBuf, message: String },
}
