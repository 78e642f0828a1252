//! Error types for aircas-launch

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Launcher error types
#[derive(Error, Debug)]
pub enum Error {
    /// The trainer entry point could not be started
    #[error("failed to start trainer `{program}`: {source}")]
    ProcessLaunch {
        /// Program the spawn was attempted with
        program: String,
        /// Underlying spawn failure
        #[source]
        source: std::io::Error,
    },

    /// The trainer ran but exited with a nonzero status
    #[error("trainer exited with status {code}")]
    ExternalProcess {
        /// Exit code reported by the trainer process
        code: i32,
    },

    /// The trainer died without reporting an exit code (signal on unix)
    #[error("trainer terminated without an exit code")]
    Terminated,

    /// The child's module search path could not be assembled
    #[error("search path: {0}")]
    SearchPath(String),

    /// A configuration field violates its invariant
    #[error("invalid experiment config: {field}: {reason}")]
    InvalidConfig {
        /// Offending field name
        field: &'static str,
        /// What the invariant requires
        reason: String,
    },

    /// A configuration file could not be read or parsed
    #[error("config file {}: {reason}", .path.display())]
    ConfigFile {
        /// Path of the file that failed to load
        path: PathBuf,
        /// Read or parse failure detail
        reason: String,
    },
}
