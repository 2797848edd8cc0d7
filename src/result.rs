use std::fmt::Display;
use thiserror::Error;

/// non-public (for now)
#[derive(Error, Debug)]
pub enum StashlineErrorVariants {
    /// The configured trigger prefix did not compile into an extraction pattern
    #[error("invalid trigger prefix {prefix:?}: {source}")]
    InvalidPrefix {
        /// The offending prefix as configured
        prefix: String,

        /// Compilation failure reported by the regex engine
        source: regex::Error,
    },

    /// A wildcard key pattern did not compile
    #[error("invalid key pattern {glob:?}: {source}")]
    InvalidPattern {
        /// The offending glob
        glob: String,

        /// Compilation failure reported by the regex engine
        source: regex::Error,
    },

    /// No home directory to place a store file in
    #[error("could not determine a home directory for the store file")]
    NoHomeDirectory,

    /// Store file contained something other than a JSON object of string pairs
    #[error("malformed store: {0}")]
    MalformedStore(serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    IOError(std::io::Error),
}

/// separate struct to not expose anything to the public (for now)
#[derive(Debug)]
pub struct StashlineError(pub StashlineErrorVariants);

impl From<std::io::Error> for StashlineError {
    fn from(err: std::io::Error) -> Self {
        Self(StashlineErrorVariants::IOError(err))
    }
}

impl Display for StashlineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
impl std::error::Error for StashlineError {}

/// Standard [`std::result::Result`], with [`StashlineError`] as the error variant
pub type Result<T> = std::result::Result<T, StashlineError>;
