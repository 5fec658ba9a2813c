//! Error types for version parsing

use thiserror::Error;

/// Result type for version operations
pub type Result<T> = std::result::Result<T, VersionError>;

/// Version errors
#[derive(Error, Debug)]
pub enum VersionError {
    /// Any malformed input. The parser does not say which rule was broken.
    #[error("Invalid version string: {0:?}")]
    InvalidVersion(String),

    #[error("A prerelease version needs a prerelease tag other than \"none\"")]
    MissingPrereleaseTag,

    #[error("Prerelease build {0} is out of range")]
    BuildOutOfRange(u64),

    #[error("Cannot bump {0} version past u64::MAX")]
    Overflow(&'static str),
}

impl VersionError {
    pub(crate) fn invalid(input: &str) -> Self {
        Self::InvalidVersion(input.to_string())
    }
}
