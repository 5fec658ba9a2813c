//! Tagged Semantic Versions
//!
//! Parses and orders version strings of the form `MAJOR.MINOR.PATCH` with an
//! optional prerelease drawn from a closed set of tags.
//!
//! ## Features
//!
//! - **Closed Tag Set**: `prealpha < alpha < beta < rc`, each with a stable rank
//! - **Total Ordering**: releases beat prereleases of the same core version
//! - **Uniform Failure**: malformed input is always [`VersionError::InvalidVersion`]
//! - **Lenient or Strict Numbers**: choose whether `"12x"` reads as 12
//!
//! ## Grammar
//!
//! ```text
//! version    := core [ "-" prerelease ]
//! core       := number "." number "." number
//! prerelease := tag [ "." ( number | tag ) ]
//! tag        := "prealpha" | "alpha" | "beta" | "rc"
//! ```
//!
//! ```
//! use tagged_semver::parse;
//!
//! let release = parse("1.2.3").unwrap();
//! let candidate = parse("1.2.3-rc.1").unwrap();
//! assert!(release.is_greater(&candidate));
//! ```

pub mod config;
pub mod error;
pub mod parser;
pub mod prerelease;
pub mod version;

pub use config::{OutputFormat, ToolConfig};
pub use error::{Result, VersionError};
pub use parser::{parse, NumericMode, Parser};
pub use prerelease::{PrereleaseTag, LOWEST_TAG_RANK, NO_PRE_RELEASE_TAG, PRERELEASE_TAGS};
pub use version::{Comparison, Version, MAX_VERSION_LENGTH, NO_PRE_RELEASE_BUILD_SPECIFIED};
