//! Version string parsing
//!
//! Accepted shape: `MAJOR.MINOR.PATCH[-TAG[.BUILD]]`, where `TAG` is one of
//! the recognized prerelease tags and `BUILD` is a number or another tag
//! name. A tag in the build position stands for its rank offset from the
//! lowest tag, so `1.0.0-alpha.beta` means `1.0.0-alpha.2`.
//!
//! Every failure is reported the same way, as
//! [`VersionError::InvalidVersion`].

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{Result, VersionError};
use crate::prerelease::PrereleaseTag;
use crate::version::{Version, MAX_VERSION_LENGTH, NO_PRE_RELEASE_BUILD_SPECIFIED};

/// How numeric fragments are read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericMode {
    /// Read the leading number and ignore the rest, so `"12x"` is 12.
    /// Leading whitespace (including U+FEFF) and a `+` sign are accepted.
    #[default]
    Lenient,
    /// The whole fragment must be ASCII digits.
    Strict,
}

/// Version string parser
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser {
    numeric: NumericMode,
}

/// Parse with the default options.
pub fn parse(input: &str) -> Result<Version> {
    Parser::default().parse(input)
}

fn reject(input: &str, reason: &'static str) -> VersionError {
    trace!(input, reason, "rejected version string");
    VersionError::invalid(input)
}

impl Parser {
    pub fn new(numeric: NumericMode) -> Self {
        Self { numeric }
    }

    /// Parser that refuses trailing garbage in numeric fragments
    pub fn strict() -> Self {
        Self::new(NumericMode::Strict)
    }

    pub fn numeric_mode(&self) -> NumericMode {
        self.numeric
    }

    /// Parse a version string.
    pub fn parse(&self, input: &str) -> Result<Version> {
        let length = input.chars().count();
        if length == 0 || length > MAX_VERSION_LENGTH {
            return Err(reject(input, "length out of range"));
        }

        let mut segments = input.split('-');
        let core = segments.next().unwrap_or_default();
        let prerelease = segments.next();
        if segments.next().is_some() {
            return Err(reject(input, "more than one '-'"));
        }

        let fragments: Vec<&str> = core.split('.').filter(|f| !f.is_empty()).collect();
        let [major, minor, patch] = fragments.as_slice() else {
            return Err(reject(input, "core is not major.minor.patch"));
        };
        let (Some(major), Some(minor), Some(patch)) =
            (self.number(major), self.number(minor), self.number(patch))
        else {
            return Err(reject(input, "core field is not a non-negative integer"));
        };

        let Some(prerelease) = prerelease else {
            return Ok(Version::from_parts(
                major,
                minor,
                patch,
                PrereleaseTag::None,
                NO_PRE_RELEASE_BUILD_SPECIFIED,
            ));
        };

        let fragments: Vec<&str> = prerelease.split('.').collect();
        let (tag, build) = match fragments.as_slice() {
            [tag] => (*tag, None),
            [tag, build] => (*tag, Some(*build)),
            _ => return Err(reject(input, "prerelease has more than tag and build")),
        };

        let Some(tag) = PrereleaseTag::from_name(tag) else {
            return Err(reject(input, "unrecognized prerelease tag"));
        };

        let build = match build {
            None => 0,
            Some(build) => match self.build(build) {
                Some(build) => build,
                None => return Err(reject(input, "build is neither a number nor a tag")),
            },
        };

        Ok(Version::from_parts(major, minor, patch, tag, build))
    }

    fn build(&self, fragment: &str) -> Option<i64> {
        self.number(fragment)
            .and_then(|n| i64::try_from(n).ok())
            .or_else(|| PrereleaseTag::from_name(fragment).and_then(|tag| tag.build_offset()))
    }

    fn number(&self, fragment: &str) -> Option<u64> {
        let digits = match self.numeric {
            NumericMode::Strict => fragment,
            NumericMode::Lenient => leading_digits(fragment),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok()
    }
}

/// The run of ASCII digits at the start of `fragment`, after optional
/// whitespace or byte order marks and a `+` sign. A `-` sign yields
/// nothing since negative numbers are never valid.
fn leading_digits(fragment: &str) -> &str {
    let unsigned = fragment.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    let unsigned = unsigned.strip_prefix('+').unwrap_or(unsigned);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    &unsigned[..end]
}
