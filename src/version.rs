//! The version value and its ordering

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, VersionError};
use crate::prerelease::PrereleaseTag;

/// Longest accepted version string, in characters
pub const MAX_VERSION_LENGTH: usize = 256;

/// Build number carried by final releases
pub const NO_PRE_RELEASE_BUILD_SPECIFIED: i64 = -1;

/// Outcome of comparing a version against a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    /// The receiver is newer than the candidate
    Higher,
    /// The receiver is older than the candidate
    Lower,
    Equal,
}

impl Comparison {
    fn of<T: Ord>(current: T, candidate: T) -> Self {
        match current.cmp(&candidate) {
            Ordering::Greater => Comparison::Higher,
            Ordering::Less => Comparison::Lower,
            Ordering::Equal => Comparison::Equal,
        }
    }

    fn then_with(self, f: impl FnOnce() -> Comparison) -> Self {
        match self {
            Comparison::Equal => f(),
            decided => decided,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Comparison::Higher => "higher",
            Comparison::Lower => "lower",
            Comparison::Equal => "equal",
        }
    }
}

impl From<Comparison> for Ordering {
    fn from(comparison: Comparison) -> Self {
        match comparison {
            Comparison::Higher => Ordering::Greater,
            Comparison::Lower => Ordering::Less,
            Comparison::Equal => Ordering::Equal,
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A semantic version with an optional recognized prerelease tag.
///
/// A release has tag [`PrereleaseTag::None`] and build
/// [`NO_PRE_RELEASE_BUILD_SPECIFIED`]. A prerelease has a real tag and a
/// build of zero or more. The constructors keep those two shapes the only
/// possible ones, so the derived equality agrees with [`Version::compare`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    prerelease_tag: PrereleaseTag,
    prerelease_build: i64,
}

impl Version {
    /// Create a final release version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            prerelease_tag: PrereleaseTag::None,
            prerelease_build: NO_PRE_RELEASE_BUILD_SPECIFIED,
        }
    }

    /// `0.0.0`
    pub fn zero() -> Self {
        Self::new(0, 0, 0)
    }

    /// Create a prerelease version such as `1.0.0-beta.3`
    pub fn with_prerelease(
        major: u64,
        minor: u64,
        patch: u64,
        tag: PrereleaseTag,
        build: u64,
    ) -> Result<Self> {
        if tag.is_none() {
            return Err(VersionError::MissingPrereleaseTag);
        }
        let build = i64::try_from(build).map_err(|_| VersionError::BuildOutOfRange(build))?;
        Ok(Self::from_parts(major, minor, patch, tag, build))
    }

    /// Callers must uphold the tag/build invariant.
    pub(crate) fn from_parts(
        major: u64,
        minor: u64,
        patch: u64,
        prerelease_tag: PrereleaseTag,
        prerelease_build: i64,
    ) -> Self {
        Self {
            major,
            minor,
            patch,
            prerelease_tag,
            prerelease_build,
        }
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    pub fn prerelease_tag(&self) -> PrereleaseTag {
        self.prerelease_tag
    }

    /// Build number, [`NO_PRE_RELEASE_BUILD_SPECIFIED`] for releases
    pub fn prerelease_build(&self) -> i64 {
        self.prerelease_build
    }

    pub fn is_prerelease(&self) -> bool {
        !self.prerelease_tag.is_none()
    }

    /// Compare this version against a candidate.
    ///
    /// Core numbers decide first. At an equal core, a release beats any
    /// prerelease; two prereleases are ordered by tag rank, then build.
    pub fn compare(&self, candidate: &Version) -> Comparison {
        Comparison::of(self.major, candidate.major)
            .then_with(|| Comparison::of(self.minor, candidate.minor))
            .then_with(|| Comparison::of(self.patch, candidate.patch))
            .then_with(|| {
                match (self.is_prerelease(), candidate.is_prerelease()) {
                    (false, false) => Comparison::Equal,
                    (false, true) => Comparison::Higher,
                    (true, false) => Comparison::Lower,
                    (true, true) => Comparison::of(
                        self.prerelease_tag.rank(),
                        candidate.prerelease_tag.rank(),
                    )
                    .then_with(|| {
                        Comparison::of(self.prerelease_build, candidate.prerelease_build)
                    }),
                }
            })
    }

    pub fn is_greater(&self, candidate: &Version) -> bool {
        self.compare(candidate) == Comparison::Higher
    }

    pub fn is_lower(&self, candidate: &Version) -> bool {
        self.compare(candidate) == Comparison::Lower
    }

    pub fn is_equal(&self, candidate: &Version) -> bool {
        self.compare(candidate) == Comparison::Equal
    }

    /// Same core numbers, prerelease dropped
    pub fn release(&self) -> Self {
        Self::new(self.major, self.minor, self.patch)
    }

    /// Bump major version
    pub fn bump_major(&self) -> Result<Self> {
        let major = self.major.checked_add(1).ok_or(VersionError::Overflow("major"))?;
        Ok(Self::new(major, 0, 0))
    }

    /// Bump minor version
    pub fn bump_minor(&self) -> Result<Self> {
        let minor = self.minor.checked_add(1).ok_or(VersionError::Overflow("minor"))?;
        Ok(Self::new(self.major, minor, 0))
    }

    /// Bump patch version
    pub fn bump_patch(&self) -> Result<Self> {
        let patch = self.patch.checked_add(1).ok_or(VersionError::Overflow("patch"))?;
        Ok(Self::new(self.major, self.minor, patch))
    }
}

impl Default for Version {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other).into()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if self.is_prerelease() {
            write!(f, "-{}.{}", self.prerelease_tag, self.prerelease_build)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        crate::parser::parse(s)
    }
}

impl TryFrom<String> for Version {
    type Error = VersionError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Version> for String {
    fn from(version: Version) -> Self {
        version.to_string()
    }
}
