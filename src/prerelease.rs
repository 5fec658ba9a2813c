//! The closed set of recognized prerelease tags

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag value meaning "this is a final release"
pub const NO_PRE_RELEASE_TAG: &str = "none";

/// Rank of the least mature tag. Ranks start high so tags can be added below.
pub const LOWEST_TAG_RANK: u32 = 999;

/// Recognized tags in ascending maturity, with their stable ranks.
pub const PRERELEASE_TAGS: [(&str, PrereleaseTag, u32); 4] = [
    ("prealpha", PrereleaseTag::Prealpha, LOWEST_TAG_RANK),
    ("alpha", PrereleaseTag::Alpha, 1_000),
    ("beta", PrereleaseTag::Beta, 1_001),
    ("rc", PrereleaseTag::Rc, 1_002),
];

/// Prerelease marker of a version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrereleaseTag {
    /// Final release
    #[default]
    None,
    Prealpha,
    Alpha,
    Beta,
    Rc,
}

impl PrereleaseTag {
    /// Look up a recognized tag by its exact name.
    ///
    /// Matching is case-sensitive and never yields [`PrereleaseTag::None`].
    pub fn from_name(name: &str) -> Option<Self> {
        PRERELEASE_TAGS
            .iter()
            .find(|(tag_name, _, _)| *tag_name == name)
            .map(|(_, tag, _)| *tag)
    }

    /// Name as written in a version string
    pub fn name(&self) -> &'static str {
        PRERELEASE_TAGS
            .iter()
            .find(|(_, tag, _)| tag == self)
            .map(|(name, _, _)| *name)
            .unwrap_or(NO_PRE_RELEASE_TAG)
    }

    /// Ordering rank, `None` for the "no prerelease" sentinel
    pub fn rank(&self) -> Option<u32> {
        PRERELEASE_TAGS
            .iter()
            .find(|(_, tag, _)| tag == self)
            .map(|(_, _, rank)| *rank)
    }

    pub fn is_none(&self) -> bool {
        matches!(self, PrereleaseTag::None)
    }

    /// Build number a tag stands for when written in the build position,
    /// e.g. the `beta` in `1.0.0-alpha.beta`.
    pub fn build_offset(&self) -> Option<i64> {
        self.rank()
            .map(|rank| i64::from(rank.saturating_sub(LOWEST_TAG_RANK)))
    }
}

impl fmt::Display for PrereleaseTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
