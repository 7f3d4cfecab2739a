use regex::Regex;
use semver::Version;
use std::fmt;
use std::sync::OnceLock;

use crate::error::{ReleaseError, Result};

/// Tag applied to every image of the secondary release pass.
pub const LATEST: &str = "latest";

/// A label identifying the image variant being released, either the
/// user-supplied version or the literal `latest`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseTag(String);

impl ReleaseTag {
    /// Create a tag from a string. The only hard invariant is that the
    /// tag is non-empty.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ReleaseError::EmptyTag);
        }
        Ok(ReleaseTag(name))
    }

    /// The `latest` tag used by the secondary release pass.
    pub fn latest() -> Self {
        ReleaseTag(LATEST.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the tag looks like a MAJOR.MINOR.PATCH semantic version.
    pub fn is_semver(&self) -> bool {
        semver_regex().is_match(&self.0) && Version::parse(&self.0).is_ok()
    }
}

impl fmt::Display for ReleaseTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn semver_regex() -> &'static Regex {
    static SEMVER_RE: OnceLock<Regex> = OnceLock::new();
    SEMVER_RE.get_or_init(|| {
        Regex::new(r"^\d+\.\d+\.\d+$").expect("SEMVER_RE regex must compile")
    })
}
