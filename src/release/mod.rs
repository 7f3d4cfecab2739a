pub mod tag;

use colored::Colorize;

use crate::compose::ComposeOps;
use crate::error::Result;
use self::tag::ReleaseTag;

/// Releases versioned container images through the compose tooling.
///
/// A release of one tag is build-then-push; the push only runs if the
/// build succeeded. A full publish releases the user's version tag and, on
/// success, repeats for `latest` so it always floats to the newest
/// successful build.
pub struct Releaser<C: ComposeOps> {
    compose: C,
}

impl<C: ComposeOps> Releaser<C> {
    pub fn new(compose: C) -> Self {
        Releaser { compose }
    }

    /// Build and push the images for a single tag, halting on the first
    /// non-zero exit.
    pub fn release(&self, tag: &ReleaseTag) -> Result<()> {
        println!(
            "{} Building with VERSION={}...",
            "=>".blue().bold(),
            tag.as_str().cyan()
        );
        self.compose.build(tag)?;

        println!(
            "{} Pushing with VERSION={}...",
            "=>".blue().bold(),
            tag.as_str().cyan()
        );
        self.compose.push(tag)?;

        Ok(())
    }

    /// Release the given version tag, then `latest`. The `latest` pass is
    /// never attempted if the versioned pass failed at any step.
    pub fn publish(&self, version: &ReleaseTag) -> Result<()> {
        self.release(version)?;
        self.release(&ReleaseTag::latest())
    }
}
