use anyhow::Result;
use colored::Colorize;

use crate::compose::ComposeClient;
use crate::release::tag::ReleaseTag;
use crate::release::Releaser;

/// Release the given version: build and push the versioned images, then
/// float `latest` to the same build.
pub fn run(version: &str) -> Result<()> {
    let tag = ReleaseTag::new(version)?;

    if !tag.is_semver() {
        tracing::warn!(
            "Version '{}' does not look like MAJOR.MINOR.PATCH; releasing it as-is",
            tag
        );
    }

    let releaser = Releaser::new(ComposeClient::new()?);
    releaser.publish(&tag)?;

    println!(
        "\n{} All operations completed successfully!",
        "✓".green().bold()
    );

    Ok(())
}
