//! Docker Compose CLI abstraction layer
//!
//! The releaser talks to the compose tooling through the [ComposeOps]
//! trait, so the real subprocess-backed [client::ComposeClient] can be
//! swapped for a recording mock in tests.

pub mod client;
#[cfg(test)]
pub mod mock;

pub use client::ComposeClient;

use crate::error::Result;
use crate::release::tag::ReleaseTag;

/// Operations the releaser needs from the compose tooling.
///
/// Each method runs one external command to completion and returns `Ok`
/// only for a zero exit status. Callers inspect the result immediately and
/// halt on the first non-success.
pub trait ComposeOps {
    /// Build the images for the given tag (`VERSION` set in the subprocess
    /// environment).
    fn build(&self, tag: &ReleaseTag) -> Result<()>;

    /// Push the previously built images for the given tag.
    fn push(&self, tag: &ReleaseTag) -> Result<()>;
}
