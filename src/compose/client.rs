use std::path::PathBuf;
use std::process::Command;

use crate::error::{ReleaseError, Result};
use crate::release::tag::ReleaseTag;

use super::ComposeOps;

/// Compose files passed to every invocation. The file list is fixed; the
/// compose CLI resolves image names and tags from it plus `VERSION`.
const COMPOSE_FILES: &[&str] = &["docker-compose.yml"];

/// Wrapper around the `docker compose` CLI
pub struct ComposeClient {
    program: PathBuf,
}

impl ComposeClient {
    /// Locate the docker CLI on PATH.
    ///
    /// Discovery spawns nothing, so argument errors surfaced before this
    /// point guarantee zero subprocess invocations.
    pub fn new() -> Result<Self> {
        let program = which::which("docker").map_err(|_| ReleaseError::DockerNotFound)?;
        tracing::debug!("Using docker CLI at {}", program.display());
        Ok(Self { program })
    }

    /// Argument vector for a compose subcommand.
    fn compose_args(subcommand: &str) -> Vec<&str> {
        let mut args = vec!["compose"];
        for file in COMPOSE_FILES {
            args.push("-f");
            args.push(file);
        }
        args.push(subcommand);
        args
    }

    /// Run one compose subcommand to completion with `VERSION` overlaid on
    /// the inherited environment. The subprocess streams its own output;
    /// stdout and stderr are inherited untouched.
    fn run(&self, subcommand: &'static str, tag: &ReleaseTag) -> Result<()> {
        let mut cmd = Command::new(&self.program);
        cmd.args(Self::compose_args(subcommand))
            .env("VERSION", tag.as_str());

        tracing::debug!("Running: {:?}", cmd);

        let status = cmd.status().map_err(|source| ReleaseError::Spawn {
            program: self.program.display().to_string(),
            source,
        })?;

        if !status.success() {
            return Err(ReleaseError::CommandFailed {
                subcommand,
                tag: tag.to_string(),
                code: status.code(),
            });
        }

        Ok(())
    }
}

impl ComposeOps for ComposeClient {
    fn build(&self, tag: &ReleaseTag) -> Result<()> {
        self.run("build", tag)
    }

    fn push(&self, tag: &ReleaseTag) -> Result<()> {
        self.run("push", tag)
    }
}
