use thiserror::Error;

/// Unified error type for release operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("Release tag must not be empty")]
    EmptyTag,

    #[error("docker CLI not found on PATH. Is Docker installed?")]
    DockerNotFound,

    #[error("Failed to launch {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("docker compose {subcommand} for tag '{tag}' exited with {}", describe_exit(.code))]
    CommandFailed {
        subcommand: &'static str,
        tag: String,
        code: Option<i32>,
    },
}

/// Convenience type alias for Results in compose-release
pub type Result<T> = std::result::Result<T, ReleaseError>;

impl ReleaseError {
    /// Exit status the process should terminate with for this error.
    ///
    /// A failed build or push propagates the child's own exit code; every
    /// other failure (usage, missing tooling, spawn) exits with 1.
    pub fn exit_status(&self) -> i32 {
        match self {
            ReleaseError::CommandFailed { code: Some(code), .. } => *code,
            _ => 1,
        }
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "a signal".to_string(),
    }
}
