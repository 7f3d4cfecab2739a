use std::cell::RefCell;
use std::collections::HashSet;

use crate::error::{ReleaseError, Result};
use crate::release::tag::ReleaseTag;

use super::ComposeOps;

/// One recorded compose invocation: the subcommand and the `VERSION` value
/// that would have been injected into its environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub subcommand: &'static str,
    pub version: String,
}

impl Invocation {
    pub fn new(subcommand: &'static str, version: impl Into<String>) -> Self {
        Invocation {
            subcommand,
            version: version.into(),
        }
    }
}

/// Mock compose tooling for testing without spawning processes.
///
/// Records every invocation in order and fails the ones registered via
/// [MockCompose::fail_on] with the given exit code.
pub struct MockCompose {
    invocations: RefCell<Vec<Invocation>>,
    failures: HashSet<(String, String)>,
    failure_code: i32,
}

impl MockCompose {
    /// Create a mock where every invocation succeeds
    pub fn new() -> Self {
        MockCompose {
            invocations: RefCell::new(Vec::new()),
            failures: HashSet::new(),
            failure_code: 1,
        }
    }

    /// Make the given subcommand fail for the given tag
    pub fn fail_on(mut self, subcommand: &str, tag: &str, code: i32) -> Self {
        self.failures.insert((subcommand.to_string(), tag.to_string()));
        self.failure_code = code;
        self
    }

    /// Invocations recorded so far, in order
    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.borrow().clone()
    }

    fn record(&self, subcommand: &'static str, tag: &ReleaseTag) -> Result<()> {
        self.invocations
            .borrow_mut()
            .push(Invocation::new(subcommand, tag.as_str()));

        if self
            .failures
            .contains(&(subcommand.to_string(), tag.as_str().to_string()))
        {
            return Err(ReleaseError::CommandFailed {
                subcommand,
                tag: tag.to_string(),
                code: Some(self.failure_code),
            });
        }

        Ok(())
    }
}

impl Default for MockCompose {
    fn default() -> Self {
        Self::new()
    }
}

impl ComposeOps for MockCompose {
    fn build(&self, tag: &ReleaseTag) -> Result<()> {
        self.record("build", tag)
    }

    fn push(&self, tag: &ReleaseTag) -> Result<()> {
        self.record("push", tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_invocations_in_order() {
        let compose = MockCompose::new();
        let tag = ReleaseTag::new("1.0.0").unwrap();

        compose.build(&tag).unwrap();
        compose.push(&tag).unwrap();

        assert_eq!(
            compose.invocations(),
            vec![
                Invocation::new("build", "1.0.0"),
                Invocation::new("push", "1.0.0"),
            ]
        );
    }

    #[test]
    fn injected_failure_carries_the_exit_code() {
        let compose = MockCompose::new().fail_on("build", "1.0.0", 7);
        let tag = ReleaseTag::new("1.0.0").unwrap();

        let err = compose.build(&tag).unwrap_err();
        assert_eq!(err.exit_status(), 7);
    }
}
