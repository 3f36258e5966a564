//! Assertion outcome value

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of an assertion predicate
///
/// Predicates never panic to report an unmet expectation; they return
/// `Failure` with a message detailed enough to diagnose the problem
/// without re-running the test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssertionResult {
    /// Expectation met
    Success,
    /// Expectation not met
    Failure(String),
}

impl AssertionResult {
    /// Create a failure
    pub fn failure(message: impl Into<String>) -> Self {
        AssertionResult::Failure(message.into())
    }

    /// Success iff `cond` holds, otherwise a failure built lazily
    pub fn check(cond: bool, message: impl FnOnce() -> String) -> Self {
        if cond {
            AssertionResult::Success
        } else {
            AssertionResult::Failure(message())
        }
    }

    /// Check if the assertion succeeded
    pub fn is_success(&self) -> bool {
        matches!(self, AssertionResult::Success)
    }

    /// Check if the assertion failed
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Failure message, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            AssertionResult::Success => None,
            AssertionResult::Failure(msg) => Some(msg),
        }
    }

    /// Prefix a custom message onto a failure
    ///
    /// The default diagnostic is kept after the custom text, so expected and
    /// actual values are never lost. Has no effect on `Success`.
    pub fn with_message(self, msg: impl AsRef<str>) -> Self {
        match self {
            AssertionResult::Success => AssertionResult::Success,
            AssertionResult::Failure(default) => {
                AssertionResult::Failure(format!("{}: {}", msg.as_ref(), default))
            }
        }
    }

    /// Combine with another result; the first failure wins
    pub fn and(self, other: AssertionResult) -> Self {
        match self {
            AssertionResult::Success => other,
            failure => failure,
        }
    }

    /// Like [`and`](Self::and), but `f` only runs if `self` succeeded
    pub fn and_then(self, f: impl FnOnce() -> AssertionResult) -> Self {
        match self {
            AssertionResult::Success => f(),
            failure => failure,
        }
    }

    /// First failure of a sequence, or `Success` if there is none
    pub fn all(results: impl IntoIterator<Item = AssertionResult>) -> Self {
        results
            .into_iter()
            .find(AssertionResult::is_failure)
            .unwrap_or(AssertionResult::Success)
    }
}

impl fmt::Display for AssertionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssertionResult::Success => write!(f, "success"),
            AssertionResult::Failure(msg) => write!(f, "failure: {}", msg),
        }
    }
}

impl From<Result<(), String>> for AssertionResult {
    fn from(result: Result<(), String>) -> Self {
        match result {
            Ok(()) => AssertionResult::Success,
            Err(msg) => AssertionResult::Failure(msg),
        }
    }
}
