//! Error types for verdict
//!
//! Two layers: [`AbnormalTermination`] describes a test action that did not
//! run to completion and is always caught and recorded by the runner.
//! [`VerdictError`] is an infrastructure failure of the harness itself and is
//! the only error that reaches the caller.

use std::any::Any;
use std::io;
use thiserror::Error;

/// Result type alias for harness operations
pub type Result<T> = std::result::Result<T, VerdictError>;

/// A test action (or an action under `assert_throws`) that failed to complete
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AbnormalTermination {
    /// The action panicked
    #[error("panicked: {0}")]
    Panicked(String),

    /// The action returned an error
    #[error("error: {0}")]
    Error(String),
}

impl AbnormalTermination {
    /// Build from a caught panic payload
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let msg = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic payload".to_string()
        };
        AbnormalTermination::Panicked(msg)
    }

    /// Build from any error value, keeping its cause chain
    pub fn from_error<E>(err: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        AbnormalTermination::Error(format!("{:#}", err.into()))
    }

    /// Returns true if the action panicked
    pub fn is_panic(&self) -> bool {
        matches!(self, AbnormalTermination::Panicked(_))
    }
}

/// Failure of the harness infrastructure
#[derive(Error, Debug)]
pub enum VerdictError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] io::Error),

    #[error("failed to write report: {0}")]
    Output(#[source] io::Error),

    #[error("test runner cannot be started from inside an async runtime")]
    NestedRuntime,
}
