//! Exit status resolution

use crate::runner::RunSummary;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::process::ExitCode;

/// Exit status when every test passed
pub const EXIT_SUCCESS: u8 = 0;

/// Exit status when at least one test failed or errored
pub const EXIT_FAILURE: u8 = 1;

/// How the aggregate result maps to a process exit status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RunMode {
    /// `0` iff nothing failed, `1` otherwise
    #[default]
    ExitCode,
    /// Always `0`; the report still shows real results
    AlwaysSuccess,
}

impl RunMode {
    /// Exit status for a run summary
    pub fn exit_status(self, summary: &RunSummary) -> u8 {
        match self {
            RunMode::ExitCode if !summary.all_passed() => EXIT_FAILURE,
            RunMode::ExitCode | RunMode::AlwaysSuccess => EXIT_SUCCESS,
        }
    }

    /// Process exit code for a run summary
    pub fn exit_code(self, summary: &RunSummary) -> ExitCode {
        ExitCode::from(self.exit_status(summary))
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunMode::ExitCode => write!(f, "exit-code"),
            RunMode::AlwaysSuccess => write!(f, "always-success"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(total: usize, passed: usize) -> RunSummary {
        RunSummary {
            total,
            passed,
            failed: total - passed,
        }
    }

    #[test]
    fn test_exit_code_mode() {
        assert_eq!(RunMode::ExitCode.exit_status(&summary(3, 3)), 0);
        assert_eq!(RunMode::ExitCode.exit_status(&summary(3, 2)), 1);
        assert_eq!(RunMode::ExitCode.exit_status(&summary(0, 0)), 0);
    }

    #[test]
    fn test_always_success_mode() {
        assert_eq!(RunMode::AlwaysSuccess.exit_status(&summary(3, 3)), 0);
        assert_eq!(RunMode::AlwaysSuccess.exit_status(&summary(3, 0)), 0);
        assert_eq!(
            RunMode::AlwaysSuccess.exit_code(&summary(3, 0)),
            ExitCode::from(EXIT_SUCCESS)
        );
        assert_eq!(
            RunMode::ExitCode.exit_code(&summary(3, 0)),
            ExitCode::from(EXIT_FAILURE)
        );
    }

    #[test]
    fn test_run_mode_display() {
        assert_eq!(RunMode::ExitCode.to_string(), "exit-code");
        assert_eq!(RunMode::AlwaysSuccess.to_string(), "always-success");
    }
}
