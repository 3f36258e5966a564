//! Test runner - sequential execution with per-test isolation

use crate::assertion::AssertionResult;
use crate::error::{AbnormalTermination, Result, VerdictError};
use crate::isolation::{catch, catch_async};
use crate::suite::{Test, TestAction, TestSuite};
use serde::{Deserialize, Serialize};
use std::fmt;
use tokio::runtime::{Builder, Handle, Runtime};

/// Result of executing one test
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Action returned `Success`
    Passed,
    /// Action returned `Failure`
    Failed(String),
    /// Action terminated abnormally before producing a result
    Errored(String),
}

impl Outcome {
    /// Check if the test passed
    pub fn is_passed(&self) -> bool {
        matches!(self, Outcome::Passed)
    }

    /// Diagnostic message for failed and errored tests
    pub fn message(&self) -> Option<&str> {
        match self {
            Outcome::Passed => None,
            Outcome::Failed(msg) | Outcome::Errored(msg) => Some(msg),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Passed => write!(f, "PASSED"),
            Outcome::Failed(_) => write!(f, "FAILED"),
            Outcome::Errored(_) => write!(f, "ERROR"),
        }
    }
}

impl From<std::result::Result<AssertionResult, AbnormalTermination>> for Outcome {
    fn from(result: std::result::Result<AssertionResult, AbnormalTermination>) -> Self {
        match result {
            Ok(AssertionResult::Success) => Outcome::Passed,
            Ok(AssertionResult::Failure(msg)) => Outcome::Failed(msg),
            Err(termination) => Outcome::Errored(termination.to_string()),
        }
    }
}

/// Outcome of one test, labelled with its description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestRecord {
    /// Test description
    pub description: String,
    /// Execution outcome
    pub outcome: Outcome,
}

/// Results of one suite, in declaration order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestSuiteResult {
    /// Suite name
    pub name: String,
    /// One record per test
    pub records: Vec<TestRecord>,
}

impl TestSuiteResult {
    /// Summary counts for this suite
    pub fn summary(&self) -> RunSummary {
        RunSummary::from_outcomes(self.records.iter().map(|r| &r.outcome))
    }

    /// Failed and errored records
    pub fn failures(&self) -> impl Iterator<Item = &TestRecord> {
        self.records.iter().filter(|r| !r.outcome.is_passed())
    }
}

/// Aggregate pass/fail counts
///
/// `Errored` counts as failed, so `failed == total - passed` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Total tests
    pub total: usize,
    /// Passed tests
    pub passed: usize,
    /// Failed or errored tests
    pub failed: usize,
}

impl RunSummary {
    /// Fold a sequence of outcomes into counts
    pub fn from_outcomes<'a>(outcomes: impl IntoIterator<Item = &'a Outcome>) -> Self {
        outcomes
            .into_iter()
            .fold(RunSummary::default(), |summary, outcome| {
                let passed = usize::from(outcome.is_passed());
                RunSummary {
                    total: summary.total + 1,
                    passed: summary.passed + passed,
                    failed: summary.failed + (1 - passed),
                }
            })
    }

    /// Check if all tests passed (vacuously true when there are none)
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Get pass rate (0.0 - 1.0)
    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        self.passed as f64 / self.total as f64
    }
}

/// Results of a whole run, one entry per suite in the order given
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    /// Suite results
    pub suites: Vec<TestSuiteResult>,
}

impl RunReport {
    /// Run-wide summary over every outcome of every suite
    pub fn summary(&self) -> RunSummary {
        RunSummary::from_outcomes(
            self.suites
                .iter()
                .flat_map(|s| s.records.iter().map(|r| &r.outcome)),
        )
    }

    /// Failed and errored records, with their suite name
    pub fn failures(&self) -> impl Iterator<Item = (&str, &TestRecord)> {
        self.suites
            .iter()
            .flat_map(|s| s.failures().map(move |r| (s.name.as_str(), r)))
    }
}

/// Test runner
///
/// Runs tests strictly one at a time, in declaration order. Async actions
/// are driven on a current-thread runtime owned by the runner, so the
/// runner must be used from synchronous code (not from inside another
/// tokio runtime).
#[derive(Debug)]
pub struct TestRunner {
    runtime: Runtime,
}

impl TestRunner {
    /// Create a new test runner
    ///
    /// Fails with [`VerdictError::NestedRuntime`] when called from inside a
    /// tokio runtime, where the owned runtime could neither block nor be dropped.
    pub fn new() -> Result<Self> {
        if Handle::try_current().is_ok() {
            return Err(VerdictError::NestedRuntime);
        }
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(VerdictError::Runtime)?;
        Ok(Self { runtime })
    }

    /// Run a single test; never panics on the test's behalf
    pub fn run_test(&self, test: &Test) -> Outcome {
        let result = match test.action() {
            TestAction::Sync(action) => catch(|| action()).and_then(|r| r),
            TestAction::Async(action) => {
                let fut = catch(|| action());
                match fut {
                    Ok(fut) => self.runtime.block_on(catch_async(fut)).and_then(|r| r),
                    Err(termination) => Err(termination),
                }
            }
        };
        Outcome::from(result)
    }

    /// Run every test of a suite
    pub fn run_suite(&self, suite: &TestSuite) -> TestSuiteResult {
        let span = tracing::info_span!("suite", suite = %suite.name());
        let _enter = span.enter();
        tracing::debug!(tests = suite.len(), "running suite");

        let records = suite
            .tests()
            .iter()
            .map(|test| {
                tracing::debug!(test = test.description(), "running test");
                let outcome = self.run_test(test);
                match &outcome {
                    Outcome::Passed => tracing::debug!(test = test.description(), "passed"),
                    Outcome::Failed(msg) => {
                        tracing::info!(test = test.description(), message = %msg, "failed")
                    }
                    Outcome::Errored(msg) => {
                        tracing::warn!(test = test.description(), message = %msg, "errored")
                    }
                }
                TestRecord {
                    description: test.description().to_string(),
                    outcome,
                }
            })
            .collect();

        TestSuiteResult {
            name: suite.name().to_string(),
            records,
        }
    }

    /// Run suites in the order given
    pub fn run_suites(&self, suites: &[TestSuite]) -> RunReport {
        let report = RunReport {
            suites: suites.iter().map(|suite| self.run_suite(suite)).collect(),
        };
        let summary = report.summary();
        tracing::info!(
            suites = report.suites.len(),
            total = summary.total,
            passed = summary.passed,
            failed = summary.failed,
            "run finished"
        );
        report
    }
}
