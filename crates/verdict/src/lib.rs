//! verdict: minimal unit-testing framework
//!
//! Provides:
//! - Named tests grouped into ordered suites (sync or async actions)
//! - Assertion predicates that return values instead of panicking
//! - Sequential execution where a panicking or erroring test never stops the run
//! - Colorized console report with a run-wide summary
//! - Exit status resolution (exit-code or always-success mode)
//!
//! # Example
//!
//! ```
//! use verdict::assertions::{assert_equal, assert_in_range};
//! use verdict::{Outcome, TestRunner, TestSuite};
//!
//! let suite = TestSuite::empty("Math")
//!     .add_test("2+2=4", || assert_equal(4, 2 + 2))
//!     .add_test("in range", || assert_in_range(10, 1, 10))
//!     .add_test("crashes", || -> verdict::AssertionResult { panic!("boom") });
//!
//! let result = TestRunner::new().unwrap().run_suite(&suite);
//! assert_eq!(result.summary().passed, 2);
//! assert_eq!(result.records[2].outcome, Outcome::Errored("panicked: boom".into()));
//! ```

pub mod assertion;
pub mod assertions;
pub mod config;
pub mod error;
pub mod exit;
pub mod harness;
pub mod isolation;
pub mod reporter;
pub mod runner;
pub mod suite;

// Re-export main types
pub use assertion::AssertionResult;
pub use config::RunConfig;
pub use error::{AbnormalTermination, Result, VerdictError};
pub use exit::RunMode;
pub use reporter::{ColorMode, Reporter};
pub use runner::{Outcome, RunReport, RunSummary, TestRecord, TestRunner, TestSuiteResult};
pub use suite::{IntoAssertion, Test, TestAction, TestSuite};
