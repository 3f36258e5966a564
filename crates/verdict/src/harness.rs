//! Entry point: run suites, print the report, resolve the exit status
//!
//! ```no_run
//! use std::process::ExitCode;
//! use verdict::assertions::assert_equal;
//! use verdict::{harness, RunConfig, TestSuite};
//!
//! fn main() -> Result<ExitCode, verdict::VerdictError> {
//!     let math = TestSuite::empty("Math").add_test("2+2=4", || assert_equal(4, 2 + 2));
//!     harness::run_main(&[math], &RunConfig::default())
//! }
//! ```

use crate::config::RunConfig;
use crate::error::{Result, VerdictError};
use crate::isolation::PanicHookGuard;
use crate::reporter::Reporter;
use crate::runner::{RunReport, TestRunner};
use crate::suite::TestSuite;
use std::io::{self, Write};
use std::process::ExitCode;

/// Run suites in order and write the report to `writer`
pub fn run_with_writer<W: Write>(
    suites: &[TestSuite],
    config: &RunConfig,
    writer: &mut W,
) -> Result<RunReport> {
    let runner = TestRunner::new()?;

    let report = {
        let _guard = config.silence_panics.then(PanicHookGuard::install);
        runner.run_suites(suites)
    };

    Reporter::new(config.color)
        .write_to(writer, &report)
        .map_err(VerdictError::Output)?;
    Ok(report)
}

/// Run suites in order and print the report to stdout
pub fn run(suites: &[TestSuite], config: &RunConfig) -> Result<RunReport> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    run_with_writer(suites, config, &mut handle)
}

/// Run suites, print the report and return the process exit code for `config.mode`
pub fn run_main(suites: &[TestSuite], config: &RunConfig) -> Result<ExitCode> {
    let report = run(suites, config)?;
    let summary = report.summary();
    let status = config.mode.exit_status(&summary);
    tracing::debug!(mode = %config.mode, status, "resolved exit status");
    Ok(ExitCode::from(status))
}
