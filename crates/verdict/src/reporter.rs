//! Test reporter - console output for suite results

use crate::runner::{Outcome, RunReport, TestSuiteResult};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write as FmtWrite};
use std::io::{self, IsTerminal, Write};

/// When to emit ANSI colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorMode {
    /// Color only when stdout is a terminal
    #[default]
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

impl ColorMode {
    /// Resolve against the current stdout
    pub fn enabled(self) -> bool {
        match self {
            ColorMode::Auto => io::stdout().is_terminal(),
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorMode::Auto => write!(f, "auto"),
            ColorMode::Always => write!(f, "always"),
            ColorMode::Never => write!(f, "never"),
        }
    }
}

/// ANSI escape codes, or empty strings for plain output
#[derive(Debug, Clone, Copy)]
struct Palette {
    reset: &'static str,
    bold: &'static str,
    green: &'static str,
    red: &'static str,
    dim: &'static str,
}

impl Palette {
    const ANSI: Palette = Palette {
        reset: "\x1b[0m",
        bold: "\x1b[1m",
        green: "\x1b[32m",
        red: "\x1b[31m",
        dim: "\x1b[2m",
    };

    const PLAIN: Palette = Palette {
        reset: "",
        bold: "",
        green: "",
        red: "",
        dim: "",
    };
}

const MESSAGE_INDENT: &str = "      ";

/// Renders run reports as human-readable text
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    palette: Palette,
}

impl Reporter {
    /// Create a reporter for the given color mode
    pub fn new(color: ColorMode) -> Self {
        let palette = if color.enabled() {
            Palette::ANSI
        } else {
            Palette::PLAIN
        };
        Self { palette }
    }

    /// Create a reporter without colors
    pub fn plain() -> Self {
        Self::new(ColorMode::Never)
    }

    /// Generate the report text
    pub fn generate(&self, report: &RunReport) -> String {
        let mut output = String::new();
        // Writing into a String cannot fail
        let _ = self.render(&mut output, report);
        output
    }

    /// Write the report to `writer`
    pub fn write_to<W: Write>(&self, writer: &mut W, report: &RunReport) -> io::Result<()> {
        writer.write_all(self.generate(report).as_bytes())?;
        writer.flush()
    }

    /// Print the report to stdout
    pub fn print(&self, report: &RunReport) -> io::Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.write_to(&mut handle, report)
    }

    fn render(&self, out: &mut impl FmtWrite, report: &RunReport) -> fmt::Result {
        for suite in &report.suites {
            self.render_suite(out, suite)?;
            writeln!(out)?;
        }
        self.render_summary(out, report)
    }

    fn render_suite(&self, out: &mut impl FmtWrite, suite: &TestSuiteResult) -> fmt::Result {
        let p = &self.palette;
        writeln!(out, "{}{}{}", p.bold, suite.name, p.reset)?;

        if suite.records.is_empty() {
            writeln!(out, "  {}(no tests){}", p.dim, p.reset)?;
            return Ok(());
        }

        for record in &suite.records {
            let (icon, color) = match record.outcome {
                Outcome::Passed => ("✓", p.green),
                Outcome::Failed(_) => ("✗", p.red),
                Outcome::Errored(_) => ("!", p.red),
            };
            writeln!(out, "  {}{} {}{}", color, icon, record.description, p.reset)?;

            if let Some(message) = record.outcome.message() {
                self.render_message(out, message)?;
            }
        }
        Ok(())
    }

    fn render_message(&self, out: &mut impl FmtWrite, message: &str) -> fmt::Result {
        let p = &self.palette;
        if message.is_empty() {
            return writeln!(out, "{}{}(no message){}", MESSAGE_INDENT, p.dim, p.reset);
        }
        for line in message.lines() {
            writeln!(out, "{}{}{}{}", MESSAGE_INDENT, p.dim, line, p.reset)?;
        }
        Ok(())
    }

    fn render_summary(&self, out: &mut impl FmtWrite, report: &RunReport) -> fmt::Result {
        let p = &self.palette;
        let summary = report.summary();
        let (banner, color) = if summary.all_passed() {
            ("PASSED", p.green)
        } else {
            ("FAILED", p.red)
        };

        writeln!(out, "{}{}{}", p.dim, "─".repeat(40), p.reset)?;
        writeln!(
            out,
            "Total: {}  {}Passed: {}{}  {}Failed: {}{}",
            summary.total,
            p.green,
            summary.passed,
            p.reset,
            if summary.failed > 0 { p.red } else { "" },
            summary.failed,
            p.reset
        )?;
        writeln!(out, "{}{}{}{}", p.bold, color, banner, p.reset)
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(ColorMode::default())
    }
}
