//! Run configuration

use crate::exit::RunMode;
use crate::reporter::ColorMode;

/// Harness configuration
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// How results map to the exit status
    pub mode: RunMode,
    /// Report coloring
    pub color: ColorMode,
    /// Route caught panic messages to tracing instead of stderr
    ///
    /// The panic hook is process-wide: while a run is in progress, panics on
    /// other threads are also logged at `debug` instead of printed.
    pub silence_panics: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            mode: RunMode::ExitCode,
            color: ColorMode::Auto,
            silence_panics: true,
        }
    }
}

impl RunConfig {
    /// Config for interactive use: exit status is always `0`
    pub fn interactive() -> Self {
        Self::default().with_mode(RunMode::AlwaysSuccess)
    }

    /// Set run mode
    pub fn with_mode(mut self, mode: RunMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set color mode
    pub fn with_color(mut self, color: ColorMode) -> Self {
        self.color = color;
        self
    }

    /// Keep the process panic hook untouched
    pub fn keep_panic_output(mut self) -> Self {
        self.silence_panics = false;
        self
    }
}
