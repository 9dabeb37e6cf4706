//! Harness-backed `Logger` implementations.

use crate::harness::{Reporter, TestContext};
use crate::log::{LogLevel, Logger};

/// Logger bound directly to a [`TestContext`].
///
/// Lines are reported as `[LEVEL(test)] message`. Because the dependency is
/// the concrete context type there is no way to substitute a double, so
/// what this logger reports can only be checked by eye. Prefer
/// [`MockableHarnessLogger`].
#[derive(Debug, Clone, Copy)]
pub struct HarnessLogger<'t> {
    t: &'t TestContext,
}

impl<'t> HarnessLogger<'t> {
    pub fn new(t: &'t TestContext) -> Self {
        Self { t }
    }
}

impl Logger for HarnessLogger<'_> {
    fn log(&self, level: LogLevel, message: &str) {
        self.t.logf(format_args!("[{}(test)] {}", level.tag(), message));
    }
}

/// Logger that reports through any [`Reporter`].
///
/// Formats exactly like [`HarnessLogger`], but accepts a real
/// [`TestContext`] or a [`crate::harness::Recorder`] alike.
#[derive(Debug)]
pub struct MockableHarnessLogger<'t, R: ?Sized> {
    t: &'t R,
}

impl<'t, R: Reporter + ?Sized> MockableHarnessLogger<'t, R> {
    pub fn new(t: &'t R) -> Self {
        Self { t }
    }
}

impl<R: Reporter + ?Sized> Logger for MockableHarnessLogger<'_, R> {
    fn log(&self, level: LogLevel, message: &str) {
        self.t.logf(format_args!("[{}(test)] {}", level.tag(), message));
    }
}
