//! Test context and the narrow reporting capability.

use std::fmt;

/// The single operation a harness logger needs from a test context.
///
/// `args` carries a format template together with its values; the
/// implementor renders it and records or reports the resulting line.
pub trait Reporter: Send + Sync {
    /// Render `args` and record the result as one line.
    fn logf(&self, args: fmt::Arguments<'_>);
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn logf(&self, args: fmt::Arguments<'_>) {
        (**self).logf(args);
    }
}

/// Per-test reporting context.
///
/// Lines go to standard output through `println!`, which the Rust test
/// harness captures per test and only shows when the test fails or when run
/// with `--nocapture`.
///
/// ```
/// use mocklog::harness::TestContext;
///
/// let t = TestContext::new("service_reports_empty_thing");
/// t.logf(format_args!("{} items", 3)); // "    service_reports_empty_thing: 3 items"
/// ```
#[derive(Debug, Clone)]
pub struct TestContext {
    name: String,
}

impl TestContext {
    /// Create a context for the test called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Name of the test this context belongs to.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render `args` and report it as one line of test output.
    pub fn logf(&self, args: fmt::Arguments<'_>) {
        println!("    {}: {}", self.name, args);
    }
}

impl Reporter for TestContext {
    fn logf(&self, args: fmt::Arguments<'_>) {
        TestContext::logf(self, args);
    }
}
