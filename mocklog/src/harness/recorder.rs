//! Recording test double for [`Reporter`].

use crate::harness::Reporter;
use parking_lot::Mutex;
use std::fmt;

/// A [`Reporter`] that keeps every rendered line in call order.
///
/// Meant to be created per test and inspected with [`Recorder::messages`].
#[derive(Debug, Default)]
pub struct Recorder {
    messages: Mutex<Vec<String>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.messages.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.lock().is_empty()
    }
}

impl Reporter for Recorder {
    fn logf(&self, args: fmt::Arguments<'_>) {
        let rendered = fmt::format(args);
        self.messages.lock().push(rendered);
    }
}
