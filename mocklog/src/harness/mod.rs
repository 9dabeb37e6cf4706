//! Loggers that report into a test's output instead of the console.
//!
//! There are two flavours:
//!
//! - [`HarnessLogger`] is bound to the concrete [`TestContext`]. It works,
//!   but nothing can stand in for the context, so the logger itself cannot
//!   be verified by a test.
//! - [`MockableHarnessLogger`] depends only on the [`Reporter`] capability,
//!   the one operation it actually uses. A real `TestContext` satisfies it,
//!   and so does the [`Recorder`] double, which lets a test assert on the
//!   exact lines the logger produced.
//!
//! ```
//! use mocklog::harness::{MockableHarnessLogger, Recorder};
//! use mocklog::log::Logger;
//!
//! let recorder = Recorder::new();
//! let logger = MockableHarnessLogger::new(&recorder);
//! logger.debug("message");
//!
//! assert_eq!(recorder.messages(), vec!["[DEBUG(test)] message"]);
//! ```

mod context;
mod logger;
mod recorder;

pub use context::{Reporter, TestContext};
pub use logger::{HarnessLogger, MockableHarnessLogger};
pub use recorder::Recorder;
