//! Scriptable console for scoring a single volleyball match.

pub mod fixture;
pub mod output;
pub mod script;
pub mod session;
pub mod telemetry;

pub use fixture::{FixtureError, MatchFixture, PreparedMatch};
pub use output::{OutputFormat, OutputWriter};
pub use script::{parse_line, Command, ScriptError};
pub use session::{ConsoleError, Outcome, RunSummary, Session};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_support::logging::init();
}
