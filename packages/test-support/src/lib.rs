//! Test support for the scoring workspace: unique names, match fixtures and
//! shared test logging.

pub mod fixtures;
pub mod logging;

use ulid::Ulid;

/// Generate a unique string in the format `{prefix}-{ulid}`.
///
/// ```
/// use test_support::unique_str;
///
/// let a = unique_str("team");
/// assert_ne!(a, unique_str("team"));
/// assert!(a.starts_with("team-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}
