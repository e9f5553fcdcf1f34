//! Helpers for generating unique fixture names.

use ulid::Ulid;

/// Generate a unique string with the given prefix, in the format `{prefix}-{ulid}`.
///
/// ```
/// use engine_test_support::unique_helpers::unique_str;
///
/// let a = unique_str("cup");
/// let b = unique_str("cup");
/// assert_ne!(a, b);
/// assert!(a.starts_with("cup-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Unique competition name for fixtures.
pub fn unique_competition_name(prefix: &str) -> String {
    unique_str(&format!("{prefix}-competition"))
}
