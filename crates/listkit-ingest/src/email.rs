//! Email address syntax check.

use std::sync::LazyLock;

use regex::Regex;

/// `local@domain.tld` shape: no whitespace, exactly one `@`, a dot after it.
/// Deliberately loose; quoted local parts and comments are not supported.
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex"));

/// Returns true if `value` looks like an email address.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}
