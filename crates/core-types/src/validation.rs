use once_cell::sync::Lazy;
use regex::Regex;

static ALPHA2_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{2}$").expect("alpha-2 pattern must compile"));

/// Returns `true` iff `code` is exactly two uppercase ASCII letters.
pub fn validate_code(code: &str) -> bool {
    ALPHA2_PATTERN.is_match(code)
}
