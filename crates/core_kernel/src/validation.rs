//! Pure validation predicates
//!
//! Stateless boolean checks backing the entity setters. Regex-based checks
//! compile their pattern once into a process-wide static. Optional values
//! are handled at the type level by callers; these predicates only see
//! concrete strings.

use once_cell::sync::Lazy;
use regex::Regex;

/// Exactly five ASCII digits (French postal code)
static POSTAL_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{5}$").expect("postal code pattern"));

/// local-part@domain.tld with a restricted character set and a top-level
/// label of at least two letters
static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("email pattern")
});

/// French mobile or landline: optional +33/0033 prefix or a leading 0, a
/// digit 1-9, then four pairs of digits separated by spaces, dots, or
/// hyphens (or nothing)
static PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(?:\+|00)33|0)\s*[1-9](?:[\s.-]*[0-9]{2}){4}$").expect("phone pattern")
});

/// Returns true when the string contains only whitespace (or nothing).
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Returns true for exactly five ASCII digits.
pub fn is_valid_postal_code(value: &str) -> bool {
    POSTAL_CODE.is_match(value)
}

/// Returns true for a well-formed email address.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

/// Returns true for a well-formed French phone number.
pub fn is_valid_phone(value: &str) -> bool {
    PHONE.is_match(value)
}
