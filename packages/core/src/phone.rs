//! Jordanian phone number normalization.

use std::sync::LazyLock;

use regex::Regex;

/// Country prefix every phone number must carry.
pub const PHONE_PREFIX: &str = "+962";

/// Digits allowed after the prefix.
const NATIONAL_DIGITS: usize = 9;

const COUNTRY_CODE: &str = "962";

static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+962[0-9]{9}$").unwrap_or_else(|e| panic!("phone pattern: {e}"))
});

/// Whether `phone` is exactly `+962` followed by nine digits.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_PATTERN.is_match(phone)
}

/// Normalize raw phone input after every keystroke.
///
/// The result always starts with [`PHONE_PREFIX`], followed by at most nine
/// digits. Removing part of the prefix restores it, a leading trunk `0` is
/// dropped and a bare `962` country code is recognized.
pub fn normalize_phone(input: &str) -> String {
    let input = input.trim();
    let (national, had_prefix) = match strip_prefix_remnant(input) {
        Some(rest) => (rest, true),
        None => (input, false),
    };

    let mut digits: String = national.chars().filter(char::is_ascii_digit).collect();
    digits = digits.trim_start_matches('0').to_string();
    // A bare country code only counts when no prefix was typed
    if !had_prefix
        && digits.len() > NATIONAL_DIGITS
        && let Some(rest) = digits.strip_prefix(COUNTRY_CODE)
    {
        digits = rest.trim_start_matches('0').to_string();
    }
    digits.truncate(NATIONAL_DIGITS);

    format!("{PHONE_PREFIX}{digits}")
}

/// Remove the prefix, or whatever is left of it after an edit.
///
/// Returns `None` when the input carries no trace of the prefix.
fn strip_prefix_remnant(input: &str) -> Option<&str> {
    if let Some(rest) = input.strip_prefix(PHONE_PREFIX) {
        return Some(rest);
    }
    // Nothing but a truncated prefix, e.g. "+96" after a backspace.
    if PHONE_PREFIX.starts_with(input) {
        return Some("");
    }
    // Prefix with one character deleted, e.g. "+92791" or "962791".
    (0..PHONE_PREFIX.len()).find_map(|skip| {
        let damaged = format!("{}{}", &PHONE_PREFIX[..skip], &PHONE_PREFIX[skip + 1..]);
        input.strip_prefix(damaged.as_str())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_number_gains_prefix() {
        assert_eq!(normalize_phone("0791234567"), "+962791234567");
        assert_eq!(normalize_phone("791234567"), "+962791234567");
    }

    #[test]
    fn deleting_the_prefix_restores_it() {
        assert_eq!(normalize_phone(""), PHONE_PREFIX);
        assert_eq!(normalize_phone("+96"), PHONE_PREFIX);
        assert_eq!(normalize_phone("+"), PHONE_PREFIX);
        assert_eq!(normalize_phone("+96791"), "+962791");
        assert_eq!(normalize_phone("+92791"), "+962791");
        assert_eq!(normalize_phone("+62791"), "+962791");
        assert_eq!(normalize_phone("962791"), "+962791");
        assert_eq!(normalize_phone("791"), "+962791");
    }

    #[test]
    fn non_digits_are_stripped_and_length_capped() {
        assert_eq!(normalize_phone("+962 79-123 4567"), "+962791234567");
        assert_eq!(normalize_phone("+9627912345678"), "+962791234567");
        assert_eq!(normalize_phone("+962abc"), PHONE_PREFIX);
        assert_eq!(normalize_phone("+9629621234567"), "+962962123456");
        assert_eq!(normalize_phone("+962962"), "+962962");
        assert!(normalize_phone("+962791234567999").len() <= 13);
    }

    #[test]
    fn full_international_forms() {
        assert_eq!(normalize_phone("00962791234567"), "+962791234567");
        assert_eq!(normalize_phone("962791234567"), "+962791234567");
        assert_eq!(normalize_phone("+9620791234567"), "+962791234567");
    }

    #[test]
    fn validation_requires_exactly_nine_digits() {
        assert!(is_valid_phone("+962791234567"));
        assert!(!is_valid_phone("+96279123456"));
        assert!(!is_valid_phone("+9627912345678"));
        assert!(!is_valid_phone("0791234567"));
        assert!(!is_valid_phone("+962７91234567"));
    }
}
