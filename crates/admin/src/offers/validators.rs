//! Advisory per-keystroke field validators.
//!
//! Pure functions: `None` means the field is acceptable, `Some(message)`
//! is the inline error to show next to it. Empty input always validates
//! clean - required-ness is enforced at submission time, not here, so an
//! admin can clear a field mid-edit without a flash of "required".

use rust_decimal::Decimal;

use super::normalize::parse_decimal;

/// Shortest accepted display name, in characters.
pub const NAME_MIN_CHARS: usize = 2;
/// Longest accepted display name, in characters.
pub const NAME_MAX_CHARS: usize = 40;
/// Fewest digits in a valid mobile number.
pub const MOBILE_MIN_DIGITS: usize = 8;
/// Most digits in a valid mobile number.
pub const MOBILE_MAX_DIGITS: usize = 15;

/// Punctuation accepted inside display names, either script.
const NAME_PUNCTUATION: &str = "-_.,()&'";

/// Validate an Arabic display name.
#[must_use]
pub fn validate_name_ar(value: &str) -> Option<&'static str> {
    validate_name(
        value,
        is_arabic_letter,
        "name may only contain Arabic letters, digits and basic punctuation",
    )
}

/// Validate an English display name.
#[must_use]
pub fn validate_name_en(value: &str) -> Option<&'static str> {
    validate_name(
        value,
        |c| c.is_ascii_alphabetic(),
        "name may only contain English letters, digits and basic punctuation",
    )
}

fn validate_name(
    value: &str,
    is_script_letter: fn(char) -> bool,
    charset_message: &'static str,
) -> Option<&'static str> {
    if value.is_empty() {
        return None;
    }
    if value.starts_with(' ') || value.ends_with(' ') {
        return Some("name must not start or end with a space");
    }
    if value.contains("  ") {
        return Some("name must not contain consecutive spaces");
    }

    let chars = value.chars().count();
    if chars < NAME_MIN_CHARS {
        return Some("name is too short");
    }
    if chars > NAME_MAX_CHARS {
        return Some("name is too long");
    }

    let allowed = |c: char| {
        c == ' '
            || c.is_ascii_digit()
            || is_arabic_digit(c)
            || is_script_letter(c)
            || NAME_PUNCTUATION.contains(c)
    };
    if value.chars().all(allowed) {
        None
    } else {
        Some(charset_message)
    }
}

/// Validate a mobile number: optional leading `+`, digits only.
#[must_use]
pub fn validate_mobile(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        return None;
    }

    let digits = value.strip_prefix('+').unwrap_or(value);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Some("mobile number may only contain digits");
    }
    if digits.len() < MOBILE_MIN_DIGITS {
        return Some("mobile number is too short");
    }
    if digits.len() > MOBILE_MAX_DIGITS {
        return Some("mobile number is too long");
    }
    None
}

/// Validate a price field: numeric and positive.
///
/// No upper bound here - the discount normalizer enforces the
/// product-price bound because it knows the reference-price context this
/// validator does not.
#[must_use]
pub fn validate_price(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        return None;
    }
    match parse_decimal(value) {
        None => Some("must be a number"),
        Some(v) if v <= Decimal::ZERO => Some("must be greater than zero"),
        Some(_) => None,
    }
}

/// Validate a percentage field: numeric and within [1, 100].
#[must_use]
pub fn validate_percentage(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        return None;
    }
    match parse_decimal(value) {
        None => Some("must be a number"),
        Some(v) if v < Decimal::ONE || v > Decimal::ONE_HUNDRED => {
            Some("must be between 1 and 100")
        }
        Some(_) => None,
    }
}

/// Arabic-script letters, including the presentation-form blocks that
/// keyboards produce.
fn is_arabic_letter(c: char) -> bool {
    matches!(c,
        '\u{0621}'..='\u{064A}'
        | '\u{0660}'..='\u{066F}'
        | '\u{0671}'..='\u{06D3}'
        | '\u{FB50}'..='\u{FDFF}'
        | '\u{FE70}'..='\u{FEFF}'
    )
}

/// Arabic-Indic digits.
const fn is_arabic_digit(c: char) -> bool {
    matches!(c, '\u{0660}'..='\u{0669}')
}
