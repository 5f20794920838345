//! Answer scrubbing and validation for the intake steps.
//!
//! The accepted character sets are part of the contract: a name keeps ASCII
//! letters, whitespace, apostrophes and hyphens; a contact number keeps ASCII
//! digits, `+`, `-` and whitespace. Everything else is dropped silently.

/// Minimum length of a scrubbed contact number, in characters.
pub const MIN_CONTACT_LEN: usize = 6;

/// Strips surrounding whitespace and byte order marks.
///
/// Text pasted into the widget can carry a stray U+FEFF, which
/// `str::trim` keeps because it is not whitespace.
#[must_use]
pub fn trim_input(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c.is_whitespace() || c == '\'' || c == '-'
}

fn is_contact_char(c: char) -> bool {
    c.is_ascii_digit() || c.is_whitespace() || c == '+' || c == '-'
}

fn scrub(text: &str, keep: impl Fn(char) -> bool) -> String {
    let kept: String = text.chars().filter(|c| keep(*c)).collect();
    kept.trim().to_string()
}

/// Scrubs a name answer. Returns `None` when nothing usable is left.
#[must_use]
pub fn clean_name(text: &str) -> Option<String> {
    let name = scrub(text, is_name_char);
    (!name.is_empty()).then_some(name)
}

/// Scrubs a contact number. Returns `None` when fewer than
/// [`MIN_CONTACT_LEN`] characters survive.
#[must_use]
pub fn clean_contact(text: &str) -> Option<String> {
    let contact = scrub(text, is_contact_char);
    (contact.chars().count() >= MIN_CONTACT_LEN).then_some(contact)
}

fn is_address_char(c: char) -> bool {
    !c.is_whitespace() && c != '@'
}

/// Checks for a `localpart@domain.tld` shape.
///
/// Exactly one `@`, no whitespace, a non-empty local part, and a domain with
/// at least one `.` that has characters on both sides.
#[must_use]
pub fn is_valid_email(text: &str) -> bool {
    let Some((local, domain)) = text.split_once('@') else {
        return false;
    };
    if local.is_empty() || !local.chars().all(is_address_char) {
        return false;
    }
    if !domain.chars().all(is_address_char) {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
