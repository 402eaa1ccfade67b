use crate::error::Error;

/// Lowest accepted byte, `!`.
pub const LOWEST_ACCEPTED: u8 = 33;

/// Highest accepted byte, `~`.
pub const HIGHEST_ACCEPTED: u8 = 126;

/// Returns true if any byte falls outside the printable, non-space ASCII range.
///
/// Space, control characters and anything at or above 127 (which covers every
/// byte of a multi-byte UTF-8 sequence) are rejected. An empty slice is not
/// considered invalid here; see [`validate`] for the empty case.
#[inline]
pub fn contains_invalid_characters(password: &[u8]) -> bool {
    first_invalid(password).is_some()
}

#[inline]
fn first_invalid(password: &[u8]) -> Option<usize> {
    password.iter().position(|b| !(LOWEST_ACCEPTED..=HIGHEST_ACCEPTED).contains(b))
}

/// Validates a password before it is hashed.
///
/// Empty input is reported separately from a bad alphabet so callers can treat
/// "nothing entered" differently from "unsupported character".
pub fn validate(password: &[u8]) -> Result<(), Error> {
    if password.is_empty() {
        return Err(Error::EmptyPassword);
    }
    match first_invalid(password) {
        Some(position) => Err(Error::InvalidCharacters { position }),
        None => Ok(()),
    }
}
