use std::fmt;

use sha1::{Digest, Sha1};

/// Length of the raw SHA1 digest in bytes.
pub const HASH_LEN: usize = 20;

/// Length of the hex rendered digest.
pub const HASH_HEX_LEN: usize = HASH_LEN * 2;

/// The length of the hash prefix sent to the range API (5 hex characters).
pub const PREFIX_LEN: usize = 5;

/// The length of the hash suffix that is only ever matched locally.
pub const SUFFIX_LEN: usize = HASH_HEX_LEN - PREFIX_LEN;

/// Hex lookup table for digest rendering.
pub const HEX_CHARS: &[u8; 16] = b"0123456789ABCDEF";

/// SHA1 digest of a password, rendered as 40 uppercase hex characters.
///
/// The first [`PREFIX_LEN`] characters form the prefix that goes over the
/// wire, the remaining [`SUFFIX_LEN`] form the suffix that never leaves the
/// process. `prefix() + suffix() == as_str()` for every hash.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PasswordHash {
    raw: [u8; HASH_LEN],
    hex: [u8; HASH_HEX_LEN],
}

impl PasswordHash {
    pub fn new(password: &[u8]) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(password);
        let raw: [u8; HASH_LEN] = hasher.finalize().into();

        let mut hex = [0u8; HASH_HEX_LEN];
        for (i, byte) in raw.iter().enumerate() {
            hex[i * 2] = HEX_CHARS[(byte >> 4) as usize];
            hex[i * 2 + 1] = HEX_CHARS[(byte & 0x0f) as usize];
        }

        Self { raw, hex }
    }

    /// The full uppercase hex digest.
    #[inline]
    pub fn as_str(&self) -> &str {
        // SAFETY: hex only ever holds bytes taken from HEX_CHARS, which is ASCII.
        unsafe { std::str::from_utf8_unchecked(&self.hex) }
    }

    /// First 5 hex characters, the only password-derived data sent to the range API.
    #[inline]
    pub fn prefix(&self) -> &str {
        &self.as_str()[..PREFIX_LEN]
    }

    /// Remaining 35 hex characters, matched against the range response locally.
    #[inline]
    pub fn suffix(&self) -> &str {
        &self.as_str()[PREFIX_LEN..]
    }

    #[inline]
    pub fn bytes(&self) -> &[u8; HASH_LEN] {
        &self.raw
    }
}

impl fmt::Display for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PasswordHash").field(&self.as_str()).finish()
    }
}

/// Hashes a password into its uppercase hex SHA1 digest.
pub fn hash_password(password: &[u8]) -> PasswordHash {
    PasswordHash::new(password)
}
