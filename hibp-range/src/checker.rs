use crate::error::Error;
use crate::fetch::RangeFetcher;
use crate::hash::PasswordHash;
use crate::validation::validate;

/// Outcome of a successful breach check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lookup {
    pub hash: PasswordHash,
    /// Times the full hash appears in the breach corpus. 0 means not found.
    pub occurrences: u64,
}

impl Lookup {
    #[inline]
    pub fn is_breached(&self) -> bool {
        self.occurrences > 0
    }
}

/// Checks if a password has been found in known data breaches.
///
/// Only the 5 character hash prefix is sent to the range API. The checker
/// holds no per-check state and can be cloned freely into concurrent tasks.
#[derive(Clone, Debug)]
pub struct BreachChecker {
    fetcher: RangeFetcher,
}

impl BreachChecker {
    /// Creates a checker querying `base_url` through `client`.
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self::from_fetcher(RangeFetcher::new(client, base_url))
    }

    pub fn from_fetcher(fetcher: RangeFetcher) -> Self {
        Self { fetcher }
    }

    /// Validates, hashes and looks up a password.
    ///
    /// Returns the occurrence count together with the computed hash, or an
    /// error that is either a rejection of the input, a malformed range
    /// response, or a transport failure. Nothing is retried.
    pub async fn check(&self, password: &[u8]) -> Result<Lookup, Error> {
        validate(password)?;
        let hash = PasswordHash::new(password);
        self.lookup(&hash).await
    }

    /// Looks up an already computed hash, skipping input validation.
    pub async fn lookup(&self, hash: &PasswordHash) -> Result<Lookup, Error> {
        let occurrences = self.fetcher.occurrences(hash.prefix(), hash.suffix()).await?;
        Ok(Lookup { hash: *hash, occurrences })
    }
}
