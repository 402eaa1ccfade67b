//! Breached password checker using the Have I Been Pwned range API.
//!
//! Passwords are checked with a k-anonymity lookup: the password is hashed with
//! SHA1, only the first 5 hex characters of the hash are sent to the range API,
//! and the returned candidate suffixes are matched locally against the other 35
//! characters. Neither the password nor the full hash ever leave the process.
//!
//! # Pipeline
//!
//! 1. [`validate`] rejects empty input and bytes outside `!`..=`~`.
//! 2. [`PasswordHash`] computes the uppercase hex digest and splits it.
//! 3. [`RangeFetcher`] issues `GET {base_url}/{prefix}`.
//! 4. [`occurrences`] scans the `SUFFIX:COUNT` lines for the suffix.
//!
//! [`BreachChecker::check`] runs all four steps.
//!
//! # Example
//!
//! ```rust,no_run
//! use hibp_range::{BreachChecker, DEFAULT_RANGE_URL};
//!
//! # async fn run() -> Result<(), hibp_range::Error> {
//! let checker = BreachChecker::new(reqwest::Client::new(), DEFAULT_RANGE_URL);
//! let lookup = checker.check(b"password123").await?;
//! println!("{} appears {} times", lookup.hash, lookup.occurrences);
//! # Ok(())
//! # }
//! ```

pub mod checker;
pub mod error;
pub mod fetch;
pub mod hash;
pub mod matcher;
pub mod validation;

pub use checker::{BreachChecker, Lookup};
pub use error::Error;
pub use fetch::{DEFAULT_RANGE_URL, HIBP_RANGE_URL_ENV, RangeFetcher, RangeResponse};
pub use hash::{HASH_HEX_LEN, PREFIX_LEN, PasswordHash, SUFFIX_LEN, hash_password};
pub use matcher::occurrences;
pub use validation::{contains_invalid_characters, validate};
