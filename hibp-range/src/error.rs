use std::num::ParseIntError;

/// Errors produced by a breach-count lookup.
///
/// Variants fall into three classes: rejected input ([`Error::is_rejection`]),
/// a range response that breaks the `SUFFIX:COUNT` contract
/// ([`Error::is_malformed_response`]) and transport failures
/// ([`Error::is_transport`]). All of them are recoverable by the caller.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no password was entered")]
    EmptyPassword,

    #[error("password contains a character outside the printable ASCII range at position {position}")]
    InvalidCharacters { position: usize },

    #[error("unexpected format of range response line: {line}")]
    MalformedLine { line: String },

    #[error("invalid occurrence count '{text}' in range response: {source}")]
    InvalidCount {
        text: String,
        #[source]
        source: ParseIntError,
    },

    #[error("HTTP request failed for prefix {prefix}: {source}")]
    HttpRequest {
        prefix: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} for prefix {prefix}")]
    HttpStatus { prefix: String, status: u16 },
}

impl Error {
    /// The password was refused before anything was hashed or sent.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::EmptyPassword | Self::InvalidCharacters { .. })
    }

    /// The range service answered, but the matched line could not be parsed.
    pub fn is_malformed_response(&self) -> bool {
        matches!(self, Self::MalformedLine { .. } | Self::InvalidCount { .. })
    }

    /// The range service could not be reached or answered with an error status.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::HttpRequest { .. } | Self::HttpStatus { .. })
    }
}
