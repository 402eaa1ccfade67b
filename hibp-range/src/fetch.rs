use crate::error::Error;
use crate::matcher;

/// Public Have I Been Pwned range endpoint.
pub const DEFAULT_RANGE_URL: &str = "https://api.pwnedpasswords.com/range";

/// Environment variable name for overriding the range endpoint.
pub const HIBP_RANGE_URL_ENV: &str = "HIBP_RANGE_URL";

/// Line separator used by the range API.
pub const LINE_SEPARATOR: &str = "\r\n";

/// Queries `{base_url}/{prefix}` for the candidate suffixes sharing a prefix.
///
/// Cloning is cheap and clones share the underlying connection pool, so one
/// fetcher can serve any number of concurrent lookups.
#[derive(Clone, Debug)]
pub struct RangeFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl RangeFetcher {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn range_url(&self, prefix: &str) -> String {
        format!("{}/{}", self.base_url, prefix)
    }

    /// Downloads the range body for `prefix`.
    ///
    /// The response (and its connection) is dropped before returning on every
    /// path, including errors.
    pub async fn fetch(&self, prefix: &str) -> Result<RangeResponse, Error> {
        let response = self
            .client
            .get(self.range_url(prefix))
            .send()
            .await
            .map_err(|source| Error::HttpRequest { prefix: prefix.to_string(), source })?;

        if !response.status().is_success() {
            return Err(Error::HttpStatus {
                prefix: prefix.to_string(),
                status: response.status().as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| Error::HttpRequest { prefix: prefix.to_string(), source })?;

        Ok(RangeResponse { body })
    }

    /// Fetches the range for `prefix` and returns the count recorded for `suffix`.
    pub async fn occurrences(&self, prefix: &str, suffix: &str) -> Result<u64, Error> {
        let range = self.fetch(prefix).await?;
        matcher::occurrences(range.lines(), suffix)
    }
}

/// Raw body of a range response.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RangeResponse {
    body: String,
}

impl RangeResponse {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    /// Candidate lines of the form `SUFFIX:COUNT`. An empty body has no lines.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.body.split_terminator(LINE_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_url() {
        let fetcher = RangeFetcher::new(reqwest::Client::new(), "http://localhost:1234/range/");
        assert_eq!(fetcher.base_url(), "http://localhost:1234/range");
        assert_eq!(fetcher.range_url("5BAA6"), "http://localhost:1234/range/5BAA6");
    }

    #[test]
    fn test_empty_body_has_no_lines() {
        assert_eq!(RangeResponse::new("").lines().count(), 0);
    }

    #[test]
    fn test_lines_split_on_crlf() {
        let range = RangeResponse::new("HASH0:99\r\nHASH1:20\r\nHASH2:3");
        assert_eq!(range.lines().collect::<Vec<_>>(), ["HASH0:99", "HASH1:20", "HASH2:3"]);

        let trailing = RangeResponse::new("HASH0:99\r\n");
        assert_eq!(trailing.lines().collect::<Vec<_>>(), ["HASH0:99"]);
    }

    #[test]
    fn test_bare_newlines_are_not_separators() {
        let range = RangeResponse::new("HASH0:99\nHASH1:20");
        assert_eq!(range.lines().count(), 1);
    }
}
