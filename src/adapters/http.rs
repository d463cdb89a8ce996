use crate::config::ClientConfig;
use crate::domain::{Fetcher, PatternId};
use crate::utils::error::{RavelryError, Result};
use crate::utils::validation::Validate;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use std::time::Duration;

/// Blocking HTTP transport for the pattern endpoint.
///
/// Each call is one GET with Basic auth; there is no retry and no caching.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    config: ClientConfig,
}

impl HttpFetcher {
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = Client::builder();
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let client = builder.build()?;

        Ok(Self { client, config })
    }

    /// Credentials from `RAV_ACCESS` / `RAV_PERSONAL`.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

impl Fetcher for HttpFetcher {
    fn fetch_pattern(&self, id: &PatternId) -> Result<String> {
        let url = self.config.pattern_url(id)?;

        tracing::debug!("Making API request to: {}", url);
        let response = self
            .client
            .get(url)
            .basic_auth(&self.config.access_key, Some(&self.config.personal_key))
            .header(ACCEPT, "application/json")
            .send()?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        let body = response.text()?;
        if !status.is_success() {
            tracing::warn!("Pattern {} request failed with HTTP {}", id, status);
            return Err(RavelryError::HttpStatusError {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!("Received {} bytes for pattern {}", body.len(), id);
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    // base64("test-access:test-personal")
    const BASIC_AUTH: &str = "Basic dGVzdC1hY2Nlc3M6dGVzdC1wZXJzb25hbA==";

    fn fetcher_for(server: &MockServer) -> HttpFetcher {
        let config = ClientConfig::new("test-access", "test-personal").with_api_base(server.base_url());
        HttpFetcher::new(config).unwrap()
    }

    #[test]
    fn test_fetch_sends_basic_auth() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/patterns/600.json")
                .header("Authorization", BASIC_AUTH)
                .header("Accept", "application/json");
            then.status(200)
                .header("Content-Type", "application/json")
                .body(r#"{"pattern":{"id":600}}"#);
        });

        let body = fetcher_for(&server).fetch_pattern(&PatternId::from(600u64)).unwrap();

        api_mock.assert();
        assert_eq!(body, r#"{"pattern":{"id":600}}"#);
    }

    #[test]
    fn test_fetch_by_permalink() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/patterns/traveling-woman.json");
            then.status(200).body("{}");
        });

        let body = fetcher_for(&server)
            .fetch_pattern(&PatternId::from("traveling-woman"))
            .unwrap();

        api_mock.assert();
        assert_eq!(body, "{}");
    }

    #[test]
    fn test_non_success_status_is_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/patterns/1.json");
            then.status(404).body("not found");
        });

        let err = fetcher_for(&server).fetch_pattern(&PatternId::from(1u64)).unwrap_err();

        match err {
            RavelryError::HttpStatusError { status, body } => {
                assert_eq!(status, 404);
                assert_eq!(body, "not found");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = ClientConfig::new("  ", "test-personal");
        assert!(HttpFetcher::new(config).is_err());
    }
}
