use async_trait::async_trait;
use honeyzone_application::ports::IocFeedPort;
use honeyzone_domain::{DomainError, IocList};
use std::time::Duration;
use tracing::debug;

pub struct HttpIocFeed {
    url: String,
    client: reqwest::Client,
}

impl HttpIocFeed {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("honeyzone/", env!("CARGO_PKG_VERSION"), " (ioc-rules)"))
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::FeedFetchError(e.to_string()))?;

        Ok(Self {
            url: url.into(),
            client,
        })
    }
}

#[async_trait]
impl IocFeedPort for HttpIocFeed {
    async fn fetch(&self) -> Result<IocList, DomainError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| {
                DomainError::FeedFetchError(format!("fetch error for {}: {}", self.url, e))
            })?;

        if !response.status().is_success() {
            return Err(DomainError::FeedFetchError(format!(
                "HTTP {} for {}",
                response.status().as_u16(),
                self.url
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| {
                DomainError::FeedFetchError(format!("read error for {}: {}", self.url, e))
            })?;

        debug!(url = %self.url, bytes = body.len(), "IOC feed downloaded");

        serde_json::from_str(&body).map_err(|e| DomainError::FeedParseError(e.to_string()))
    }

    fn source(&self) -> &str {
        &self.url
    }
}
