use async_trait::async_trait;
use honeyzone_domain::{DomainError, IocList};

#[async_trait]
pub trait IocFeedPort: Send + Sync {
    /// Download and decode the whole feed in one request.
    async fn fetch(&self) -> Result<IocList, DomainError>;

    /// Where the feed comes from, for logging.
    fn source(&self) -> &str;
}
