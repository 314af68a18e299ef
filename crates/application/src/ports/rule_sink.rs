use async_trait::async_trait;
use honeyzone_domain::{DomainError, RuleLine};

#[async_trait]
pub trait RuleSinkPort: Send + Sync {
    /// Replace the destination's contents with `rules`, in order.
    async fn write_rules(&self, rules: &[RuleLine]) -> Result<(), DomainError>;

    fn destination(&self) -> &str;
}
