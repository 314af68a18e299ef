use crate::ports::{IocFeedPort, RuleSinkPort};
use honeyzone_domain::DomainError;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleGenerationSummary {
    pub entries: usize,
    pub rules: usize,
}

/// Fetch the feed once, keep domain/URL entries, write them as rules.
pub struct GenerateIocRulesUseCase {
    feed: Arc<dyn IocFeedPort>,
    sink: Arc<dyn RuleSinkPort>,
}

impl GenerateIocRulesUseCase {
    pub fn new(feed: Arc<dyn IocFeedPort>, sink: Arc<dyn RuleSinkPort>) -> Self {
        Self { feed, sink }
    }

    pub async fn execute(&self) -> Result<RuleGenerationSummary, DomainError> {
        let list = self.feed.fetch().await?;
        let rules = list.rules();

        info!(
            source = %self.feed.source(),
            entries = list.data.len(),
            rules = rules.len(),
            "IOC feed fetched"
        );

        self.sink.write_rules(&rules).await?;

        info!("File created: {}", self.sink.destination());

        Ok(RuleGenerationSummary {
            entries: list.data.len(),
            rules: rules.len(),
        })
    }
}
