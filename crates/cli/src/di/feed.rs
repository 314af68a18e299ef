use honeyzone_application::use_cases::GenerateIocRulesUseCase;
use honeyzone_domain::Config;
use honeyzone_infrastructure::feed::{HttpIocFeed, RulesFileWriter};
use std::sync::Arc;
use std::time::Duration;

pub struct FeedServices {
    pub generate_rules: GenerateIocRulesUseCase,
}

impl FeedServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let feed = Arc::new(HttpIocFeed::new(
            config.feed.url.clone(),
            Duration::from_secs(config.feed.timeout_secs),
        )?);
        let sink = Arc::new(RulesFileWriter::new(config.feed.output_path.clone()));

        Ok(Self {
            generate_rules: GenerateIocRulesUseCase::new(feed, sink),
        })
    }
}
