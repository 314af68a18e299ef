mod ioc_feed;
mod rule_sink;

pub use ioc_feed::IocFeedPort;
pub use rule_sink::RuleSinkPort;
