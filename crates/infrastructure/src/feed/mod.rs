pub mod http_feed;
pub mod rules_file;

pub use http_feed::HttpIocFeed;
pub use rules_file::RulesFileWriter;
