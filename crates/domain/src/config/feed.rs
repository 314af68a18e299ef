use serde::{Deserialize, Serialize};

pub const DEFAULT_FEED_URL: &str = "https://labs.inquest.net/api/iocdb/list";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeedConfig {
    #[serde(default = "default_url")]
    pub url: String,

    #[serde(default = "default_output_path")]
    pub output_path: String,

    /// Whole-request timeout for the feed download, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            output_path: default_output_path(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_url() -> String {
    DEFAULT_FEED_URL.to_string()
}

fn default_output_path() -> String {
    "inbound.rules".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}
