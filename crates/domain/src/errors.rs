use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Invalid record data: {0}")]
    InvalidRecordData(String),

    #[error("IOC feed fetch error: {0}")]
    FeedFetchError(String),

    #[error("IOC feed parse error: {0}")]
    FeedParseError(String),

    #[error("Rule write error: {0}")]
    RuleWriteError(String),

    #[error("I/O error: {0}")]
    IoError(String),
}
