mod dns;
mod feed;

pub use dns::DnsServices;
pub use feed::FeedServices;
