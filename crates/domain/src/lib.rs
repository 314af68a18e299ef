//! Honeyzone Domain Layer
pub mod config;
pub mod dns_question;
pub mod dns_record;
pub mod dns_reply;
pub mod errors;
pub mod ioc;
pub mod zone;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_question::DnsQuestion;
pub use dns_record::{AnswerData, DnsAnswer, RecordType};
pub use dns_reply::DnsReply;
pub use errors::DomainError;
pub use ioc::{IocEntry, IocList, RuleLine};
pub use zone::{CaaEntry, MailExchange, ZoneTable, ANSWER_TTL};
