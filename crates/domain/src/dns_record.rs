pub mod answer;
pub mod record_type;

pub use answer::{AnswerData, DnsAnswer};
pub use record_type::RecordType;
