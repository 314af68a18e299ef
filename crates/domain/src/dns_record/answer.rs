use super::RecordType;
use std::net::{Ipv4Addr, Ipv6Addr};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerData {
    A(Ipv4Addr),
    AAAA(Ipv6Addr),
    CNAME(String),
    CAA(String),
    /// Only the exchange is carried; the preference is not propagated.
    MX { exchange: String },
    TXT(Vec<String>),
}

impl AnswerData {
    pub fn record_type(&self) -> RecordType {
        match self {
            AnswerData::A(_) => RecordType::A,
            AnswerData::AAAA(_) => RecordType::AAAA,
            AnswerData::CNAME(_) => RecordType::CNAME,
            AnswerData::CAA(_) => RecordType::CAA,
            AnswerData::MX { .. } => RecordType::MX,
            AnswerData::TXT(_) => RecordType::TXT,
        }
    }
}

/// A single answer-section record, owner name as queried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsAnswer {
    pub name: String,
    pub ttl: u32,
    pub data: AnswerData,
}

impl DnsAnswer {
    pub fn new(name: impl Into<String>, ttl: u32, data: AnswerData) -> Self {
        Self {
            name: name.into(),
            ttl,
            data,
        }
    }

    pub fn record_type(&self) -> RecordType {
        self.data.record_type()
    }
}
