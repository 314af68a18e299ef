use honeyzone_domain::{
    AnswerData, DnsAnswer, DnsQuestion, DnsReply, RecordType, ZoneTable, ANSWER_TTL,
};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::debug;

/// Answers a single question from the zone table.
///
/// A, AAAA and CNAME replies are authoritative; CAA, MX and TXT replies are
/// not. Types with no branch get a non-authoritative empty reply.
pub struct AnswerQueryUseCase {
    zone: Arc<ZoneTable>,
}

impl AnswerQueryUseCase {
    pub fn new(zone: Arc<ZoneTable>) -> Self {
        Self { zone }
    }

    pub fn execute(&self, question: &DnsQuestion) -> DnsReply {
        let name = &*question.name;

        let reply = match question.record_type {
            RecordType::A => {
                let data = match self.zone.address(name) {
                    Some(IpAddr::V4(v4)) => Some(AnswerData::A(v4)),
                    _ => None,
                };
                DnsReply::new(true).with_answer(data.map(|d| answer(name, d)))
            }
            RecordType::AAAA => {
                let data = self.zone.address(name).map(|addr| match addr {
                    IpAddr::V4(v4) => AnswerData::AAAA(v4.to_ipv6_mapped()),
                    IpAddr::V6(v6) => AnswerData::AAAA(v6),
                });
                DnsReply::new(true).with_answer(data.map(|d| answer(name, d)))
            }
            RecordType::CNAME => {
                let data = self
                    .zone
                    .canonical_name(name)
                    .map(|target| AnswerData::CNAME(target.to_string()));
                DnsReply::new(true).with_answer(data.map(|d| answer(name, d)))
            }
            RecordType::CAA => {
                let data = self
                    .zone
                    .authority(name)
                    .map(|caa| AnswerData::CAA(caa.value.clone()));
                DnsReply::new(false).with_answer(data.map(|d| answer(name, d)))
            }
            RecordType::MX => {
                let data = self.zone.mail_exchanger(name).map(|mx| AnswerData::MX {
                    exchange: mx.exchange.clone(),
                });
                DnsReply::new(false).with_answer(data.map(|d| answer(name, d)))
            }
            RecordType::TXT => {
                let data = self
                    .zone
                    .address_text(name)
                    .map(|text| AnswerData::TXT(vec![text.to_string()]));
                DnsReply::new(false).with_answer(data.map(|d| answer(name, d)))
            }
            RecordType::NS
            | RecordType::SOA
            | RecordType::PTR
            | RecordType::SRV
            | RecordType::Unknown(_) => DnsReply::new(false),
        };

        debug!(
            domain = %name,
            record_type = %question.record_type,
            answers = reply.answers.len(),
            authoritative = reply.authoritative,
            "Answered from zone"
        );

        reply
    }
}

fn answer(name: &str, data: AnswerData) -> DnsAnswer {
    DnsAnswer::new(name, ANSWER_TTL, data)
}
