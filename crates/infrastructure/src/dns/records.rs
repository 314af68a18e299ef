use honeyzone_domain::{AnswerData, DnsAnswer, DomainError};
use hickory_proto::rr::rdata::{A, AAAA, CAA, CNAME, MX, TXT};
use hickory_proto::rr::{Name, RData, Record};
use std::str::FromStr;

/// Build the wire record for a zone answer.
///
/// MX is emitted with preference 0 and CAA as a non-critical `issue`
/// property naming the configured value.
pub fn to_hickory_record(answer: &DnsAnswer) -> Result<Record, DomainError> {
    let owner = parse_name(&answer.name)?;

    let rdata = match &answer.data {
        AnswerData::A(v4) => RData::A(A(*v4)),
        AnswerData::AAAA(v6) => RData::AAAA(AAAA(*v6)),
        AnswerData::CNAME(target) => RData::CNAME(CNAME(parse_name(target)?)),
        AnswerData::MX { exchange } => RData::MX(MX::new(0, parse_name(exchange)?)),
        AnswerData::TXT(chunks) => RData::TXT(TXT::new(chunks.clone())),
        AnswerData::CAA(value) => {
            RData::CAA(CAA::new_issue(false, Some(parse_name(value)?), Vec::new()))
        }
    };

    Ok(Record::from_rdata(owner, answer.ttl, rdata))
}

fn parse_name(name: &str) -> Result<Name, DomainError> {
    Name::from_str(name).map_err(|e| DomainError::InvalidDomainName(format!("{}: {}", name, e)))
}
