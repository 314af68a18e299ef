use honeyzone_domain::{AnswerData, DnsAnswer, DomainError, RecordType};
use honeyzone_infrastructure::dns::{to_hickory_record, RecordTypeMapper};
use hickory_proto::rr::rdata::{A, AAAA, CNAME, MX, TXT};
use hickory_proto::rr::{DNSClass, Name, RData, RecordType as HickoryRecordType};
use std::net::Ipv4Addr;
use std::str::FromStr;

#[test]
fn test_a_record_mapping() {
    let answer = DnsAnswer::new("google.com.", 60, AnswerData::A(Ipv4Addr::new(1, 2, 3, 4)));
    let record = to_hickory_record(&answer).unwrap();

    assert_eq!(record.name(), &Name::from_str("google.com.").unwrap());
    assert_eq!(record.record_type(), HickoryRecordType::A);
    assert_eq!(record.dns_class(), DNSClass::IN);
    assert_eq!(record.ttl(), 60);
    assert_eq!(record.data(), &RData::A(A::new(1, 2, 3, 4)));
}

#[test]
fn test_aaaa_record_mapping() {
    let v6 = Ipv4Addr::new(1, 3, 3, 7).to_ipv6_mapped();
    let answer = DnsAnswer::new("not-a.xyz.", 60, AnswerData::AAAA(v6));
    let record = to_hickory_record(&answer).unwrap();

    assert_eq!(record.record_type(), HickoryRecordType::AAAA);
    assert_eq!(record.data(), &RData::AAAA(AAAA(v6)));
}

#[test]
fn test_cname_record_mapping() {
    let answer = DnsAnswer::new(
        "google.com",
        60,
        AnswerData::CNAME("www.not-a.xyz".to_string()),
    );
    let record = to_hickory_record(&answer).unwrap();

    assert_eq!(
        record.data(),
        &RData::CNAME(CNAME(Name::from_str("www.not-a.xyz").unwrap()))
    );
}

#[test]
fn test_mx_record_has_zero_preference() {
    let answer = DnsAnswer::new(
        "not-a.xyz.",
        60,
        AnswerData::MX {
            exchange: "mail.not-a.xyz.".to_string(),
        },
    );
    let record = to_hickory_record(&answer).unwrap();

    assert_eq!(
        record.data(),
        &RData::MX(MX::new(0, Name::from_str("mail.not-a.xyz.").unwrap()))
    );
}

#[test]
fn test_txt_record_mapping() {
    let answer = DnsAnswer::new(
        "google.com.",
        60,
        AnswerData::TXT(vec!["1.2.3.4".to_string()]),
    );
    let record = to_hickory_record(&answer).unwrap();

    assert_eq!(
        record.data(),
        &RData::TXT(TXT::new(vec!["1.2.3.4".to_string()]))
    );
}

#[test]
fn test_caa_record_mapping() {
    let answer = DnsAnswer::new("google.com", 60, AnswerData::CAA("m.google.com".to_string()));
    let record = to_hickory_record(&answer).unwrap();

    assert_eq!(record.record_type(), HickoryRecordType::CAA);
    assert_eq!(record.ttl(), 60);
}

#[test]
fn test_invalid_owner_name_is_rejected() {
    let long_label = "a".repeat(70);
    let answer = DnsAnswer::new(
        format!("{}.example.", long_label),
        60,
        AnswerData::A(Ipv4Addr::LOCALHOST),
    );

    assert!(matches!(
        to_hickory_record(&answer),
        Err(DomainError::InvalidDomainName(_))
    ));
}

#[test]
fn test_record_type_mapper_roundtrip_for_known_types() {
    for rt in [
        RecordType::A,
        RecordType::NS,
        RecordType::CNAME,
        RecordType::SOA,
        RecordType::PTR,
        RecordType::MX,
        RecordType::TXT,
        RecordType::AAAA,
        RecordType::SRV,
        RecordType::CAA,
    ] {
        assert_eq!(RecordTypeMapper::from_hickory(HickoryRecordType::from(rt.to_u16())), rt);
    }
}

#[test]
fn test_record_type_mapper_unknown_keeps_code() {
    assert_eq!(
        RecordTypeMapper::from_hickory(HickoryRecordType::HTTPS),
        RecordType::Unknown(65)
    );
    assert_eq!(
        RecordTypeMapper::from_hickory(HickoryRecordType::NS),
        RecordType::NS
    );
}
