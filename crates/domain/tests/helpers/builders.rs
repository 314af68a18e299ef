#![allow(dead_code)]
use honeyzone_domain::config::{
    AddressEntry, AuthorityEntry, CanonicalNameEntry, MailExchangeEntry, ZoneConfig,
};
use honeyzone_domain::IocEntry;

pub struct IocEntryBuilder {
    artifact: String,
    artifact_type: String,
    created_date: String,
    reference_link: String,
    reference_text: String,
}

impl IocEntryBuilder {
    pub fn new() -> Self {
        Self {
            artifact: "evil.example".to_string(),
            artifact_type: "domain".to_string(),
            created_date: "2024-01-01T00:00:00".to_string(),
            reference_link: "https://ref.example/1".to_string(),
            reference_text: "sample".to_string(),
        }
    }

    pub fn artifact(mut self, artifact: &str) -> Self {
        self.artifact = artifact.to_string();
        self
    }

    pub fn artifact_type(mut self, artifact_type: &str) -> Self {
        self.artifact_type = artifact_type.to_string();
        self
    }

    pub fn reference_link(mut self, link: &str) -> Self {
        self.reference_link = link.to_string();
        self
    }

    pub fn build(self) -> IocEntry {
        IocEntry {
            artifact: self.artifact,
            artifact_type: self.artifact_type,
            created_date: self.created_date,
            reference_link: self.reference_link,
            reference_text: self.reference_text,
        }
    }
}

pub struct ZoneConfigBuilder {
    config: ZoneConfig,
}

impl ZoneConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: ZoneConfig::default(),
        }
    }

    pub fn address(mut self, name: &str, address: &str) -> Self {
        self.config.addresses.push(AddressEntry {
            name: name.to_string(),
            address: address.to_string(),
        });
        self
    }

    pub fn mail_exchanger(mut self, name: &str, preference: u16, exchange: &str) -> Self {
        self.config.mail_exchangers.push(MailExchangeEntry {
            name: name.to_string(),
            preference,
            exchange: exchange.to_string(),
        });
        self
    }

    pub fn canonical_name(mut self, name: &str, target: &str) -> Self {
        self.config.canonical_names.push(CanonicalNameEntry {
            name: name.to_string(),
            target: target.to_string(),
        });
        self
    }

    pub fn authority(mut self, name: &str, value: &str) -> Self {
        self.config.authorities.push(AuthorityEntry {
            name: name.to_string(),
            value: value.to_string(),
        });
        self
    }

    pub fn build(self) -> ZoneConfig {
        self.config
    }
}
