use crate::config::ZoneConfig;
use crate::DomainError;
use std::collections::HashMap;
use std::net::IpAddr;

/// Freshness period stamped on every answer the responder emits.
pub const ANSWER_TTL: u32 = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailExchange {
    pub preference: u16,
    pub exchange: String,
}

impl MailExchange {
    pub fn new(preference: u16, exchange: impl Into<String>) -> Self {
        Self {
            preference,
            exchange: exchange.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaaEntry {
    pub value: String,
}

impl CaaEntry {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// A parsed address plus the text it was configured as, echoed by TXT.
#[derive(Debug, Clone, PartialEq, Eq)]
struct HostAddress {
    ip: IpAddr,
    text: String,
}

/// Read-only record tables, one per payload kind.
///
/// Keys are matched byte-for-byte: no case folding and no trailing-dot
/// normalization. A key written as `google.com` never matches the fully
/// qualified `google.com.` a wire query carries.
#[derive(Debug, Clone, Default)]
pub struct ZoneTable {
    addresses: HashMap<String, HostAddress>,
    mail_exchangers: HashMap<String, Vec<MailExchange>>,
    canonical_names: HashMap<String, Vec<String>>,
    authorities: HashMap<String, Vec<CaaEntry>>,
}

impl ZoneTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The zone compiled into the binary.
    pub fn builtin() -> Self {
        Self::new()
            .with_address("google.com.", IpAddr::from([1, 2, 3, 4]))
            .with_address("not-a.xyz.", IpAddr::from([1, 3, 3, 7]))
            .with_mail_exchanger("google.com.", MailExchange::new(10, "mail.google.com."))
            .with_mail_exchanger("not-a.xyz.", MailExchange::new(10, "mail.not-a.xyz."))
            .with_canonical_name("google.com", "www.not-a.xyz")
            .with_canonical_name("not-a.xyz", "www.not-a.xyz")
            .with_authority("google.com", CaaEntry::new("m.google.com"))
            .with_authority("not-a.xyz", CaaEntry::new("m.not-a.xyz"))
    }

    /// Build from the `[zone]` config section, falling back to the builtin
    /// zone when the section is empty.
    pub fn from_config(config: &ZoneConfig) -> Result<Self, DomainError> {
        if config.is_empty() {
            return Ok(Self::builtin());
        }

        let mut zone = Self::new();

        for entry in &config.addresses {
            check_name(&entry.name)?;
            let address: IpAddr = entry
                .address
                .parse()
                .map_err(|_| DomainError::InvalidIpAddress(entry.address.clone()))?;
            zone.addresses.insert(
                entry.name.clone(),
                HostAddress {
                    ip: address,
                    text: entry.address.clone(),
                },
            );
        }

        for entry in &config.mail_exchangers {
            check_name(&entry.name)?;
            check_name(&entry.exchange)?;
            zone = zone.with_mail_exchanger(
                entry.name.clone(),
                MailExchange::new(entry.preference, entry.exchange.clone()),
            );
        }

        for entry in &config.canonical_names {
            check_name(&entry.name)?;
            check_name(&entry.target)?;
            zone = zone.with_canonical_name(entry.name.clone(), entry.target.clone());
        }

        for entry in &config.authorities {
            check_name(&entry.name)?;
            if entry.value.is_empty() {
                return Err(DomainError::InvalidRecordData(format!(
                    "empty CAA value for {}",
                    entry.name
                )));
            }
            zone = zone.with_authority(entry.name.clone(), CaaEntry::new(entry.value.clone()));
        }

        Ok(zone)
    }

    pub fn with_address(mut self, name: impl Into<String>, address: IpAddr) -> Self {
        self.addresses.insert(
            name.into(),
            HostAddress {
                ip: address,
                text: address.to_string(),
            },
        );
        self
    }

    pub fn with_mail_exchanger(mut self, name: impl Into<String>, mx: MailExchange) -> Self {
        self.mail_exchangers.entry(name.into()).or_default().push(mx);
        self
    }

    pub fn with_canonical_name(
        mut self,
        name: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        self.canonical_names
            .entry(name.into())
            .or_default()
            .push(target.into());
        self
    }

    pub fn with_authority(mut self, name: impl Into<String>, caa: CaaEntry) -> Self {
        self.authorities.entry(name.into()).or_default().push(caa);
        self
    }

    pub fn address(&self, name: &str) -> Option<IpAddr> {
        self.addresses.get(name).map(|host| host.ip)
    }

    /// The address exactly as configured, without normalization.
    pub fn address_text(&self, name: &str) -> Option<&str> {
        self.addresses.get(name).map(|host| host.text.as_str())
    }

    pub fn mail_exchanger(&self, name: &str) -> Option<&MailExchange> {
        self.mail_exchangers.get(name).and_then(|list| list.first())
    }

    pub fn canonical_name(&self, name: &str) -> Option<&str> {
        self.canonical_names
            .get(name)
            .and_then(|list| list.first())
            .map(String::as_str)
    }

    pub fn authority(&self, name: &str) -> Option<&CaaEntry> {
        self.authorities.get(name).and_then(|list| list.first())
    }

    pub fn address_names(&self) -> impl Iterator<Item = &str> {
        self.addresses.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
            + self.mail_exchangers.len()
            + self.canonical_names.len()
            + self.authorities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn check_name(name: &str) -> Result<(), DomainError> {
    if name.is_empty() || name.len() > 254 || name.chars().any(char::is_whitespace) {
        return Err(DomainError::InvalidDomainName(name.to_string()));
    }
    Ok(())
}
