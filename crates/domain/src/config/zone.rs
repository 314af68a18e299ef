use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AddressEntry {
    pub name: String,
    pub address: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailExchangeEntry {
    pub name: String,
    #[serde(default = "default_preference")]
    pub preference: u16,
    pub exchange: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CanonicalNameEntry {
    pub name: String,
    pub target: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthorityEntry {
    pub name: String,
    pub value: String,
}

/// Optional zone override. Left empty, the builtin zone is served.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ZoneConfig {
    #[serde(default)]
    pub addresses: Vec<AddressEntry>,

    #[serde(default)]
    pub mail_exchangers: Vec<MailExchangeEntry>,

    #[serde(default)]
    pub canonical_names: Vec<CanonicalNameEntry>,

    #[serde(default)]
    pub authorities: Vec<AuthorityEntry>,
}

impl ZoneConfig {
    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
            && self.mail_exchangers.is_empty()
            && self.canonical_names.is_empty()
            && self.authorities.is_empty()
    }
}

fn default_preference() -> u16 {
    10
}
