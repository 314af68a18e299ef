use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Rule id stamped on every generated rule.
pub const RULE_SID: u32 = 1_000_001;
pub const RULE_REV: u32 = 1;

/// Envelope of the IOC feed response.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct IocList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<IocEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct IocEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub artifact: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub artifact_type: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub created_date: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub reference_link: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub reference_text: String,
}

impl IocEntry {
    pub fn new(artifact: impl Into<String>, artifact_type: impl Into<String>) -> Self {
        Self {
            artifact: artifact.into(),
            artifact_type: artifact_type.into(),
            ..Self::default()
        }
    }

    pub fn with_reference_link(mut self, link: impl Into<String>) -> Self {
        self.reference_link = link.into();
        self
    }

    /// Domains need a non-empty artifact; URLs are taken unconditionally.
    pub fn is_rule_candidate(&self) -> bool {
        (!self.artifact.is_empty() && self.artifact_type == "domain")
            || self.artifact_type == "url"
    }

    pub fn to_rule(&self) -> RuleLine {
        RuleLine(format!(
            "alert ip any any -> {} any (msg:\"Potential IOC detected of TYPE {} reference {}\"; sid:{}; rev:{};)\n",
            self.artifact, self.artifact_type, self.reference_link, RULE_SID, RULE_REV
        ))
    }
}

/// Treats an explicit JSON `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl IocList {
    pub fn rules(&self) -> Vec<RuleLine> {
        self.data
            .iter()
            .filter(|entry| entry.is_rule_candidate())
            .map(IocEntry::to_rule)
            .collect()
    }
}

/// One newline-terminated IDS rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleLine(String);

impl RuleLine {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RuleLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
