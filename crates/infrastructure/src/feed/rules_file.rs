use async_trait::async_trait;
use honeyzone_application::ports::RuleSinkPort;
use honeyzone_domain::{DomainError, RuleLine};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

/// Truncates and rewrites a rules file on every run.
pub struct RulesFileWriter {
    path: String,
}

impl RulesFileWriter {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RuleSinkPort for RulesFileWriter {
    async fn write_rules(&self, rules: &[RuleLine]) -> Result<(), DomainError> {
        let mut file = File::create(&self.path).await.map_err(|e| {
            DomainError::RuleWriteError(format!("Failed creating file {}: {}", self.path, e))
        })?;

        for rule in rules {
            file.write_all(rule.as_str().as_bytes()).await.map_err(|e| {
                DomainError::RuleWriteError(format!("Failed writing the rule content: {}", e))
            })?;
        }

        file.flush()
            .await
            .map_err(|e| DomainError::RuleWriteError(format!("Failed closing file: {}", e)))
    }

    fn destination(&self) -> &str {
        &self.path
    }
}
