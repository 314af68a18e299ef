#![allow(dead_code)]

use async_trait::async_trait;
use honeyzone_application::ports::{IocFeedPort, RuleSinkPort};
use honeyzone_domain::{DomainError, IocEntry, IocList, RuleLine};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct MockIocFeed {
    entries: Arc<Mutex<Vec<IocEntry>>>,
    error: Arc<Mutex<Option<DomainError>>>,
}

impl MockIocFeed {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
            error: Arc::new(Mutex::new(None)),
        }
    }

    pub fn with_entries(entries: Vec<IocEntry>) -> Self {
        let feed = Self::new();
        *feed.entries.lock().unwrap() = entries;
        feed
    }

    pub fn set_error(&self, error: DomainError) {
        *self.error.lock().unwrap() = Some(error);
    }
}

#[async_trait]
impl IocFeedPort for MockIocFeed {
    async fn fetch(&self) -> Result<IocList, DomainError> {
        if let Some(err) = self.error.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(IocList {
            data: self.entries.lock().unwrap().clone(),
        })
    }

    fn source(&self) -> &str {
        "mock://feed"
    }
}

#[derive(Clone)]
pub struct MockRuleSink {
    written: Arc<Mutex<Option<Vec<RuleLine>>>>,
    should_fail: Arc<Mutex<bool>>,
}

impl MockRuleSink {
    pub fn new() -> Self {
        Self {
            written: Arc::new(Mutex::new(None)),
            should_fail: Arc::new(Mutex::new(false)),
        }
    }

    pub fn set_should_fail(&self, fail: bool) {
        *self.should_fail.lock().unwrap() = fail;
    }

    pub fn written(&self) -> Option<Vec<RuleLine>> {
        self.written.lock().unwrap().clone()
    }
}

#[async_trait]
impl RuleSinkPort for MockRuleSink {
    async fn write_rules(&self, rules: &[RuleLine]) -> Result<(), DomainError> {
        if *self.should_fail.lock().unwrap() {
            return Err(DomainError::RuleWriteError("disk full".to_string()));
        }
        *self.written.lock().unwrap() = Some(rules.to_vec());
        Ok(())
    }

    fn destination(&self) -> &str {
        "mock.rules"
    }
}
