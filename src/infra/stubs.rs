#![cfg_attr(not(test), allow(dead_code))]

use std::cell::RefCell;

use anyhow::{bail, Result};

use crate::{
    domain::credential::ApiKey,
    usecases::contracts::{ApiError, CompletionBackend, CredentialHandoff, CredentialStore},
};

#[cfg(test)]
use crate::infra::{config::AppConfig, contracts::ConfigAdapter};

#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct StubConfigAdapter;

#[cfg(test)]
impl ConfigAdapter for StubConfigAdapter {
    fn load(&self) -> Result<AppConfig> {
        Ok(AppConfig::default())
    }
}

/// In-memory credential store for tests and degraded flows.
#[derive(Debug, Clone, Default)]
pub struct MemoryCredentialStore {
    value: Option<String>,
    failing: bool,
}

impl MemoryCredentialStore {
    pub fn with_value(value: &str) -> Self {
        Self {
            value: Some(value.to_owned()),
            failing: false,
        }
    }

    /// A store whose every operation fails, for degraded-path tests.
    pub fn failing() -> Self {
        Self {
            value: None,
            failing: true,
        }
    }

    pub fn value(&self) -> Option<String> {
        self.value.clone()
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn load(&self) -> Result<Option<String>> {
        if self.failing {
            bail!("store unavailable");
        }
        Ok(self.value.clone())
    }

    fn save(&mut self, value: &str) -> Result<()> {
        if self.failing {
            bail!("store unavailable");
        }
        self.value = Some(value.to_owned());
        Ok(())
    }

    fn clear(&mut self) -> Result<bool> {
        if self.failing {
            bail!("store unavailable");
        }
        Ok(self.value.take().is_some())
    }
}

/// In-memory one-time delivery channel.
#[derive(Debug, Clone, Default)]
pub struct MemoryHandoff {
    value: Option<String>,
    scrubbed: bool,
}

impl MemoryHandoff {
    pub fn with_value(value: &str) -> Self {
        Self {
            value: Some(value.to_owned()),
            scrubbed: false,
        }
    }

    pub fn is_scrubbed(&self) -> bool {
        self.scrubbed
    }
}

impl CredentialHandoff for MemoryHandoff {
    fn peek(&self) -> Result<Option<String>> {
        Ok(self.value.clone())
    }

    fn scrub(&mut self) -> Result<()> {
        self.value = None;
        self.scrubbed = true;
        Ok(())
    }
}

/// Scripted completion backend capturing the outgoing exchange.
#[derive(Debug)]
pub struct StubCompletionBackend {
    result: Result<String, ApiError>,
    captured_instruction: RefCell<Option<String>>,
    captured_user_text: RefCell<Option<String>>,
}

impl StubCompletionBackend {
    pub fn with_result(result: Result<String, ApiError>) -> Self {
        Self {
            result,
            captured_instruction: RefCell::new(None),
            captured_user_text: RefCell::new(None),
        }
    }

    pub fn captured_instruction(&self) -> Option<String> {
        self.captured_instruction.borrow().clone()
    }

    pub fn captured_user_text(&self) -> Option<String> {
        self.captured_user_text.borrow().clone()
    }
}

impl CompletionBackend for StubCompletionBackend {
    fn complete(
        &self,
        _key: &ApiKey,
        system_instruction: &str,
        user_text: &str,
    ) -> Result<String, ApiError> {
        *self.captured_instruction.borrow_mut() = Some(system_instruction.to_owned());
        *self.captured_user_text.borrow_mut() = Some(user_text.to_owned());
        self.result.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_config_returns_defaults() {
        let adapter = StubConfigAdapter;
        let config = adapter.load().expect("stub config must load");

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn memory_store_round_trips_and_clears() {
        let mut store = MemoryCredentialStore::default();
        store.save("sk-test").expect("save should succeed");

        assert_eq!(store.load().expect("load"), Some("sk-test".to_owned()));
        assert!(store.clear().expect("clear"));
        assert_eq!(store.load().expect("load"), None);
    }
}
