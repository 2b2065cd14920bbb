//! Bearer credential shape rules.

use std::fmt;

const KEY_PREFIX: &str = "sk-";
const MIN_KEY_LEN: usize = 20;

/// The credential does not look like a provider API key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidCredential;

/// A shape-validated bearer token. The token body never appears in
/// `Debug` or `Display` output.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Validates raw input: trimmed, must start with `sk-` and be longer
    /// than 20 characters. No network validation of actual authorization.
    pub fn parse(raw: &str) -> Result<Self, InvalidCredential> {
        let trimmed = raw.trim();

        if trimmed.starts_with(KEY_PREFIX) && trimmed.len() > MIN_KEY_LEN {
            Ok(Self(trimmed.to_owned()))
        } else {
            Err(InvalidCredential)
        }
    }

    /// Wraps a value read back from the durable store. Values only reach
    /// the store through [`ApiKey::parse`], so the shape is trusted here.
    pub fn from_stored(value: String) -> Self {
        Self(value)
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey(sk-***)")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sk-***")
    }
}
