use anyhow::Result;

use crate::domain::credential::ApiKey;

/// Classified outcome of a failed completion call. Never shown to the
/// user verbatim; the resolver absorbs every variant into a fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Provider rejected the bearer credential (HTTP 401).
    Auth,
    /// Provider rate limit hit (HTTP 429).
    RateLimited,
    /// Provider-side failure (HTTP 5xx).
    ProviderUnavailable { status: u16 },
    /// Any other non-2xx status.
    Api { status: u16 },
    /// 2xx body without the expected first choice and message text.
    MalformedResponse,
    /// Network-level failure: timeout, DNS, connection reset.
    Transport { message: String },
}

impl ApiError {
    /// Stable code for operator-facing logs.
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Auth => "API_AUTH",
            ApiError::RateLimited => "API_RATE_LIMITED",
            ApiError::ProviderUnavailable { .. } => "API_PROVIDER_UNAVAILABLE",
            ApiError::Api { .. } => "API_ERROR",
            ApiError::MalformedResponse => "API_MALFORMED_RESPONSE",
            ApiError::Transport { .. } => "API_TRANSPORT",
        }
    }
}

/// Port for the hosted completion endpoint.
pub trait CompletionBackend {
    /// Issues one two-message completion exchange and returns the model's
    /// reply text verbatim.
    fn complete(
        &self,
        key: &ApiKey,
        system_instruction: &str,
        user_text: &str,
    ) -> Result<String, ApiError>;
}

impl<T: CompletionBackend + ?Sized> CompletionBackend for &T {
    fn complete(
        &self,
        key: &ApiKey,
        system_instruction: &str,
        user_text: &str,
    ) -> Result<String, ApiError> {
        (*self).complete(key, system_instruction, user_text)
    }
}

/// Port for the durable, process-external credential store.
pub trait CredentialStore {
    fn load(&self) -> Result<Option<String>>;
    fn save(&mut self, value: &str) -> Result<()>;
    /// Removes the stored value; `Ok(false)` when nothing was stored.
    fn clear(&mut self) -> Result<bool>;
}

/// Port for a one-time credential delivery channel. The channel is read
/// once at startup and scrubbed after a successful persist so the
/// credential is not observably retained in it.
pub trait CredentialHandoff {
    fn peek(&self) -> Result<Option<String>>;
    fn scrub(&mut self) -> Result<()>;
}
