//! Credential gate: holds and validates the bearer credential.
//!
//! The gate solely determines whether the chat input is enabled; it never
//! performs network validation of the credential's actual authorization.

use crate::{
    domain::credential::{ApiKey, InvalidCredential},
    usecases::contracts::{CredentialHandoff, CredentialStore},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetCredentialError {
    /// Input is not shaped like a provider API key. Any previously stored
    /// credential is left untouched.
    InvalidCredential,
    /// The durable store rejected the write.
    StoreUnavailable,
}

impl From<InvalidCredential> for SetCredentialError {
    fn from(_: InvalidCredential) -> Self {
        SetCredentialError::InvalidCredential
    }
}

/// Validates and persists a credential. The store is only written on the
/// valid-shape path.
pub fn set_credential(
    store: &mut dyn CredentialStore,
    raw: &str,
) -> Result<ApiKey, SetCredentialError> {
    let key = ApiKey::parse(raw)?;

    store.save(key.expose()).map_err(|error| {
        tracing::warn!(error = ?error, "credential store write failed");
        SetCredentialError::StoreUnavailable
    })?;

    Ok(key)
}

/// Returns the persisted credential, if any. A store read failure degrades
/// to `None` with a warning: the recommendation flow prefers a disabled
/// input affordance over a hard failure.
pub fn current_credential(store: &dyn CredentialStore) -> Option<ApiKey> {
    match store.load() {
        Ok(value) => value.map(ApiKey::from_stored),
        Err(error) => {
            tracing::warn!(error = ?error, "credential store read failed");
            None
        }
    }
}

pub fn is_ready(store: &dyn CredentialStore) -> bool {
    current_credential(store).is_some()
}

/// Consumes the one-time delivery channel at startup. A valid-shaped value
/// is persisted through the gate and the channel is scrubbed afterwards;
/// an invalid-shaped value is ignored and left in place, and an absent one
/// is a no-op. Returns whether a credential was seeded.
pub fn seed_from_handoff(
    store: &mut dyn CredentialStore,
    handoff: &mut dyn CredentialHandoff,
) -> bool {
    let delivered = match handoff.peek() {
        Ok(Some(value)) => value,
        Ok(None) => return false,
        Err(error) => {
            tracing::warn!(error = ?error, "credential handoff read failed");
            return false;
        }
    };

    match set_credential(store, &delivered) {
        Ok(_) => {
            if let Err(error) = handoff.scrub() {
                tracing::warn!(error = ?error, "credential handoff scrub failed");
            }
            tracing::info!("credential seeded from one-time handoff");
            true
        }
        Err(error) => {
            tracing::warn!(reason = ?error, "handoff credential rejected");
            false
        }
    }
}
