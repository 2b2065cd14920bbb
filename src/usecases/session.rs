//! Chat session: one gated pipeline turn at a time.

use crate::{
    domain::message::{ConversationMessage, MessageLog},
    usecases::{
        contracts::{CompletionBackend, CredentialStore},
        credential_gate, recommend,
    },
};

/// Domain-level rejections of a submitted turn. Unlike resolver failures,
/// these are surfaced to the caller: the action being refused is accepting
/// the input, not producing a recommendation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// Input is empty after trimming whitespace.
    EmptyMessage,
    /// No credential is stored; the input affordance should be disabled.
    CredentialMissing,
}

/// Owns the append-only transcript for one session.
#[derive(Debug, Default)]
pub struct ChatSession {
    log: MessageLog,
}

impl ChatSession {
    pub fn log(&self) -> &MessageLog {
        &self.log
    }

    /// Runs one pipeline turn: gate check, resolve, transcript append.
    ///
    /// The caller drives turns sequentially; there is never more than one
    /// resolution in flight per session.
    pub fn submit(
        &mut self,
        store: &dyn CredentialStore,
        backend: &dyn CompletionBackend,
        text: &str,
    ) -> Result<&ConversationMessage, SubmitError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(SubmitError::EmptyMessage);
        }

        let key = credential_gate::current_credential(store).ok_or(SubmitError::CredentialMissing)?;

        self.log.push(ConversationMessage::user(text));
        let answer = recommend::resolve(backend, &key, text);
        self.log.push(ConversationMessage::assistant(answer));

        Ok(self.log.last().expect("log cannot be empty after a push"))
    }
}
