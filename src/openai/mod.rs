//! Remote completion provider integration: wire client and prompt assembly.

mod client;
pub mod prompt;

pub use client::OpenAiBackend;

/// Returns the openai module name for smoke checks.
pub fn module_name() -> &'static str {
    "openai"
}
