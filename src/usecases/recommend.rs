//! Recommendation resolver.
//!
//! Orchestrates one remote completion call and never fails outward: every
//! classified error is absorbed into a deterministic local fallback, so the
//! user always sees an actionable answer. The classification itself is
//! only ever logged.

use crate::{
    domain::{credential::ApiKey, fallback, linker},
    openai::prompt,
    usecases::contracts::CompletionBackend,
};

/// Resolves free user text into a markup-annotated recommendation.
///
/// On success the model's reply is returned verbatim with the
/// department-link fragment appended. On any classified failure the first
/// matching fallback rule (or the generic fallback) supplies the prose and
/// its department list supplies the links.
pub fn resolve(backend: &dyn CompletionBackend, key: &ApiKey, user_text: &str) -> String {
    let system_instruction = prompt::system_instruction(user_text);

    match backend.complete(key, &system_instruction, user_text) {
        Ok(answer) => linker::append_mention_links(&answer),
        Err(error) => {
            tracing::warn!(
                code = error.code(),
                detail = ?error,
                "completion call failed, selecting local fallback"
            );
            fallback_text(user_text)
        }
    }
}

fn fallback_text(user_text: &str) -> String {
    let chosen = fallback::select(user_text);

    format!(
        "{}\n\n{}",
        chosen.response,
        linker::department_links(chosen.departments)
    )
}
