use std::path::Path;

use crate::{
    infra::{
        self,
        config::FileConfigAdapter,
        contracts::ConfigAdapter,
        error::AppError,
        keystore::{FileCredentialHandoff, FileCredentialStore},
        storage_layout::StorageLayout,
    },
    openai::OpenAiBackend,
    usecases::{context::AppContext, credential_gate},
};

pub fn bootstrap(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let mut context = build_context(config_path)?;
    infra::logging::init(&context.config.logging)?;

    seed_credential(&mut context);
    Ok(context)
}

fn build_context(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let config_adapter = FileConfigAdapter::new(config_path);
    let config = config_adapter.load().map_err(AppError::Other)?;

    let layout = StorageLayout::resolve()?;
    layout.ensure_dirs()?;

    let store = FileCredentialStore::new(layout.credential_file());
    let backend = OpenAiBackend::new(config.openai.clone())?;

    Ok(AppContext::new(config, store, backend))
}

fn seed_credential(context: &mut AppContext) {
    let handoff_path = match StorageLayout::resolve() {
        Ok(layout) => layout.handoff_file(),
        Err(error) => {
            tracing::warn!(error = ?error, "handoff skipped: storage layout unavailable");
            return;
        }
    };

    let mut handoff = FileCredentialHandoff::new(handoff_path);
    credential_gate::seed_from_handoff(&mut context.store, &mut handoff);
}
