use crate::{
    infra::{config::AppConfig, keystore::FileCredentialStore},
    openai::OpenAiBackend,
};

#[derive(Debug)]
pub struct AppContext {
    pub config: AppConfig,
    pub store: FileCredentialStore,
    pub backend: OpenAiBackend,
}

impl AppContext {
    pub fn new(config: AppConfig, store: FileCredentialStore, backend: OpenAiBackend) -> Self {
        Self {
            config,
            store,
            backend,
        }
    }
}
