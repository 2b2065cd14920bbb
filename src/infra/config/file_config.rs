use serde::Deserialize;

use crate::infra::config::{AppConfig, LogConfig, OpenAiConfig};

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub openai: Option<FileOpenAiConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(openai) = self.openai {
            openai.merge_into(&mut config.openai);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileOpenAiConfig {
    pub api_url: Option<String>,
    pub model: Option<String>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
    pub request_timeout_ms: Option<u64>,
}

impl FileOpenAiConfig {
    fn merge_into(self, config: &mut OpenAiConfig) {
        if let Some(api_url) = self.api_url {
            config.api_url = api_url;
        }

        if let Some(model) = self.model {
            config.model = model;
        }

        if let Some(max_tokens) = self.max_tokens {
            config.max_tokens = max_tokens;
        }

        if let Some(temperature) = self.temperature {
            config.temperature = temperature;
        }

        if let Some(timeout_ms) = self.request_timeout_ms {
            config.request_timeout_ms = timeout_ms;
        }
    }
}
