use std::{env, fs, path::PathBuf};

use crate::infra::error::AppError;

const APP_DIR_NAME: &str = "recochat";
const CREDENTIAL_KEY: &str = "openai_api_key";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLayout {
    pub config_dir: PathBuf,
    pub credentials_dir: PathBuf,
}

impl StorageLayout {
    pub fn resolve() -> Result<Self, AppError> {
        let config_base = env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| home_dir().map(|home| home.join(".config")))
            .ok_or_else(|| AppError::StoragePathResolution {
                details: "unable to resolve config base directory (XDG_CONFIG_HOME/HOME)".into(),
            })?;

        let config_dir = config_base.join(APP_DIR_NAME);
        let credentials_dir = config_dir.join("credentials");

        Ok(Self {
            config_dir,
            credentials_dir,
        })
    }

    pub fn ensure_dirs(&self) -> Result<(), AppError> {
        for dir in [&self.config_dir, &self.credentials_dir] {
            fs::create_dir_all(dir).map_err(|source| AppError::StorageDirCreate {
                path: dir.clone(),
                source,
            })?;
        }

        Ok(())
    }

    /// Durable store slot for the bearer credential; the file name is the
    /// fixed store key.
    pub fn credential_file(&self) -> PathBuf {
        self.credentials_dir.join(CREDENTIAL_KEY)
    }

    /// One-time credential delivery drop file, consumed at startup.
    pub fn handoff_file(&self) -> PathBuf {
        self.config_dir.join("credential.handoff")
    }
}

fn home_dir() -> Option<PathBuf> {
    env::var_os("HOME").map(PathBuf::from)
}
