//! File-backed adapters for the credential store and handoff ports.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::usecases::contracts::{CredentialHandoff, CredentialStore};

/// Durable credential store: one file holding the token, named after the
/// fixed store key.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CredentialStore for FileCredentialStore {
    fn load(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => {
                let value = raw.trim_end_matches('\n');
                if value.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(value.to_owned()))
                }
            }
            Err(source) if source.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(source)
                .with_context(|| format!("reading credential file {}", self.path.display())),
        }
    }

    fn save(&mut self, value: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating credential dir {}", parent.display()))?;
        }

        fs::write(&self.path, value)
            .with_context(|| format!("writing credential file {}", self.path.display()))?;
        restrict_permissions(&self.path)?;

        Ok(())
    }

    fn clear(&mut self) -> Result<bool> {
        remove_if_exists(&self.path)
    }
}

/// One-time delivery drop file. An installer or launcher may leave the
/// credential here; bootstrap persists it through the gate and scrubs the
/// file so the token is not observably retained in the channel.
#[derive(Debug, Clone)]
pub struct FileCredentialHandoff {
    path: PathBuf,
}

impl FileCredentialHandoff {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl CredentialHandoff for FileCredentialHandoff {
    fn peek(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => {
                let value = raw.trim();
                if value.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(value.to_owned()))
                }
            }
            Err(source) if source.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => {
                Err(source).with_context(|| format!("reading handoff file {}", self.path.display()))
            }
        }
    }

    fn scrub(&mut self) -> Result<()> {
        remove_if_exists(&self.path)?;
        Ok(())
    }
}

fn remove_if_exists(path: &Path) -> Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(source) if source.kind() == ErrorKind::NotFound => Ok(false),
        Err(source) => Err(source).with_context(|| format!("removing {}", path.display())),
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o600))
        .with_context(|| format!("restricting permissions on {}", path.display()))
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const VALID_KEY: &str = "sk-abcdefghijklmnopqrstuvwx";

    #[test]
    fn load_returns_none_when_file_is_missing() {
        let dir = tempdir().expect("temp dir");
        let store = FileCredentialStore::new(dir.path().join("openai_api_key"));

        assert_eq!(store.load().expect("load should succeed"), None);
    }

    #[test]
    fn save_then_load_round_trips_the_token() {
        let dir = tempdir().expect("temp dir");
        let mut store = FileCredentialStore::new(dir.path().join("openai_api_key"));

        store.save(VALID_KEY).expect("save should succeed");

        assert_eq!(store.load().expect("load should succeed"), Some(VALID_KEY.to_owned()));
    }

    #[test]
    fn save_creates_missing_parent_dirs() {
        let dir = tempdir().expect("temp dir");
        let mut store = FileCredentialStore::new(dir.path().join("credentials/openai_api_key"));

        store.save(VALID_KEY).expect("save should succeed");

        assert!(store.path().exists());
    }

    #[test]
    fn save_replaces_previous_value_wholesale() {
        let dir = tempdir().expect("temp dir");
        let mut store = FileCredentialStore::new(dir.path().join("openai_api_key"));

        store.save("sk-old-aaaaaaaaaaaaaaaaaaaa").expect("first save");
        store.save(VALID_KEY).expect("second save");

        assert_eq!(store.load().expect("load should succeed"), Some(VALID_KEY.to_owned()));
    }

    #[cfg(unix)]
    #[test]
    fn saved_credential_is_owner_readable_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().expect("temp dir");
        let mut store = FileCredentialStore::new(dir.path().join("openai_api_key"));
        store.save(VALID_KEY).expect("save should succeed");

        let mode = fs::metadata(store.path()).expect("metadata").permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn clear_is_idempotent() {
        let dir = tempdir().expect("temp dir");
        let mut store = FileCredentialStore::new(dir.path().join("openai_api_key"));
        store.save(VALID_KEY).expect("save should succeed");

        assert!(store.clear().expect("first clear"));
        assert!(!store.clear().expect("second clear"));
        assert_eq!(store.load().expect("load should succeed"), None);
    }

    #[test]
    fn handoff_peek_returns_none_for_missing_or_empty_file() {
        let dir = tempdir().expect("temp dir");
        let missing = FileCredentialHandoff::new(dir.path().join("credential.handoff"));
        assert_eq!(missing.peek().expect("peek should succeed"), None);

        let empty_path = dir.path().join("empty.handoff");
        fs::write(&empty_path, "\n").expect("write empty file");
        let empty = FileCredentialHandoff::new(empty_path);
        assert_eq!(empty.peek().expect("peek should succeed"), None);
    }

    #[test]
    fn handoff_scrub_removes_the_drop_file() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("credential.handoff");
        fs::write(&path, VALID_KEY).expect("write handoff");
        let mut handoff = FileCredentialHandoff::new(path.clone());

        assert_eq!(handoff.peek().expect("peek should succeed"), Some(VALID_KEY.to_owned()));
        handoff.scrub().expect("scrub should succeed");
        assert!(!path.exists());
    }
}
