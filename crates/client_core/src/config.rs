use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::Deserialize;
use shared::{
    domain::{CommitteeCatalog, ResourceKind},
    error::DirectoryError,
};
use tracing::warn;
use url::Url;

use crate::notification::DEFAULT_AUTO_DISMISS;

pub const DEFAULT_CONFIG_FILE: &str = "directory.toml";
const DEFAULT_API_BASE_URL: &str = "https://gurupurnima-be.onrender.com/api";

#[derive(Debug, Clone)]
pub struct Settings {
    pub api_base_url: String,
    pub committees_path: String,
    pub preceptors_path: String,
    pub chairpersons_path: String,
    pub notification_timeout: Duration,
    pub committee_names: Option<Vec<String>>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.into(),
            committees_path: ResourceKind::Committee.default_path().into(),
            preceptors_path: ResourceKind::Preceptor.default_path().into(),
            chairpersons_path: ResourceKind::Chairperson.default_path().into(),
            notification_timeout: DEFAULT_AUTO_DISMISS,
            committee_names: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    api_base_url: Option<String>,
    committees_path: Option<String>,
    preceptors_path: Option<String>,
    chairpersons_path: Option<String>,
    notification_timeout_ms: Option<u64>,
    committee_names: Option<Vec<String>>,
}

impl Settings {
    /// Full collection URL for a resource kind.
    pub fn endpoint(&self, kind: ResourceKind) -> Result<Url, DirectoryError> {
        let path = match kind {
            ResourceKind::Committee => &self.committees_path,
            ResourceKind::Preceptor => &self.preceptors_path,
            ResourceKind::Chairperson => &self.chairpersons_path,
        };
        let mut url = Url::parse(self.api_base_url.trim()).map_err(|err| {
            DirectoryError::config(format!(
                "invalid api base url '{}': {err}",
                self.api_base_url
            ))
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                DirectoryError::config(format!(
                    "api base url '{}' cannot carry a path",
                    self.api_base_url
                ))
            })?
            .pop_if_empty()
            .extend(path.split('/').filter(|segment| !segment.is_empty()));
        Ok(url)
    }

    pub fn committee_catalog(&self) -> CommitteeCatalog {
        match &self.committee_names {
            Some(names) => CommitteeCatalog::new(names.iter().cloned()),
            None => CommitteeCatalog::builtin(),
        }
    }

    fn apply_file(&mut self, raw: &str) -> Result<(), DirectoryError> {
        let file_cfg: FileSettings = toml::from_str(raw)
            .map_err(|err| DirectoryError::config(format!("malformed config file: {err}")))?;

        if let Some(v) = file_cfg.api_base_url {
            self.api_base_url = v;
        }
        if let Some(v) = file_cfg.committees_path {
            self.committees_path = v;
        }
        if let Some(v) = file_cfg.preceptors_path {
            self.preceptors_path = v;
        }
        if let Some(v) = file_cfg.chairpersons_path {
            self.chairpersons_path = v;
        }
        if let Some(v) = file_cfg.notification_timeout_ms {
            self.notification_timeout = Duration::from_millis(v);
        }
        if let Some(names) = file_cfg.committee_names {
            self.committee_names = Some(names);
        }
        Ok(())
    }

    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(v) = lookup("DIRECTORY_API_URL") {
            self.api_base_url = v;
        }
        if let Some(v) = lookup("APP__API_URL") {
            self.api_base_url = v;
        }
        if let Some(v) = lookup("APP__COMMITTEES_PATH") {
            self.committees_path = v;
        }
        if let Some(v) = lookup("APP__PRECEPTORS_PATH") {
            self.preceptors_path = v;
        }
        if let Some(v) = lookup("APP__CHAIRPERSONS_PATH") {
            self.chairpersons_path = v;
        }
        if let Some(v) = lookup("APP__NOTIFICATION_TIMEOUT_MS") {
            match v.parse::<u64>() {
                Ok(parsed) => self.notification_timeout = Duration::from_millis(parsed),
                Err(_) => warn!(value = %v, "ignoring non-numeric APP__NOTIFICATION_TIMEOUT_MS"),
            }
        }
    }
}

/// Defaults, then the config file, then environment overrides.
///
/// An explicit `path` must exist; without one, `directory.toml` in the
/// working directory is read when present.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, DirectoryError> {
    let mut settings = Settings::default();

    let (file, required): (PathBuf, bool) = match path {
        Some(p) => (p.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };

    match fs::read_to_string(&file) {
        Ok(raw) => settings.apply_file(&raw)?,
        Err(err) if required => {
            return Err(DirectoryError::config(format!(
                "failed to read config file '{}': {err}",
                file.display()
            )));
        }
        Err(_) => {}
    }

    settings.apply_env(|key| std::env::var(key).ok());

    settings.endpoint(ResourceKind::Committee)?;
    Ok(settings)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
