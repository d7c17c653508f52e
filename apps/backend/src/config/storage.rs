//! Firebase Storage settings for the silhouette bucket.
//!
//! Read from the environment:
//! - `FIREBASE_PROJECT_ID` (required): bucket is `<project>.firebasestorage.app`
//! - `FIREBASE_STORAGE_BASE_URL` (optional): REST endpoint, for emulators and tests
//! - `FIREBASE_ACCESS_TOKEN` (optional): bearer token sent with every request
//! - `SILHOUETTE_PREFIX` (optional): object-name prefix of the silhouette images

use std::env;

use crate::errors::DirectoryError;

pub const DEFAULT_BASE_URL: &str = "https://firebasestorage.googleapis.com";
pub const DEFAULT_PREFIX: &str = "silhouettes/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub bucket: String,
    pub base_url: String,
    pub prefix: String,
    pub access_token: Option<String>,
}

impl StorageConfig {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            bucket: format!("{}.firebasestorage.app", project_id.into()),
            base_url: DEFAULT_BASE_URL.to_string(),
            prefix: DEFAULT_PREFIX.to_string(),
            access_token: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn from_env() -> Result<Self, DirectoryError> {
        let project_id = env::var("FIREBASE_PROJECT_ID")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                DirectoryError::Config("missing FIREBASE_PROJECT_ID environment variable".into())
            })?;

        let mut cfg = Self::new(project_id);
        if let Some(base_url) = non_empty_var("FIREBASE_STORAGE_BASE_URL") {
            cfg = cfg.with_base_url(base_url);
        }
        if let Some(prefix) = non_empty_var("SILHOUETTE_PREFIX") {
            cfg = cfg.with_prefix(prefix);
        }
        if let Some(token) = non_empty_var("FIREBASE_ACCESS_TOKEN") {
            cfg = cfg.with_access_token(token);
        }
        Ok(cfg)
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
