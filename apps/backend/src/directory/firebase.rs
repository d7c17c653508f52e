//! Firebase Storage implementation of [`TerritoryDirectory`].
//!
//! Territories are the `.png` objects under the configured prefix
//! (`silhouettes/brazil.png` → `brazil`). Listing goes through the Storage
//! REST API and follows `nextPageToken` until the listing is exhausted.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Deserialize;
use tracing::{debug, info, warn};

use super::{FetchedAsset, TerritoryDirectory};
use crate::config::storage::StorageConfig;
use crate::errors::DirectoryError;

/// Characters left unescaped in an object name path segment.
const OBJECT_NAME: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

const IMAGE_SUFFIX: &str = ".png";

#[derive(Debug, Deserialize)]
struct ListResponse {
    #[serde(default)]
    items: Vec<ListItem>,
    #[serde(rename = "nextPageToken")]
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ListItem {
    name: String,
}

pub struct FirebaseDirectory {
    client: reqwest::Client,
    storage: Result<StorageConfig, DirectoryError>,
}

impl FirebaseDirectory {
    pub fn new(client: reqwest::Client, storage: StorageConfig) -> Self {
        Self {
            client,
            storage: Ok(storage),
        }
    }

    /// Build from the environment.
    ///
    /// A missing configuration does not fail construction; it is reported
    /// as `DirectoryError::Config` from every call instead.
    pub fn from_env(client: reqwest::Client) -> Self {
        let storage = StorageConfig::from_env();
        match &storage {
            Ok(cfg) => info!(bucket = %cfg.bucket, "Firebase storage config loaded"),
            Err(e) => warn!(error = %e, "Firebase storage is not configured"),
        }
        Self { client, storage }
    }

    fn storage(&self) -> Result<&StorageConfig, DirectoryError> {
        self.storage.as_ref().map_err(Clone::clone)
    }

    fn authorize(&self, req: reqwest::RequestBuilder, cfg: &StorageConfig) -> reqwest::RequestBuilder {
        match &cfg.access_token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn list_page(
        &self,
        cfg: &StorageConfig,
        page_token: Option<&str>,
    ) -> Result<ListResponse, DirectoryError> {
        let url = format!("{}/v0/b/{}/o", cfg.base_url, cfg.bucket);
        let mut query = vec![("prefix", cfg.prefix.as_str())];
        if let Some(token) = page_token {
            query.push(("pageToken", token));
        }

        let response = self
            .authorize(self.client.get(&url).query(&query), cfg)
            .send()
            .await
            .map_err(|e| DirectoryError::Store(format!("error listing objects: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryError::Store(format!(
                "listing objects returned status {}",
                status.as_u16()
            )));
        }

        response
            .json::<ListResponse>()
            .await
            .map_err(|e| DirectoryError::Store(format!("error decoding object listing: {e}")))
    }
}

#[async_trait]
impl TerritoryDirectory for FirebaseDirectory {
    async fn list_territory_identifiers(&self) -> Result<Vec<String>, DirectoryError> {
        let cfg = self.storage()?;
        info!(prefix = %cfg.prefix, "Listing silhouette objects");

        let mut territories = Vec::new();
        let mut file_count = 0usize;
        let mut page_token: Option<String> = None;

        loop {
            let page = self.list_page(cfg, page_token.as_deref()).await?;
            for item in page.items {
                file_count += 1;
                let Some(territory) = item
                    .name
                    .strip_prefix(cfg.prefix.as_str())
                    .and_then(|name| name.strip_suffix(IMAGE_SUFFIX))
                else {
                    debug!(name = %item.name, "Skipping non-silhouette object");
                    continue;
                };
                if territory.is_empty() {
                    continue;
                }
                territories.push(territory.to_string());
            }

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        if territories.is_empty() {
            return Err(DirectoryError::Store(
                "no territories found in Firebase Storage".into(),
            ));
        }

        info!(
            files = file_count,
            territories = territories.len(),
            "Finished listing silhouette objects"
        );
        Ok(territories)
    }

    fn resolve_image_location(&self, identifier: &str) -> Result<String, DirectoryError> {
        let cfg = self.storage()?;
        let object = format!("{}{identifier}{IMAGE_SUFFIX}", cfg.prefix);
        Ok(format!(
            "{}/v0/b/{}/o/{}?alt=media",
            cfg.base_url,
            cfg.bucket,
            utf8_percent_encode(&object, OBJECT_NAME)
        ))
    }

    async fn fetch_bytes_at(&self, locator: &str) -> Result<FetchedAsset, DirectoryError> {
        let mut req = self.client.get(locator);
        if let Ok(cfg) = self.storage() {
            req = self.authorize(req, cfg);
        }

        let response = req
            .send()
            .await
            .map_err(|e| DirectoryError::Transport(format!("request to {locator} failed: {e}")))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| DirectoryError::Transport(format!("reading body from {locator} failed: {e}")))?;

        Ok(FetchedAsset { status, body })
    }
}
