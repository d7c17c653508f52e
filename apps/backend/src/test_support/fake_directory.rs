//! In-memory [`TerritoryDirectory`] with call accounting and failure injection.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use parking_lot::Mutex;

use crate::directory::{FetchedAsset, TerritoryDirectory};
use crate::errors::DirectoryError;

const LOCATOR_PREFIX: &str = "fake://silhouettes/";

/// Tracks how many calls are in flight at once.
#[derive(Default)]
struct CallGauge {
    total: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl CallGauge {
    fn enter(&self) {
        self.total.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
    }

    fn exit(&self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

#[derive(Default)]
pub struct FakeDirectory {
    territories: Vec<String>,
    images: HashMap<String, Bytes>,
    statuses: HashMap<String, u16>,
    list_delay: Option<Duration>,
    fetch_delay: Option<Duration>,
    list_failures: Mutex<VecDeque<DirectoryError>>,
    fetch_failures: Mutex<VecDeque<DirectoryError>>,
    lists: CallGauge,
    fetches: CallGauge,
}

impl FakeDirectory {
    pub fn with_territories<I, S>(territories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            territories: territories.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_image(mut self, territory: &str, bytes: impl Into<Bytes>) -> Self {
        self.images.insert(territory.to_string(), bytes.into());
        self
    }

    /// Answer fetches for `territory` with `status` and an empty body.
    pub fn with_status(mut self, territory: &str, status: u16) -> Self {
        self.statuses.insert(territory.to_string(), status);
        self
    }

    pub fn with_list_delay(mut self, delay: Duration) -> Self {
        self.list_delay = Some(delay);
        self
    }

    pub fn with_fetch_delay(mut self, delay: Duration) -> Self {
        self.fetch_delay = Some(delay);
        self
    }

    /// Make the next `times` list calls fail with `err`.
    pub fn fail_next_lists(&self, times: usize, err: DirectoryError) {
        self.list_failures
            .lock()
            .extend(std::iter::repeat(err).take(times));
    }

    /// Make the next `times` byte fetches fail with `err`.
    pub fn fail_next_fetches(&self, times: usize, err: DirectoryError) {
        self.fetch_failures
            .lock()
            .extend(std::iter::repeat(err).take(times));
    }

    pub fn list_calls(&self) -> usize {
        self.lists.total.load(Ordering::SeqCst)
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetches.total.load(Ordering::SeqCst)
    }

    pub fn max_concurrent_lists(&self) -> usize {
        self.lists.max_in_flight.load(Ordering::SeqCst)
    }

    pub fn max_concurrent_fetches(&self) -> usize {
        self.fetches.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TerritoryDirectory for FakeDirectory {
    async fn list_territory_identifiers(&self) -> Result<Vec<String>, DirectoryError> {
        self.lists.enter();
        if let Some(delay) = self.list_delay {
            tokio::time::sleep(delay).await;
        }
        let failure = self.list_failures.lock().pop_front();
        self.lists.exit();

        match failure {
            Some(err) => Err(err),
            None => Ok(self.territories.clone()),
        }
    }

    fn resolve_image_location(&self, identifier: &str) -> Result<String, DirectoryError> {
        Ok(format!("{LOCATOR_PREFIX}{identifier}.png"))
    }

    async fn fetch_bytes_at(&self, locator: &str) -> Result<FetchedAsset, DirectoryError> {
        self.fetches.enter();
        if let Some(delay) = self.fetch_delay {
            tokio::time::sleep(delay).await;
        }
        let failure = self.fetch_failures.lock().pop_front();
        self.fetches.exit();

        if let Some(err) = failure {
            return Err(err);
        }

        let territory = locator
            .strip_prefix(LOCATOR_PREFIX)
            .and_then(|rest| rest.strip_suffix(".png"))
            .unwrap_or_default();

        let asset = match (self.images.get(territory), self.statuses.get(territory)) {
            (_, Some(&status)) => FetchedAsset {
                status,
                body: Bytes::new(),
            },
            (Some(body), None) => FetchedAsset {
                status: 200,
                body: body.clone(),
            },
            (None, None) => FetchedAsset {
                status: 404,
                body: Bytes::new(),
            },
        };
        Ok(asset)
    }
}
