//! Caching layer for resolved search results.
//!
//! Successful live lookups are cached by normalized query so repeated
//! searches don't hit the geocoder. Entries go stale after a fixed TTL;
//! staleness is checked when an entry is read, there is no sweeper task.
//!
//! An optional directory mirrors entries to disk, one file per query, so a
//! restart doesn't throw away recent work.

mod disk;
mod error;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use moka::Expiry;
use moka::future::Cache as MokaCache;
use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::Place;

pub use disk::DiskCache;
pub use error::CacheError;

/// Cached search result.
type Entry = Arc<Vec<Place>>;

/// In-memory value: the places plus how long they may still be served.
#[derive(Debug, Clone)]
struct Slot {
    places: Entry,
    lifetime: Duration,
}

/// Expires each slot after its own lifetime, counted from insertion.
struct SlotExpiry;

impl Expiry<String, Slot> for SlotExpiry {
    fn expire_after_create(&self, _key: &String, slot: &Slot, _created_at: Instant) -> Option<Duration> {
        Some(slot.lifetime)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        slot: &Slot,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(slot.lifetime)
    }
}

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// How long an entry stays fresh.
    pub ttl: Duration,

    /// Maximum number of in-memory entries.
    pub max_capacity: u64,

    /// Directory for durable entries. `None` keeps everything in memory.
    pub dir: Option<PathBuf>,
}

impl CacheConfig {
    /// Enable the durable layer in the given directory.
    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = Some(dir.into());
        self
    }

    /// Set a custom TTL.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(5 * 60),
            max_capacity: 1000,
            dir: None,
        }
    }
}

/// Result of clearing the cache.
#[derive(Debug, Default, Serialize)]
pub struct ClearOutcome {
    /// Durable cache files deleted.
    pub files_removed: usize,
    /// Non-fatal problems met while deleting files.
    pub warnings: Vec<String>,
}

/// Normalize a query into a cache key: trimmed and lower-cased.
pub fn normalize_key(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Search result cache.
pub struct ResolutionCache {
    entries: MokaCache<String, Slot>,
    disk: Option<DiskCache>,
    ttl: Duration,
}

impl ResolutionCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let entries = MokaCache::builder()
            .expire_after(SlotExpiry)
            .max_capacity(config.max_capacity)
            .build();

        Self {
            entries,
            disk: config.dir.as_ref().map(|dir| DiskCache::new(dir, config.ttl)),
            ttl: config.ttl,
        }
    }

    /// Get the places cached for a query, if still fresh.
    ///
    /// Falls back to the durable layer on an in-memory miss; a fresh durable
    /// entry is promoted back into memory for what is left of its TTL.
    pub async fn get(&self, query: &str) -> Option<Entry> {
        let key = normalize_key(query);

        if let Some(hit) = self.entries.get(&key).await {
            return Some(hit.places);
        }

        let disk = self.disk.as_ref()?;
        let (places, remaining) = disk.load(&key).await?;
        debug!(key = %key, ?remaining, "promoting durable cache entry");

        let places = Arc::new(places);
        let slot = Slot {
            places: places.clone(),
            lifetime: remaining,
        };
        self.entries.insert(key, slot).await;
        Some(places)
    }

    /// Cache places for a query, replacing any previous entry.
    ///
    /// Durable write failures are logged and otherwise ignored.
    pub async fn put(&self, query: &str, places: Vec<Place>) {
        let key = normalize_key(query);

        if let Some(disk) = &self.disk
            && let Err(e) = disk.save(&key, &places).await
        {
            warn!(key = %key, error = %e, "failed to write durable cache entry");
        }

        let slot = Slot {
            places: Arc::new(places),
            lifetime: self.ttl,
        };
        self.entries.insert(key, slot).await;
    }

    /// Drop every entry, in memory and on disk.
    pub async fn clear(&self) -> ClearOutcome {
        self.entries.invalidate_all();

        let Some(disk) = &self.disk else {
            return ClearOutcome::default();
        };

        let (files_removed, errors) = disk.clear().await;
        let warnings: Vec<String> = errors.iter().map(ToString::to_string).collect();
        for warning in &warnings {
            warn!(%warning, "durable cache clear incomplete");
        }

        ClearOutcome {
            files_removed,
            warnings,
        }
    }
}
