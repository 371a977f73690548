//! Disk-based cache for resolved places.
//!
//! One JSON file per normalized query. Files carry their own write
//! timestamp so staleness survives restarts.

use std::path::PathBuf;
use std::time::Duration;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::domain::Place;

use super::error::CacheError;

/// Longest file stem we will write; longer keys are kept in memory only.
const MAX_STEM_LEN: usize = 200;

/// Cached places with metadata.
#[derive(Debug, Serialize, Deserialize)]
struct CachedPlaces {
    /// Unix timestamp in milliseconds when the entry was written.
    cached_at_ms: i64,
    /// Original normalized key, for debugging.
    key: String,
    places: Vec<Place>,
}

/// Per-query file cache in a single directory.
#[derive(Debug, Clone)]
pub struct DiskCache {
    dir: PathBuf,
    ttl: Duration,
}

impl DiskCache {
    pub fn new(dir: impl Into<PathBuf>, ttl: Duration) -> Self {
        Self {
            dir: dir.into(),
            ttl,
        }
    }

    /// File path for a key, or `None` if the key is too long to store.
    fn path_for(&self, key: &str) -> Option<PathBuf> {
        let stem = URL_SAFE_NO_PAD.encode(key.as_bytes());
        if stem.len() > MAX_STEM_LEN {
            return None;
        }
        Some(self.dir.join(format!("{stem}.json")))
    }

    /// Try to load places for a key, with the time they stay fresh.
    ///
    /// Returns `None` if the file doesn't exist, is invalid, or has expired.
    pub async fn load(&self, key: &str) -> Option<(Vec<Place>, Duration)> {
        let path = self.path_for(key)?;
        let contents = tokio::fs::read_to_string(&path).await.ok()?;
        let cached: CachedPlaces = serde_json::from_str(&contents).ok()?;

        let age_ms = Utc::now().timestamp_millis().saturating_sub(cached.cached_at_ms);
        let ttl_ms = i64::try_from(self.ttl.as_millis()).unwrap_or(i64::MAX);
        if age_ms < 0 || age_ms >= ttl_ms {
            return None;
        }

        let remaining = Duration::from_millis(u64::try_from(ttl_ms - age_ms).ok()?);
        Some((cached.places, remaining))
    }

    /// Write places for a key.
    ///
    /// Creates the directory if it doesn't exist. Keys too long for a file
    /// name are skipped silently.
    pub async fn save(&self, key: &str, places: &[Place]) -> Result<(), CacheError> {
        let Some(path) = self.path_for(key) else {
            return Ok(());
        };

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|source| CacheError::Io {
                path: self.dir.clone(),
                source,
            })?;

        let cached = CachedPlaces {
            cached_at_ms: Utc::now().timestamp_millis(),
            key: key.to_string(),
            places: places.to_vec(),
        };
        let json = serde_json::to_string(&cached)?;

        tokio::fs::write(&path, json)
            .await
            .map_err(|source| CacheError::Io { path, source })
    }

    /// Delete every cache file in the directory.
    ///
    /// Returns how many files were removed and the failures met along the
    /// way. A missing directory counts as already clear.
    pub async fn clear(&self) -> (usize, Vec<CacheError>) {
        let mut removed = 0;
        let mut errors = Vec::new();

        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return (0, errors),
            Err(source) => {
                errors.push(CacheError::Io {
                    path: self.dir.clone(),
                    source,
                });
                return (0, errors);
            }
        };

        loop {
            let entry = match entries.next_entry().await {
                Ok(Some(entry)) => entry,
                Ok(None) => break,
                Err(source) => {
                    errors.push(CacheError::Io {
                        path: self.dir.clone(),
                        source,
                    });
                    break;
                }
            };

            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            match tokio::fs::remove_file(&path).await {
                Ok(()) => removed += 1,
                Err(source) => errors.push(CacheError::Io { path, source }),
            }
        }

        (removed, errors)
    }
}
