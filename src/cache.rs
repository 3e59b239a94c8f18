//! In-memory cache for analysis results.
//!
//! Results are keyed by a SHA-256 fingerprint of the filename and content,
//! so a repeated request is served without re-running the analyzers. The
//! cache belongs to the [`Runner`](crate::runner::Runner); `analyze` itself
//! never sees it.

use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

use crate::runner::AnalysisResult;

/// Bounded, TTL-limited result cache.
pub struct AnalysisCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    capacity: usize,
    ttl: Duration,
}

#[derive(Debug, Clone)]
struct CacheEntry {
    result: AnalysisResult,
    stored_at: Instant,
}

impl AnalysisCache {
    /// Create a cache holding at most `capacity` results for `ttl` each.
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            capacity,
            ttl,
        }
    }

    /// Fingerprint of a request: hex SHA-256 over filename and content.
    ///
    /// A NUL byte separates the two parts so that moving text between them
    /// changes the key.
    pub fn fingerprint(filename: Option<&str>, content: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(filename.unwrap_or("").as_bytes());
        hasher.update([0u8]);
        hasher.update(content.as_bytes());
        hasher
            .finalize()
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect()
    }

    /// Get a cached result if present and not expired.
    pub fn get(&self, key: &str) -> Option<AnalysisResult> {
        let entries = self.entries.read().ok()?;
        let entry = entries.get(key)?;
        if entry.stored_at.elapsed() < self.ttl {
            log::debug!("cache hit {}", &key[..key.len().min(12)]);
            Some(entry.result.clone())
        } else {
            log::debug!("cache entry expired {}", &key[..key.len().min(12)]);
            None
        }
    }

    /// Store a result, evicting the oldest entries beyond capacity.
    pub fn set(&self, key: String, result: AnalysisResult) {
        if self.capacity == 0 {
            return;
        }
        let Ok(mut entries) = self.entries.write() else {
            return;
        };

        entries.insert(
            key,
            CacheEntry {
                result,
                stored_at: Instant::now(),
            },
        );

        while entries.len() > self.capacity {
            let oldest = entries
                .iter()
                .min_by_key(|(_, e)| e.stored_at)
                .map(|(k, _)| k.clone());
            match oldest {
                Some(k) => {
                    log::debug!("cache evicting {}", &k[..k.len().min(12)]);
                    entries.remove(&k);
                }
                None => break,
            }
        }
    }

    /// Number of stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
