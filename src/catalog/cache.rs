//! Disk-backed catalog cache with a 24-hour TTL.
//!
//! The cache file is a single JSON document replaced wholesale on every
//! write. All failures here are downgraded to a cache miss or a skipped
//! write; nothing propagates past this module.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use super::ModelDescriptor;

/// How long a persisted snapshot stays valid, in milliseconds.
pub const CACHE_TTL_MS: i64 = 24 * 60 * 60 * 1000;

/// A captured catalog plus its capture instant (epoch milliseconds).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    /// The ordered model list at capture time.
    pub models: Vec<ModelDescriptor>,
    /// Capture instant, epoch milliseconds.
    pub timestamp: i64,
}

/// Failure reading or writing the persisted cache file.
///
/// Internal to the catalog: callers only ever observe a cache miss.
#[derive(Debug, Error)]
pub enum CacheError {
    /// The cache file could not be read or written.
    #[error("cache I/O failed at {path}")]
    Io {
        /// Path of the cache file involved.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The cache file exists but does not parse as a snapshot.
    #[error("malformed cache file at {path}")]
    Malformed {
        /// Path of the cache file involved.
        path: String,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },
}

/// Load the persisted snapshot if it exists, parses, and is younger than
/// [`CACHE_TTL_MS`] relative to `now_ms`.
///
/// Parse and I/O failures are logged and treated as a miss.
pub fn load(path: &Path, now_ms: i64) -> Option<CatalogSnapshot> {
    if !path.exists() {
        return None;
    }

    let snapshot = match try_load(path) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            warn!("failed to load model cache: {err:#}");
            return None;
        }
    };

    if now_ms - snapshot.timestamp >= CACHE_TTL_MS {
        debug!("model cache expired, ignoring");
        return None;
    }

    Some(snapshot)
}

fn try_load(path: &Path) -> Result<CatalogSnapshot, CacheError> {
    let contents = fs::read_to_string(path).map_err(|source| CacheError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| CacheError::Malformed {
        path: path.display().to_string(),
        source,
    })
}

/// Best-effort write of `snapshot`; failure is logged, never propagated.
pub fn persist(path: &Path, snapshot: &CatalogSnapshot) {
    if let Err(err) = try_persist(path, snapshot) {
        warn!("failed to save model cache: {err:#}");
    }
}

fn try_persist(path: &Path, snapshot: &CatalogSnapshot) -> Result<(), CacheError> {
    let io_err = |source| CacheError::Io {
        path: path.display().to_string(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    let contents = serde_json::to_string_pretty(snapshot).map_err(|source| CacheError::Malformed {
        path: path.display().to_string(),
        source,
    })?;
    fs::write(path, contents).map_err(io_err)
}

/// Best-effort delete of the cache file. A missing file is not an error.
pub fn invalidate(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => debug!("model cache cleared"),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => warn!("failed to clear model cache: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Pricing;
    use tempfile::TempDir;

    fn snapshot(timestamp: i64) -> CatalogSnapshot {
        CatalogSnapshot {
            models: vec![ModelDescriptor {
                id: "vendor/model".to_string(),
                name: "Model".to_string(),
                description: None,
                context_length: Some(8192),
                pricing: Some(Pricing {
                    prompt: "0.001".to_string(),
                    completion: "0.002".to_string(),
                }),
                supported_parameters: None,
            }],
            timestamp,
        }
    }

    #[test]
    fn test_roundtrip_within_ttl() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new()?;
        let path = dir.path().join("models-cache.json");
        let now = 1_000_000_000;

        persist(&path, &snapshot(now));
        let loaded = load(&path, now + CACHE_TTL_MS - 1);

        assert_eq!(loaded, Some(snapshot(now)));
        Ok(())
    }

    #[test]
    fn test_load_misses_at_exact_ttl() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new()?;
        let path = dir.path().join("models-cache.json");
        let now = 1_000_000_000;

        persist(&path, &snapshot(now));

        assert!(load(&path, now + CACHE_TTL_MS).is_none());
        assert!(load(&path, now + CACHE_TTL_MS + 1).is_none());
        Ok(())
    }

    #[test]
    fn test_load_misses_on_absent_file() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new()?;
        assert!(load(&dir.path().join("missing.json"), 0).is_none());
        Ok(())
    }

    #[test]
    fn test_load_misses_on_garbage() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new()?;
        let path = dir.path().join("models-cache.json");
        fs::write(&path, "not json at all")?;

        assert!(load(&path, 0).is_none());
        Ok(())
    }

    #[test]
    fn test_persist_creates_parent_dirs() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new()?;
        let path = dir.path().join("nested").join("dir").join("cache.json");

        persist(&path, &snapshot(42));

        assert!(path.exists());
        Ok(())
    }

    #[test]
    fn test_invalidate_removes_file_and_tolerates_absence() -> Result<(), Box<dyn std::error::Error>>
    {
        let dir = TempDir::new()?;
        let path = dir.path().join("models-cache.json");
        persist(&path, &snapshot(0));
        assert!(path.exists());

        invalidate(&path);
        assert!(!path.exists());

        // Second delete is a no-op.
        invalidate(&path);
        Ok(())
    }

    #[test]
    fn test_cache_document_shape() -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_value(snapshot(7))?;
        assert!(json.get("models").is_some_and(serde_json::Value::is_array));
        assert_eq!(
            json.get("timestamp").and_then(serde_json::Value::as_i64),
            Some(7)
        );
        Ok(())
    }
}
