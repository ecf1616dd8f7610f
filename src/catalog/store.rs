//! Catalog orchestration: cache, then remote, then built-in defaults.

use std::path::PathBuf;

use chrono::Utc;
use tracing::{info, warn};

use super::{CatalogFilter, CatalogSnapshot, ModelDescriptor, cache, defaults, fetch, rank};
use crate::paths;

/// Where a returned catalog came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSource {
    /// Served from a valid persisted snapshot.
    Cache,
    /// Freshly fetched from the remote endpoint.
    Remote,
    /// The built-in fallback list; both cache and remote were unavailable.
    Default,
}

/// A ranked, filtered catalog tagged with its provenance.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Models in canonical order, after filtering.
    pub models: Vec<ModelDescriptor>,
    /// Which fallback tier produced this list.
    pub source: CatalogSource,
}

/// Produces ordered, filtered model catalogs while minimizing network calls.
///
/// Availability beats freshness here: [`CatalogStore::get_catalog`] always
/// returns a usable list, degrading from cache to remote to the built-in
/// defaults.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    cache_path: PathBuf,
    endpoint: String,
    api_key: Option<String>,
}

impl CatalogStore {
    /// Store with the default cache location, endpoint, and the API key from
    /// `OPENROUTER_API_KEY` when set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache_path: paths::cache_path(),
            endpoint: fetch::MODELS_URL.to_string(),
            api_key: std::env::var("OPENROUTER_API_KEY").ok(),
        }
    }

    /// Store with explicit cache path, endpoint, and credential.
    ///
    /// Used by tests to isolate state; behavior is otherwise identical to
    /// [`CatalogStore::new`].
    #[must_use]
    pub fn with_endpoint(cache_path: PathBuf, endpoint: String, api_key: Option<String>) -> Self {
        Self {
            cache_path,
            endpoint,
            api_key,
        }
    }

    /// Produce the current catalog, ranked and filtered. Never fails.
    ///
    /// Cache hit wins; otherwise the remote endpoint is fetched and the
    /// ranked result persisted; on any fetch failure the built-in default
    /// list is used instead.
    #[must_use]
    pub fn get_catalog(&self, filter: CatalogFilter) -> Catalog {
        let now_ms = Utc::now().timestamp_millis();

        let (mut models, source) = match cache::load(&self.cache_path, now_ms) {
            Some(snapshot) => (snapshot.models, CatalogSource::Cache),
            None => match fetch::fetch_models(&self.endpoint, self.api_key.as_deref()) {
                Ok(models) => (models, CatalogSource::Remote),
                Err(err) => {
                    warn!("falling back to built-in model list: {err:#}");
                    (defaults::default_models(), CatalogSource::Default)
                }
            },
        };

        rank::rank(&mut models);

        if source == CatalogSource::Remote {
            info!(count = models.len(), "fetched model catalog");
            cache::persist(
                &self.cache_path,
                &CatalogSnapshot {
                    models: models.clone(),
                    timestamp: now_ms,
                },
            );
        }

        models.retain(|m| filter.accepts(m));
        Catalog { models, source }
    }

    /// Delete the persisted cache so the next call refetches.
    pub fn invalidate(&self) {
        cache::invalidate(&self.cache_path);
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}
