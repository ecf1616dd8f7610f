//! modelpick - interactive picker for the OpenRouter model catalog
//!
//! Two components: a catalog store (remote fetch, 24h disk cache,
//! deterministic ranking, capability filters) and a selector engine
//! (incremental search, windowed scrolling, keyboard-driven commit or
//! cancel). The store never fails outward; the picker always has a list to
//! offer.

pub mod catalog;
pub mod paths;
pub mod selector;
pub mod tui;

pub use catalog::{Catalog, CatalogFilter, CatalogSource, CatalogStore, ModelDescriptor};
pub use selector::{Outcome, SelectorEvent, SelectorState};
