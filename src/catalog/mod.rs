//! Model catalog: remote fetch, disk cache, ranking and filtering.
//!
//! The catalog is sourced from the OpenRouter models endpoint, cached on disk
//! for 24 hours, and falls back to a built-in list when both the cache and the
//! network are unavailable. [`CatalogStore::get_catalog`] never fails outward;
//! every failure degrades to stale or default data.

mod cache;
mod defaults;
mod fetch;
mod rank;
mod store;

pub use cache::{CACHE_TTL_MS, CacheError, CatalogSnapshot};
pub use defaults::default_models;
pub use fetch::{FetchError, MODELS_URL};
pub use rank::{POPULAR_MODELS, rank};
pub use store::{Catalog, CatalogSource, CatalogStore};

use serde::{Deserialize, Serialize};

/// Per-token pricing for a model, as decimal strings from the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pricing {
    /// Prompt-token cost, price per token.
    pub prompt: String,
    /// Completion-token cost, price per token.
    pub completion: String,
}

/// One selectable model from the catalog.
///
/// The `id` is the stable, vendor-qualified key; everything else is read-only
/// display metadata. Unknown fields in the source JSON are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    /// Stable identifier, e.g. `anthropic/claude-3.5-sonnet`.
    pub id: String,
    /// Human-readable display name.
    pub name: String,
    /// Optional free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Token window size, when the API reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_length: Option<u64>,
    /// Per-token pricing, when the API reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing: Option<Pricing>,
    /// Supported-parameter tags; membership of `"tools"` marks tool support.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supported_parameters: Option<Vec<String>>,
}

impl ModelDescriptor {
    /// Whether this model accepts structured tool/function-call parameters.
    #[must_use]
    pub fn supports_tools(&self) -> bool {
        self.supported_parameters
            .as_ref()
            .is_some_and(|params| params.iter().any(|p| p == "tools"))
    }

    /// Case-insensitive substring match against name, id, or description.
    ///
    /// `needle` must already be lowercased. An empty needle matches everything.
    #[must_use]
    pub fn matches(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(needle)
            || self.id.to_lowercase().contains(needle)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(needle))
    }

    /// One-line summary: name, context size, pricing, tool marker.
    #[must_use]
    pub fn summary(&self) -> String {
        let context = self
            .context_length
            .map(|len| format!(" ({}k context)", len / 1000))
            .unwrap_or_default();
        let pricing = self
            .pricing
            .as_ref()
            .map(|p| format!(" - ${}/${}", p.prompt, p.completion))
            .unwrap_or_default();
        let tools = if self.supports_tools() { " [Tools]" } else { "" };
        format!("{}{context}{pricing}{tools}", self.name)
    }

    /// Pricing rendered as dollars per million tokens, or `None` without
    /// pricing data.
    #[must_use]
    pub fn cost_info(&self) -> Option<String> {
        let pricing = self.pricing.as_ref()?;
        let prompt = pricing.prompt.parse::<f64>().unwrap_or(0.0) * 1000.0;
        let completion = pricing.completion.parse::<f64>().unwrap_or(0.0) * 1000.0;
        Some(format!(
            "{}/{} per 1M tokens",
            format_cost(prompt),
            format_cost(completion)
        ))
    }
}

/// Format a per-million cost with precision scaled to its magnitude.
fn format_cost(cost: f64) -> String {
    if cost >= 100.0 {
        format!("${cost:.0}")
    } else if cost >= 10.0 {
        format!("${cost:.1}")
    } else if cost >= 1.0 {
        format!("${cost:.2}")
    } else {
        format!("${cost:.3}")
    }
}

/// Capability filter applied to the ranked catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogFilter {
    /// No filtering.
    #[default]
    All,
    /// Only models that support tool calling.
    ToolsOnly,
    /// Only models that do not support tool calling.
    NoTools,
}

impl CatalogFilter {
    /// Whether `model` passes this filter.
    #[must_use]
    pub fn accepts(self, model: &ModelDescriptor) -> bool {
        match self {
            Self::All => true,
            Self::ToolsOnly => model.supports_tools(),
            Self::NoTools => !model.supports_tools(),
        }
    }

    /// Title shown above the selector for this filter mode.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::All => " Select Model ",
            Self::ToolsOnly => " Select Model (tools) ",
            Self::NoTools => " Select Model (no tools) ",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn model(id: &str, params: Option<&[&str]>) -> ModelDescriptor {
        ModelDescriptor {
            id: id.to_string(),
            name: id.to_string(),
            description: None,
            context_length: None,
            pricing: None,
            supported_parameters: params
                .map(|p| p.iter().map(std::string::ToString::to_string).collect()),
        }
    }

    #[test]
    fn test_supports_tools() {
        assert!(model("a", Some(&["tools", "temperature"])).supports_tools());
        assert!(!model("b", Some(&["temperature"])).supports_tools());
        assert!(!model("c", None).supports_tools());
    }

    #[test]
    fn test_matches_name_id_description() {
        let mut m = model("vendor/alpha-1", None);
        m.name = "Alpha One".to_string();
        m.description = Some("Fast general model".to_string());

        assert!(m.matches("alpha"));
        assert!(m.matches("vendor/"));
        assert!(m.matches("general"));
        assert!(m.matches(""));
        assert!(!m.matches("beta"));
    }

    #[test]
    fn test_filter_partitions_catalog() {
        let models = vec![
            model("a", Some(&["tools"])),
            model("b", None),
            model("c", Some(&["tools"])),
            model("d", Some(&[])),
        ];

        let with: Vec<_> = models
            .iter()
            .filter(|m| CatalogFilter::ToolsOnly.accepts(m))
            .collect();
        let without: Vec<_> = models
            .iter()
            .filter(|m| CatalogFilter::NoTools.accepts(m))
            .collect();

        assert_eq!(with.len() + without.len(), models.len());
        assert!(with.iter().all(|m| !without.contains(m)));
    }

    #[test]
    fn test_summary_full_metadata() {
        let m = ModelDescriptor {
            id: "anthropic/claude-3.5-sonnet".to_string(),
            name: "Claude 3.5 Sonnet".to_string(),
            description: None,
            context_length: Some(200_000),
            pricing: Some(Pricing {
                prompt: "0.003".to_string(),
                completion: "0.015".to_string(),
            }),
            supported_parameters: Some(vec!["tools".to_string()]),
        };
        assert_eq!(
            m.summary(),
            "Claude 3.5 Sonnet (200k context) - $0.003/$0.015 [Tools]"
        );
    }

    #[test]
    fn test_summary_sparse_metadata() {
        let m = model("x", None);
        assert_eq!(m.summary(), "x");
    }

    #[test]
    fn test_cost_info_precision_tiers() {
        let mut m = model("x", None);
        m.pricing = Some(Pricing {
            prompt: "0.15".to_string(),
            completion: "0.015".to_string(),
        });
        assert_eq!(m.cost_info().as_deref(), Some("$150/$15.0 per 1M tokens"));

        m.pricing = Some(Pricing {
            prompt: "0.003".to_string(),
            completion: "0.0002".to_string(),
        });
        assert_eq!(m.cost_info().as_deref(), Some("$3.00/$0.200 per 1M tokens"));
    }

    #[test]
    fn test_cost_info_absent_without_pricing() {
        assert_eq!(model("x", None).cost_info(), None);
    }

    #[test]
    fn test_deserialize_ignores_unknown_fields() -> Result<(), Box<dyn std::error::Error>> {
        let json = r#"{
            "id": "vendor/model",
            "name": "Model",
            "architecture": {"modality": "text"},
            "top_provider": {"context_length": 8192}
        }"#;
        let m: ModelDescriptor = serde_json::from_str(json)?;
        assert_eq!(m.id, "vendor/model");
        assert_eq!(m.context_length, None);
        Ok(())
    }
}
