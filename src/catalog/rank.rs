//! Deterministic catalog ordering.
//!
//! Three tiers: a fixed popular allow-list (in list order), then a recency
//! heuristic scored off version-like substrings in the model id, then a
//! lexicographic id tie-break. The heuristic is string sniffing and makes no
//! claim beyond "newer-looking ids sort first"; the tier values are load-
//! bearing for cache compatibility and must not drift.

use std::cmp::Ordering;

use super::ModelDescriptor;

/// Models pinned to the top of the catalog, in display order.
pub const POPULAR_MODELS: [&str; 9] = [
    "anthropic/claude-3.5-sonnet",
    "anthropic/claude-3-opus",
    "openai/gpt-4-turbo-preview",
    "openai/gpt-4o",
    "google/gemini-pro-1.5",
    "meta-llama/llama-3.1-405b-instruct",
    "mistralai/mistral-large",
    "deepseek/deepseek-coder",
    "cohere/command-r-plus",
];

fn popular_rank(id: &str) -> Option<usize> {
    POPULAR_MODELS.iter().position(|popular| *popular == id)
}

/// Score a model id by how recent its version markers look.
fn recency_score(id: &str) -> u32 {
    let id = id.to_lowercase();

    if id.contains("4.5") || id.contains("4-5") {
        return 100;
    }
    if id.contains("4.0") || id.contains("4-0") {
        return 95;
    }
    if id.contains("3.5") || id.contains("3-5") {
        return 90;
    }
    if id.contains("3.1") || id.contains("3-1") {
        return 85;
    }
    if id.contains("3.0") || id.contains("3-0") {
        return 80;
    }
    if id.contains("2.5") || id.contains("2-5") {
        return 75;
    }
    if id.contains("2.1") || id.contains("2-1") {
        return 70;
    }
    if id.contains("2.0") || id.contains("2-0") {
        return 65;
    }

    if id.contains("2024") || id.contains("2025") {
        return 60;
    }
    if id.contains("turbo") || id.contains("preview") {
        return 55;
    }
    if id.contains("instruct") || id.contains("chat") {
        return 50;
    }
    if id.contains("latest") || id.contains("new") {
        return 45;
    }

    0
}

fn compare_ids(a: &str, b: &str) -> Ordering {
    match (popular_rank(a), popular_rank(b)) {
        (Some(a_rank), Some(b_rank)) => a_rank.cmp(&b_rank),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => recency_score(b)
            .cmp(&recency_score(a))
            .then_with(|| a.cmp(b)),
    }
}

/// Sort `models` into the canonical catalog order.
///
/// The order is total and reproducible for a given input set, and sorting an
/// already-sorted list is a no-op.
pub fn rank(models: &mut [ModelDescriptor]) {
    models.sort_by(|a, b| compare_ids(&a.id, &b.id));
}
