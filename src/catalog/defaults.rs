//! Built-in fallback catalog.
//!
//! Used when neither a valid cache nor the remote endpoint is available so the
//! picker always has something to offer. Deliberately never merged with live
//! or cached data.

use super::{ModelDescriptor, Pricing};

fn descriptor(
    id: &str,
    name: &str,
    description: &str,
    context_length: u64,
    prompt: &str,
    completion: &str,
    tools: bool,
) -> ModelDescriptor {
    ModelDescriptor {
        id: id.to_string(),
        name: name.to_string(),
        description: Some(description.to_string()),
        context_length: Some(context_length),
        pricing: Some(Pricing {
            prompt: prompt.to_string(),
            completion: completion.to_string(),
        }),
        supported_parameters: tools.then(|| vec!["tools".to_string()]),
    }
}

/// The fixed list of well-known models used on the fallback path.
#[must_use]
pub fn default_models() -> Vec<ModelDescriptor> {
    vec![
        descriptor(
            "anthropic/claude-3.5-sonnet",
            "Claude 3.5 Sonnet",
            "Most intelligent model from Anthropic",
            200_000,
            "0.003",
            "0.015",
            true,
        ),
        descriptor(
            "anthropic/claude-3-opus",
            "Claude 3 Opus",
            "Powerful model for complex tasks",
            200_000,
            "0.015",
            "0.075",
            true,
        ),
        descriptor(
            "openai/gpt-4-turbo-preview",
            "GPT-4 Turbo",
            "Latest GPT-4 Turbo with vision",
            128_000,
            "0.01",
            "0.03",
            true,
        ),
        descriptor(
            "openai/gpt-4o",
            "GPT-4o",
            "Multimodal GPT-4",
            128_000,
            "0.005",
            "0.015",
            true,
        ),
        descriptor(
            "google/gemini-pro-1.5",
            "Gemini Pro 1.5",
            "Google's advanced model",
            2_800_000,
            "0.0025",
            "0.0075",
            true,
        ),
        descriptor(
            "meta-llama/llama-3.1-405b-instruct",
            "Llama 3.1 405B",
            "Meta's largest open model",
            128_000,
            "0.003",
            "0.003",
            false,
        ),
        descriptor(
            "meta-llama/llama-3.1-70b-instruct",
            "Llama 3.1 70B",
            "Efficient large model from Meta",
            128_000,
            "0.00052",
            "0.00075",
            false,
        ),
        descriptor(
            "mistralai/mistral-large",
            "Mistral Large",
            "Mistral's flagship model",
            128_000,
            "0.003",
            "0.009",
            true,
        ),
        descriptor(
            "deepseek/deepseek-coder",
            "DeepSeek Coder",
            "Specialized for coding tasks",
            16_000,
            "0.00014",
            "0.00028",
            false,
        ),
        descriptor(
            "cohere/command-r-plus",
            "Command R+",
            "Cohere's RAG-optimized model",
            128_000,
            "0.003",
            "0.015",
            true,
        ),
    ]
}
