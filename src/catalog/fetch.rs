//! Remote catalog fetch over HTTP.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use ureq::Agent;

use super::ModelDescriptor;

/// The OpenRouter models endpoint.
pub const MODELS_URL: &str = "https://openrouter.ai/api/v1/models";

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Failure fetching the remote catalog.
///
/// Internal to the catalog: [`super::CatalogStore::get_catalog`] absorbs
/// these on its fallback path.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The endpoint answered with a non-success status.
    #[error("models request failed with status {0}")]
    Status(u16),
    /// The request could not be completed at the transport level.
    #[error("models request failed")]
    Transport(#[source] Box<ureq::Error>),
    /// The response body did not parse as a model list.
    #[error("failed to deserialize models response")]
    Body(#[source] Box<ureq::Error>),
}

#[derive(Debug, Deserialize)]
struct ModelsResponse {
    #[serde(default)]
    data: Vec<ModelDescriptor>,
}

/// Fetch the model list from `url`.
///
/// The bearer credential is optional; the models endpoint does not require
/// authentication. A missing or empty `data` field yields an empty list, not
/// an error.
///
/// # Errors
///
/// Returns a [`FetchError`] on non-2xx status, transport failure, or an
/// unparseable body.
pub fn fetch_models(url: &str, api_key: Option<&str>) -> Result<Vec<ModelDescriptor>, FetchError> {
    let config = ureq::config::Config::builder()
        .timeout_global(Some(FETCH_TIMEOUT))
        .build();
    let agent: Agent = config.new_agent();

    let mut request = agent
        .get(url)
        .header(
            "User-Agent",
            concat!("modelpick/", env!("CARGO_PKG_VERSION")),
        )
        .header("HTTP-Referer", "https://github.com/Mockapapella/modelpick")
        .header("X-Title", "modelpick");
    if let Some(key) = api_key {
        request = request.header("Authorization", format!("Bearer {key}"));
    }

    let response = match request.call() {
        Ok(response) => response,
        Err(ureq::Error::StatusCode(status)) => return Err(FetchError::Status(status)),
        Err(err) => return Err(FetchError::Transport(Box::new(err))),
    };

    let body: ModelsResponse = response
        .into_body()
        .read_json()
        .map_err(|err| FetchError::Body(Box::new(err)))?;

    Ok(body.data)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODELS_BODY: &str = r#"{"data": [
        {"id": "vendor/alpha", "name": "Alpha", "supported_parameters": ["tools"]},
        {"id": "vendor/beta", "name": "Beta", "context_length": 32000}
    ]}"#;

    #[test]
    fn test_fetch_parses_model_list() -> Result<(), Box<dyn std::error::Error>> {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/api/v1/models")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(MODELS_BODY)
            .create();

        let url = format!("{}/api/v1/models", server.url());
        let models = fetch_models(&url, None)?;
        mock.assert();

        assert_eq!(models.len(), 2);
        assert_eq!(models[0].id, "vendor/alpha");
        assert!(models[0].supports_tools());
        assert_eq!(models[1].context_length, Some(32_000));
        Ok(())
    }

    #[test]
    fn test_fetch_sends_bearer_credential() -> Result<(), Box<dyn std::error::Error>> {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/api/v1/models")
            .match_header("authorization", "Bearer sk-or-test")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"data": []}"#)
            .create();

        let url = format!("{}/api/v1/models", server.url());
        let models = fetch_models(&url, Some("sk-or-test"))?;
        mock.assert();

        assert!(models.is_empty());
        Ok(())
    }

    #[test]
    fn test_fetch_missing_data_field_is_empty() -> Result<(), Box<dyn std::error::Error>> {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/api/v1/models")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("{}")
            .create();

        let url = format!("{}/api/v1/models", server.url());
        let models = fetch_models(&url, None)?;
        mock.assert();

        assert!(models.is_empty());
        Ok(())
    }

    #[test]
    fn test_fetch_http_error_status() {
        let mut server = mockito::Server::new();
        let mock = server.mock("GET", "/api/v1/models").with_status(500).create();

        let url = format!("{}/api/v1/models", server.url());
        let result = fetch_models(&url, None);
        mock.assert();

        assert!(matches!(result, Err(FetchError::Status(500))));
    }

    #[test]
    fn test_fetch_invalid_json_body() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/api/v1/models")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("not valid json")
            .create();

        let url = format!("{}/api/v1/models", server.url());
        let result = fetch_models(&url, None);
        mock.assert();

        assert!(matches!(result, Err(FetchError::Body(_))));
    }
}
