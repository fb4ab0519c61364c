use async_trait::async_trait;
use reqwest::Client;
use secrecy::ExposeSecret;
use serde_json::Value;
use tracing::{error, warn};

use super::error::AdvisorError;
use super::request::CompletionRequest;
use crate::config::AdvisorConfig;

/// Completion backend the proxy forwards validated requests to.
#[async_trait]
pub trait CompletionUpstream: Send + Sync {
    /// Model used when the caller does not name one.
    fn default_model(&self) -> &str;

    async fn complete(&self, request: &CompletionRequest) -> Result<Value, AdvisorError>;
}

/// HTTP client for an OpenAI-compatible chat completions endpoint.
pub struct HttpCompletionUpstream {
    config: AdvisorConfig,
    client: Client,
}

impl HttpCompletionUpstream {
    pub fn new(config: AdvisorConfig) -> Result<Self, AdvisorError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| AdvisorError::Transport(err.to_string()))?;

        Ok(Self { config, client })
    }
}

#[async_trait]
impl CompletionUpstream for HttpCompletionUpstream {
    fn default_model(&self) -> &str {
        &self.config.default_model
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<Value, AdvisorError> {
        let url = self
            .config
            .api_url
            .as_deref()
            .ok_or(AdvisorError::MissingConfiguration("OPENAI_API_URL"))?;
        let api_key = self
            .config
            .api_key
            .as_ref()
            .ok_or(AdvisorError::MissingConfiguration("OPENAI_API_KEY"))?;

        let response = self
            .client
            .post(url)
            .bearer_auth(api_key.expose_secret())
            .json(request)
            .send()
            .await
            .map_err(|err| {
                error!(error = %err, timeout = err.is_timeout(), "completion request failed");
                AdvisorError::Transport(err.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            error!(
                status = status.as_u16(),
                detail = %detail,
                "completion service rejected request"
            );
            return Err(AdvisorError::Upstream {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| AdvisorError::Transport(err.to_string()))?;

        serde_json::from_slice::<Value>(&body).map_err(|err| {
            warn!(error = %err, "completion service returned non-JSON body");
            AdvisorError::MalformedUpstream
        })
    }
}
