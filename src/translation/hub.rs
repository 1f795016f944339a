//! Hugging Face Hub translator.
//!
//! `load` checks the model registry for the identifier, `translate` sends
//! the text to the hosted inference endpoint for that model.

use std::num::NonZeroU32;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::backend::{Translator, TranslatorBackend};
use crate::error::{Error, Result};

pub const DEFAULT_HUB_ENDPOINT: &str = "https://huggingface.co";
pub const DEFAULT_INFERENCE_ENDPOINT: &str = "https://router.huggingface.co/hf-inference";
pub const DEFAULT_API_KEY_ENV: &str = "HF_TOKEN";

/// Pipeline tags of models that can answer a translation request.
const TRANSLATION_PIPELINES: &[&str] = &["translation", "text2text-generation"];

/// Connection settings for the Hub.
#[derive(Debug, Clone)]
pub struct HubConfig {
    /// Registry base URL, used to resolve model identifiers.
    pub endpoint: String,
    /// Inference base URL; `/models/{id}` is appended.
    pub inference_endpoint: String,
    /// Bearer token, if any.
    pub api_key: Option<String>,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_HUB_ENDPOINT.to_string(),
            inference_endpoint: DEFAULT_INFERENCE_ENDPOINT.to_string(),
            api_key: None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ModelInfo {
    #[serde(default)]
    pipeline_tag: Option<String>,
}

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: InferenceParameters,
    options: InferenceOptions,
}

#[derive(Debug, Serialize)]
struct InferenceParameters {
    max_length: u32,
}

#[derive(Debug, Serialize)]
struct InferenceOptions {
    wait_for_model: bool,
}

#[derive(Debug, Deserialize)]
struct InferenceOutput {
    #[serde(alias = "generated_text")]
    translation_text: String,
}

#[derive(Debug, Deserialize)]
struct InferenceError {
    error: String,
}

pub struct HubBackend {
    config: HubConfig,
}

impl HubBackend {
    pub const fn new(config: HubConfig) -> Self {
        Self { config }
    }
}

fn authorize(request: RequestBuilder, api_key: Option<&str>) -> RequestBuilder {
    match api_key {
        Some(api_key) => request.bearer_auth(api_key),
        None => request,
    }
}

impl TranslatorBackend for HubBackend {
    type Handle = HubTranslator;

    fn load(&self, model_id: &str, max_length: NonZeroU32) -> Result<HubTranslator> {
        // Calls block until the Hub answers; no request timeout.
        let client = Client::builder()
            .timeout(None::<Duration>)
            .user_agent(concat!("mtl/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::model_not_found(model_id, format!("HTTP client setup failed: {e}")))?;

        let url = format!(
            "{}/api/models/{model_id}",
            self.config.endpoint.trim_end_matches('/')
        );
        debug!(model_id, "Resolving model");
        debug!(%url, "Querying model registry");

        let response = authorize(client.get(&url), self.config.api_key.as_deref())
            .send()
            .map_err(|e| Error::model_not_found(model_id, format!("registry unreachable: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::model_not_found(model_id, registry_reason(status)));
        }

        if let Ok(model) = response.json::<ModelInfo>() {
            match model.pipeline_tag.as_deref() {
                Some(tag) if !TRANSLATION_PIPELINES.contains(&tag) => {
                    warn!(model_id, pipeline = tag, "Model is not tagged for translation");
                }
                _ => {}
            }
        }

        Ok(HubTranslator {
            client,
            url: format!(
                "{}/models/{model_id}",
                self.config.inference_endpoint.trim_end_matches('/')
            ),
            api_key: self.config.api_key.clone(),
            max_length,
        })
    }
}

/// A model resolved on the Hub, translating through the inference endpoint.
pub struct HubTranslator {
    client: Client,
    url: String,
    api_key: Option<String>,
    max_length: NonZeroU32,
}

impl Translator for HubTranslator {
    fn translate(&self, text: &str) -> Result<String> {
        let body = InferenceRequest {
            inputs: text,
            parameters: InferenceParameters {
                max_length: self.max_length.get(),
            },
            options: InferenceOptions {
                wait_for_model: true,
            },
        };

        let request = authorize(
            self.client.post(&self.url).json(&body),
            self.api_key.as_deref(),
        );

        debug!(url = %self.url, chars = text.chars().count(), "Sending inference request");
        let response = request
            .send()
            .map_err(|e| Error::Translation(format!("inference endpoint unreachable: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| Error::Translation(format!("failed to read inference response: {e}")))?;

        if !status.is_success() {
            return Err(Error::Translation(error_detail(status, &body)));
        }

        parse_translation(&body)
    }
}

fn registry_reason(status: StatusCode) -> String {
    match status {
        // The Hub answers 401 for repositories it does not disclose to anonymous callers.
        StatusCode::NOT_FOUND | StatusCode::UNAUTHORIZED => {
            format!("no such model on the Hub (HTTP {})", status.as_u16())
        }
        StatusCode::FORBIDDEN => {
            format!("access denied (HTTP {}); the model may be gated", status.as_u16())
        }
        _ => format!("registry lookup failed with status {status}"),
    }
}

fn error_detail(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<InferenceError>(body).map_or_else(
        |_| format!("inference request failed with status {status}: {}", body.trim()),
        |e| format!("inference request failed with status {status}: {}", e.error),
    )
}

fn parse_translation(body: &str) -> Result<String> {
    let outputs: Vec<InferenceOutput> = serde_json::from_str(body)
        .map_err(|_| Error::Translation(format!("unexpected response format: {}", body.trim())))?;

    outputs
        .into_iter()
        .next()
        .map(|output| output.translation_text)
        .ok_or_else(|| Error::Translation("unexpected response format: empty result".to_string()))
}
