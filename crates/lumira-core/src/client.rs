//! Gemini analysis client — one request/response exchange per analysis.
//!
//! Builds the generateContent request (inline image + fixed instruction +
//! structured-output declaration), issues a single call with no retry, and
//! validates the reply into a typed [`AnalysisResult`]. The reply is
//! untrusted input: it is parsed and shape-checked, never interpreted
//! beyond field extraction.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::encoder::EncodedImage;
use crate::schema;
use crate::types::AnalysisResult;

const HEALTH_CHECK_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport or provider-level failure: network, non-success status,
    /// or a reply with no candidate text (refusal).
    #[error("analysis request failed: {0}")]
    RequestFailure(String),
    /// Provider returned unparsable or incomplete structured data.
    #[error("analysis response did not match the expected shape: {0}")]
    SchemaFailure(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::RequestFailure(err.to_string())
    }
}

/// Seam between the session pipeline and the external model.
#[async_trait]
pub trait AnalysisProvider: Send + Sync {
    /// Run one analysis exchange. Suspends until the provider resolves;
    /// exactly one completion, no retry.
    async fn analyze(&self, image: &EncodedImage) -> Result<AnalysisResult, ClientError>;
}

/// Client for the Gemini generateContent API.
#[derive(Clone)]
pub struct AnalysisClient {
    api_base: String,
    api_key: String,
    model: String,
    /// Applied to each analysis request; the provider owns completion
    /// beyond that.
    timeout: Duration,
    http_client: reqwest::Client,
}

impl AnalysisClient {
    pub fn new(
        api_base: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            api_base: api_base.into(),
            api_key: api_key.into(),
            model: model.into(),
            timeout,
            http_client: reqwest::Client::new(),
        }
    }

    fn generate_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_base, self.model)
    }

    fn models_url(&self) -> String {
        format!("{}/models", self.api_base)
    }

    /// Cheap credential/reachability probe against the model listing
    /// endpoint. Not part of an analysis attempt.
    pub async fn health_check(&self) -> bool {
        self.http_client
            .get(self.models_url())
            .header("x-goog-api-key", &self.api_key)
            .timeout(HEALTH_CHECK_TIMEOUT)
            .send()
            .await
            .map(|r| r.status().is_success())
            .unwrap_or(false)
    }
}

#[async_trait]
impl AnalysisProvider for AnalysisClient {
    async fn analyze(&self, image: &EncodedImage) -> Result<AnalysisResult, ClientError> {
        let started = Instant::now();

        let response = self
            .http_client
            .post(self.generate_url())
            .header("x-goog-api-key", &self.api_key)
            .timeout(self.timeout)
            .json(&build_request_body(image))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::RequestFailure(format!(
                "model endpoint returned {status}: {body}"
            )));
        }

        let body: Value = response.json().await?;
        let text = extract_candidate_text(&body).ok_or_else(|| {
            ClientError::RequestFailure("response contained no candidate text".to_string())
        })?;

        let result = parse_analysis(text)?;
        tracing::debug!(
            model = %self.model,
            elapsed_ms = started.elapsed().as_millis() as u64,
            scores = result.scores.len(),
            enhancements = result.enhancements.len(),
            "analysis parsed"
        );
        Ok(result)
    }
}

/// Build the generateContent request body: inline image data, then the
/// fixed instruction text, plus the structured-output declaration.
fn build_request_body(image: &EncodedImage) -> Value {
    serde_json::json!({
        "contents": [{
            "parts": [
                {
                    "inline_data": {
                        "mime_type": image.mime_type,
                        "data": image.data,
                    }
                },
                { "text": schema::INSTRUCTION },
            ]
        }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": schema::response_schema(),
        }
    })
}

/// Pull the first candidate's text out of a generateContent reply.
fn extract_candidate_text(body: &Value) -> Option<&str> {
    body.get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .get(0)?
        .get("text")?
        .as_str()
}

/// Parse the model's structured text into a typed result.
///
/// Typed deserialization is the validation step: malformed JSON and missing
/// required fields (top-level or nested) both fail here. Values are taken
/// as-is beyond what the types imply; emphasis markers pass through
/// untouched. Parsing is pure, so a document that validated once always
/// validates again.
pub fn parse_analysis(text: &str) -> Result<AnalysisResult, ClientError> {
    serde_json::from_str(text).map_err(|e| ClientError::SchemaFailure(e.to_string()))
}
