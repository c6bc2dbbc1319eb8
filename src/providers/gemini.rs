use async_trait::async_trait;
use serde_json::Value;

use crate::api::{GenerateContentApi, GenerateContentResponse};
use crate::{GembrushError, Result};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Clone)]
pub struct Gemini {
    http: reqwest::Client,
    base_url: String,
}

impl Gemini {
    pub fn new() -> Self {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(300))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn model_path(model: &str) -> String {
        let model = model.trim();
        if model.starts_with("models/") {
            model.to_string()
        } else {
            format!("models/{model}")
        }
    }

    fn generate_url(&self, model: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = Self::model_path(model);
        format!("{base}/{path}:generateContent")
    }
}

impl Default for Gemini {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GenerateContentApi for Gemini {
    async fn generate_content(
        &self,
        api_key: &str,
        model: &str,
        body: Value,
    ) -> Result<GenerateContentResponse> {
        let url = self.generate_url(model);
        tracing::debug!(%url, "posting generateContent request");
        let response = self
            .http
            .post(url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(%status, "generateContent request failed");
            return Err(match status {
                reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
                    GembrushError::Authentication { status, body }
                }
                reqwest::StatusCode::TOO_MANY_REQUESTS => {
                    GembrushError::QuotaExhausted { status, body }
                }
                _ => GembrushError::Api { status, body },
            });
        }

        Ok(response.json::<GenerateContentResponse>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_url_prefixes_bare_model_ids() {
        let client = Gemini::new().with_base_url("https://example.test/v1beta/");
        assert_eq!(
            client.generate_url("gemini-2.5-flash-image-preview"),
            "https://example.test/v1beta/models/gemini-2.5-flash-image-preview:generateContent"
        );
    }

    #[test]
    fn generate_url_keeps_qualified_model_ids() {
        let client = Gemini::new().with_base_url("https://example.test/v1beta");
        assert_eq!(
            client.generate_url("models/gemini-2.5-flash-image-preview"),
            "https://example.test/v1beta/models/gemini-2.5-flash-image-preview:generateContent"
        );
    }
}
