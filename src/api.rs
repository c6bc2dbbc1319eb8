use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::Result;

/// The remote generateContent capability. [`crate::Gemini`] implements it
/// over HTTP; tests substitute implementations that return canned responses.
#[async_trait]
pub trait GenerateContentApi: Send + Sync {
    async fn generate_content(
        &self,
        api_key: &str,
        model: &str,
        body: Value,
    ) -> Result<GenerateContentResponse>;
}

#[derive(Debug, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// A part is an open shape. The service may introduce kinds beyond text and
/// inline data; those deserialize with both fields absent and are skipped
/// during classification rather than treated as errors.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub inline_data: Option<InlineData>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    #[serde(default)]
    pub mime_type: Option<String>,
    /// Base64-encoded image bytes.
    #[serde(default)]
    pub data: Option<String>,
}
