use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::api::{GenerateContentApi, Part};
use crate::types::{GenerationResult, ImagePayload};
use crate::{GembrushError, Result};

pub const DEFAULT_MODEL: &str = "models/gemini-2.5-flash-image-preview";

/// Quality suffix appended to every prompt unless removed.
pub const DETAIL_SUFFIX: &str =
    "((masterpiece, best quality, ultra-detailed, photorealistic, 8k, sharp focus))";

/// Suffix appended when the caller asks for images free of overlay text.
pub const NO_OVERLAY_TEXT_SUFFIX: &str = "((no background text, no symbols, no markings, no letters anywhere, no typography, no signboard, no watermark, no logo, no text, no subtitles, no labels, no poster elements, neutral background))";

const FALLBACK_MIME_TYPE: &str = "image/png";

/// Single-shot image generation over an injected [`GenerateContentApi`].
///
/// Each [`generate`](Self::generate) call validates its inputs, makes exactly
/// one remote call requesting both IMAGE and TEXT modalities, and classifies
/// the first candidate's parts into a [`GenerationResult`]. No state is
/// carried between calls.
pub struct GenerationAdapter<C> {
    client: C,
    model: String,
    detail_suffix: Option<String>,
    suppress_overlay_text: bool,
}

impl<C: GenerateContentApi> GenerationAdapter<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            model: DEFAULT_MODEL.to_string(),
            detail_suffix: Some(DETAIL_SUFFIX.to_string()),
            suppress_overlay_text: false,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_detail_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.detail_suffix = Some(suffix.into());
        self
    }

    pub fn without_detail_suffix(mut self) -> Self {
        self.detail_suffix = None;
        self
    }

    pub fn suppress_overlay_text(mut self, suppress: bool) -> Self {
        self.suppress_overlay_text = suppress;
        self
    }

    pub fn model_id(&self) -> &str {
        self.model.as_str()
    }

    pub async fn generate(&self, api_key: &str, prompt: &str) -> Result<GenerationResult> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(GembrushError::InvalidInput(
                "api key must not be blank".to_string(),
            ));
        }
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(GembrushError::InvalidInput(
                "prompt must not be blank".to_string(),
            ));
        }

        let styled = self.style_prompt(prompt);
        let body = serde_json::json!({
            "contents": [{ "role": "user", "parts": [{ "text": styled }] }],
            "generationConfig": { "responseModalities": ["TEXT", "IMAGE"] }
        });

        let response = self
            .client
            .generate_content(api_key, &self.model, body)
            .await?;

        // Only the first candidate is consumed; later ones are ignored.
        let parts = response
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| content.parts)
            .unwrap_or_default();

        let mut result = GenerationResult::default();
        for part in parts {
            classify_part(part, &mut result);
        }

        if result.images.is_empty() && result.notes.is_empty() {
            return Err(GembrushError::EmptyResponse);
        }
        Ok(result)
    }

    fn style_prompt(&self, prompt: &str) -> String {
        let mut styled = prompt.to_string();
        if let Some(suffix) = self.detail_suffix.as_deref() {
            styled.push('\n');
            styled.push_str(suffix);
        }
        if self.suppress_overlay_text {
            styled.push('\n');
            styled.push_str(NO_OVERLAY_TEXT_SUFFIX);
        }
        styled
    }
}

fn classify_part(part: Part, out: &mut GenerationResult) {
    if let Some(inline) = part.inline_data {
        let Some(data) = inline.data.filter(|d| !d.is_empty()) else {
            return;
        };
        match BASE64.decode(&data) {
            Ok(bytes) if !bytes.is_empty() => out.images.push(ImagePayload {
                bytes,
                mime_type: inline
                    .mime_type
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| FALLBACK_MIME_TYPE.to_string()),
            }),
            Ok(_) => {}
            Err(err) => {
                tracing::warn!(%err, "skipping inline data that is not valid base64");
            }
        }
        return;
    }
    if let Some(text) = part.text {
        if !text.is_empty() {
            out.notes.push(text);
        }
    }
}
