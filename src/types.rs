use serde::{Deserialize, Serialize};

/// One generated image, decoded from the service's inline data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePayload {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

/// Everything one generation call produced, in response order within each
/// sequence. A returned value always carries at least one image or note;
/// a fully empty decode surfaces as [`crate::GembrushError::EmptyResponse`]
/// instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    #[serde(default)]
    pub images: Vec<ImagePayload>,
    #[serde(default)]
    pub notes: Vec<String>,
}
