mod adapter;
mod api;
mod error;
mod providers;
mod types;
pub mod utils;

pub use adapter::{DEFAULT_MODEL, DETAIL_SUFFIX, GenerationAdapter, NO_OVERLAY_TEXT_SUFFIX};
pub use api::{Candidate, Content, GenerateContentApi, GenerateContentResponse, InlineData, Part};
pub use error::{GembrushError, Result};
pub use providers::Gemini;
pub use types::{GenerationResult, ImagePayload};
