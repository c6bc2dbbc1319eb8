mod gemini;

pub use gemini::Gemini;
