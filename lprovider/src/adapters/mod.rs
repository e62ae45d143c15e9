//! Concrete reply provider adapters for upstream generative services.

pub mod gemini;

pub use gemini::{
    GeminiHttpTransport, GeminiProvider, GeminiRequest, GeminiResponse, GeminiTransport,
};
