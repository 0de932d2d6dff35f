pub mod gemini_client;
pub mod gemini_payload;

pub use gemini_client::GeminiSignalClient;
