/// Runtime settings of the adviser.
///
/// The API key is baked in at build time from the `API_KEY` environment
/// variable, the same way a bundler `define` exposes it to browser code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdviserConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
    pub refresh_interval_ms: u32,
    pub clock_tick_ms: u32,
}

impl AdviserConfig {
    pub const DEFAULT_MODEL: &'static str = "gemini-3-flash-preview";
    pub const DEFAULT_ENDPOINT: &'static str = "https://generativelanguage.googleapis.com/v1beta";

    pub fn from_build_env() -> Self {
        Self::default().with_api_key(option_env!("API_KEY"))
    }

    pub fn with_api_key(mut self, key: Option<&str>) -> Self {
        self.api_key = key.map(str::trim).filter(|k| !k.is_empty()).map(str::to_string);
        self
    }

    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.trim_end_matches('/').to_string();
        self
    }

    pub fn generate_content_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }
}

impl Default for AdviserConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: Self::DEFAULT_MODEL.to_string(),
            endpoint: Self::DEFAULT_ENDPOINT.to_string(),
            refresh_interval_ms: 60_000,
            clock_tick_ms: 1_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_key_counts_as_missing() {
        assert_eq!(AdviserConfig::default().with_api_key(Some("   ")).api_key, None);
        assert_eq!(AdviserConfig::default().with_api_key(Some(" k ")).api_key.as_deref(), Some("k"));
    }

    #[test]
    fn url_uses_model_and_trimmed_endpoint() {
        let config = AdviserConfig::default().with_endpoint("http://localhost:8080/v1/").with_model("m");
        assert_eq!(config.generate_content_url(), "http://localhost:8080/v1/models/m:generateContent");
    }
}
