pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api/";

/// Where the quiz API lives. Handed to [`crate::api::ApiClient`] explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_base: String,
}

impl Config {
    pub fn new(api_base: &str) -> Self {
        Self {
            api_base: api_base.to_string(),
        }
    }

    /// `<api_base>/<path>` with exactly one slash between the two.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}
