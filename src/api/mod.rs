mod error;
mod fetch;
mod submit;

pub use error::{RequestError, SubmitError};
pub use fetch::fetch_questions;
pub use submit::submit_answers;

use crate::config::Config;

/// Blocking HTTP client for the quiz API. No timeout is configured.
pub struct ApiClient {
    agent: ureq::Agent,
    config: Config,
}

impl ApiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            agent: ureq::AgentBuilder::new().build(),
            config: config.clone(),
        }
    }

    pub fn base(&self) -> &str {
        &self.config.api_base
    }

    fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }
}

/// Only 200 counts as success; ureq lets the rest of 2xx/3xx through.
fn read_ok_body(response: ureq::Response) -> Result<String, RequestError> {
    let status = response.status();
    if status != 200 {
        return Err(RequestError::ServerError { status });
    }
    Ok(response.into_string()?)
}
