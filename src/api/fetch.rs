use tracing::{debug, warn};

use super::{read_ok_body, ApiClient, RequestError};
use crate::model::{Envelope, QuizQuestion};

const QUESTIONS_PATH: &str = "questions";

pub fn fetch_questions(client: &ApiClient) -> Result<Vec<QuizQuestion>, RequestError> {
    let url = client.url(QUESTIONS_PATH);
    debug!(%url, "fetching questions");

    let response = client
        .agent
        .get(&url)
        .set("Accept", "application/json")
        .call()?;

    let body = read_ok_body(response)?;
    let envelope: Envelope<Vec<QuizQuestion>> = serde_json::from_str(&body)?;

    if !envelope.success {
        warn!("question response has success=false");
    }
    debug!(count = envelope.data.len(), "decoded questions");

    Ok(envelope.data)
}
