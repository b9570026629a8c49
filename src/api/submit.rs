use tracing::debug;

use super::{read_ok_body, ApiClient, SubmitError};
use crate::model::SelectedAnswer;

const ANSWERS_PATH: &str = "answers";

/// Posts the answers and hands back the raw scored body for the renderer.
pub fn submit_answers(client: &ApiClient, answers: &[SelectedAnswer]) -> Result<String, SubmitError> {
    let body = serde_json::to_vec(answers).map_err(SubmitError::Serialize)?;

    let url = client.url(ANSWERS_PATH);
    debug!(%url, count = answers.len(), "submitting answers");

    let response = client
        .agent
        .post(&url)
        .set("Content-Type", "application/json")
        .send_bytes(&body)
        .map_err(super::RequestError::from)?;

    Ok(read_ok_body(response)?)
}
