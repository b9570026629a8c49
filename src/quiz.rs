use std::io::Write;

use anyhow::Context;
use tracing::{error, info, warn};

use crate::api::{self, ApiClient, SubmitError};
use crate::config::Config;
use crate::model::{FinalResult, QuestionResult, SelectedAnswer};
use crate::prompt::{prompt_questions, Prompter};
use crate::render::{self, Palette};

/// How a run ended.
#[derive(Debug, PartialEq, Eq)]
pub enum QuizOutcome {
    /// Empty question set, or the server refused the request.
    NoQuestions,
    /// The server could not be reached at all.
    Unreachable,
    /// A response body did not decode.
    InvalidResponse,
    /// The user left a prompt without answering.
    Aborted,
    /// Answers were sent but not scored.
    NotScored,
    Completed(FinalResult),
}

/// One quiz run: fetch, prompt, submit, render.
pub struct Quiz {
    client: ApiClient,
    palette: Palette,
}

impl Quiz {
    pub fn new(config: &Config, palette: Palette) -> Self {
        Self {
            client: ApiClient::new(config),
            palette,
        }
    }

    /// Only a failure to serialize the answers, or to write to `out`, is
    /// returned as an error. Everything else ends the run with an outcome.
    pub fn run(
        &self,
        prompter: &mut impl Prompter,
        out: &mut impl Write,
    ) -> anyhow::Result<QuizOutcome> {
        let questions = match api::fetch_questions(&self.client) {
            Ok(questions) => questions,
            Err(e) if e.is_server_error() => {
                warn!("question request rejected: {}", e);
                Vec::new()
            }
            Err(e) if e.is_transport() => {
                error!("could not fetch questions: {}", e);
                writeln!(
                    out,
                    "Could not reach the quiz server at {}.",
                    self.client.base()
                )?;
                return Ok(QuizOutcome::Unreachable);
            }
            Err(e) => {
                error!("could not read questions: {}", e);
                return Ok(QuizOutcome::InvalidResponse);
            }
        };

        if questions.is_empty() {
            info!("no questions returned, nothing to do");
            return Ok(QuizOutcome::NoQuestions);
        }

        writeln!(out, "Welcome to the Trivia Quiz!")?;
        writeln!(out)?;

        let answers = match prompt_questions(&questions, prompter) {
            Ok(answers) => answers,
            Err(e) => {
                error!("prompt failed: {}", e);
                writeln!(out, "Quiz aborted: {}", e)?;
                return Ok(QuizOutcome::Aborted);
            }
        };

        writeln!(out, "Please wait while your answers are verified.")?;
        writeln!(out)?;

        let body = match api::submit_answers(&self.client, &answers) {
            Ok(body) => body,
            Err(SubmitError::Serialize(e)) => {
                return Err(e).context("could not serialize answers");
            }
            Err(SubmitError::Request(e)) => {
                error!("could not submit answers: {}", e);
                writeln!(out, "Could not score your answers: {}", e)?;
                return Ok(QuizOutcome::NotScored);
            }
        };

        let mut result = match render::decode_result(&body) {
            Ok(result) => result,
            Err(e) => {
                error!("could not decode scored result: {}", e);
                return Ok(QuizOutcome::InvalidResponse);
            }
        };
        result.question_results = reconcile(&answers, result.question_results);

        render::render_result(&result, &self.palette, out).context("failed to print results")?;

        Ok(QuizOutcome::Completed(result))
    }
}

/// Puts results in submitted-answer order when every result names its
/// question. Otherwise the server's order is trusted as is.
pub fn reconcile(answers: &[SelectedAnswer], mut results: Vec<QuestionResult>) -> Vec<QuestionResult> {
    if results.len() != answers.len() {
        warn!(
            answers = answers.len(),
            results = results.len(),
            "scored result count differs from submitted answers"
        );
    }

    if results.is_empty() || results.iter().any(|r| r.question_id.is_none()) {
        return results;
    }

    let position = |id: i64| {
        answers
            .iter()
            .position(|a| a.question_id == id)
            .unwrap_or(usize::MAX)
    };
    results.sort_by_key(|r| r.question_id.map_or(usize::MAX, position));
    results
}
