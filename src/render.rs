use std::ffi::OsStr;
use std::io::{self, Write};

use tracing::warn;

use crate::api::RequestError;
use crate::model::{Envelope, FinalResult};

const WHITE: &str = "\x1b[37m";
const WHITE_BOLD: &str = "\x1b[1;37m";
const GREEN_BOLD: &str = "\x1b[1;32m";
const RED_BOLD: &str = "\x1b[1;31m";
const RESET: &str = "\x1b[0m";

/// Escape sequences for each kind of line. `plain` emits none.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    text: &'static str,
    emphasis: &'static str,
    correct: &'static str,
    wrong: &'static str,
    reset: &'static str,
}

impl Palette {
    pub fn ansi() -> Self {
        Self {
            text: WHITE,
            emphasis: WHITE_BOLD,
            correct: GREEN_BOLD,
            wrong: RED_BOLD,
            reset: RESET,
        }
    }

    pub fn plain() -> Self {
        Self {
            text: "",
            emphasis: "",
            correct: "",
            wrong: "",
            reset: "",
        }
    }

    /// Honours the `NO_COLOR` convention.
    pub fn from_env() -> Self {
        Self::for_no_color(std::env::var_os("NO_COLOR").as_deref())
    }

    /// Any non-empty `NO_COLOR` value turns colors off.
    pub fn for_no_color(value: Option<&OsStr>) -> Self {
        match value {
            Some(v) if !v.is_empty() => Self::plain(),
            _ => Self::ansi(),
        }
    }

}

pub fn decode_result(body: &str) -> Result<FinalResult, RequestError> {
    let envelope: Envelope<FinalResult> = serde_json::from_str(body)?;

    if !envelope.success {
        warn!("scoring response has success=false");
    }
    Ok(envelope.data)
}

pub fn render_result(result: &FinalResult, palette: &Palette, out: &mut impl Write) -> io::Result<()> {
    let Palette {
        text,
        emphasis,
        correct,
        wrong,
        reset,
    } = *palette;

    for question_result in &result.question_results {
        writeln!(out, "{text}{}{reset}", question_result.question)?;
        writeln!(
            out,
            "{emphasis}The selected answer was {}{reset}",
            question_result.selected_answer
        )?;

        if question_result.correct {
            writeln!(out, "{correct}And your answer was correct{reset}")?;
        } else {
            writeln!(
                out,
                "{wrong}The correct answer was {}{reset}",
                question_result.correct_answer
            )?;
        }
        writeln!(out)?;
    }

    writeln!(
        out,
        "{emphasis}Your Score is of {} out of {}{reset}",
        result.personal_score,
        result.question_results.len()
    )?;
    writeln!(
        out,
        "{emphasis}You ranked better than {}% of people who took this quiz.{reset}",
        result.percentage_ranking
    )?;

    out.flush()
}
