use std::io::{BufRead, Write};

use thiserror::Error;
use tracing::debug;

use crate::model::{QuizQuestion, SelectedAnswer};

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("input closed before an answer was chosen")]
    Interrupted,

    #[error("prompt I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("nothing to choose from")]
    NoChoices,
}

/// A single-choice selection widget.
pub trait Prompter {
    /// Blocks until one of `items` is chosen and returns its index.
    fn select(&mut self, label: &str, items: &[String]) -> Result<usize, PromptError>;
}

/// Numbered-list prompt over any line reader and writer.
pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl TerminalPrompter<std::io::StdinLock<'static>, std::io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn select(&mut self, label: &str, items: &[String]) -> Result<usize, PromptError> {
        if items.is_empty() {
            return Err(PromptError::NoChoices);
        }

        writeln!(self.output, "{}", label)?;
        for (idx, item) in items.iter().enumerate() {
            writeln!(self.output, "  {}) {}", idx + 1, item)?;
        }

        loop {
            write!(self.output, "Choose 1-{}: ", items.len())?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(PromptError::Interrupted);
            }

            match parse_choice(&line, items.len()) {
                Some(idx) => {
                    writeln!(self.output)?;
                    return Ok(idx);
                }
                None => debug!(input = line.trim(), "ignoring invalid choice"),
            }
        }
    }
}

/// 1-based choice on the line, as a 0-based index.
fn parse_choice(line: &str, count: usize) -> Option<usize> {
    match line.trim().parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => Some(n - 1),
        _ => None,
    }
}

/// Asks every question in order, one answer per question.
pub fn prompt_questions(
    questions: &[QuizQuestion],
    prompter: &mut impl Prompter,
) -> Result<Vec<SelectedAnswer>, PromptError> {
    questions
        .iter()
        .map(|question| {
            let idx = prompter.select(&question.label(), &question.answers)?;
            Ok(SelectedAnswer {
                question_id: question.id,
                answer: question.answers[idx].clone(),
            })
        })
        .collect()
}
