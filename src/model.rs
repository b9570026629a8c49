use serde::{Deserialize, Serialize};

/// `{success, data}` wrapper around both API responses.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: T,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub id: i64,
    /// Sports, Technology, Science, ...
    pub topic: String,
    pub question: String,
    pub correct_answer: String,
    pub answers: [String; 4],
}

impl QuizQuestion {
    /// Prompt label, e.g. `[Sports]  Who won ...?`
    pub fn label(&self) -> String {
        format!("[{}]  {}", self.topic, self.question)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedAnswer {
    pub question_id: i64,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResult {
    pub question: String,
    pub correct: bool,
    pub selected_answer: String,
    pub correct_answer: String,

    // not sent by the current API
    #[serde(default)]
    pub question_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalResult {
    pub personal_score: i64,
    pub question_results: Vec<QuestionResult>,
    /// 0-100
    pub percentage_ranking: i64,
}
