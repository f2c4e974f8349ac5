// src/models/answer.rs

use serde::{Deserialize, Serialize};

/// The question an answer refers to, as embedded in the session payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnsweredQuestion {
    /// Category code, e.g. `TES_LOGIKA`.
    pub category: String,

    /// Free-form difficulty label ("EASY", "MEDIUM", ...).
    #[serde(default)]
    pub difficulty: Option<String>,

    #[serde(default)]
    pub options: Vec<String>,
}

/// A participant's answer to one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: i64,

    #[serde(default)]
    pub selected_answer: Option<String>,

    pub is_correct: bool,

    #[serde(default)]
    pub points_earned: u32,

    #[serde(default)]
    pub question: Option<AnsweredQuestion>,
}
