//! Question Model

use serde::{Deserialize, Serialize};

use super::Keyed;

/// Trivia question entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    /// Category id
    pub category: i64,
    pub difficulty: i64,
}

impl Keyed for Question {
    fn key(&self) -> i64 {
        self.id
    }
}

/// Question filter by category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionFilter {
    pub category: i64,
}

/// Create question payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestionCreate {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i64>,
    pub difficulty: Option<i64>,
}

/// Validated question input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

/// Search payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestionSearch {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

/// Quiz round request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuizRequest {
    #[serde(alias = "previous_question_ids")]
    pub previous_questions: Option<Vec<i64>>,
    pub quiz_category: Option<QuizCategory>,
}

/// Category selected for a quiz; id 0 means every category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizCategory {
    pub id: i64,
}

impl QuizCategory {
    pub fn filter(&self) -> Option<QuestionFilter> {
        (self.id != 0).then_some(QuestionFilter { category: self.id })
    }
}
