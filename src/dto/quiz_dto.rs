use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::answer::Answer;
use crate::models::question::{Question, QuestionOption, QuestionType};
use crate::models::quiz::{Quiz, QuizSummary};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateQuizPayload {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Quiz title must be between 1 and 100 characters"
    ))]
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateQuizPayload {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Quiz title must be between 1 and 100 characters"
    ))]
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuestionPayload {
    pub text: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    #[serde(default)]
    pub options: Option<Vec<CreateOptionPayload>>,
    #[serde(default)]
    pub max_words: Option<i64>,
    /// Accepted answer for `text` questions. Falls back to the first option's text.
    #[serde(default)]
    pub correct_answer: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOptionPayload {
    pub text: String,
    #[serde(default)]
    pub is_correct: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SubmitQuizPayload {
    #[validate(length(min = 1, message = "At least one answer must be provided"))]
    pub answers: Vec<Answer>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateQuizResponse {
    pub id: String,
    pub title: String,
}

impl From<Quiz> for CreateQuizResponse {
    fn from(quiz: Quiz) -> Self {
        Self {
            id: quiz.id,
            title: quiz.title,
        }
    }
}

/// Listing entry: no update timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuizListItem {
    pub id: String,
    pub title: String,
    pub question_count: usize,
    pub created_at: DateTime<Utc>,
}

impl From<QuizSummary> for QuizListItem {
    fn from(summary: QuizSummary) -> Self {
        Self {
            id: summary.id,
            title: summary.title,
            question_count: summary.question_count,
            created_at: summary.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuizDetailResponse {
    pub id: String,
    pub title: String,
    pub question_count: usize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<QuizSummary> for QuizDetailResponse {
    fn from(summary: QuizSummary) -> Self {
        Self {
            id: summary.id,
            title: summary.title,
            question_count: summary.question_count,
            created_at: summary.created_at,
            updated_at: summary.updated_at,
        }
    }
}

/// Author-facing view returned after creating or replacing a question.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResponse {
    pub id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<QuestionOption>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_words: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<String>,
}

impl From<Question> for QuestionResponse {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            text: q.text,
            question_type: q.question_type,
            options: (!q.options.is_empty()).then_some(q.options),
            max_words: q.max_words,
            correct_answer: q.reference_answer,
        }
    }
}

/// Quiz-taker view of a question. Carries no correctness information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicQuestion {
    pub id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<PublicOption>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_words: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PublicOption {
    pub id: String,
    pub text: String,
}

impl From<&QuestionOption> for PublicOption {
    fn from(option: &QuestionOption) -> Self {
        Self {
            id: option.id.clone(),
            text: option.text.clone(),
        }
    }
}

impl From<&Question> for PublicQuestion {
    fn from(q: &Question) -> Self {
        let options = q
            .question_type
            .is_choice()
            .then(|| q.options.iter().map(PublicOption::from).collect());

        Self {
            id: q.id.clone(),
            text: q.text.clone(),
            question_type: q.question_type,
            options,
            max_words: q.max_words,
        }
    }
}
