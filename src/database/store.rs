use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};

use crate::error::{Error, Result};
use crate::models::question::{Question, QuestionOption, QuestionSpec};
use crate::models::quiz::{Quiz, QuizSummary};
use crate::utils::{time, token::generate_id};

#[derive(Debug)]
struct QuizRecord {
    id: String,
    title: String,
    question_ids: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl QuizRecord {
    fn touch(&mut self) {
        self.updated_at = time::now_after(self.updated_at);
    }
}

#[derive(Debug, Default)]
struct StoreState {
    quizzes: HashMap<String, QuizRecord>,
    quiz_order: Vec<String>,
    questions: HashMap<String, Question>,
}

impl StoreState {
    fn assemble(&self, record: &QuizRecord) -> Quiz {
        Quiz {
            id: record.id.clone(),
            title: record.title.clone(),
            questions: self.questions_of(record),
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }

    fn questions_of(&self, record: &QuizRecord) -> Vec<Question> {
        record
            .question_ids
            .iter()
            .filter_map(|id| self.questions.get(id).cloned())
            .collect()
    }

    fn summary(&self, record: &QuizRecord) -> QuizSummary {
        QuizSummary {
            id: record.id.clone(),
            title: record.title.clone(),
            question_count: record.question_ids.len(),
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }

    fn fresh_question_id(&self) -> Result<String> {
        let id = generate_id();
        if self.questions.contains_key(&id) {
            return Err(Error::Internal(format!("question id collision: {}", id)));
        }
        Ok(id)
    }
}

/// Process-lifetime storage for quizzes and their questions.
///
/// Questions live in a single index keyed by id; a quiz keeps the ordered ids
/// of the questions it owns. Cloning the store clones the handle, not the data.
#[derive(Clone, Default)]
pub struct QuizStore {
    state: Arc<Mutex<StoreState>>,
}

impl QuizStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn create_quiz(&self, title: &str) -> Result<Quiz> {
        let mut state = self.lock();
        let id = generate_id();
        if state.quizzes.contains_key(&id) {
            return Err(Error::Internal(format!("quiz id collision: {}", id)));
        }

        let now = time::now();
        let record = QuizRecord {
            id: id.clone(),
            title: title.to_string(),
            question_ids: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        let quiz = state.assemble(&record);
        state.quiz_order.push(id.clone());
        state.quizzes.insert(id, record);
        Ok(quiz)
    }

    pub fn get_quiz(&self, id: &str) -> Option<Quiz> {
        let state = self.lock();
        state.quizzes.get(id).map(|record| state.assemble(record))
    }

    pub fn contains_quiz(&self, id: &str) -> bool {
        self.lock().quizzes.contains_key(id)
    }

    /// Whether the question belongs to this quiz, not merely to some quiz.
    pub fn quiz_has_question(&self, quiz_id: &str, question_id: &str) -> bool {
        self.lock()
            .quizzes
            .get(quiz_id)
            .is_some_and(|record| record.question_ids.iter().any(|id| id == question_id))
    }

    /// All quizzes in creation order.
    pub fn list_quizzes(&self) -> Vec<Quiz> {
        let state = self.lock();
        state
            .quiz_order
            .iter()
            .filter_map(|id| state.quizzes.get(id))
            .map(|record| state.assemble(record))
            .collect()
    }

    pub fn quiz_summary(&self, id: &str) -> Option<QuizSummary> {
        let state = self.lock();
        state.quizzes.get(id).map(|record| state.summary(record))
    }

    pub fn quiz_summaries(&self) -> Vec<QuizSummary> {
        let state = self.lock();
        state
            .quiz_order
            .iter()
            .filter_map(|id| state.quizzes.get(id))
            .map(|record| state.summary(record))
            .collect()
    }

    pub fn update_quiz_title(&self, id: &str, title: &str) -> Option<QuizSummary> {
        let mut state = self.lock();
        let record = state.quizzes.get_mut(id)?;
        record.title = title.to_string();
        record.touch();
        let record = state.quizzes.get(id)?;
        Some(state.summary(record))
    }

    /// Removes the quiz and every question it owns. Returns whether it existed.
    pub fn delete_quiz(&self, id: &str) -> bool {
        let mut state = self.lock();
        let Some(record) = state.quizzes.remove(id) else {
            return false;
        };
        for question_id in &record.question_ids {
            state.questions.remove(question_id);
        }
        state.quiz_order.retain(|quiz_id| quiz_id != id);
        true
    }

    /// Appends a question to the quiz. `Ok(None)` when the quiz does not exist.
    pub fn add_question(&self, quiz_id: &str, spec: QuestionSpec) -> Result<Option<Question>> {
        let mut state = self.lock();
        if !state.quizzes.contains_key(quiz_id) {
            return Ok(None);
        }

        let question_id = state.fresh_question_id()?;
        let question = build_question(question_id.clone(), spec);
        state.questions.insert(question_id.clone(), question.clone());

        if let Some(record) = state.quizzes.get_mut(quiz_id) {
            record.question_ids.push(question_id);
            record.touch();
        }
        Ok(Some(question))
    }

    pub fn get_question(&self, id: &str) -> Option<Question> {
        self.lock().questions.get(id).cloned()
    }

    /// Questions of the quiz in insertion order; empty when the quiz is absent.
    pub fn get_questions_for_quiz(&self, quiz_id: &str) -> Vec<Question> {
        let state = self.lock();
        state
            .quizzes
            .get(quiz_id)
            .map(|record| state.questions_of(record))
            .unwrap_or_default()
    }

    /// Overwrites a question in place, keeping its id and position. Options get fresh ids.
    pub fn replace_question(
        &self,
        quiz_id: &str,
        question_id: &str,
        spec: QuestionSpec,
    ) -> Option<Question> {
        let mut state = self.lock();
        let record = state.quizzes.get_mut(quiz_id)?;
        if !record.question_ids.iter().any(|id| id == question_id) {
            return None;
        }
        record.touch();

        let question = build_question(question_id.to_string(), spec);
        state
            .questions
            .insert(question_id.to_string(), question.clone());
        Some(question)
    }

    pub fn delete_question(&self, quiz_id: &str, question_id: &str) -> bool {
        let mut state = self.lock();
        let Some(record) = state.quizzes.get_mut(quiz_id) else {
            return false;
        };
        let before = record.question_ids.len();
        record.question_ids.retain(|id| id != question_id);
        if record.question_ids.len() == before {
            return false;
        }
        record.touch();
        state.questions.remove(question_id);
        true
    }
}

fn build_question(id: String, spec: QuestionSpec) -> Question {
    let options = spec
        .options
        .into_iter()
        .map(|o| QuestionOption {
            id: generate_id(),
            text: o.text,
            is_correct: o.is_correct,
        })
        .collect();

    Question {
        id,
        text: spec.text,
        question_type: spec.question_type,
        options,
        max_words: spec.max_words,
        reference_answer: spec.reference_answer,
    }
}
