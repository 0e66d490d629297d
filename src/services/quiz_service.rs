use crate::database::store::QuizStore;
use crate::dto::quiz_dto::{CreateQuestionPayload, PublicQuestion};
use crate::error::{Error, Result};
use crate::models::answer::{Answer, ScoreResult};
use crate::models::question::Question;
use crate::models::quiz::{Quiz, QuizSummary};
use crate::services::scoring_service::ScoringService;
use crate::services::validation_service::{validate_answers, validate_question, validate_title};

#[derive(Clone)]
pub struct QuizService {
    store: QuizStore,
}

impl QuizService {
    pub fn new(store: QuizStore) -> Self {
        Self { store }
    }

    pub fn create_quiz(&self, title: &str) -> Result<Quiz> {
        validate_title(title)?;
        let quiz = self.store.create_quiz(title)?;
        tracing::info!(quiz_id = %quiz.id, "Quiz created");
        Ok(quiz)
    }

    pub fn list_quizzes(&self) -> Vec<QuizSummary> {
        self.store.quiz_summaries()
    }

    pub fn get_quiz(&self, quiz_id: &str) -> Result<QuizSummary> {
        self.store
            .quiz_summary(quiz_id)
            .ok_or_else(|| Error::not_found("Quiz"))
    }

    pub fn rename_quiz(&self, quiz_id: &str, title: &str) -> Result<QuizSummary> {
        validate_title(title)?;
        let summary = self
            .store
            .update_quiz_title(quiz_id, title)
            .ok_or_else(|| Error::not_found("Quiz"))?;
        tracing::info!(quiz_id, "Quiz renamed");
        Ok(summary)
    }

    pub fn delete_quiz(&self, quiz_id: &str) -> Result<()> {
        if !self.store.delete_quiz(quiz_id) {
            return Err(Error::not_found("Quiz"));
        }
        tracing::info!(quiz_id, "Quiz deleted");
        Ok(())
    }

    pub fn add_question_to_quiz(
        &self,
        quiz_id: &str,
        payload: &CreateQuestionPayload,
    ) -> Result<Question> {
        if !self.store.contains_quiz(quiz_id) {
            return Err(Error::not_found("Quiz"));
        }
        let spec = validate_question(payload)?;
        let question = self
            .store
            .add_question(quiz_id, spec)?
            .ok_or_else(|| Error::not_found("Quiz"))?;

        tracing::info!(
            quiz_id,
            question_id = %question.id,
            question_type = question.question_type.as_str(),
            "Question added"
        );
        Ok(question)
    }

    /// Full overwrite of an existing question; option ids are regenerated.
    pub fn replace_question(
        &self,
        quiz_id: &str,
        question_id: &str,
        payload: &CreateQuestionPayload,
    ) -> Result<Question> {
        if !self.store.contains_quiz(quiz_id) {
            return Err(Error::not_found("Quiz"));
        }
        if !self.store.quiz_has_question(quiz_id, question_id) {
            return Err(Error::not_found("Question"));
        }
        let spec = validate_question(payload)?;
        let question = self
            .store
            .replace_question(quiz_id, question_id, spec)
            .ok_or_else(|| Error::not_found("Question"))?;

        tracing::info!(quiz_id, question_id, "Question replaced");
        Ok(question)
    }

    pub fn delete_question(&self, quiz_id: &str, question_id: &str) -> Result<()> {
        if !self.store.contains_quiz(quiz_id) {
            return Err(Error::not_found("Quiz"));
        }
        if !self.store.delete_question(quiz_id, question_id) {
            return Err(Error::not_found("Question"));
        }
        tracing::info!(quiz_id, question_id, "Question deleted");
        Ok(())
    }

    /// Questions as a quiz-taker sees them: no correctness flags, no reference answers.
    pub fn get_questions_for_quiz(&self, quiz_id: &str) -> Result<Vec<PublicQuestion>> {
        let quiz = self.load_quiz(quiz_id)?;
        Ok(quiz.questions.iter().map(PublicQuestion::from).collect())
    }

    pub fn get_question(&self, quiz_id: &str, question_id: &str) -> Result<PublicQuestion> {
        let quiz = self.load_quiz(quiz_id)?;
        quiz.questions
            .iter()
            .find(|q| q.id == question_id)
            .map(PublicQuestion::from)
            .ok_or_else(|| Error::not_found("Question"))
    }

    /// Validates the whole batch, then grades it.
    pub fn submit_quiz(&self, quiz_id: &str, answers: &[Answer]) -> Result<ScoreResult> {
        let quiz = self.load_quiz(quiz_id)?;
        validate_answers(&quiz.questions, answers)?;

        let result = ScoringService::score(&quiz.questions, answers);
        tracing::info!(
            quiz_id,
            answers = answers.len(),
            score = result.score,
            total = result.total,
            "Quiz submitted"
        );
        Ok(result)
    }

    fn load_quiz(&self, quiz_id: &str) -> Result<Quiz> {
        self.store
            .get_quiz(quiz_id)
            .ok_or_else(|| Error::not_found("Quiz"))
    }
}
