use std::collections::{HashMap, HashSet};

use crate::models::answer::{Answer, ScoreResult};
use crate::models::question::{Question, QuestionType};
use crate::utils::validation::normalize_text;

pub struct ScoringService;

impl ScoringService {
    /// Grades a submission. Every question counts toward `total`; answers for
    /// questions outside `questions` are ignored.
    pub fn score(questions: &[Question], answers: &[Answer]) -> ScoreResult {
        let by_question: HashMap<&str, &Answer> = answers
            .iter()
            .map(|a| (a.question_id.as_str(), a))
            .collect();

        let score: u32 = questions
            .iter()
            .filter_map(|q| by_question.get(q.id.as_str()).map(|a| Self::score_question(q, a)))
            .sum();

        ScoreResult {
            score,
            total: questions.len() as u32,
        }
    }

    /// 1 for a fully correct answer, 0 otherwise.
    pub fn score_question(question: &Question, answer: &Answer) -> u32 {
        let correct = match question.question_type {
            QuestionType::Single => score_single(question, answer),
            QuestionType::Multiple => score_multiple(question, answer),
            QuestionType::Text => score_text(question, answer),
        };
        u32::from(correct)
    }
}

fn score_single(question: &Question, answer: &Answer) -> bool {
    let Some(selected) = answer.selected_option_ids.as_deref() else {
        return false;
    };
    let [chosen] = selected else {
        return false;
    };
    question
        .correct_options()
        .next()
        .is_some_and(|correct| correct.id == *chosen)
}

fn score_multiple(question: &Question, answer: &Answer) -> bool {
    let Some(selected) = answer.selected_option_ids.as_deref() else {
        return false;
    };
    let selected: HashSet<&str> = selected.iter().map(String::as_str).collect();
    let correct: HashSet<&str> = question.correct_options().map(|o| o.id.as_str()).collect();

    selected.len() == correct.len() && selected.is_subset(&correct) && correct.is_subset(&selected)
}

fn score_text(question: &Question, answer: &Answer) -> bool {
    match (answer.text_answer.as_deref(), question.reference_answer.as_deref()) {
        (Some(given), Some(expected)) => normalize_text(given) == normalize_text(expected),
        _ => false,
    }
}
