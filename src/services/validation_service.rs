//! Payload rules for questions and submitted answers.
//!
//! Each check reports the first rule violated, in a fixed order, so the same
//! payload always yields the same error.

use std::collections::HashMap;

use crate::dto::quiz_dto::CreateQuestionPayload;
use crate::error::{Error, Result};
use crate::models::answer::{Answer, AnswerPayload};
use crate::models::question::{OptionSpec, Question, QuestionSpec, QuestionType};
use crate::utils::validation::{char_len, word_count};

pub const MAX_TITLE_CHARS: usize = 100;
pub const MAX_QUESTION_CHARS: usize = 500;
pub const MAX_OPTION_CHARS: usize = 200;
pub const MAX_WORDS_LIMIT: i64 = 1000;
pub const MIN_CHOICE_OPTIONS: usize = 2;

pub fn validate_title(title: &str) -> Result<()> {
    let len = char_len(title);
    if len == 0 {
        return Err(Error::invalid("title", "Quiz title cannot be empty"));
    }
    if len > MAX_TITLE_CHARS {
        return Err(Error::invalid(
            "title",
            format!("Quiz title cannot exceed {} characters", MAX_TITLE_CHARS),
        ));
    }
    Ok(())
}

/// Checks a question payload and turns it into a [`QuestionSpec`] ready for the store.
///
/// Structural rules run first (text, option texts, reference answer, `maxWords`),
/// then the rules of the declared question type.
pub fn validate_question(payload: &CreateQuestionPayload) -> Result<QuestionSpec> {
    let text_len = char_len(&payload.text);
    if text_len == 0 {
        return Err(Error::invalid("text", "Question text cannot be empty"));
    }
    if text_len > MAX_QUESTION_CHARS {
        return Err(Error::invalid(
            "text",
            format!("Question text cannot exceed {} characters", MAX_QUESTION_CHARS),
        ));
    }

    let options = payload.options.as_deref().unwrap_or_default();
    for (idx, option) in options.iter().enumerate() {
        check_option_text(&format!("options[{}].text", idx), &option.text, "Option text")?;
    }
    if let Some(answer) = &payload.correct_answer {
        check_option_text("correctAnswer", answer, "Correct answer")?;
    }

    let max_words = match payload.max_words {
        Some(n) if !(1..=MAX_WORDS_LIMIT).contains(&n) => {
            return Err(Error::invalid(
                "maxWords",
                format!("maxWords must be between 1 and {}", MAX_WORDS_LIMIT),
            ));
        }
        Some(n) => u32::try_from(n).ok(),
        None => None,
    };

    let correct_count = options.iter().filter(|o| o.is_correct).count();
    match payload.question_type {
        QuestionType::Single => {
            check_choice_shape(payload, options.len())?;
            if correct_count != 1 {
                return Err(Error::invalid(
                    "options",
                    "Single choice questions must have exactly one correct option",
                ));
            }
        }
        QuestionType::Multiple => {
            check_choice_shape(payload, options.len())?;
            if correct_count == 0 {
                return Err(Error::invalid(
                    "options",
                    "Multiple choice questions must have at least one correct option",
                ));
            }
        }
        QuestionType::Text => {
            if max_words.is_none() {
                return Err(Error::invalid(
                    "maxWords",
                    "Text questions require maxWords greater than 0",
                ));
            }
        }
    }

    let spec = match payload.question_type {
        QuestionType::Text => QuestionSpec {
            text: payload.text.clone(),
            question_type: QuestionType::Text,
            options: Vec::new(),
            max_words,
            reference_answer: payload
                .correct_answer
                .clone()
                .or_else(|| options.first().map(|o| o.text.clone())),
        },
        question_type => QuestionSpec {
            text: payload.text.clone(),
            question_type,
            options: options
                .iter()
                .map(|o| OptionSpec {
                    text: o.text.clone(),
                    is_correct: o.is_correct,
                })
                .collect(),
            max_words,
            reference_answer: None,
        },
    };
    Ok(spec)
}

fn check_option_text(field: &str, text: &str, label: &str) -> Result<()> {
    let len = char_len(text);
    if len == 0 {
        return Err(Error::invalid(field, format!("{} cannot be empty", label)));
    }
    if len > MAX_OPTION_CHARS {
        return Err(Error::invalid(
            field,
            format!("{} cannot exceed {} characters", label, MAX_OPTION_CHARS),
        ));
    }
    Ok(())
}

fn check_choice_shape(payload: &CreateQuestionPayload, option_count: usize) -> Result<()> {
    if option_count < MIN_CHOICE_OPTIONS {
        return Err(Error::invalid(
            "options",
            format!(
                "{} choice questions require at least {} options",
                capitalize(payload.question_type.as_str()),
                MIN_CHOICE_OPTIONS
            ),
        ));
    }
    if payload.correct_answer.is_some() {
        return Err(Error::invalid(
            "correctAnswer",
            "correctAnswer is only allowed on text questions",
        ));
    }
    Ok(())
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Checks a whole submission against the quiz's questions. Any violation rejects the batch.
pub fn validate_answers(questions: &[Question], answers: &[Answer]) -> Result<()> {
    let by_id: HashMap<&str, &Question> =
        questions.iter().map(|q| (q.id.as_str(), q)).collect();

    for (idx, answer) in answers.iter().enumerate() {
        let Some(question) = by_id.get(answer.question_id.as_str()) else {
            return Err(Error::invalid(
                format!("answers[{}].questionId", idx),
                format!("Question with ID {} not found", answer.question_id),
            ));
        };
        validate_answer(idx, question, answer)?;
    }
    Ok(())
}

fn validate_answer(idx: usize, question: &Question, answer: &Answer) -> Result<()> {
    let qid = &question.id;
    let payload = answer.payload();

    if payload.is_none() && has_selection(answer) && has_text(answer) {
        return Err(Error::invalid(
            format!("answers[{}]", idx),
            format!(
                "Answer for question {} must provide either selectedOptionIds or textAnswer, not both",
                qid
            ),
        ));
    }

    match question.question_type {
        QuestionType::Single | QuestionType::Multiple => {
            let Some(AnswerPayload::Selection(selected)) = payload else {
                return Err(Error::invalid(
                    format!("answers[{}].selectedOptionIds", idx),
                    format!("Selected options required for question {}", qid),
                ));
            };

            if let Some(unknown) = selected.iter().find(|id| question.option(id).is_none()) {
                return Err(Error::invalid(
                    format!("answers[{}].selectedOptionIds", idx),
                    format!("Invalid option ID {} for question {}", unknown, qid),
                ));
            }

            if question.question_type == QuestionType::Single && selected.len() != 1 {
                return Err(Error::invalid(
                    format!("answers[{}].selectedOptionIds", idx),
                    format!("Single choice question {} requires exactly one option", qid),
                ));
            }
        }
        QuestionType::Text => {
            let Some(AnswerPayload::Text(text)) = payload else {
                return Err(Error::invalid(
                    format!("answers[{}].textAnswer", idx),
                    format!("Text answer required for question {}", qid),
                ));
            };

            if let Some(max_words) = question.max_words {
                if word_count(text) > max_words as usize {
                    return Err(Error::invalid(
                        format!("answers[{}].textAnswer", idx),
                        format!(
                            "Text answer for question {} exceeds {} words",
                            qid, max_words
                        ),
                    ));
                }
            }
        }
    }
    Ok(())
}

fn has_selection(answer: &Answer) -> bool {
    answer
        .selected_option_ids
        .as_ref()
        .is_some_and(|ids| !ids.is_empty())
}

fn has_text(answer: &Answer) -> bool {
    answer
        .text_answer
        .as_ref()
        .is_some_and(|t| !t.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::quiz_dto::CreateOptionPayload;
    use crate::models::question::QuestionOption;

    fn option(text: &str, is_correct: bool) -> CreateOptionPayload {
        CreateOptionPayload {
            text: text.to_string(),
            is_correct,
        }
    }

    fn payload(
        question_type: QuestionType,
        options: Option<Vec<CreateOptionPayload>>,
        max_words: Option<i64>,
    ) -> CreateQuestionPayload {
        CreateQuestionPayload {
            text: "What is 2+2?".to_string(),
            question_type,
            options,
            max_words,
            correct_answer: None,
        }
    }

    fn field_of(err: Error) -> String {
        match err {
            Error::Invalid { field, .. } => field,
            other => panic!("expected validation failure, got {:?}", other),
        }
    }

    #[test]
    fn title_bounds() {
        assert!(validate_title("Math Quiz").is_ok());
        assert!(validate_title(&"a".repeat(100)).is_ok());
        assert_eq!(field_of(validate_title("").unwrap_err()), "title");
        assert_eq!(field_of(validate_title(&"a".repeat(101)).unwrap_err()), "title");
    }

    #[test]
    fn single_requires_exactly_one_correct() {
        let none = payload(
            QuestionType::Single,
            Some(vec![option("3", false), option("4", false)]),
            None,
        );
        assert_eq!(field_of(validate_question(&none).unwrap_err()), "options");

        let two = payload(
            QuestionType::Single,
            Some(vec![option("3", false), option("4", true), option("5", true)]),
            None,
        );
        assert_eq!(field_of(validate_question(&two).unwrap_err()), "options");

        let one = payload(
            QuestionType::Single,
            Some(vec![option("3", false), option("4", true), option("5", false)]),
            None,
        );
        let spec = validate_question(&one).unwrap();
        assert_eq!(spec.options.len(), 3);
        assert!(spec.options[1].is_correct);
    }

    #[test]
    fn choice_questions_need_two_options() {
        let lonely = payload(QuestionType::Single, Some(vec![option("4", true)]), None);
        assert_eq!(field_of(validate_question(&lonely).unwrap_err()), "options");

        let missing = payload(QuestionType::Multiple, None, None);
        let err = validate_question(&missing).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Multiple choice questions require at least 2 options"
        );
    }

    #[test]
    fn multiple_requires_a_correct_option() {
        let none = payload(
            QuestionType::Multiple,
            Some(vec![option("2", false), option("3", false), option("4", false)]),
            None,
        );
        assert_eq!(field_of(validate_question(&none).unwrap_err()), "options");

        let some = payload(
            QuestionType::Multiple,
            Some(vec![option("2", true), option("3", true), option("4", false)]),
            None,
        );
        assert!(validate_question(&some).is_ok());
    }

    #[test]
    fn text_requires_max_words() {
        let without = payload(QuestionType::Text, None, None);
        assert_eq!(field_of(validate_question(&without).unwrap_err()), "maxWords");

        let with = payload(QuestionType::Text, None, Some(10));
        let spec = validate_question(&with).unwrap();
        assert_eq!(spec.max_words, Some(10));
        assert!(spec.options.is_empty());
        assert_eq!(spec.reference_answer, None);
    }

    #[test]
    fn max_words_range_is_structural() {
        for bad in [0, -3, 1001] {
            let p = payload(QuestionType::Text, None, Some(bad));
            assert_eq!(field_of(validate_question(&p).unwrap_err()), "maxWords");
        }
        let edge = payload(QuestionType::Text, None, Some(1000));
        assert!(validate_question(&edge).is_ok());
    }

    #[test]
    fn text_reference_answer_prefers_explicit_field() {
        let mut p = payload(QuestionType::Text, Some(vec![option("Paris", true)]), Some(5));
        assert_eq!(
            validate_question(&p).unwrap().reference_answer.as_deref(),
            Some("Paris")
        );

        p.correct_answer = Some("Lyon".into());
        assert_eq!(
            validate_question(&p).unwrap().reference_answer.as_deref(),
            Some("Lyon")
        );
    }

    #[test]
    fn correct_answer_rejected_on_choice_questions() {
        let mut p = payload(
            QuestionType::Single,
            Some(vec![option("3", false), option("4", true)]),
            None,
        );
        p.correct_answer = Some("4".into());
        assert_eq!(field_of(validate_question(&p).unwrap_err()), "correctAnswer");
    }

    #[test]
    fn reports_first_violation_in_order() {
        let p = CreateQuestionPayload {
            text: String::new(),
            question_type: QuestionType::Single,
            options: Some(vec![option("", true)]),
            max_words: Some(0),
            correct_answer: None,
        };
        assert_eq!(field_of(validate_question(&p).unwrap_err()), "text");

        let p = CreateQuestionPayload {
            text: "ok".into(),
            ..p
        };
        assert_eq!(field_of(validate_question(&p).unwrap_err()), "options[0].text");

        let p = CreateQuestionPayload {
            options: Some(vec![option("x", true)]),
            ..p
        };
        assert_eq!(field_of(validate_question(&p).unwrap_err()), "maxWords");
    }

    #[test]
    fn text_length_counts_characters() {
        let mut p = payload(QuestionType::Text, None, Some(3));
        p.text = "é".repeat(500);
        assert!(validate_question(&p).is_ok());
        p.text = "é".repeat(501);
        assert_eq!(field_of(validate_question(&p).unwrap_err()), "text");

        let max_option = payload(
            QuestionType::Multiple,
            Some(vec![option(&"o".repeat(200), true), option("b", false)]),
            None,
        );
        assert!(validate_question(&max_option).is_ok());

        let long_option = payload(
            QuestionType::Multiple,
            Some(vec![option(&"o".repeat(201), true), option("b", false)]),
            None,
        );
        assert_eq!(
            field_of(validate_question(&long_option).unwrap_err()),
            "options[0].text"
        );
    }

    fn quiz_questions() -> Vec<Question> {
        vec![
            Question {
                id: "q1".into(),
                text: "What is 2+2?".into(),
                question_type: QuestionType::Single,
                options: vec![
                    QuestionOption { id: "o1".into(), text: "3".into(), is_correct: false },
                    QuestionOption { id: "o2".into(), text: "4".into(), is_correct: true },
                ],
                max_words: None,
                reference_answer: None,
            },
            Question {
                id: "q2".into(),
                text: "Capital of France?".into(),
                question_type: QuestionType::Text,
                options: vec![],
                max_words: Some(3),
                reference_answer: Some("Paris".into()),
            },
        ]
    }

    #[test]
    fn accepts_well_formed_submission() {
        let answers = vec![Answer::selection("q1", &["o2"]), Answer::text("q2", "Paris")];
        assert!(validate_answers(&quiz_questions(), &answers).is_ok());
        assert!(validate_answers(&quiz_questions(), &[]).is_ok());
    }

    #[test]
    fn unknown_question_names_the_id() {
        let answers = vec![Answer::selection("q1", &["o2"]), Answer::selection("nope", &["o1"])];
        let err = validate_answers(&quiz_questions(), &answers).unwrap_err();
        assert_eq!(err.to_string(), "Question with ID nope not found");
    }

    #[test]
    fn invalid_option_names_the_id() {
        let err = validate_answers(&quiz_questions(), &[Answer::selection("q1", &["o9"])])
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid option ID o9 for question q1");
    }

    #[test]
    fn single_choice_needs_exactly_one_selection() {
        let err = validate_answers(&quiz_questions(), &[Answer::selection("q1", &["o1", "o2"])])
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Single choice question q1 requires exactly one option"
        );

        let err = validate_answers(&quiz_questions(), &[Answer::selection("q1", &[])]).unwrap_err();
        assert_eq!(err.to_string(), "Selected options required for question q1");
    }

    #[test]
    fn text_answers_are_required_and_bounded() {
        let err = validate_answers(&quiz_questions(), &[Answer::text("q2", "   ")]).unwrap_err();
        assert_eq!(err.to_string(), "Text answer required for question q2");

        let err = validate_answers(&quiz_questions(), &[Answer::text("q2", "one two three four")])
            .unwrap_err();
        assert_eq!(err.to_string(), "Text answer for question q2 exceeds 3 words");

        assert!(validate_answers(&quiz_questions(), &[Answer::text("q2", "  one   two  three ")]).is_ok());
    }

    #[test]
    fn answers_must_not_mix_shapes() {
        let mixed = Answer {
            question_id: "q1".into(),
            selected_option_ids: Some(vec!["o2".into()]),
            text_answer: Some("4".into()),
        };
        let err = validate_answers(&quiz_questions(), &[mixed]).unwrap_err();
        assert_eq!(field_of(err), "answers[0]");
    }

    #[test]
    fn one_bad_answer_rejects_the_batch() {
        let answers = vec![
            Answer::selection("q1", &["o2"]),
            Answer::text("q2", "Paris"),
            Answer::selection("q1", &["bogus"]),
        ];
        let err = validate_answers(&quiz_questions(), &answers).unwrap_err();
        assert_eq!(field_of(err), "answers[2].selectedOptionIds");
    }
}
