use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_option_ids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_answer: Option<String>,
}

/// The populated half of an [`Answer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerPayload<'a> {
    Selection(&'a [String]),
    Text(&'a str),
}

impl Answer {
    pub fn selection(question_id: impl Into<String>, option_ids: &[&str]) -> Self {
        Self {
            question_id: question_id.into(),
            selected_option_ids: Some(option_ids.iter().map(|id| id.to_string()).collect()),
            text_answer: None,
        }
    }

    pub fn text(question_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            question_id: question_id.into(),
            selected_option_ids: None,
            text_answer: Some(text.into()),
        }
    }

    /// Returns `None` unless exactly one payload shape is present and non-empty.
    pub fn payload(&self) -> Option<AnswerPayload<'_>> {
        let selection = self
            .selected_option_ids
            .as_deref()
            .filter(|ids| !ids.is_empty());
        let text = self
            .text_answer
            .as_deref()
            .filter(|t| !t.trim().is_empty());

        match (selection, text) {
            (Some(ids), None) => Some(AnswerPayload::Selection(ids)),
            (None, Some(t)) => Some(AnswerPayload::Text(t)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ScoreResult {
    pub score: u32,
    pub total: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_requires_exactly_one_shape() {
        assert_eq!(
            Answer::selection("q1", &["o1"]).payload(),
            Some(AnswerPayload::Selection(&["o1".to_string()]))
        );
        assert_eq!(
            Answer::text("q1", " Paris ").payload(),
            Some(AnswerPayload::Text(" Paris "))
        );

        let both = Answer {
            question_id: "q1".into(),
            selected_option_ids: Some(vec!["o1".into()]),
            text_answer: Some("Paris".into()),
        };
        assert_eq!(both.payload(), None);

        let blank = Answer {
            question_id: "q1".into(),
            selected_option_ids: Some(vec![]),
            text_answer: Some("   ".into()),
        };
        assert_eq!(blank.payload(), None);
    }

    #[test]
    fn empty_selection_does_not_mask_text() {
        let answer = Answer {
            question_id: "q1".into(),
            selected_option_ids: Some(vec![]),
            text_answer: Some("Paris".into()),
        };
        assert_eq!(answer.payload(), Some(AnswerPayload::Text("Paris")));
    }
}
