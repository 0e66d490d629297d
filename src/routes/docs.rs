use axum::Json;
use utoipa::OpenApi;

use crate::dto::quiz_dto::{
    CreateOptionPayload, CreateQuestionPayload, CreateQuizPayload, CreateQuizResponse,
    PublicOption, PublicQuestion, QuestionResponse, QuizDetailResponse, QuizListItem,
    SubmitQuizPayload, UpdateQuizPayload,
};
use crate::models::answer::{Answer, ScoreResult};
use crate::models::question::{QuestionOption, QuestionType};
use crate::routes::quiz;

#[derive(OpenApi)]
#[openapi(
    paths(
        quiz::create_quiz,
        quiz::list_quizzes,
        quiz::get_quiz,
        quiz::update_quiz,
        quiz::delete_quiz,
        quiz::add_question,
        quiz::get_questions,
        quiz::get_question,
        quiz::replace_question,
        quiz::delete_question,
        quiz::submit_quiz,
    ),
    components(schemas(
        CreateQuizPayload,
        UpdateQuizPayload,
        CreateQuizResponse,
        QuizListItem,
        QuizDetailResponse,
        CreateQuestionPayload,
        CreateOptionPayload,
        QuestionResponse,
        QuestionOption,
        QuestionType,
        PublicQuestion,
        PublicOption,
        SubmitQuizPayload,
        Answer,
        ScoreResult,
    )),
    tags(
        (name = "quizzes", description = "Quiz management and submission"),
        (name = "questions", description = "Question authoring and retrieval")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
