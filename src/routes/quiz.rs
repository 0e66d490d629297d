use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::{
    dto::quiz_dto::{
        CreateQuestionPayload, CreateQuizPayload, CreateQuizResponse, QuestionResponse,
        QuizDetailResponse, QuizListItem, SubmitQuizPayload, UpdateQuizPayload,
    },
    error::Result,
    routes::extract::ApiJson,
    utils::validation::validate,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/quizzes",
    tag = "quizzes",
    request_body = CreateQuizPayload,
    responses(
        (status = 201, description = "Quiz created", body = CreateQuizResponse),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn create_quiz(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateQuizPayload>,
) -> Result<impl IntoResponse> {
    validate(&payload)?;
    let quiz = state.quiz_service.create_quiz(&payload.title)?;
    Ok((StatusCode::CREATED, Json(CreateQuizResponse::from(quiz))))
}

#[utoipa::path(
    get,
    path = "/api/quizzes",
    tag = "quizzes",
    responses(
        (status = 200, description = "All quizzes in creation order", body = [QuizListItem])
    )
)]
#[axum::debug_handler]
pub async fn list_quizzes(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let items: Vec<QuizListItem> = state
        .quiz_service
        .list_quizzes()
        .into_iter()
        .map(QuizListItem::from)
        .collect();
    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/api/quizzes/{quiz_id}",
    tag = "quizzes",
    params(
        ("quiz_id" = String, Path, description = "Quiz ID")
    ),
    responses(
        (status = 200, description = "Quiz found", body = QuizDetailResponse),
        (status = 404, description = "Quiz not found")
    )
)]
#[axum::debug_handler]
pub async fn get_quiz(
    State(state): State<AppState>,
    Path(quiz_id): Path<String>,
) -> Result<impl IntoResponse> {
    let summary = state.quiz_service.get_quiz(&quiz_id)?;
    Ok(Json(QuizDetailResponse::from(summary)))
}

#[utoipa::path(
    patch,
    path = "/api/quizzes/{quiz_id}",
    tag = "quizzes",
    params(
        ("quiz_id" = String, Path, description = "Quiz ID")
    ),
    request_body = UpdateQuizPayload,
    responses(
        (status = 200, description = "Quiz renamed", body = QuizDetailResponse),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Quiz not found")
    )
)]
#[axum::debug_handler]
pub async fn update_quiz(
    State(state): State<AppState>,
    Path(quiz_id): Path<String>,
    ApiJson(payload): ApiJson<UpdateQuizPayload>,
) -> Result<impl IntoResponse> {
    validate(&payload)?;
    let summary = state.quiz_service.rename_quiz(&quiz_id, &payload.title)?;
    Ok(Json(QuizDetailResponse::from(summary)))
}

#[utoipa::path(
    delete,
    path = "/api/quizzes/{quiz_id}",
    tag = "quizzes",
    params(
        ("quiz_id" = String, Path, description = "Quiz ID")
    ),
    responses(
        (status = 204, description = "Quiz and its questions deleted"),
        (status = 404, description = "Quiz not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_quiz(
    State(state): State<AppState>,
    Path(quiz_id): Path<String>,
) -> Result<impl IntoResponse> {
    state.quiz_service.delete_quiz(&quiz_id)?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/quizzes/{quiz_id}/questions",
    tag = "questions",
    params(
        ("quiz_id" = String, Path, description = "Quiz ID")
    ),
    request_body = CreateQuestionPayload,
    responses(
        (status = 201, description = "Question added", body = QuestionResponse),
        (status = 400, description = "Invalid question"),
        (status = 404, description = "Quiz not found")
    )
)]
#[axum::debug_handler]
pub async fn add_question(
    State(state): State<AppState>,
    Path(quiz_id): Path<String>,
    ApiJson(payload): ApiJson<CreateQuestionPayload>,
) -> Result<impl IntoResponse> {
    let question = state.quiz_service.add_question_to_quiz(&quiz_id, &payload)?;
    Ok((StatusCode::CREATED, Json(QuestionResponse::from(question))))
}

#[utoipa::path(
    get,
    path = "/api/quizzes/{quiz_id}/questions",
    tag = "questions",
    params(
        ("quiz_id" = String, Path, description = "Quiz ID")
    ),
    responses(
        (status = 200, description = "Questions without answers", body = [PublicQuestion]),
        (status = 404, description = "Quiz not found")
    )
)]
#[axum::debug_handler]
pub async fn get_questions(
    State(state): State<AppState>,
    Path(quiz_id): Path<String>,
) -> Result<impl IntoResponse> {
    let questions = state.quiz_service.get_questions_for_quiz(&quiz_id)?;
    Ok(Json(questions))
}

#[utoipa::path(
    get,
    path = "/api/quizzes/{quiz_id}/questions/{question_id}",
    tag = "questions",
    params(
        ("quiz_id" = String, Path, description = "Quiz ID"),
        ("question_id" = String, Path, description = "Question ID")
    ),
    responses(
        (status = 200, description = "Question without answers", body = PublicQuestion),
        (status = 404, description = "Quiz or question not found")
    )
)]
#[axum::debug_handler]
pub async fn get_question(
    State(state): State<AppState>,
    Path((quiz_id, question_id)): Path<(String, String)>,
) -> Result<impl IntoResponse> {
    let question = state.quiz_service.get_question(&quiz_id, &question_id)?;
    Ok(Json(question))
}

#[utoipa::path(
    put,
    path = "/api/quizzes/{quiz_id}/questions/{question_id}",
    tag = "questions",
    params(
        ("quiz_id" = String, Path, description = "Quiz ID"),
        ("question_id" = String, Path, description = "Question ID")
    ),
    request_body = CreateQuestionPayload,
    responses(
        (status = 200, description = "Question replaced", body = QuestionResponse),
        (status = 400, description = "Invalid question"),
        (status = 404, description = "Quiz or question not found")
    )
)]
#[axum::debug_handler]
pub async fn replace_question(
    State(state): State<AppState>,
    Path((quiz_id, question_id)): Path<(String, String)>,
    ApiJson(payload): ApiJson<CreateQuestionPayload>,
) -> Result<impl IntoResponse> {
    let question = state
        .quiz_service
        .replace_question(&quiz_id, &question_id, &payload)?;
    Ok(Json(QuestionResponse::from(question)))
}

#[utoipa::path(
    delete,
    path = "/api/quizzes/{quiz_id}/questions/{question_id}",
    tag = "questions",
    params(
        ("quiz_id" = String, Path, description = "Quiz ID"),
        ("question_id" = String, Path, description = "Question ID")
    ),
    responses(
        (status = 204, description = "Question deleted"),
        (status = 404, description = "Quiz or question not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_question(
    State(state): State<AppState>,
    Path((quiz_id, question_id)): Path<(String, String)>,
) -> Result<impl IntoResponse> {
    state.quiz_service.delete_question(&quiz_id, &question_id)?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/quizzes/{quiz_id}/submit",
    tag = "quizzes",
    params(
        ("quiz_id" = String, Path, description = "Quiz ID")
    ),
    request_body = SubmitQuizPayload,
    responses(
        (status = 200, description = "Submission graded", body = ScoreResult),
        (status = 400, description = "Invalid answers"),
        (status = 404, description = "Quiz not found")
    )
)]
#[axum::debug_handler]
pub async fn submit_quiz(
    State(state): State<AppState>,
    Path(quiz_id): Path<String>,
    ApiJson(payload): ApiJson<SubmitQuizPayload>,
) -> Result<impl IntoResponse> {
    validate(&payload)?;
    let result = state.quiz_service.submit_quiz(&quiz_id, &payload.answers)?;
    Ok(Json(result))
}
