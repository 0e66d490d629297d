pub mod docs;
pub mod extract;
pub mod health;
pub mod quiz;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::middleware::security_headers::with_security_headers;
use crate::AppState;

/// Every route of the service with request tracing and security headers applied.
/// CORS and the body limit are left to the caller since they depend on configuration.
pub fn router(state: AppState) -> Router {
    let quiz_api = Router::new()
        .route(
            "/api/quizzes",
            get(quiz::list_quizzes).post(quiz::create_quiz),
        )
        .route(
            "/api/quizzes/:quiz_id",
            get(quiz::get_quiz)
                .patch(quiz::update_quiz)
                .delete(quiz::delete_quiz),
        )
        .route(
            "/api/quizzes/:quiz_id/questions",
            get(quiz::get_questions).post(quiz::add_question),
        )
        .route(
            "/api/quizzes/:quiz_id/questions/:question_id",
            get(quiz::get_question)
                .put(quiz::replace_question)
                .delete(quiz::delete_question),
        )
        .route("/api/quizzes/:quiz_id/submit", post(quiz::submit_quiz));

    let base_routes = Router::new()
        .route("/", get(health::index))
        .route("/health", get(health::health))
        .route("/api-docs/openapi.json", get(docs::openapi_json));

    let app = base_routes
        .merge(quiz_api)
        .fallback(health::not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    with_security_headers(app)
}
