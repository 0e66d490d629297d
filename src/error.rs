use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A request body the JSON extractor refused before parsing, with the status it chose.
    #[error("{message}")]
    Rejection { status: StatusCode, message: String },

    #[error("{0} not found")]
    NotFound(String),

    /// A quiz, question or answer payload broke a structural or semantic rule.
    #[error("{message}")]
    Invalid { field: String, message: String },

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Invalid {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Error::NotFound(resource.into())
    }

    /// Stable tag the HTTP layer reports alongside the message.
    pub fn code(&self) -> &'static str {
        match self {
            Error::NotFound(_) => "NOT_FOUND",
            Error::Invalid { .. } | Error::Validation(_) => "VALIDATION_ERROR",
            Error::BadRequest(_) => "BAD_REQUEST",
            Error::Rejection { status, .. } => match *status {
                StatusCode::PAYLOAD_TOO_LARGE => "PAYLOAD_TOO_LARGE",
                StatusCode::UNSUPPORTED_MEDIA_TYPE => "UNSUPPORTED_MEDIA_TYPE",
                _ => "BAD_REQUEST",
            },
            _ => "INTERNAL_SERVER_ERROR",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Invalid { .. } | Error::Validation(_) | Error::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            Error::Rejection { status, .. } => *status,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let code = self.code();

        let (error_message, details) = match &self {
            Error::Invalid { field, message } => (message.clone(), Some(format!("Field: {}", field))),
            Error::Validation(err) => match first_validation_error(err) {
                Some((field, message)) => (message, Some(format!("Field: {}", field))),
                None => ("Validation error occurred".to_string(), None),
            },
            Error::BadRequest(message) | Error::Rejection { message, .. } => (message.clone(), None),
            Error::Config(_) | Error::Internal(_) => {
                ("An unexpected error occurred".to_string(), None)
            }
            other => (other.to_string(), None),
        };

        if status.is_server_error() {
            tracing::error!(error = %self, code, "request failed");
        } else {
            tracing::warn!(error = %self, code, "request rejected");
        }

        let body = match details {
            Some(details) => json!({ "error": error_message, "code": code, "details": details }),
            None => json!({ "error": error_message, "code": code }),
        };
        (status, Json(body)).into_response()
    }
}

/// Oversized bodies and missing content types keep axum's status (413, 415).
/// Syntax and shape errors in the JSON itself are plain 400s.
impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        match &rejection {
            JsonRejection::BytesRejection(_) | JsonRejection::MissingJsonContentType(_) => {
                Error::Rejection {
                    status: rejection.status(),
                    message: rejection.body_text(),
                }
            }
            _ => Error::BadRequest(rejection.body_text()),
        }
    }
}

/// First failing field in name order, with its message.
fn first_validation_error(errors: &validator::ValidationErrors) -> Option<(String, String)> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields.into_iter().find_map(|(field, errs)| {
        errs.first().map(|e| {
            let message = match &e.message {
                Some(msg) => msg.to_string(),
                None => format!("Invalid value for {}", field),
            };
            (field.to_string(), message)
        })
    })
}
