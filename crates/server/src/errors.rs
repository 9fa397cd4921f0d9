use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;

use crate::representation::Message;

/// Response-side view of the service error taxonomy. NotFound renders as
/// a bare 404; Validation carries a `message` body.
#[derive(Debug)]
pub enum ApiError {
    NotFound,
    Validation(String),
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(_) => Self::NotFound,
            ServiceError::Validation(msg) => Self::Validation(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND.into_response(),
            Self::Validation(msg) => {
                (StatusCode::BAD_REQUEST, Json(Message::new(msg))).into_response()
            }
        }
    }
}
