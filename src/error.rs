use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Activity not found")]
    UnknownActivity,

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Already signed up for this activity")]
    AlreadyRegistered,

    #[error("Activity is full")]
    ActivityFull,

    #[error("Participant not found")]
    NotRegistered,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::UnknownActivity | ApiError::NotRegistered => StatusCode::NOT_FOUND,
            ApiError::InvalidEmail | ApiError::AlreadyRegistered | ApiError::ActivityFull => {
                StatusCode::BAD_REQUEST
            }
        };

        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
