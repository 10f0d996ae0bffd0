use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use perk_offer::OfferError;
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    ValidationError(String),
    NotFoundError(String),
    /// Expected business outcome, not a fault
    NoApplicableOffer,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFoundError(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::NoApplicableOffer => (StatusCode::NOT_FOUND, "No applicable offer found".to_string()),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<OfferError> for AppError {
    fn from(err: OfferError) -> Self {
        match err {
            OfferError::Validation(_) => AppError::ValidationError(err.to_string()),
            OfferError::NotFound(_) => AppError::NotFoundError(err.to_string()),
        }
    }
}
