use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::MessageDto;

/// Classified failures of the reviews API.
///
/// Returned explicitly by request parsing, services and repositories. Each variant
/// maps to a fixed status code and message; anything not listed here is an
/// unclassified fault handled by `AppError` as a 500.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewError {
    /// Malformed scalar or payload field: a non-integer review id, a non-integer vote
    /// delta, a wrong-typed or empty comment field, an unknown sort column, or a comment
    /// referencing a user or review that does not exist.
    ///
    /// Results in a 400 Bad Request response.
    #[error("invalid input")]
    InvalidInput,

    /// A mutation payload is missing a required field entirely.
    ///
    /// Results in a 400 Bad Request response.
    #[error("no input detected")]
    NoInputDetected,

    /// The referenced review does not exist.
    ///
    /// Results in a 404 Not Found response.
    #[error("review not found")]
    NotFound,

    /// A category filter matched no reviews.
    ///
    /// Results in a 404 Not Found response.
    #[error("no matching results")]
    NoMatchingResults,

    /// No route matches the request path.
    ///
    /// Results in a 404 Not Found response.
    #[error("route not found")]
    RouteNotFound,
}

impl ReviewError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput | Self::NoInputDetected => StatusCode::BAD_REQUEST,
            Self::NotFound | Self::NoMatchingResults | Self::RouteNotFound => {
                StatusCode::NOT_FOUND
            }
        }
    }
}

/// Converts classified errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - `InvalidInput`, `NoInputDetected`
/// - 404 Not Found - `NotFound`, `NoMatchingResults`, `RouteNotFound`
impl IntoResponse for ReviewError {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            Json(MessageDto {
                msg: self.to_string(),
            }),
        )
            .into_response()
    }
}
