use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Format(String),

    #[error("{0} is required to make an appointment")]
    MissingField(String),

    #[error("doctor {0} is not in the database")]
    NotFound(String),

    #[error("the {0} slot already has three appointments booked")]
    Capacity(String),

    #[error("doctor {0} cannot be removed as they still have scheduled appointments")]
    Conflict(String),

    #[error("{0}")]
    Validation(String),

    #[error("database error: {0}")]
    Database(String),
}

// Storage failures bubble up as anyhow from the store trait.
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Database(err.to_string())
    }
}

// Every failure collapses to a 500 whose body is the raw error message;
// clients never see a 400/404 distinction.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.to_string();

        tracing::error!("Error: {}", message);

        (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
    }
}
