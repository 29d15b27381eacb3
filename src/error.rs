use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

#[derive(serde::Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("authentication required")]
    Unauthorized,

    #[error("admin privileges required")]
    Forbidden,

    #[error(transparent)]
    Validation(#[from] validator::ValidationErrors),

    #[error("no active check-in for this room")]
    NoActiveStay,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("internal server error")]
    Internal,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NoActiveStay => StatusCode::CONFLICT,
            ApiError::Database(_) | ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            // Field-level messages straight from the validator.
            ApiError::Validation(errors) => HttpResponse::BadRequest().json(errors),
            ApiError::Database(e) => {
                log::error!("database error: {e}");
                HttpResponse::InternalServerError().json(ErrorBody {
                    error: "database error".to_string(),
                })
            }
            other => HttpResponse::build(other.status_code()).json(ErrorBody {
                error: other.to_string(),
            }),
        }
    }
}
