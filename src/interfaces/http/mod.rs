pub mod catch_async;

pub use catch_async::{catch_async, Forwarded};

use crate::domain::error::AppError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use tracing::error;

pub const MASKED_MESSAGE: &str = "Something went wrong";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ErrorBody {
    pub status: String,
    pub message: String,
}

impl ErrorBody {
    /// Client-facing body: 4xx is `fail`, everything else `error`. Messages of
    /// non-operational errors never leave the process.
    pub fn from_error(err: &AppError) -> Self {
        let status = if (400..500).contains(&err.status_code()) {
            "fail"
        } else {
            "error"
        };
        let message = if err.is_operational() {
            err.message().to_string()
        } else {
            MASKED_MESSAGE.to_string()
        };
        Self {
            status: status.to_string(),
            message,
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(AppError::status_code(self))
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        if !self.is_operational() {
            error!(
                error = %self,
                location = %self.location(),
                "Unexpected error while handling request"
            );
        }
        HttpResponse::build(ResponseError::status_code(self)).json(ErrorBody::from_error(self))
    }
}
