use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

/// Failures that end a request. Clients only ever see a bare 500; the cause
/// goes to the log.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("database error: {0:#}")]
    Database(#[from] anyhow::Error),

    #[error("template error: {0}")]
    Template(#[from] tera::Error),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        log::error!("{}", self);
        HttpResponse::InternalServerError()
            .content_type("text/plain; charset=utf-8")
            .body("Internal Server Error")
    }
}
