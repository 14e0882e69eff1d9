use crate::application::{ApplicationResult, error::ApplicationError};
use crate::presentation::http::views;
use axum::{
    Json,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

const INTERNAL_MESSAGE: &str = "internal server error";
const UNAVAILABLE_MESSAGE: &str = "database connection error";

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
            ApplicationError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            ApplicationError::UnresolvedPath(missing) => {
                Self::new(StatusCode::NOT_FOUND, missing.to_string())
            }
            ApplicationError::Unavailable(msg) => {
                tracing::warn!(error = %msg, "backing store unavailable");
                Self::new(StatusCode::SERVICE_UNAVAILABLE, UNAVAILABLE_MESSAGE.into())
            }
            ApplicationError::Infrastructure(msg) => {
                tracing::error!(error = %msg, "query failed");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.into())
            }
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message.into())
    }

    fn new(status: StatusCode, message: String) -> Self {
        Self { status, message }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorResponse {
            error: self
                .status
                .canonical_reason()
                .unwrap_or("error")
                .to_string(),
            message: self.message,
        };
        (self.status, Json(payload)).into_response()
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}

/// Same classification as [`HttpError`], rendered as an HTML page for the
/// browsable routes.
#[derive(Debug)]
pub struct PageError(pub HttpError);

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.0.status();
        let body = views::error_page(status, self.0.message());
        (status, Html(body)).into_response()
    }
}

impl From<HttpError> for PageError {
    fn from(err: HttpError) -> Self {
        Self(err)
    }
}

pub type PageResult<T> = Result<T, PageError>;

pub trait IntoPageResult<T> {
    fn into_page(self) -> PageResult<T>;
}

impl<T> IntoPageResult<T> for ApplicationResult<T> {
    fn into_page(self) -> PageResult<T> {
        self.map_err(|err| PageError(HttpError::from_error(err)))
    }
}
