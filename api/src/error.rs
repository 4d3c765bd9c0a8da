use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::borrow::Cow;
use tracing::error;

#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request
    BadRequest(Cow<'static, str>),
    /// 403 Forbidden
    Forbidden,
    /// 404 Not Found
    NotFound,
    /// 409 Conflict
    Conflict(Cow<'static, str>),
    /// 500 Internal Server Error
    InternalServerError(anyhow::Error),
}

impl From<sqlx::error::Error> for ApiError {
    fn from(e: sqlx::error::Error) -> Self {
        match e {
            sqlx::Error::RowNotFound => Self::NotFound,
            sqlx::Error::Database(ref db)
                if db.kind() == sqlx::error::ErrorKind::UniqueViolation =>
            {
                Self::Conflict("release_id already exists".into())
            }
            _ => Self::InternalServerError(e.into()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text().into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::BadRequest(cow) => (StatusCode::BAD_REQUEST, cow).into_response(),
            ApiError::Forbidden => StatusCode::FORBIDDEN.into_response(),
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::Conflict(cow) => (StatusCode::CONFLICT, cow).into_response(),
            ApiError::InternalServerError(err) => {
                error!("Internal server error: {err:#}");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

/// JSON body extractor that reports malformed or incomplete payloads as
/// 400 Bad Request instead of axum's default rejection statuses.
#[derive(Debug, axum::extract::FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
