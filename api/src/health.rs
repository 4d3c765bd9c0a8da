use axum::http::StatusCode;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = StatusCode::OK, description = "Service is up"),
    ),
    tag = "health"
)]
pub async fn check() -> StatusCode {
    StatusCode::OK
}
