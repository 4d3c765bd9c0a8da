use super::Principal;
use axum::Json;
use axum::http::StatusCode;
use serde::Serialize;

const AUTH_TAG: &str = "auth";

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct WhoamiResponse {
    pub name: String,
    pub authorized: bool,
}

#[utoipa::path(
    get,
    path = "/auth/whoami",
    responses(
        (status = StatusCode::OK, description = "Return the authenticated principal", body = WhoamiResponse),
        (status = StatusCode::FORBIDDEN, description = "Missing or unknown token"),
    ),
    security(
        ("Access Token" = [])
    ),
    tag = AUTH_TAG
)]
pub async fn whoami(principal: Principal) -> Json<WhoamiResponse> {
    Json(WhoamiResponse {
        name: principal.name,
        authorized: true,
    })
}
