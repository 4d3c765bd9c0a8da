use crate::State;
use crate::auth::Principal;
use crate::error::{ApiError, ApiJson};
use axum::extract::Path;
use axum::http::StatusCode;
use axum::{Extension, Json};
use models::release::{NewRelease, Release, ReleaseUpdate};
use tracing::info;

const RELEASES_TAG: &str = "releases";

#[utoipa::path(
    get,
    path = "/releases",
    responses(
        (status = StatusCode::OK, description = "List of releases retrieved successfully", body = Vec<Release>),
        (status = StatusCode::INTERNAL_SERVER_ERROR, description = "Failed to retrieve releases"),
    ),
    tag = RELEASES_TAG
)]
pub async fn get_releases(
    Extension(state): Extension<State>,
) -> Result<Json<Vec<Release>>, ApiError> {
    let releases = super::fetch_releases(&state.pool).await?;
    Ok(Json(releases))
}

#[utoipa::path(
    post,
    path = "/releases",
    request_body = NewRelease,
    responses(
        (status = StatusCode::CREATED, description = "Release created successfully", body = Release),
        (status = StatusCode::BAD_REQUEST, description = "Payload missing required fields or malformed"),
        (status = StatusCode::FORBIDDEN, description = "Caller is not authenticated"),
        (status = StatusCode::CONFLICT, description = "A release with this release_id already exists"),
    ),
    security(
        ("Access Token" = [])
    ),
    tag = RELEASES_TAG
)]
pub async fn create_release(
    principal: Principal,
    Extension(state): Extension<State>,
    ApiJson(new_release): ApiJson<NewRelease>,
) -> Result<(StatusCode, Json<Release>), ApiError> {
    let release = super::insert_release(&new_release, &state.pool).await?;
    info!("{} created release {}", principal.name, release.release_id);
    Ok((StatusCode::CREATED, Json(release)))
}

#[utoipa::path(
    get,
    path = "/releases/{release_id}",
    params(
        ("release_id" = i64, Path),
    ),
    responses(
        (status = StatusCode::OK, description = "Release retrieved successfully", body = Release),
        (status = StatusCode::NOT_FOUND, description = "Release not found"),
    ),
    tag = RELEASES_TAG
)]
pub async fn get_release(
    Path(release_id): Path<i64>,
    Extension(state): Extension<State>,
) -> Result<Json<Release>, ApiError> {
    let release = super::fetch_release_by_id(release_id, &state.pool)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(release))
}

#[utoipa::path(
    put,
    path = "/releases/{release_id}",
    params(
        ("release_id" = i64, Path),
    ),
    request_body = NewRelease,
    responses(
        (status = StatusCode::OK, description = "Release replaced successfully", body = Release),
        (status = StatusCode::BAD_REQUEST, description = "Payload missing required fields or malformed"),
        (status = StatusCode::FORBIDDEN, description = "Caller is not authenticated"),
        (status = StatusCode::NOT_FOUND, description = "Release not found"),
    ),
    security(
        ("Access Token" = [])
    ),
    tag = RELEASES_TAG
)]
pub async fn update_release(
    Path(release_id): Path<i64>,
    principal: Principal,
    Extension(state): Extension<State>,
    ApiJson(new_release): ApiJson<NewRelease>,
) -> Result<Json<Release>, ApiError> {
    let release = super::replace_release(release_id, &new_release, &state.pool)
        .await?
        .ok_or(ApiError::NotFound)?;
    info!("{} replaced release {}", principal.name, release.release_id);
    Ok(Json(release))
}

#[utoipa::path(
    patch,
    path = "/releases/{release_id}",
    params(
        ("release_id" = i64, Path),
    ),
    request_body = ReleaseUpdate,
    responses(
        (status = StatusCode::OK, description = "Release updated successfully", body = Release),
        (status = StatusCode::BAD_REQUEST, description = "Payload malformed"),
        (status = StatusCode::FORBIDDEN, description = "Caller is not authenticated"),
        (status = StatusCode::NOT_FOUND, description = "Release not found"),
    ),
    security(
        ("Access Token" = [])
    ),
    tag = RELEASES_TAG
)]
pub async fn partial_update_release(
    Path(release_id): Path<i64>,
    principal: Principal,
    Extension(state): Extension<State>,
    ApiJson(update): ApiJson<ReleaseUpdate>,
) -> Result<Json<Release>, ApiError> {
    let release = super::patch_release(release_id, &update, &state.pool)
        .await?
        .ok_or(ApiError::NotFound)?;
    info!("{} updated release {}", principal.name, release.release_id);
    Ok(Json(release))
}

#[utoipa::path(
    delete,
    path = "/releases/{release_id}",
    params(
        ("release_id" = i64, Path),
    ),
    responses(
        (status = StatusCode::NO_CONTENT, description = "Release deleted successfully"),
        (status = StatusCode::FORBIDDEN, description = "Caller is not authenticated"),
        (status = StatusCode::NOT_FOUND, description = "Release not found"),
    ),
    security(
        ("Access Token" = [])
    ),
    tag = RELEASES_TAG
)]
pub async fn delete_release(
    Path(release_id): Path<i64>,
    principal: Principal,
    Extension(state): Extension<State>,
) -> Result<StatusCode, ApiError> {
    let deleted = super::delete_release_by_id(release_id, &state.pool).await?;
    if deleted == 0 {
        return Err(ApiError::NotFound);
    }
    info!("{} deleted release {release_id}", principal.name);
    Ok(StatusCode::NO_CONTENT)
}
