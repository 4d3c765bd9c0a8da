use axum::extract::{MatchedPath, Request};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::{Extension, Router, middleware, routing::get};
use sqlx::SqlitePool;
use std::future::ready;
use std::time::Instant;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_axum::{router::OpenApiRouter, routes};

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod health;
pub mod release;

use config::Config;

#[derive(Clone, Debug)]
pub struct State {
    pub pool: SqlitePool,
    pub config: &'static Config,
}

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "Access Token",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("Authorization"))),
            )
        }
    }
}

#[derive(OpenApi)]
#[openapi(modifiers(&SecurityAddon))]
struct ApiDoc;

/// Builds the application router. Read routes are public; write routes
/// authenticate through the `Principal` extractor.
pub fn app(state: State) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            release::route::get_releases,
            release::route::create_release
        ))
        .routes(routes!(
            release::route::get_release,
            release::route::update_release,
            release::route::partial_update_release,
            release::route::delete_release
        ))
        .routes(routes!(auth::route::whoami))
        .routes(routes!(health::check))
        .split_for_parts();

    let json_specification = api.to_pretty_json().expect("API docs generation failed");

    router
        .route_layer(middleware::from_fn(track_metrics))
        .route(
            "/docs/openapi.json",
            get(move || ready(json_specification.clone())),
        )
        .layer(Extension(state))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn track_metrics(req: Request, next: Next) -> impl IntoResponse {
    let start = Instant::now();
    let path = if let Some(matched_path) = req.extensions().get::<MatchedPath>() {
        matched_path.as_str().to_owned()
    } else {
        req.uri().path().to_owned()
    };
    let method = req.method().clone();

    let response = next.run(req).await;

    let latency = start.elapsed().as_secs_f64();
    let status = response.status().as_u16().to_string();

    let labels = [
        ("method", method.to_string()),
        ("path", path),
        ("status", status),
    ];

    metrics::increment_counter!("http_requests_total", &labels);
    metrics::histogram!("http_requests_duration_seconds", latency, &labels);

    response
}
