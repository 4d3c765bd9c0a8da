use api::config::{ApiToken, Config};
use api::{State, app, db};
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

const TOKEN: &str = "sekret";

async fn test_app() -> Router {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");
    db::migrate(&pool).await.expect("migration failed");

    let config: &'static Config = Box::leak(Box::new(Config {
        database_url: "sqlite::memory:".to_string(),
        api_tokens: vec![ApiToken {
            name: "tester".to_string(),
            secret: TOKEN.to_string(),
        }],
    }));

    app(State { pool, config })
}

fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).expect("failed to build request")
}

#[tokio::test]
async fn whoami_returns_principal() {
    let app = test_app().await;

    let response = app.oneshot(get("/auth/whoami", Some(TOKEN))).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["name"], "tester");
    assert_eq!(body["authorized"], true);
}

#[tokio::test]
async fn whoami_without_token() {
    let app = test_app().await;

    let response = app.oneshot(get("/auth/whoami", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn whoami_with_unknown_token() {
    let app = test_app().await;

    let response = app
        .oneshot(get("/auth/whoami", Some("not-a-real-token")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn health_check() {
    let app = test_app().await;

    let response = app.oneshot(get("/health", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = test_app().await;

    let response = app.oneshot(get("/docs/openapi.json", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["paths"]["/releases"].is_object());
}
