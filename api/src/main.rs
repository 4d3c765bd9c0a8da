use api::config::Config;
use api::{State, db};
use axum::routing::get;
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::future::ready;
use std::str::FromStr;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, prelude::*};

fn main() {
    let config: &'static Config = Box::leak(Box::new(
        Config::new().expect("error: failed to construct config"),
    ));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Corresponds to `#[tokio::main]`.
    // See https://docs.rs/tokio-macros/latest/src/tokio_macros/lib.rs.html#225.
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("error: failed to initialize tokio runtime")
        .block_on(async {
            _ = tokio::spawn(async move { start_main_server(config).await }).await;
        });
}

async fn start_main_server(config: &'static Config) {
    info!(
        "Starting Product Delivery Console API v{}",
        env!("CARGO_PKG_VERSION")
    );

    // set up connection pool
    let options = SqliteConnectOptions::from_str(&config.database_url)
        .expect("error: invalid DATABASE_URL")
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .expect("can't connect to database.");

    db::migrate(&pool).await.expect("sqlx migration failed");

    let state = State { pool, config };

    let recorder_handle = setup_metrics_recorder();

    let app = api::app(state).route("/metrics", get(move || ready(recorder_handle.render())));

    let listener = TcpListener::bind("0.0.0.0:8080")
        .await
        .expect("error: failed to bind to port");
    info!(
        "Product Delivery Console API running on http://{} (Press Ctrl+C to quit)",
        listener.local_addr().unwrap()
    );
    axum::serve(listener, app)
        .await
        .expect("error: failed to initialize axum server");
}

fn setup_metrics_recorder() -> PrometheusHandle {
    const EXPONENTIAL_SECONDS: &[f64] = &[
        0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
    ];

    PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full("http_requests_duration_seconds".to_string()),
            EXPONENTIAL_SECONDS,
        )
        .expect("error: failed to build prometheus recorder")
        .install_recorder()
        .expect("error: failed to install prometheus recorder")
}
