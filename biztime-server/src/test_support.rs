//! Shared helpers for database-backed tests.
//!
//! Tests run in parallel against one database, so nothing is truncated:
//! every test works on its own company codes from `unique_code`.

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tokio::sync::OnceCell;
use tower::ServiceExt;

const SCHEMA: &str = include_str!("../schema.sql");

static SCHEMA_APPLIED: OnceCell<()> = OnceCell::const_new();
static NEXT_CODE: AtomicU32 = AtomicU32::new(0);

/// Pool against `DATABASE_URL` with the schema applied once per process.
pub(crate) async fn test_pool() -> PgPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("pool creation failed");

    SCHEMA_APPLIED
        .get_or_init(|| async {
            sqlx::raw_sql(SCHEMA)
                .execute(&pool)
                .await
                .expect("schema setup failed");
        })
        .await;

    pool
}

/// Pool that never connects. Good for requests rejected before any query.
/// Anything that does reach it fails after a short acquire timeout.
pub(crate) fn offline_pool() -> PgPool {
    PgPoolOptions::new()
        .acquire_timeout(Duration::from_millis(250))
        .connect_lazy("postgres://biztime@127.0.0.1:1/biztime")
        .expect("lazy pool")
}

/// Company code no other test in this run will use.
pub(crate) fn unique_code(prefix: &str) -> String {
    let n = NEXT_CODE.fetch_add(1, Ordering::Relaxed);
    format!("{}-{}-{}", prefix, chrono::Utc::now().timestamp_millis(), n)
}

pub(crate) async fn insert_company(pool: &PgPool, code: &str) -> String {
    sqlx::query("INSERT INTO companies (code, name, description) VALUES ($1, $2, $3)")
        .bind(code)
        .bind("Microsoft Corporation")
        .bind("Microsoft Corporation develops and supports software.")
        .execute(pool)
        .await
        .expect("insert company");
    code.to_owned()
}

/// Drive one request through the router, returning status and JSON body.
pub(crate) async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let raw = body.map(|json| json.to_string());
    send_raw(app, method, uri, "application/json", raw.as_deref()).await
}

/// Like `send`, with the body and its content type given verbatim.
pub(crate) async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    content_type: &str,
    body: Option<&str>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(raw) => builder
            .header("content-type", content_type)
            .body(Body::from(raw.to_owned())),
        None => builder.body(Body::empty()),
    }
    .expect("request");

    let response = app.clone().oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };

    (status, value)
}
