use std::path::Path;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;
use trivia_api::db::{connect_in_memory, run_migrations, transfer::import_data};
use trivia_api::server::app::{app, AppState};
use trivia_api::server::pagination::PageSize;

pub struct TestApp {
    pub pool: SqlitePool,
    router: Router,
}

/// An app over an in-memory database loaded with the bundled `data/` set.
pub async fn spawn_app() -> TestApp {
    spawn_app_with_page_size(PageSize::default()).await
}

pub async fn spawn_app_with_page_size(page_size: PageSize) -> TestApp {
    let pool = connect_in_memory()
        .await
        .expect("Cannot open in-memory DB");
    run_migrations(&pool).await.expect("Migrations failed");
    import_data(&pool, &Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
        .await
        .expect("Cannot import test data");

    let router = app(AppState::new(pool.clone(), page_size));
    TestApp { pool, router }
}

impl TestApp {
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<String>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body)),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };
        (status, body)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Some(body.to_string())).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, None).await
    }
}
