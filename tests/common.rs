use tenancy_backend::{
    api::router::create_router,
    config::Config,
    domain::services::subdomains::IconValidation,
    infra::{
        factory::{build_state, run_sqlite_migrations},
        repositories::sqlite_tenant_repo::SqliteTenantRepo,
    },
    state::AppState,
};
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::sync::Arc;
use std::str::FromStr;
use uuid::Uuid;
use axum::{
    body::Body,
    http::{header, Request},
    response::Response,
    Router,
};
use tower::ServiceExt;
use serde_json::Value;

pub const ROOT_DOMAIN: &str = "example.com";

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        run_sqlite_migrations(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            root_domain: ROOT_DOMAIN.to_string(),
            protocol: "https".to_string(),
            icon_validation: IconValidation::Emoji,
        };

        let repo = Arc::new(SqliteTenantRepo::new(pool.clone()));
        let state = Arc::new(build_state(&config, repo).expect("Failed to build state"));
        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    #[allow(dead_code)]
    pub async fn create_tenant(&self, payload: Value) -> Response {
        self.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/tenants")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap()
        ).await.unwrap()
    }

    #[allow(dead_code)]
    pub async fn get(&self, uri: &str, host: Option<&str>) -> Response {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(host) = host {
            builder = builder.header(header::HOST, host);
        }
        self.router.clone().oneshot(builder.body(Body::empty()).unwrap()).await.unwrap()
    }

    #[allow(dead_code)]
    pub async fn delete(&self, uri: &str) -> Response {
        self.router.clone().oneshot(
            Request::builder().method("DELETE").uri(uri).body(Body::empty()).unwrap()
        ).await.unwrap()
    }
}

#[allow(dead_code)]
pub async fn parse_body(response: Response) -> Value {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    match serde_json::from_slice(&bytes) {
        Ok(v) => v,
        Err(e) => panic!("Failed to parse JSON: {:?}. Status: {}. Body: {:?}", e, status, String::from_utf8_lossy(&bytes))
    }
}

#[allow(dead_code)]
pub async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
        let _ = std::fs::remove_file(format!("{}-wal", self.db_filename));
        let _ = std::fs::remove_file(format!("{}-shm", self.db_filename));
    }
}
