use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::{postgres::{PgPoolOptions, PgConnectOptions}, sqlite::{SqlitePoolOptions, SqliteJournalMode, SqliteConnectOptions}};
use sqlx::{PgPool, SqlitePool, ConnectOptions};
use tracing::{info, warn};
use tracing::log::LevelFilter;
use tera::Tera;

use crate::config::Config;
use crate::domain::ports::TenantRepository;
use crate::domain::services::subdomains::IconValidation;
use crate::domain::services::tenant_service::TenantService;
use crate::error::AppError;
use crate::state::AppState;
use crate::infra::repositories::{
    memory_tenant_repo::InMemoryTenantRepo, postgres_tenant_repo::PostgresTenantRepo,
    sqlite_tenant_repo::SqliteTenantRepo,
};

pub fn load_templates() -> Result<Tera, AppError> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("base.html", include_str!("../../templates/base.html")),
        ("root.html", include_str!("../../templates/root.html")),
        ("tenant.html", include_str!("../../templates/tenant.html")),
        ("not_found.html", include_str!("../../templates/not_found.html")),
    ])
    .map_err(|e| AppError::InternalWithMsg(format!("Failed to load templates: {}", e)))?;
    Ok(tera)
}

pub fn build_state(config: &Config, repo: Arc<dyn TenantRepository>) -> Result<AppState, AppError> {
    if config.icon_validation == IconValidation::Lenient {
        warn!("Icon validation is lenient: any 1-10 character icon will be accepted");
    }

    Ok(AppState {
        config: config.clone(),
        tenant_service: Arc::new(TenantService::new(repo, config.clone())),
        templates: Arc::new(load_templates()?),
    })
}

pub async fn bootstrap_state(config: &Config) -> Result<AppState, AppError> {
    let database_url = &config.database_url;

    let repo: Arc<dyn TenantRepository> = if database_url == "memory" {
        warn!("Using in-memory tenant store; tenants will not survive a restart");
        Arc::new(InMemoryTenantRepo::new())
    } else if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        info!("Initializing PostgreSQL connection...");

        let opts: PgConnectOptions = database_url.parse()?;
        let opts = opts.log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_with(opts)
            .await?;

        run_postgres_migrations(&pool).await?;
        Arc::new(PostgresTenantRepo::new(pool))
    } else {
        info!("Initializing SQLite connection with WAL Mode...");

        let opts = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await?;

        run_sqlite_migrations(&pool).await?;
        Arc::new(SqliteTenantRepo::new(pool))
    };

    build_state(config, repo)
}

async fn run_postgres_migrations(pool: &PgPool) -> Result<(), AppError> {
    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await
        .map_err(|e| AppError::InternalWithMsg(format!("Failed to run Postgres migrations: {}", e)))
}

pub async fn run_sqlite_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .map_err(|e| AppError::InternalWithMsg(format!("Failed to run SQLite migrations: {}", e)))
}
