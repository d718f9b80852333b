use crate::domain::{models::tenant::Tenant, ports::TenantRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresTenantRepo {
    pool: PgPool,
}

impl PostgresTenantRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TenantRepository for PostgresTenantRepo {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Tenant>, AppError> {
        sqlx::query_as::<_, Tenant>(
            "SELECT id, slug, name, icon, created_at FROM tenants WHERE slug = $1",
        )
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_all(&self) -> Result<Vec<Tenant>, AppError> {
        sqlx::query_as::<_, Tenant>(
            "SELECT id, slug, name, icon, created_at FROM tenants ORDER BY created_at, slug",
        )
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn insert(&self, tenant: &Tenant) -> Result<Tenant, AppError> {
        sqlx::query_as::<_, Tenant>(
            "INSERT INTO tenants (id, slug, name, icon, created_at) VALUES ($1, $2, $3, $4, $5) RETURNING id, slug, name, icon, created_at"
        )
            .bind(&tenant.id)
            .bind(&tenant.slug)
            .bind(&tenant.name)
            .bind(&tenant.icon)
            .bind(tenant.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::from_insert(e, "tenant"))
    }

    async fn delete_by_slug(&self, slug: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM tenants WHERE slug = $1")
            .bind(slug)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(result.rows_affected() > 0)
    }
}
