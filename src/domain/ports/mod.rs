use crate::domain::models::tenant::Tenant;
use crate::error::AppError;
use async_trait::async_trait;

/// Storage for tenant records, keyed by their canonical slug.
///
/// Implementations own slug uniqueness: `insert` must fail with
/// `AppError::Conflict` when the slug is already stored, even if the caller
/// checked with `find_by_slug` beforehand.
#[async_trait]
pub trait TenantRepository: Send + Sync {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Tenant>, AppError>;
    async fn find_all(&self) -> Result<Vec<Tenant>, AppError>;
    async fn insert(&self, tenant: &Tenant) -> Result<Tenant, AppError>;
    async fn delete_by_slug(&self, slug: &str) -> Result<bool, AppError>;
}
