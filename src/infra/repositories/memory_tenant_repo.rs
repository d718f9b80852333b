use std::collections::BTreeMap;
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{models::tenant::Tenant, ports::TenantRepository};
use crate::error::AppError;

/// Process-local store with the same slug uniqueness guarantee as the SQL
/// repositories. Used by tests and for running without a database.
#[derive(Default)]
pub struct InMemoryTenantRepo {
    tenants: RwLock<BTreeMap<String, Tenant>>,
}

impl InMemoryTenantRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TenantRepository for InMemoryTenantRepo {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Tenant>, AppError> {
        Ok(self.tenants.read().await.get(slug).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Tenant>, AppError> {
        let mut tenants: Vec<Tenant> = self.tenants.read().await.values().cloned().collect();
        tenants.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.slug.cmp(&b.slug)));
        Ok(tenants)
    }

    async fn insert(&self, tenant: &Tenant) -> Result<Tenant, AppError> {
        let mut tenants = self.tenants.write().await;
        if tenants.contains_key(&tenant.slug) {
            return Err(AppError::Conflict("tenant already exists".into()));
        }
        tenants.insert(tenant.slug.clone(), tenant.clone());
        Ok(tenant.clone())
    }

    async fn delete_by_slug(&self, slug: &str) -> Result<bool, AppError> {
        Ok(self.tenants.write().await.remove(slug).is_some())
    }
}
