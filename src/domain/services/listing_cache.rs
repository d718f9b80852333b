use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::models::tenant::Tenant;

#[derive(Default)]
struct Inner {
    generation: u64,
    tenants: Option<Arc<Vec<Tenant>>>,
}

/// Cached copy of the full tenant listing.
///
/// Every invalidation bumps a generation counter; a listing loaded before the
/// bump is discarded instead of being stored, so a slow read racing a delete
/// can never resurrect the deleted tenant.
#[derive(Default)]
pub struct TenantListingCache {
    inner: RwLock<Inner>,
}

impl TenantListingCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached listing, or the generation a loader must present to
    /// `store` its result.
    pub async fn lookup(&self) -> Result<Arc<Vec<Tenant>>, u64> {
        let inner = self.inner.read().await;
        match &inner.tenants {
            Some(tenants) => Ok(tenants.clone()),
            None => Err(inner.generation),
        }
    }

    pub async fn store(&self, generation: u64, tenants: Vec<Tenant>) -> Arc<Vec<Tenant>> {
        let tenants = Arc::new(tenants);
        let mut inner = self.inner.write().await;
        if inner.generation == generation {
            inner.tenants = Some(tenants.clone());
        }
        tenants
    }

    pub async fn invalidate(&self) {
        let mut inner = self.inner.write().await;
        inner.generation += 1;
        inner.tenants = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tenant(slug: &str) -> Tenant {
        Tenant::new(slug.to_string(), slug.to_string(), "🏢".to_string())
    }

    #[tokio::test]
    async fn test_store_then_lookup_hits() {
        let cache = TenantListingCache::new();
        let generation = cache.lookup().await.unwrap_err();
        cache.store(generation, vec![tenant("acme")]).await;

        let cached = cache.lookup().await.expect("listing should be cached");
        assert_eq!(cached.len(), 1);
        assert_eq!(cached[0].slug, "acme");
    }

    #[tokio::test]
    async fn test_invalidate_clears_listing() {
        let cache = TenantListingCache::new();
        cache.store(0, vec![tenant("acme")]).await;
        cache.invalidate().await;
        assert_eq!(cache.lookup().await.unwrap_err(), 1);
    }

    #[tokio::test]
    async fn test_stale_load_is_not_stored() {
        let cache = TenantListingCache::new();
        let generation = cache.lookup().await.unwrap_err();

        cache.invalidate().await;
        let returned = cache.store(generation, vec![tenant("deleted")]).await;

        assert_eq!(returned.len(), 1);
        assert!(cache.lookup().await.is_err());
    }
}
