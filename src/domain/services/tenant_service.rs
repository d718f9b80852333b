use std::sync::Arc;
use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::domain::{
    models::{
        rejection::{Rejection, RejectionKind},
        tenant::Tenant,
    },
    ports::TenantRepository,
    services::{
        listing_cache::TenantListingCache,
        subdomains::{is_valid_icon, is_valid_subdomain, sanitize_subdomain},
    },
};
use crate::error::AppError;

#[derive(Debug, Serialize)]
pub struct TenantCreated {
    pub tenant: Tenant,
    pub redirect_to: String,
}

pub struct TenantService {
    repo: Arc<dyn TenantRepository>,
    config: Config,
    listing: TenantListingCache,
}

impl TenantService {
    pub fn new(repo: Arc<dyn TenantRepository>, config: Config) -> Self {
        Self { repo, config, listing: TenantListingCache::new() }
    }

    /// Looks up a tenant by its canonical slug. The slug is used as given;
    /// absence is a normal outcome, not an error.
    pub async fn resolve_tenant(&self, slug: &str) -> Result<Option<Tenant>, AppError> {
        let tenant = self.repo.find_by_slug(slug).await?;
        debug!(slug, found = tenant.is_some(), "resolved tenant");
        Ok(tenant)
    }

    pub async fn list_tenants(&self) -> Result<Arc<Vec<Tenant>>, AppError> {
        match self.listing.lookup().await {
            Ok(tenants) => Ok(tenants),
            Err(generation) => {
                let tenants = self.repo.find_all().await?;
                Ok(self.listing.store(generation, tenants).await)
            }
        }
    }

    pub async fn create_tenant(
        &self,
        subdomain: &str,
        icon: &str,
        name: Option<&str>,
    ) -> Result<TenantCreated, AppError> {
        let reject = |kind| AppError::Rejected(Rejection::new(kind, subdomain, icon));

        if subdomain.is_empty() || icon.is_empty() {
            return Err(reject(RejectionKind::MissingField));
        }
        if !is_valid_icon(icon, self.config.icon_validation) {
            return Err(reject(RejectionKind::InvalidIcon));
        }
        if !is_valid_subdomain(subdomain) {
            return Err(reject(RejectionKind::InvalidSubdomain));
        }

        let slug = sanitize_subdomain(subdomain);
        if !is_valid_subdomain(&slug) {
            return Err(reject(RejectionKind::InvalidSubdomain));
        }

        if self.repo.find_by_slug(&slug).await?.is_some() {
            return Err(reject(RejectionKind::SlugTaken));
        }

        // The raw subdomain, not the slug, is the default display name.
        let name = name.filter(|n| !n.is_empty()).unwrap_or(subdomain);
        let tenant = Tenant::new(slug, name.to_string(), icon.to_string());

        let created = match self.repo.insert(&tenant).await {
            Ok(created) => created,
            Err(AppError::Conflict(_)) => {
                warn!(slug = %tenant.slug, "slug claimed concurrently");
                return Err(reject(RejectionKind::SlugTaken));
            }
            Err(e) => {
                error!(slug = %tenant.slug, "failed to insert tenant: {}", e);
                return Err(e);
            }
        };

        self.listing.invalidate().await;
        info!(slug = %created.slug, id = %created.id, "Tenant created");

        let redirect_to = self.config.tenant_url(&created.slug);
        Ok(TenantCreated { tenant: created, redirect_to })
    }

    /// Hard-deletes the tenant owning `slug`. A missing slug is reported as
    /// `Rejection{NotFound}` rather than treated as success.
    pub async fn delete_tenant(&self, slug: &str) -> Result<(), AppError> {
        if !self.repo.delete_by_slug(slug).await? {
            return Err(AppError::Rejected(Rejection::not_found(slug)));
        }

        self.listing.invalidate().await;
        info!(slug, "Tenant deleted");
        Ok(())
    }
}
