use std::sync::Arc;
use crate::config::Config;
use crate::domain::services::tenant_service::TenantService;
use tera::Tera;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub tenant_service: Arc<TenantService>,
    pub templates: Arc<Tera>,
}
