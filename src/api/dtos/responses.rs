use serde::Serialize;
use crate::domain::models::tenant::Tenant;

#[derive(Serialize)]
pub struct TenantCreatedResponse {
    pub success: bool,
    pub tenant: Tenant,
    pub redirect_to: String,
}

#[derive(Serialize)]
pub struct TenantDeletedResponse {
    pub success: &'static str,
}
