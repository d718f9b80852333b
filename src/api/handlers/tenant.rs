use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use crate::api::dtos::{
    requests::CreateTenantRequest,
    responses::{TenantCreatedResponse, TenantDeletedResponse},
};
use crate::error::AppError;
use crate::state::AppState;

pub async fn create_tenant(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateTenantRequest>,
) -> Result<impl IntoResponse, AppError> {
    let subdomain = payload.subdomain.unwrap_or_default();
    let icon = payload.icon.unwrap_or_default();

    let created = state.tenant_service
        .create_tenant(&subdomain, &icon, payload.name.as_deref())
        .await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, created.redirect_to.clone())],
        Json(TenantCreatedResponse {
            success: true,
            tenant: created.tenant,
            redirect_to: created.redirect_to,
        }),
    ))
}

pub async fn list_tenants(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let tenants = state.tenant_service.list_tenants().await?;
    Ok(Json(tenants.as_ref().clone()))
}

pub async fn get_tenant_by_slug(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let tenant = state.tenant_service.resolve_tenant(&slug).await?
        .ok_or(AppError::NotFound("Tenant not found".into()))?;

    Ok(Json(tenant))
}

pub async fn delete_tenant(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.tenant_service.delete_tenant(&slug).await?;
    Ok(Json(TenantDeletedResponse { success: "Tenant deleted successfully" }))
}
