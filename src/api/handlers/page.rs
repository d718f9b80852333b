use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;
use tera::Context;
use crate::api::extractors::tenant::TenantHost;
use crate::error::AppError;
use crate::state::AppState;

pub const DEFAULT_ICON: &str = "🏢";

/// Serves the tenant named by the request host, or the landing page when the
/// host is the bare root domain.
pub async fn home(
    State(state): State<Arc<AppState>>,
    TenantHost(subdomain): TenantHost,
) -> Result<Response, AppError> {
    match subdomain {
        Some(slug) => render_tenant(&state, &slug).await,
        None => render_root(&state).await,
    }
}

/// Path-addressed variant of the tenant page, used as the rewrite target for
/// subdomain traffic.
pub async fn tenant_page(
    State(state): State<Arc<AppState>>,
    Path(subdomain): Path<String>,
) -> Result<Response, AppError> {
    render_tenant(&state, &subdomain).await
}

fn base_context(state: &AppState) -> Context {
    let mut ctx = Context::new();
    ctx.insert("root_domain", &state.config.root_domain);
    ctx.insert("root_url", &state.config.root_url());
    ctx.insert("protocol", &state.config.protocol);
    ctx
}

fn render(state: &AppState, template: &str, ctx: &Context) -> Result<String, AppError> {
    state.templates.render(template, ctx)
        .map_err(|e| AppError::InternalWithMsg(format!("Failed to render {}: {}", template, e)))
}

async fn render_tenant(state: &AppState, slug: &str) -> Result<Response, AppError> {
    let mut ctx = base_context(state);

    let Some(tenant) = state.tenant_service.resolve_tenant(slug).await? else {
        ctx.insert("subdomain", slug);
        let body = render(state, "not_found.html", &ctx)?;
        return Ok((StatusCode::NOT_FOUND, Html(body)).into_response());
    };

    let icon = if tenant.icon.is_empty() { DEFAULT_ICON } else { tenant.icon.as_str() };
    ctx.insert("icon", icon);
    ctx.insert("tenant", &tenant);

    Ok(Html(render(state, "tenant.html", &ctx)?).into_response())
}

async fn render_root(state: &AppState) -> Result<Response, AppError> {
    let tenants = state.tenant_service.list_tenants().await?;

    let mut ctx = base_context(state);
    ctx.insert("tenants", tenants.as_ref());
    ctx.insert("tenant_count", &tenants.len());

    Ok(Html(render(state, "root.html", &ctx)?).into_response())
}
