use axum::{
    body::Body,
    extract::Request,
    http::header,
    routing::{delete, get},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{health, page, tenant};
use crate::domain::services::subdomains::subdomain_from_host;
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

/// Tenant label of the request host, for span and log fields.
fn request_tenant(request: &Request<Body>, root_domain: &str) -> Option<String> {
    request.headers().get("x-forwarded-host")
        .or_else(|| request.headers().get(header::HOST))
        .and_then(|value| value.to_str().ok())
        .and_then(|host| subdomain_from_host(host, root_domain))
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let span_root = state.config.root_domain.clone();
    let log_root = state.config.root_domain.clone();

    Router::new()
        .route("/health", get(health::health_check))

        // Tenant pages
        .route("/", get(page::home))
        .route("/s/{subdomain}", get(page::tenant_page))

        // Tenant Admin
        .route("/api/v1/tenants", get(tenant::list_tenants).post(tenant::create_tenant))
        .route("/api/v1/tenants/by-slug/{slug}", get(tenant::get_tenant_by_slug))
        .route("/api/v1/tenants/{slug}", delete(tenant::delete_tenant))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(move |request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    let span = info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        tenant = tracing::field::Empty,
                    );
                    if let Some(tenant) = request_tenant(request, &span_root) {
                        span.record("tenant", tenant.as_str());
                    }
                    span
                })
                .on_request(move |request: &Request<Body>, _span: &Span| {
                    let tenant = request_tenant(request, &log_root);
                    info!(
                        tenant = tenant.as_deref().unwrap_or("-"),
                        "started processing request: {} {}", request.method(), request.uri().path()
                    );
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
