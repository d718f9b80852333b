use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use std::convert::Infallible;
use std::sync::Arc;
use tracing::Span;
use crate::domain::services::subdomains::subdomain_from_host;
use crate::state::AppState;

/// The tenant label carried by the request's host, if any.
///
/// `X-Forwarded-Host` takes precedence over `Host` so the service can sit
/// behind a proxy that rewrites the latter.
pub struct TenantHost(pub Option<String>);

impl FromRequestParts<Arc<AppState>> for TenantHost {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &Arc<AppState>) -> Result<Self, Self::Rejection> {
        let host = parts.headers.get("x-forwarded-host")
            .or_else(|| parts.headers.get(header::HOST))
            .and_then(|value| value.to_str().ok())
            .or_else(|| parts.uri.host());

        let subdomain = host.and_then(|h| subdomain_from_host(h, &state.config.root_domain));
        if let Some(sub) = &subdomain {
            Span::current().record("tenant", sub.as_str());
        }

        Ok(TenantHost(subdomain))
    }
}
