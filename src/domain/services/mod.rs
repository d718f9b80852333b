pub mod listing_cache;
pub mod subdomains;
pub mod tenant_service;
