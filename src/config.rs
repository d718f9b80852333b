use std::env;

use crate::domain::services::subdomains::IconValidation;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub root_domain: String, // Shared parent of every tenant subdomain, may carry a port
    pub protocol: String,
    pub icon_validation: IconValidation,
}

impl Config {
    pub fn from_env() -> Self {
        let root_domain = env::var("ROOT_DOMAIN").unwrap_or_else(|_| "localhost:3000".to_string());
        let protocol = env::var("PROTOCOL").unwrap_or_else(|_| default_protocol(&root_domain).to_string());

        Self {
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://tenants.db?mode=rwc".to_string()),
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
            root_domain,
            protocol,
            icon_validation: env::var("ICON_VALIDATION")
                .map(|v| v.parse().expect("ICON_VALIDATION must be `emoji` or `lenient`"))
                .unwrap_or_default(),
        }
    }

    /// Address the routing layer should send a freshly created tenant to.
    pub fn tenant_url(&self, slug: &str) -> String {
        format!("{}://{}.{}", self.protocol, slug, self.root_domain)
    }

    pub fn root_url(&self) -> String {
        format!("{}://{}", self.protocol, self.root_domain)
    }
}

fn default_protocol(root_domain: &str) -> &'static str {
    if root_domain.contains("localhost") { "http" } else { "https" }
}
