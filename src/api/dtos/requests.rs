use serde::Deserialize;

/// Absent and `null` fields both arrive as `None` so the workflow can answer
/// with a `MissingField` rejection instead of a body parse error.
#[derive(Deserialize)]
pub struct CreateTenantRequest {
    #[serde(default)]
    pub subdomain: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    pub name: Option<String>,
}
