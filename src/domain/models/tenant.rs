use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq, Eq)]
pub struct Tenant {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub icon: String,
    pub created_at: DateTime<Utc>,
}

impl Tenant {
    pub fn new(slug: String, name: String, icon: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            slug,
            name,
            icon,
            created_at: Utc::now(),
        }
    }
}
