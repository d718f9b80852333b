use serde::Serialize;
use std::fmt;

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RejectionKind {
    MissingField,
    InvalidIcon,
    InvalidSubdomain,
    SlugTaken,
    NotFound,
}

impl RejectionKind {
    pub fn message(&self) -> &'static str {
        match self {
            RejectionKind::MissingField => "Subdomain and icon are required",
            RejectionKind::InvalidIcon => "Please enter a valid emoji (maximum 10 characters)",
            RejectionKind::InvalidSubdomain => {
                "Subdomain can only have lowercase letters, numbers, and hyphens. Please try again."
            }
            RejectionKind::SlugTaken => "This subdomain is already taken",
            RejectionKind::NotFound => "Tenant not found",
        }
    }
}

/// A business-rule failure handed back to the caller together with the raw
/// values it submitted, so a form can be re-rendered as typed.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub kind: RejectionKind,
    pub subdomain: String,
    pub icon: String,
}

impl Rejection {
    pub fn new(kind: RejectionKind, subdomain: &str, icon: &str) -> Self {
        Self {
            kind,
            subdomain: subdomain.to_string(),
            icon: icon.to_string(),
        }
    }

    pub fn not_found(slug: &str) -> Self {
        Self::new(RejectionKind::NotFound, slug, "")
    }

    pub fn message(&self) -> &'static str {
        self.kind.message()
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message())
    }
}
