use serde::{Deserialize, Serialize};

/// Liveness payload returned by `/api/health`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Health {
    pub status: String,
    pub message: String,
}

impl Health {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".into(),
            message: "Astro Consulting API is running".into(),
        }
    }
}
