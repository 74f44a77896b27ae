use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, ids::new_id, validation};

/// Processing state of a booking; new bookings start as `pending`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Pending,
}

/// Client-supplied booking fields. Any `id` in the payload is ignored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConsultationRequestInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Reference to a catalog service; existence is not checked.
    pub service_id: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub preferred_date: Option<String>,
}

impl ConsultationRequestInput {
    pub fn validate(&self) -> Result<(), ModelError> {
        validation::require_all(&[
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("service_id", &self.service_id),
        ])
    }
}

/// Stored booking document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConsultationRequest {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service_id: String,
    pub message: Option<String>,
    pub preferred_date: Option<String>,
    pub created_at: DateTime<Utc>,
    pub status: RequestStatus,
}

impl ConsultationRequest {
    /// Validate the payload and stamp server-side fields.
    pub fn create(input: ConsultationRequestInput) -> Result<Self, ModelError> {
        input.validate()?;
        Ok(Self {
            id: new_id(),
            name: input.name,
            email: input.email,
            phone: input.phone,
            service_id: input.service_id,
            message: input.message,
            preferred_date: input.preferred_date,
            created_at: Utc::now(),
            status: RequestStatus::Pending,
        })
    }
}
