use serde::{Deserialize, Serialize};

/// Response body for accepted submissions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub success: bool,
    pub id: String,
    pub message: String,
}

impl SubmissionReceipt {
    pub fn accepted(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self { success: true, id: id.into(), message: message.into() }
    }
}
