use serde::{Deserialize, Serialize};

/// A consulting offering from the read-only catalog.
///
/// `price` and `duration` are display strings (e.g. "5 000 ₽", "90 минут").
/// Unknown fields in stored documents are ignored when reading.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: String,
    pub duration: String,
    pub features: Vec<String>,
}
