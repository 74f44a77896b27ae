use serde::{Deserialize, Serialize};

/// A client review shown alongside the catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    /// Author display name.
    pub name: String,
    pub text: String,
    /// Nominally 1..=5; stored values are not range-checked.
    pub rating: i32,
    pub date: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl Testimonial {
    pub const MIN_RATING: i32 = 1;
    pub const MAX_RATING: i32 = 5;

    /// Whether the rating lies in the semantic 1..=5 range.
    pub fn has_valid_rating(&self) -> bool {
        (Self::MIN_RATING..=Self::MAX_RATING).contains(&self.rating)
    }
}
