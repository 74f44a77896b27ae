//! Document shapes stored by the consulting backend.
//!
//! Reference entities (`service`, `testimonial`) are written once by seeding and
//! only read afterwards. Submission entities (`consultation_request`,
//! `contact_message`) are built from validated client payloads and appended.

pub mod errors;
pub mod ids;
pub mod validation;
pub mod service;
pub mod testimonial;
pub mod consultation_request;
pub mod contact_message;
pub mod receipt;

/// Collection names in the document store.
pub mod collections {
    pub const SERVICES: &str = "services";
    pub const TESTIMONIALS: &str = "testimonials";
    pub const CONSULTATION_REQUESTS: &str = "consultation_requests";
    pub const CONTACT_MESSAGES: &str = "contact_messages";
}
