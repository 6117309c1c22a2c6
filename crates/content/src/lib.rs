//! Records exchanged between the Content API and the page controller,
//! plus the fixed site content the API serves.

pub mod fixtures;
pub mod models;

pub use fixtures::{profile, projects};
pub use models::{
    is_truthy, missing_contact_fields, ContactAck, ContactInfo, ContactSubmission, ErrorBody,
    HealthStatus, Profile, Project, CONTACT_ACK_MESSAGE, REQUIRED_CONTACT_FIELDS,
};
