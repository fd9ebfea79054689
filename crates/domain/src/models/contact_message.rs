//! Contact form domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Message returned when a required contact field is missing.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Name, email, and message are required.";

/// Acknowledgement returned after a contact submission.
pub const SUBMITTED_MESSAGE: &str = "Thank you for reaching out! We'll get back to you soon.";

/// Represents a message submitted through the public contact form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

/// Public contact form submission.
///
/// Every field defaults to empty so a missing field is reported the same way
/// as a blank one.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateContactMessageRequest {
    #[validate(length(max = 200, message = "Name must be at most 200 characters"))]
    pub name: String,

    #[validate(
        email(message = "Email must be a valid address"),
        length(max = 254, message = "Email must be at most 254 characters")
    )]
    pub email: String,

    #[validate(length(max = 300, message = "Subject must be at most 300 characters"))]
    pub subject: String,

    #[validate(length(max = 10000, message = "Message must be at most 10000 characters"))]
    pub message: String,
}

impl CreateContactMessageRequest {
    /// True when name, email and message all carry non-whitespace text.
    pub fn has_required_fields(&self) -> bool {
        [&self.name, &self.email, &self.message]
            .iter()
            .all(|v| !v.trim().is_empty())
    }
}
