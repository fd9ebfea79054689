//! Small response envelopes shared by several resources.

use serde::Serialize;

/// `{ "message": "..." }` acknowledgement body.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `{ "id": n }` body returned after a create.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct IdResponse {
    pub id: i32,
}
