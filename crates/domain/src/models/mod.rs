//! Domain models for ApolloSpark.

pub mod artist;
pub mod common;
pub mod contact_message;
pub mod content_block;
pub mod event;
pub mod user;

pub use artist::Artist;
pub use common::{IdResponse, MessageResponse};
pub use contact_message::ContactMessage;
pub use content_block::ContentBlock;
pub use event::Event;
pub use user::{Role, User};
