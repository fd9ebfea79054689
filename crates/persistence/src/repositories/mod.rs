//! Repository implementations for database operations.

pub mod artist;
pub mod contact_message;
pub mod content_block;
pub mod event;
pub mod user;

pub use artist::ArtistRepository;
pub use contact_message::ContactMessageRepository;
pub use content_block::ContentBlockRepository;
pub use event::{EventFilter, EventRepository};
pub use user::UserRepository;
