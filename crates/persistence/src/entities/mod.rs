//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod artist;
pub mod contact_message;
pub mod content_block;
pub mod event;
pub mod user;

pub use artist::ArtistEntity;
pub use contact_message::ContactMessageEntity;
pub use content_block::ContentBlockEntity;
pub use event::EventEntity;
pub use user::UserEntity;
