//! Application services - Business logic orchestration

pub mod directory;
pub mod message_service;

pub use directory::UserDirectory;
pub use message_service::{MessagePolicy, MessageService};
