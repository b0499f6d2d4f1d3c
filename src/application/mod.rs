//! Application layer - Use cases and business logic
//! 
//! This layer contains:
//! - Services: User directory and message resolution
//! - Session: The context object that owns all mutable state
//! - Errors: Domain-specific errors
//! - Messaging: Console command parsing and dispatching

pub mod errors;
pub mod services;
pub mod session;
pub mod messaging;
