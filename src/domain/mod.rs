//! Domain layer - Core business logic with no external dependencies
//! 
//! This layer contains:
//! - Entities: Core business objects (User, Message)
//! - Traits: Abstractions for infrastructure (Dialog)
//! - Rules: Username, password and cell phone format rules

pub mod entities;
pub mod rules;
pub mod traits;
