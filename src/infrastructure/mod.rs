//! Infrastructure layer - External concerns
//! 
//! This layer contains:
//! - Config: Configuration loading
//! - Adapters: Front-ends (console)

pub mod config;
pub mod adapters;
