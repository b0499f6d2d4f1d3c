//! Login and messaging simulator: format rules, an in-memory user
//! directory, and message resolution into sent, discarded or stored.

pub mod domain;
pub mod application;
pub mod infrastructure;

pub use application::session::Session;
