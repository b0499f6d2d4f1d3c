//! Domain traits - Abstractions for infrastructure implementations

pub mod dialog;

pub use dialog::Dialog;
