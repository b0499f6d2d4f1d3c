//! Application layer errors

use thiserror::Error;

/// Registration rejections; the message is what the user sees
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("Username is not correctly formatted; please ensure that your username contains an underscore and is no more than five characters in length.")]
    InvalidUsername,

    #[error("Password is not correctly formatted; please ensure that the password contains at least eight characters, a capital letter, a number, and a special character.")]
    InvalidPassword,

    #[error("Cell phone number incorrectly formatted or does not contain international code.")]
    InvalidCellphone,
}

/// Message resolution errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MessageError {
    #[error("Cannot send to {0}: cell phone number incorrectly formatted or does not contain international code.")]
    InvalidRecipient(String),

    #[error("Message {0} has already been resolved")]
    AlreadyResolved(String),

    #[error("No stored message with id {0}")]
    NotStored(String),
}

/// Console command errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    NotFound(String),

    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("Invalid choice: {0} (expected 1, 2 or 3)")]
    InvalidChoice(String),

    #[error("You need to log in first")]
    NotLoggedIn,

    #[error(transparent)]
    Registration(#[from] RegistrationError),

    #[error(transparent)]
    Message(#[from] MessageError),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Parse error: {0}")]
    Parse(String),
}
