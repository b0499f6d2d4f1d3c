use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;

use crate::application::errors::CommandError;
use crate::domain::rules;

/// Number of decimal digits in a generated message id
pub const MESSAGE_ID_LENGTH: usize = 10;

/// Default maximum message length in characters
pub const DEFAULT_MAX_LENGTH: usize = 250;

/// Header line of the confirmation payload for a sent message
pub const SENT_HEADER: &str = "MESSAGE SENT SUCCESSFULLY!";

/// Terminal state of a simulated message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    Sent,
    Discarded,
    Stored,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Sent => "SENT",
            Outcome::Discarded => "DISCARDED",
            Outcome::Stored => "STORED",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Choice made by whoever drives the session once a message is composed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeChoice {
    Send,
    Discard,
    Store,
}

impl FromStr for OutcomeChoice {
    type Err = CommandError;

    /// Accepts the menu numbers `1`/`2`/`3` or the words `send`/`discard`/`store`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "send" => Ok(OutcomeChoice::Send),
            "2" | "discard" => Ok(OutcomeChoice::Discard),
            "3" | "store" => Ok(OutcomeChoice::Store),
            other => Err(CommandError::InvalidChoice(other.to_string())),
        }
    }
}

/// Result of checking a recipient number.
///
/// Kept as a sentinel rather than a bool so richer codes can be added later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum RecipientCheck {
    Valid = -1,
    Invalid = 1,
}

impl RecipientCheck {
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn is_valid(self) -> bool {
        self == RecipientCheck::Valid
    }

    pub fn describe(self) -> &'static str {
        match self {
            RecipientCheck::Valid => "Cell phone number successfully captured.",
            RecipientCheck::Invalid => {
                "Cell phone number is incorrectly formatted or does not contain an international code. Please correct the number and try again."
            }
        }
    }
}

/// Result of checking a message against the maximum length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthCheck {
    Ready,
    TooLong { max: usize, excess: usize },
}

impl fmt::Display for LengthCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LengthCheck::Ready => f.write_str("Message ready to send."),
            LengthCheck::TooLong { max, excess } => write!(
                f,
                "Message exceeds {} characters by {}, please reduce size.",
                max, excess
            ),
        }
    }
}

/// A simulated text message
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Message {
    id: String,
    number: u32,
    recipient: String,
    content: String,
    hash: String,
    created_at: DateTime<Utc>,
    outcome: Option<Outcome>,
}

impl Message {
    pub fn new(recipient: impl Into<String>, content: impl Into<String>, number: u32) -> Self {
        Self::with_id(generate_message_id(), recipient, content, number)
    }

    /// Build a message around a known id; the hash is still derived here
    pub fn with_id(
        id: impl Into<String>,
        recipient: impl Into<String>,
        content: impl Into<String>,
        number: u32,
    ) -> Self {
        let id = id.into();
        let content = content.into();
        let hash = create_message_hash(&id, number, &content);
        Self {
            id,
            number,
            recipient: recipient.into(),
            content,
            hash,
            created_at: Utc::now(),
            outcome: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_resolved(&self) -> bool {
        self.outcome.is_some()
    }

    pub(crate) fn resolve(&mut self, outcome: Outcome) {
        self.outcome = Some(outcome);
    }

    pub fn check_message_id(&self) -> bool {
        self.id.len() == MESSAGE_ID_LENGTH && self.id.chars().all(|c| c.is_ascii_digit())
    }

    pub fn check_recipient_cell(&self) -> RecipientCheck {
        if rules::check_cell_phone_number(&self.recipient) {
            RecipientCheck::Valid
        } else {
            RecipientCheck::Invalid
        }
    }

    pub fn check_message_length(&self, max: usize) -> LengthCheck {
        check_length(&self.content, max)
    }

    /// Payload shown once a message has been sent
    pub fn confirmation(&self) -> String {
        format!(
            "{}\n\nMessage ID: {}\nMessage Number: {}\nRecipient: {}\nMessage: {}\nMessage Hash: {}",
            SENT_HEADER, self.id, self.number, self.recipient, self.content, self.hash
        )
    }
}

/// Length check on raw text, before any message is built
pub fn check_length(content: &str, max: usize) -> LengthCheck {
    let len = content.chars().count();
    if len <= max {
        LengthCheck::Ready
    } else {
        LengthCheck::TooLong {
            max,
            excess: len - max,
        }
    }
}

/// Random 10-digit decimal id, never starting with zero
pub fn generate_message_id() -> String {
    rand::thread_rng()
        .gen_range(1_000_000_000u64..=9_999_999_999u64)
        .to_string()
}

/// `<first two id digits>:<number>:<FIRSTWORD><LASTWORD>`, upper-cased
pub fn create_message_hash(id: &str, number: u32, content: &str) -> String {
    let prefix: String = id.chars().take(2).collect();
    let mut words = content.split_whitespace();
    let first = words.next().unwrap_or("");
    let last = words.last().unwrap_or(first);
    format!("{}:{}:{}{}", prefix, number, first, last).to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_creation() {
        let message = Message::new("+27718693002", "Hello world", 1);

        assert!(!message.id().is_empty());
        assert_eq!(message.number(), 1);
        assert_eq!(message.recipient(), "+27718693002");
        assert_eq!(message.content(), "Hello world");
        assert!(!message.hash().is_empty());
        assert!(message.outcome().is_none());
    }

    #[test]
    fn test_message_validation() {
        let valid = Message::new("+27718693002", "test", 1);
        let invalid = Message::new("08575975889", "test", 1);

        assert!(valid.check_message_id());
        assert_eq!(valid.check_recipient_cell().code(), -1);
        assert_eq!(invalid.check_recipient_cell().code(), 1);
    }

    #[test]
    fn test_check_message_id_rejects_tampered_ids() {
        assert!(!Message::with_id("123", "+27718693002", "hi", 1).check_message_id());
        assert!(!Message::with_id("12345678901", "+27718693002", "hi", 1).check_message_id());
        assert!(!Message::with_id("12345abcde", "+27718693002", "hi", 1).check_message_id());
        assert!(Message::with_id("1234567890", "+27718693002", "hi", 1).check_message_id());
    }

    #[test]
    fn test_generated_ids_are_ten_digits() {
        for _ in 0..100 {
            let id = generate_message_id();
            assert_eq!(id.len(), MESSAGE_ID_LENGTH);
            assert!(id.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_message_hash() {
        let message = Message::with_id(
            "0012345678",
            "+27718693002",
            "Hi Mike, can you join us for dinner tonight",
            0,
        );
        assert_eq!(message.hash(), "00:0:HITONIGHT");

        assert_eq!(create_message_hash("4812345678", 3, "hello"), "48:3:HELLOHELLO");
        assert_eq!(create_message_hash("4812345678", 3, "   "), "48:3:");
    }

    #[test]
    fn test_message_length() {
        let short = Message::new("+27718693002", "a".repeat(250), 1);
        assert_eq!(short.check_message_length(DEFAULT_MAX_LENGTH), LengthCheck::Ready);

        let long = Message::new("+27718693002", "a".repeat(260), 1);
        let check = long.check_message_length(DEFAULT_MAX_LENGTH);
        assert_eq!(check, LengthCheck::TooLong { max: 250, excess: 10 });
        assert_eq!(
            check.to_string(),
            "Message exceeds 250 characters by 10, please reduce size."
        );

        // Counted in characters, not bytes
        assert_eq!(check_length(&"é".repeat(250), 250), LengthCheck::Ready);
    }

    #[test]
    fn test_confirmation_content() {
        let message = Message::new(
            "+27718693002",
            "hi Mike, can you join us for dinner tonight",
            1,
        );
        let content = message.confirmation();

        assert!(content.starts_with("MESSAGE SENT SUCCESSFULLY!\n\nMessage ID: "));
        assert!(content.contains(&format!("Message ID: {}\n", message.id())));
        assert!(content.contains("Message Number: 1\n"));
        assert!(content.contains("Recipient: +27718693002\n"));
        assert!(content.contains("Message: hi Mike, can you join us for dinner tonight\n"));
        assert!(content.ends_with(&format!("Message Hash: {}", message.hash())));
    }

    #[test]
    fn test_outcome_choice_parsing() {
        assert_eq!("1".parse::<OutcomeChoice>(), Ok(OutcomeChoice::Send));
        assert_eq!("2".parse::<OutcomeChoice>(), Ok(OutcomeChoice::Discard));
        assert_eq!(" Store ".parse::<OutcomeChoice>(), Ok(OutcomeChoice::Store));
        assert_eq!(
            "4".parse::<OutcomeChoice>(),
            Err(CommandError::InvalidChoice("4".to_string()))
        );
        assert_eq!(
            "4".parse::<OutcomeChoice>().unwrap_err().to_string(),
            "Invalid choice: 4 (expected 1, 2 or 3)"
        );
    }

    #[test]
    fn test_outcome_tokens() {
        assert_eq!(Outcome::Sent.to_string(), "SENT");
        assert_eq!(Outcome::Discarded.to_string(), "DISCARDED");
        assert_eq!(Outcome::Stored.to_string(), "STORED");
    }
}
