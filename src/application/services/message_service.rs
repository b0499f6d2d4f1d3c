use crate::application::errors::MessageError;
use crate::domain::entities::message::DEFAULT_MAX_LENGTH;
use crate::domain::entities::{Message, Outcome, OutcomeChoice, User};

/// Rules applied when resolving messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessagePolicy {
    pub max_length: usize,
    /// Refuse the Send outcome for recipients that fail the cell phone rule
    pub require_valid_recipient: bool,
}

impl Default for MessagePolicy {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            require_valid_recipient: true,
        }
    }
}

/// Service for resolving messages and keeping the sent/stored logs
#[derive(Debug, Default)]
pub struct MessageService {
    policy: MessagePolicy,
    total_sent: u32,
    sent: Vec<Message>,
    stored: Vec<Message>,
}

impl MessageService {
    pub fn new(policy: MessagePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn policy(&self) -> MessagePolicy {
        self.policy
    }

    /// Move a composed message into exactly one terminal state
    pub fn resolve_outcome(
        &mut self,
        message: &mut Message,
        choice: OutcomeChoice,
        owner: Option<&mut User>,
    ) -> Result<Outcome, MessageError> {
        if message.is_resolved() {
            return Err(MessageError::AlreadyResolved(message.id().to_string()));
        }

        let outcome = match choice {
            OutcomeChoice::Send => {
                self.ensure_sendable(message)?;
                message.resolve(Outcome::Sent);
                self.record_sent(message.clone(), owner);
                Outcome::Sent
            }
            OutcomeChoice::Discard => {
                message.resolve(Outcome::Discarded);
                Outcome::Discarded
            }
            OutcomeChoice::Store => {
                message.resolve(Outcome::Stored);
                self.stored.push(message.clone());
                Outcome::Stored
            }
        };

        tracing::debug!("Message {} resolved as {}", message.id(), outcome);
        Ok(outcome)
    }

    /// Promote a pending stored message to sent
    pub fn send_stored(&mut self, id: &str, owner: Option<&mut User>) -> Result<&Message, MessageError> {
        let index = self
            .stored
            .iter()
            .position(|m| m.id() == id)
            .ok_or_else(|| MessageError::NotStored(id.to_string()))?;

        self.ensure_sendable(&self.stored[index])?;
        let mut message = self.stored.remove(index);
        message.resolve(Outcome::Sent);
        self.record_sent(message, owner);

        self.sent
            .last()
            .ok_or_else(|| MessageError::NotStored(id.to_string()))
    }

    fn ensure_sendable(&self, message: &Message) -> Result<(), MessageError> {
        if self.policy.require_valid_recipient && !message.check_recipient_cell().is_valid() {
            tracing::warn!("Refusing to send message {} to {}", message.id(), message.recipient());
            return Err(MessageError::InvalidRecipient(message.recipient().to_string()));
        }
        Ok(())
    }

    fn record_sent(&mut self, message: Message, owner: Option<&mut User>) {
        if let Some(user) = owner {
            user.increment_total_messages();
        }
        self.total_sent += 1;
        tracing::info!(
            "Message {} sent to {} ({} sent in total)",
            message.id(),
            message.recipient(),
            self.total_sent
        );
        self.sent.push(message);
    }

    pub fn total_messages(&self) -> u32 {
        self.total_sent
    }

    pub fn sent_messages(&self) -> &[Message] {
        &self.sent
    }

    pub fn stored_messages(&self) -> &[Message] {
        &self.stored
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Message> {
        self.sent
            .iter()
            .chain(self.stored.iter())
            .find(|m| m.id() == id)
    }

    /// Longest sent message by character count; the earliest wins ties
    pub fn longest_sent(&self) -> Option<&Message> {
        self.sent.iter().fold(None, |longest: Option<&Message>, m| match longest {
            Some(l) if l.content().chars().count() >= m.content().chars().count() => Some(l),
            _ => Some(m),
        })
    }

    /// Text report of every sent message, oldest first
    pub fn print_messages(&self) -> String {
        if self.sent.is_empty() {
            return "No messages sent yet.".to_string();
        }

        let mut report = format!("Total messages sent: {}\n", self.total_sent);
        for message in &self.sent {
            report.push_str(&format!(
                "\n#{} [{}] to {}\n  {}\n  Hash: {}\n",
                message.number(),
                message.id(),
                message.recipient(),
                message.content(),
                message.hash()
            ));
        }
        report
    }

    /// Pending stored messages as pretty JSON
    pub fn export_stored(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.stored)
    }

    pub fn reset(&mut self) {
        self.total_sent = 0;
        self.sent.clear();
        self.stored.clear();
    }
}
