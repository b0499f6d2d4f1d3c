//! Session context - owns the user directory, the message logs and the
//! logged-in user for one run of the simulator

use crate::application::errors::{CommandError, MessageError, RegistrationError};
use crate::application::services::{MessagePolicy, MessageService, UserDirectory};
use crate::domain::entities::{Message, Outcome, OutcomeChoice, User};

#[derive(Debug, Default)]
pub struct Session {
    directory: UserDirectory,
    messages: MessageService,
    /// Directory index of the user whose credentials matched
    current_user: Option<usize>,
    next_number: u32,
}

impl Session {
    pub fn new(policy: MessagePolicy) -> Self {
        Self {
            messages: MessageService::new(policy),
            ..Self::default()
        }
    }

    pub fn directory(&self) -> &UserDirectory {
        &self.directory
    }

    pub fn messages(&self) -> &MessageService {
        &self.messages
    }

    pub fn register(
        &mut self,
        username: &str,
        password: &str,
        cellphone: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<&'static str, RegistrationError> {
        self.directory
            .register_user(username, password, cellphone, first_name, last_name)
    }

    /// Log in and return the status line to show the user
    pub fn login(&mut self, username: &str, password: &str) -> &'static str {
        // A failed attempt also ends any earlier login
        self.current_user = self.directory.login_index(username, password);
        self.directory.return_login_status(self.current_user.is_some())
    }

    pub fn logout(&mut self) {
        self.current_user = None;
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.and_then(|index| self.directory.get(index))
    }

    pub fn is_logged_in(&self) -> bool {
        self.current_user.is_some()
    }

    /// Build the next message in sequence; numbering starts at 1
    pub fn compose(
        &mut self,
        recipient: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Message, CommandError> {
        if !self.is_logged_in() {
            return Err(CommandError::NotLoggedIn);
        }
        self.next_number += 1;
        Ok(Message::new(recipient, content, self.next_number))
    }

    /// Resolve a message on behalf of the logged-in user, if any
    pub fn resolve(
        &mut self,
        message: &mut Message,
        choice: OutcomeChoice,
    ) -> Result<Outcome, MessageError> {
        let owner = self.current_user.and_then(|index| self.directory.get_mut(index));
        self.messages.resolve_outcome(message, choice, owner)
    }

    pub fn send_stored(&mut self, id: &str) -> Result<Message, MessageError> {
        let owner = self.current_user.and_then(|index| self.directory.get_mut(index));
        self.messages.send_stored(id, owner).cloned()
    }

    /// Clear users, counters and logs
    pub fn reset(&mut self) {
        self.directory.reset();
        self.messages.reset();
        self.current_user = None;
        self.next_number = 0;
        tracing::debug!("Session reset");
    }
}
