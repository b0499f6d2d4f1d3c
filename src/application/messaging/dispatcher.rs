//! Session dispatcher - Routes console commands to the session

use super::parser::{CommandParser, SessionCommand, HELP};
use crate::application::errors::CommandError;
use crate::application::session::Session;
use crate::domain::entities::message::check_length;
use crate::domain::entities::{LengthCheck, Message, Outcome, OutcomeChoice};
use crate::domain::traits::Dialog;

pub const OUTCOME_MENU: &str = "Choose an option:
1) Send message
2) Disregard message
3) Store message to send later";

/// Whether the console loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Drives a `Session` from lines of console input
pub struct SessionDispatcher<D: Dialog> {
    parser: CommandParser,
    session: Session,
    dialog: D,
}

impl<D: Dialog> SessionDispatcher<D> {
    pub fn new(session: Session, dialog: D) -> Self {
        Self {
            parser: CommandParser::default(),
            session,
            dialog,
        }
    }

    pub fn with_parser(mut self, parser: CommandParser) -> Self {
        self.parser = parser;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Read and dispatch lines until `quit` or end of input
    pub fn run(&mut self) {
        self.dialog.show(HELP);
        while let Some(line) = self.dialog.read_line("> ") {
            if line.trim().is_empty() {
                continue;
            }
            if self.dispatch(&line) == Flow::Quit {
                break;
            }
        }
        tracing::info!(
            "Session ended: {} users, {} messages sent",
            self.session.directory().len(),
            self.session.messages().total_messages()
        );
    }

    /// Handle one line and show the response or the error
    pub fn dispatch(&mut self, line: &str) -> Flow {
        let command = match self.parser.parse(line) {
            Ok(command) => command,
            Err(e) => {
                self.dialog.show(&format!("Error: {}", e));
                return Flow::Continue;
            }
        };

        if command == SessionCommand::Quit {
            self.dialog.show("Goodbye!");
            return Flow::Quit;
        }

        match self.execute(command) {
            Ok(response) => self.dialog.show(&response),
            Err(e) => self.dialog.show(&format!("Error: {}", e)),
        }
        Flow::Continue
    }

    fn execute(&mut self, command: SessionCommand) -> Result<String, CommandError> {
        match command {
            SessionCommand::Register {
                username,
                password,
                cellphone,
                first_name,
                last_name,
            } => Ok(self
                .session
                .register(&username, &password, &cellphone, &first_name, &last_name)?
                .to_string()),
            SessionCommand::Login { username, password } => {
                Ok(self.session.login(&username, &password).to_string())
            }
            SessionCommand::Logout => {
                self.session.logout();
                Ok("Logged out.".to_string())
            }
            SessionCommand::Send { recipient, text } => self.send(recipient, text),
            SessionCommand::SendStored { id } => {
                self.require_login()?;
                let message = self.session.send_stored(&id)?;
                Ok(message.confirmation())
            }
            SessionCommand::Stored => {
                let stored = self.session.messages().stored_messages();
                if stored.is_empty() {
                    return Ok("No stored messages.".to_string());
                }
                self.session
                    .messages()
                    .export_stored()
                    .map_err(|e| CommandError::InvalidArgs(format!("cannot render stored messages: {}", e)))
            }
            SessionCommand::Report => Ok(self.session.messages().print_messages()),
            SessionCommand::Longest => Ok(self
                .session
                .messages()
                .longest_sent()
                .map(|m| format!("Longest message ({} characters):\n{}", m.content().chars().count(), m.content()))
                .unwrap_or_else(|| "No messages sent yet.".to_string())),
            SessionCommand::Find { id } => Ok(self
                .session
                .messages()
                .find_by_id(&id)
                .map(describe)
                .unwrap_or_else(|| format!("No message with id {}", id))),
            SessionCommand::Help => Ok(HELP.to_string()),
            SessionCommand::Quit => Ok(String::new()),
        }
    }

    fn require_login(&self) -> Result<(), CommandError> {
        if self.session.is_logged_in() {
            Ok(())
        } else {
            Err(CommandError::NotLoggedIn)
        }
    }

    fn send(&mut self, recipient: String, text: String) -> Result<String, CommandError> {
        self.require_login()?;

        // Rejected text never takes a message number
        let max = self.session.messages().policy().max_length;
        let length = check_length(&text, max);
        if let LengthCheck::TooLong { .. } = length {
            return Ok(length.to_string());
        }

        let mut message = self.session.compose(recipient, text)?;

        let recipient_check = message.check_recipient_cell();
        self.dialog.show(recipient_check.describe());

        let choice = self.ask_choice();
        let outcome = self.session.resolve(&mut message, choice)?;
        Ok(match outcome {
            Outcome::Sent => message.confirmation(),
            Outcome::Discarded => format!("{}: message disregarded.", outcome),
            Outcome::Stored => format!("{}: message {} stored to send later.", outcome, message.id()),
        })
    }

    /// Prompt until a valid choice; running out of input discards
    fn ask_choice(&self) -> OutcomeChoice {
        loop {
            let Some(answer) = self.dialog.read_line(&format!("{}\n> ", OUTCOME_MENU)) else {
                return OutcomeChoice::Discard;
            };
            match answer.parse::<OutcomeChoice>() {
                Ok(choice) => return choice,
                Err(e) => self.dialog.show(&format!("Error: {}", e)),
            }
        }
    }
}

fn describe(message: &Message) -> String {
    format!(
        "Message {} ({})\nRecipient: {}\nMessage: {}\nMessage Hash: {}",
        message.id(),
        message.outcome().map(|o| o.as_str()).unwrap_or("PENDING"),
        message.recipient(),
        message.content(),
        message.hash()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Dialog fed from a fixed script, recording everything shown
    #[derive(Default)]
    struct ScriptedDialog {
        input: RefCell<VecDeque<String>>,
        shown: RefCell<Vec<String>>,
    }

    impl ScriptedDialog {
        fn with_input(lines: &[&str]) -> Self {
            Self {
                input: RefCell::new(lines.iter().map(|s| s.to_string()).collect()),
                shown: RefCell::new(Vec::new()),
            }
        }

        fn last_shown(&self) -> String {
            self.shown.borrow().last().cloned().unwrap_or_default()
        }
    }

    impl Dialog for &ScriptedDialog {
        fn show(&self, text: &str) {
            self.shown.borrow_mut().push(text.to_string());
        }

        fn read_line(&self, _prompt: &str) -> Option<String> {
            self.input.borrow_mut().pop_front()
        }
    }

    fn logged_in(dialog: &ScriptedDialog) -> SessionDispatcher<&ScriptedDialog> {
        let mut dispatcher = SessionDispatcher::new(Session::default(), dialog);
        dispatcher.dispatch("register test_ Password1! +27123456789 John Doe");
        dispatcher.dispatch("login test_ Password1!");
        dispatcher
    }

    #[test]
    fn test_register_and_login() {
        let dialog = ScriptedDialog::default();
        let mut dispatcher = SessionDispatcher::new(Session::default(), &dialog);

        dispatcher.dispatch("register test Password1! +27123456789 John Doe");
        assert!(dialog.last_shown().starts_with("Error: Username is not correctly formatted"));

        dispatcher.dispatch("register test_ Password1! +27123456789 John Doe");
        assert_eq!(dialog.last_shown(), "Registration successful!");

        dispatcher.dispatch("login test_ nope");
        assert_eq!(dialog.last_shown(), "Username or password incorrect, please try again");

        dispatcher.dispatch("login test_ Password1!");
        assert_eq!(dialog.last_shown(), "Welcome, it is great to see you again");
    }

    #[test]
    fn test_complete_message_flow() {
        let dialog = ScriptedDialog::with_input(&["1"]);
        let mut dispatcher = logged_in(&dialog);

        dispatcher.dispatch("send +27718693002 hi Mike, can you join us for dinner tonight");

        let shown = dialog.last_shown();
        assert!(shown.contains("MESSAGE SENT SUCCESSFULLY!"));
        assert!(shown.contains("Message Number: 1\n"));
        assert!(shown.contains("Recipient: +27718693002\n"));
        assert!(shown.contains("Message: hi Mike, can you join us for dinner tonight\n"));
        assert_eq!(dispatcher.session().messages().total_messages(), 1);
        assert_eq!(
            dispatcher.session().current_user().unwrap().total_messages_sent(),
            1
        );
    }

    #[test]
    fn test_invalid_message_flow() {
        let dialog = ScriptedDialog::with_input(&["2"]);
        let mut dispatcher = logged_in(&dialog);

        dispatcher.dispatch("send 08575975889 hi, keegan, did you recieve the payment?");

        assert!(dialog.last_shown().starts_with("DISCARDED"));
        assert_eq!(dispatcher.session().messages().total_messages(), 0);
    }

    #[test]
    fn test_invalid_choice_reprompts() {
        let dialog = ScriptedDialog::with_input(&["9", "3"]);
        let mut dispatcher = logged_in(&dialog);

        dispatcher.dispatch("send +27718693002 Store this message");

        assert!(dialog.last_shown().starts_with("STORED"));
        assert_eq!(dispatcher.session().messages().stored_messages().len(), 1);
    }

    #[test]
    fn test_send_to_invalid_recipient_is_refused() {
        let dialog = ScriptedDialog::with_input(&["1"]);
        let mut dispatcher = logged_in(&dialog);

        dispatcher.dispatch("send 08575975889 hello");

        assert!(dialog.last_shown().starts_with("Error: Cannot send to 08575975889"));
        assert_eq!(dispatcher.session().messages().total_messages(), 0);
    }

    #[test]
    fn test_send_requires_login() {
        let dialog = ScriptedDialog::default();
        let mut dispatcher = SessionDispatcher::new(Session::default(), &dialog);

        dispatcher.dispatch("send +27718693002 hello");
        assert_eq!(dialog.last_shown(), "Error: You need to log in first");
    }

    #[test]
    fn test_too_long_message_is_not_resolved() {
        let dialog = ScriptedDialog::with_input(&["1"]);
        let mut dispatcher = logged_in(&dialog);

        let line = format!("send +27718693002 {}", "x".repeat(255));
        dispatcher.dispatch(&line);

        assert_eq!(
            dialog.last_shown(),
            "Message exceeds 250 characters by 5, please reduce size."
        );
        assert_eq!(dispatcher.session().messages().total_messages(), 0);
    }

    #[test]
    fn test_too_long_message_keeps_numbering() {
        let dialog = ScriptedDialog::with_input(&["1"]);
        let mut dispatcher = logged_in(&dialog);

        dispatcher.dispatch(&format!("send +27718693002 {}", "x".repeat(251)));
        dispatcher.dispatch("send +27718693002 short one");

        assert!(dialog.last_shown().contains("Message Number: 1\n"));
        assert_eq!(dispatcher.session().messages().sent_messages()[0].number(), 1);
    }

    #[test]
    fn test_run_until_quit() {
        let dialog = ScriptedDialog::with_input(&[
            "register a_b Password1! +27123456789 Ann Bee",
            "",
            "login a_b Password1!",
            "quit",
            "login a_b Password1!",
        ]);
        let mut dispatcher = SessionDispatcher::new(Session::default(), &dialog);

        dispatcher.run();

        assert_eq!(dialog.last_shown(), "Goodbye!");
        // The line after quit is never read
        assert_eq!(dialog.input.borrow().len(), 1);
    }
}
