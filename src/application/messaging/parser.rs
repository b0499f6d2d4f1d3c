//! Command parser - Parses console lines into session commands

use crate::application::errors::CommandError;

/// A console command understood by the session dispatcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Register {
        username: String,
        password: String,
        cellphone: String,
        first_name: String,
        last_name: String,
    },
    Login { username: String, password: String },
    Logout,
    Send { recipient: String, text: String },
    SendStored { id: String },
    Stored,
    Report,
    Longest,
    Find { id: String },
    Help,
    Quit,
}

pub const HELP: &str = "Available commands:
  register <username> <password> <cellphone> <first name> <last name>
  login <username> <password>
  logout
  send <recipient> <message text>
  send-stored <message id>
  stored - list messages stored for later
  report - list sent messages
  longest - show the longest sent message
  find <message id>
  help
  quit";

/// Parses console input into `SessionCommand`s
pub struct CommandParser {
    command_prefix: String,
}

impl CommandParser {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            command_prefix: prefix.into(),
        }
    }

    /// Parse one line; the command prefix is optional
    pub fn parse(&self, line: &str) -> Result<SessionCommand, CommandError> {
        let line = line.trim();
        let line = line.strip_prefix(self.command_prefix.as_str()).unwrap_or(line);

        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };
        let args: Vec<&str> = rest.split_whitespace().collect();

        match name.to_lowercase().as_str() {
            "register" => {
                let [username, password, cellphone, first_name, last_name] =
                    Self::exact::<5>(&args, "register <username> <password> <cellphone> <first name> <last name>")?;
                Ok(SessionCommand::Register {
                    username,
                    password,
                    cellphone,
                    first_name,
                    last_name,
                })
            }
            "login" => {
                let [username, password] = Self::exact::<2>(&args, "login <username> <password>")?;
                Ok(SessionCommand::Login { username, password })
            }
            "logout" => Ok(SessionCommand::Logout),
            "send" => {
                // Everything after the recipient is message text, spacing preserved
                let (recipient, text) = rest
                    .split_once(char::is_whitespace)
                    .map(|(r, t)| (r, t.trim()))
                    .unwrap_or((rest, ""));
                if recipient.is_empty() || text.is_empty() {
                    return Err(CommandError::InvalidArgs(
                        "usage: send <recipient> <message text>".to_string(),
                    ));
                }
                Ok(SessionCommand::Send {
                    recipient: recipient.to_string(),
                    text: text.to_string(),
                })
            }
            "send-stored" => {
                let [id] = Self::exact::<1>(&args, "send-stored <message id>")?;
                Ok(SessionCommand::SendStored { id })
            }
            "stored" => Ok(SessionCommand::Stored),
            "report" => Ok(SessionCommand::Report),
            "longest" => Ok(SessionCommand::Longest),
            "find" => {
                let [id] = Self::exact::<1>(&args, "find <message id>")?;
                Ok(SessionCommand::Find { id })
            }
            "help" => Ok(SessionCommand::Help),
            "quit" | "exit" => Ok(SessionCommand::Quit),
            "" => Err(CommandError::InvalidArgs("empty command".to_string())),
            other => Err(CommandError::NotFound(other.to_string())),
        }
    }

    fn exact<const N: usize>(args: &[&str], usage: &str) -> Result<[String; N], CommandError> {
        if args.len() != N {
            return Err(CommandError::InvalidArgs(format!("usage: {}", usage)));
        }
        Ok(std::array::from_fn(|i| args[i].to_string()))
    }
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new("/")
    }
}
