//! Console adapter for interactive sessions

use std::io::{self, BufRead, Write};
use crate::domain::traits::Dialog;

/// Dialog backed by stdin/stdout
pub struct ConsoleAdapter {
    name: String,
}

impl ConsoleAdapter {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Write and flush a prompt; failures are logged and returned
    fn write_prompt(out: &mut impl Write, prompt: &str) -> io::Result<()> {
        let result = out.write_all(prompt.as_bytes()).and_then(|_| out.flush());
        if let Err(e) = &result {
            tracing::warn!("Failed to write prompt: {}", e);
        }
        result
    }

    /// Read one trimmed line; `None` at end of input or on a read error
    fn read_from(input: &mut impl BufRead) -> Option<String> {
        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim().to_string()),
            Err(e) => {
                tracing::error!("Failed to read input: {}", e);
                None
            }
        }
    }
}

impl Default for ConsoleAdapter {
    fn default() -> Self {
        Self::new("quickchat")
    }
}

impl Dialog for ConsoleAdapter {
    fn show(&self, text: &str) {
        println!("[{}] {}", self.name, text);
    }

    fn read_line(&self, prompt: &str) -> Option<String> {
        // Still read when the prompt could not be shown
        let _ = Self::write_prompt(&mut io::stdout(), prompt);
        Self::read_from(&mut io::stdin().lock())
    }
}
