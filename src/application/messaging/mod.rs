//! Console messaging - Command parsing and dispatching

pub mod dispatcher;
pub mod parser;

pub use dispatcher::{Flow, SessionDispatcher};
pub use parser::{CommandParser, SessionCommand};
