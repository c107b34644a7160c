//! Console front end: command parsing and the interactive game loop.

pub mod command;
pub mod error;
pub mod session;

pub use command::{Command, parse_command};
pub use error::CliError;
pub use session::{Config, PlayAs, Session};
