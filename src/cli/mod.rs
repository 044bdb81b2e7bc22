//! Interactive command-line front end.
//!
//! - **command**: parsing of text commands
//! - **handlers**: execution of commands against an address book

pub mod command;
pub mod handlers;

pub use command::Command;
pub use handlers::{CommandHandler, Reply};
