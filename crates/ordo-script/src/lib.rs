//! Line-oriented script protocol for driving a sort table.

pub mod command;
pub mod error;
pub mod session;

pub use command::{Command, parse_command};
pub use error::ScriptError;
pub use session::{Session, SessionConfig};
