//! Script protocol errors.

use ordo_core::{ColorParseError, MoveParseError};

/// Errors that can occur while parsing or running a script command.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    /// A command is missing a required argument.
    #[error("{command}: missing {argument}")]
    MissingArgument {
        /// The command being parsed.
        command: &'static str,
        /// The absent argument.
        argument: &'static str,
    },

    /// A numeric argument could not be parsed or is out of range.
    #[error("invalid {argument}: {value}")]
    InvalidNumber {
        /// The argument name.
        argument: &'static str,
        /// The rejected text.
        value: String,
    },

    /// A move could not be parsed.
    #[error("invalid move: {source}")]
    InvalidMove {
        /// The underlying parse error.
        #[from]
        source: MoveParseError,
    },

    /// The side in a `position` command could not be parsed.
    #[error("invalid position: {source}")]
    InvalidSide {
        /// The underlying parse error.
        #[from]
        source: ColorParseError,
    },

    /// `set` named an option the session does not have.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The option name given.
        name: String,
    },

    /// `set` gave an option a value it cannot take.
    #[error("invalid value for {name}: {value}")]
    InvalidOptionValue {
        /// The option name.
        name: String,
        /// The rejected value.
        value: String,
    },

    /// An I/O error occurred while reading commands or writing results.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
