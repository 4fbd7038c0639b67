//! Error types for the budgeting session.

use thiserror::Error;

/// Result type alias for session operations
pub type Result<T> = std::result::Result<T, BudgetError>;

/// Errors that end the session.
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Failed to read from or write to the console
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The console input ended while a value was still expected
    #[error("Input closed while waiting for: {prompt}")]
    InputClosed { prompt: String },

    /// Unrecognized command-line argument
    #[error("Unknown argument '{0}'. Usage: money-watcher [--summary | --detailed]")]
    UnknownArgument(String),
}

/// Reasons a line of console input was rejected by a validator.
///
/// These never leave the validator: the user sees a fixed diagnostic and is
/// asked again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("'{0}' is not an integer")]
    NotAnInteger(String),

    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("{value} is below the minimum of {minimum}")]
    BelowMinimum { value: String, minimum: String },

    #[error("{value} is above the maximum of {maximum}")]
    AboveMaximum { value: String, maximum: String },

    #[error("'{0}' is not one of the offered options")]
    NotAnOption(String),
}
