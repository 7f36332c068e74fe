//! Error types for Vellum operations.

use thiserror::Error;

/// The main error type for Vellum operations.
///
/// Logging itself never fails: a message that cannot be rendered degrades to
/// an empty message, and sink write failures are swallowed. The fallible
/// surface is the registry, whose key lookups succeed or fail loudly.
#[derive(Error, Debug)]
pub enum VellumError {
    /// A logger was created under a key that is already taken.
    #[error("Logger `{0}` already exists")]
    LoggerExists(String),

    /// A lookup or removal referenced a key with no logger behind it.
    #[error("Logger `{0}` does not exist")]
    LoggerNotFound(String),

    /// Invalid input while parsing a level name or field tag.
    #[error("Validation error: {0}")]
    Validation(String),
}

/// A specialized Result type for Vellum operations.
pub type Result<T> = std::result::Result<T, VellumError>;
