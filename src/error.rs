//! Error handling for bakehook.
//! Defines the error taxonomy shared by the serialization facade and the hook runner.

use std::io;
use thiserror::Error;

/// Custom error types for bakehook operations.
///
/// This enum represents all possible errors that can occur while serializing a
/// context or running a hook. It implements the standard Error trait through
/// thiserror's derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// The object given as a serializer does not implement the `Serializer` trait.
    #[error("Invalid type: expected an implementation of {expected}.")]
    InvalidType { expected: String },

    /// The serializer tag does not match `[A-Za-z_][A-Za-z0-9_.-]*`.
    #[error("Invalid serializer type: '{tag}' must start with a letter or an underscore and contain only letters, digits, '_', '.' or '-'.")]
    InvalidSerializerType { tag: String },

    /// No serializer is registered under the requested tag.
    #[error("Unknown serializer type: '{tag}'.")]
    UnknownSerializerType { tag: String },

    /// The input holds no `type|payload$` envelope.
    #[error("Bad serialized string format: serialized string should be of the form serializer_type|serialized_string$.")]
    BadSerializedStringFormat,

    /// The hook script exited with a non-zero status.
    #[error("Hook script failed (exit status: {}).", describe_exit(.exit_code))]
    FailedHook { exit_code: Option<i32> },

    /// A serializer could not encode or decode a payload.
    #[error("Serialization error: {0}.")]
    SerializationError(String),

    /// Represents errors that occur during configuration parsing or processing
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents errors that occur during file system and process operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    #[error("JSON error: {0}.")]
    JsonError(#[from] serde_json::Error),

    /// Represents errors that occur while rendering a hook script
    #[error("Template error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),
}

fn describe_exit(exit_code: &Option<i32>) -> String {
    match exit_code {
        Some(code) => code.to_string(),
        None => "terminated by signal".to_string(),
    }
}

/// Convenience type alias for Results with Error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
