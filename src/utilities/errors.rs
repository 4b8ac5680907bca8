//! Error types for followcast.

use thiserror::Error;

/// Errors from input validation in the matching core.
#[derive(Debug, Error)]
pub enum InputError {
    /// The input value is outside the function's domain.
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
}

/// Errors from persona table loading and export.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// A required column is absent from the header row.
    #[error("missing column: {name}")]
    MissingColumn { name: String },

    /// A data row failed validation. `row` is 1-based and counts the header.
    #[error("malformed row {row}: {message}")]
    MalformedRow { row: usize, message: String },

    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Errors from the tag suggestion client.
#[derive(Debug, Error)]
pub enum SuggestError {
    /// No API key was supplied.
    #[error("API key not set; pass one or set OPENAI_API_KEY")]
    ApiKeyMissing,

    /// HTTP transport failure.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("chat completion failed ({status}): {body}")]
    Api { status: u16, body: String },

    /// The reply body could not be interpreted.
    #[error("malformed chat completion reply: {message}")]
    MalformedReply { message: String },
}
