//! Shared utilities.

pub mod errors;

pub use errors::{DatasetError, InputError, SuggestError};
