//! Error types

use thiserror::Error;

/// Validation failures reported before a form is submitted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Points must be a whole number")]
    InvalidPoints,

    #[error("Unsupported file type: {0} (only images and PDFs are accepted)")]
    UnsupportedFile(String),

    #[error("Unknown staff member: {0}")]
    UnknownStaff(String),
}

/// Failures reading or writing the persisted role flag
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("role store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("role store is unavailable: {0}")]
    Unavailable(String),

    #[error("invalid stored role: {0}")]
    InvalidRole(String),

    #[error("role flag could not be (de)serialized: {0}")]
    Corrupt(String),
}
