// src/error/types.rs
use thiserror::Error;

/// Errors raised by the service layer and the shell.
///
/// The `Display` of the not-found and persistence variants is the exact
/// message shown to the user.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Collection not found.")]
    CollectionNotFound(String),

    #[error("Movie not found in the collection.")]
    MovieNotFound { collection: String, title: String },

    #[error("Error saving movie collections.")]
    Save(#[source] std::io::Error),

    #[error("Error loading movie collections.")]
    Load(#[source] std::io::Error),

    #[error("Console input closed")]
    InputClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
