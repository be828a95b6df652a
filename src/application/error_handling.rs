// src/application/error_handling.rs
//
// Error handling for shell actions
//
// - Not-found and persisted-file errors are reported and the loop continues
// - Console failures end the session

use std::io::Write;

use log::debug;

use crate::error::{AppError, AppResult};

/// Error categories as seen by the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    /// Collection or movie lookup miss
    NotFound,

    /// The collections file could not be written or read
    FileSystem,

    /// Console input or output failed or was closed
    Console,
}

impl ErrorType {
    pub fn of(error: &AppError) -> Self {
        match error {
            AppError::CollectionNotFound(_) | AppError::MovieNotFound { .. } => Self::NotFound,
            AppError::Save(_) | AppError::Load(_) => Self::FileSystem,
            AppError::InputClosed | AppError::Io(_) => Self::Console,
        }
    }

    pub fn is_recoverable(self) -> bool {
        !matches!(self, Self::Console)
    }
}

/// Print a recoverable error as its user-facing message, or hand it back
pub fn report<W: Write>(out: &mut W, error: AppError) -> AppResult<()> {
    let error_type = ErrorType::of(&error);
    if !error_type.is_recoverable() {
        return Err(error);
    }

    debug!("recovered from {:?}: {:?}", error_type, error);
    writeln!(out, "{}", error)?;
    Ok(())
}
