pub mod cards;
pub mod dictation;
pub mod prompter;
pub mod ui;

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum FlexNotesError {
    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Dictation error: {0}")]
    DictationError(String),

    #[error("Microphone permission denied")]
    PermissionDenied,

    #[error("Channel error: {0}")]
    ChannelError(String),

    #[error("IO error: {0}")]
    IOError(String),
}

impl From<std::io::Error> for FlexNotesError {
    fn from(e: std::io::Error) -> Self {
        FlexNotesError::IOError(e.to_string())
    }
}

impl From<serde_json::Error> for FlexNotesError {
    fn from(e: serde_json::Error) -> Self {
        FlexNotesError::SerializationError(e.to_string())
    }
}

impl FlexNotesError {
    /// Check if this error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            // Cards stay in memory; the next mutation writes the file again
            FlexNotesError::StorageError(_) => true,
            FlexNotesError::SerializationError(_) => true,
            // The user can fix the form and save again
            FlexNotesError::ValidationError(_) => true,
            FlexNotesError::DictationError(_) => true,
            // Typing remains available without the microphone
            FlexNotesError::PermissionDenied => true,
            FlexNotesError::ChannelError(_) => false,
            FlexNotesError::IOError(_) => false,
        }
    }

    /// Get a user-friendly description for notices
    pub fn user_message(&self) -> String {
        match self {
            FlexNotesError::StorageError(_) => {
                "Could not access saved notes.".to_string()
            }
            FlexNotesError::SerializationError(_) => {
                "Saved notes could not be read.".to_string()
            }
            FlexNotesError::ValidationError(msg) => msg.clone(),
            FlexNotesError::DictationError(_) => {
                "Dictation failed. Please try again.".to_string()
            }
            FlexNotesError::PermissionDenied => {
                "FlexNotes needs microphone access to dictate notes.".to_string()
            }
            FlexNotesError::ChannelError(_) => {
                "Internal communication error. Please restart the application.".to_string()
            }
            FlexNotesError::IOError(_) => {
                "File system error occurred.".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, FlexNotesError>;
