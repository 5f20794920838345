//! Error types for the terminal front end.

use std::fmt;

/// Errors that stop the front end.
#[derive(Debug)]
pub enum WidgetError {
    /// Configuration could not be loaded.
    Config { details: String },
    /// The configured script cannot drive a conversation.
    InvalidScript { details: String },
    /// Reading from the input failed.
    Input { details: String },
    /// Showing a message failed.
    Display { details: String },
}

impl fmt::Display for WidgetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config { details } => write!(f, "failed to load configuration: {details}"),
            Self::InvalidScript { details } => write!(f, "invalid script: {details}"),
            Self::Input { details } => write!(f, "failed to read input: {details}"),
            Self::Display { details } => write!(f, "failed to display message: {details}"),
        }
    }
}

impl std::error::Error for WidgetError {}
