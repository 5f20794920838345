//! Error types for the conversation crate.
//!
//! Rejected answers are not errors: they re-prompt and leave the state
//! alone. What remains is reported through rootcause:
//! - `ConversationError`: a submission the controller refuses to process
//! - `ScriptError`: a script or keyword table that cannot be used
//! - `DisplayError`: the display collaborator failed to show a message

use std::fmt;
use urbanease_core::MessageId;

/// Errors from the dialogue controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversationError {
    /// Submitted text was empty after trimming.
    EmptyInput,
}

impl fmt::Display for ConversationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "submitted text is empty"),
        }
    }
}

impl std::error::Error for ConversationError {}

/// Errors from validating a script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    /// A keyword entry has an empty keyword, which would match every input.
    EmptyKeyword { position: usize },
    /// The greeting has no lines.
    EmptyGreeting,
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyKeyword { position } => {
                write!(f, "keyword entry {position} has an empty keyword")
            }
            Self::EmptyGreeting => write!(f, "greeting must have at least one line"),
        }
    }
}

impl std::error::Error for ScriptError {}

/// Errors from delivering messages to the display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayError {
    /// The sink could not show a message.
    DeliveryFailed { message_id: MessageId, reason: String },
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DeliveryFailed { message_id, reason } => {
                write!(f, "failed to display {message_id}: {reason}")
            }
        }
    }
}

impl std::error::Error for DisplayError {}
