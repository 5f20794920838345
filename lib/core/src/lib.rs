//! Shared building blocks for the UrbanEase assistant.
//!
//! Identifiers for widget sessions and displayed messages, plus the
//! rootcause-based `Result` alias every crate in the workspace reports with.

pub mod error;
pub mod id;

pub use error::Result;
pub use id::{MessageId, ParseIdError, WidgetSessionId};
