//! Conversation engine behind the UrbanEase chat widget.
//!
//! This crate provides:
//!
//! - **Dialogue Controller**: the guided intake flow (name, contact number,
//!   email, request) with per-step validation and the `restart` command
//! - **Responder**: keyword replies once the intake is complete
//! - **Widget**: first-open greeting, panel state, and delivery of messages
//!   to a [`MessageSink`]
//!
//! Everything is synchronous; a widget handles one submission at a time.

pub mod controller;
pub mod error;
pub mod message;
pub mod responder;
pub mod script;
pub mod state;
pub mod validate;
pub mod widget;

pub use controller::DialogueController;
pub use error::{ConversationError, DisplayError, ScriptError};
pub use message::{Message, Sender};
pub use responder::{ResponseTable, Responder};
pub use script::{KeywordReply, Reprompts, Script, StepPrompts};
pub use state::{CollectedFields, ConversationState, Field, Step};
pub use widget::{MessageSink, Widget};
