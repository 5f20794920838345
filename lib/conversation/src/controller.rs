//! The guided intake dialogue.
//!
//! [`DialogueController::submit`] is the only way the conversation moves.
//! Each call validates one answer against the current step, updates the
//! state, and returns the assistant messages to show. The controller never
//! talks to the display itself.

use crate::error::{ConversationError, ScriptError};
use crate::message::Message;
use crate::responder::{ResponseTable, Responder};
use crate::script::Script;
use crate::state::{ConversationState, Step};
use crate::validate::{clean_contact, clean_name, is_valid_email, trim_input};
use tracing::{debug, error, info, warn};
use urbanease_core::Result;

/// Case-insensitive command that starts the intake over from any step.
pub const RESTART_COMMAND: &str = "restart";

/// Owns one conversation and drives it forward.
#[derive(Debug, Clone)]
pub struct DialogueController {
    state: ConversationState,
    script: Script,
    responder: Responder,
}

impl DialogueController {
    /// Creates a controller in the `idle` step.
    ///
    /// # Errors
    ///
    /// Returns an error if the script fails validation.
    pub fn new(script: Script) -> Result<Self, ScriptError> {
        script.validate()?;
        let table = ResponseTable::new(script.keywords.clone())?;
        let responder = Responder::new(table, script.no_match.clone());
        Ok(Self {
            state: ConversationState::new(),
            script,
            responder,
        })
    }

    /// Replaces the conversation state, e.g. to resume a snapshot.
    #[must_use]
    pub fn with_state(mut self, state: ConversationState) -> Self {
        if !state.is_consistent() {
            warn!(?state, "resuming a state with answers out of step");
        }
        self.state = state;
        self
    }

    #[must_use]
    pub fn state(&self) -> &ConversationState {
        &self.state
    }

    #[must_use]
    pub fn step(&self) -> Step {
        self.state.step()
    }

    #[must_use]
    pub fn script(&self) -> &Script {
        &self.script
    }

    /// Clears the conversation and asks for the name, without the restart
    /// acknowledgment. Used when the widget opens for the first time.
    pub fn start(&mut self) -> Vec<Message> {
        self.state.reset();
        debug!("intake started");
        vec![Message::bot(&self.script.prompts.name)]
    }

    /// Handles one submitted line and returns the assistant's replies.
    ///
    /// Rejected answers produce a clarifying message and leave the state
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ConversationError::EmptyInput`] if `raw` is blank. Nothing
    /// changes in that case.
    pub fn submit(&mut self, raw: &str) -> Result<Vec<Message>, ConversationError> {
        let text = trim_input(raw);
        if text.is_empty() {
            return Err(ConversationError::EmptyInput.into());
        }
        let normalized = text.to_lowercase();
        let from = self.state.step();

        if normalized == RESTART_COMMAND {
            info!(
                %from,
                discarded = self.state.collected().len(),
                "conversation restarted"
            );
            let mut messages = vec![Message::bot(&self.script.restart_ack)];
            messages.extend(self.start());
            return Ok(messages);
        }

        let messages = match from {
            // Only reachable when text arrives before the greeting has run.
            Step::Idle => self.start(),
            Step::Name => self.answer_name(text),
            Step::Contact => self.answer_contact(text),
            Step::Email => self.answer_email(text),
            Step::Query => self.answer_query(text),
            Step::Complete => vec![Message::bot(self.responder.respond(&normalized))],
        };

        let to = self.state.step();
        if from == to {
            debug!(step = %from, "step unchanged");
        } else {
            debug!(%from, %to, "step advanced");
        }
        Ok(messages)
    }

    fn answer_name(&mut self, text: &str) -> Vec<Message> {
        let Some(name) = clean_name(text) else {
            debug!("name rejected");
            return vec![Message::bot(&self.script.reprompts.name)];
        };
        let reply = self.script.welcome(&name);
        self.state.accept(name);
        vec![Message::bot(reply)]
    }

    fn answer_contact(&mut self, text: &str) -> Vec<Message> {
        let Some(contact) = clean_contact(text) else {
            debug!("contact number rejected");
            return vec![Message::bot(&self.script.reprompts.contact)];
        };
        self.state.accept(contact);
        vec![Message::bot(&self.script.prompts.email)]
    }

    fn answer_email(&mut self, text: &str) -> Vec<Message> {
        if !is_valid_email(text) {
            debug!("email rejected");
            return vec![Message::bot(&self.script.reprompts.email)];
        }
        self.state.accept(text.to_string());
        vec![Message::bot(&self.script.prompts.query)]
    }

    fn answer_query(&mut self, text: &str) -> Vec<Message> {
        let Some(summary) = self.script.summary(self.state.collected(), text) else {
            error!(
                state = ?self.state,
                "query step reached without name, email and contact; this is a bug"
            );
            return vec![Message::bot(&self.script.unexpected_state)];
        };
        self.state.accept(text.to_string());
        info!("intake complete");
        vec![
            Message::bot(summary),
            Message::bot(&self.script.reply_window),
        ]
    }
}

impl Default for DialogueController {
    fn default() -> Self {
        let script = Script::default();
        let table = ResponseTable::builtin(script.keywords.clone());
        let responder = Responder::new(table, script.no_match.clone());
        Self {
            state: ConversationState::new(),
            script,
            responder,
        }
    }
}
