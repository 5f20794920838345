//! Everything the assistant says.
//!
//! A [`Script`] holds the greeting, the step prompts, the re-prompts shown
//! when an answer is rejected, the closing notices and the keyword table.
//! Every field has a default, so a configuration file only needs to name the
//! lines it wants to change.

use crate::error::ScriptError;
use crate::state::CollectedFields;
use serde::{Deserialize, Serialize};
use urbanease_core::Result;

/// One row of the keyword table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordReply {
    /// Substring looked for in the lowercased input.
    pub keyword: String,
    /// Reply sent when the keyword matches.
    pub reply: String,
}

impl KeywordReply {
    #[must_use]
    pub fn new(keyword: impl Into<String>, reply: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            reply: reply.into(),
        }
    }
}

/// The question asked at each intake step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepPrompts {
    pub name: String,
    pub contact: String,
    pub email: String,
    pub query: String,
}

impl Default for StepPrompts {
    fn default() -> Self {
        Self {
            name: "To help you better, can I have your name?".to_string(),
            contact: "Thanks! What’s the best contact number for you?".to_string(),
            email: "Great. Could you share your email address?".to_string(),
            query: "Awesome. What can we help you with today?".to_string(),
        }
    }
}

/// Clarifications sent when an answer is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reprompts {
    pub name: String,
    pub contact: String,
    pub email: String,
}

impl Default for Reprompts {
    fn default() -> Self {
        Self {
            name: "Could you share the name we should address you with?".to_string(),
            contact: "That contact number seems short. Could you type it again?".to_string(),
            email: "That doesn’t look like a valid email. Could you double-check it?"
                .to_string(),
        }
    }
}

/// The complete set of assistant lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Script {
    /// Lines shown the first time the widget opens.
    pub greeting: Vec<String>,
    pub prompts: StepPrompts,
    pub reprompts: Reprompts,
    /// Acknowledgment sent before the name prompt on `restart`.
    pub restart_ack: String,
    /// Notice sent after the intake summary.
    pub reply_window: String,
    /// Sent when nothing in the keyword table matches.
    pub no_match: String,
    /// Sent when the conversation state is internally inconsistent.
    pub unexpected_state: String,
    /// Keyword table, in match priority order.
    pub keywords: Vec<KeywordReply>,
}

impl Default for Script {
    fn default() -> Self {
        Self {
            greeting: vec![
                "Hi there 👋! I’m the UrbanEase assistant.".to_string(),
                "I’d love to get a few details so we can tailor our response.".to_string(),
            ],
            prompts: StepPrompts::default(),
            reprompts: Reprompts::default(),
            restart_ack: "No problem—let’s start over.".to_string(),
            reply_window: "Our team typically replies within 24–48 hours. \
                           Type restart if you want to send another request."
                .to_string(),
            no_match: "Need to share another request? Type restart to begin again, \
                       or visit the Contact page for more options."
                .to_string(),
            unexpected_state: "Thanks for the note! If you’d like to start the support \
                               flow again, type restart."
                .to_string(),
            keywords: default_keywords(),
        }
    }
}

fn default_keywords() -> Vec<KeywordReply> {
    vec![
        KeywordReply::new(
            "hello",
            "Hello! 👋 Glad to see you back. If you’d like to submit another request, type restart.",
        ),
        KeywordReply::new(
            "offers",
            "We have seasonal offers coming soon. Stay tuned on the Explore page!",
        ),
        KeywordReply::new(
            "contact",
            "You can reach us via the Contact page form. We usually reply within 24–48 hours.",
        ),
    ]
}

impl Script {
    /// Checks that the script can drive a conversation.
    ///
    /// # Errors
    ///
    /// Returns an error if the greeting is empty or a keyword is blank.
    pub fn validate(&self) -> Result<(), ScriptError> {
        if self.greeting.is_empty() {
            return Err(ScriptError::EmptyGreeting.into());
        }
        if let Some(position) = self.keywords.iter().position(|k| k.keyword.trim().is_empty()) {
            return Err(ScriptError::EmptyKeyword { position }.into());
        }
        Ok(())
    }

    /// Acknowledges an accepted name and asks for the contact number.
    #[must_use]
    pub fn welcome(&self, name: &str) -> String {
        format!("Nice to meet you, {name}! {}", self.prompts.contact)
    }

    /// Summarises a finished intake.
    ///
    /// Returns `None` unless name, email and contact are all present.
    #[must_use]
    pub fn summary(&self, collected: &CollectedFields, query: &str) -> Option<String> {
        let name = collected.name()?;
        let email = collected.email()?;
        let contact = collected.contact()?;
        Some(format!(
            "Thanks {name}! We’ll reach out at {email} or {contact} about \"{query}\"."
        ))
    }
}
