//! Conversation state: the current step and the answers collected so far.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stage of the guided intake.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Nothing has been asked yet.
    #[default]
    Idle,
    /// Waiting for the visitor's name.
    Name,
    /// Waiting for a contact number.
    Contact,
    /// Waiting for an email address.
    Email,
    /// Waiting for the free-text request.
    Query,
    /// Intake finished; free text goes to the keyword responder.
    Complete,
}

impl Step {
    /// Returns the field this step collects, if any.
    #[must_use]
    pub const fn field(&self) -> Option<Field> {
        match self {
            Self::Name => Some(Field::Name),
            Self::Contact => Some(Field::Contact),
            Self::Email => Some(Field::Email),
            Self::Query => Some(Field::Query),
            Self::Idle | Self::Complete => None,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Name => "name",
            Self::Contact => "contact",
            Self::Email => "email",
            Self::Query => "query",
            Self::Complete => "complete",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the answers the intake collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Contact,
    Email,
    Query,
}

impl Field {
    /// All fields in the order they are asked for.
    pub const ALL: [Field; 4] = [Field::Name, Field::Contact, Field::Email, Field::Query];
}

/// Answers accepted so far.
///
/// A field is only set once its step has been passed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectedFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    query: Option<String>,
}

impl CollectedFields {
    /// Returns the stored value for `field`.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        self.slot(field).as_deref()
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.get(Field::Name)
    }

    #[must_use]
    pub fn contact(&self) -> Option<&str> {
        self.get(Field::Contact)
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.get(Field::Email)
    }

    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.get(Field::Query)
    }

    /// Number of fields set.
    #[must_use]
    pub fn len(&self) -> usize {
        Field::ALL.iter().filter(|f| self.get(**f).is_some()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn slot(&self, field: Field) -> &Option<String> {
        match field {
            Field::Name => &self.name,
            Field::Contact => &self.contact,
            Field::Email => &self.email,
            Field::Query => &self.query,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Name => &mut self.name,
            Field::Contact => &mut self.contact,
            Field::Email => &mut self.email,
            Field::Query => &mut self.query,
        }
    }
}

/// The sole mutable entity of a conversation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationState {
    step: Step,
    #[serde(default)]
    collected: CollectedFields,
}

impl ConversationState {
    /// Fresh state, before anything has been asked.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn step(&self) -> Step {
        self.step
    }

    #[must_use]
    pub fn collected(&self) -> &CollectedFields {
        &self.collected
    }

    /// Clears every answer and goes back to asking for the name.
    pub(crate) fn reset(&mut self) {
        self.collected = CollectedFields::default();
        self.step = Step::Name;
    }

    /// Stores the answer for the current step and moves to the next one.
    ///
    /// Does nothing on steps that do not collect a field.
    pub(crate) fn accept(&mut self, value: String) {
        let Some(field) = self.step.field() else {
            return;
        };
        *self.collected.slot_mut(field) = Some(value);
        self.step = match field {
            Field::Name => Step::Contact,
            Field::Contact => Step::Email,
            Field::Email => Step::Query,
            Field::Query => Step::Complete,
        };
    }

    /// True when every field before the current step has been collected.
    ///
    /// Always holds for states built through the controller; a restored state
    /// may violate it.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let passed = match self.step {
            Step::Idle | Step::Name => 0,
            Step::Contact => 1,
            Step::Email => 2,
            Step::Query => 3,
            Step::Complete => 4,
        };
        Field::ALL
            .iter()
            .enumerate()
            .all(|(i, f)| self.collected.get(*f).is_some() == (i < passed))
    }
}
