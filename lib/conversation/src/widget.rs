//! The chat widget: panel state, the first-open greeting, and delivery.
//!
//! A [`Widget`] is one page session. It owns its [`DialogueController`], the
//! greeted flag and a [`MessageSink`] that renders messages. Everything the
//! widget shows also lands in its in-memory transcript.

use crate::controller::DialogueController;
use crate::error::DisplayError;
use crate::message::Message;
use crate::state::Step;
use crate::validate::trim_input;
use tracing::{debug, instrument};
use urbanease_core::{Result, WidgetSessionId};

/// Renders messages for the visitor.
pub trait MessageSink {
    /// Shows one message, appended after everything shown before.
    ///
    /// # Errors
    ///
    /// Returns an error if the message could not be shown.
    fn display(&mut self, message: &Message) -> Result<(), DisplayError>;
}

/// Collects messages in memory.
impl MessageSink for Vec<Message> {
    fn display(&mut self, message: &Message) -> Result<(), DisplayError> {
        self.push(message.clone());
        Ok(())
    }
}

/// One widget session.
#[derive(Debug)]
pub struct Widget<S> {
    id: WidgetSessionId,
    controller: DialogueController,
    sink: S,
    greeted: bool,
    open: bool,
    transcript: Vec<Message>,
}

impl<S: MessageSink> Widget<S> {
    /// Creates a closed, not yet greeted widget.
    #[must_use]
    pub fn new(controller: DialogueController, sink: S) -> Self {
        Self {
            id: WidgetSessionId::new(),
            controller,
            sink,
            greeted: false,
            open: false,
            transcript: Vec::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> WidgetSessionId {
        self.id
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn has_greeted(&self) -> bool {
        self.greeted
    }

    #[must_use]
    pub fn step(&self) -> Step {
        self.controller.step()
    }

    /// Every message shown so far, oldest first.
    #[must_use]
    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Opens the panel. The first open greets the visitor and starts the
    /// intake; later opens show nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the display fails. The greeting is not repeated
    /// on the next open.
    #[instrument(skip(self), fields(session = %self.id))]
    pub fn open(&mut self) -> Result<(), DisplayError> {
        self.open = true;
        if self.greeted {
            return Ok(());
        }
        let mut messages: Vec<Message> = self
            .controller
            .script()
            .greeting
            .iter()
            .map(|line| Message::bot(line.as_str()))
            .collect();
        messages.extend(self.controller.start());
        self.greeted = true;
        debug!("greeting shown");
        self.deliver(messages)
    }

    /// Closes the panel. The conversation is left as it is.
    #[instrument(skip(self), fields(session = %self.id))]
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Opens a closed panel or closes an open one.
    ///
    /// # Errors
    ///
    /// Returns an error if opening shows the greeting and the display fails.
    pub fn toggle(&mut self) -> Result<(), DisplayError> {
        if self.open {
            self.close();
            Ok(())
        } else {
            self.open()
        }
    }

    /// Handles a line the visitor sent: echoes it, then shows the replies.
    ///
    /// Blank input is ignored entirely.
    ///
    /// # Errors
    ///
    /// Returns an error if the display fails. The conversation has already
    /// moved on by then.
    #[instrument(skip(self, text), fields(session = %self.id, step = %self.controller.step()))]
    pub fn submit(&mut self, text: &str) -> Result<(), DisplayError> {
        let text = trim_input(text);
        let replies = match self.controller.submit(text) {
            Ok(replies) => replies,
            Err(report) => {
                debug!(error = %report, "submission ignored");
                return Ok(());
            }
        };
        let mut messages = Vec::with_capacity(replies.len() + 1);
        messages.push(Message::user(text));
        messages.extend(replies);
        self.deliver(messages)
    }

    fn deliver(&mut self, messages: Vec<Message>) -> Result<(), DisplayError> {
        for message in messages {
            self.sink.display(&message)?;
            self.transcript.push(message);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Sender;

    fn widget() -> Widget<Vec<Message>> {
        Widget::new(DialogueController::default(), Vec::new())
    }

    fn shown(widget: &Widget<Vec<Message>>) -> Vec<(Sender, &str)> {
        widget
            .sink()
            .iter()
            .map(|m| (m.sender, m.text.as_str()))
            .collect()
    }

    /// Accepts a fixed number of messages, then fails.
    struct FlakySink {
        remaining: usize,
    }

    impl MessageSink for FlakySink {
        fn display(&mut self, message: &Message) -> Result<(), DisplayError> {
            if self.remaining == 0 {
                return Err(DisplayError::DeliveryFailed {
                    message_id: message.id,
                    reason: "panel detached".to_string(),
                }
                .into());
            }
            self.remaining -= 1;
            Ok(())
        }
    }

    #[test]
    fn first_open_greets_and_asks_for_name() {
        let mut widget = widget();
        assert!(!widget.is_open());

        widget.open().expect("open");

        assert!(widget.is_open());
        assert!(widget.has_greeted());
        assert_eq!(widget.step(), Step::Name);
        assert_eq!(
            shown(&widget),
            [
                (Sender::Bot, "Hi there 👋! I’m the UrbanEase assistant."),
                (
                    Sender::Bot,
                    "I’d love to get a few details so we can tailor our response."
                ),
                (Sender::Bot, "To help you better, can I have your name?"),
            ]
        );
    }

    #[test]
    fn reopening_does_not_greet_again() {
        let mut widget = widget();
        widget.open().expect("open");
        widget.submit("Alice").expect("submit");
        let before = widget.sink().len();

        widget.close();
        widget.open().expect("reopen");
        widget.toggle().expect("toggle closed");
        widget.toggle().expect("toggle open");

        assert!(widget.is_open());
        assert_eq!(widget.sink().len(), before);
        assert_eq!(widget.step(), Step::Contact);
    }

    #[test]
    fn submission_is_echoed_before_replies() {
        let mut widget = widget();
        widget.open().expect("open");

        widget.submit("  John123!  ").expect("submit");

        let shown = shown(&widget);
        assert_eq!(shown[3], (Sender::User, "John123!"));
        assert_eq!(shown[4].0, Sender::Bot);
        assert!(shown[4].1.starts_with("Nice to meet you, John!"));
    }

    #[test]
    fn echo_omits_byte_order_marks() {
        let mut widget = widget();
        widget.open().expect("open");

        widget.submit("\u{feff}Alice\u{feff}").expect("submit");

        assert_eq!(shown(&widget)[3], (Sender::User, "Alice"));
    }

    #[test]
    fn blank_submission_shows_nothing() {
        let mut widget = widget();
        widget.open().expect("open");
        let before = widget.transcript().len();

        widget.submit("   ").expect("blank input is not an error");

        assert_eq!(widget.transcript().len(), before);
        assert_eq!(widget.step(), Step::Name);
    }

    #[test]
    fn transcript_matches_what_the_sink_saw() {
        let mut widget = widget();
        widget.open().expect("open");
        for line in ["Alice", "9876543210", "alice@mail.com", "need a plumber", "offers?"] {
            widget.submit(line).expect("submit");
        }

        assert_eq!(widget.transcript(), widget.sink().as_slice());
        assert_eq!(widget.step(), Step::Complete);
        let last = widget.transcript().last().expect("messages");
        assert!(last.text.starts_with("We have seasonal offers"));
    }

    #[test]
    fn submitting_before_open_starts_the_intake() {
        let mut widget = widget();

        widget.submit("hi").expect("submit");

        assert!(!widget.has_greeted());
        assert_eq!(widget.step(), Step::Name);
        assert_eq!(
            shown(&widget),
            [
                (Sender::User, "hi"),
                (Sender::Bot, "To help you better, can I have your name?"),
            ]
        );
    }

    #[test]
    fn display_failure_is_reported_and_greeting_not_repeated() {
        let mut widget = Widget::new(DialogueController::default(), FlakySink { remaining: 1 });

        let err = widget.open().unwrap_err();

        assert!(err.to_string().contains("panel detached"));
        assert!(widget.has_greeted());
        assert_eq!(widget.transcript().len(), 1);
        assert_eq!(widget.step(), Step::Name);
    }
}
