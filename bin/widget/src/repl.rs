//! Line-oriented driver for a [`Widget`].
//!
//! Each input line is either a panel command or text sent through the
//! widget's input box:
//!
//! - `/open`, `/close`, `/toggle`: the bubble and close buttons
//! - `/quit`: stop reading
//! - anything else: a submission

use crate::error::WidgetError;
use rootcause::prelude::Report;
use std::io::BufRead;
use tracing::{debug, info};
use urbanease_conversation::{DisplayError, MessageSink, Widget};
use urbanease_core::Result;

/// A parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input<'a> {
    Open,
    Close,
    Toggle,
    Quit,
    Submit(&'a str),
}

impl<'a> Input<'a> {
    #[must_use]
    pub fn parse(line: &'a str) -> Self {
        match line.trim() {
            "/open" => Self::Open,
            "/close" => Self::Close,
            "/toggle" => Self::Toggle,
            "/quit" => Self::Quit,
            _ => Self::Submit(line),
        }
    }
}

/// Feeds `input` to `widget` until end of input or `/quit`.
///
/// The text box only exists inside the open panel, so a submission while
/// the panel is closed opens it first.
///
/// # Errors
///
/// Returns an error if reading fails or the widget cannot display a message.
pub fn run<R: BufRead, S: MessageSink>(
    input: R,
    widget: &mut Widget<S>,
) -> Result<(), WidgetError> {
    let display = |e: Report<DisplayError>| WidgetError::Display {
        details: e.to_string(),
    };

    for line in input.lines() {
        let line = line.map_err(|e| WidgetError::Input {
            details: e.to_string(),
        })?;
        match Input::parse(&line) {
            Input::Open => widget.open().map_err(display)?,
            Input::Close => widget.close(),
            Input::Toggle => widget.toggle().map_err(display)?,
            Input::Quit => {
                debug!("quit requested");
                break;
            }
            Input::Submit(text) => {
                if !widget.is_open() {
                    widget.open().map_err(display)?;
                }
                widget.submit(text).map_err(display)?;
            }
        }
    }

    info!(
        session = %widget.id(),
        step = %widget.step(),
        messages = widget.transcript().len(),
        "session ended"
    );
    Ok(())
}
