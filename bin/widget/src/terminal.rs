//! Writes widget messages to a terminal or pipe.

use crate::config::OutputFormat;
use std::io::Write;
use urbanease_conversation::{DisplayError, Message, MessageSink};
use urbanease_core::Result;

/// A [`MessageSink`] over any writer.
#[derive(Debug)]
pub struct TerminalSink<W> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> TerminalSink<W> {
    #[must_use]
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    fn write(&mut self, message: &Message) -> std::io::Result<()> {
        match self.format {
            OutputFormat::Plain => writeln!(self.out, "{}> {}", message.sender, message.text)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, message)?;
                writeln!(self.out)?;
            }
        }
        self.out.flush()
    }
}

impl<W: Write> MessageSink for TerminalSink<W> {
    fn display(&mut self, message: &Message) -> Result<(), DisplayError> {
        self.write(message).map_err(|e| DisplayError::DeliveryFailed {
            message_id: message.id,
            reason: e.to_string(),
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn plain_output_tags_the_sender() {
        let mut buf = Vec::new();
        let mut sink = TerminalSink::new(&mut buf, OutputFormat::Plain);
        sink.display(&Message::user("Alice")).expect("display");
        sink.display(&Message::bot("Nice to meet you, Alice!")).expect("display");
        drop(sink);

        let out = String::from_utf8(buf).expect("utf-8");
        assert_eq!(out, "user> Alice\nbot> Nice to meet you, Alice!\n");
    }

    #[test]
    fn json_output_is_one_message_per_line() {
        let mut buf = Vec::new();
        let mut sink = TerminalSink::new(&mut buf, OutputFormat::Json);
        let message = Message::bot("We have seasonal offers coming soon.");
        sink.display(&message).expect("display");
        drop(sink);

        let out = String::from_utf8(buf).expect("utf-8");
        let line = out.strip_suffix('\n').expect("newline terminated");
        let parsed: Message = serde_json::from_str(line).expect("valid json");
        assert_eq!(parsed, message);
    }

    #[test]
    fn write_failure_becomes_display_error() {
        let mut sink = TerminalSink::new(ClosedPipe, OutputFormat::Plain);
        let err = sink.display(&Message::bot("hi")).unwrap_err();
        assert!(err.to_string().contains("pipe closed"));
    }
}
