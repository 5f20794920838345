use clap::Parser;
use rootcause::prelude::Report;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use urbanease_conversation::{DialogueController, DisplayError, Widget};
use urbanease_core::Result;
use urbanease_widget::args::Args;
use urbanease_widget::config::WidgetConfig;
use urbanease_widget::error::WidgetError;
use urbanease_widget::repl;
use urbanease_widget::terminal::TerminalSink;

fn main() -> ExitCode {
    // Logs go to stderr so stdout stays the message stream.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(report) => {
            tracing::error!(error = %report, "widget stopped");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), WidgetError> {
    let config = WidgetConfig::load(args.config.as_deref()).map_err(|e| WidgetError::Config {
        details: e.to_string(),
    })?;
    tracing::info!(
        config_file = ?args.config,
        output = ?config.output,
        keywords = config.script.keywords.len(),
        "Loaded configuration"
    );

    let controller =
        DialogueController::new(config.script).map_err(|e| WidgetError::InvalidScript {
            details: e.to_string(),
        })?;
    let sink = TerminalSink::new(std::io::stdout().lock(), config.output);
    let mut widget = Widget::new(controller, sink);

    let display = |e: Report<DisplayError>| WidgetError::Display {
        details: e.to_string(),
    };
    widget.open().map_err(display)?;
    repl::run(std::io::stdin().lock(), &mut widget)
}
