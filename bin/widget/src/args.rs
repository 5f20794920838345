//! Command line arguments.

use clap::Parser;
use std::path::PathBuf;

/// Terminal front end for the UrbanEase chat widget.
#[derive(Parser, Debug)]
#[command(
    name = "urbanease-widget",
    about = "Chat with the UrbanEase assistant from a terminal",
    version
)]
pub struct Args {
    /// TOML file overriding the assistant's script and output format
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_file_is_optional() {
        let args = Args::try_parse_from(["urbanease-widget"]).expect("parse");
        assert_eq!(args.config, None);
    }

    #[test]
    fn config_file_accepts_long_and_short_flags() {
        let long = Args::try_parse_from(["urbanease-widget", "--config", "widget.toml"])
            .expect("parse");
        let short = Args::try_parse_from(["urbanease-widget", "-c", "widget.toml"])
            .expect("parse");
        assert_eq!(long.config, Some(PathBuf::from("widget.toml")));
        assert_eq!(short.config, long.config);
    }

    #[test]
    fn stray_arguments_are_rejected() {
        assert!(Args::try_parse_from(["urbanease-widget", "widget.toml"]).is_err());
        assert!(Args::try_parse_from(["urbanease-widget", "--verbose"]).is_err());
    }
}
