//! Terminal front end for the UrbanEase chat widget.
//!
//! Stdin plays the widget's text box and panel buttons; stdout plays the
//! message list. Useful for trying scripts before they ship.

pub mod args;
pub mod config;
pub mod error;
pub mod repl;
pub mod terminal;
