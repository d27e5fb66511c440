//! Rendering and printing of errnote errors
//!
//! The renderer writes an error's summary line, then its notes in insertion
//! order, then the members of a group, then the errors chained to it.
//! Output can be coloured with the styles in the stylesheet.

mod config;
mod printer;
mod render;
mod stylesheet;

use anstream::eprintln;
use errnote_error::ErrorObject;

pub use config::{ColorChoice, RenderConfig};
pub use printer::Printer;
pub use render::{render, render_to_string};

/// Prints an error to stderr.
///
/// Colours are stripped automatically when stderr is not a terminal.
pub fn print(error: &dyn ErrorObject, config: &RenderConfig) {
    let error_string = render::format_error(error, config);
    eprintln!("{error_string}");
}
