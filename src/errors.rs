//! Error types with miette diagnostics.
//!
//! The line parser and the corner classifier are total; only the options
//! surface and the SVG stage can fail.

use miette::Diagnostic;
use thiserror::Error;

/// Unknown color name or malformed hex literal in the caption options.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized color: {value}")]
#[diagnostic(
    code(bubblecap::options::unrecognized_color),
    help("use a CSS color name or a #rgb / #rrggbb hex literal")
)]
pub struct ColorParseError {
    pub value: String,
}

/// Alignment string that is not one of the three accepted values.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
#[error("unknown alignment: {value}")]
#[diagnostic(
    code(bubblecap::options::unknown_alignment),
    help("expected one of: left, center, right")
)]
pub struct ParseAlignmentError {
    pub value: String,
}

/// Errors that occur while emitting SVG
#[derive(Error, Diagnostic, Debug)]
pub enum RenderError {
    #[error("infinite or NaN in caption geometry")]
    #[diagnostic(
        code(bubblecap::render::invalid_bounds),
        help("a text measurer returned a non-finite width")
    )]
    InvalidBounds,

    #[error("decoration count {got} does not match line count {expected}")]
    #[diagnostic(code(bubblecap::render::decoration_mismatch))]
    DecorationMismatch { expected: usize, got: usize },
}
