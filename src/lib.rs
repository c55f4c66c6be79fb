//! bubblecap renders multi-line captions as connected chat-bubble shapes.
//!
//! Each caption line becomes a rounded rectangle sized to its own text;
//! adjacent lines connect or separate depending on their relative widths,
//! so the block reads as one continuous rounded outline instead of a
//! stack of independent pills. The interesting part is the corner
//! classifier ([`classify`]): a pure, tolerance-based decision procedure
//! over adjacent line widths. Everything around it (parsing the
//! `text|scale` records, estimating text widths, laying out and emitting
//! SVG) exists to feed it inputs and apply its output.
//!
//! ```
//! use bubblecap::{caption, CaptionOptions};
//!
//! let svg = caption("THE FOX SAW IT\nand said|1.5\nwow", &CaptionOptions::default())?;
//! assert!(svg.starts_with("<svg"));
//! # Ok::<(), miette::Report>(())
//! ```

pub mod classify;
pub mod errors;
pub mod line;
pub mod log;
pub mod measure;
pub mod render;
pub mod types;

pub use classify::{Alignment, Decoration, classify};
pub use line::{Line, MeasuredLine, split_caption};
pub use measure::{CharTableMeasurer, TextMeasurer, measure_lines};
pub use render::{CaptionOptions, Corners, render_caption};
pub use types::{Color, FontScale, Px};

/// Render caption source to SVG with the built-in width estimator.
///
/// Returns the SVG string on success, or an error with diagnostics.
pub fn caption(source: &str, options: &CaptionOptions) -> Result<String, miette::Report> {
    caption_with_measurer(source, options, &CharTableMeasurer)
}

/// Render caption source to SVG using a caller-supplied text measurer.
///
/// The pipeline is split → measure → classify → render; each stage is
/// public, so embedders that already have measured widths can start at
/// [`classify`] instead.
pub fn caption_with_measurer(
    source: &str,
    options: &CaptionOptions,
    measurer: &impl TextMeasurer,
) -> Result<String, miette::Report> {
    let lines = split_caption(source, options.delimiter);
    let measured = measure_lines(&lines, measurer, options.font_size);
    let decorations = classify(&measured, options.alignment);
    render_caption(&measured, &decorations, options).map_err(Into::into)
}
