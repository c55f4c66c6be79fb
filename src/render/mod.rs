//! Caption layout and SVG output.
//!
//! This module is organized into submodules:
//! - `defaults`: metric constants (em-relative sizes, margins)
//! - `geometry`: per-corner rounded path construction
//! - `svg`: SVG document assembly
//!
//! Layout stacks one bubble box per line, top to bottom with no gap, and
//! merges the classifier's decoration flags with the outer-boundary
//! defaults (first line rounds its top, last line rounds its bottom).

pub mod defaults;
pub mod geometry;
pub mod svg;

// Re-export commonly used items
pub use geometry::Corners;

use glam::{DVec2, dvec2};

use crate::classify::{Alignment, Decoration};
use crate::errors::RenderError;
use crate::line::MeasuredLine;
use crate::types::{Color, Px};

/// Immutable render configuration for one caption pass.
///
/// Interactive callers rebuild the caption on every input or style
/// change; one of these is passed to every render.
#[derive(Debug, Clone)]
pub struct CaptionOptions {
    pub alignment: Alignment,
    /// Bubble fill color.
    pub background: Color,
    /// Text color.
    pub foreground: Color,
    /// When false, an opaque page rect is painted behind the bubbles.
    pub transparent: bool,
    /// Base font size; a line's effective size is base × its scale.
    pub font_size: Px,
    /// Scale-suffix delimiter for raw input records.
    pub delimiter: char,
}

impl Default for CaptionOptions {
    fn default() -> Self {
        Self {
            alignment: Alignment::Left,
            background: Color::WHITE,
            foreground: Color::BLACK,
            transparent: false,
            font_size: defaults::BASE_FONT_SIZE,
            delimiter: '|',
        }
    }
}

/// One laid-out bubble box, ready for serialization.
pub(crate) struct Bubble {
    pub min: DVec2,
    pub max: DVec2,
    pub radius: f64,
    pub corners: Corners,
    pub font_size: f64,
    pub text: String,
    /// SVG text-anchor value for this line's text.
    pub anchor: &'static str,
    /// X coordinate the text anchors at.
    pub text_x: f64,
}

/// Apply decorations to measured lines and emit the SVG document.
///
/// `decorations` must be the classifier output for exactly these lines.
/// An empty caption produces a comment document rather than an error.
pub fn render_caption(
    lines: &[MeasuredLine],
    decorations: &[Decoration],
    options: &CaptionOptions,
) -> Result<String, RenderError> {
    if lines.len() != decorations.len() {
        return Err(RenderError::DecorationMismatch {
            expected: lines.len(),
            got: decorations.len(),
        });
    }
    if lines.is_empty() {
        return Ok("<!-- empty caption -->\n".to_string());
    }

    let margin = defaults::MARGIN.raw();
    let widths: Vec<f64> = lines
        .iter()
        .zip(decorations)
        .map(|(l, d)| d.forced_width.unwrap_or(l.width).raw())
        .collect();
    let block_width = widths.iter().fold(0.0_f64, |acc, w| acc.max(*w));

    let last = lines.len() - 1;
    let mut bubbles = Vec::with_capacity(lines.len());
    let mut y = margin;
    for (i, (line, dec)) in lines.iter().zip(decorations).enumerate() {
        let font = (options.font_size * line.line.scale).raw();
        let height = font * defaults::LINE_HEIGHT_EM;
        let width = widths[i];
        let x = match options.alignment {
            Alignment::Left => margin,
            Alignment::Center => margin + (block_width - width) / 2.0,
            Alignment::Right => margin + block_width - width,
        };

        let mut corners = Corners {
            top_left: dec.round_top_left,
            top_right: dec.round_top_right,
            bottom_left: dec.round_bottom_left,
            bottom_right: dec.round_bottom_right,
        };
        // The block's outermost corners always round; the classifier only
        // decides the interior boundaries.
        if i == 0 {
            corners.top_left = true;
            corners.top_right = true;
        }
        if i == last {
            corners.bottom_left = true;
            corners.bottom_right = true;
        }

        // Text sits inside the box's own padding; under a forced width
        // the box stretches but the text keeps following the alignment.
        let pad = font * defaults::PAD_X_EM;
        let (anchor, text_x) = match options.alignment {
            Alignment::Left => ("start", x + pad),
            Alignment::Center => ("middle", x + width / 2.0),
            Alignment::Right => ("end", x + width - pad),
        };

        bubbles.push(Bubble {
            min: dvec2(x, y),
            max: dvec2(x + width, y + height),
            radius: line.corner_radius.raw(),
            corners,
            font_size: font,
            text: line.line.text.clone(),
            anchor,
            text_x,
        });
        y += height;
    }

    let view = dvec2(block_width + 2.0 * margin, y + margin);
    svg::generate_svg(&bubbles, view, options)
}
