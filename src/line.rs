//! Caption line model.
//!
//! A caption arrives as newline-delimited records, each optionally
//! suffixed with `|<scale>` to grow or shrink that line's font. [`Line`]
//! is the parsed-but-unmeasured half of the model; [`MeasuredLine`] is
//! what the corner classifier consumes, with the pixel width and corner
//! radius already resolved by the measurement step.

use crate::types::{FontScale, Px};

/// One caption line before measurement: literal text plus its font-scale
/// override.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// Display text, kept verbatim (callers decide whether to trim).
    pub text: String,
    /// Multiplier on the base font size for this line only.
    pub scale: FontScale,
}

impl Line {
    pub fn new(text: impl Into<String>, scale: FontScale) -> Line {
        Line {
            text: text.into(),
            scale,
        }
    }

    /// Parse one raw record. Splits on the FIRST occurrence of
    /// `delimiter`; everything after it is the scale suffix. This
    /// operation cannot fail: a missing, non-numeric, non-finite, or
    /// non-positive suffix silently falls back to scale 1.0.
    pub fn parse(raw: &str, delimiter: char) -> Line {
        match raw.split_once(delimiter) {
            Some((text, suffix)) => Line::new(text, parse_scale(suffix)),
            None => Line::new(raw, FontScale::DEFAULT),
        }
    }
}

fn parse_scale(suffix: &str) -> FontScale {
    suffix
        .trim()
        .parse::<f64>()
        .ok()
        .and_then(|v| FontScale::try_new(v).ok())
        .unwrap_or_default()
}

/// Split raw caption source into lines, one [`Line`] per newline record.
/// Records are kept in order, empty records included (they measure to a
/// padding-only box downstream).
pub fn split_caption(source: &str, delimiter: char) -> Vec<Line> {
    source.lines().map(|raw| Line::parse(raw, delimiter)).collect()
}

/// A line with its measured bubble width and corner radius attached.
///
/// Built by the measurement step; immutable from then on. The classifier
/// reads `width` and `corner_radius` and never touches `line`.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasuredLine {
    pub line: Line,
    /// Full bubble width in pixels (text plus horizontal padding).
    pub width: Px,
    /// Corner rounding radius in pixels, proportional to this line's
    /// effective font size.
    pub corner_radius: Px,
}

impl MeasuredLine {
    pub fn new(line: Line, width: Px, corner_radius: Px) -> MeasuredLine {
        MeasuredLine {
            line,
            width,
            corner_radius,
        }
    }
}
