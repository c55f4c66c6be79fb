//! Text measurement collaborator.
//!
//! The crate never shapes text. [`TextMeasurer`] is the seam where an
//! embedder plugs in a real metrics service; [`CharTableMeasurer`] is the
//! built-in estimator, good enough for sans-serif captions and for tests.

use crate::line::{Line, MeasuredLine};
use crate::render::defaults;
use crate::types::Px;

/// Width oracle for caption text at a given font size.
pub trait TextMeasurer {
    /// Width in pixels of `text` set at `font_size`.
    fn text_width(&self, text: &str, font_size: Px) -> Px;
}

/// Proportional width estimator.
///
/// Per-character advances are stored in hundredths of the nominal
/// character width (`defaults::CHAR_WID_EM` of the font size) for the
/// ASCII printable range; anything outside it is charged one full
/// nominal width.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharTableMeasurer;

/// Advance of each printable ASCII character, hundredths of the nominal
/// character width, indexed from 0x20.
#[rustfmt::skip]
const ADVANCE: [u8; 95] = [
    45,  55,  62, 115,  90, 132, 125,  40,
    55,  55,  71, 115,  45,  48,  45,  50,
    91,  91,  91,  91,  91,  91,  91,  91,
    91,  91,  50,  50, 120, 120, 120,  78,
   142, 102, 105, 110, 115, 105,  98, 105,
   125,  58,  58, 107,  95, 145, 125, 115,
    95, 115, 107,  95,  97, 118, 102, 150,
   100,  93, 100,  58,  50,  58, 119,  72,
    72,  86,  92,  80,  92,  85,  52,  92,
    92,  47,  47,  88,  48, 135,  92,  86,
    92,  92,  69,  75,  58,  92,  80, 121,
    81,  80,  76,  91,  49,  91, 118,
];

/// Sum the advance units for a string (100 units = one nominal width).
fn advance_units(text: &str) -> u32 {
    let mut units: u32 = 0;
    for c in text.chars() {
        if (' '..='~').contains(&c) {
            units += ADVANCE[c as usize - 0x20] as u32;
        } else {
            units += 100;
        }
    }
    units
}

impl TextMeasurer for CharTableMeasurer {
    fn text_width(&self, text: &str, font_size: Px) -> Px {
        let units = advance_units(text);
        Px(units as f64 * 0.01 * defaults::CHAR_WID_EM * font_size.raw())
    }
}

/// Resolve a parsed line sequence into measured lines.
///
/// Per line: effective font size = base × scale; bubble width = text
/// width plus horizontal padding on both sides; corner radius =
/// [`defaults::CORNER_RADIUS_EM`] of the effective font size. This is the
/// causal boundary of the pipeline: classification reads these values as
/// already resolved.
pub fn measure_lines(
    lines: &[Line],
    measurer: &impl TextMeasurer,
    base_font_size: Px,
) -> Vec<MeasuredLine> {
    lines
        .iter()
        .map(|line| {
            let font = base_font_size * line.scale;
            let text_width = measurer.text_width(&line.text, font);
            let width = text_width + font * (2.0 * defaults::PAD_X_EM);
            let corner_radius = font * defaults::CORNER_RADIUS_EM;
            crate::log::debug!(
                text = %line.text,
                width = width.raw(),
                radius = corner_radius.raw(),
                "measured line"
            );
            MeasuredLine::new(line.clone(), width, corner_radius)
        })
        .collect()
}
