//! Default caption metrics (em-relative where the value tracks font size)

use crate::types::Px;

/// Base font size when the caller does not override it.
pub const BASE_FONT_SIZE: Px = Px(32.0);
/// Bubble box height per line, in ems of the line's effective font size.
pub const LINE_HEIGHT_EM: f64 = 1.4;
/// Horizontal padding inside a bubble, in ems, applied on each side.
pub const PAD_X_EM: f64 = 0.55;
/// Corner radius in ems of the line's effective font size. Also the
/// classifier's width tolerance, via the measured radius.
pub const CORNER_RADIUS_EM: f64 = 0.35;
/// Nominal advance of one average glyph, in ems.
pub const CHAR_WID_EM: f64 = 0.57;
/// Whitespace around the caption block on all four sides.
pub const MARGIN: Px = Px(16.0);
/// Page color painted behind the bubbles when the caption is not
/// transparent.
pub const PAGE_COLOR: &str = "white";
