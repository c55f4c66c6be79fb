//! Corner classification for adjacent caption lines.
//!
//! For every pair of vertically adjacent lines, decide whether the lower
//! line keeps its top rounding, the upper line keeps its bottom rounding,
//! or the two are welded to one shared width with flattened facing edges.
//! The decision is tolerance-based: two widths within each other's
//! corner-radius slack are treated as equal, and centered text doubles
//! that slack because it shrinks and grows on both sides at once.

use std::fmt;
use std::str::FromStr;

use crate::errors::ParseAlignmentError;
use crate::line::MeasuredLine;
use crate::types::Px;

/// Horizontal alignment of the caption block. Global: one value applies
/// to every line in a classification pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
}

impl Alignment {
    /// Multiplier on the corner-radius tolerance. Centered lines move on
    /// both edges when their width changes, so the slack doubles.
    fn tolerance_factor(self) -> f64 {
        if self == Alignment::Center { 2.0 } else { 1.0 }
    }
}

impl FromStr for Alignment {
    type Err = ParseAlignmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Alignment::Left),
            "center" => Ok(Alignment::Center),
            "right" => Ok(Alignment::Right),
            _ => Err(ParseAlignmentError {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alignment::Left => write!(f, "left"),
            Alignment::Center => write!(f, "center"),
            Alignment::Right => write!(f, "right"),
        }
    }
}

/// Corner decoration for one line, indexed like the input sequence.
///
/// All flags start false; the classifier only ever sets them. A line's
/// outermost corners (top of the first line, bottom of the last) are the
/// renderer's responsibility, not the classifier's.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Decoration {
    pub round_top_left: bool,
    pub round_top_right: bool,
    pub round_bottom_left: bool,
    pub round_bottom_right: bool,
    /// Set when this line is welded to a neighbor: both members of the
    /// pair render at this width instead of their natural width.
    pub forced_width: Option<Px>,
}

/// Classify every adjacent pair of measured lines under one alignment.
///
/// Pure and total: any non-negative widths and radii are valid, including
/// zero. Pairs are processed strictly top to bottom, so a weld at pair
/// `(i, i+1)` can overwrite the forced width that pair `(i-1, i)` gave to
/// line `i` (last write wins; see the module tests pinning this).
pub fn classify(lines: &[MeasuredLine], alignment: Alignment) -> Vec<Decoration> {
    let mut decorations = vec![Decoration::default(); lines.len()];
    let factor = alignment.tolerance_factor();

    for i in 1..lines.len() {
        let prev = &lines[i - 1];
        let curr = &lines[i];
        let prev_tol = prev.corner_radius.raw() * factor;
        let curr_tol = curr.corner_radius.raw() * factor;
        let prev_w = prev.width.raw();
        let curr_w = curr.width.raw();

        if prev_w - prev_tol > curr_w + curr_tol {
            // Current line is the narrower one: it keeps its top rounding,
            // except on an edge held flush by the alignment.
            crate::log::debug!(pair = i, prev_w, curr_w, "narrower: round current top");
            let d = &mut decorations[i];
            d.round_top_left = alignment != Alignment::Left;
            d.round_top_right = alignment != Alignment::Right;
        } else if prev_w + prev_tol < curr_w - curr_tol {
            // Current line is the wider one: the previous line keeps its
            // bottom rounding, same flush-edge rule.
            crate::log::debug!(pair = i, prev_w, curr_w, "wider: round previous bottom");
            let d = &mut decorations[i - 1];
            d.round_bottom_left = alignment != Alignment::Left;
            d.round_bottom_right = alignment != Alignment::Right;
        } else {
            // Widths agree within tolerance: weld the pair to the wider
            // NATURAL width. Never reuse a previously forced value; a
            // later pair may overwrite `curr`'s forced width.
            let forced = Px(prev_w.max(curr_w));
            crate::log::debug!(pair = i, forced = forced.raw(), "welded");
            decorations[i - 1].forced_width = Some(forced);
            decorations[i].forced_width = Some(forced);
        }
    }

    decorations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::Line;
    use crate::types::FontScale;

    fn measured(width: f64, radius: f64) -> MeasuredLine {
        MeasuredLine::new(
            Line::new("x", FontScale::DEFAULT),
            Px(width),
            Px(radius),
        )
    }

    fn flags(d: &Decoration) -> (bool, bool, bool, bool) {
        (
            d.round_top_left,
            d.round_top_right,
            d.round_bottom_left,
            d.round_bottom_right,
        )
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert!(classify(&[], Alignment::Left).is_empty());
    }

    #[test]
    fn single_line_gets_no_decoration() {
        let lines = [measured(120.0, 8.0)];
        let decs = classify(&lines, Alignment::Center);
        assert_eq!(decs.len(), 1);
        assert_eq!(decs[0], Decoration::default());
    }

    #[test]
    fn narrower_current_rounds_top_left_alignment() {
        // Delta 60 is far past the combined tolerance of 8.
        let lines = [measured(160.0, 4.0), measured(100.0, 4.0)];
        let decs = classify(&lines, Alignment::Left);
        // Left alignment keeps the left edge flush, so only top-right rounds.
        assert_eq!(flags(&decs[1]), (false, true, false, false));
        assert_eq!(decs[0], Decoration::default());
    }

    #[test]
    fn narrower_current_rounds_top_right_alignment() {
        let lines = [measured(160.0, 4.0), measured(100.0, 4.0)];
        let decs = classify(&lines, Alignment::Right);
        assert_eq!(flags(&decs[1]), (true, false, false, false));
    }

    #[test]
    fn narrower_current_rounds_both_center_alignment() {
        let lines = [measured(160.0, 4.0), measured(100.0, 4.0)];
        let decs = classify(&lines, Alignment::Center);
        assert_eq!(flags(&decs[1]), (true, true, false, false));
    }

    #[test]
    fn wider_current_rounds_previous_bottom() {
        let lines = [measured(100.0, 4.0), measured(160.0, 4.0)];
        let decs = classify(&lines, Alignment::Left);
        assert_eq!(flags(&decs[0]), (false, false, false, true));
        assert_eq!(decs[1], Decoration::default());

        let decs = classify(&lines, Alignment::Center);
        assert_eq!(flags(&decs[0]), (false, false, true, true));
    }

    #[test]
    fn equal_widths_zero_tolerance_weld() {
        // The inequalities are strict: exact equality with zero radii
        // falls into the weld branch, not the rounding branches.
        let lines = [measured(100.0, 0.0), measured(100.0, 0.0)];
        let decs = classify(&lines, Alignment::Left);
        assert_eq!(decs[0].forced_width, Some(Px(100.0)));
        assert_eq!(decs[1].forced_width, Some(Px(100.0)));
        assert_eq!(flags(&decs[0]), (false, false, false, false));
        assert_eq!(flags(&decs[1]), (false, false, false, false));
    }

    #[test]
    fn weld_uses_max_of_natural_widths() {
        let lines = [measured(100.0, 10.0), measured(110.0, 10.0)];
        let decs = classify(&lines, Alignment::Left);
        assert_eq!(decs[0].forced_width, Some(Px(110.0)));
        assert_eq!(decs[1].forced_width, Some(Px(110.0)));
    }

    #[test]
    fn spec_delta_within_combined_tolerance_welds() {
        // 100 vs 94 with radius 4: 100-4 = 96 is not > 94+4 = 98, and
        // 100+4 = 104 is not < 94-4 = 90, so the pair welds.
        let lines = [measured(100.0, 4.0), measured(94.0, 4.0)];
        let decs = classify(&lines, Alignment::Left);
        assert_eq!(decs[0].forced_width, Some(Px(100.0)));
        assert_eq!(decs[1].forced_width, Some(Px(100.0)));
    }

    #[test]
    fn center_alignment_doubles_tolerance() {
        // 103 vs 94 with radius 4. Left: 103-4 = 99 > 94+4 = 98, Case A.
        // Center: tolerances double to 8, 95 > 102 fails, so it welds.
        let lines = [measured(103.0, 4.0), measured(94.0, 4.0)];

        let left = classify(&lines, Alignment::Left);
        assert_eq!(flags(&left[1]), (false, true, false, false));
        assert_eq!(left[0].forced_width, None);

        let center = classify(&lines, Alignment::Center);
        assert_eq!(center[0].forced_width, Some(Px(103.0)));
        assert_eq!(center[1].forced_width, Some(Px(103.0)));
        assert_eq!(flags(&center[1]), (false, false, false, false));
    }

    #[test]
    fn three_equal_lines_middle_welded_both_sides_no_flags() {
        let lines = [
            measured(100.0, 0.0),
            measured(100.0, 0.0),
            measured(100.0, 0.0),
        ];
        let decs = classify(&lines, Alignment::Center);
        for d in &decs {
            assert_eq!(d.forced_width, Some(Px(100.0)));
            assert_eq!(flags(d), (false, false, false, false));
        }
    }

    #[test]
    fn weld_chain_overwrite_keeps_last_pairwise_max() {
        // Widths 104, 100, 96 with radius 10: every pair is within
        // tolerance. Pair (0,1) forces 104 onto both; pair (1,2) then
        // overwrites line 1 with max(100, 96) = 100. The middle line ends
        // at the last pairwise max, not the chain-global max.
        let lines = [
            measured(104.0, 10.0),
            measured(100.0, 10.0),
            measured(96.0, 10.0),
        ];
        let decs = classify(&lines, Alignment::Left);
        assert_eq!(decs[0].forced_width, Some(Px(104.0)));
        assert_eq!(decs[1].forced_width, Some(Px(100.0)));
        assert_eq!(decs[2].forced_width, Some(Px(100.0)));
    }

    #[test]
    fn line_can_be_welded_below_and_rounded_above() {
        // Line 1 is much narrower than line 0 (Case A above it) and equal
        // to line 2 (weld below it): both effects land on the same line.
        let lines = [
            measured(200.0, 0.0),
            measured(100.0, 0.0),
            measured(100.0, 0.0),
        ];
        let decs = classify(&lines, Alignment::Left);
        assert_eq!(flags(&decs[1]), (false, true, false, false));
        assert_eq!(decs[1].forced_width, Some(Px(100.0)));
        assert_eq!(decs[2].forced_width, Some(Px(100.0)));
    }

    #[test]
    fn zero_width_line_is_narrower() {
        let lines = [measured(50.0, 0.0), measured(0.0, 0.0)];
        let decs = classify(&lines, Alignment::Center);
        assert_eq!(flags(&decs[1]), (true, true, false, false));
    }

    #[test]
    fn two_zero_width_lines_weld_at_zero() {
        let lines = [measured(0.0, 0.0), measured(0.0, 0.0)];
        let decs = classify(&lines, Alignment::Left);
        assert_eq!(decs[0].forced_width, Some(Px(0.0)));
        assert_eq!(decs[1].forced_width, Some(Px(0.0)));
    }

    #[test]
    fn classification_is_idempotent() {
        let lines = [
            measured(160.0, 4.0),
            measured(100.0, 4.0),
            measured(104.0, 8.0),
            measured(30.0, 2.0),
        ];
        let first = classify(&lines, Alignment::Center);
        let second = classify(&lines, Alignment::Center);
        assert_eq!(first, second);
    }

    #[test]
    fn alignment_from_str() {
        assert_eq!("left".parse::<Alignment>().unwrap(), Alignment::Left);
        assert_eq!("center".parse::<Alignment>().unwrap(), Alignment::Center);
        assert_eq!("right".parse::<Alignment>().unwrap(), Alignment::Right);
        assert!("middle".parse::<Alignment>().is_err());
        assert!("LEFT".parse::<Alignment>().is_err());
    }
}
