//! Bubble outline construction.
//!
//! Each caption line is drawn as one closed path: an axis-aligned box
//! with an independently rounded or square corner at each of its four
//! corners. Welded edges stay square; exposed corners carry an arc.

use glam::DVec2;

use super::svg::fmt_num;

/// Which corners of a bubble box are rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Corners {
    pub top_left: bool,
    pub top_right: bool,
    pub bottom_left: bool,
    pub bottom_right: bool,
}

impl Corners {
    pub const ALL: Corners = Corners {
        top_left: true,
        top_right: true,
        bottom_left: true,
        bottom_right: true,
    };

    pub const NONE: Corners = Corners {
        top_left: false,
        top_right: false,
        bottom_left: false,
        bottom_right: false,
    };
}

/// Build the SVG path data for a bubble box in pixel space (y-down).
///
/// `min` is the top-left corner, `max` the bottom-right. The radius is
/// clamped to half the smaller box dimension so opposing arcs never
/// cross; corners without a flag get a square corner. The orbit is
/// clockwise starting on the top edge.
pub fn rounded_box_path(min: DVec2, max: DVec2, radius: f64, corners: Corners) -> String {
    let size = max - min;
    let r = radius.min(size.x / 2.0).min(size.y / 2.0).max(0.0);
    let pick = |on: bool| if on { r } else { 0.0 };
    let r_tl = pick(corners.top_left);
    let r_tr = pick(corners.top_right);
    let r_bl = pick(corners.bottom_left);
    let r_br = pick(corners.bottom_right);

    let mut d = String::new();
    let mut cmd = |c: char, args: &[f64]| {
        d.push(c);
        for (i, a) in args.iter().enumerate() {
            if i > 0 {
                d.push(',');
            }
            d.push_str(&fmt_num(*a));
        }
    };

    // Clockwise in y-down pixel space, so every arc sweeps positively.
    cmd('M', &[min.x + r_tl, min.y]);
    cmd('L', &[max.x - r_tr, min.y]);
    if r_tr > 0.0 {
        cmd('A', &[r_tr, r_tr, 0.0, 0.0, 1.0, max.x, min.y + r_tr]);
    }
    cmd('L', &[max.x, max.y - r_br]);
    if r_br > 0.0 {
        cmd('A', &[r_br, r_br, 0.0, 0.0, 1.0, max.x - r_br, max.y]);
    }
    cmd('L', &[min.x + r_bl, max.y]);
    if r_bl > 0.0 {
        cmd('A', &[r_bl, r_bl, 0.0, 0.0, 1.0, min.x, max.y - r_bl]);
    }
    cmd('L', &[min.x, min.y + r_tl]);
    if r_tl > 0.0 {
        cmd('A', &[r_tl, r_tl, 0.0, 0.0, 1.0, min.x + r_tl, min.y]);
    }
    d.push('Z');
    d
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    fn arc_count(d: &str) -> usize {
        d.matches('A').count()
    }

    #[test]
    fn all_corners_rounded_has_four_arcs() {
        let d = rounded_box_path(dvec2(0.0, 0.0), dvec2(100.0, 40.0), 8.0, Corners::ALL);
        assert_eq!(arc_count(&d), 4);
        assert!(d.starts_with("M8,0"));
        assert!(d.ends_with('Z'));
    }

    #[test]
    fn no_corners_rounded_is_a_rectangle() {
        let d = rounded_box_path(dvec2(0.0, 0.0), dvec2(100.0, 40.0), 8.0, Corners::NONE);
        assert_eq!(arc_count(&d), 0);
        assert_eq!(d, "M0,0L100,0L100,40L0,40L0,0Z");
    }

    #[test]
    fn single_corner_rounded() {
        let corners = Corners {
            top_right: true,
            ..Corners::NONE
        };
        let d = rounded_box_path(dvec2(0.0, 0.0), dvec2(100.0, 40.0), 10.0, corners);
        assert_eq!(arc_count(&d), 1);
        // Square top-left start, arc landing on the right edge.
        assert!(d.starts_with("M0,0L90,0A10,10,0,0,1,100,10"));
    }

    #[test]
    fn radius_clamped_to_half_smaller_dimension() {
        let d = rounded_box_path(dvec2(0.0, 0.0), dvec2(100.0, 10.0), 40.0, Corners::ALL);
        // Height 10 clamps the radius to 5.
        assert!(d.starts_with("M5,0"));
        assert!(d.contains("A5,5"));
    }

    #[test]
    fn zero_size_box_has_no_nan() {
        let d = rounded_box_path(dvec2(4.0, 4.0), dvec2(4.0, 4.0), 8.0, Corners::ALL);
        assert!(!d.contains("NaN"));
    }

    #[test]
    fn negative_radius_treated_as_square() {
        let d = rounded_box_path(dvec2(0.0, 0.0), dvec2(10.0, 10.0), -1.0, Corners::ALL);
        assert_eq!(arc_count(&d), 0);
    }
}
