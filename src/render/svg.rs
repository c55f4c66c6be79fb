//! SVG generation

use glam::DVec2;

use super::geometry::rounded_box_path;
use super::{Bubble, CaptionOptions};
use crate::errors::RenderError;

/// Serialize laid-out bubbles to an SVG document.
///
/// Guards against non-finite geometry (a hostile or buggy measurer can
/// inject NaN widths) and never emits a partial document.
pub(crate) fn generate_svg(
    bubbles: &[Bubble],
    view: DVec2,
    options: &CaptionOptions,
) -> Result<String, RenderError> {
    if !view.is_finite() {
        return Err(RenderError::InvalidBounds);
    }
    for bubble in bubbles {
        if !bubble.min.is_finite() || !bubble.max.is_finite() || !bubble.radius.is_finite() {
            return Err(RenderError::InvalidBounds);
        }
    }

    let mut out = String::new();
    out.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}">"#,
        fmt_num(view.x),
        fmt_num(view.y)
    ));
    out.push('\n');

    if !options.transparent {
        out.push_str(&format!(
            r#"<rect width="{}" height="{}" fill="{}"/>"#,
            fmt_num(view.x),
            fmt_num(view.y),
            super::defaults::PAGE_COLOR
        ));
        out.push('\n');
    }

    let fill = options.background.to_string();
    for bubble in bubbles {
        let d = rounded_box_path(bubble.min, bubble.max, bubble.radius, bubble.corners);
        out.push_str(&format!(r#"<path d="{}" fill="{}"/>"#, d, fill));
        out.push('\n');
    }

    let text_fill = options.foreground.to_string();
    for bubble in bubbles {
        if bubble.text.is_empty() {
            continue;
        }
        out.push_str(&format!(
            r#"<text x="{}" y="{}" text-anchor="{}" dominant-baseline="central" font-family="sans-serif" font-size="{}" fill="{}">{}</text>"#,
            fmt_num(bubble.text_x),
            fmt_num(bubble.min.y + (bubble.max.y - bubble.min.y) / 2.0),
            bubble.anchor,
            fmt_num(bubble.font_size),
            text_fill,
            escape_text(&bubble.text)
        ));
        out.push('\n');
    }

    out.push_str("</svg>\n");
    Ok(out)
}

/// Escape text content for SVG, keeping whitespace runs visible by
/// substituting no-break spaces.
pub(crate) fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            ' ' => out.push('\u{00A0}'),
            _ => out.push(c),
        }
    }
    out
}

/// Format a number with 6 significant figures, trailing zeros trimmed.
pub(crate) fn fmt_num(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    // Round to 6 significant figures
    let abs_val = value.abs();
    let magnitude = abs_val.log10().floor() as i32;
    let scale = 10_f64.powi(6 - 1 - magnitude);
    let rounded = (value * scale).round() / scale;

    // Format with enough decimal places, then trim
    let decimals = (6 - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", rounded, prec = decimals);
    let s = s.trim_end_matches('0');
    let s = s.trim_end_matches('.');
    s.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_num_integers_stay_plain() {
        assert_eq!(fmt_num(0.0), "0");
        assert_eq!(fmt_num(100.0), "100");
        assert_eq!(fmt_num(-42.0), "-42");
    }

    #[test]
    fn fmt_num_trims_trailing_zeros() {
        assert_eq!(fmt_num(1.5), "1.5");
        assert_eq!(fmt_num(0.25), "0.25");
        assert_eq!(fmt_num(12.3400), "12.34");
    }

    #[test]
    fn fmt_num_rounds_to_six_significant_figures() {
        assert_eq!(fmt_num(123.456789), "123.457");
        assert_eq!(fmt_num(0.123456789), "0.123457");
    }

    #[test]
    fn escape_text_escapes_markup() {
        assert_eq!(escape_text("a<b & c>d"), "a&lt;b\u{00A0}&amp;\u{00A0}c&gt;d");
    }

    #[test]
    fn escape_text_preserves_space_runs() {
        assert_eq!(escape_text("a  b"), "a\u{00A0}\u{00A0}b");
    }
}
