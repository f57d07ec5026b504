//! SVG output for placed markers

use glam::DVec2;

use crate::marker::Marker;

/// Render a marker as a single SVG `<path>` element.
///
/// Returns `None` while the marker has nothing to show: no translation yet
/// (unpositioned or unmeasured) or an empty outline. The outline is inset by
/// half the stroke width so the stroke stays inside the measured size.
pub fn render_svg(marker: &Marker) -> Option<String> {
    let translation = marker.translation()?;
    let geometry = marker.drawable_geometry();
    if geometry.is_empty() {
        return None;
    }

    let style = marker.style();
    let inset = style.stroke_width.max(0.0) / 2.0;
    let d = geometry.translated(DVec2::splat(inset)).to_path_data();

    let mut out = format!(
        r#"<path d="{}" transform="translate({},{})" fill="{}""#,
        d,
        fmt_num(translation.x),
        fmt_num(translation.y),
        escape_attr(&style.fill.to_string()),
    );
    if style.stroke_width > 0.0 {
        out.push_str(&format!(
            r#" stroke="{}" stroke-width="{}""#,
            escape_attr(&style.stroke.to_string()),
            fmt_num(style.stroke_width),
        ));
    }
    out.push_str("/>");
    Some(out)
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Format a number to 6 significant figures, trailing zeros trimmed.
pub(crate) fn fmt_num(value: f64) -> String {
    const SIG_FIGS: i32 = 6;

    if value == 0.0 || !value.is_finite() {
        return "0".to_string();
    }

    let magnitude = value.abs().log10().floor() as i32;
    let scale = 10_f64.powi(SIG_FIGS - 1 - magnitude);
    // Subnormal-range values overflow the scale; they print as zero.
    if !scale.is_finite() {
        return "0".to_string();
    }
    let rounded = (value * scale).round() / scale;

    let decimals = (SIG_FIGS - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", rounded, prec = decimals);
    if !s.contains('.') {
        return s;
    }
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_num_trims() {
        assert_eq!(fmt_num(95.0), "95");
        assert_eq!(fmt_num(-5.0), "-5");
        assert_eq!(fmt_num(0.5), "0.5");
        assert_eq!(fmt_num(-0.0), "0");
        assert_eq!(fmt_num(100.0), "100");
        assert_eq!(fmt_num(1234567.0), "1234570");
        assert_eq!(fmt_num(8.660254037844386), "8.66025");
    }

    #[test]
    fn fmt_num_tiny_values_are_zero() {
        assert_eq!(fmt_num(1e-305), "0");
        assert_eq!(fmt_num(-1e-310), "0");
    }

    #[test]
    fn escape_attr_quotes() {
        assert_eq!(escape_attr(r#"a"b&c"#), "a&quot;b&amp;c");
    }
}
