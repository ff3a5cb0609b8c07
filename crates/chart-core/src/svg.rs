// File: crates/chart-core/src/svg.rs
// Summary: SVG serialization of a chart scene.

use std::fmt::Write as _;

use crate::scene::{label_left, Primitive, Scene, LABEL_PADDING, LABEL_RADIUS};

/// Approximate advance width of one glyph, as a fraction of the font size.
/// SVG output has no font metrics; this sizes label boxes for the sans-serif stack.
const GLYPH_WIDTH_EM: f32 = 0.6;

/// Estimated label box width for `text` at `size`.
pub fn estimate_label_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * GLYPH_WIDTH_EM + LABEL_PADDING.0 * 2.0
}

/// Serialize `scene` as a standalone SVG document.
pub fn to_svg(scene: &Scene) -> String {
    let mut out = String::with_capacity(1024 + scene.items.len() * 64);
    // fmt::Write into a String cannot fail
    let _ = write_svg(&mut out, scene);
    out
}

fn write_svg(out: &mut String, scene: &Scene) -> std::fmt::Result {
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = scene.width,
        h = scene.height
    )?;
    for item in &scene.items {
        match item {
            Primitive::Rect { x, y, w, h, fill } => {
                writeln!(out, r#"  <rect x="{x:.2}" y="{y:.2}" width="{w:.2}" height="{h:.2}" fill="{}"/>"#, fill.to_css())?;
            }
            Primitive::Polyline { points, stroke, width } => {
                if points.is_empty() {
                    continue;
                }
                writeln!(
                    out,
                    r#"  <path class="price-line" d="{}" fill="transparent" stroke="{}" stroke-width="{width}" stroke-linecap="round" stroke-linejoin="round"/>"#,
                    path_data(points),
                    stroke.to_css()
                )?;
            }
            Primitive::HitArea { x, y, w, h, radius } => {
                writeln!(
                    out,
                    r#"  <rect class="hit-area" x="{x:.2}" y="{y:.2}" width="{w:.2}" height="{h:.2}" rx="{radius}" fill="transparent"/>"#
                )?;
            }
            Primitive::Line { from, to, stroke, width, dash } => {
                write!(
                    out,
                    r#"  <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="{width}" pointer-events="none""#,
                    from.0, from.1, to.0, to.1,
                    stroke.to_css()
                )?;
                if let Some((on, off)) = dash {
                    write!(out, r#" stroke-dasharray="{on},{off}""#)?;
                }
                writeln!(out, "/>")?;
            }
            Primitive::Circle { cx, cy, r, fill, stroke, stroke_width } => {
                writeln!(
                    out,
                    r#"  <circle cx="{cx:.2}" cy="{cy:.2}" r="{r}" fill="{}" stroke="{}" stroke-width="{stroke_width}" pointer-events="none"/>"#,
                    fill.to_css(),
                    stroke.to_css()
                )?;
            }
            Primitive::Label { text, x, y, anchor, size, color, background, .. } => {
                let box_w = estimate_label_width(text, *size);
                let box_h = size + LABEL_PADDING.1 * 2.0;
                let left = label_left(*x, box_w, *anchor);
                writeln!(out, r#"  <g class="tooltip" pointer-events="none">"#)?;
                writeln!(
                    out,
                    r#"    <rect x="{left:.2}" y="{y:.2}" width="{box_w:.2}" height="{box_h:.2}" rx="{LABEL_RADIUS}" fill="{}"/>"#,
                    background.to_css()
                )?;
                writeln!(
                    out,
                    r#"    <text x="{:.2}" y="{:.2}" font-family="sans-serif" font-size="{size}" fill="{}">{}</text>"#,
                    left + LABEL_PADDING.0,
                    y + LABEL_PADDING.1 + size * 0.8,
                    color.to_css(),
                    escape(text)
                )?;
                writeln!(out, "  </g>")?;
            }
        }
    }
    writeln!(out, "</svg>")
}

/// `M x,y L x,y ...` for a polyline.
pub fn path_data(points: &[(f32, f32)]) -> String {
    let mut d = String::with_capacity(points.len() * 16);
    for (i, (x, y)) in points.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        if i > 0 {
            d.push(' ');
        }
        let _ = write!(d, "{cmd}{x:.2},{y:.2}");
    }
    d
}

fn escape(text: &str) -> String {
    let mut s = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => s.push_str("&amp;"),
            '<' => s.push_str("&lt;"),
            '>' => s.push_str("&gt;"),
            '"' => s.push_str("&quot;"),
            '\'' => s.push_str("&#39;"),
            _ => s.push(c),
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_data_moves_then_lines() {
        assert_eq!(path_data(&[(0.0, 1.0), (2.5, 3.0)]), "M0.00,1.00 L2.50,3.00");
        assert_eq!(path_data(&[]), "");
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape("Jan 05, '21 <b>"), "Jan 05, &#39;21 &lt;b&gt;");
    }
}
