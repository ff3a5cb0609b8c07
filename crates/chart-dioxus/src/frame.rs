// File: crates/chart-dioxus/src/frame.rs
// Summary: Converts a chart Scene into SVG node attributes and HTML label boxes for the component.
// Notes:
// - Kept free of Dioxus types so it builds and tests without the `desktop` feature.

use price_chart_core::scene::{Anchor, LabelKind, Primitive, Scene, LABEL_PADDING, LABEL_RADIUS};
use price_chart_core::svg::path_data;
use price_chart_core::Viewport;

/// One SVG child element with attribute values already formatted.
#[derive(Clone, Debug, PartialEq)]
pub enum SvgNode {
    Rect { x: f32, y: f32, width: f32, height: f32, fill: String },
    Path { d: String, stroke: String, stroke_width: f32 },
    Line { x1: f32, y1: f32, x2: f32, y2: f32, stroke: String, stroke_width: f32, dasharray: Option<String> },
    Circle { cx: f32, cy: f32, r: f32, fill: String, stroke: String, stroke_width: f32 },
    /// Transparent rect that receives pointer and touch input. Always painted last.
    HitArea { x: f32, y: f32, width: f32, height: f32, radius: f32 },
}

/// Root element style: fills its parent so the observed content box drives the viewport.
pub const ROOT_STYLE: &str =
    "position:relative; width:100%; height:100%; overflow:hidden; touch-action:none; user-select:none;";

/// Text label rendered as an absolutely positioned HTML box above the SVG.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelBox {
    pub class: &'static str,
    pub text: String,
    pub style: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub nodes: Vec<SvgNode>,
    pub labels: Vec<LabelBox>,
}

impl Frame {
    pub fn from_scene(scene: &Scene) -> Self {
        let mut frame = Frame { width: scene.width, height: scene.height, ..Frame::default() };
        let mut hit_area = None;
        for item in &scene.items {
            match item {
                Primitive::Rect { x, y, w, h, fill } => frame.nodes.push(SvgNode::Rect {
                    x: *x,
                    y: *y,
                    width: *w,
                    height: *h,
                    fill: fill.to_css(),
                }),
                Primitive::Polyline { points, stroke, width } if !points.is_empty() => {
                    frame.nodes.push(SvgNode::Path {
                        d: path_data(points),
                        stroke: stroke.to_css(),
                        stroke_width: *width,
                    })
                }
                Primitive::Polyline { .. } => {}
                Primitive::HitArea { x, y, w, h, radius } => {
                    hit_area = Some(SvgNode::HitArea { x: *x, y: *y, width: *w, height: *h, radius: *radius });
                }
                Primitive::Line { from, to, stroke, width, dash } => frame.nodes.push(SvgNode::Line {
                    x1: from.0,
                    y1: from.1,
                    x2: to.0,
                    y2: to.1,
                    stroke: stroke.to_css(),
                    stroke_width: *width,
                    dasharray: dash.map(|(on, off)| format!("{on},{off}")),
                }),
                Primitive::Circle { cx, cy, r, fill, stroke, stroke_width } => frame.nodes.push(SvgNode::Circle {
                    cx: *cx,
                    cy: *cy,
                    r: *r,
                    fill: fill.to_css(),
                    stroke: stroke.to_css(),
                    stroke_width: *stroke_width,
                }),
                Primitive::Label { kind, text, x, y, anchor, size, color, background } => {
                    let shift = match anchor {
                        Anchor::Start => "",
                        Anchor::Middle => " transform:translateX(-50%);",
                    };
                    let style = format!(
                        "position:absolute; left:{x:.2}px; top:{y:.2}px;{shift} padding:{py}px {px}px; \
                         border-radius:{LABEL_RADIUS}px; background:{bg}; color:{fg}; font-size:{size}px; \
                         font-family:sans-serif; white-space:nowrap; pointer-events:none;",
                        px = LABEL_PADDING.0,
                        py = LABEL_PADDING.1,
                        bg = background.to_css(),
                        fg = color.to_css(),
                    );
                    let class = match kind {
                        LabelKind::Price => "price-label",
                        LabelKind::Date => "date-label",
                    };
                    frame.labels.push(LabelBox { class, text: text.clone(), style });
                }
            }
        }
        // Above the crosshair and marker so the event target never changes under the pointer.
        frame.nodes.extend(hit_area);
        frame
    }

    /// The input-capturing rect, if the frame has one.
    pub fn hit_area(&self) -> Option<&SvgNode> {
        self.nodes.iter().rev().find(|n| matches!(n, SvgNode::HitArea { .. }))
    }

    /// Nodes to paint beneath the hit area.
    pub fn painted(&self) -> impl Iterator<Item = &SvgNode> {
        self.nodes.iter().filter(|n| !matches!(n, SvgNode::HitArea { .. }))
    }
}

/// Viewport for an observed content box. Fractional sizes round to whole pixels.
pub fn viewport_for_box(width: f64, height: f64) -> Viewport {
    let px = |v: f64| if v.is_finite() && v > 0.0 { v.round() as u32 } else { 0 };
    Viewport::new(px(width), px(height))
}

/// Pointer position relative to an element whose top-left corner sits at `origin` in client space.
pub fn relative_to(client: (f64, f64), origin: (f64, f64)) -> (f32, f32) {
    ((client.0 - origin.0) as f32, (client.1 - origin.1) as f32)
}
