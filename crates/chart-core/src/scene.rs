// File: crates/chart-core/src/scene.rs
// Summary: Backend-neutral draw list for one frame of the chart (consumed by SVG, Skia, and Dioxus).

use crate::theme::Rgba;

/// Horizontal placement of a label box relative to its `x`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    /// Box starts at `x`.
    Start,
    /// Box is centred on `x`.
    Middle,
}

/// Role of a text label, so front-ends can style or place them natively.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelKind {
    Price,
    Date,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Rect { x: f32, y: f32, w: f32, h: f32, fill: Rgba },
    /// Open polyline stroked with round caps and joins.
    Polyline { points: Vec<(f32, f32)>, stroke: Rgba, width: f32 },
    /// Invisible rectangle that receives pointer input.
    HitArea { x: f32, y: f32, w: f32, h: f32, radius: f32 },
    /// Straight line; `dash` is `(on, off)` in pixels.
    Line { from: (f32, f32), to: (f32, f32), stroke: Rgba, width: f32, dash: Option<(f32, f32)> },
    Circle { cx: f32, cy: f32, r: f32, fill: Rgba, stroke: Rgba, stroke_width: f32 },
    /// Text in a padded rounded box whose top edge is at `y`.
    Label {
        kind: LabelKind,
        text: String,
        x: f32,
        y: f32,
        anchor: Anchor,
        size: f32,
        color: Rgba,
        background: Rgba,
    },
}

/// Label box padding (horizontal, vertical) in pixels.
pub const LABEL_PADDING: (f32, f32) = (8.0, 4.8);
/// Label box corner radius in pixels.
pub const LABEL_RADIUS: f32 = 3.0;

/// One frame: surface size plus primitives in paint order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub items: Vec<Primitive>,
}

impl Scene {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, items: Vec::new() }
    }

    pub fn push(&mut self, p: Primitive) {
        self.items.push(p);
    }

    pub fn hit_area(&self) -> Option<&Primitive> {
        self.items.iter().find(|p| matches!(p, Primitive::HitArea { .. }))
    }

    pub fn labels(&self) -> impl Iterator<Item = &Primitive> {
        self.items.iter().filter(|p| matches!(p, Primitive::Label { .. }))
    }

    /// Whether the crosshair/marker overlay is part of this frame.
    pub fn has_tooltip(&self) -> bool {
        self.items.iter().any(|p| matches!(p, Primitive::Circle { .. }))
    }
}

/// Left edge of a label box of width `box_w` placed at `x` with `anchor`.
pub fn label_left(x: f32, box_w: f32, anchor: Anchor) -> f32 {
    match anchor {
        Anchor::Start => x,
        Anchor::Middle => x - box_w * 0.5,
    }
}
