// File: crates/chart-core/src/tooltip.rs
// Summary: Tooltip state driven by pointer/touch input.

use crate::locator::{ChartContext, Located};
use crate::series::DataPoint;

/// Pointer or touch input on the hit-testing area, in surface-local pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Move { x: f32, y: f32 },
    TouchStart { x: f32, y: f32 },
    TouchMove { x: f32, y: f32 },
    Leave,
}

impl PointerEvent {
    /// Pointer position, if the event carries one.
    pub fn position(&self) -> Option<(f32, f32)> {
        match *self {
            PointerEvent::Move { x, y }
            | PointerEvent::TouchStart { x, y }
            | PointerEvent::TouchMove { x, y } => Some((x, y)),
            PointerEvent::Leave => None,
        }
    }
}

/// Whether and where the tooltip overlay is shown.
/// Active exactly when it holds a located record.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TooltipState {
    anchor: Option<Located>,
}

impl TooltipState {
    pub fn hidden() -> Self { Self::default() }

    pub fn is_active(&self) -> bool { self.anchor.is_some() }
    pub fn anchor(&self) -> Option<&Located> { self.anchor.as_ref() }
    pub fn data_point(&self) -> Option<&DataPoint> { self.anchor.as_ref().map(|a| &a.point) }
    /// Marker position `(left, top)` while active.
    pub fn screen_position(&self) -> Option<(f32, f32)> {
        self.anchor.as_ref().map(|a| (a.screen_x, a.screen_y))
    }

    pub fn hide(&mut self) { self.anchor = None; }

    /// Apply one input event. Moves re-run the locator; leave hides.
    /// Returns true when the visible state changed.
    pub fn handle(&mut self, event: PointerEvent, ctx: Option<&ChartContext<'_>>) -> bool {
        let before = self.anchor;
        match event.position() {
            Some((x, _)) => {
                if let Some(located) = ctx.and_then(|c| c.locate(x)) {
                    self.anchor = Some(located);
                }
            }
            None => self.anchor = None,
        }
        before != self.anchor
    }

    /// Recompute the marker position under new scales (e.g. after a resize).
    pub fn reproject(&mut self, ctx: &ChartContext<'_>) {
        if let Some(anchor) = self.anchor.as_mut() {
            let (x, y) = ctx.project(&anchor.point);
            anchor.screen_x = x;
            anchor.screen_y = y;
        }
    }
}
