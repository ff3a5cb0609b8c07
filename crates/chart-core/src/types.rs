// File: crates/chart-core/src/types.rs
// Summary: Shared layout types and constants (viewport, paddings, plot rect).

/// Default viewport width in pixels.
pub const WIDTH: u32 = 1024;
/// Default viewport height in pixels.
pub const HEIGHT: u32 = 640;
/// Default padding around the plot on every side, in pixels.
pub const PADDING: u32 = 100;

/// Observed size of the drawing surface, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Same margin on every side.
    pub const fn uniform(px: u32) -> Self {
        Self::new(px, px, px, px)
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::uniform(PADDING)
    }
}

/// Plot rectangle in pixels, derived from a viewport and its insets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PlotRect {
    /// Plot area inside `insets`. Degenerate viewports collapse to a zero-width/height rect
    /// instead of inverting.
    pub fn new(viewport: Viewport, insets: &Insets) -> Self {
        let left = insets.left as f32;
        let top = insets.top as f32;
        let right = (viewport.width.saturating_sub(insets.right) as f32).max(left);
        let bottom = (viewport.height.saturating_sub(insets.bottom) as f32).max(top);
        Self { left, top, right, bottom }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_rect_uses_insets() {
        let r = PlotRect::new(Viewport::new(800, 600), &Insets::uniform(100));
        assert_eq!((r.left, r.top, r.right, r.bottom), (100.0, 100.0, 700.0, 500.0));
        assert_eq!(r.width(), 600.0);
    }

    #[test]
    fn plot_rect_never_inverts() {
        let r = PlotRect::new(Viewport::new(150, 120), &Insets::uniform(100));
        assert!(r.width() >= 0.0);
        assert!(r.height() >= 0.0);
    }
}
