// File: crates/chart-core/src/chart.rs
// Summary: PriceChart owns the series load state and tooltip, handles input, and builds frames.

use std::path::Path;

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::error::ChartError;
use crate::format::{date_label, price_label};
use crate::locator::ChartContext;
use crate::raster;
use crate::scene::{Anchor, LabelKind, Primitive, Scene};
use crate::series::Series;
use crate::svg;
use crate::theme::Theme;
use crate::tooltip::{PointerEvent, TooltipState};
use crate::types::{Insets, Viewport};

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub viewport: Viewport,
    pub insets: Insets,
    pub theme: Theme,
    /// Draw the price/date labels with the crosshair.
    pub draw_labels: bool,
    pub line_width: f32,
    pub crosshair_width: f32,
    pub crosshair_dash: (f32, f32),
    pub marker_radius: f32,
    pub marker_stroke_width: f32,
    pub hit_area_radius: f32,
    pub label_size: f32,
    /// Price label offset from the marker, `(dx, dy)`.
    pub price_label_offset: (f32, f32),
    /// Date label distance above the plot bottom.
    pub date_label_lift: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
            line_width: 5.0,
            crosshair_width: 4.0,
            crosshair_dash: (4.0, 6.0),
            marker_radius: 4.0,
            marker_stroke_width: 2.0,
            hit_area_radius: 14.0,
            label_size: 14.0,
            price_label_offset: (12.0, -12.0),
            date_label_lift: 30.0,
        }
    }
}

/// Outcome of the one-time series load, as seen by the render layer.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState {
    Pending,
    Ready(Series),
    Failed(String),
}

pub struct PriceChart {
    state: LoadState,
    tooltip: TooltipState,
    opts: RenderOptions,
}

impl PriceChart {
    /// Chart waiting for its series; renders nothing until a load outcome arrives.
    pub fn new(opts: RenderOptions) -> Self {
        Self { state: LoadState::Pending, tooltip: TooltipState::hidden(), opts }
    }

    pub fn with_series(series: Series, opts: RenderOptions) -> Self {
        Self { state: LoadState::Ready(series), tooltip: TooltipState::hidden(), opts }
    }

    pub fn options(&self) -> &RenderOptions { &self.opts }
    pub fn load_state(&self) -> &LoadState { &self.state }
    pub fn tooltip(&self) -> &TooltipState { &self.tooltip }

    pub fn series(&self) -> Option<&Series> {
        match &self.state {
            LoadState::Ready(s) => Some(s),
            _ => None,
        }
    }

    /// Install the result of a load. The previous series and tooltip are discarded.
    pub fn apply_load(&mut self, outcome: Result<Series, ChartError>) {
        self.tooltip.hide();
        self.state = match outcome {
            Ok(series) => {
                info!(points = series.len(), "price series ready");
                LoadState::Ready(series)
            }
            Err(e) => {
                warn!(error = %e, "price series unavailable; chart stays empty");
                LoadState::Failed(e.to_string())
            }
        };
    }

    /// Series and scales for the current viewport. `None` until a non-empty series is ready.
    pub fn context(&self) -> Option<ChartContext<'_>> {
        ChartContext::new(self.series()?, &self.opts)
    }

    /// Route one pointer/touch event to the tooltip. Returns true when a redraw is needed.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        let ctx = match &self.state {
            LoadState::Ready(series) => ChartContext::new(series, &self.opts),
            _ => None,
        };
        self.tooltip.handle(event, ctx.as_ref())
    }

    /// Adopt a new observed viewport and move the active marker with it.
    pub fn resize(&mut self, viewport: Viewport) {
        if self.opts.viewport == viewport {
            return;
        }
        debug!(width = viewport.width, height = viewport.height, "chart resized");
        self.opts.viewport = viewport;
        if let LoadState::Ready(series) = &self.state {
            if let Some(ctx) = ChartContext::new(series, &self.opts) {
                self.tooltip.reproject(&ctx);
            }
        }
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.opts.theme = theme;
    }

    /// Current frame, or `None` while the series is pending or failed.
    pub fn scene(&self) -> Option<Scene> {
        let series = self.series()?;
        let o = &self.opts;
        let theme = &o.theme;
        let (w, h) = (o.viewport.width as f32, o.viewport.height as f32);
        let mut scene = Scene::new(o.viewport.width, o.viewport.height);

        scene.push(Primitive::Rect { x: 0.0, y: 0.0, w, h, fill: theme.background });

        let ctx = ChartContext::new(series, o);
        if let Some(ctx) = &ctx {
            let points = series.points().iter().map(|p| ctx.project(p)).collect();
            scene.push(Primitive::Polyline { points, stroke: theme.line_stroke, width: o.line_width });
        }

        scene.push(Primitive::HitArea { x: 0.0, y: 0.0, w, h, radius: o.hit_area_radius });

        let (Some(ctx), Some(anchor)) = (&ctx, self.tooltip.anchor()) else {
            return Some(scene);
        };
        let (left, top) = (anchor.screen_x, anchor.screen_y);
        let bottom = ctx.plot.bottom;

        scene.push(Primitive::Line {
            from: (left, 0.0),
            to: (left, bottom),
            stroke: theme.crosshair,
            width: o.crosshair_width,
            dash: Some(o.crosshair_dash),
        });
        scene.push(Primitive::Circle {
            cx: left,
            cy: top,
            r: o.marker_radius,
            fill: theme.marker_fill,
            stroke: theme.marker_stroke,
            stroke_width: o.marker_stroke_width,
        });
        if o.draw_labels {
            scene.push(Primitive::Label {
                kind: LabelKind::Price,
                text: price_label(anchor.point.price),
                x: left + o.price_label_offset.0,
                y: top + o.price_label_offset.1,
                anchor: Anchor::Start,
                size: o.label_size,
                color: theme.price_label_text,
                background: theme.price_label_bg,
            });
            scene.push(Primitive::Label {
                kind: LabelKind::Date,
                text: date_label(anchor.point.date),
                x: left,
                y: bottom - o.date_label_lift,
                anchor: Anchor::Middle,
                size: o.label_size,
                color: theme.date_label_text,
                background: theme.date_label_bg,
            });
        }
        Some(scene)
    }

    /// SVG document for the current frame, `None` while there is nothing to draw.
    pub fn render_svg(&self) -> Option<String> {
        self.scene().map(|s| svg::to_svg(&s))
    }

    /// Encode the current frame as PNG. `Ok(None)` while there is nothing to draw.
    pub fn render_to_png_bytes(&self) -> Result<Option<Vec<u8>>> {
        self.scene().map(|s| raster::render_to_png_bytes(&s)).transpose()
    }

    /// Render the current frame into an RGBA8 buffer `(pixels, width, height, row_bytes)`.
    pub fn render_to_rgba8(&self) -> Result<Option<(Vec<u8>, u32, u32, usize)>> {
        self.scene().map(|s| raster::render_to_rgba8(&s)).transpose()
    }

    /// Write the current frame to `output_png_path`. Returns false (and writes nothing)
    /// while there is nothing to draw.
    pub fn render_to_png(&self, output_png_path: impl AsRef<Path>) -> Result<bool> {
        match self.scene() {
            Some(scene) => {
                raster::render_to_png(&scene, output_png_path)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
