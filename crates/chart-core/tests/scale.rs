// File: crates/chart-core/tests/scale.rs
// Purpose: Scale/inverse consistency and the chart's y-domain layout.

use price_chart_core::fetch::parse_payload;
use price_chart_core::{ChartContext, RenderOptions, ScaleTransform, Viewport};

fn fixture_series() -> price_chart_core::Series {
    parse_payload(include_str!("fixtures/bpi_close.json")).expect("fixture parses")
}

#[test]
fn x_scale_round_trips_every_point() {
    let series = fixture_series();
    let opts = RenderOptions::default();
    let ctx = ChartContext::new(&series, &opts).expect("non-empty");
    for p in series.points() {
        let px = ctx.x.to_px(p.time_ms());
        let back = ctx.x.to_px(ctx.x.from_px(px));
        assert!((back - px).abs() < 1e-3, "{}: {px} vs {back}", p.date);
    }
}

#[test]
fn x_scale_spans_plot_width() {
    let series = fixture_series();
    let opts = RenderOptions::default();
    let ctx = ChartContext::new(&series, &opts).expect("non-empty");
    let first = series.first().expect("first");
    let last = series.last().expect("last");
    assert_eq!(ctx.x.date_to_px(first.date), 100.0);
    assert_eq!(ctx.x.date_to_px(last.date), opts.viewport.width as f32 - 100.0);
}

#[test]
fn y_domain_starts_at_zero_with_headroom() {
    let series = fixture_series();
    let opts = RenderOptions { viewport: Viewport::new(800, 700), ..RenderOptions::default() };
    let ctx = ChartContext::new(&series, &opts).expect("non-empty");
    let (d0, d1) = ctx.y.domain();
    assert_eq!(d0, 0.0);
    // max 40670.25 + (700 - 100) / 3, rounded outward to a 5000 step
    assert_eq!(d1, 45_000.0);
    assert_eq!(ctx.y.to_px(0.0), 600.0);
    assert_eq!(ctx.y.to_px(d1), 100.0);
}

#[test]
fn instant_at_inverts_to_calendar_time() {
    let series = fixture_series();
    let opts = RenderOptions::default();
    let ctx = ChartContext::new(&series, &opts).expect("non-empty");
    let first = series.first().expect("first");
    let at = ctx.x.instant_at(100.0).expect("in range");
    assert_eq!(at.date_naive(), first.date);
}
