// File: crates/chart-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use price_chart_core::fetch::parse_payload;
use price_chart_core::{PriceChart, RenderOptions, Viewport};

#[test]
fn render_rgba8_buffer() {
    let series = parse_payload(include_str!("fixtures/bpi_close.json")).expect("fixture");
    let opts = RenderOptions { viewport: Viewport::new(320, 240), draw_labels: false, ..RenderOptions::default() };
    let chart = PriceChart::with_series(series, opts);

    let (px, w, h, stride) = chart.render_to_rgba8().expect("rgba render").expect("ready");
    assert_eq!((w, h), (320, 240));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left pixel is the opaque mint background (RGBA)
    assert_eq!(&px[0..4], &[0x32, 0xde, 0xaa, 255]);
}
