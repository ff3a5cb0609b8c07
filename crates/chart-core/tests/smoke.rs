// File: crates/chart-core/tests/smoke.rs
// Purpose: Basic end-to-end raster smoke test writing a PNG.

use price_chart_core::fetch::parse_payload;
use price_chart_core::{PointerEvent, PriceChart, RenderOptions};

#[test]
fn render_smoke_png() {
    let series = parse_payload(include_str!("fixtures/bpi_close.json")).expect("fixture");
    let mut chart = PriceChart::with_series(series, RenderOptions::default());
    chart.handle_pointer(PointerEvent::Move { x: 512.0, y: 300.0 });

    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    let wrote = chart.render_to_png(&out).expect("render should succeed");
    assert!(wrote);
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes().expect("render bytes").expect("ready");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn pending_chart_writes_no_png() {
    let chart = PriceChart::new(RenderOptions::default());
    let out = std::path::PathBuf::from("target/test_out/pending.png");
    std::fs::remove_file(&out).ok();
    assert!(!chart.render_to_png(&out).expect("no error"));
    assert!(!out.exists());
    assert!(chart.render_to_png_bytes().expect("no error").is_none());
}
