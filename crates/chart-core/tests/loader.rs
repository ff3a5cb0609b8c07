// File: crates/chart-core/tests/loader.rs
// Purpose: Background series load: outcome delivery, failure handling, and cancellation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use price_chart_core::fetch::parse_payload;
use price_chart_core::{ChartError, LoadState, PriceChart, RenderOptions, SeriesLoad};

#[tokio::test]
async fn successful_load_makes_chart_ready() {
    let load = SeriesLoad::spawn(async { parse_payload(include_str!("fixtures/bpi_close.json")) });
    let mut chart = PriceChart::new(RenderOptions::default());
    assert!(chart.render_svg().is_none());

    chart.apply_load(load.wait().await);
    assert_eq!(chart.series().map(|s| s.len()), Some(8));
    assert!(chart.render_svg().is_some());
}

#[tokio::test]
async fn rejected_load_leaves_chart_empty() {
    let load = SeriesLoad::spawn(async { Err(ChartError::HttpStatus(503)) });
    let mut chart = PriceChart::new(RenderOptions::default());
    chart.apply_load(load.wait().await);

    assert!(matches!(chart.load_state(), LoadState::Failed(_)));
    assert!(chart.render_svg().is_none());
    assert!(chart.render_to_png_bytes().expect("no error").is_none());
}

#[tokio::test]
async fn cancelled_load_reports_cancelled() {
    let mut load = SeriesLoad::spawn(async {
        tokio::time::sleep(Duration::from_secs(30)).await;
        parse_payload(r#"{"bpi": {}}"#)
    });
    assert!(load.try_take().is_none());
    load.cancel();
    let outcome = load.wait().await;
    assert!(matches!(outcome, Err(ChartError::Cancelled)));
}

#[tokio::test]
async fn dropping_the_handle_aborts_the_task() {
    let finished = Arc::new(AtomicBool::new(false));
    let flag = finished.clone();
    let load = SeriesLoad::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        flag.store(true, Ordering::SeqCst);
        parse_payload(r#"{"bpi": {}}"#)
    });
    drop(load);
    tokio::time::sleep(Duration::from_millis(150)).await;
    assert!(!finished.load(Ordering::SeqCst));
}

#[tokio::test]
async fn try_take_yields_outcome_once() {
    let mut load = SeriesLoad::spawn(async { parse_payload(r#"{"bpi": {"2021-01-01": 1.0}}"#) });
    let mut outcome = None;
    for _ in 0..100 {
        if let Some(o) = load.try_take() {
            outcome = Some(o);
            break;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    assert_eq!(outcome.expect("finished").expect("ok").len(), 1);
    assert!(load.try_take().is_none());
}
