// File: crates/chart-core/tests/locator.rs
// Purpose: Nearest-point lookup: nearest-neighbour correctness, clamping, and tie-breaking.

use chrono::NaiveDate;
use price_chart_core::series::date_to_ms;
use price_chart_core::{nearest_index, ChartContext, DataPoint, RenderOptions, Series};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn three_points() -> Series {
    Series::new(vec![
        DataPoint::new(day(2021, 1, 1), 100.0),
        DataPoint::new(day(2021, 1, 3), 200.0),
        DataPoint::new(day(2021, 1, 5), 300.0),
    ])
    .expect("ordered series")
}

#[test]
fn equidistant_pointer_picks_later_point() {
    let series = three_points();
    let opts = RenderOptions::default();
    let ctx = ChartContext::new(&series, &opts).expect("non-empty");

    let px = ctx.x.date_to_px(day(2021, 1, 2));
    let hit = ctx.locate(px).expect("located");
    assert_eq!(hit.point, DataPoint::new(day(2021, 1, 3), 200.0));
    assert_eq!(hit.index, 1);

    let t0 = date_to_ms(day(2021, 1, 4));
    assert_eq!(nearest_index(series.points(), t0, DataPoint::time_ms), Some(2));
}

#[test]
fn pointer_before_first_point_clamps_to_first() {
    let series = three_points();
    let opts = RenderOptions::default();
    let ctx = ChartContext::new(&series, &opts).expect("non-empty");

    for px in [0.0_f32, 50.0, 99.0] {
        let hit = ctx.locate(px).expect("located");
        assert_eq!(hit.point, DataPoint::new(day(2021, 1, 1), 100.0), "px={px}");
    }
    let t0 = date_to_ms(day(2020, 12, 1));
    assert_eq!(nearest_index(series.points(), t0, DataPoint::time_ms), Some(0));
}

#[test]
fn pointer_after_last_point_clamps_to_last() {
    let series = three_points();
    let opts = RenderOptions::default();
    let ctx = ChartContext::new(&series, &opts).expect("non-empty");

    let hit = ctx.locate(opts.viewport.width as f32).expect("located");
    assert_eq!(hit.point.date, day(2021, 1, 5));
    assert_eq!(hit.index, 2);
}

#[test]
fn single_point_always_wins() {
    let series = Series::new(vec![DataPoint::new(day(2021, 6, 1), 42.0)]).expect("series");
    let opts = RenderOptions::default();
    let ctx = ChartContext::new(&series, &opts).expect("non-empty");
    for px in [0.0_f32, 300.0, 512.0, 2000.0] {
        assert_eq!(ctx.locate(px).expect("located").point.price, 42.0);
    }
}

#[test]
fn empty_series_has_no_context_and_no_nearest() {
    let series = Series::new(Vec::new()).expect("empty is valid");
    let opts = RenderOptions::default();
    assert!(ChartContext::new(&series, &opts).is_none());
    assert_eq!(nearest_index(series.points(), 0.0, DataPoint::time_ms), None);
}

#[test]
fn result_is_never_beaten_by_another_point() {
    // Irregular spacing to exercise both neighbours.
    let offsets = [0i64, 1, 2, 5, 6, 13, 14, 30, 31, 45];
    let base = day(2020, 1, 1);
    let points: Vec<DataPoint> = offsets
        .iter()
        .enumerate()
        .map(|(i, &o)| DataPoint::new(base + chrono::Days::new(o as u64), 1000.0 + i as f64))
        .collect();
    let series = Series::new(points).expect("ordered");

    let (start, end) = series.time_extent().expect("extent");
    let steps = 997;
    for k in 0..=steps {
        let t0 = start + (end - start) * k as f64 / steps as f64;
        let got = nearest_index(series.points(), t0, DataPoint::time_ms).expect("some");
        let best = (t0 - series.points()[got].time_ms()).abs();
        for p in series.points() {
            assert!(
                (t0 - p.time_ms()).abs() >= best,
                "t0={t0}: index {got} beaten by {}",
                p.date
            );
        }
    }
}

#[test]
fn marker_sits_on_the_drawn_line() {
    let series = three_points();
    let opts = RenderOptions::default();
    let ctx = ChartContext::new(&series, &opts).expect("non-empty");
    let hit = ctx.locate(ctx.x.date_to_px(day(2021, 1, 5))).expect("located");
    let (x, y) = ctx.project(&hit.point);
    assert_eq!((hit.screen_x, hit.screen_y), (x, y));
    assert!((x - ctx.plot.right).abs() < 1e-3);
    assert!(y > ctx.plot.top && y < ctx.plot.bottom);
}
