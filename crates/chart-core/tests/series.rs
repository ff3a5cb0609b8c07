// File: crates/chart-core/tests/series.rs
// Purpose: Building a series from the endpoint payload and enforcing date order.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use price_chart_core::fetch::parse_payload;
use price_chart_core::{ChartError, DataPoint, Series};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn payload_becomes_ordered_series() {
    let series = parse_payload(include_str!("fixtures/bpi_close.json")).expect("parse");
    assert_eq!(series.len(), 8);
    assert_eq!(series.first().map(|p| p.date), Some(day(2021, 1, 1)));
    assert_eq!(series.last().map(|p| p.price), Some(40670.25));
    assert!(series.points().windows(2).all(|w| w[0].date < w[1].date));
    assert_eq!(series.max_price(), Some(40670.25));
}

#[test]
fn mapping_is_sorted_by_date() {
    let mut prices = BTreeMap::new();
    prices.insert("2021-03-01".to_string(), 3.0);
    prices.insert("2021-01-15".to_string(), 1.0);
    prices.insert("2021-02-01".to_string(), 2.0);
    let series = Series::from_prices(&prices).expect("valid");
    let dates: Vec<_> = series.points().iter().map(|p| p.date).collect();
    assert_eq!(dates, vec![day(2021, 1, 15), day(2021, 2, 1), day(2021, 3, 1)]);
}

#[test]
fn explicit_points_must_be_ascending() {
    let err = Series::new(vec![
        DataPoint::new(day(2021, 1, 2), 1.0),
        DataPoint::new(day(2021, 1, 1), 2.0),
    ])
    .unwrap_err();
    assert!(matches!(err, ChartError::Unordered { index: 1 }));

    let err = Series::new(vec![
        DataPoint::new(day(2021, 1, 1), 1.0),
        DataPoint::new(day(2021, 1, 1), 2.0),
    ])
    .unwrap_err();
    assert!(matches!(err, ChartError::DuplicateDate(_)));
}

#[test]
fn malformed_payloads_are_errors() {
    assert!(matches!(parse_payload("not json"), Err(ChartError::Decode(_))));
    assert!(matches!(parse_payload(r#"{"prices": {}}"#), Err(ChartError::Decode(_))));
    assert!(matches!(
        parse_payload(r#"{"bpi": {"someday": 1.0}}"#),
        Err(ChartError::InvalidDate(_))
    ));
    assert!(matches!(
        parse_payload(r#"{"bpi": {"2021-01-01": "ten"}}"#),
        Err(ChartError::Decode(_))
    ));
}

#[test]
fn empty_mapping_is_an_empty_series() {
    let series = parse_payload(r#"{"bpi": {}}"#).expect("empty is valid");
    assert!(series.is_empty());
    assert_eq!(series.time_extent(), None);
    assert_eq!(series.max_price(), None);
}

#[test]
fn non_finite_prices_are_rejected() {
    let err = Series::new(vec![DataPoint::new(day(2021, 1, 1), f64::NAN)]).unwrap_err();
    assert!(matches!(err, ChartError::NonFinitePrice { .. }));
}

#[test]
fn rows_in_any_order_are_sorted() {
    let series = Series::from_rows(vec![(day(2021, 1, 3), 3.0), (day(2021, 1, 1), 1.0)]).expect("rows");
    assert!(series.contains(&DataPoint::new(day(2021, 1, 1), 1.0)));
    assert!(!series.contains(&DataPoint::new(day(2021, 1, 1), 9.0)));
    assert_eq!(series.get(1).map(|p| p.price), Some(3.0));
}
