// File: crates/chart-core/src/series.rs
// Summary: Price series model built from a date -> price mapping.
// Notes:
// - A Series is always in strictly ascending date order. `from_prices` sorts,
//   `new` checks and rejects out-of-order input.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::error::ChartError;

/// Days from 0001-01-01 (CE day 1) to 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i64 = 719_163;
const MS_PER_DAY: f64 = 86_400_000.0;

/// Date format of the keys in the price mapping.
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// One closing price on one calendar day.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataPoint {
    pub date: NaiveDate,
    pub price: f64,
}

impl DataPoint {
    pub fn new(date: NaiveDate, price: f64) -> Self {
        Self { date, price }
    }

    /// Time accessor: milliseconds since the Unix epoch at UTC midnight of `date`.
    #[inline]
    pub fn time_ms(&self) -> f64 {
        date_to_ms(self.date)
    }

    #[inline]
    pub fn price(&self) -> f64 {
        self.price
    }
}

/// UTC midnight of `date` as epoch milliseconds.
#[inline]
pub fn date_to_ms(date: NaiveDate) -> f64 {
    (i64::from(date.num_days_from_ce()) - UNIX_EPOCH_DAYS_FROM_CE) as f64 * MS_PER_DAY
}

/// Parse a `YYYY-MM-DD` key.
pub fn parse_date_key(key: &str) -> Result<NaiveDate, ChartError> {
    NaiveDate::parse_from_str(key.trim(), DATE_KEY_FORMAT)
        .map_err(|_| ChartError::InvalidDate(key.to_string()))
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    points: Vec<DataPoint>,
}

impl Series {
    /// Build from points that must already be in strictly ascending date order.
    pub fn new(points: Vec<DataPoint>) -> Result<Self, ChartError> {
        for (i, p) in points.iter().enumerate() {
            if !p.price.is_finite() {
                return Err(ChartError::NonFinitePrice { date: p.date.to_string() });
            }
            if i > 0 {
                let prev = points[i - 1].date;
                if p.date == prev {
                    return Err(ChartError::DuplicateDate(p.date.to_string()));
                }
                if p.date < prev {
                    return Err(ChartError::Unordered { index: i });
                }
            }
        }
        Ok(Self { points })
    }

    /// Build from a date-key -> price mapping, sorting by parsed date.
    pub fn from_prices(prices: &BTreeMap<String, f64>) -> Result<Self, ChartError> {
        let mut points = prices
            .iter()
            .map(|(key, &price)| Ok(DataPoint::new(parse_date_key(key)?, price)))
            .collect::<Result<Vec<_>, ChartError>>()?;
        points.sort_by_key(|p| p.date);
        Self::new(points)
    }

    /// Build from `(date, price)` rows in any order (e.g. a CSV file).
    pub fn from_rows(rows: impl IntoIterator<Item = (NaiveDate, f64)>) -> Result<Self, ChartError> {
        let mut points: Vec<DataPoint> = rows.into_iter().map(|(d, p)| DataPoint::new(d, p)).collect();
        points.sort_by_key(|p| p.date);
        Self::new(points)
    }

    pub fn points(&self) -> &[DataPoint] { &self.points }
    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }
    pub fn get(&self, index: usize) -> Option<&DataPoint> { self.points.get(index) }
    pub fn first(&self) -> Option<&DataPoint> { self.points.first() }
    pub fn last(&self) -> Option<&DataPoint> { self.points.last() }

    /// First and last date as epoch milliseconds.
    pub fn time_extent(&self) -> Option<(f64, f64)> {
        Some((self.first()?.time_ms(), self.last()?.time_ms()))
    }

    /// Highest price in the series.
    pub fn max_price(&self) -> Option<f64> {
        self.points.iter().map(DataPoint::price).reduce(f64::max)
    }

    /// Whether `point` is one of this series' records.
    pub fn contains(&self, point: &DataPoint) -> bool {
        self.points
            .binary_search_by_key(&point.date, |p| p.date)
            .map(|i| self.points[i].price == point.price)
            .unwrap_or(false)
    }
}
