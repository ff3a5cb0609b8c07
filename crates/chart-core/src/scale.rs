// File: crates/chart-core/src/scale.rs
// Summary: Continuous time (X) and value (Y) scales mapping data to pixels and back.

use chrono::{DateTime, NaiveDate, Utc};

use crate::series::date_to_ms;

/// Domain value (epoch milliseconds for time, price for values).
pub type Value = f64;

/// Invertible mapping between a data domain and a pixel range.
pub trait ScaleTransform {
    fn to_px(&self, v: Value) -> f32;
    fn from_px(&self, px: f32) -> Value;
}

/// Linear scale from `[d0, d1]` onto `[r0, r1]`. Either interval may be reversed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub d0: Value,
    pub d1: Value,
    pub r0: f32,
    pub r1: f32,
}

impl LinearScale {
    pub fn new(domain: (Value, Value), range: (f32, f32)) -> Self {
        Self { d0: domain.0, d1: domain.1, r0: range.0, r1: range.1 }
    }

    pub fn domain(&self) -> (Value, Value) { (self.d0, self.d1) }
    pub fn range(&self) -> (f32, f32) { (self.r0, self.r1) }

    /// Extend the domain outward to round tick increments (about `count` ticks).
    pub fn nice(mut self, count: usize) -> Self {
        let (d0, d1) = nice_domain(self.d0, self.d1, count);
        self.d0 = d0;
        self.d1 = d1;
        self
    }
}

impl ScaleTransform for LinearScale {
    #[inline]
    fn to_px(&self, v: Value) -> f32 {
        let span = self.d1 - self.d0;
        // collapsed domain maps to the middle of the range
        let t = if span == 0.0 { 0.5 } else { (v - self.d0) / span };
        (self.r0 as f64 + t * (self.r1 - self.r0) as f64) as f32
    }
    #[inline]
    fn from_px(&self, px: f32) -> Value {
        let span = (self.r1 - self.r0) as f64;
        let t = if span == 0.0 { 0.5 } else { (px - self.r0) as f64 / span };
        self.d0 + t * (self.d1 - self.d0)
    }
}

/// Horizontal time scale over calendar dates (UTC midnight).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    inner: LinearScale,
}

impl TimeScale {
    /// Scale over `[start_ms, end_ms]` (epoch milliseconds).
    pub fn new(domain_ms: (Value, Value), range: (f32, f32)) -> Self {
        Self { inner: LinearScale::new(domain_ms, range) }
    }

    pub fn domain(&self) -> (Value, Value) { self.inner.domain() }
    pub fn range(&self) -> (f32, f32) { self.inner.range() }

    #[inline]
    pub fn date_to_px(&self, date: NaiveDate) -> f32 {
        self.inner.to_px(date_to_ms(date))
    }

    /// Inverse at a pixel, as a UTC instant. `None` outside chrono's representable range.
    pub fn instant_at(&self, px: f32) -> Option<DateTime<Utc>> {
        let ms = self.inner.from_px(px);
        if !ms.is_finite() {
            return None;
        }
        DateTime::from_timestamp_millis(ms.round() as i64)
    }
}

impl ScaleTransform for TimeScale {
    #[inline]
    fn to_px(&self, v: Value) -> f32 { self.inner.to_px(v) }
    #[inline]
    fn from_px(&self, px: f32) -> Value { self.inner.from_px(px) }
}

/// Tick step for `count` ticks over `[start, stop]`. Negative values encode the
/// reciprocal of a fractional step (so `-10.0` means `0.1`) to keep rounding exact.
pub fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count.max(1) as f64;
    if !step.is_finite() || step == 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -10f64.powf(-power) / factor
    }
}

/// Round `[d0, d1]` outward to multiples of the tick increment. Reversed domains stay reversed.
/// The domain is only replaced once the step settles; otherwise it is returned as given.
pub fn nice_domain(d0: f64, d1: f64, count: usize) -> (f64, f64) {
    settle_nice(d0, d1, count, 10).unwrap_or((d0, d1))
}

/// Outward rounding with at most `max_iter` refinements. `None` if the step never settles.
fn settle_nice(d0: f64, d1: f64, count: usize, max_iter: usize) -> Option<(f64, f64)> {
    let reversed = d1 < d0;
    let (mut start, mut stop) = if reversed { (d1, d0) } else { (d0, d1) };
    let mut prestep = f64::NAN;
    for _ in 0..max_iter {
        let step = tick_increment(start, stop, count);
        if step == prestep {
            return Some(if reversed { (stop, start) } else { (start, stop) });
        }
        if step > 0.0 {
            start = (start / step).floor() * step;
            stop = (stop / step).ceil() * step;
        } else if step < 0.0 {
            start = (start * step).ceil() / step;
            stop = (stop * step).floor() / step;
        } else {
            return None;
        }
        prestep = step;
    }
    None
}
