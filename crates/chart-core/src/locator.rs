// File: crates/chart-core/src/locator.rs
// Summary: Nearest-point lookup mapping a pointer position to the closest record in time.

use crate::scale::{LinearScale, ScaleTransform, TimeScale};
use crate::series::{DataPoint, Series};
use crate::types::PlotRect;
use crate::RenderOptions;

/// Index of the item whose time is nearest to `t0`, or `None` for an empty slice.
///
/// `items` must be sorted ascending by `time`. The search is a lower bound that
/// starts at index 1, so `items[i - 1]` always exists. On equal distance the later
/// item wins. O(log n).
pub fn nearest_index<T, F>(items: &[T], t0: f64, time: F) -> Option<usize>
where
    F: Fn(&T) -> f64,
{
    if items.is_empty() {
        return None;
    }
    let i = 1 + items[1..].partition_point(|item| time(item) < t0);
    let Some(after) = items.get(i) else {
        return Some(i - 1);
    };
    let before = &items[i - 1];
    if t0 - time(before) >= time(after) - t0 {
        Some(i)
    } else {
        Some(i - 1)
    }
}

/// A located record with the screen position of its marker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Located {
    pub index: usize,
    pub point: DataPoint,
    pub screen_x: f32,
    pub screen_y: f32,
}

/// Series plus the scales it is drawn with, passed to handlers as one unit.
#[derive(Clone, Copy, Debug)]
pub struct ChartContext<'a> {
    pub series: &'a Series,
    pub x: TimeScale,
    pub y: LinearScale,
    pub plot: PlotRect,
}

impl<'a> ChartContext<'a> {
    /// Scales for `series` inside the plot area of `opts`. `None` when the series is empty.
    ///
    /// X spans the date extent across `[left, right]`. Y spans
    /// `[0, max_price + bottom / 3]` (rounded outward) across `[bottom, top]`.
    pub fn new(series: &'a Series, opts: &RenderOptions) -> Option<Self> {
        let (t_min, t_max) = series.time_extent()?;
        let max_price = series.max_price()?;
        let plot = PlotRect::new(opts.viewport, &opts.insets);
        let x = TimeScale::new((t_min, t_max), (plot.left, plot.right));
        let headroom = f64::from(plot.bottom) / 3.0;
        let y = LinearScale::new((0.0, max_price + headroom), (plot.bottom, plot.top)).nice(10);
        Some(Self { series, x, y, plot })
    }

    /// Screen position of a record under this context's scales.
    pub fn project(&self, point: &DataPoint) -> (f32, f32) {
        (self.x.to_px(point.time_ms()), self.y.to_px(point.price))
    }

    /// Record nearest in time to the pointer's x pixel.
    pub fn locate(&self, pointer_x: f32) -> Option<Located> {
        let t0 = self.x.from_px(pointer_x);
        let index = nearest_index(self.series.points(), t0, DataPoint::time_ms)?;
        let point = *self.series.get(index)?;
        let (screen_x, screen_y) = self.project(&point);
        Some(Located { index, point, screen_x, screen_y })
    }
}

#[cfg(test)]
mod tests {
    use super::nearest_index;

    fn t(v: &f64) -> f64 { *v }

    #[test]
    fn empty_has_no_nearest() {
        let v: [f64; 0] = [];
        assert_eq!(nearest_index(&v, 3.0, t), None);
    }

    #[test]
    fn exact_hit_returns_that_item() {
        let v = [1.0, 2.0, 3.0];
        assert_eq!(nearest_index(&v, 2.0, t), Some(1));
        assert_eq!(nearest_index(&v, 1.0, t), Some(0));
        assert_eq!(nearest_index(&v, 3.0, t), Some(2));
    }

    #[test]
    fn nan_time_still_yields_an_index() {
        let v = [1.0, 2.0];
        assert!(nearest_index(&v, f64::NAN, t).is_some());
    }
}
