// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the price chart model, locator, and renderers.

pub mod chart;
pub mod error;
pub mod fetch;
pub mod format;
#[cfg(not(target_arch = "wasm32"))]
pub mod loader;
pub mod locator;
pub mod raster;
pub mod scale;
pub mod scene;
pub mod series;
pub mod svg;
pub mod text;
pub mod theme;
pub mod tooltip;
pub mod types;

pub use chart::{LoadState, PriceChart, RenderOptions};
pub use error::ChartError;
pub use fetch::{BpiClient, BPI_HISTORICAL_CLOSE_URL};
#[cfg(not(target_arch = "wasm32"))]
pub use loader::SeriesLoad;
pub use locator::{nearest_index, ChartContext, Located};
pub use scale::{LinearScale, ScaleTransform, TimeScale};
pub use scene::{Primitive, Scene};
pub use series::{DataPoint, Series};
pub use theme::Theme;
pub use tooltip::{PointerEvent, TooltipState};
pub use types::{Insets, Viewport};
