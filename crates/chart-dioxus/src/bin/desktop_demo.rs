// File: crates/chart-dioxus/src/bin/desktop_demo.rs
// Purpose: Minimal launcher for the Dioxus desktop PriceChartView demo.

#[cfg(feature = "desktop")]
fn main() {
    if let Err(e) = price_chart_dioxus::ui::run_demo_ui() {
        eprintln!("price-chart-dioxus demo error: {e}");
    }
}

#[cfg(not(feature = "desktop"))]
fn main() {
    if let Err(e) = price_chart_dioxus::run_demo_ui() {
        eprintln!("{e}");
    }
}
