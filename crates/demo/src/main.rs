// File: crates/demo/src/main.rs
// Summary: Demo loads a daily closing-price series (file or endpoint) and renders the chart to SVG/PNG.

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use price_chart_core::fetch::parse_payload;
use price_chart_core::series::parse_date_key;
use price_chart_core::{
    theme, BpiClient, LoadState, PointerEvent, PriceChart, RenderOptions, Series, SeriesLoad, Viewport,
    BPI_HISTORICAL_CLOSE_URL,
};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, PartialEq)]
struct Args {
    input: Option<PathBuf>,
    endpoint: String,
    width: u32,
    height: u32,
    theme: String,
    pointer_x: Option<f32>,
    out: PathBuf,
}

impl Default for Args {
    fn default() -> Self {
        let viewport = Viewport::default();
        Self {
            input: None,
            endpoint: BPI_HISTORICAL_CLOSE_URL.to_string(),
            width: viewport.width,
            height: viewport.height,
            theme: "mint".to_string(),
            pointer_x: None,
            out: PathBuf::from("target/out"),
        }
    }
}

const USAGE: &str = "usage: price-chart-demo [--input FILE.json|FILE.csv] [--endpoint URL] \
[--width PX] [--height PX] [--theme mint|dark|light] [--pointer-x PX] [--out DIR]";

fn parse_args(raw: impl IntoIterator<Item = String>) -> Result<Args> {
    let mut args = Args::default();
    let mut it = raw.into_iter();
    while let Some(flag) = it.next() {
        let mut value = || it.next().with_context(|| format!("missing value for {flag}\n{USAGE}"));
        match flag.as_str() {
            "--input" => args.input = Some(PathBuf::from(value()?)),
            "--endpoint" => args.endpoint = value()?,
            "--width" => args.width = value()?.parse().context("--width expects an integer")?,
            "--height" => args.height = value()?.parse().context("--height expects an integer")?,
            "--theme" => args.theme = value()?,
            "--pointer-x" => args.pointer_x = Some(value()?.parse().context("--pointer-x expects a number")?),
            "--out" => args.out = PathBuf::from(value()?),
            other => bail!("unknown argument '{other}'\n{USAGE}"),
        }
    }
    Ok(args)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "price_chart_demo=debug,price_chart_core=debug,info".into());
    tracing_subscriber::fmt().with_env_filter(filter).with_target(true).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let args = parse_args(std::env::args().skip(1))?;
    debug!(?args, "parsed arguments");

    let opts = RenderOptions {
        viewport: Viewport::new(args.width, args.height),
        theme: theme::find(&args.theme),
        ..RenderOptions::default()
    };
    let mut chart = PriceChart::new(opts);

    let outcome = match &args.input {
        Some(path) => Ok(load_file(path)?),
        None => {
            info!(endpoint = %args.endpoint, "fetching price history");
            SeriesLoad::fetch(BpiClient::with_endpoint(args.endpoint.clone())).wait().await
        }
    };
    chart.apply_load(outcome);

    match chart.load_state() {
        LoadState::Ready(series) => info!(points = series.len(), "series loaded"),
        LoadState::Failed(msg) => bail!("price series unavailable: {msg}"),
        LoadState::Pending => bail!("price series never arrived"),
    }

    if let Some(x) = args.pointer_x {
        chart.handle_pointer(PointerEvent::Move { x, y: 0.0 });
        match chart.tooltip().data_point() {
            Some(p) => info!(date = %p.date, price = p.price, "pointer located nearest point"),
            None => warn!(x, "pointer located nothing"),
        }
    }

    std::fs::create_dir_all(&args.out).with_context(|| format!("creating {}", args.out.display()))?;
    let stem = output_stem(args.input.as_deref());

    let svg_path = args.out.join(format!("{stem}.svg"));
    if let Some(svg) = chart.render_svg() {
        std::fs::write(&svg_path, svg).with_context(|| format!("writing {}", svg_path.display()))?;
        println!("Wrote {}", svg_path.display());
    }
    let png_path = args.out.join(format!("{stem}.png"));
    if chart.render_to_png(&png_path)? {
        println!("Wrote {}", png_path.display());
    }
    Ok(())
}

/// Output file stem, e.g. `price_chart_bpi_close`.
fn output_stem(input: Option<&Path>) -> String {
    let stem = input
        .and_then(|p| p.file_stem())
        .and_then(|s| s.to_str())
        .unwrap_or("remote");
    format!("price_chart_{stem}")
}

/// Load a series from a `.json` payload or a `date,price` CSV.
fn load_file(path: &Path) -> Result<Series> {
    let ext = path.extension().and_then(|e| e.to_str()).map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("json") => {
            let body = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            Ok(parse_payload(&body)?)
        }
        Some("csv") => load_close_csv(path),
        _ => bail!("unsupported input '{}': expected .json or .csv", path.display()),
    }
}

fn load_close_csv(path: &Path) -> Result<Series> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    read_close_rows(&mut rdr)
}

fn read_close_rows<R: std::io::Read>(rdr: &mut csv::Reader<R>) -> Result<Series> {
    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    debug!(?headers, "csv headers");

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_date = idx(&["date", "day", "time"]).context("no date column")?;
    let i_price = idx(&["price", "close", "adj_close", "close_price"]).context("no price column")?;

    let mut rows: Vec<(NaiveDate, f64)> = Vec::new();
    for (line, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let (Some(d), Some(p)) = (rec.get(i_date), rec.get(i_price)) else {
            warn!(line, "short csv row skipped");
            continue;
        };
        let date = parse_date_key(d)?;
        let price: f64 = p.parse().with_context(|| format!("row {line}: bad price '{p}'"))?;
        rows.push((date, price));
    }
    Ok(Series::from_rows(rows)?)
}
