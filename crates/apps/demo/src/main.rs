use std::time::Duration;

use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use protocol::{Query, QueryKind};
use sources::{FixtureSource, RemoteSource, ResultSource, Source};
use view::{FitRequest, REVEAL_INTERVAL_MS, RowText, SearchSession};

/// Runs one spatial query end to end and prints the results as they
/// are revealed.
#[derive(Debug, Parser)]
#[command(name = "demo")]
struct Args {
    /// Free-text spatial query.
    #[arg(long, default_value = "nearest river to 28.61, 77.21")]
    query: String,

    /// Query category.
    #[arg(long, value_enum, default_value_t = KindArg::General)]
    kind: KindArg,

    /// Search radius in kilometers.
    #[arg(long, default_value_t = 10.0)]
    radius_km: f64,

    /// Endpoint of a backing query service. Canned fixtures when absent.
    #[arg(long)]
    endpoint: Option<String>,
}

#[derive(Debug, Copy, Clone, ValueEnum)]
enum KindArg {
    General,
    LandUse,
    ClimateWeather,
    Population,
    Infrastructure,
}

impl From<KindArg> for QueryKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::General => QueryKind::General,
            KindArg::LandUse => QueryKind::LandUse,
            KindArg::ClimateWeather => QueryKind::ClimateWeather,
            KindArg::Population => QueryKind::Population,
            KindArg::Infrastructure => QueryKind::Infrastructure,
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = run(Args::parse()).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), String> {
    let Some(query) = Query::new(args.query, args.kind.into(), args.radius_km) else {
        // Empty submits are a silent no-op, matching the form contract.
        return Ok(());
    };

    let source = match args.endpoint {
        Some(endpoint) => Source::Remote(RemoteSource::new(endpoint)),
        None => Source::Fixture(FixtureSource),
    };

    let mut session = SearchSession::new();
    let id = session.begin();
    let outcome = source.fetch(&query).await;
    let generation = session
        .apply(id, outcome)
        .ok_or("stale response discarded")?;

    match session.fit_request() {
        Some(fit) => info!("viewport fit: {}", describe_fit(&fit)),
        None => info!("viewport unchanged (no geometry)"),
    }

    // The interval lives exactly as long as the reveal sequence.
    let mut ticker = tokio::time::interval(Duration::from_millis(REVEAL_INTERVAL_MS));
    ticker.tick().await; // the first tick fires immediately
    while !session.sequencer().is_done() {
        ticker.tick().await;
        if let Some(prefix) = session.advance(generation) {
            if let Some(item) = prefix.last() {
                println!("{}", render_line(&RowText::from_item(item)));
            }
        }
    }
    drop(ticker);

    if session.displayed().is_empty() {
        println!("No results yet.");
    }
    Ok(())
}

fn describe_fit(fit: &FitRequest) -> String {
    let sw = fit.bounds.south_west();
    let ne = fit.bounds.north_east();
    format!(
        "sw=({:.4}, {:.4}) ne=({:.4}, {:.4}) padding={}px",
        sw.lat, sw.lon, ne.lat, ne.lon, fit.padding_px
    )
}

fn render_line(row: &RowText) -> String {
    let mut line = format!("[{}] {}", row.confidence, row.title);
    if let Some(annotation) = &row.annotation {
        line.push_str(&format!(" ({annotation})"));
    }
    if let Some(distance) = &row.distance {
        line.push_str(&format!(" at {distance}"));
    }
    if !row.description.is_empty() {
        line.push_str(&format!("\n    {}", row.description));
    }
    line
}
