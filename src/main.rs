//! TransitFares - Fare report driver
//!
//! Prices one trip under every transport mode, the same trip at night, and
//! optionally the base fare with commission and discount layered on top.

use anyhow::{Context, Result};
use clap::Parser;
use rust_decimal::Decimal;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use transit_fares::config::load_config;
use transit_fares::{build_standard_report, ReportRequest, TransportMode, Trip};

/// CLI arguments for the application
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "fares.toml")]
    config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "FARE_LOG_LEVEL")]
    log_level: Option<String>,

    /// Transport mode to price; repeat for several (default: all)
    #[arg(short, long, value_enum)]
    mode: Vec<TransportMode>,

    /// Trip distance in kilometres
    #[arg(long)]
    distance: Option<Decimal>,

    /// Number of metro zones
    #[arg(long)]
    zones: Option<u32>,

    /// Time of day: "day" or "night"
    #[arg(long)]
    time_of_day: Option<String>,

    /// Fixed commission added to the base fare
    #[arg(long)]
    commission: Option<Decimal>,

    /// Discount percentage (0-100) applied on top of the commission
    #[arg(long)]
    discount: Option<Decimal>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    let mut config = load_config(Some(&args.config))
        .with_context(|| format!("failed to load configuration from {}", args.config))?;

    // Initialize logging; the report owns stdout
    let level = parse_level(args.log_level.as_deref().unwrap_or(&config.settings.log_level));
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting fare report");
    info!("Configuration file: {}", args.config);

    // CLI flags win over configuration
    if let Some(distance) = args.distance {
        config.trip.distance_km = distance;
    }
    if let Some(zones) = args.zones {
        config.trip.zones = zones;
    }
    if let Some(time_of_day) = args.time_of_day {
        config.trip.time_of_day = time_of_day;
    }
    if args.commission.is_some() {
        config.adjustments.commission = args.commission;
    }
    if args.discount.is_some() {
        config.adjustments.discount_percent = args.discount;
    }
    if !args.mode.is_empty() {
        config.settings.modes = args.mode;
    }

    let trip = Trip::try_from(&config.trip).context("invalid trip")?;
    let request = ReportRequest {
        trip,
        modes: config.settings.modes,
        commission: config.adjustments.commission,
        discount_percent: config.adjustments.discount_percent,
    };

    let report = build_standard_report(&request)?;

    if args.json || config.settings.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{report}");
    }

    Ok(())
}
