//! signals - command-line front end for the market signal detectors.
//!
//! Runs anomaly detection over OHLCV bars, DTW pattern search over a
//! price column, and pump-and-dump analysis over a JSON snapshot. All
//! results are printed as JSON.

mod input;

use std::path::{Path, PathBuf};

use anomaly::{AnomalyConfig, IsolationForest, IsolationForestConfig, MarketAnomalyDetector};
use clap::{Parser, Subcommand};
use pattern::{DtwMatcher, MatcherConfig};
use pump::{PumpConfig, PumpDetector};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use input::{load_bars, load_column, load_config, write_json, CliResult, Snapshot};

#[derive(Parser)]
#[command(name = "signals")]
#[command(author, version, about = "Market anomaly, pump-and-dump and chart pattern detection")]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect price, volume, volatility and gap anomalies in OHLCV bars
    Anomalies {
        /// CSV file with open,high,low,close,volume columns
        #[arg(short, long)]
        input: PathBuf,

        /// Symbol reported on each anomaly
        #[arg(short, long)]
        symbol: String,

        /// JSON anomaly config (missing fields use defaults)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Also fit an isolation forest and report outlier bars
        #[arg(long)]
        outliers: bool,

        /// Output file for results (JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Search a price series for chart patterns
    Patterns {
        /// CSV file with price data
        #[arg(short, long)]
        input: PathBuf,

        /// Column name or index
        #[arg(long, default_value = "close")]
        column: String,

        /// Comma-separated window sizes
        #[arg(short, long, value_delimiter = ',')]
        windows: Option<Vec<usize>>,

        /// Minimum similarity (0-1)
        #[arg(short, long)]
        threshold: Option<f64>,

        /// Only search for the named library pattern
        #[arg(short, long)]
        pattern: Option<String>,

        /// Output file for results (JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Analyze a social/market snapshot for pump-and-dump activity
    Pump {
        /// JSON snapshot: {social, market, historical_social?, baseline?}
        #[arg(short, long)]
        input: PathBuf,

        /// JSON pump config (missing fields use defaults)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output file for results (JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Screen a piece of text for pump language
    ScreenText {
        text: String,

        /// JSON pump config supplying the keyword list
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "signals=debug,anomaly_core=debug,pump_core=debug,pattern_core=debug"
    } else {
        "signals=info,anomaly_core=info,pump_core=info,pattern_core=info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Anomalies {
            input,
            symbol,
            config,
            outliers,
            output,
        } => run_anomalies(&input, &symbol, config.as_deref(), outliers, output.as_deref()),
        Commands::Patterns {
            input,
            column,
            windows,
            threshold,
            pattern,
            output,
        } => run_patterns(
            &input,
            &column,
            windows,
            threshold,
            pattern.as_deref(),
            output.as_deref(),
        ),
        Commands::Pump {
            input,
            config,
            output,
        } => run_pump(&input, config.as_deref(), output.as_deref()),
        Commands::ScreenText { text, config } => run_screen_text(&text, config.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_anomalies(
    input: &Path,
    symbol: &str,
    config: Option<&Path>,
    outliers: bool,
    output: Option<&Path>,
) -> CliResult<()> {
    let bars = load_bars(input)?;
    let config: AnomalyConfig = load_config(config)?;
    info!(symbol, bars = bars.len(), "running anomaly detection");

    let forest = IsolationForest::new(IsolationForestConfig::default())
        .map_err(|e| format!("Failed to create outlier model: {}", e))?;
    let mut detector = MarketAnomalyDetector::with_outlier_model(config, forest)
        .map_err(|e| format!("Invalid anomaly config: {}", e))?;

    let anomalies = detector.detect_bars(symbol, &bars);
    let score = detector.compute_anomaly_score(&bars.close, &bars.volume);

    let mut result = serde_json::json!({
        "symbol": symbol,
        "bars": bars.len(),
        "score": score,
        "anomalies": anomalies,
    });

    if outliers {
        detector
            .fit_outliers(&bars)
            .map_err(|e| format!("Failed to fit outlier model: {}", e))?;
        let flagged: Vec<usize> = detector
            .outlier_verdicts(&bars)
            .iter()
            .enumerate()
            .filter(|(_, v)| v.is_outlier())
            .map(|(k, _)| k + 1)
            .collect();
        result["outliers"] = serde_json::json!(flagged);
    }

    info!(symbol, anomalies = anomalies.len(), score, "anomaly detection complete");
    write_json(&result, output)
}

fn run_patterns(
    input: &Path,
    column: &str,
    windows: Option<Vec<usize>>,
    threshold: Option<f64>,
    pattern: Option<&str>,
    output: Option<&Path>,
) -> CliResult<()> {
    let prices = load_column(input, column)?;

    let mut config = MatcherConfig::default();
    if let Some(windows) = windows {
        config = config.with_window_sizes(windows);
    }
    if let Some(threshold) = threshold {
        config = config.with_similarity_threshold(threshold);
    }
    let matcher = DtwMatcher::new(config)
        .map_err(|e| format!("Invalid matcher config: {}", e))?;

    info!(points = prices.len(), "searching for patterns");
    let matches = match pattern {
        Some(name) => {
            let selected = matcher
                .library()
                .find(name)
                .map_err(|e| e.to_string())?
                .clone();
            matcher.find_patterns_in(&prices, &[selected])
        }
        None => matcher.find_patterns(&prices),
    };

    info!(matches = matches.len(), "pattern search complete");
    write_json(&serde_json::json!({ "matches": matches }), output)
}

fn run_pump(input: &Path, config: Option<&Path>, output: Option<&Path>) -> CliResult<()> {
    let snapshot = Snapshot::load(input)?;
    let config: PumpConfig = load_config(config)?;
    let mut detector =
        PumpDetector::new(config).map_err(|e| format!("Invalid pump config: {}", e))?;

    if let Some(baseline) = snapshot.baseline {
        detector.update_baseline(
            &snapshot.social.symbol,
            baseline.social_avg,
            baseline.volume_avg,
        );
    }

    let alert = detector.analyze(&snapshot.social, &snapshot.market, snapshot.historical_social);
    match &alert {
        Some(alert) => info!(
            symbol = %alert.symbol,
            severity = %alert.severity,
            confidence = alert.confidence,
            "pump alert raised"
        ),
        None => info!(symbol = %snapshot.social.symbol, "no pump alert"),
    }
    write_json(&alert, output)
}

fn run_screen_text(text: &str, config: Option<&Path>) -> CliResult<()> {
    let config: PumpConfig = load_config(config)?;
    let detector =
        PumpDetector::new(config).map_err(|e| format!("Invalid pump config: {}", e))?;
    let screen = detector.check_text_for_pump(text);
    write_json(&screen, None)
}
