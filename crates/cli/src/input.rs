//! File loaders and result output.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anomaly::{Bar, Bars};
use pump::{Baseline, MarketMetrics, SocialMetrics};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub type CliResult<T> = std::result::Result<T, String>;

/// Load OHLCV bars from a CSV file with `open,high,low,close,volume` headers.
///
/// Extra columns are ignored; a malformed row is an error rather than
/// being skipped, since skipping would misalign the bars.
pub fn load_bars(path: &Path) -> CliResult<Bars> {
    let file = File::open(path).map_err(|e| format!("Failed to open file: {}", e))?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(BufReader::new(file));

    let mut rows = Vec::new();
    for (i, result) in reader.deserialize::<Bar>().enumerate() {
        let bar = result.map_err(|e| format!("Failed to read bar {}: {}", i + 1, e))?;
        rows.push(bar);
    }

    if rows.is_empty() {
        return Err("No bars found in input".to_string());
    }
    Ok(Bars::from_rows(&rows))
}

/// Load one numeric column from a CSV file.
///
/// `column` is a header name or a zero-based index. Non-numeric cells are
/// skipped.
pub fn load_column(path: &Path, column: &str) -> CliResult<Vec<f64>> {
    let file = File::open(path).map_err(|e| format!("Failed to open file: {}", e))?;
    let mut reader = csv::Reader::from_reader(BufReader::new(file));

    let headers = reader
        .headers()
        .map_err(|e| format!("Failed to read headers: {}", e))?
        .clone();

    let col_idx = match column.parse::<usize>() {
        Ok(idx) => idx,
        Err(_) => headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(column))
            .ok_or_else(|| format!("Column '{}' not found", column))?,
    };

    let mut data = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| format!("Failed to read record: {}", e))?;
        if let Some(value) = record.get(col_idx) {
            if let Ok(num) = value.trim().parse::<f64>() {
                data.push(num);
            }
        }
    }

    if data.is_empty() {
        return Err("No numeric data found in the specified column".to_string());
    }
    Ok(data)
}

/// Deserialize a JSON file.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> CliResult<T> {
    let file = File::open(path).map_err(|e| format!("Failed to open file: {}", e))?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| format!("Failed to parse JSON {:?}: {}", path, e))
}

/// Load a config file, or the defaults when no path is given.
pub fn load_config<T: DeserializeOwned + Default>(path: Option<&Path>) -> CliResult<T> {
    match path {
        Some(path) => load_json(path),
        None => Ok(T::default()),
    }
}

/// One symbol's social and market readings for the pump detector.
#[derive(Debug, Clone, Deserialize)]
pub struct Snapshot {
    pub social: SocialMetrics,
    pub market: MarketMetrics,
    #[serde(default)]
    pub historical_social: Option<f64>,
    /// Seeds the detector's baseline store before analysis.
    #[serde(default)]
    pub baseline: Option<Baseline>,
}

impl Snapshot {
    pub fn load(path: &Path) -> CliResult<Self> {
        let snapshot: Snapshot = load_json(path)?;
        if snapshot.social.symbol != snapshot.market.symbol {
            return Err(format!(
                "Symbol mismatch: social '{}' vs market '{}'",
                snapshot.social.symbol, snapshot.market.symbol
            ));
        }
        snapshot
            .social
            .validate()
            .map_err(|e| format!("Invalid social metrics: {}", e))?;
        snapshot
            .market
            .validate()
            .map_err(|e| format!("Invalid market metrics: {}", e))?;
        Ok(snapshot)
    }
}

/// Pretty-print `value` to `output`, or to stdout.
pub fn write_json<T: Serialize>(value: &T, output: Option<&Path>) -> CliResult<()> {
    match output {
        Some(path) => {
            let mut file =
                File::create(path).map_err(|e| format!("Failed to create output: {}", e))?;
            serde_json::to_writer_pretty(&mut file, value)
                .map_err(|e| format!("Failed to write JSON: {}", e))?;
            tracing::info!(?path, "results written");
        }
        None => {
            let json = serde_json::to_string_pretty(value)
                .map_err(|e| format!("Failed to serialize JSON: {}", e))?;
            println!("{}", json);
        }
    }
    Ok(())
}
