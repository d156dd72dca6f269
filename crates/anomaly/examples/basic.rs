//! Basic example demonstrating market anomaly detection
//!
//! Run with: cargo run --example basic -p market-anomaly

use anomaly::{
    AnomalyConfig, Bar, Bars, IsolationForest, IsolationForestConfig, MarketAnomalyDetector,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== market-anomaly Basic Example ===\n");

    // 90 quiet bars, then a news day on bar 80.
    let rows: Vec<Bar> = (0..90)
        .map(|i| {
            let t = i as f64;
            let close = 1_000.0 + 15.0 * (t * 0.6).sin();
            if i == 80 {
                Bar::new(close * 1.06, close * 1.12, close * 1.05, close * 1.10, 250_000.0)
            } else {
                Bar::new(close - 2.0, close + 6.0, close - 6.0, close, 40_000.0 + 3_000.0 * (t * 1.3).cos())
            }
        })
        .collect();
    let bars = Bars::from_rows(&rows);

    // 1. Rolling z-score detectors
    println!("1. Rolling z-score detectors (lookback=60)");
    let detector = MarketAnomalyDetector::new(AnomalyConfig::default())?;
    for anomaly in detector.detect_bars("BBCA", &bars) {
        println!(
            "   bar {:>3} {:<22} z={:>7.2} severity={:.2}  {}",
            anomaly.index, anomaly.kind, anomaly.z_score, anomaly.severity, anomaly.description
        );
    }

    // 2. Aggregate score
    let score = detector.compute_anomaly_score(&bars.close, &bars.volume);
    println!("\n2. Aggregate anomaly score: {:.3}", score);

    // 3. Isolation forest
    println!("\n3. Isolation forest over bar features");
    let forest = IsolationForest::new(IsolationForestConfig::new(100, 0.02))?;
    let mut detector = MarketAnomalyDetector::with_outlier_model(AnomalyConfig::default(), forest)?;
    detector.fit_outliers(&bars)?;
    let flagged: Vec<usize> = detector
        .outlier_verdicts(&bars)
        .iter()
        .enumerate()
        .filter(|(_, v)| v.is_outlier())
        .map(|(k, _)| k + 1)
        .collect();
    println!("   Outlier bars: {:?}", flagged);

    Ok(())
}
