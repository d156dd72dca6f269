//! Integration tests for market-anomaly

use anomaly::{
    AnomalyConfig, AnomalyError, AnomalyKind, Bars, IsolationForest, IsolationForestConfig,
    MarketAnomalyDetector, OutlierModel,
};

/// 100 calm bars with a shock on bar 70: +15% close, 12% gap, 10x volume.
fn shocked_bars() -> Bars {
    let mut bars = Bars::default();
    let mut prev_close = 100.0;
    for i in 0..100 {
        let t = i as f64;
        let (open, close, volume) = if i == 70 {
            (prev_close * 1.12, prev_close * 1.15, 10_000.0)
        } else {
            let close = 100.0 + 2.0 * (t * 0.7).sin();
            (prev_close * (1.0 + 0.001 * (t * 1.3).sin()), close, 1_000.0 + 100.0 * (t * 1.1).sin())
        };
        let high = open.max(close) + 0.5;
        let low = open.min(close) - 0.5;
        bars.push(anomaly::Bar::new(open, high, low, close, volume));
        prev_close = close;
    }
    bars
}

fn detector() -> MarketAnomalyDetector {
    MarketAnomalyDetector::new(AnomalyConfig::default()).unwrap()
}

#[test]
fn test_shock_bar_trips_every_detector() {
    let anomalies = detector().detect_bars("BBRI", &shocked_bars());

    for kind in [
        AnomalyKind::PriceSpike,
        AnomalyKind::VolumeSpike,
        AnomalyKind::VolatilityExplosion,
        AnomalyKind::GapAnomaly,
    ] {
        assert!(
            anomalies.iter().any(|a| a.kind == kind && a.index == 70),
            "missing {} at bar 70",
            kind
        );
    }
}

#[test]
fn test_reported_anomalies_meet_min_severity() {
    let config = AnomalyConfig::default().with_min_severity(0.9);
    let detector = MarketAnomalyDetector::new(config).unwrap();
    let anomalies = detector.detect_bars("BBRI", &shocked_bars());

    assert!(!anomalies.is_empty());
    for anomaly in &anomalies {
        assert!(anomaly.severity >= 0.9);
        assert!(anomaly.severity <= 1.0);
        assert_eq!(anomaly.symbol, "BBRI");
        assert!(anomaly.is_outside_expected());
    }
}

#[test]
fn test_calm_bars_have_no_anomalies() {
    let bars = shocked_bars();
    let calm = Bars::new(
        bars.open[..70].to_vec(),
        bars.high[..70].to_vec(),
        bars.low[..70].to_vec(),
        bars.close[..70].to_vec(),
        bars.volume[..70].to_vec(),
    );
    assert!(detector().detect_bars("BBRI", &calm).is_empty());
}

#[test]
fn test_gap_description_has_direction() {
    let bars = shocked_bars();
    let gaps = detector().detect_gap_anomalies("BBRI", &bars.open, &bars.close);
    let shock = gaps.iter().find(|a| a.index == 70).unwrap();
    assert!(shock.description.starts_with("Gap up "));
    assert!(shock.z_score > 0.0);
}

#[test]
fn test_anomaly_score_ranks_shock_higher() {
    let bars = shocked_bars();
    let d = detector();

    let calm = d.compute_anomaly_score(&bars.close[..69], &bars.volume[..69]);
    let shocked = d.compute_anomaly_score(&bars.close[..72], &bars.volume[..72]);

    assert!((0.0..=1.0).contains(&calm));
    assert!((0.0..=1.0).contains(&shocked));
    assert!(shocked > calm);
}

#[test]
fn test_isolation_forest_flags_shock_bar() {
    let bars = shocked_bars();
    let forest = IsolationForest::new(IsolationForestConfig::new(100, 0.02)).unwrap();
    let mut detector = MarketAnomalyDetector::with_outlier_model(AnomalyConfig::default(), forest)
        .unwrap();

    detector.fit_outliers(&bars).unwrap();
    assert!(detector.outlier_model().is_fitted());

    let verdicts = detector.outlier_verdicts(&bars);
    assert_eq!(verdicts.len(), bars.len() - 1);
    // Row k describes bar k + 1.
    assert!(verdicts[69].is_outlier());
}

#[test]
fn test_fit_outliers_on_single_bar_fails() {
    let mut detector =
        MarketAnomalyDetector::with_outlier_model(AnomalyConfig::default(), IsolationForest::default())
            .unwrap();
    let bars = Bars::new(vec![1.0], vec![1.0], vec![1.0], vec![1.0], vec![1.0]);
    assert!(matches!(
        detector.fit_outliers(&bars),
        Err(AnomalyError::InsufficientData { .. })
    ));
}

#[test]
fn test_anomaly_serializes_snake_case_kind() {
    let anomalies = detector().detect_bars("BBRI", &shocked_bars());
    let value = serde_json::to_value(&anomalies[0]).unwrap();
    let kind = value["kind"].as_str().unwrap();
    assert!(["price_spike", "volume_spike", "volatility_explosion", "gap_anomaly"].contains(&kind));
}
