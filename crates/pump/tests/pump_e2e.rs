//! End-to-end tests for market-pump
//!
//! Screens a small watchlist the way a daily job would: refresh
//! baselines, analyze every snapshot, keep the alerts.

use pump::{AlertSeverity, MarketMetrics, PumpConfig, PumpDetector, SocialMetrics};

#[test]
fn e2e_watchlist_screening() {
    let mut detector = PumpDetector::new(PumpConfig::default()).unwrap();
    for (symbol, social_avg) in [("BBCA", 120.0), ("GOTO", 60.0), ("ZZZZ", 4.0)] {
        detector.update_baseline(symbol, social_avg, 1_000_000.0);
    }

    let snapshots = vec![
        (
            SocialMetrics::new("BBCA", 150, 120, 900.0).with_keywords(["dividend", "analyst"]),
            MarketMetrics::new("BBCA", 9_800.0, 0.01, 1_100_000.0, 1_000_000.0),
        ),
        (
            SocialMetrics::new("GOTO", 90, 70, 500.0).with_keywords(["quarterly"]),
            MarketMetrics::new("GOTO", 70.0, 0.06, 2_000_000.0, 1_000_000.0),
        ),
        (
            SocialMetrics::new("ZZZZ", 80, 8, 9.0).with_keywords(["mari borong", "10x", "secret"]),
            MarketMetrics::new("ZZZZ", 55.0, 0.34, 12_000_000.0, 1_000_000.0),
        ),
    ];

    let alerts: Vec<_> = snapshots
        .iter()
        .filter_map(|(social, market)| detector.analyze(social, market, None))
        .collect();

    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].symbol, "ZZZZ");
    assert!(alerts[0].severity >= AlertSeverity::High);
    assert!(alerts[0].message.starts_with("Potential pump-and-dump detected for ZZZZ."));
}

#[test]
fn e2e_snapshot_from_json() {
    let social: SocialMetrics = serde_json::from_str(
        r#"{
            "symbol": "ZZZZ",
            "post_count": 50,
            "unique_authors": 50,
            "avg_author_age_days": 400.0,
            "sentiment_score": 0.8
        }"#,
    )
    .unwrap();
    let market: MarketMetrics = serde_json::from_str(
        r#"{
            "symbol": "ZZZZ",
            "current_price": 125.0,
            "price_change_pct": 0.25,
            "volume": 10000000.0,
            "avg_volume": 1000000.0,
            "volume_ratio": 10.0
        }"#,
    )
    .unwrap();
    social.validate().unwrap();
    market.validate().unwrap();

    let detector = PumpDetector::default();
    let alert = detector.analyze(&social, &market, Some(10.0)).unwrap();
    assert!(matches!(alert.severity, AlertSeverity::High | AlertSeverity::Critical));
}

#[test]
fn e2e_message_triage() {
    let detector = PumpDetector::default();
    let messages = [
        "Insider info: saham ini pasti naik minggu depan, no risk!",
        "Annual report released, revenue up 12% year over year",
        "Rocket 🚀 to the moon",
    ];

    let flagged: Vec<_> = messages
        .iter()
        .map(|m| detector.check_text_for_pump(m))
        .filter(|s| s.suspicious)
        .collect();
    assert_eq!(flagged.len(), 2);
    assert_eq!(flagged[0].matched, vec!["pasti naik", "no risk", "insider info"]);
}
