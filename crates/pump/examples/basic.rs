//! Basic example demonstrating pump-and-dump detection
//!
//! Run with: cargo run --example basic -p market-pump

use pump::{MarketMetrics, PumpDetector, SocialMetrics};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== market-pump Basic Example ===\n");

    let mut detector = PumpDetector::default();
    detector.update_baseline("ZZZZ", 12.0, 800_000.0);

    // 1. Snapshot analysis
    let social = SocialMetrics::new("ZZZZ", 95, 14, 11.0)
        .with_keywords(["buruan beli", "10x", "to the moon"])
        .with_sentiment(0.9);
    let market = MarketMetrics::new("ZZZZ", 184.0, 0.28, 7_200_000.0, 800_000.0);
    social.validate()?;
    market.validate()?;

    println!("1. Snapshot analysis");
    match detector.analyze(&social, &market, None) {
        Some(alert) => {
            println!("   {}", alert.message);
            println!("   Confidence: {:.2}", alert.confidence);
            println!("   Action: {}", alert.recommended_action);
            for signal in &alert.signals {
                println!("   - {:<18} {:.2}  {}", signal.kind, signal.confidence, signal.evidence);
            }
        }
        None => println!("   No alert"),
    }

    // 2. Message triage
    println!("\n2. Message triage");
    for text in [
        "Mari borong ZZZZ, pasti naik 1000%!",
        "ZZZZ quarterly earnings beat analyst estimates",
    ] {
        let screen = detector.check_text_for_pump(text);
        println!("   suspicious={:<5} matched={:?}  \"{}\"", screen.suspicious, screen.matched, text);
    }

    Ok(())
}
