//! Basic example demonstrating DTW chart pattern matching
//!
//! Run with: cargo run --example basic -p market-pattern

use pattern::{DtwMatcher, MatcherConfig, Outcome, PatternKind};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== market-pattern Basic Example ===\n");

    // Slide, bounce, retest, breakout.
    let mut prices: Vec<f64> = (0..10).map(|i| 120.0 - 2.0 * i as f64).collect();
    prices.extend((0..5).map(|i| 100.0 + 2.0 * i as f64));
    prices.extend((0..5).map(|i| 108.0 - 2.0 * i as f64));
    prices.extend((0..12).map(|i| 100.0 + 2.5 * i as f64));

    // 1. Full library search
    println!("1. Library search over {} bars", prices.len());
    let mut matcher = DtwMatcher::new(MatcherConfig::new(vec![15, 20, 30], 0.75))?;
    for m in matcher.find_patterns(&prices) {
        println!(
            "   {:<28} bars {:>2}..{:<2} similarity={:.3} dtw={:.2} ({})",
            m.pattern_name, m.start, m.end, m.similarity, m.dtw_distance, m.expected_outcome
        );
    }

    // 2. Single pattern
    println!("\n2. Best double bottom");
    match matcher.match_single_pattern(&prices, PatternKind::DoubleBottom) {
        Some(m) => println!("   bars {}..{} similarity={:.3}", m.start, m.end, m.similarity),
        None => println!("   none"),
    }

    // 3. Custom pattern
    println!("\n3. Custom pattern");
    let custom = matcher.create_custom_pattern(
        "V Recovery",
        &[10.0, 8.0, 6.0, 4.0, 2.0, 4.0, 6.0, 8.0, 10.0],
        Outcome::Bullish,
        "",
    )?;
    println!("   Registered '{}': {}", custom.name, custom.description);
    if let Some(m) = matcher.match_single_pattern(&prices, PatternKind::Custom) {
        println!("   bars {}..{} similarity={:.3}", m.start, m.end, m.similarity);
    }

    Ok(())
}
