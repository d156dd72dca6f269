//! DTW and pattern search benchmarks

use std::hint::black_box;
use std::time::Instant;

use pattern_api::MatcherConfig;
use pattern_core::{dtw_distance, DtwMatcher};

fn generate_prices(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let t = i as f64;
            100.0 + t * 0.05 + 8.0 * (t * 0.13).sin() + 3.0 * (t * 0.71).cos()
        })
        .collect()
}

fn bench<F>(name: &str, iterations: u32, mut f: F)
where
    F: FnMut(),
{
    // Warmup
    for _ in 0..3 {
        f();
    }

    let start = Instant::now();
    for _ in 0..iterations {
        f();
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations;

    println!(
        "{:34} {:>10.2?} total, {:>10.2?}/iter ({} iters)",
        name, elapsed, per_iter, iterations
    );
}

fn main() {
    println!("=== DTW Pattern Matching Benchmarks ===\n");

    let a = generate_prices(50);
    let b = generate_prices(53);

    println!("--- dtw_distance (50 x 53) ---");
    bench("unconstrained", 10_000, || {
        black_box(dtw_distance(black_box(&a), black_box(&b), None));
    });
    bench("band 12", 10_000, || {
        black_box(dtw_distance(black_box(&a), black_box(&b), Some(12)));
    });
    bench("band 3", 10_000, || {
        black_box(dtw_distance(black_box(&a), black_box(&b), Some(3)));
    });

    println!("\n--- find_patterns (8 seed patterns) ---");
    let matcher = DtwMatcher::default();
    for n in [250, 1_000] {
        let prices = generate_prices(n);
        bench(&format!("default windows, {} bars", n), 20, || {
            black_box(matcher.find_patterns(black_box(&prices)));
        });
    }

    let narrow = DtwMatcher::new(MatcherConfig::new(vec![20], 0.7)).unwrap();
    let prices = generate_prices(1_000);
    bench("window 20 only, 1000 bars", 50, || {
        black_box(narrow.find_patterns(black_box(&prices)));
    });
}
