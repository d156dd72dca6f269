//! Individual pump signal generators.
//!
//! Each generator contributes at most one signal. Confidences are clamped
//! to `[0, 1]` so custom thresholds cannot push them out of range.

use pump_api::PumpConfig;
use pump_spi::{MarketMetrics, PumpSignal, PumpSignalKind, SocialMetrics};

/// Lower-cased keyword list, kept in configuration order.
#[derive(Debug, Clone, Default)]
pub(crate) struct KeywordSet {
    keywords: Vec<String>,
}

impl KeywordSet {
    pub(crate) fn new(keywords: &[String]) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.trim().to_lowercase()).collect(),
        }
    }

    /// Exact, case-insensitive membership of an upstream keyword flag.
    pub(crate) fn contains(&self, flag: &str) -> bool {
        let flag = flag.trim().to_lowercase();
        self.keywords.iter().any(|k| *k == flag)
    }

    /// Keywords occurring as substrings of already lower-cased text.
    pub(crate) fn found_in<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a String> + 'a {
        self.keywords.iter().filter(move |k| text.contains(k.as_str()))
    }
}

fn unit(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

pub(crate) fn social_spike(config: &PumpConfig, social: &SocialMetrics, baseline: f64) -> Option<PumpSignal> {
    let posts = social.post_count as f64;
    if posts <= baseline * config.social_spike_threshold {
        return None;
    }
    let ratio = posts / baseline;
    Some(
        PumpSignal::new(
            PumpSignalKind::SocialSpike,
            &social.symbol,
            unit((ratio - 1.0) / 5.0),
            format!("Social mentions {} vs baseline {:.0}", social.post_count, baseline),
        )
        .with_metadata("ratio", ratio),
    )
}

pub(crate) fn volume_spike(config: &PumpConfig, market: &MarketMetrics, symbol: &str) -> Option<PumpSignal> {
    if !(market.volume_ratio >= config.volume_spike_threshold) {
        return None;
    }
    Some(
        PumpSignal::new(
            PumpSignalKind::VolumeSpike,
            symbol,
            unit((market.volume_ratio - 1.0) / 10.0),
            format!("Volume {:.1}x average", market.volume_ratio),
        )
        .with_metadata("volume_ratio", market.volume_ratio),
    )
}

pub(crate) fn price_spike(config: &PumpConfig, market: &MarketMetrics, symbol: &str) -> Option<PumpSignal> {
    if !(market.price_change_pct >= config.price_spike_threshold) {
        return None;
    }
    Some(
        PumpSignal::new(
            PumpSignalKind::PriceSpike,
            symbol,
            unit(market.price_change_pct / 0.3),
            format!("Price up {:.1}%", market.price_change_pct * 100.0),
        )
        .with_metadata("price_change", market.price_change_pct),
    )
}

pub(crate) fn new_accounts(config: &PumpConfig, social: &SocialMetrics) -> Option<PumpSignal> {
    let age = social.avg_author_age_days;
    if !(age < config.new_account_days) {
        return None;
    }
    Some(
        PumpSignal::new(
            PumpSignalKind::NewAccounts,
            &social.symbol,
            unit(1.0 - age / config.new_account_days),
            format!("Avg account age {:.0} days", age),
        )
        .with_metadata("avg_age_days", age),
    )
}

pub(crate) fn keyword_pattern(pump_keywords: &KeywordSet, social: &SocialMetrics) -> Option<PumpSignal> {
    let hits: Vec<&String> = social
        .keyword_flags
        .iter()
        .filter(|flag| pump_keywords.contains(flag))
        .collect();
    if hits.is_empty() {
        return None;
    }
    let shown: Vec<&str> = hits.iter().take(3).map(|k| k.as_str()).collect();
    Some(
        PumpSignal::new(
            PumpSignalKind::KeywordPattern,
            &social.symbol,
            unit(hits.len() as f64 / 5.0),
            format!("Pump keywords: {}", shown.join(", ")),
        )
        .with_metadata("keywords", hits.into_iter().cloned().collect::<Vec<_>>()),
    )
}

pub(crate) fn coordinated_posts(config: &PumpConfig, social: &SocialMetrics) -> Option<PumpSignal> {
    if social.unique_authors == 0 {
        return None;
    }
    let posts_per_author = social.post_count as f64 / social.unique_authors as f64;
    let limit = config.coordinated_posts_per_author;
    if posts_per_author <= limit {
        return None;
    }
    Some(
        PumpSignal::new(
            PumpSignalKind::CoordinatedPosts,
            &social.symbol,
            unit((posts_per_author - limit) / 7.0),
            format!("Avg {:.1} posts per author", posts_per_author),
        )
        .with_metadata("posts_per_author", posts_per_author),
    )
}
