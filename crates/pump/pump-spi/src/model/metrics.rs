//! Per-symbol snapshot inputs.

use serde::{Deserialize, Serialize};

use crate::error::{PumpError, Result};

/// Social media activity for one symbol over one time window.
///
/// Keyword extraction from raw posts happens upstream; `keyword_flags`
/// holds the keywords already found.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialMetrics {
    pub symbol: String,
    pub post_count: u64,
    pub unique_authors: u64,
    pub avg_author_age_days: f64,
    pub sentiment_score: f64,
    #[serde(default)]
    pub keyword_flags: Vec<String>,
    #[serde(default = "default_time_window_hours")]
    pub time_window_hours: f64,
}

fn default_time_window_hours() -> f64 {
    24.0
}

impl SocialMetrics {
    pub fn new(symbol: &str, post_count: u64, unique_authors: u64, avg_author_age_days: f64) -> Self {
        Self {
            symbol: symbol.to_string(),
            post_count,
            unique_authors,
            avg_author_age_days,
            sentiment_score: 0.0,
            keyword_flags: Vec::new(),
            time_window_hours: default_time_window_hours(),
        }
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keyword_flags = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_sentiment(mut self, sentiment_score: f64) -> Self {
        self.sentiment_score = sentiment_score;
        self
    }

    /// Reject snapshots that cannot come from a real feed.
    pub fn validate(&self) -> Result<()> {
        if self.unique_authors > self.post_count {
            return Err(PumpError::InvalidMetrics(format!(
                "{}: unique_authors {} exceeds post_count {}",
                self.symbol, self.unique_authors, self.post_count
            )));
        }
        if !self.avg_author_age_days.is_finite() || self.avg_author_age_days < 0.0 {
            return Err(PumpError::InvalidMetrics(format!(
                "{}: avg_author_age_days must be a non-negative number",
                self.symbol
            )));
        }
        Ok(())
    }
}

/// Market state for one symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketMetrics {
    pub symbol: String,
    pub current_price: f64,
    /// Fractional change, e.g. `0.25` for +25%.
    pub price_change_pct: f64,
    pub volume: f64,
    pub avg_volume: f64,
    pub volume_ratio: f64,
    #[serde(default)]
    pub market_cap: Option<f64>,
}

impl MarketMetrics {
    /// Build a snapshot, deriving `volume_ratio` from `volume / avg_volume`
    /// (0 when the average is not positive).
    pub fn new(
        symbol: &str,
        current_price: f64,
        price_change_pct: f64,
        volume: f64,
        avg_volume: f64,
    ) -> Self {
        let volume_ratio = if avg_volume > 0.0 {
            volume / avg_volume
        } else {
            0.0
        };
        Self {
            symbol: symbol.to_string(),
            current_price,
            price_change_pct,
            volume,
            avg_volume,
            volume_ratio,
            market_cap: None,
        }
    }

    pub fn with_market_cap(mut self, market_cap: f64) -> Self {
        self.market_cap = Some(market_cap);
        self
    }

    /// Reject snapshots that cannot come from a real feed.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("current_price", self.current_price),
            ("price_change_pct", self.price_change_pct),
            ("volume", self.volume),
            ("avg_volume", self.avg_volume),
            ("volume_ratio", self.volume_ratio),
        ] {
            if !value.is_finite() {
                return Err(PumpError::InvalidMetrics(format!(
                    "{}: {} is not a finite number",
                    self.symbol, name
                )));
            }
        }
        if self.volume < 0.0 || self.avg_volume < 0.0 || self.volume_ratio < 0.0 {
            return Err(PumpError::InvalidMetrics(format!(
                "{}: volumes must be non-negative",
                self.symbol
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_ratio_derived() {
        let market = MarketMetrics::new("BUMI", 150.0, 0.25, 10_000_000.0, 1_000_000.0);
        assert_eq!(market.volume_ratio, 10.0);
        let flat = MarketMetrics::new("BUMI", 150.0, 0.0, 10.0, 0.0);
        assert_eq!(flat.volume_ratio, 0.0);
    }

    #[test]
    fn test_social_defaults_from_json() {
        let social: SocialMetrics = serde_json::from_str(
            r#"{"symbol":"BUMI","post_count":50,"unique_authors":10,"avg_author_age_days":12.0,"sentiment_score":0.4}"#,
        )
        .unwrap();
        assert!(social.keyword_flags.is_empty());
        assert_eq!(social.time_window_hours, 24.0);
    }

    #[test]
    fn test_validate() {
        assert!(SocialMetrics::new("BUMI", 5, 10, 20.0).validate().is_err());
        assert!(SocialMetrics::new("BUMI", 50, 10, 20.0).validate().is_ok());
        let mut market = MarketMetrics::new("BUMI", 150.0, 0.25, 1.0, 1.0);
        assert!(market.validate().is_ok());
        market.current_price = f64::NAN;
        assert!(matches!(market.validate(), Err(PumpError::InvalidMetrics(_))));
    }
}
