//! OHLCV bar containers.

use serde::{Deserialize, Serialize};

/// A single OHLCV bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Bar {
    pub fn new(open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            open,
            high,
            low,
            close,
            volume,
        }
    }
}

/// Column-oriented price history for one symbol.
///
/// Bars are assumed chronologically ordered and gap-free. Nothing here
/// enforces that the five arrays share a length; see [`Bars::is_aligned`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bars {
    pub open: Vec<f64>,
    pub high: Vec<f64>,
    pub low: Vec<f64>,
    pub close: Vec<f64>,
    pub volume: Vec<f64>,
}

impl Bars {
    pub fn new(
        open: Vec<f64>,
        high: Vec<f64>,
        low: Vec<f64>,
        close: Vec<f64>,
        volume: Vec<f64>,
    ) -> Self {
        Self {
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Build column arrays from row records.
    pub fn from_rows(rows: &[Bar]) -> Self {
        let mut bars = Self {
            open: Vec::with_capacity(rows.len()),
            high: Vec::with_capacity(rows.len()),
            low: Vec::with_capacity(rows.len()),
            close: Vec::with_capacity(rows.len()),
            volume: Vec::with_capacity(rows.len()),
        };
        for row in rows {
            bars.push(*row);
        }
        bars
    }

    /// Append one bar to every column.
    pub fn push(&mut self, bar: Bar) {
        self.open.push(bar.open);
        self.high.push(bar.high);
        self.low.push(bar.low);
        self.close.push(bar.close);
        self.volume.push(bar.volume);
    }

    /// Number of bars, taken from the close column.
    pub fn len(&self) -> usize {
        self.close.len()
    }

    pub fn is_empty(&self) -> bool {
        self.close.is_empty()
    }

    /// True when all five columns have the same length.
    pub fn is_aligned(&self) -> bool {
        let n = self.close.len();
        self.open.len() == n && self.high.len() == n && self.low.len() == n && self.volume.len() == n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_builds_columns() {
        let rows = vec![
            Bar::new(10.0, 11.0, 9.5, 10.5, 1_000.0),
            Bar::new(10.5, 12.0, 10.0, 11.5, 1_500.0),
        ];
        let bars = Bars::from_rows(&rows);

        assert_eq!(bars.len(), 2);
        assert_eq!(bars.open, vec![10.0, 10.5]);
        assert_eq!(bars.volume, vec![1_000.0, 1_500.0]);
        assert!(bars.is_aligned());
    }

    #[test]
    fn test_misaligned_columns() {
        let bars = Bars::new(vec![1.0], vec![1.0, 2.0], vec![1.0], vec![1.0], vec![1.0]);
        assert!(!bars.is_aligned());
    }

    #[test]
    fn test_empty() {
        let bars = Bars::default();
        assert!(bars.is_empty());
        assert!(bars.is_aligned());
    }
}
