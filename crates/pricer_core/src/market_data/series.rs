//! Historical closing-price series.

use super::error::MarketDataError;
use crate::types::Date;

/// A single (date, closing price) observation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricePoint {
    /// Observation date
    pub date: Date,
    /// Closing price on that date
    pub close: f64,
}

impl PricePoint {
    /// Creates a new observation.
    pub fn new(date: Date, close: f64) -> Self {
        Self { date, close }
    }
}

/// Chronological series of closing prices.
///
/// # Invariants
/// - Dates are strictly increasing
/// - Every closing price is finite and strictly positive
///
/// Any number of points (including zero) may be held; statistics that need a
/// minimum number of observations check it themselves.
///
/// # Examples
/// ```
/// use pricer_core::market_data::{HistoricalPriceSeries, PricePoint};
/// use pricer_core::types::Date;
///
/// let d = |day| Date::from_ymd(2024, 3, day).unwrap();
/// let series = HistoricalPriceSeries::new(vec![
///     PricePoint::new(d(1), 100.0),
///     PricePoint::new(d(4), 102.0),
///     PricePoint::new(d(5), 101.0),
/// ])
/// .unwrap();
///
/// assert_eq!(series.since(d(4)).len(), 2);
/// assert_eq!(series.tail(1).closes().collect::<Vec<_>>(), vec![101.0]);
///
/// // Out-of-order dates are rejected
/// assert!(HistoricalPriceSeries::new(vec![
///     PricePoint::new(d(4), 100.0),
///     PricePoint::new(d(1), 100.0),
/// ])
/// .is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HistoricalPriceSeries {
    points: Vec<PricePoint>,
}

impl HistoricalPriceSeries {
    /// Builds a series, validating ordering and prices.
    ///
    /// # Errors
    /// - `MarketDataError::InvalidPrice` for a non-finite or non-positive close
    /// - `MarketDataError::NonChronological` if dates are not strictly increasing
    pub fn new(points: Vec<PricePoint>) -> Result<Self, MarketDataError> {
        for (index, point) in points.iter().enumerate() {
            if !point.close.is_finite() || point.close <= 0.0 {
                return Err(MarketDataError::InvalidPrice {
                    index,
                    price: point.close,
                });
            }
            if index > 0 {
                let previous = points[index - 1].date;
                if point.date <= previous {
                    return Err(MarketDataError::NonChronological {
                        index,
                        previous,
                        current: point.date,
                    });
                }
            }
        }
        Ok(Self { points })
    }

    /// Builds a series of consecutive calendar-day observations starting at `start`.
    pub fn daily(start: Date, closes: &[f64]) -> Result<Self, MarketDataError> {
        let points = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| PricePoint::new(start.add_days(i as i64), close))
            .collect();
        Self::new(points)
    }

    /// Number of observations.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the series holds no observations.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All observations in chronological order.
    #[inline]
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Closing prices in chronological order.
    pub fn closes(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.close)
    }

    /// First observation, if any.
    pub fn first(&self) -> Option<&PricePoint> {
        self.points.first()
    }

    /// Most recent observation, if any.
    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// Observations dated on or after `start`.
    pub fn since(&self, start: Date) -> Self {
        let from = self.points.partition_point(|p| p.date < start);
        Self {
            points: self.points[from..].to_vec(),
        }
    }

    /// The most recent `n` observations (all of them if fewer exist).
    pub fn tail(&self, n: usize) -> Self {
        let from = self.points.len().saturating_sub(n);
        Self {
            points: self.points[from..].to_vec(),
        }
    }

    /// Successive log returns ln(P_t / P_{t-1}).
    ///
    /// Returns `len() - 1` values, or none for fewer than two observations.
    pub fn log_returns(&self) -> Vec<f64> {
        self.points
            .windows(2)
            .map(|w| (w[1].close / w[0].close).ln())
            .collect()
    }
}
