use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{DailyPoint, DailySeries, SmoothedPoint, SmoothedSeries};
use crate::errors::{LedgerError, Result};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SmoothingMode {
    Trailing,
    #[default]
    Centered,
}

/// Moving averages over a [`DailySeries`].
///
/// Windows count observations, not calendar days. Dates missing from the
/// series are simply absent: they never enter a window and are never
/// counted as zero.
pub struct SmoothingService;

impl SmoothingService {
    /// Mean of each point and up to `window - 1` observations before it.
    /// Positions near the start average whatever is available.
    pub fn trailing_mean(series: &DailySeries, window: usize) -> Result<SmoothedSeries> {
        check_window(window)?;
        let points = series.points();
        let mut smoothed = Vec::with_capacity(points.len());
        let mut sum = Decimal::ZERO;
        for (idx, point) in points.iter().enumerate() {
            sum += point.expense;
            if idx >= window {
                sum -= points[idx - window].expense;
            }
            let count = idx.min(window - 1) + 1;
            smoothed.push(SmoothedPoint {
                date: point.date,
                value: sum / Decimal::from(count),
            });
        }
        Ok(smoothed)
    }

    /// Mean over `window / 2` observations before each point and
    /// `window - 1 - window / 2` after it.
    ///
    /// Points without that many neighbours on either side produce no output.
    pub fn centered_mean(series: &DailySeries, window: usize) -> Result<SmoothedSeries> {
        check_window(window)?;
        let before = window / 2;
        let after = window - 1 - before;
        let points = series.points();
        if points.len() < window {
            return Ok(Vec::new());
        }
        let smoothed = (before..points.len() - after)
            .map(|idx| {
                let observed = &points[idx - before..=idx + after];
                SmoothedPoint {
                    date: points[idx].date,
                    value: mean(observed),
                }
            })
            .collect();
        Ok(smoothed)
    }

    pub fn smooth(series: &DailySeries, window: usize, mode: SmoothingMode) -> Result<SmoothedSeries> {
        match mode {
            SmoothingMode::Trailing => Self::trailing_mean(series, window),
            SmoothingMode::Centered => Self::centered_mean(series, window),
        }
    }
}

fn check_window(window: usize) -> Result<()> {
    if window == 0 {
        return Err(LedgerError::InvalidWindow(window));
    }
    Ok(())
}

fn mean(points: &[DailyPoint]) -> Decimal {
    let sum: Decimal = points.iter().map(|point| point.expense).sum();
    sum / Decimal::from(points.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(n: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, n).unwrap()
    }

    fn series(days_and_values: &[(u32, i64)]) -> DailySeries {
        DailySeries::new(
            days_and_values
                .iter()
                .map(|&(d, v)| DailyPoint::new(day(d), Decimal::from(v)))
                .collect(),
        )
    }

    #[test]
    fn zero_window_is_rejected() {
        let s = series(&[(1, 10)]);
        assert!(matches!(
            SmoothingService::trailing_mean(&s, 0),
            Err(LedgerError::InvalidWindow(0))
        ));
        assert!(matches!(
            SmoothingService::centered_mean(&s, 0),
            Err(LedgerError::InvalidWindow(0))
        ));
    }

    #[test]
    fn trailing_window_counts_observations_across_gaps() {
        // Days without expenses are absent, so day 9 still averages with day 4.
        let s = series(&[(1, 30), (4, 10), (9, 50)]);
        let out = SmoothingService::trailing_mean(&s, 2).unwrap();
        let values: Vec<_> = out.iter().map(|p| p.value).collect();
        assert_eq!(
            values,
            vec![Decimal::from(30), Decimal::from(20), Decimal::from(30)]
        );
    }

    #[test]
    fn trailing_window_drops_observations_outside_window() {
        let s = series(&[(1, 100), (2, 10), (3, 20)]);
        let out = SmoothingService::trailing_mean(&s, 2).unwrap();
        let values: Vec<_> = out.iter().map(|p| p.value).collect();
        assert_eq!(
            values,
            vec![Decimal::from(100), Decimal::from(55), Decimal::from(15)]
        );
    }

    #[test]
    fn centered_window_needs_both_halves() {
        let s = series(&[(1, 1), (2, 2), (3, 3), (4, 4), (5, 5)]);
        let out = SmoothingService::centered_mean(&s, 3).unwrap();
        let dates: Vec<_> = out.iter().map(|p| p.date).collect();
        assert_eq!(dates, vec![day(2), day(3), day(4)]);
        assert_eq!(out[0].value, Decimal::from(2));
    }

    #[test]
    fn centered_window_spans_gaps() {
        let s = series(&[(1, 3), (2, 3), (3, 3), (5, 6), (6, 6), (7, 6)]);
        let out = SmoothingService::centered_mean(&s, 3).unwrap();
        let dates: Vec<_> = out.iter().map(|p| p.date).collect();
        assert_eq!(dates, vec![day(2), day(3), day(5), day(6)]);
        // Day 3 averages days 2, 3 and 5.
        assert_eq!(out[1].value, Decimal::from(4));
    }

    #[test]
    fn even_centered_window_looks_further_back() {
        let s = series(&[(1, 4), (2, 8), (3, 12), (4, 16)]);
        let out = SmoothingService::centered_mean(&s, 4).unwrap();
        // Two observations before day 3 and one after.
        let dates: Vec<_> = out.iter().map(|p| p.date).collect();
        assert_eq!(dates, vec![day(3)]);
        assert_eq!(out[0].value, Decimal::from(10));
    }

    #[test]
    fn smooth_dispatches_on_mode() {
        let s = series(&[(1, 1), (2, 2), (3, 3)]);
        let trailing = SmoothingService::smooth(&s, 3, SmoothingMode::Trailing).unwrap();
        let centered = SmoothingService::smooth(&s, 3, SmoothingMode::Centered).unwrap();
        assert_eq!(trailing.len(), 3);
        assert_eq!(centered.len(), 1);
    }

    #[test]
    fn empty_series_smooths_to_nothing() {
        let empty = DailySeries::default();
        assert!(SmoothingService::trailing_mean(&empty, 7).unwrap().is_empty());
        assert!(SmoothingService::centered_mean(&empty, 7).unwrap().is_empty());
    }
}
