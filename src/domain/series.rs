use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub expense: Decimal,
}

impl DailyPoint {
    pub fn new(date: NaiveDate, expense: Decimal) -> Self {
        Self { date, expense }
    }
}

/// Daily expense totals in ascending date order, one point per date.
///
/// Days without expenses are missing rather than zero.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Default)]
pub struct DailySeries {
    points: Vec<DailyPoint>,
}

impl DailySeries {
    /// Builds a series from arbitrary points, sorting by date and summing
    /// points that share a date.
    pub fn new(mut points: Vec<DailyPoint>) -> Self {
        points.sort_by_key(|point| point.date);
        let mut merged: Vec<DailyPoint> = Vec::with_capacity(points.len());
        for point in points {
            match merged.last_mut() {
                Some(last) if last.date == point.date => last.expense += point.expense,
                _ => merged.push(point),
            }
        }
        Self { points: merged }
    }

    pub fn points(&self) -> &[DailyPoint] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &DailyPoint> + '_ {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn total(&self) -> Decimal {
        self.points.iter().map(|point| point.expense).sum()
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct SmoothedPoint {
    pub date: NaiveDate,
    pub value: Decimal,
}

/// Moving-average output; may hold fewer points than its source series.
pub type SmoothedSeries = Vec<SmoothedPoint>;
