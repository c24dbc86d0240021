use rust_decimal::Decimal;
use serde::Serialize;

use crate::ledger::{WeekKey, WeekdayKey};

/// Expense heatmap: one row per ISO week present in the data (ascending),
/// one column per weekday in Monday..Sunday order. Absent cells are zero.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Default)]
pub struct HeatmapPivot {
    weeks: Vec<WeekKey>,
    cells: Vec<[Decimal; 7]>,
}

impl HeatmapPivot {
    pub(crate) fn from_rows(rows: Vec<(WeekKey, [Decimal; 7])>) -> Self {
        let (weeks, cells) = rows.into_iter().unzip();
        Self { weeks, cells }
    }

    pub fn columns(&self) -> [WeekdayKey; 7] {
        WeekdayKey::ALL
    }

    pub fn weeks(&self) -> &[WeekKey] {
        &self.weeks
    }

    pub fn rows(&self) -> impl Iterator<Item = (WeekKey, &[Decimal; 7])> + '_ {
        self.weeks.iter().copied().zip(self.cells.iter())
    }

    pub fn row(&self, week: WeekKey) -> Option<&[Decimal; 7]> {
        let idx = self.weeks.binary_search(&week).ok()?;
        self.cells.get(idx)
    }

    /// Cell value; weeks outside the pivot read as zero.
    pub fn cell(&self, week: WeekKey, weekday: WeekdayKey) -> Decimal {
        self.row(week)
            .map(|row| row[weekday.index()])
            .unwrap_or(Decimal::ZERO)
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    pub fn total(&self) -> Decimal {
        self.cells.iter().flat_map(|row| row.iter()).copied().sum()
    }
}
