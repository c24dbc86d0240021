use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{LedgerError, Result};
use crate::ledger::{CategoryFilter, LedgerStore};

/// Inclusive `[start, end]` date range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(LedgerError::InvalidRange(format!(
                "start {} is after end {}",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    /// Accepts both bounds or neither; a single bound is rejected.
    pub fn from_bounds(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<Option<Self>> {
        match (start, end) {
            (Some(start), Some(end)) => Self::new(start, end).map(Some),
            (Some(_), None) => Err(LedgerError::InvalidRange(
                "a start date requires an end date".into(),
            )),
            (None, Some(_)) => Err(LedgerError::InvalidRange(
                "an end date requires a start date".into(),
            )),
            (None, None) => Ok(None),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Row-kind toggles for tabular views.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntryVisibility {
    pub show_income: bool,
    pub show_expense: bool,
}

impl Default for EntryVisibility {
    fn default() -> Self {
        Self {
            show_income: true,
            show_expense: true,
        }
    }
}

pub struct FilterService;

impl FilterService {
    /// Narrows `store` to entries inside `range` and matching `category`.
    ///
    /// A category with no entries yields an empty view, not an error.
    pub fn filter(
        store: &LedgerStore,
        range: Option<DateRange>,
        category: &CategoryFilter,
    ) -> LedgerStore {
        if range.is_none() && *category == CategoryFilter::All {
            return store.clone();
        }
        let view = store.select(|entry| {
            range.map_or(true, |range| range.contains(entry.date))
                && category.matches(&entry.category)
        });
        debug!(
            ?range,
            ?category,
            kept = view.len(),
            of = store.len(),
            "ledger filtered"
        );
        view
    }

    /// Same as [`FilterService::filter`], validating raw range bounds first.
    pub fn filter_bounds(
        store: &LedgerStore,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        category: &CategoryFilter,
    ) -> Result<LedgerStore> {
        let range = DateRange::from_bounds(start, end)?;
        Ok(Self::filter(store, range, category))
    }

    /// Hides income rows (income ≠ 0) and/or expense rows (expense ≠ 0).
    pub fn visibility(store: &LedgerStore, visibility: EntryVisibility) -> LedgerStore {
        if visibility.show_income && visibility.show_expense {
            return store.clone();
        }
        store.select(|entry| {
            (visibility.show_income || entry.income.is_zero())
                && (visibility.show_expense || entry.expense.is_zero())
        })
    }
}
