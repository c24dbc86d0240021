use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, info};

use super::category::{Category, CategoryPolicy};
use super::entry::{LedgerEntry, RawRow};
use crate::errors::{LedgerError, Result};

/// Immutable, ordered collection of ledger entries.
///
/// Loaded entries live behind a shared buffer; filtered stores are views
/// holding the positions they keep, so narrowing a store never copies or
/// touches the entries themselves.
#[derive(Debug, Clone)]
pub struct LedgerStore {
    entries: Arc<[LedgerEntry]>,
    rows: Arc<[usize]>,
}

impl LedgerStore {
    /// Validates loader rows into a store. Any malformed row aborts the
    /// whole load.
    pub fn load<I>(rows: I, policy: CategoryPolicy) -> Result<Self>
    where
        I: IntoIterator<Item = RawRow>,
    {
        let entries = rows
            .into_iter()
            .enumerate()
            .map(|(idx, row)| row.parse(idx + 1, policy))
            .collect::<Result<Vec<_>>>()?;
        let store = Self::from_entries(entries)?;
        if let Some((start, end)) = store.date_span() {
            info!(records = store.len(), %start, %end, "ledger loaded");
        }
        Ok(store)
    }

    /// Wraps already-typed entries, rejecting an empty ledger.
    pub fn from_entries(entries: Vec<LedgerEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(LedgerError::EmptyLedger);
        }
        let rows: Arc<[usize]> = (0..entries.len()).collect();
        Ok(Self {
            entries: entries.into(),
            rows,
        })
    }

    /// Keeps the entries matching `predicate`, preserving order.
    pub(crate) fn select<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&LedgerEntry) -> bool,
    {
        let rows: Arc<[usize]> = self
            .rows
            .iter()
            .copied()
            .filter(|&idx| predicate(&self.entries[idx]))
            .collect();
        debug!(before = self.rows.len(), after = rows.len(), "ledger view narrowed");
        Self {
            entries: Arc::clone(&self.entries),
            rows,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &LedgerEntry> + '_ {
        self.rows.iter().map(move |&idx| &self.entries[idx])
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn min_date(&self) -> Option<NaiveDate> {
        self.iter().map(|entry| entry.date).min()
    }

    pub fn max_date(&self) -> Option<NaiveDate> {
        self.iter().map(|entry| entry.date).max()
    }

    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.min_date()?, self.max_date()?))
    }

    pub fn total_income(&self) -> Decimal {
        self.iter().map(|entry| entry.income).sum()
    }

    pub fn total_expense(&self) -> Decimal {
        self.iter().map(|entry| entry.expense).sum()
    }

    pub fn net(&self) -> Decimal {
        self.total_income() - self.total_expense()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<Category> {
        let mut seen: Vec<Category> = Vec::new();
        for entry in self.iter() {
            if !seen.contains(&entry.category) {
                seen.push(entry.category.clone());
            }
        }
        seen
    }

    /// Entries ordered newest first; same-day entries keep ledger order.
    pub fn recent_first(&self) -> Vec<&LedgerEntry> {
        let mut entries: Vec<&LedgerEntry> = self.iter().collect();
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        entries
    }

    /// True when both stores expose the same entries in the same order.
    pub fn same_entries(&self, other: &LedgerStore) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl PartialEq for LedgerStore {
    fn eq(&self, other: &Self) -> bool {
        self.same_entries(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<RawRow> {
        vec![
            RawRow::new("2024-01-05", "Food", "Groceries", "0", "1000"),
            RawRow::new("2024-01-05", "Income", "Salary", "2000", "0"),
            RawRow::new("2024-02-10", "Food", "Dinner", "0", "500"),
        ]
    }

    #[test]
    fn load_exposes_order_count_and_dates() {
        let store = LedgerStore::load(rows(), CategoryPolicy::Permissive).unwrap();
        assert_eq!(store.len(), 3);
        let items: Vec<&str> = store.iter().map(|e| e.item.as_str()).collect();
        assert_eq!(items, vec!["Groceries", "Salary", "Dinner"]);
        assert_eq!(store.min_date(), NaiveDate::from_ymd_opt(2024, 1, 5));
        assert_eq!(store.max_date(), NaiveDate::from_ymd_opt(2024, 2, 10));
        assert_eq!(store.total_income(), Decimal::from(2000));
        assert_eq!(store.total_expense(), Decimal::from(1500));
        assert_eq!(store.net(), Decimal::from(500));
        assert_eq!(store.categories(), vec![Category::Food, Category::Income]);
    }

    #[test]
    fn load_rejects_empty_input() {
        let err = LedgerStore::load(Vec::new(), CategoryPolicy::Permissive).unwrap_err();
        assert!(matches!(err, LedgerError::EmptyLedger));
    }

    #[test]
    fn load_is_all_or_nothing() {
        let mut input = rows();
        input.push(RawRow::new("2024-03-01", "Food", "", "0", "oops"));
        let err = LedgerStore::load(input, CategoryPolicy::Permissive).unwrap_err();
        assert!(matches!(err, LedgerError::MalformedRow { row: 4, .. }));
    }

    #[test]
    fn select_shares_entries_and_keeps_order() {
        let store = LedgerStore::load(rows(), CategoryPolicy::Permissive).unwrap();
        let food = store.select(|e| e.category == Category::Food);
        assert_eq!(food.len(), 2);
        assert!(Arc::ptr_eq(&food.entries, &store.entries));
        assert_eq!(store.len(), 3);
        let none = food.select(|_| false);
        assert!(none.is_empty());
        assert_eq!(none.date_span(), None);
    }

    #[test]
    fn recent_first_sorts_descending() {
        let store = LedgerStore::load(rows(), CategoryPolicy::Permissive).unwrap();
        let items: Vec<&str> = store.recent_first().iter().map(|e| e.item.as_str()).collect();
        assert_eq!(items, vec!["Dinner", "Groceries", "Salary"]);
    }
}
