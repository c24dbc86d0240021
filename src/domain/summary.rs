use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::currency::round_currency;
use crate::ledger::{Category, PeriodKey};

/// Totals for one calendar month.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
pub struct MonthTotals {
    pub income: Decimal,
    pub expense: Decimal,
    pub net: Decimal,
}

impl MonthTotals {
    pub fn from_parts(income: Decimal, expense: Decimal) -> Self {
        Self {
            income,
            expense,
            net: income - expense,
        }
    }

    /// Presentation copy rounded to whole currency units.
    ///
    /// Net is rounded from the exact net, not recomputed from rounded parts.
    pub fn rounded(&self) -> Self {
        Self {
            income: round_currency(self.income),
            expense: round_currency(self.expense),
            net: round_currency(self.net),
        }
    }
}

/// Month → totals, iterated in ascending month order. Months without
/// entries are absent.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Default)]
pub struct MonthlySummary {
    months: BTreeMap<PeriodKey, MonthTotals>,
}

impl MonthlySummary {
    pub(crate) fn from_map(months: BTreeMap<PeriodKey, MonthTotals>) -> Self {
        Self { months }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PeriodKey, &MonthTotals)> + '_ {
        self.months.iter()
    }

    pub fn get(&self, key: &PeriodKey) -> Option<&MonthTotals> {
        self.months.get(key)
    }

    pub fn periods(&self) -> Vec<PeriodKey> {
        self.months.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    pub fn total_income(&self) -> Decimal {
        self.months.values().map(|totals| totals.income).sum()
    }

    pub fn total_expense(&self) -> Decimal {
        self.months.values().map(|totals| totals.expense).sum()
    }

    pub fn rounded(&self) -> Self {
        Self {
            months: self
                .months
                .iter()
                .map(|(key, totals)| (*key, totals.rounded()))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: Decimal,
}

/// Category → expense total, ordered by total descending. Equal totals keep
/// the order in which their categories first appeared in the ledger.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Default)]
pub struct CategorySummary {
    totals: Vec<CategoryTotal>,
}

impl CategorySummary {
    pub(crate) fn from_sorted(totals: Vec<CategoryTotal>) -> Self {
        Self { totals }
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryTotal> + '_ {
        self.totals.iter()
    }

    pub fn get(&self, category: &Category) -> Option<Decimal> {
        self.totals
            .iter()
            .find(|item| &item.category == category)
            .map(|item| item.total)
    }

    pub fn categories(&self) -> Vec<&Category> {
        self.totals.iter().map(|item| &item.category).collect()
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    pub fn grand_total(&self) -> Decimal {
        self.totals.iter().map(|item| item.total).sum()
    }
}

/// Sum, mean and count of a category's expense rows.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CategoryStat {
    pub category: Category,
    pub total: Decimal,
    pub mean: Decimal,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CategoryShare {
    pub category: Category,
    pub total: Decimal,
    pub share: Decimal,
}

/// Headline figures for a ledger view.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
pub struct LedgerTotals {
    pub income: Decimal,
    pub expense: Decimal,
    pub net: Decimal,
    pub savings_rate: Decimal,
}
