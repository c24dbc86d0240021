use rust_decimal::Decimal;

use crate::domain::{CategoryShare, CategorySummary, LedgerTotals};
use crate::ledger::LedgerStore;

/// Ratio helpers over aggregate outputs.
///
/// Every ratio with a zero denominator is defined as zero.
pub struct MetricService;

impl MetricService {
    /// `(income - expense) / income`, or zero when there is no income.
    pub fn savings_rate(total_income: Decimal, total_expense: Decimal) -> Decimal {
        ratio(total_income - total_expense, total_income)
    }

    /// Share of `grand_total` taken by one category, or zero for an empty total.
    pub fn category_percentage(category_total: Decimal, grand_total: Decimal) -> Decimal {
        ratio(category_total, grand_total)
    }

    /// Income and expense as shares of their combined volume.
    pub fn income_expense_shares(income: Decimal, expense: Decimal) -> (Decimal, Decimal) {
        let volume = income + expense;
        (ratio(income, volume), ratio(expense, volume))
    }

    /// Pairs each category of `summary` with its share of `grand_total`,
    /// keeping the summary's order.
    pub fn category_breakdown(summary: &CategorySummary, grand_total: Decimal) -> Vec<CategoryShare> {
        summary
            .iter()
            .map(|item| CategoryShare {
                category: item.category.clone(),
                total: item.total,
                share: Self::category_percentage(item.total, grand_total),
            })
            .collect()
    }

    pub fn ledger_totals(store: &LedgerStore) -> LedgerTotals {
        let income = store.total_income();
        let expense = store.total_expense();
        LedgerTotals {
            income,
            expense,
            net: income - expense,
            savings_rate: Self::savings_rate(income, expense),
        }
    }
}

fn ratio(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        Decimal::ZERO
    } else {
        numerator / denominator
    }
}
