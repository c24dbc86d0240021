use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;
use tracing::debug;

use crate::domain::{
    CategoryStat, CategorySummary, CategoryTotal, DailyPoint, DailySeries, HeatmapPivot,
    MonthTotals, MonthlySummary,
};
use crate::ledger::{bucket_month, bucket_week, bucket_weekday, Category, LedgerEntry, LedgerStore, WeekKey};

/// Grouping aggregates over a ledger view. Empty input yields empty output.
pub struct SummaryService;

impl SummaryService {
    /// Income, expense and net per calendar month, ascending.
    pub fn monthly_summary(store: &LedgerStore) -> MonthlySummary {
        let mut sums: BTreeMap<_, (Decimal, Decimal)> = BTreeMap::new();
        for entry in store.iter() {
            let bucket = sums
                .entry(bucket_month(entry.date))
                .or_insert((Decimal::ZERO, Decimal::ZERO));
            bucket.0 += entry.income;
            bucket.1 += entry.expense;
        }
        let months = sums
            .into_iter()
            .map(|(key, (income, expense))| (key, MonthTotals::from_parts(income, expense)))
            .collect();
        let summary = MonthlySummary::from_map(months);
        debug!(months = summary.len(), "monthly summary computed");
        summary
    }

    /// Expense per category, largest first.
    pub fn category_summary(store: &LedgerStore) -> CategorySummary {
        let totals = group_expenses(store)
            .into_iter()
            .map(|group| CategoryTotal {
                category: group.category,
                total: group.total,
            })
            .collect();
        CategorySummary::from_sorted(totals)
    }

    /// Sum, mean and count of expense rows per category, ordered like
    /// [`SummaryService::category_summary`].
    pub fn category_stats(store: &LedgerStore) -> Vec<CategoryStat> {
        group_expenses(store)
            .into_iter()
            .map(|group| CategoryStat {
                mean: group.total / Decimal::from(group.count),
                category: group.category,
                total: group.total,
                count: group.count,
            })
            .collect()
    }

    /// Expense per date for dates with at least one expense, ascending.
    pub fn daily_series(store: &LedgerStore) -> DailySeries {
        let mut days: BTreeMap<_, Decimal> = BTreeMap::new();
        for entry in store.iter().filter(|entry| entry.is_expense()) {
            *days.entry(entry.date).or_insert(Decimal::ZERO) += entry.expense;
        }
        DailySeries::new(
            days.into_iter()
                .map(|(date, expense)| DailyPoint::new(date, expense))
                .collect(),
        )
    }

    /// ISO week × weekday expense heatmap.
    pub fn weekday_week_pivot(store: &LedgerStore) -> HeatmapPivot {
        let mut weeks: BTreeMap<WeekKey, [Decimal; 7]> = BTreeMap::new();
        for entry in store.iter().filter(|entry| entry.is_expense()) {
            let row = weeks
                .entry(bucket_week(entry.date))
                .or_insert([Decimal::ZERO; 7]);
            row[bucket_weekday(entry.date).index()] += entry.expense;
        }
        debug!(weeks = weeks.len(), "weekday pivot computed");
        HeatmapPivot::from_rows(weeks.into_iter().collect())
    }
}

struct ExpenseGroup {
    category: Category,
    total: Decimal,
    count: usize,
}

/// Groups expense rows by category in first-seen order, then sorts by
/// total descending. The sort is stable, so ties keep first-seen order.
fn group_expenses(store: &LedgerStore) -> Vec<ExpenseGroup> {
    let mut groups: Vec<ExpenseGroup> = Vec::new();
    let mut index: HashMap<&Category, usize> = HashMap::new();
    for entry in store.iter().filter(|entry| entry.is_expense()) {
        add_to_group(&mut groups, &mut index, entry);
    }
    groups.sort_by(|a, b| b.total.cmp(&a.total));
    groups
}

fn add_to_group<'a>(
    groups: &mut Vec<ExpenseGroup>,
    index: &mut HashMap<&'a Category, usize>,
    entry: &'a LedgerEntry,
) {
    match index.get(&entry.category) {
        Some(&slot) => {
            groups[slot].total += entry.expense;
            groups[slot].count += 1;
        }
        None => {
            index.insert(&entry.category, groups.len());
            groups.push(ExpenseGroup {
                category: entry.category.clone(),
                total: entry.expense,
                count: 1,
            });
        }
    }
}
