#![allow(dead_code)]

use chrono::{Duration, NaiveDate};
use household_ledger::ledger::{Category, CategoryPolicy, LedgerEntry, LedgerStore, RawRow};
use rust_decimal::Decimal;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn dec(value: i64) -> Decimal {
    Decimal::from(value)
}

/// The three-row ledger used throughout the documentation examples.
pub fn scenario_store() -> LedgerStore {
    LedgerStore::load(
        vec![
            RawRow::new("2024-01-05", "Food", "Groceries", "0", "1000"),
            RawRow::new("2024-01-05", "Income", "Salary", "2000", "0"),
            RawRow::new("2024-02-10", "Food", "Dinner", "0", "500"),
        ],
        CategoryPolicy::Permissive,
    )
    .expect("scenario ledger loads")
}

/// Deterministic multi-month ledger with a salary each month, several
/// spending categories and regular days without any expense.
pub fn synthetic_store(days: i64) -> LedgerStore {
    let start = date(2023, 11, 20);
    let spending = [
        Category::Food,
        Category::Utilities,
        Category::Transportation,
        Category::Entertainment,
        Category::DailyGoods,
        Category::Medical,
    ];
    let mut entries = Vec::new();
    for offset in 0..days {
        let day = start + Duration::days(offset);
        if offset % 30 == 0 {
            entries.push(LedgerEntry::new(
                day,
                Category::Income,
                "Salary",
                dec(250_000),
                Decimal::ZERO,
            ));
        }
        if offset % 5 == 3 {
            continue;
        }
        let category = spending[(offset as usize * 7) % spending.len()].clone();
        let amount = Decimal::new(1_000 + (offset * 37 % 900) * 10 + 5, 1);
        entries.push(LedgerEntry::new(day, category, "Purchase", Decimal::ZERO, amount));
    }
    LedgerStore::from_entries(entries).expect("synthetic ledger is not empty")
}
