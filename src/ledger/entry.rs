use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::category::{Category, CategoryPolicy};
use crate::errors::{LedgerError, Result};

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d"];

/// One dated income/expense record.
///
/// Net is always derived from the two amounts and never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LedgerEntry {
    pub date: NaiveDate,
    pub category: Category,
    pub item: String,
    pub income: Decimal,
    pub expense: Decimal,
}

impl LedgerEntry {
    pub fn new(
        date: NaiveDate,
        category: Category,
        item: impl Into<String>,
        income: Decimal,
        expense: Decimal,
    ) -> Self {
        Self {
            date,
            category,
            item: item.into(),
            income,
            expense,
        }
    }

    pub fn net(&self) -> Decimal {
        self.income - self.expense
    }

    pub fn is_expense(&self) -> bool {
        self.expense > Decimal::ZERO
    }

    pub fn is_income(&self) -> bool {
        self.income > Decimal::ZERO
    }
}

/// Unparsed row as handed over by a tabular loader.
///
/// `None` marks a column that was absent from the source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    pub date: Option<String>,
    pub category: Option<String>,
    pub item: Option<String>,
    pub income: Option<String>,
    pub expense: Option<String>,
}

impl RawRow {
    pub fn new(date: &str, category: &str, item: &str, income: &str, expense: &str) -> Self {
        Self {
            date: Some(date.to_string()),
            category: Some(category.to_string()),
            item: Some(item.to_string()),
            income: Some(income.to_string()),
            expense: Some(expense.to_string()),
        }
    }

    /// Validates the row into a [`LedgerEntry`]. `row` is the 1-based
    /// position used in error messages.
    pub fn parse(&self, row: usize, policy: CategoryPolicy) -> Result<LedgerEntry> {
        let date = parse_date(row, required(row, "date", &self.date)?)?;
        let category = Category::parse(required(row, "category", &self.category)?, policy)?;
        let income = parse_amount(row, "income", required(row, "income", &self.income)?)?;
        let expense = parse_amount(row, "expense", required(row, "expense", &self.expense)?)?;
        let item = self.item.as_deref().unwrap_or_default().trim().to_string();
        Ok(LedgerEntry {
            date,
            category,
            item,
            income,
            expense,
        })
    }
}

fn required<'a>(row: usize, field: &'static str, value: &'a Option<String>) -> Result<&'a str> {
    match value.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(LedgerError::malformed(row, field, "is missing")),
    }
}

fn parse_date(row: usize, text: &str) -> Result<NaiveDate> {
    // Timestamps such as "2024-01-05 00:00:00" keep only the date part.
    let day = text.split_whitespace().next().unwrap_or(text);
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(day, format).ok())
        .ok_or_else(|| LedgerError::malformed(row, "date", format!("`{}` is not a date", text)))
}

fn parse_amount(row: usize, field: &'static str, text: &str) -> Result<Decimal> {
    let cleaned: String = text.chars().filter(|c| *c != ',').collect();
    let value = Decimal::from_str(&cleaned)
        .map_err(|_| LedgerError::malformed(row, field, format!("`{}` is not a number", text)))?;
    if value.is_sign_negative() && !value.is_zero() {
        return Err(LedgerError::malformed(
            row,
            field,
            format!("`{}` must not be negative", text),
        ));
    }
    Ok(value)
}
