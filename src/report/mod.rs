//! Plain-text analysis report built from the aggregation services.

use std::fmt;

use chrono::NaiveDate;
use tracing::info;

use crate::core::services::{MetricService, SummaryService};
use crate::currency::{format_currency_value, format_percent, CurrencyCode};
use crate::domain::{CategoryShare, LedgerTotals, MonthlySummary};
use crate::ledger::LedgerStore;

const RULE_WIDTH: usize = 50;
const TITLE: &str = "Household Budget Analysis Report";

/// Aggregates backing one report; rendering never re-sorts them.
#[derive(Debug, Clone)]
pub struct Report {
    pub span: Option<(NaiveDate, NaiveDate)>,
    pub record_count: usize,
    pub totals: LedgerTotals,
    pub monthly: MonthlySummary,
    pub categories: Vec<CategoryShare>,
}

impl Report {
    pub fn build(store: &LedgerStore) -> Self {
        let totals = MetricService::ledger_totals(store);
        let summary = SummaryService::category_summary(store);
        let report = Self {
            span: store.date_span(),
            record_count: store.len(),
            totals,
            monthly: SummaryService::monthly_summary(store),
            categories: MetricService::category_breakdown(&summary, totals.expense),
        };
        info!(
            records = report.record_count,
            months = report.monthly.len(),
            categories = report.categories.len(),
            "report built"
        );
        report
    }

    /// Renders the report into a `String`.
    pub fn render(&self, currency: &CurrencyCode) -> String {
        self.display(currency).to_string()
    }

    /// Borrowed [`fmt::Display`] adapter rendering in `currency`.
    pub fn display<'a>(&'a self, currency: &'a CurrencyCode) -> ReportDisplay<'a> {
        ReportDisplay {
            report: self,
            currency,
        }
    }

    pub fn write_report<W: fmt::Write>(&self, out: &mut W, currency: &CurrencyCode) -> fmt::Result {
        let money = |amount| format_currency_value(amount, currency);
        let rule = "=".repeat(RULE_WIDTH);

        writeln!(out, "{}", rule)?;
        writeln!(out, "{}", TITLE)?;
        writeln!(out, "{}", rule)?;
        match self.span {
            Some((start, end)) => {
                writeln!(out, "Records: {} ({} to {})", self.record_count, start, end)?
            }
            None => writeln!(out, "Records: 0")?,
        }

        writeln!(out, "\n[Overall Summary]")?;
        writeln!(out, "Total Income: {}", money(self.totals.income))?;
        writeln!(out, "Total Expense: {}", money(self.totals.expense))?;
        writeln!(out, "Net Amount: {}", money(self.totals.net))?;
        writeln!(out, "Savings Rate: {}", format_percent(self.totals.savings_rate))?;

        writeln!(out, "\n[Monthly Summary]")?;
        writeln!(
            out,
            "{:<8} {:>12} {:>12} {:>12} {:>8} {:>8}",
            "Month", "Income", "Expense", "Net", "In%", "Out%"
        )?;
        for (period, totals) in self.monthly.iter() {
            let (income_share, expense_share) =
                MetricService::income_expense_shares(totals.income, totals.expense);
            writeln!(
                out,
                "{:<8} {:>12} {:>12} {:>12} {:>8} {:>8}",
                period.to_string(),
                money(totals.income),
                money(totals.expense),
                money(totals.net),
                format_percent(income_share),
                format_percent(expense_share),
            )?;
        }

        writeln!(out, "\n[Expense by Category]")?;
        for share in &self.categories {
            writeln!(
                out,
                "{:<15}: {:>10} ({:>6})",
                share.category.name(),
                money(share.total),
                format_percent(share.share),
            )?;
        }
        writeln!(out, "{}", rule)
    }
}

/// See [`Report::display`].
pub struct ReportDisplay<'a> {
    report: &'a Report,
    currency: &'a CurrencyCode,
}

impl fmt::Display for ReportDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.report.write_report(f, self.currency)
    }
}
