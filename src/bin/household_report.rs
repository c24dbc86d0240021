use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::Parser;
use household_ledger::{
    config::ConfigManager,
    core::services::{FilterService, SmoothingService, SummaryService},
    ledger::CategoryFilter,
    report::Report,
    storage::{CsvSource, LedgerSource},
    LedgerError,
};

#[derive(Debug, Parser)]
#[command(
    name = "household_report",
    about = "Print the household budget analysis report for a ledger CSV."
)]
struct Args {
    /// Ledger CSV with 日付,カテゴリ,項目,収入,支出 or English headers
    #[arg(default_value = "data/household_budget.csv")]
    path: PathBuf,
    /// First day to include (YYYY-MM-DD); requires --to
    #[arg(long)]
    from: Option<NaiveDate>,
    /// Last day to include (YYYY-MM-DD); requires --from
    #[arg(long)]
    to: Option<NaiveDate>,
    /// Restrict to one category; "all" keeps every category
    #[arg(long)]
    category: Option<String>,
}

fn run(args: Args) -> Result<String, LedgerError> {
    let config = ConfigManager::default_location().load()?;
    let source = CsvSource::new(args.path);
    let store = source.load(config.category_policy)?;

    let category = args
        .category
        .as_deref()
        .map(|label| CategoryFilter::from_selection(label, &config.all_categories_label))
        .unwrap_or_default();
    let filtered = FilterService::filter_bounds(&store, args.from, args.to, &category)?;

    let mut text = Report::build(&filtered).render(&config.currency);
    let series = SummaryService::daily_series(&filtered);
    let smoothed = SmoothingService::smooth(&series, config.rolling_window, config.smoothing)?;
    text.push_str(&format!(
        "Daily spending: {} days with expenses, {} smoothed points ({}-point window)\n",
        series.len(),
        smoothed.len(),
        config.rolling_window
    ));
    Ok(text)
}

fn main() -> ExitCode {
    let args = Args::parse();
    household_ledger::init();

    match run(args) {
        Ok(text) => {
            print!("{}", text);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
