use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use csv::StringRecord;
use tracing::debug;

use super::{LedgerSource, SourceIdentity};
use crate::errors::{LedgerError, Result};
use crate::ledger::RawRow;

/// Column positions resolved from a header row.
#[derive(Debug, Default)]
struct Columns {
    date: Option<usize>,
    category: Option<usize>,
    item: Option<usize>,
    income: Option<usize>,
    expense: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Self {
        let mut columns = Columns::default();
        for (idx, header) in headers.iter().enumerate() {
            let name = header.trim().trim_start_matches('\u{feff}');
            let slot = match name.to_ascii_lowercase().as_str() {
                "日付" | "date" => &mut columns.date,
                "カテゴリ" | "category" => &mut columns.category,
                "項目" | "item" => &mut columns.item,
                "収入" | "income" => &mut columns.income,
                "支出" | "expense" => &mut columns.expense,
                _ => continue,
            };
            slot.get_or_insert(idx);
        }
        columns
    }

    fn first_missing(&self) -> Option<&'static str> {
        [
            ("date", self.date),
            ("category", self.category),
            ("income", self.income),
            ("expense", self.expense),
        ]
        .into_iter()
        .find(|(_, idx)| idx.is_none())
        .map(|(name, _)| name)
    }

    fn row(&self, record: &StringRecord) -> RawRow {
        let cell = |idx: Option<usize>| idx.and_then(|i| record.get(i)).map(str::to_string);
        RawRow {
            date: cell(self.date),
            category: cell(self.category),
            item: cell(self.item),
            income: cell(self.income),
            expense: cell(self.expense),
        }
    }
}

/// Reads ledger rows from CSV with either the native Japanese headers
/// (`日付,カテゴリ,項目,収入,支出`) or their English equivalents.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<RawRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let columns = Columns::from_headers(rdr.headers()?);
    if let Some(field) = columns.first_missing() {
        return Err(LedgerError::malformed(1, field, "column is missing from the header"));
    }
    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        if record.iter().all(|cell| cell.is_empty()) {
            continue;
        }
        rows.push(columns.row(&record));
    }
    debug!(rows = rows.len(), "csv rows read");
    Ok(rows)
}

/// CSV file on disk.
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LedgerSource for CsvSource {
    fn identity(&self) -> Result<SourceIdentity> {
        let meta = fs::metadata(&self.path)?;
        Ok(SourceIdentity {
            path: self.path.clone(),
            len: meta.len(),
            modified: meta.modified().ok(),
        })
    }

    fn read_rows(&self) -> Result<Vec<RawRow>> {
        let file = File::open(&self.path)?;
        read_rows(BufReader::new(file))
    }
}
