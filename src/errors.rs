use thiserror::Error;

/// Error type that captures ledger loading and aggregation failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Malformed row {row}: field `{field}` {reason}")]
    MalformedRow {
        row: usize,
        field: &'static str,
        reason: String,
    },
    #[error("Ledger contains no entries")]
    EmptyLedger,
    #[error("Invalid date range: {0}")]
    InvalidRange(String),
    #[error("Invalid rolling window: {0} (must be a positive number of days)")]
    InvalidWindow(usize),
    #[error("Unknown category `{label}`{}", suggestion_hint(.suggestion))]
    UnknownCategory {
        label: String,
        suggestion: Option<String>,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LedgerError>;

impl LedgerError {
    pub(crate) fn malformed(row: usize, field: &'static str, reason: impl Into<String>) -> Self {
        LedgerError::MalformedRow {
            row,
            field,
            reason: reason.into(),
        }
    }
}

fn suggestion_hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(best) => format!(" (did you mean `{}`?)", best),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_category_message_includes_suggestion() {
        let err = LedgerError::UnknownCategory {
            label: "Fod".into(),
            suggestion: Some("Food".into()),
        };
        assert_eq!(
            err.to_string(),
            "Unknown category `Fod` (did you mean `Food`?)"
        );
    }

    #[test]
    fn malformed_row_names_field() {
        let err = LedgerError::malformed(3, "date", "is missing");
        assert_eq!(err.to_string(), "Malformed row 3: field `date` is missing");
    }
}
