use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strsim::levenshtein;

use crate::errors::{LedgerError, Result};

const MAX_SUGGESTION_DISTANCE: usize = 3;

/// Household spending and income categories.
///
/// The known set covers the categories the household ledger ships with.
/// Anything else is carried as [`Category::Other`] when the load policy is
/// permissive.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Income,
    Food,
    Utilities,
    Transportation,
    Entertainment,
    DailyGoods,
    Medical,
    Other(String),
}

impl Category {
    pub const KNOWN: [Category; 7] = [
        Category::Income,
        Category::Food,
        Category::Utilities,
        Category::Transportation,
        Category::Entertainment,
        Category::DailyGoods,
        Category::Medical,
    ];

    /// Resolves a label to a known category.
    ///
    /// English names match case-insensitively; the ledger's native Japanese
    /// labels match exactly.
    pub fn known(label: &str) -> Option<Category> {
        let trimmed = label.trim();
        let category = match trimmed {
            "収入" => Category::Income,
            "食費" => Category::Food,
            "光熱費" => Category::Utilities,
            "交通費" => Category::Transportation,
            "娯楽" => Category::Entertainment,
            "日用品" => Category::DailyGoods,
            "医療費" => Category::Medical,
            _ => match trimmed.to_ascii_lowercase().as_str() {
                "income" => Category::Income,
                "food" => Category::Food,
                "utilities" => Category::Utilities,
                "transportation" => Category::Transportation,
                "entertainment" => Category::Entertainment,
                "daily goods" | "dailygoods" => Category::DailyGoods,
                "medical" => Category::Medical,
                _ => return None,
            },
        };
        Some(category)
    }

    /// Parses a label under the given policy.
    pub fn parse(label: &str, policy: CategoryPolicy) -> Result<Category> {
        if let Some(category) = Category::known(label) {
            return Ok(category);
        }
        match policy {
            CategoryPolicy::Permissive => Ok(Category::Other(label.trim().to_string())),
            CategoryPolicy::Strict => Err(LedgerError::UnknownCategory {
                label: label.trim().to_string(),
                suggestion: closest_known(label),
            }),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Category::Income => "Income",
            Category::Food => "Food",
            Category::Utilities => "Utilities",
            Category::Transportation => "Transportation",
            Category::Entertainment => "Entertainment",
            Category::DailyGoods => "Daily Goods",
            Category::Medical => "Medical",
            Category::Other(label) => label,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Category::Other(_))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn closest_known(label: &str) -> Option<String> {
    let needle = label.trim().to_ascii_lowercase();
    Category::KNOWN
        .iter()
        .map(|category| {
            (
                levenshtein(&category.name().to_ascii_lowercase(), &needle),
                category.name(),
            )
        })
        .min_by_key(|(distance, _)| *distance)
        .filter(|(distance, _)| *distance <= MAX_SUGGESTION_DISTANCE)
        .map(|(_, name)| name.to_string())
}

/// How labels outside the known category set are treated at load time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CategoryPolicy {
    #[default]
    Permissive,
    Strict,
}

/// Category predicate used by the filter engine.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub const ALL_SENTINEL: &'static str = "all";

    /// Builds a selector from user input, treating `sentinel` (and the
    /// built-in "all"/"全て") as no restriction.
    pub fn from_selection(label: &str, sentinel: &str) -> Self {
        let trimmed = label.trim();
        if trimmed.is_empty()
            || trimmed.eq_ignore_ascii_case(sentinel)
            || trimmed.eq_ignore_ascii_case(Self::ALL_SENTINEL)
            || trimmed == "全て"
        {
            return CategoryFilter::All;
        }
        match Category::parse(trimmed, CategoryPolicy::Permissive) {
            Ok(category) => CategoryFilter::Only(category),
            Err(_) => CategoryFilter::Only(Category::Other(trimmed.to_string())),
        }
    }

    pub fn matches(&self, category: &Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(CategoryFilter::from_selection(s, CategoryFilter::ALL_SENTINEL))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn japanese_and_english_labels_resolve_to_same_category() {
        assert_eq!(Category::known("食費"), Some(Category::Food));
        assert_eq!(Category::known("food"), Some(Category::Food));
        assert_eq!(Category::known(" Daily Goods "), Some(Category::DailyGoods));
        assert_eq!(Category::known("日用品"), Some(Category::DailyGoods));
    }

    #[test]
    fn permissive_policy_keeps_unknown_labels() {
        let parsed = Category::parse("Pets", CategoryPolicy::Permissive).unwrap();
        assert_eq!(parsed, Category::Other("Pets".into()));
        assert!(!parsed.is_known());
        assert_eq!(parsed.to_string(), "Pets");
    }

    #[test]
    fn strict_policy_rejects_unknown_labels_with_suggestion() {
        let err = Category::parse("Medicl", CategoryPolicy::Strict).unwrap_err();
        match err {
            LedgerError::UnknownCategory { label, suggestion } => {
                assert_eq!(label, "Medicl");
                assert_eq!(suggestion.as_deref(), Some("Medical"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn strict_policy_omits_distant_suggestions() {
        let err = Category::parse("Cryptocurrency", CategoryPolicy::Strict).unwrap_err();
        assert!(matches!(
            err,
            LedgerError::UnknownCategory {
                suggestion: None,
                ..
            }
        ));
    }

    #[test]
    fn selection_sentinel_means_all() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!("ALL".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!("全て".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_selection("everything", "everything"),
            CategoryFilter::All
        );
        assert_eq!(
            "Medical".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Medical)
        );
    }
}
