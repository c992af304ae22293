//! Tracker configuration: sheet name, child roster and column labels.
//!
//! # Responsibility
//! - Hold everything that used to be forked per script revision (display
//!   labels, enumerated child set) as declarative configuration.
//! - Validate the configuration before a repository is built on it.
//!
//! # Invariants
//! - The roster is a non-empty set of distinct child names.
//! - All six column labels are non-empty and distinct.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Number of sheet columns a record occupies.
pub const COLUMN_COUNT: usize = 6;

/// 1-based sheet column holding the status value, fixed by the append order.
pub const STATUS_COLUMN: usize = 5;

/// Names of the six sheet columns, in fixed column order.
///
/// The original household deployments used localized headers; the labels are
/// data here, so one implementation serves every language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnLabels {
    pub id: String,
    pub child: String,
    pub content: String,
    pub deadline: String,
    pub status: String,
    pub memo: String,
}

impl ColumnLabels {
    /// Returns the labels as a header row, in sheet column order.
    pub fn header(&self) -> [String; COLUMN_COUNT] {
        [
            self.id.clone(),
            self.child.clone(),
            self.content.clone(),
            self.deadline.clone(),
            self.status.clone(),
            self.memo.clone(),
        ]
    }
}

impl Default for ColumnLabels {
    fn default() -> Self {
        Self {
            id: "ID".to_string(),
            child: "child".to_string(),
            content: "content".to_string(),
            deadline: "deadline".to_string(),
            status: "status".to_string(),
            memo: "memo".to_string(),
        }
    }
}

/// Declarative tracker configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Logical name of the backing sheet.
    pub sheet_name: String,
    /// Enumerated set of child names records may belong to.
    pub children: Vec<String>,
    /// Sheet header labels.
    #[serde(default)]
    pub columns: ColumnLabels,
}

impl TrackerConfig {
    /// Builds a configuration with default column labels.
    pub fn new<S, I, T>(sheet_name: S, children: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            sheet_name: sheet_name.into(),
            children: children.into_iter().map(Into::into).collect(),
            columns: ColumnLabels::default(),
        }
    }

    /// Validates declaration-level configuration invariants.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.sheet_name.trim().is_empty() {
            return Err(ConfigValidationError::EmptySheetName);
        }

        if self.children.is_empty() {
            return Err(ConfigValidationError::EmptyRoster);
        }
        let mut seen = BTreeSet::<&str>::new();
        for child in &self.children {
            let normalized = child.trim();
            if normalized.is_empty() {
                return Err(ConfigValidationError::EmptyChildName);
            }
            if !seen.insert(normalized) {
                return Err(ConfigValidationError::DuplicateChild(normalized.to_string()));
            }
        }

        let header = self.columns.header();
        let mut labels = BTreeSet::<&str>::new();
        for label in &header {
            let normalized = label.trim();
            if normalized.is_empty() {
                return Err(ConfigValidationError::EmptyColumnLabel);
            }
            if !labels.insert(normalized) {
                return Err(ConfigValidationError::DuplicateColumnLabel(
                    normalized.to_string(),
                ));
            }
        }

        Ok(())
    }
}

/// Declaration-level configuration violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    EmptySheetName,
    EmptyRoster,
    EmptyChildName,
    DuplicateChild(String),
    EmptyColumnLabel,
    DuplicateColumnLabel(String),
}

impl Display for ConfigValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptySheetName => write!(f, "sheet name cannot be empty"),
            Self::EmptyRoster => write!(f, "child roster cannot be empty"),
            Self::EmptyChildName => write!(f, "child names cannot be empty"),
            Self::DuplicateChild(name) => write!(f, "duplicate child in roster: `{name}`"),
            Self::EmptyColumnLabel => write!(f, "column labels cannot be empty"),
            Self::DuplicateColumnLabel(label) => {
                write!(f, "duplicate column label: `{label}`")
            }
        }
    }
}

impl Error for ConfigValidationError {}

#[cfg(test)]
mod tests {
    use super::{ConfigValidationError, TrackerConfig};

    #[test]
    fn default_config_for_two_children_is_valid() {
        let config = TrackerConfig::new("homework2025", ["Sora", "Kokoro"]);
        config.validate().expect("two-child config should be valid");
    }

    #[test]
    fn empty_roster_is_rejected() {
        let config = TrackerConfig::new("homework2025", Vec::<String>::new());
        assert_eq!(
            config.validate().unwrap_err(),
            ConfigValidationError::EmptyRoster
        );
    }

    #[test]
    fn duplicate_children_are_rejected() {
        let config = TrackerConfig::new("homework2025", ["Sora", "Sora"]);
        assert_eq!(
            config.validate().unwrap_err(),
            ConfigValidationError::DuplicateChild("Sora".to_string())
        );
    }

    #[test]
    fn localized_labels_round_trip_through_json() {
        let mut config = TrackerConfig::new("homework2025", ["そら", "こころ"]);
        config.columns.child = "子供".to_string();
        config.columns.content = "宿題内容".to_string();
        config.columns.deadline = "期限".to_string();
        config.columns.status = "進捗".to_string();
        config.columns.memo = "メモ".to_string();
        config.validate().expect("localized labels should be valid");

        let json = serde_json::to_string(&config).expect("config serializes");
        let back: TrackerConfig = serde_json::from_str(&json).expect("config deserializes");
        assert_eq!(back, config);
    }
}
