//! Expiry urgency - How soon an item needs attention

use serde::{Deserialize, Serialize};

/// Day thresholds for urgency classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrgencyThresholds {
    /// At or below this many days an item is critical
    pub critical_days: u64,
    /// At or below this many days an item is expiring soon
    pub warning_days: u64,
}

impl Default for UrgencyThresholds {
    fn default() -> Self {
        Self {
            critical_days: 2,
            warning_days: 5,
        }
    }
}

/// Urgency level derived from a days-left count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryUrgency {
    /// Needs to be used right away
    Critical,
    /// Expiring soon
    Warning,
    /// Plenty of time left
    Fresh,
}

impl ExpiryUrgency {
    /// Classify a days-left count
    #[must_use]
    pub const fn classify(days_left: u64, thresholds: &UrgencyThresholds) -> Self {
        if days_left <= thresholds.critical_days {
            Self::Critical
        } else if days_left <= thresholds.warning_days {
            Self::Warning
        } else {
            Self::Fresh
        }
    }

    /// Get a human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::Warning => "Expiring Soon",
            Self::Fresh => "Fresh",
        }
    }

    /// Short status text for an item with `days_left` days
    pub fn status_text(&self, days_left: u64) -> String {
        match self {
            Self::Critical => format!("{days_left} days left"),
            Self::Warning | Self::Fresh => self.label().to_string(),
        }
    }
}

impl std::fmt::Display for ExpiryUrgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
