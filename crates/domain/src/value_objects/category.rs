//! Product category value object

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// Food category an inventory item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Dairy,
    Meat,
    Vegetables,
    Fruits,
    Bakery,
    Frozen,
    Canned,
    Beverages,
    Snacks,
    /// Anything that fits none of the above
    #[default]
    Other,
}

impl Category {
    /// Machine-readable key, as stored and accepted on input
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dairy => "dairy",
            Self::Meat => "meat",
            Self::Vegetables => "vegetables",
            Self::Fruits => "fruits",
            Self::Bakery => "bakery",
            Self::Frozen => "frozen",
            Self::Canned => "canned",
            Self::Beverages => "beverages",
            Self::Snacks => "snacks",
            Self::Other => "other",
        }
    }

    /// Get a human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Dairy => "Dairy",
            Self::Meat => "Meat",
            Self::Vegetables => "Vegetables",
            Self::Fruits => "Fruits",
            Self::Bakery => "Bakery",
            Self::Frozen => "Frozen",
            Self::Canned => "Canned",
            Self::Beverages => "Beverages",
            Self::Snacks => "Snacks",
            Self::Other => "Other",
        }
    }

    /// Get all categories in display order
    #[must_use]
    pub const fn all() -> [Self; 10] {
        [
            Self::Dairy,
            Self::Meat,
            Self::Vegetables,
            Self::Fruits,
            Self::Bakery,
            Self::Frozen,
            Self::Canned,
            Self::Beverages,
            Self::Snacks,
            Self::Other,
        ]
    }

    /// Parse a category, falling back to `Other` for unknown input
    #[must_use]
    pub fn parse_or_other(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Self::all()
            .into_iter()
            .find(|c| c.as_str() == key)
            .ok_or_else(|| DomainError::InvalidCategory(s.to_string()))
    }
}
