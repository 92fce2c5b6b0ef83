//! Identifier generation port

use domain::ItemId;
#[cfg(test)]
use mockall::automock;

/// Produces identifiers unique within one inventory store
#[cfg_attr(test, automock)]
pub trait IdGenerator: Send + Sync {
    /// Next unused identifier
    fn next_id(&self) -> ItemId;
}
