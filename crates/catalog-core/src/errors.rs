//! Cross-cutting error types for the catalog workspace.
//!
//! Domain-specific errors (`FetchError`, `ConfigError`) are defined in their
//! respective crates. They converge into `anyhow` in `catalog-cli`.

use thiserror::Error;

/// Errors that can be raised by any catalog crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },
}

impl CoreError {
    /// Shorthand for a missing catalog item.
    #[must_use]
    pub fn item_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "item".to_string(),
            id: id.into(),
        }
    }
}
