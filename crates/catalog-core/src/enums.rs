//! Lifecycle enums shared between the pipeline and its presentation layer.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Outcome of the most recent catalog fetch.
///
/// A failed fetch never clears the raw item list; this state is the only
/// place the failure becomes visible.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FetchState {
    /// No fetch has been requested yet.
    #[default]
    Idle,
    /// A fetch is in progress and no snapshot has arrived yet.
    Loading,
    /// The latest snapshot was adopted.
    Loaded { count: usize },
    /// The collaborator failed; the previous raw list is still in place.
    Failed { message: String },
}

impl FetchState {
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    #[must_use]
    pub const fn is_settled(&self) -> bool {
        matches!(self, Self::Loaded { .. } | Self::Failed { .. })
    }
}

impl fmt::Display for FetchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => f.write_str("idle"),
            Self::Loading => f.write_str("loading"),
            Self::Loaded { count } => write!(f, "loaded ({count} items)"),
            Self::Failed { message } => write!(f, "failed: {message}"),
        }
    }
}
