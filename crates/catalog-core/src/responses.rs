//! CLI response types returned as JSON by `catalog` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Item;
use crate::enums::FetchState;

/// Response from `catalog list`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ItemListResponse {
    pub items: Vec<Item>,
    pub total_items: u32,
    pub fetch: FetchState,
}

/// Response from `catalog search`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SearchResultsResponse {
    pub term: String,
    pub results: Vec<Item>,
    pub total_results: u32,
    pub total_items: u32,
}

/// One labelled detail field, flattened for display.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DetailField {
    pub label: String,
    pub value: String,
}

/// Response from `catalog show`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ItemDetailResponse {
    pub item: Item,
    pub fields: Vec<DetailField>,
}

impl ItemDetailResponse {
    /// Build a detail response with the item's present fields in display order.
    #[must_use]
    pub fn new(item: Item) -> Self {
        let fields = item
            .data
            .as_ref()
            .map(|detail| {
                detail
                    .fields()
                    .into_iter()
                    .map(|(label, value)| DetailField {
                        label: label.to_string(),
                        value: value.to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default();
        Self { item, fields }
    }
}
