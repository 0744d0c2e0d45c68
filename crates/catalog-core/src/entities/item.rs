use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::ItemDetail;

/// A catalog entry as returned by the remote API.
///
/// Immutable once fetched. `id` is unique within a single fetch.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Item {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub data: Option<ItemDetail>,
}

impl Item {
    /// Build an item without a detail payload.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            data: None,
        }
    }

    /// Attach a detail payload.
    #[must_use]
    pub fn with_detail(mut self, data: ItemDetail) -> Self {
        self.data = Some(data);
        self
    }

    /// Case-insensitive substring match against the display name, for a
    /// term that is already lower-cased. An empty term matches every item.
    ///
    /// Linear scans fold the term once per scan, not per item.
    #[must_use]
    pub fn matches_folded(&self, folded_term: &str) -> bool {
        folded_term.is_empty() || self.name.to_lowercase().contains(folded_term)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("MacBook Pro", "pro", true)]
    #[case("MACBOOK PRO", "pro", true)]
    #[case("MacBook Pro", "book p", true)]
    #[case("iPad", "pro", false)]
    #[case("iPad", "", true)]
    #[case("", "", true)]
    #[case("", "a", false)]
    fn folded_match_is_case_insensitive_substring(
        #[case] name: &str,
        #[case] term: &str,
        #[case] expected: bool,
    ) {
        let item = Item::new("1", name);
        assert_eq!(item.matches_folded(term), expected);
    }

    #[test]
    fn missing_data_deserializes_as_none() {
        let item: Item = serde_json::from_str(r#"{"id":"2","name":"iPad"}"#).unwrap();
        assert_eq!(item, Item::new("2", "iPad"));
    }

    #[test]
    fn null_data_deserializes_as_none() {
        let item: Item =
            serde_json::from_str(r#"{"id":"2","name":"Apple iPhone 12 Mini","data":null}"#)
                .unwrap();
        assert!(item.data.is_none());
    }
}
