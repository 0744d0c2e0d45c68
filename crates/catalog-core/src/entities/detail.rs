use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An opaque detail value, rendered exactly as the API sent it.
///
/// The API mixes strings (`"128 GB"`) and numbers (`389.99`) for the same
/// logical fields; neither is validated or converted.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(untagged)]
pub enum DetailValue {
    Number(#[schemars(with = "f64")] serde_json::Number),
    Text(String),
}

impl fmt::Display for DetailValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for DetailValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for DetailValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<u64> for DetailValue {
    fn from(value: u64) -> Self {
        Self::Number(value.into())
    }
}

/// Sparse bag of optional descriptive fields attached to an [`Item`](super::Item).
///
/// Wire keys follow the catalog API, which is inconsistent about casing; the
/// aliases accept both spellings seen in practice. Unknown keys are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ItemDetail {
    #[serde(rename = "color", alias = "Color", skip_serializing_if = "Option::is_none")]
    pub color: Option<DetailValue>,

    #[serde(rename = "capacity", alias = "Capacity", skip_serializing_if = "Option::is_none")]
    pub capacity: Option<DetailValue>,

    #[serde(rename = "capacity GB", skip_serializing_if = "Option::is_none")]
    pub capacity_gb: Option<DetailValue>,

    #[serde(rename = "price", alias = "Price", skip_serializing_if = "Option::is_none")]
    pub price: Option<DetailValue>,

    #[serde(rename = "Screen size", alias = "screenSize", skip_serializing_if = "Option::is_none")]
    pub screen_size: Option<DetailValue>,

    #[serde(rename = "Description", alias = "description", skip_serializing_if = "Option::is_none")]
    pub description: Option<DetailValue>,

    #[serde(rename = "generation", alias = "Generation", skip_serializing_if = "Option::is_none")]
    pub generation: Option<DetailValue>,

    #[serde(rename = "CPU model", alias = "cpuModel", skip_serializing_if = "Option::is_none")]
    pub cpu_model: Option<DetailValue>,

    #[serde(rename = "Hard disk size", alias = "hardDiskSize", skip_serializing_if = "Option::is_none")]
    pub hard_disk_size: Option<DetailValue>,
}

impl ItemDetail {
    /// Present fields as `(label, value)` pairs in display order.
    #[must_use]
    pub fn fields(&self) -> Vec<(&'static str, &DetailValue)> {
        [
            ("Color", self.color.as_ref()),
            ("Capacity", self.capacity.as_ref()),
            ("Capacity (GB)", self.capacity_gb.as_ref()),
            ("Price", self.price.as_ref()),
            ("Screen size", self.screen_size.as_ref()),
            ("Description", self.description.as_ref()),
            ("Generation", self.generation.as_ref()),
            ("CPU model", self.cpu_model.as_ref()),
            ("Hard disk size", self.hard_disk_size.as_ref()),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.map(|v| (label, v)))
        .collect()
    }

    /// `true` when no field is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn decodes_mixed_case_keys_and_value_kinds() {
        let detail: ItemDetail = serde_json::from_str(
            r#"{
                "price": 1849.99,
                "CPU model": "Intel Core i9",
                "Hard disk size": "1 TB",
                "year": 2019
            }"#,
        )
        .unwrap();

        assert_eq!(detail.price.as_ref().map(ToString::to_string).as_deref(), Some("1849.99"));
        assert_eq!(detail.cpu_model, Some(DetailValue::from("Intel Core i9")));
        assert_eq!(detail.hard_disk_size, Some(DetailValue::from("1 TB")));
        assert!(detail.color.is_none());
    }

    #[test]
    fn capitalized_aliases_are_accepted() {
        let detail: ItemDetail = serde_json::from_str(
            r#"{"Color": "Red", "Capacity": "64 GB", "Screen size": 7.9, "Description": "Headphones"}"#,
        )
        .unwrap();

        assert_eq!(detail.color, Some(DetailValue::from("Red")));
        assert_eq!(detail.capacity, Some(DetailValue::from("64 GB")));
        assert_eq!(detail.screen_size.map(|v| v.to_string()).as_deref(), Some("7.9"));
        assert_eq!(detail.description, Some(DetailValue::from("Headphones")));
    }

    #[test]
    fn fields_follow_display_order_and_skip_absent() {
        let detail = ItemDetail {
            generation: Some("3rd".into()),
            price: Some(120u64.into()),
            color: Some("Purple".into()),
            ..Default::default()
        };

        let rendered: Vec<(&str, String)> = detail
            .fields()
            .into_iter()
            .map(|(label, value)| (label, value.to_string()))
            .collect();

        assert_eq!(
            rendered,
            vec![
                ("Color", "Purple".to_string()),
                ("Price", "120".to_string()),
                ("Generation", "3rd".to_string()),
            ]
        );
    }

    #[test]
    fn empty_detail_serializes_to_empty_object() {
        let detail = ItemDetail::default();
        assert!(detail.is_empty());
        assert_eq!(serde_json::to_string(&detail).unwrap(), "{}");
    }

    #[test]
    fn capacity_gb_keeps_api_key_on_serialization() {
        let detail = ItemDetail {
            capacity_gb: Some(512u64.into()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&detail).unwrap(), r#"{"capacity GB":512}"#);
    }
}
