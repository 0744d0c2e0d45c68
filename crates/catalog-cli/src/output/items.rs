//! Item-shaped output: JSON responses keep their envelope, tables get one
//! row per item with the detail fields folded into a summary column.

use catalog_core::entities::Item;
use catalog_core::responses::ItemDetailResponse;
use serde::Serialize;

use super::table::Highlight;
use super::{output, table, table_options};
use crate::cli::OutputFormat;

const LIST_HEADERS: [&str; 3] = ["id", "name", "details"];

/// One-line summary of an item's detail fields.
fn summarize(item: &Item) -> String {
    item.data
        .as_ref()
        .map(|detail| {
            detail
                .fields()
                .into_iter()
                .map(|(label, value)| format!("{label}: {value}"))
                .collect::<Vec<_>>()
                .join(", ")
        })
        .filter(|summary| !summary.is_empty())
        .unwrap_or_else(|| String::from("-"))
}

/// Item rows. With a search term, its match in the name column is
/// highlighted on color terminals.
#[must_use]
pub fn render_item_rows(items: &[Item], term: Option<&str>) -> String {
    if items.is_empty() {
        return String::from("(no items)");
    }
    let rows = items
        .iter()
        .map(|item| vec![item.id.clone(), item.name.clone(), summarize(item)])
        .collect::<Vec<_>>();
    let options = table::TableOptions {
        highlight: term.map(|term| Highlight { column: 1, term }),
        ..table_options()
    };
    table::render_entity_table(&LIST_HEADERS, &rows, options)
}

/// Print a list-shaped response. Tables show `items` only.
pub fn output_listing<T: Serialize>(
    response: &T,
    items: &[Item],
    term: Option<&str>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    output(response, format, || render_item_rows(items, term))
}

#[must_use]
pub fn render_detail(response: &ItemDetailResponse) -> String {
    let mut rows = vec![
        vec![String::from("Id"), response.item.id.clone()],
        vec![String::from("Name"), response.item.name.clone()],
    ];
    rows.extend(
        response
            .fields
            .iter()
            .map(|field| vec![field.label.clone(), field.value.clone()]),
    );
    table::render_entity_table(&["field", "value"], &rows, table_options())
}

/// Print a detail response. Tables show one row per present field.
pub fn output_detail(response: &ItemDetailResponse, format: OutputFormat) -> anyhow::Result<()> {
    output(response, format, || render_detail(response))
}
