use serde::Serialize;

use crate::cli::OutputFormat;
use crate::ui;

pub mod items;
pub mod table;

/// Render a response in the requested format.
///
/// JSON and raw output serialize `value` as-is. Tables are response
/// specific, so `table` builds that form.
pub fn render<T: Serialize>(
    value: &T,
    format: OutputFormat,
    table: impl FnOnce() -> String,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => Ok(table()),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a response in the requested format.
pub fn output<T: Serialize>(
    value: &T,
    format: OutputFormat,
    table: impl FnOnce() -> String,
) -> anyhow::Result<()> {
    let rendered = render(value, format, table)?;
    println!("{rendered}");
    Ok(())
}

fn table_options() -> table::TableOptions<'static> {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
        highlight: None,
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::render;
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Example {
        id: &'static str,
        count: u32,
    }

    fn no_table() -> String {
        String::from("<table>")
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Example { id: "x", count: 7 };
        let out = render(&value, OutputFormat::Json, no_table).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], "x");
        assert_eq!(parsed["count"], 7);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let value = Example { id: "x", count: 7 };
        let out = render(&value, OutputFormat::Raw, no_table).expect("raw render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], "x");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn table_render_uses_the_response_table() {
        let value = Example { id: "x", count: 7 };
        let out = render(&value, OutputFormat::Table, no_table).expect("table render");
        assert_eq!(out, "<table>");
    }
}
