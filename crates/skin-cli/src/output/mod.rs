use std::io::IsTerminal;
use std::sync::OnceLock;

use serde::Serialize;
use serde_json::Value;
use skin_core::cart::format_paise;

use crate::cli::{GlobalFlags, OutputFormat};

pub mod table;

static TABLE_OPTIONS: OnceLock<table::TableOptions> = OnceLock::new();

/// Fix table styling for this process from the global flags and terminal.
pub fn configure(flags: &GlobalFlags) {
    let terminal = table::Terminal {
        stdout_is_tty: std::io::stdout().is_terminal(),
        no_color: std::env::var_os("NO_COLOR").is_some(),
        columns: std::env::var("COLUMNS").ok(),
    };
    let _ = TABLE_OPTIONS.set(table::TableOptions::resolve(flags, &terminal));
}

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn table_options() -> table::TableOptions {
    TABLE_OPTIONS.get().copied().unwrap_or_default()
}

/// Objects become a key/value table of their scalar fields (nested objects
/// flattened to dotted keys), followed by one titled table per list of
/// records such as cart lines or routine steps.
fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let value = serde_json::to_value(value)?;
    match &value {
        Value::Array(items) => Ok(render_array_table(items)),
        Value::Object(_) => {
            let mut cells = Vec::new();
            let mut sections = Vec::new();
            flatten("", &value, &mut cells, Some(&mut sections));
            cells.sort_by(|a, b| a.0.cmp(&b.0));

            let mut blocks = Vec::with_capacity(1 + sections.len());
            if !cells.is_empty() {
                let rows = cells
                    .into_iter()
                    .map(|(key, cell)| vec![key, cell])
                    .collect::<Vec<_>>();
                blocks.push(table::render_entity_table(
                    &["key", "value"],
                    &rows,
                    table_options(),
                ));
            }
            for (title, items) in sections {
                blocks.push(format!("{title}:\n{}", render_array_table(&items)));
            }
            Ok(blocks.join("\n\n"))
        }
        scalar => {
            let rows = vec![vec![value_to_cell("", scalar)]];
            Ok(table::render_entity_table(
                &["value"],
                &rows,
                table_options(),
            ))
        }
    }
}

fn render_array_table(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell("", item)])
            .collect::<Vec<_>>();
        return table::render_entity_table(&["value"], &rows, table_options());
    }

    let flattened = items
        .iter()
        .map(|item| {
            let mut cells = Vec::new();
            flatten("", item, &mut cells, None);
            cells
        })
        .collect::<Vec<_>>();

    let mut headers = Vec::<String>::new();
    for cells in &flattened {
        for (key, _) in cells {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    if headers.is_empty() {
        return String::from("(no columns)");
    }

    headers.sort();

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = flattened
        .iter()
        .map(|cells| {
            headers
                .iter()
                .map(|header| {
                    cells
                        .iter()
                        .find(|(key, _)| key == header)
                        .map_or_else(|| String::from("-"), |(_, cell)| cell.clone())
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_entity_table(&header_refs, &rows, table_options())
}

/// Collect `(dotted_key, cell)` pairs. Lists of records go to `sections` when
/// given, otherwise they collapse to a row count.
fn flatten(
    prefix: &str,
    value: &Value,
    cells: &mut Vec<(String, String)>,
    mut sections: Option<&mut Vec<(String, Vec<Value>)>>,
) {
    let Value::Object(map) = value else {
        cells.push((prefix.to_string(), value_to_cell(prefix, value)));
        return;
    };

    for (key, child) in map {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match child {
            Value::Object(_) => flatten(&path, child, cells, sections.as_deref_mut()),
            Value::Array(items) if !items.is_empty() && items.iter().all(Value::is_object) => {
                match sections.as_deref_mut() {
                    Some(sections) => sections.push((path, items.clone())),
                    None => cells.push((path, format!("[{} rows]", items.len()))),
                }
            }
            other => cells.push((path.clone(), value_to_cell(&path, other))),
        }
    }
}

fn value_to_cell(key: &str, value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) if key.ends_with("_paise") => {
            v.as_i64().map_or_else(|| v.to_string(), format_paise)
        }
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::{render, table::render_entity_table};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Totals {
        subtotal_paise: i64,
        item_count: u32,
    }

    #[derive(Serialize)]
    struct Line {
        item_id: i64,
        name: &'static str,
    }

    #[derive(Serialize)]
    struct Example {
        currency: &'static str,
        totals: Totals,
        lines: Vec<Line>,
    }

    fn example() -> Example {
        Example {
            currency: "INR",
            totals: Totals {
                subtotal_paise: 159_800,
                item_count: 2,
            },
            lines: vec![
                Line {
                    item_id: 1,
                    name: "Ultra Facial Cream",
                },
                Line {
                    item_id: 2,
                    name: "Gentle Skin Cleanser",
                },
            ],
        }
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&example(), OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["currency"], "INR");
        assert_eq!(parsed["totals"]["subtotal_paise"], 159_800);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&example(), OutputFormat::Raw).expect("raw render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["lines"][1]["item_id"], 2);
        assert!(!out.contains('\n'));
    }

    #[test]
    fn table_render_flattens_nested_objects() {
        let out = render(&example(), OutputFormat::Table).expect("table render should work");
        assert!(out.lines().next().is_some_and(|line| line.contains("key")));
        assert!(out.contains("totals.item_count"));
        assert!(out.contains("1598.00"));
    }

    #[test]
    fn table_render_adds_a_section_per_record_list() {
        let out = render(&example(), OutputFormat::Table).expect("table render should work");
        let section = out
            .split("\n\n")
            .find(|block| block.starts_with("lines:"))
            .expect("lines section should render");
        assert!(section.contains("item_id"));
        assert!(section.contains("Gentle Skin Cleanser"));
    }

    #[test]
    fn empty_list_renders_placeholder() {
        let empty: Vec<Line> = Vec::new();
        let out = render(&empty, OutputFormat::Table).expect("table render should work");
        assert_eq!(out, "(no rows)");
    }

    #[test]
    fn table_alignment_handles_mixed_widths() {
        let headers = ["id", "trend", "name"];
        let rows = vec![
            vec!["1".to_string(), "stable".to_string(), "short".to_string()],
            vec![
                "200".to_string(),
                "improving".to_string(),
                "a much longer product name".to_string(),
            ],
        ];

        let table = render_entity_table(
            &headers,
            &rows,
            super::table::TableOptions {
                max_width: None,
                color: false,
            },
        );
        let lines: Vec<&str> = table.lines().collect();

        assert!(lines.len() >= 4);
        assert!(lines[0].contains("id"));
        assert!(lines[0].contains("trend"));
        assert!(lines[1].chars().all(|c| c == '-'));
    }
}
