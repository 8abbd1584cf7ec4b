//! Markdown rendering of curated summary records.

use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;

use crate::catalog::SummaryRecord;

/// Render a summary record as markdown.
///
/// Layout: a title heading, one second-level heading per section followed
/// by its bullets, third-level headings for grouped sub-sections. Sections
/// render in the record's declaration order, so output is
/// byte-deterministic for a given record. The document ends with a single
/// trailing newline.
pub fn render_markdown(record: &SummaryRecord) -> String {
    let mut lines: Vec<String> = vec![format!("# {}", record.title), String::new()];

    for (name, value) in &record.sections {
        lines.push(format!("## {}", title_case(name)));

        match value {
            Value::Array(items) => push_bullets(&mut lines, items),
            Value::Object(groups) => {
                for (sub_name, sub_value) in groups {
                    lines.push(format!("### {}", title_case(sub_name)));
                    if let Value::Array(items) = sub_value {
                        push_bullets(&mut lines, items);
                    }
                }
            }
            _ => {}
        }

        lines.push(String::new());
    }

    lines.join("\n")
}

/// Render and write one summary file.
pub fn write_summary(path: &Path, record: &SummaryRecord) -> Result<()> {
    std::fs::write(path, render_markdown(record))
        .with_context(|| format!("Failed to write summary: {}", path.display()))
}

fn push_bullets(lines: &mut Vec<String>, items: &[Value]) {
    for item in items {
        if let Value::String(item) = item {
            lines.push(format!("- {}", item));
        }
    }
}

/// `design_elements` -> `Design Elements`
fn title_case(name: &str) -> String {
    name.replace('_', " ")
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
