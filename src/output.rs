//! Text and JSON rendering for the CLI

use crate::arch::{architectures, Architecture};
use crate::collections::FamilyGroups;
use crate::error::Result;
use crate::instance_id::ParsedInstanceId;
use comfy_table::{Cell, Color, Table};
use serde::{Deserialize, Serialize};

/// `--format` on the command line, `output.format` in the config file
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchReport {
    pub name: String,
    pub architectures: Vec<Architecture>,
}

impl ArchReport {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            architectures: architectures(name),
        }
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn render_parsed(ids: &[ParsedInstanceId], format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return to_json(ids);
    }

    let mut table = Table::new();
    table.set_header(vec!["Input", "Family", "Generation", "Suffix", "Size", "Valid"]);
    for id in ids {
        let valid = if id.valid {
            Cell::new("yes").fg(Color::Green)
        } else {
            Cell::new("no").fg(Color::Red)
        };
        table.add_row(vec![
            Cell::new(&id.raw),
            Cell::new(&id.family),
            Cell::new(id.generation.map(|g| g.to_string()).unwrap_or_default()),
            Cell::new(&id.suffix),
            Cell::new(id.size.as_deref().unwrap_or("")),
            valid,
        ]);
    }
    Ok(table.to_string())
}

/// One name per line, or a JSON array
pub fn render_list(items: &[String], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(items),
        OutputFormat::Text => Ok(items.join("\n")),
    }
}

pub fn render_groups(groups: &FamilyGroups<String>, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return to_json(groups);
    }

    let mut table = Table::new();
    table.set_header(vec!["Family", "Count", "Names"]);
    for (family, items) in groups.iter() {
        table.add_row(vec![
            Cell::new(family),
            Cell::new(items.len()),
            Cell::new(items.join(", ")),
        ]);
    }
    Ok(table.to_string())
}

pub fn render_arch(reports: &[ArchReport], format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return to_json(reports);
    }

    let mut table = Table::new();
    table.set_header(vec!["Name", "Architecture"]);
    for report in reports {
        let tags = if report.architectures.is_empty() {
            "-".to_string()
        } else {
            report
                .architectures
                .iter()
                .map(|a| a.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        };
        table.add_row(vec![Cell::new(&report.name), Cell::new(tags)]);
    }
    Ok(table.to_string())
}
