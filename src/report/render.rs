//! Table rendering
//!
//! Layout is delegated to `tabled`; this module only maps the report's
//! header, rows, alignment and style onto it.

use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::Table;

use crate::config::TableStyle;
use crate::models::{ColumnAlignment, ReportTable};

/// Turns a finished report table into text
pub trait TableRenderer {
    fn render(&self, table: &ReportTable) -> String;
}

/// [`TableRenderer`] backed by the `tabled` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct TabledRenderer {
    style: TableStyle,
}

impl TabledRenderer {
    pub fn new(style: TableStyle) -> Self {
        Self { style }
    }

    fn apply_style(&self, table: &mut Table) {
        match self.style {
            TableStyle::Markdown => {
                table.with(Style::markdown());
            }
            TableStyle::Ascii => {
                table.with(Style::ascii());
            }
            TableStyle::Psql => {
                table.with(Style::psql());
            }
            TableStyle::Rounded => {
                table.with(Style::rounded());
            }
        }
    }
}

fn alignment(directive: ColumnAlignment) -> Alignment {
    match directive {
        ColumnAlignment::Left => Alignment::left(),
        ColumnAlignment::Center => Alignment::center(),
        ColumnAlignment::Right => Alignment::right(),
    }
}

impl TableRenderer for TabledRenderer {
    fn render(&self, table: &ReportTable) -> String {
        let mut builder = Builder::default();
        builder.push_record(table.header.iter().cloned());
        for row in &table.rows {
            builder.push_record(row.to_strings());
        }

        let mut rendered = builder.build();
        self.apply_style(&mut rendered);

        for (column, directive) in table.alignments.iter().enumerate() {
            rendered.modify(Columns::single(column), alignment(*directive));
        }

        let text = rendered.to_string();
        match self.style {
            TableStyle::Markdown => mark_markdown_alignment(&text, &table.alignments),
            _ => text,
        }
    }
}

/// Rewrite the markdown header separator with `:---:` style alignment
/// markers; padding alone is lost once the markdown is rendered.
fn mark_markdown_alignment(text: &str, alignments: &[ColumnAlignment]) -> String {
    text.lines()
        .enumerate()
        .map(|(index, line)| {
            if index == 1 {
                separator_line(line, alignments)
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn separator_line(line: &str, alignments: &[ColumnAlignment]) -> String {
    let segments: Vec<&str> = line.split('|').collect();
    // leading and trailing pipes leave empty segments at both ends
    if segments.len() < 3 {
        return line.to_string();
    }

    let inner = &segments[1..segments.len() - 1];
    let marked: Vec<String> = inner
        .iter()
        .enumerate()
        .map(|(column, segment)| {
            let width = segment.chars().count();
            match alignments.get(column) {
                Some(directive) if width >= 2 => marker(*directive, width),
                _ => segment.to_string(),
            }
        })
        .collect();

    format!("|{}|", marked.join("|"))
}

fn marker(directive: ColumnAlignment, width: usize) -> String {
    match directive {
        ColumnAlignment::Left => format!(":{}", "-".repeat(width - 1)),
        ColumnAlignment::Center => format!(":{}:", "-".repeat(width - 2)),
        ColumnAlignment::Right => format!("{}:", "-".repeat(width - 1)),
    }
}
