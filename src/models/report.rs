//! Report table data models

use serde::{Deserialize, Serialize};

use super::ExactDuration;

/// Horizontal alignment of a table column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnAlignment {
    Left,
    Center,
    Right,
}

/// One formatted measurement at a (group, size) coordinate
#[derive(Debug, Clone, PartialEq)]
pub struct ReportCell {
    pub group_id: String,
    pub size: u32,
    /// Exact mean time per iteration
    pub mean: ExactDuration,
    /// `mean` as shown in the table
    pub display: String,
}

/// Size label followed by one cell per group
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub label: String,
    pub cells: Vec<ReportCell>,
}

impl ReportRow {
    /// The row as plain strings, label first
    pub fn to_strings(&self) -> Vec<String> {
        std::iter::once(self.label.clone())
            .chain(self.cells.iter().map(|c| c.display.clone()))
            .collect()
    }
}

/// Complete comparison table ready for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct ReportTable {
    /// Size column label followed by group display names
    pub header: Vec<String>,
    pub rows: Vec<ReportRow>,
    /// One directive per column
    pub alignments: Vec<ColumnAlignment>,
}

impl ReportTable {
    /// An empty table with every column centered
    pub fn new(header: Vec<String>) -> Self {
        let alignments = vec![ColumnAlignment::Center; header.len()];
        Self {
            header,
            rows: Vec::new(),
            alignments,
        }
    }

    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// Look up a cell by group id and size
    pub fn cell(&self, group_id: &str, size: u32) -> Option<&ReportCell> {
        self.rows
            .iter()
            .flat_map(|row| row.cells.iter())
            .find(|c| c.group_id == group_id && c.size == size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(group_id: &str, size: u32, nanos: u64) -> ReportCell {
        let mean = ExactDuration::from_nanos(nanos);
        ReportCell {
            group_id: group_id.to_string(),
            size,
            display: mean.to_string(),
            mean,
        }
    }

    #[test]
    fn test_row_to_strings() {
        let row = ReportRow {
            label: "2^{3}".to_string(),
            cells: vec![cell("a", 3, 20), cell("b", 3, 1500)],
        };
        assert_eq!(row.to_strings(), vec!["2^{3}", "20.00 ns", "1.50 µs"]);
    }

    #[test]
    fn test_table_lookup() {
        let mut table = ReportTable::new(vec!["Size".into(), "A".into()]);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.alignments, vec![ColumnAlignment::Center; 2]);

        table.rows.push(ReportRow {
            label: "2^{4}".to_string(),
            cells: vec![cell("a", 4, 7)],
        });
        assert_eq!(table.cell("a", 4).map(|c| c.display.as_str()), Some("7.00 ns"));
        assert!(table.cell("a", 5).is_none());
    }
}
