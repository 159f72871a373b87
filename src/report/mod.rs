//! Report builder module
//!
//! Walks every configured size and group in declared order, reads and
//! averages the samples, and assembles the comparison table.

pub mod render;

use std::io::Write;

use tracing::info;

use crate::config::ReportConfig;
use crate::io::RecordSource;
use crate::models::{ReportCell, ReportRow, ReportTable};
use crate::stats::mean_time_per_iteration;
use crate::util::units::{format_duration, format_size_label};
use crate::Result;

pub use render::{TableRenderer, TabledRenderer};

/// Builds a [`ReportTable`] from a configuration and a record source
pub struct ReportBuilder<'a> {
    config: &'a ReportConfig,
}

impl<'a> ReportBuilder<'a> {
    pub fn new(config: &'a ReportConfig) -> Self {
        Self { config }
    }

    /// Header row: size column label, then group names in column order
    pub fn header(&self) -> Vec<String> {
        std::iter::once(self.config.size_column.clone())
            .chain(self.config.groups.iter().map(|g| g.name.clone()))
            .collect()
    }

    /// Build the table. Sizes form the outer loop and groups the inner one.
    ///
    /// One `<group id> <size> <duration>` line is written to `diagnostics`
    /// as each cell is computed. The first failure aborts the build.
    pub fn build<S, W>(&self, source: &S, diagnostics: &mut W) -> Result<ReportTable>
    where
        S: RecordSource + ?Sized,
        W: Write + ?Sized,
    {
        let mut table = ReportTable::new(self.header());

        for &size in &self.config.sizes {
            let mut cells = Vec::with_capacity(self.config.groups.len());

            for group in &self.config.groups {
                let record = source.read_record(&group.id, size)?;
                let mean = mean_time_per_iteration(&record)?;
                let display = format_duration(&mean);

                writeln!(diagnostics, "{} {} {}", group.id, size, display)?;

                cells.push(ReportCell {
                    group_id: group.id.clone(),
                    size,
                    mean,
                    display,
                });
            }

            table.rows.push(ReportRow {
                label: format_size_label(size, self.config.math_labels),
                cells,
            });
        }

        info!(
            rows = table.rows.len(),
            columns = table.column_count(),
            "report table built"
        );

        Ok(table)
    }
}
