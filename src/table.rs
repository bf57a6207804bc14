use log::info;
use std::collections::HashSet;
use std::fmt;
use std::fs::File;

/// An ordered set of named columns plus string rows. This is the projected
/// output shape of every listing operation; rows are kept contiguous, so
/// de-duplication re-indexes implicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub(crate) fn push_row(&mut self, row: Vec<String>) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Drop rows that are full-row duplicates of an earlier row, keeping
    /// first-occurrence order.
    pub(crate) fn dedup_rows(&mut self) {
        let mut seen: HashSet<Vec<String>> = HashSet::new();
        self.rows.retain(|row| seen.insert(row.clone()));
    }

    /// Save the table to a CSV file, header row first.
    pub fn save_to_csv(&self, filename: &str) -> Result<(), Box<dyn std::error::Error>> {
        let file = File::create(filename)?;
        let mut writer = csv::Writer::from_writer(file);

        writer.write_record(&self.columns)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }

        writer.flush()?;
        info!("Data saved to {}", filename);
        Ok(())
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.len()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.len());
            }
        }

        let header: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{:<width$}", c, width = widths[i]))
            .collect();
        writeln!(f, "{}", header.join("  "))?;

        for row in &self.rows {
            let cells: Vec<String> = row
                .iter()
                .enumerate()
                .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
                .collect();
            writeln!(f, "{}", cells.join("  "))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(a: &str, b: &str) -> Vec<String> {
        vec![a.to_string(), b.to_string()]
    }

    fn sample() -> Table {
        let mut table = Table::new(vec!["Common Name".to_string(), "Date Observed".to_string()]);
        table.push_row(row("Veery", "2024-05-01"));
        table.push_row(row("Wood Thrush", "2024-05-01"));
        table.push_row(row("Veery", "2024-05-01"));
        table
    }

    #[test]
    fn test_dedup_keeps_first_occurrence_order() {
        let mut table = sample();
        table.dedup_rows();
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[0][0], "Veery");
        assert_eq!(table.rows()[1][0], "Wood Thrush");
    }

    #[test]
    fn test_dedup_requires_full_row_equality() {
        let mut table = sample();
        table.push_row(row("Veery", "2024-05-02"));
        table.dedup_rows();
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_empty_table_keeps_columns() {
        let table = Table::new(vec!["Common Name".to_string()]);
        assert!(table.is_empty());
        assert_eq!(table.columns(), ["Common Name"]);
    }

    #[test]
    fn test_display_includes_header_and_rows() {
        let rendered = sample().to_string();
        let mut lines = rendered.lines();
        assert!(lines.next().unwrap().starts_with("Common Name"));
        assert!(lines.next().unwrap().starts_with("Veery"));
    }
}
