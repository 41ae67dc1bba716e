//! Result rendering
//!
//! Commands build a serialisable report and hand it to [`emit`], which
//! prints either a box-drawn table or pretty JSON.

use serde::Serialize;

use crate::config::OutputFormat;
use crate::Result;

/// A command result that can be printed in either output format
pub trait Report: Serialize {
    /// Plain-text table form
    fn to_table(&self) -> Table;

    /// Full text rendering; reports made of several tables override this
    fn to_text(&self) -> String {
        self.to_table().to_string()
    }
}

/// Prints `report` to stdout in `format`
pub fn emit<R: Report>(report: &R, format: OutputFormat) -> Result<()> {
    println!("{}", render(report, format)?);
    Ok(())
}

/// Renders `report` without printing it
pub fn render<R: Report>(report: &R, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Table => report.to_text(),
        OutputFormat::Json => serde_json::to_string_pretty(report)?,
    })
}

/// Box-drawn table with a header row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a row; missing cells render empty and extra cells are dropped
    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut cells: Vec<String> = cells.into_iter().map(Into::into).collect();
        cells.resize(self.headers.len(), String::new());
        self.rows.push(cells);
        self
    }

    fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .map(|row| row[i].chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }
}

fn border(widths: &[usize], left: char, mid: char, right: char) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{}{}{}", left, segments.join(mid.to_string().as_str()), right)
}

fn line(widths: &[usize], cells: &[String]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &w)| format!(" {:<w$} ", cell, w = w))
        .collect();
    format!("│{}│", padded.join("│"))
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let widths = self.widths();
        writeln!(f, "{}", border(&widths, '┌', '┬', '┐'))?;
        writeln!(f, "{}", line(&widths, &self.headers))?;
        writeln!(f, "{}", border(&widths, '├', '┼', '┤'))?;
        for row in &self.rows {
            writeln!(f, "{}", line(&widths, row))?;
        }
        write!(f, "{}", border(&widths, '└', '┴', '┘'))
    }
}

/// Formats a price-like number
pub fn money(value: f64) -> String {
    format!("{:.4}", value)
}

/// Formats a rate or volatility as a percentage
pub fn percent(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}
