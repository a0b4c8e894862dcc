//! Tabular bodies for table blocks.
//!
//! [`emit_table`](super::emit_table) treats the body as opaque text. Anything
//! that can produce that text implements [`TabularMarkup`]; [`DataTable`] is a
//! column-oriented implementation rendering a booktabs `tabular`.

use crate::config::TableDefaults;
use crate::error::{FormatError, Result};
use std::collections::HashMap;
use std::fmt;

/// Source of pre-rendered table body markup.
///
/// Implementations outside this crate should report their own failures
/// through [`Error::collaborator`](crate::Error::collaborator) so they reach
/// the caller unchanged.
pub trait TabularMarkup {
    fn render_markup(&self) -> Result<String>;
}

impl TabularMarkup for str {
    fn render_markup(&self) -> Result<String> {
        Ok(self.to_string())
    }
}

impl TabularMarkup for String {
    fn render_markup(&self) -> Result<String> {
        Ok(self.clone())
    }
}

/// A single table cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Number(f64),
    Text(String),
    Missing,
}

impl From<f64> for Cell {
    fn from(x: f64) -> Self {
        Cell::Number(x)
    }
}

impl From<Option<f64>> for Cell {
    fn from(x: Option<f64>) -> Self {
        x.map_or(Cell::Missing, Cell::Number)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

/// A named column of cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub cells: Vec<Cell>,
}

impl Column {
    pub fn new<I, C>(name: impl Into<String>, cells: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        Self {
            name: name.into(),
            cells: cells.into_iter().map(Into::into).collect(),
        }
    }

    fn is_numeric(&self) -> bool {
        self.cells
            .iter()
            .all(|cell| matches!(cell, Cell::Number(_) | Cell::Missing))
    }
}

/// Per-column number formatter, e.g. `|x| fixed(x, 3)`.
pub type Formatter = Box<dyn Fn(f64) -> Result<String> + Send + Sync>;

/// Column-oriented table data rendered as a booktabs `tabular`.
///
/// # Example
///
/// ```rust
/// use texfrag::{fixed, Column, DataTable, TabularMarkup};
///
/// let table = DataTable::new()
///     .with_column(Column::new("step", [1.0, 2.0]))
///     .with_column(Column::new("load", [Some(12.5), None]))
///     .with_formatter("step", |x| fixed(x, 0))
///     .with_formatter("load", |x| fixed(x, 1))
///     .with_na_rep("--");
///
/// let body = table.render_markup().unwrap();
/// assert!(body.contains("1 & 12.5 \\\\"));
/// assert!(body.contains("2 & -- \\\\"));
/// ```
#[derive(Default)]
pub struct DataTable {
    columns: Vec<Column>,
    na_rep: String,
    formatters: HashMap<String, Formatter>,
    header: Option<Vec<String>>,
    column_format: Option<String>,
    escape: bool,
    index: bool,
}

impl fmt::Debug for DataTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut formatted: Vec<&String> = self.formatters.keys().collect();
        formatted.sort();

        f.debug_struct("DataTable")
            .field("columns", &self.columns)
            .field("na_rep", &self.na_rep)
            .field("formatters", &formatted)
            .field("header", &self.header)
            .field("column_format", &self.column_format)
            .field("escape", &self.escape)
            .field("index", &self.index)
            .finish()
    }
}

impl DataTable {
    /// An empty table that escapes text cells and has no index column.
    pub fn new() -> Self {
        Self {
            escape: true,
            ..Self::default()
        }
    }

    /// An empty table using the configured missing-value text.
    pub fn from_config(defaults: &TableDefaults) -> Self {
        Self::new().with_na_rep(defaults.na_rep.clone())
    }

    pub fn with_column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Text written for missing cells, and for NaN in columns without a
    /// formatter.
    pub fn with_na_rep(mut self, na_rep: impl Into<String>) -> Self {
        self.na_rep = na_rep.into();
        self
    }

    /// Format the numbers of `column` with `formatter`. Its output is
    /// written as-is, never escaped.
    pub fn with_formatter<F>(mut self, column: impl Into<String>, formatter: F) -> Self
    where
        F: Fn(f64) -> Result<String> + Send + Sync + 'static,
    {
        self.formatters.insert(column.into(), Box::new(formatter));
        self
    }

    /// Replace the column names in the header row. Entries are written
    /// as-is, so they may carry markup such as `{$\sigma$ [\si{kPa}]}`.
    pub fn with_header<I, S>(mut self, header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.header = Some(header.into_iter().map(Into::into).collect());
        self
    }

    /// Column specification such as `lrr`, replacing the inferred one.
    pub fn with_column_format(mut self, format: impl Into<String>) -> Self {
        self.column_format = Some(format.into());
        self
    }

    /// Escape LaTeX special characters in text cells and column names.
    pub fn with_escape(mut self, escape: bool) -> Self {
        self.escape = escape;
        self
    }

    /// Prepend a zero-based row number column.
    pub fn with_index(mut self, index: bool) -> Self {
        self.index = index;
        self
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Rows in the longest column. Shorter columns pad with missing cells.
    pub fn row_count(&self) -> usize {
        self.columns.iter().map(|c| c.cells.len()).max().unwrap_or(0)
    }

    fn header_cells(&self) -> Result<Vec<String>> {
        match &self.header {
            Some(header) if header.len() != self.columns.len() => {
                Err(FormatError::HeaderLength {
                    expected: self.columns.len(),
                    given: header.len(),
                }
                .into())
            }
            Some(header) => Ok(header.clone()),
            None => Ok(self
                .columns
                .iter()
                .map(|c| self.text(&c.name))
                .collect()),
        }
    }

    fn column_format(&self) -> String {
        if let Some(format) = &self.column_format {
            return format.clone();
        }

        let mut format = String::new();
        if self.index {
            format.push('l');
        }
        for column in &self.columns {
            format.push(if column.is_numeric() { 'r' } else { 'l' });
        }
        format
    }

    fn cell(&self, column: &Column, row: usize) -> Result<String> {
        match column.cells.get(row).unwrap_or(&Cell::Missing) {
            Cell::Missing => Ok(self.na_rep.clone()),
            Cell::Text(s) => Ok(self.text(s)),
            // formatters see every number, NaN included
            Cell::Number(x) => match self.formatters.get(&column.name) {
                Some(formatter) => formatter(*x),
                None if x.is_nan() => Ok(self.na_rep.clone()),
                None => Ok(x.to_string()),
            },
        }
    }

    fn text(&self, s: &str) -> String {
        if self.escape {
            escape_latex(s)
        } else {
            s.to_string()
        }
    }
}

impl TabularMarkup for DataTable {
    fn render_markup(&self) -> Result<String> {
        let mut header = self.header_cells()?;
        if self.index {
            header.insert(0, "{}".to_string());
        }

        let mut out = String::new();
        out.push_str(&format!("\\begin{{tabular}}{{{}}}\n", self.column_format()));
        out.push_str("\\toprule\n");
        out.push_str(&header.join(" & "));
        out.push_str(" \\\\\n\\midrule\n");

        for row in 0..self.row_count() {
            let mut cells = Vec::with_capacity(self.columns.len() + 1);
            if self.index {
                cells.push(row.to_string());
            }
            for column in &self.columns {
                cells.push(self.cell(column, row)?);
            }
            out.push_str(&cells.join(" & "));
            out.push_str(" \\\\\n");
        }

        out.push_str("\\bottomrule\n\\end{tabular}\n");
        Ok(out)
    }
}

/// Escape characters with special meaning in LaTeX text mode.
pub fn escape_latex(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\textbackslash{}"),
            '~' => result.push_str("\\textasciitilde{}"),
            '^' => result.push_str("\\textasciicircum{}"),
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                result.push('\\');
                result.push(c);
            }
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::format::{fixed, scientific};
    use pretty_assertions::assert_eq;

    fn sample() -> DataTable {
        DataTable::new()
            .with_column(Column::new("Parameter", ["Name", "Depth"]))
            .with_column(Column::new("Value", ["A_1", "2.5 m"]))
    }

    #[test]
    fn test_text_table() {
        assert_eq!(
            sample().render_markup().unwrap(),
            r"\begin{tabular}{ll}
\toprule
Parameter & Value \\
\midrule
Name & A\_1 \\
Depth & 2.5 m \\
\bottomrule
\end{tabular}
"
        );
    }

    #[test]
    fn test_numeric_columns_with_formatters() {
        let table = DataTable::new()
            .with_column(Column::new("step", [1.0, 2.0]))
            .with_column(Column::new("Cv", [Some(1.5e-7), None]))
            .with_column(Column::new("K", vec![Some(2500.0)]))
            .with_formatter("step", |x| fixed(x, 0))
            .with_formatter("Cv", |x| scientific(x, 2, true))
            .with_na_rep("--");

        let body = table.render_markup().unwrap();
        assert!(body.starts_with("\\begin{tabular}{rrr}\n"));
        assert!(body.contains("step & Cv & K \\\\\n"));
        assert!(body.contains("1 & \\num{1.50e-07} & 2500 \\\\\n"));
        assert!(body.contains("2 & -- & -- \\\\\n"));
    }

    #[test]
    fn test_nan_reaches_column_formatter() {
        let table = DataTable::new()
            .with_column(Column::new("x", [f64::NAN, 2.0]))
            .with_column(Column::new("y", [f64::NAN, 3.0]))
            .with_formatter("x", |x| {
                Ok(if x.is_nan() { "n.d.".to_string() } else { fixed(x, 1)? })
            })
            .with_na_rep("--");

        let body = table.render_markup().unwrap();
        assert!(body.contains("n.d. & -- \\\\\n"));
        assert!(body.contains("2.0 & 3 \\\\\n"));
    }

    #[test]
    fn test_nan_through_fixed_is_empty() {
        let table = DataTable::new()
            .with_column(Column::new("x", [f64::NAN]))
            .with_formatter("x", |x| fixed(x, 2))
            .with_na_rep("--");

        assert!(table.render_markup().unwrap().contains("\\midrule\n \\\\\n"));
    }

    #[test]
    fn test_header_override_and_column_format() {
        let table = sample()
            .with_header(["{Parameter}", "{$\\sigma$}"])
            .with_column_format("lc");

        let body = table.render_markup().unwrap();
        assert!(body.starts_with("\\begin{tabular}{lc}\n"));
        assert!(body.contains("{Parameter} & {$\\sigma$} \\\\\n"));
    }

    #[test]
    fn test_header_length_mismatch() {
        let result = sample().with_header(["only one"]).render_markup();
        assert!(matches!(
            result,
            Err(Error::Format(FormatError::HeaderLength {
                expected: 2,
                given: 1
            }))
        ));
    }

    #[test]
    fn test_index_column() {
        let body = sample().with_index(true).render_markup().unwrap();
        assert!(body.starts_with("\\begin{tabular}{lll}\n"));
        assert!(body.contains("{} & Parameter & Value \\\\\n"));
        assert!(body.contains("0 & Name & A\\_1 \\\\\n"));
        assert!(body.contains("1 & Depth & 2.5 m \\\\\n"));
    }

    #[test]
    fn test_escape_disabled() {
        let body = sample().with_escape(false).render_markup().unwrap();
        assert!(body.contains("Name & A_1 \\\\"));
    }

    #[test]
    fn test_formatter_error_propagates() {
        let table = DataTable::new()
            .with_column(Column::new("x", [1.0]))
            .with_formatter("x", |x| fixed(x, -2));

        assert!(matches!(
            table.render_markup(),
            Err(Error::Format(FormatError::NegativeDigits(-2)))
        ));
    }

    #[test]
    fn test_escape_latex() {
        assert_eq!(escape_latex("50% of $x_1$"), "50\\% of \\$x\\_1\\$");
        assert_eq!(escape_latex("a~b^c"), "a\\textasciitilde{}b\\textasciicircum{}c");
        assert_eq!(escape_latex("\\{}"), "\\textbackslash{}\\{\\}");
        assert_eq!(escape_latex("R&D #1"), "R\\&D \\#1");
    }

    #[test]
    fn test_from_config() {
        let defaults = TableDefaults {
            na_rep: "n/a".into(),
            ..TableDefaults::default()
        };
        let table = DataTable::from_config(&defaults)
            .with_column(Column::new("x", [Cell::Missing]));

        assert!(table.render_markup().unwrap().contains("n/a \\\\"));
    }
}
