mod config;

use std::fmt;

use snafu::ensure;

pub use self::config::Config;
use crate::{
    error::{self, Error},
    format,
};

/// Cells of the header line.
pub type Header = Vec<String>;

/// Cells of a row line.
pub type Row = Vec<String>;

/// A left-aligned table.
///
/// The header defines the number and order of columns. Rows may have fewer
/// cells than the header, never more.
///
/// # Examples
///
/// ```rust
/// use tabby::Table;
///
/// let mut table = Table::with_header(["\x1b[4mFIRST\x1b[0m", "\x1b[4mSECOND\x1b[0m"])?;
/// table.append_row(["eins \x1b[4;33mzwei\x1b[0m drei", "vier"])?;
///
/// for line in table.print(None) {
///     println!("{line}");
/// }
/// # Ok::<(), tabby::Error>(())
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Table {
    header: Header,
    rows: Vec<Row>,
}

impl Table {
    /// Creates a table with neither header nor rows.
    #[must_use]
    pub const fn new() -> Self { Self { header: Vec::new(), rows: Vec::new() } }

    /// Creates a table with the given header.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidHeader`] if `header` has no cells.
    pub fn with_header<I, S>(header: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::new();
        table.set_header(header)?;
        Ok(table)
    }

    /// Replaces the header and clears all accumulated rows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidHeader`] if `header` has no cells. The table is
    /// left untouched in that case.
    pub fn set_header<I, S>(&mut self, header: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let header = header.into_iter().map(Into::into).collect::<Header>();
        ensure!(!header.is_empty(), error::InvalidHeaderSnafu);

        tracing::debug!(
            columns = header.len(),
            dropped_rows = self.rows.len(),
            "Reset table header"
        );
        self.header = header;
        self.rows.clear();
        Ok(())
    }

    /// Appends a row.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RowTooWide`] if the row has more cells than the header.
    /// The row is not stored and the table stays usable.
    pub fn append_row<I, S>(&mut self, row: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row = row.into_iter().map(Into::into).collect::<Row>();
        ensure!(
            row.len() <= self.header.len(),
            error::RowTooWideSnafu { cells: row.len(), columns: self.header.len(), row }
        );

        tracing::trace!(cells = row.len(), "Append table row");
        self.rows.push(row);
        Ok(())
    }

    /// Returns the header cells.
    #[inline]
    #[must_use]
    pub fn header(&self) -> &[String] { &self.header }

    /// Returns the rows in insertion order.
    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[Row] { &self.rows }

    /// Returns the number of rows, not counting the header.
    #[inline]
    #[must_use]
    pub fn row_count(&self) -> usize { self.rows.len() }

    /// Returns `true` if no row has been appended.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Renders the table into lines, header first, then every row in insertion
    /// order.
    ///
    /// Column widths are measured over the whole table on every call.
    /// `config` falls back to [`Config::default`] when `None`.
    #[must_use]
    pub fn print(&self, config: Option<&Config>) -> Vec<String> {
        let default_config;
        let Config { padding, spacing } = match config {
            Some(config) => config,
            None => {
                default_config = Config::default();
                &default_config
            }
        };

        let widths = format::compute_column_widths(self);
        tracing::debug!(?widths, rows = self.rows.len(), "Print table");

        std::iter::once(&self.header)
            .chain(&self.rows)
            .map(|cells| format::format_line(cells.as_slice(), &widths, padding, spacing))
            .collect()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.print(None).join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_header_rejects_empty() {
        let mut table = Table::new();
        assert_eq!(table.set_header(Vec::<String>::new()), Err(Error::InvalidHeader));
        assert!(table.header().is_empty());
    }

    #[test]
    fn test_set_header() {
        let mut table = Table::new();
        table.set_header(["first"]).unwrap();
        assert_eq!(table.header(), ["first"]);

        table.set_header(["first", "second"]).unwrap();
        assert_eq!(table.header(), ["first", "second"]);
    }

    #[test]
    fn test_set_header_clears_rows() {
        let mut table = Table::with_header(["one", "two"]).unwrap();
        table.append_row(["1", "2"]).unwrap();

        table.set_header(["three"]).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.header(), ["three"]);
    }

    #[test]
    fn test_failed_set_header_keeps_table() {
        let mut table = Table::with_header(["one"]).unwrap();
        table.append_row(["1"]).unwrap();

        assert!(table.set_header(Vec::<&str>::new()).is_err());
        assert_eq!(table.header(), ["one"]);
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn test_append_row() {
        let mut table = Table::with_header(["one", "two"]).unwrap();
        table.append_row(["first", "second"]).unwrap();
        table.append_row(["first"]).unwrap();
        table.append_row(Vec::<String>::new()).unwrap();

        assert_eq!(table.row_count(), 3);
        assert_eq!(table.rows()[1], ["first"]);
    }

    #[test]
    fn test_append_row_too_wide() {
        let mut table = Table::with_header(["one"]).unwrap();
        let err = table.append_row(["first", "second"]).unwrap_err();

        assert_eq!(
            err,
            Error::RowTooWide {
                cells: 2,
                columns: 1,
                row: vec!["first".to_string(), "second".to_string()]
            }
        );
        assert!(err.to_string().contains("Number of cells 2"));
        assert!(err.to_string().contains("in the header 1"));
        assert_eq!(table.row_count(), 0);

        table.append_row(["first"]).unwrap();
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn test_append_row_without_header() {
        let mut table = Table::new();
        table.append_row(Vec::<String>::new()).unwrap();
        assert!(table.append_row(["first"]).is_err());
    }

    #[test]
    fn test_print_short_rows() {
        let mut table = Table::with_header(["A", "B"]).unwrap();
        table.append_row(["1"]).unwrap();
        table.append_row(["22"]).unwrap();

        assert_eq!(table.print(None), ["A   B", "1 ", "22"]);
    }

    #[test]
    fn test_print_with_ansi_header() {
        let mut table =
            Table::with_header(["\x1b[4mFIRST\x1b[0m", "\x1b[4mSECOND\x1b[0m"]).unwrap();
        table.append_row(["uno", "dos"]).unwrap();

        assert_eq!(
            table.print(None),
            ["\x1b[4mFIRST\x1b[0m  \x1b[4mSECOND\x1b[0m", "uno    dos   "]
        );
    }

    #[test]
    fn test_print_with_config() {
        let mut table = Table::with_header(["name", "n"]).unwrap();
        table.append_row(["ab", "123"]).unwrap();
        let config = Config { padding: ".".to_string(), spacing: " | ".to_string() };

        assert_eq!(table.print(Some(&config)), ["name | n..", "ab.. | 123"]);
    }

    #[test]
    fn test_print_empty_table() {
        let table = Table::with_header(["only", "header"]).unwrap();
        assert_eq!(table.print(None), ["only  header"]);
    }

    #[test]
    fn test_print_is_repeatable() {
        let mut table = Table::with_header(["a"]).unwrap();
        table.append_row(["b"]).unwrap();
        assert_eq!(table.print(None), table.print(None));

        table.append_row(["longer"]).unwrap();
        assert_eq!(table.print(None), ["a     ", "b     ", "longer"]);
    }

    #[test]
    fn test_display() {
        let mut table = Table::with_header(["x", "y"]).unwrap();
        table.append_row(["1", "2"]).unwrap();
        assert_eq!(table.to_string(), "x  y\n1  2");
    }
}
