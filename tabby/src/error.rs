use snafu::Snafu;

/// Errors raised while building a [`Table`](crate::Table).
#[derive(Clone, Debug, Eq, PartialEq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// A header with no cells was supplied.
    #[snafu(display("No header provided, a table needs at least one column"))]
    InvalidHeader,

    /// A row has more cells than the header has columns. The row is not
    /// stored.
    #[snafu(display(
        "Number of cells {cells} in the row {row:?} exceeds the number of cells in the header \
         {columns}"
    ))]
    RowTooWide { cells: usize, columns: usize, row: Vec<String> },
}
