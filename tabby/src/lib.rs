//! Left-aligned tables for the terminal.
//!
//! Cells may carry ANSI color and formatting sequences: widths are measured on
//! the visible text only, so escape codes never distort the alignment.
//!
//! ```rust
//! use tabby::{Config, Table};
//!
//! let mut table = Table::with_header(["Something", "One mo\x1b[0;31mr\x1b[0me"])?;
//! table.append_row(["first", "seco\x1b[0;31mn\x1b[0md_garbage67890"])?;
//!
//! let config = Config { padding: ".".to_string(), ..Config::default() };
//! let lines = table.print(Some(&config));
//! assert_eq!(lines.len(), 2);
//! assert_eq!(tabby::visible_width(&lines[0]), tabby::visible_width(&lines[1]));
//! # Ok::<(), tabby::Error>(())
//! ```

mod ansi;
mod error;
mod format;
mod table;

pub use self::{
    ansi::{strip_ansi, visible_width},
    error::Error,
    format::{compute_column_widths, format_line, pad_right},
    table::{Config, Header, Row, Table},
};
