//! Rendering of the ANSI palette.

use tabby::Table;

use crate::consts::ansi::RESET;

/// Extension trait for `(name, escape)` pairs.
pub trait PaletteExt {
    /// Builds a table with one row per escape sequence: its name, a sample
    /// text rendered with it, and the escaped literal.
    ///
    /// # Errors
    ///
    /// Propagates table validation errors.
    fn to_table(&self) -> Result<Table, tabby::Error>;
}

impl PaletteExt for [(&str, &str)] {
    fn to_table(&self) -> Result<Table, tabby::Error> {
        let mut table = Table::with_header(["NAME", "SAMPLE", "ESCAPE"])?;
        for (name, code) in self {
            table.append_row([
                (*name).to_string(),
                format!("{code}Tabby{RESET}"),
                code.escape_debug().to_string(),
            ])?;
        }
        Ok(table)
    }
}
