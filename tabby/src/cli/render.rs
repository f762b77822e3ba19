use std::{io::Read, path::PathBuf};

use clap::Args;
use snafu::{ResultExt, ensure};
use tabby::Table;

use crate::{
    cli::{Error, error},
    config::Config,
    ui,
};

/// Renders delimited text as a table.
///
/// The first non-blank line is the header, every following non-blank line a
/// row.
#[derive(Args, Clone)]
pub struct RenderCommand {
    #[arg(help = "Input file, reads stdin when omitted")]
    file: Option<PathBuf>,

    #[arg(
        long = "delimiter",
        short = 'd',
        help = "Field separator of the input, `\\t` denotes a tab. Defaults to the configured \
                delimiter."
    )]
    delimiter: Option<String>,

    #[arg(long = "padding", help = "String appended to the right of short cells")]
    padding: Option<String>,

    #[arg(long = "spacing", help = "String placed between cells")]
    spacing: Option<String>,
}

impl RenderCommand {
    /// Reads the input, builds the table and writes it to standard output.
    ///
    /// # Errors
    ///
    /// Returns an `Error` if the input cannot be read, a record has more
    /// fields than the header, or standard output cannot be written.
    pub fn run(self, config: Config) -> Result<(), Error> {
        let Self { file, delimiter, padding, spacing } = self;

        let delimiter = unescape_delimiter(&delimiter.unwrap_or(config.delimiter));
        ensure!(!delimiter.is_empty(), error::EmptyDelimiterSnafu);

        let table_config = tabby::Config {
            padding: padding.unwrap_or(config.table.padding),
            spacing: spacing.unwrap_or(config.table.spacing),
        };

        let input = match file {
            Some(path) => {
                std::fs::read_to_string(&path).context(error::ReadInputSnafu { path })?
            }
            None => {
                let mut input = String::new();
                let _size = std::io::stdin()
                    .lock()
                    .read_to_string(&mut input)
                    .context(error::ReadStdinSnafu)?;
                input
            }
        };

        let Some(table) = parse_records(&input, &delimiter)? else {
            tracing::warn!("Input has no records, nothing to render");
            return Ok(());
        };
        tracing::info!(rows = table.row_count(), "Render table");

        ui::write_lines(std::io::stdout().lock(), &table.print(Some(&table_config)))
            .context(error::WriteStdoutSnafu)
    }
}

/// Splits `input` into records; returns `None` when there is no header line.
fn parse_records(input: &str, delimiter: &str) -> Result<Option<Table>, Error> {
    let mut records = input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| (index + 1, line.split(delimiter)));

    let Some((line, header)) = records.next() else {
        return Ok(None);
    };
    let mut table = Table::with_header(header).context(error::BuildTableSnafu { line })?;

    for (line, row) in records {
        table.append_row(row).context(error::BuildTableSnafu { line })?;
    }

    Ok(Some(table))
}

fn unescape_delimiter(delimiter: &str) -> String { delimiter.replace("\\t", "\t") }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_records() {
        let table = parse_records("name\tage\nAda\t36\n\nLinus\n", "\t").unwrap().unwrap();

        assert_eq!(table.header(), ["name", "age"]);
        assert_eq!(table.rows(), [vec!["Ada", "36"], vec!["Linus"]]);
        assert_eq!(table.print(None), ["name   age", "Ada    36 ", "Linus"]);
    }

    #[test]
    fn test_parse_records_of_blank_input() {
        assert!(parse_records("", ",").unwrap().is_none());
        assert!(parse_records("\n  \n", ",").unwrap().is_none());
    }

    #[test]
    fn test_parse_records_reports_line_of_wide_row() {
        let err = parse_records("a,b\n\n1,2\n1,2,3\n", ",").unwrap_err();
        assert!(matches!(
            err,
            Error::BuildTable {
                line: 4,
                source: tabby::Error::RowTooWide { cells: 3, columns: 2, .. }
            }
        ));
    }

    #[test]
    fn test_parse_records_keeps_escape_sequences() {
        let input = "\x1b[4mFIRST\x1b[0m,\x1b[4mSECOND\x1b[0m\nuno,dos";
        let table = parse_records(input, ",").unwrap().unwrap();
        assert_eq!(tabby::compute_column_widths(&table), [5, 6]);
    }

    #[test]
    fn test_unescape_delimiter() {
        assert_eq!(unescape_delimiter("\\t"), "\t");
        assert_eq!(unescape_delimiter(";"), ";");
    }
}
